//! Receipt rendering: the text preview and the downloadable document.

pub mod document;
pub mod pdf;
pub mod text;

pub use document::{render_document, DocumentCanvas, DocumentError, DocumentGenerator, Rgb};
pub use pdf::PdfGenerator;
pub use text::render_text_receipt;
