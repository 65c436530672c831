//! PDF backend for receipt documents, built on `printpdf`.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Pt, Rect,
};

use super::document::{DocumentCanvas, DocumentError, DocumentGenerator, Rgb, PAGE_HEIGHT, PAGE_WIDTH};

const LAYER_NAME: &str = "Receipt";

/// A4 PDF documents using the built-in Helvetica faces
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfGenerator;

impl DocumentGenerator for PdfGenerator {
    fn new_document(&self, title: &str) -> Result<Box<dyn DocumentCanvas>, DocumentError> {
        Ok(Box::new(PdfCanvas::new(title)?))
    }
}

pub struct PdfCanvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    font_size: f32,
    use_bold: bool,
    text_color: Rgb,
}

fn page_size() -> (Mm, Mm) {
    (Mm::from(Pt(PAGE_WIDTH)), Mm::from(Pt(PAGE_HEIGHT)))
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(rgb.0, rgb.1, rgb.2, None))
}

/// Layout uses a top-left origin; PDF measures from the bottom-left.
fn flip(y: f32) -> Mm {
    Mm::from(Pt(PAGE_HEIGHT - y))
}

impl PdfCanvas {
    pub fn new(title: &str) -> Result<Self, DocumentError> {
        let (width, height) = page_size();
        let (doc, page, layer) = PdfDocument::new(title, width, height, LAYER_NAME);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| DocumentError::Create(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| DocumentError::Create(e.to_string()))?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            font_size: 10.0,
            use_bold: false,
            text_color: Rgb(0.0, 0.0, 0.0),
        })
    }
}

impl DocumentCanvas for PdfCanvas {
    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_bold(&mut self, bold: bool) {
        self.use_bold = bold;
    }

    fn set_text_color(&mut self, rgb: Rgb) {
        self.text_color = rgb;
        self.layer.set_fill_color(color(rgb));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rgb: Rgb) {
        self.layer.set_fill_color(color(rgb));
        let rect = Rect::new(
            Mm::from(Pt(x)),
            flip(y + height),
            Mm::from(Pt(x + width)),
            flip(y),
        )
        .with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
        self.layer.set_fill_color(color(self.text_color));
    }

    fn text(&mut self, text: &str, x: f32, y: f32) {
        let font = if self.use_bold { &self.bold } else { &self.regular };
        self.layer
            .use_text(text, self.font_size, Mm::from(Pt(x)), flip(y), font);
    }

    fn add_page(&mut self) {
        let (width, height) = page_size();
        let (page, layer) = self.doc.add_page(width, height, LAYER_NAME);
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.layer.set_fill_color(color(self.text_color));
    }

    fn finish(self: Box<Self>) -> Result<Vec<u8>, DocumentError> {
        let PdfCanvas { doc, layer, .. } = *self;
        drop(layer);
        doc.save_to_bytes()
            .map_err(|e| DocumentError::Write(e.to_string()))
    }
}
