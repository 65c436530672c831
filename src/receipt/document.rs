//! Receipt document layout.
//!
//! Layout works in points on an A4 page with the origin at the top-left
//! corner. Drawing goes through [`DocumentCanvas`], so the page layout does
//! not depend on the PDF backend.

use chrono::{DateTime, Utc};

use crate::booking::BookingRecord;
use crate::config::BusinessConfig;

pub const PAGE_WIDTH: f32 = 595.0;
pub const PAGE_HEIGHT: f32 = 842.0;
/// Lines past this y start a new page
pub const PAGE_BREAK_Y: f32 = 720.0;
const TOP_MARGIN: f32 = 40.0;
const LEFT: f32 = 40.0;
const INDENT: f32 = 60.0;
const LINE_HEIGHT: f32 = 14.0;

const NOT_AVAILABLE: &str = "N/A";

/// RGB colour, 0.0 to 1.0 per channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

const BRAND_PINK: Rgb = Rgb::from_u8(225, 29, 114);
const TEXT_GRAY: Rgb = Rgb::from_u8(51, 51, 51);
const PANEL_GRAY: Rgb = Rgb::from_u8(245, 245, 245);
const FOOTER_GRAY: Rgb = Rgb::from_u8(100, 100, 100);
const WHITE: Rgb = Rgb(1.0, 1.0, 1.0);

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to create document: {0}")]
    Create(String),
    #[error("Failed to write document: {0}")]
    Write(String),
}

/// Drawing primitives offered by a document backend
pub trait DocumentCanvas {
    fn set_font_size(&mut self, size: f32);
    fn set_bold(&mut self, bold: bool);
    fn set_text_color(&mut self, color: Rgb);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb);
    fn text(&mut self, text: &str, x: f32, y: f32);
    fn add_page(&mut self);
    fn finish(self: Box<Self>) -> Result<Vec<u8>, DocumentError>;
}

/// Creates blank documents. Held for the process lifetime.
pub trait DocumentGenerator: Send + Sync {
    fn new_document(&self, title: &str) -> Result<Box<dyn DocumentCanvas>, DocumentError>;
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

/// Top-down writer that breaks to a new page instead of clipping
struct Cursor<'a> {
    canvas: &'a mut dyn DocumentCanvas,
    y: f32,
}

impl<'a> Cursor<'a> {
    fn line(&mut self, text: &str, x: f32, advance: f32) {
        if self.y > PAGE_BREAK_Y {
            self.canvas.add_page();
            self.y = TOP_MARGIN;
        }
        self.canvas.text(text, x, self.y);
        self.y += advance;
    }

    fn heading(&mut self, text: &str) {
        self.canvas.set_font_size(12.0);
        self.canvas.set_bold(true);
        self.line(text, LEFT, 16.0);
        self.canvas.set_font_size(10.0);
        self.canvas.set_bold(false);
    }

    fn gap(&mut self, height: f32) {
        self.y += height;
    }

    /// Start a new page unless `height` more points fit on this one
    fn reserve(&mut self, height: f32) {
        if self.y + height > PAGE_BREAK_Y {
            self.canvas.add_page();
            self.y = TOP_MARGIN;
        }
    }
}

/// Lay out a booking record onto a fresh document and return its bytes.
pub fn render_document(
    record: &BookingRecord,
    business: &BusinessConfig,
    generated_at: DateTime<Utc>,
    generator: &dyn DocumentGenerator,
) -> Result<Vec<u8>, DocumentError> {
    let title = format!("{} Booking Receipt", business.business_name);
    let mut canvas = generator.new_document(&title)?;
    draw_receipt(canvas.as_mut(), record, business, generated_at);
    canvas.finish()
}

fn draw_receipt(
    canvas: &mut dyn DocumentCanvas,
    record: &BookingRecord,
    business: &BusinessConfig,
    generated_at: DateTime<Utc>,
) {
    // Header band
    canvas.fill_rect(0.0, 0.0, PAGE_WIDTH, 90.0, BRAND_PINK);
    canvas.set_text_color(WHITE);
    canvas.set_bold(true);
    canvas.set_font_size(24.0);
    canvas.text(&business.business_name, LEFT, 50.0);
    canvas.set_bold(false);
    canvas.set_font_size(12.0);
    canvas.text("Booking Receipt", LEFT, 75.0);
    canvas.set_text_color(TEXT_GRAY);

    let mut cursor = Cursor { canvas, y: 120.0 };

    cursor.canvas.set_font_size(11.0);
    cursor.line(&format!("Reference: {}", or_na(&record.reference)), LEFT, 18.0);
    cursor.line(
        &format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M UTC")),
        LEFT,
        24.0,
    );

    cursor.heading("Customer:");
    cursor.line(&format!("Name: {}", or_na(&record.name)), INDENT, LINE_HEIGHT);
    cursor.line(&format!("Email: {}", or_na(&record.email)), INDENT, LINE_HEIGHT);
    cursor.line(&format!("Phone: {}", or_na(&record.phone)), INDENT, LINE_HEIGHT);
    cursor.line(
        &format!("Region/City: {} / {}", or_na(&record.region), or_na(&record.city)),
        INDENT,
        18.0,
    );

    cursor.heading("Appointment:");
    cursor.line(
        &format!("Date: {}   Time: {}", or_na(&record.date), or_na(&record.time)),
        INDENT,
        LINE_HEIGHT,
    );
    cursor.line(&format!("Notes: {}", or_na(&record.notes)), INDENT, 18.0);

    cursor.heading("Services:");
    if record.services.is_empty() {
        cursor.line("- No services selected", INDENT, LINE_HEIGHT);
    } else {
        for service in &record.services {
            cursor.line(&format!("- {}", service), INDENT, LINE_HEIGHT);
        }
    }

    cursor.gap(6.0);
    cursor.canvas.set_font_size(12.0);
    cursor.canvas.set_bold(true);
    cursor.line(&format!("Total: {}", or_na(&record.total)), LEFT, 16.0);
    cursor.line(
        &format!(
            "Deposit Required ({}%): {}",
            (business.deposit_rate * rust_decimal::Decimal::ONE_HUNDRED).normalize(),
            or_na(&record.deposit)
        ),
        LEFT,
        16.0,
    );
    cursor.canvas.set_bold(false);
    cursor.line(
        &format!("Balance Due: {}", or_na(&record.balance)),
        LEFT,
        24.0,
    );

    // Payment panel
    cursor.reserve(96.0);
    let panel_top = cursor.y - 14.0;
    cursor.canvas.fill_rect(LEFT - 5.0, panel_top, PAGE_WIDTH - 2.0 * LEFT + 10.0, 90.0, PANEL_GRAY);
    cursor.canvas.set_font_size(14.0);
    cursor.canvas.set_bold(true);
    cursor.canvas.set_text_color(BRAND_PINK);
    cursor.line("Payment Instructions", LEFT, 18.0);
    cursor.canvas.set_text_color(TEXT_GRAY);
    cursor.canvas.set_font_size(11.0);
    cursor.canvas.set_bold(false);
    cursor.line("Send your deposit via MTN Mobile Money:", LEFT, LINE_HEIGHT);
    cursor.canvas.set_bold(true);
    cursor.line(&format!("Number: {}", business.momo_number), LEFT, LINE_HEIGHT);
    cursor.line(&format!("Name: {}", business.momo_name), LEFT, LINE_HEIGHT);
    cursor.line(&format!("Amount: {}", or_na(&record.deposit)), LEFT, LINE_HEIGHT);
    cursor.line(&format!("Reference: {}", or_na(&record.reference)), LEFT, 30.0);
    cursor.canvas.set_bold(false);

    // Footer
    cursor.canvas.set_font_size(10.0);
    cursor.canvas.set_text_color(FOOTER_GRAY);
    cursor.line(
        &format!("Thank you for choosing {}!", business.business_name),
        LEFT,
        12.0,
    );
    cursor.line(
        &format!(
            "Contact: {} | {}",
            business.business_email, business.business_phone
        ),
        LEFT,
        12.0,
    );
}
