//! shelfmark renderer.
//!
//! Realizes a [`LayoutPlan`] from `shelfmark_core` into a binary document by
//! driving a [`PageCanvas`]: one QR bitmap and one text line per placement,
//! plus the separator strokes. [`generate_document`] runs the whole
//! configuration → addresses → layout → PDF pipeline in one call.
//!
//! Failure policy (fixed): a QR encoding failure degrades that one label —
//! its text still prints, the bitmap is omitted, and the failure lands in
//! the report. Layout failures are fatal and produce no document.

#![warn(missing_docs)]

/// The opaque page-canvas capability and its PDF implementation.
pub mod canvas;
/// Typed renderer errors.
pub mod error;
/// QR payload encoding.
pub mod qr;

pub use canvas::{PageCanvas, PdfCanvas};
pub use error::{EncodeError, RenderError};
pub use qr::{QrBitmap, encode};

use shelfmark_core::{GenConfig, LayoutPlan, PatternError, RenderConfig};

// ── Reports ─────────────────────────────────────────────────────────────

/// What one canvas pass actually drew.
#[derive(Debug, Clone, Default)]
pub struct RenderReport {
    /// Labels drawn (degraded ones included).
    pub labels: usize,
    /// Pages opened on the canvas.
    pub pages: usize,
    /// Per-label QR failures; each named label rendered without a bitmap.
    pub failures: Vec<EncodeError>,
}

/// Everything a host needs to surface after a full generation run: counts
/// plus every per-item problem that was skipped along the way.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Labels placed on the sheet.
    pub labels: usize,
    /// Pages in the document.
    pub pages: usize,
    /// Address patterns that failed to expand and were skipped.
    pub pattern_skips: Vec<PatternError>,
    /// Labels whose QR bitmap could not be encoded.
    pub encode_skips: Vec<EncodeError>,
}

impl RunReport {
    /// True when every item made it onto the sheet intact.
    pub fn is_clean(&self) -> bool {
        self.pattern_skips.is_empty() && self.encode_skips.is_empty()
    }
}

/// A finished document plus its run report.
#[derive(Debug, Clone)]
pub struct Document {
    /// The serialized PDF.
    pub pdf: Vec<u8>,
    /// Counts and per-item skips for the run.
    pub report: RunReport,
}

// ── Rendering ───────────────────────────────────────────────────────────

/// Draw a layout plan onto a canvas, in placement order.
///
/// A zero-placement plan still opens one blank page so the exported
/// document stays well-formed.
pub fn render_into(
    canvas: &mut dyn PageCanvas,
    plan: &LayoutPlan,
    render: &RenderConfig,
) -> RenderReport {
    let mut report = RenderReport::default();

    canvas.add_page();
    report.pages = 1;
    let mut current_page = 0usize;

    for placement in &plan.placements {
        while placement.page > current_page {
            canvas.add_page();
            report.pages += 1;
            current_page += 1;
        }

        match qr::encode(&placement.label.qr_data, render.qrcode_resolution) {
            Ok(bitmap) => canvas.place_image(
                &bitmap,
                placement.qr_x,
                placement.qr_y,
                placement.qr_size,
                placement.qr_size,
            ),
            Err(err) => report.failures.push(err),
        }

        canvas.place_text(
            placement.text_x,
            placement.text_y,
            render.font_size,
            &placement.label.text,
        );

        for stroke in &placement.strokes {
            canvas.draw_line(stroke.x1, stroke.y1, stroke.x2, stroke.y2);
        }

        report.labels += 1;
    }

    report
}

/// Run the whole pipeline for one configuration: generate the address list,
/// paginate it, and render a PDF.
///
/// Per-item problems (bad patterns, unencodable payloads) are collected in
/// the report; only [`RenderError`] conditions abort the run.
pub fn generate_document(config: &GenConfig) -> Result<Document, RenderError> {
    let list = shelfmark_core::generate(config);
    let plan = shelfmark_core::plan(&config.render, &list.records)?;

    let mut canvas = PdfCanvas::new(plan.page_width, plan.page_height);
    let rendered = render_into(&mut canvas, &plan, &config.render);

    Ok(Document {
        pdf: canvas.export(),
        report: RunReport {
            labels: rendered.labels,
            pages: rendered.pages,
            pattern_skips: list.skipped,
            encode_skips: rendered.failures,
        },
    })
}
