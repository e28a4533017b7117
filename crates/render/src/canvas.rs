//! The opaque page-canvas capability and its PDF implementation.
//!
//! [`PageCanvas`] is the seam between the pure layout plan and a concrete
//! drawing backend; tests drive the renderer through a recording mock.
//! All canvas coordinates are top-left-origin points (matching the layout
//! engine); [`PdfCanvas`] converts to PDF's bottom-left space when drawing.

use pdf_writer::{Content, Filter, Finish, Name, Pdf, Rect, Ref, Str};

use crate::qr::QrBitmap;

/// Approximate cap-height fraction of the font size, shared with the layout
/// engine's vertical text centering.
const CAP_HEIGHT_DIVISOR: f32 = 1.33;

// ── Capability trait ────────────────────────────────────────────────────

/// A paged drawing surface. One implementation per output backend.
pub trait PageCanvas {
    /// Open a new page; subsequent drawing lands on it.
    fn add_page(&mut self);

    /// Place a grayscale bitmap with its top-left corner at `(x, y)`,
    /// scaled to `w`×`h` points.
    fn place_image(&mut self, bitmap: &QrBitmap, x: f32, y: f32, w: f32, h: f32);

    /// Draw a line of text with its top at `(x, y)`.
    fn place_text(&mut self, x: f32, y: f32, size: f32, text: &str);

    /// Draw one separator line segment.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}

// ── PDF canvas ──────────────────────────────────────────────────────────

/// An image placement deferred until export, when XObject names exist.
struct PlacedImage {
    bitmap: QrBitmap,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
}

/// Per-page draw state accumulated before export.
struct PageBuf {
    content: Content,
    images: Vec<PlacedImage>,
}

/// A [`PageCanvas`] that assembles a PDF document.
///
/// Text uses the built-in Helvetica base font with WinAnsi encoding, which
/// covers ASCII plus the `•` separator glyph. Content streams and image
/// XObjects are Flate-compressed.
pub struct PdfCanvas {
    page_w: f32,
    page_h: f32,
    pages: Vec<PageBuf>,
}

impl PdfCanvas {
    /// Create a canvas for pages of the given size in points.
    pub fn new(page_w: f32, page_h: f32) -> Self {
        Self {
            page_w,
            page_h,
            pages: Vec::new(),
        }
    }

    /// Number of pages opened so far.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn current(&mut self) -> &mut PageBuf {
        if self.pages.is_empty() {
            self.add_page();
        }
        self.pages.last_mut().expect("a page was just ensured")
    }

    /// Assemble and serialize the document.
    pub fn export(self) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let tree_id = alloc.bump();
        let font_id = alloc.bump();

        struct PageRefs {
            page: Ref,
            content: Ref,
            images: Vec<Ref>,
        }
        let refs: Vec<PageRefs> = self
            .pages
            .iter()
            .map(|p| PageRefs {
                page: alloc.bump(),
                content: alloc.bump(),
                images: p.images.iter().map(|_| alloc.bump()).collect(),
            })
            .collect();

        pdf.catalog(catalog_id).pages(tree_id);
        pdf.pages(tree_id)
            .kids(refs.iter().map(|r| r.page))
            .count(refs.len() as i32);
        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (buf, r) in self.pages.into_iter().zip(&refs) {
            let mut content = buf.content;

            // Image placements were deferred so the XObject names could be
            // assigned per page.
            for (i, img) in buf.images.iter().enumerate() {
                let name = format!("Im{i}");
                content.save_state();
                // Unit square maps to w×h at the image's bottom-left corner.
                content.transform([
                    img.w,
                    0.0,
                    0.0,
                    img.h,
                    img.x,
                    self.page_h - img.y - img.h,
                ]);
                content.x_object(Name(name.as_bytes()));
                content.restore_state();
            }

            let mut page = pdf.page(r.page);
            page.media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h));
            page.parent(tree_id);
            page.contents(r.content);
            let mut resources = page.resources();
            resources.fonts().pair(Name(b"F1"), font_id);
            if !r.images.is_empty() {
                let mut xobjects = resources.x_objects();
                for (i, image_ref) in r.images.iter().enumerate() {
                    let name = format!("Im{i}");
                    xobjects.pair(Name(name.as_bytes()), *image_ref);
                }
            }
            resources.finish();
            page.finish();

            let stream = content.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&stream, 6);
            pdf.stream(r.content, &compressed)
                .filter(Filter::FlateDecode);

            for (img, image_ref) in buf.images.iter().zip(&r.images) {
                let bitmap = &img.bitmap;
                let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&bitmap.pixels, 6);
                let mut xobj = pdf.image_xobject(*image_ref, &compressed);
                xobj.filter(Filter::FlateDecode);
                xobj.width(bitmap.width as i32);
                xobj.height(bitmap.height as i32);
                xobj.color_space().device_gray();
                xobj.bits_per_component(8);
            }
        }

        pdf.finish()
    }
}

impl PageCanvas for PdfCanvas {
    fn add_page(&mut self) {
        self.pages.push(PageBuf {
            content: Content::new(),
            images: Vec::new(),
        });
    }

    fn place_image(&mut self, bitmap: &QrBitmap, x: f32, y: f32, w: f32, h: f32) {
        self.current().images.push(PlacedImage {
            bitmap: bitmap.clone(),
            x,
            y,
            w,
            h,
        });
    }

    fn place_text(&mut self, x: f32, y: f32, size: f32, text: &str) {
        let page_h = self.page_h;
        let bytes = to_winansi(text);
        let content = &mut self.current().content;
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.next_line(x, page_h - y - size / CAP_HEIGHT_DIVISOR);
        content.show(Str(&bytes));
        content.end_text();
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        let page_h = self.page_h;
        let content = &mut self.current().content;
        content.save_state();
        content.set_stroke_gray(0.5);
        content.set_line_width(2.0);
        content.set_dash_pattern([2.0, 2.0], 0.0);
        content.move_to(x1, page_h - y1);
        content.line_to(x2, page_h - y2);
        content.stroke();
        content.restore_state();
    }
}

// ── Text encoding ───────────────────────────────────────────────────────

/// Encode text as WinAnsi (CP-1252) bytes for the base-font `Tj` operator.
/// ASCII passes through; the handful of non-ASCII glyphs a shelf address
/// can contain are mapped explicitly; anything else becomes `?`.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{2022}' => 0x95, // •
            '\u{2013}' => 0x96, // –
            '\u{2014}' => 0x97, // —
            '\u{a0}'..='\u{ff}' => c as u8,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winansi_maps_the_separator_glyph() {
        assert_eq!(to_winansi("A01•1"), vec![b'A', b'0', b'1', 0x95, b'1']);
    }

    #[test]
    fn winansi_replaces_unmapped_chars() {
        assert_eq!(to_winansi("日"), vec![b'?']);
    }

    #[test]
    fn export_without_pages_is_still_a_pdf() {
        let bytes = PdfCanvas::new(595.0, 842.0).export();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn drawing_without_add_page_opens_one() {
        let mut canvas = PdfCanvas::new(595.0, 842.0);
        canvas.place_text(10.0, 10.0, 12.0, "X");
        assert_eq!(canvas.page_count(), 1);
    }
}
