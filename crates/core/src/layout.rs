//! Pagination and geometric placement.
//!
//! Pure and backend-independent: the engine consumes an ordered label list
//! and a [`RenderConfig`] and returns an immutable [`LayoutPlan`] — one
//! [`Placement`] per label, grouped by ascending page, input order preserved
//! within each page. A renderer realizes the plan without any back-reference
//! into the engine.
//!
//! Coordinates are in PDF points with the origin at the **top-left** of the
//! page and y growing downward; a backend working in bottom-left coordinates
//! converts when drawing.

use serde::{Deserialize, Serialize};

use crate::addr::LabelRecord;
use crate::config::{Orientation, RenderConfig};
use crate::error::LayoutError;

/// A4 page magnitudes in points. Orientation swaps them.
const A4_SHORT: f32 = 595.0;
const A4_LONG: f32 = 842.0;

/// Approximate cap-height fraction of the font size, used to center text
/// vertically against the QR square. Carried over from the original tool.
const CAP_HEIGHT_DIVISOR: f32 = 1.33;

// ── Plan data model ─────────────────────────────────────────────────────

/// One separator line segment between adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Segment start x.
    pub x1: f32,
    /// Segment start y.
    pub y1: f32,
    /// Segment end x.
    pub x2: f32,
    /// Segment end y.
    pub y2: f32,
}

/// Placement of one label: cell geometry, QR and text anchors, separator
/// strokes. Created in generation order, read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Zero-based page index, ascending.
    pub page: usize,
    /// Cell left edge.
    pub x: f32,
    /// Cell top edge.
    pub y: f32,
    /// Cell width.
    pub cell_w: f32,
    /// Cell height.
    pub cell_h: f32,
    /// QR square left edge.
    pub qr_x: f32,
    /// QR square top edge (vertically centered in the cell).
    pub qr_y: f32,
    /// QR square side length.
    pub qr_size: f32,
    /// Text anchor x, immediately right of the QR.
    pub text_x: f32,
    /// Text anchor y (top of the text line).
    pub text_y: f32,
    /// The label this placement realizes.
    pub label: LabelRecord,
    /// Separator segments owned by this cell (right and/or bottom edge).
    pub strokes: Vec<Stroke>,
}

/// The full paginated plan for one label list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    /// Page width in points.
    pub page_width: f32,
    /// Page height in points.
    pub page_height: f32,
    /// Number of pages holding at least one placement. Zero labels make a
    /// zero-page plan; the renderer decides how to represent an empty
    /// document.
    pub page_count: usize,
    /// One placement per input label, grouped by ascending page.
    pub placements: Vec<Placement>,
}

// ── Layout engine ───────────────────────────────────────────────────────

/// Page dimensions for an orientation: vertical is portrait (595×842),
/// horizontal is landscape (842×595).
pub fn page_size(orientation: Orientation) -> (f32, f32) {
    match orientation {
        Orientation::Vertical => (A4_SHORT, A4_LONG),
        Orientation::Horizontal => (A4_LONG, A4_SHORT),
    }
}

/// Paginate a label list into a [`LayoutPlan`].
///
/// Cells fill row-major: left to right within a row, rows top to bottom,
/// a new page whenever the grid is exhausted. An exactly-filled page leaves
/// no trailing empty page; a partial last page emits only the placed cells.
///
/// Fails with [`LayoutError`] when the grid is invalid (`rows` or `columns`
/// zero) or the margins leave a non-positive cell dimension.
pub fn plan(render: &RenderConfig, records: &[LabelRecord]) -> Result<LayoutPlan, LayoutError> {
    if render.rows == 0 || render.columns == 0 {
        return Err(LayoutError::InvalidGrid {
            rows: render.rows,
            columns: render.columns,
        });
    }

    let (page_w, page_h) = page_size(render.orientation);
    let cell_w = (page_w - 2.0 * render.left_right_offsets) / render.columns as f32;
    let cell_h = (page_h - 2.0 * render.top_bot_offsets) / render.rows as f32;
    if cell_w <= 0.0 || cell_h <= 0.0 {
        return Err(LayoutError::DegenerateCell { cell_w, cell_h });
    }

    let rows = render.rows as usize;
    let columns = render.columns as usize;
    let per_page = rows * columns;

    let mut placements = Vec::with_capacity(records.len());
    for (n, label) in records.iter().enumerate() {
        let page = n / per_page;
        // Per-page cell counter, 0-based, row-major.
        let k = n % per_page;
        let row = k / columns;
        let column = k % columns;

        let x = render.left_right_offsets + column as f32 * cell_w;
        let y = render.top_bot_offsets + row as f32 * cell_h;

        let qr_x = x + render.sticker_left_offset;
        let qr_y = y + (cell_h - render.qrcode_size) / 2.0;
        let text_x = qr_x + render.qrcode_size + render.space_between_qr_and_text;
        let text_y = qr_y + (render.qrcode_size - render.font_size / CAP_HEIGHT_DIVISOR) / 2.0;

        let mut strokes = Vec::new();
        if render.add_stroke {
            // No stroke on the sheet's outer right and bottom edges; one
            // stroke on every interior boundary.
            if column != columns - 1 {
                strokes.push(Stroke {
                    x1: x + cell_w,
                    y1: y,
                    x2: x + cell_w,
                    y2: y + cell_h,
                });
            }
            if row != rows - 1 {
                strokes.push(Stroke {
                    x1: x,
                    y1: y + cell_h,
                    x2: x + cell_w,
                    y2: y + cell_h,
                });
            }
        }

        placements.push(Placement {
            page,
            x,
            y,
            cell_w,
            cell_h,
            qr_x,
            qr_y,
            qr_size: render.qrcode_size,
            text_x,
            text_y,
            label: label.clone(),
            strokes,
        });
    }

    Ok(LayoutPlan {
        page_width: page_w,
        page_height: page_h,
        page_count: records.len().div_ceil(per_page),
        placements,
    })
}
