//! Generation configuration: YAML document model, defaults, parsing.
//!
//! The document has three recognized top-level keys — `sections`, `addrs`,
//! and `render` — plus an optional `separator`. Missing fields fall back to
//! the defaults documented on each field; unknown keys are ignored. Only
//! structurally unparseable input is an error.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Separator glyph placed between shelf and row numbers, and substituted for
/// literal hyphens in generated text.
pub const DEFAULT_SEPARATOR: char = '\u{2022}'; // •

// ── Top-level document ──────────────────────────────────────────────────

/// One generation pass worth of configuration. Parsed once, read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Structured zone descriptors; each expands to a shelf×row grid of
    /// addresses.
    pub sections: Vec<SectionSpec>,
    /// Raw brace-expansion address patterns.
    pub addrs: Vec<String>,
    /// Page and cell geometry for the rendered sheet.
    pub render: RenderConfig,
    /// Separator glyph override. Defaults to [`DEFAULT_SEPARATOR`].
    pub separator: Option<char>,
}

impl GenConfig {
    /// Parse a YAML configuration document.
    ///
    /// Absent keys take their defaults; unparseable input fails with
    /// [`ConfigError`].
    pub fn from_yaml(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// The effective separator glyph for this run.
    pub fn separator(&self) -> char {
        self.separator.unwrap_or(DEFAULT_SEPARATOR)
    }
}

/// A rectangular grid of storage locations inside one zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionSpec {
    /// Zone name, prefixed verbatim to every generated address.
    pub zone: String,
    /// Number of shelves; addresses iterate 1..=shelfs as the outer loop.
    pub shelfs: u32,
    /// Rows per shelf; addresses iterate 1..=rows as the inner loop.
    pub rows: u32,
}

// ── Render configuration ────────────────────────────────────────────────

/// Page orientation. Portrait and landscape swap the same two A4 magnitudes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait: 595×842 pt.
    #[default]
    Vertical,
    /// Landscape: 842×595 pt.
    Horizontal,
}

/// Geometry for one rendered document.
///
/// Field names mirror the YAML keys. `rows`/`columns` have no usable default
/// and are validated by the layout engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Sticker rows per page. Must be >= 1.
    pub rows: u32,
    /// Sticker columns per page. Must be >= 1.
    pub columns: u32,
    /// Text size in points. Default 60.
    pub font_size: f32,
    /// Placed QR side length in points. Default 60.
    pub qrcode_size: f32,
    /// QR bitmap resolution in pixels. Default 256.
    pub qrcode_resolution: u32,
    /// Page orientation. Default vertical (portrait).
    pub orientation: Orientation,
    /// Left inset of the QR inside its cell, in points. Default 10.
    pub sticker_left_offset: f32,
    /// Gap between the QR and its text, in points. Default 20.
    pub space_between_qr_and_text: f32,
    /// Top and bottom page margin, in points. Default 0.
    pub top_bot_offsets: f32,
    /// Left and right page margin, in points. Default 0.
    pub left_right_offsets: f32,
    /// Draw dotted separator lines between adjacent cells. Default true.
    pub add_stroke: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            rows: 0,
            columns: 0,
            font_size: 60.0,
            qrcode_size: 60.0,
            qrcode_resolution: 256,
            orientation: Orientation::Vertical,
            sticker_left_offset: 10.0,
            space_between_qr_and_text: 20.0,
            top_bot_offsets: 0.0,
            left_right_offsets: 0.0,
            add_stroke: true,
        }
    }
}
