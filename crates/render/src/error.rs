//! Typed error types for the renderer.

use shelfmark_core::LayoutError;

/// The QR capability failed for one payload. Per-item: the affected label
/// renders without a bitmap and the run continues.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("QR encoding failed for payload `{payload}`: {source}")]
pub struct EncodeError {
    /// The payload that could not be encoded.
    pub payload: String,
    /// The underlying encoder failure.
    #[source]
    pub source: qrcode::types::QrError,
}

/// A fatal renderer-side failure — no document is produced.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The layout engine rejected the grid or margins.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
