//! Typed error types for the core pipeline.
//!
//! Two propagation classes exist and must not be mixed up:
//!
//! - **Per-item**: [`PatternError`]. A bad brace pattern skips that pattern
//!   and generation continues; callers collect these into a report.
//! - **Fatal**: [`ConfigError`] and [`LayoutError`]. The run produces no
//!   document at all.

/// A brace pattern could not be expanded.
///
/// Every variant names the offending pattern so the failure is actionable
/// without re-deriving state. Per-item: one bad pattern never corrupts the
/// expansion of other patterns in the same batch.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    /// A `{` without a matching `}`, or a stray `}`.
    #[error("unbalanced brace in pattern `{pattern}` at byte {offset}")]
    Unbalanced {
        /// The full pattern that failed.
        pattern: String,
        /// Byte offset of the unmatched brace.
        offset: usize,
    },

    /// An empty `{}` group.
    #[error("empty brace group in pattern `{pattern}`")]
    EmptyGroup {
        /// The full pattern that failed.
        pattern: String,
    },

    /// A group that is neither a `a..b` range nor a `x,y` alternation.
    #[error("`{{{group}}}` in pattern `{pattern}` is neither a range nor an alternation")]
    NotAGroup {
        /// The full pattern that failed.
        pattern: String,
        /// The group body, braces stripped.
        group: String,
    },

    /// A `a..b` range whose operands cannot be enumerated together.
    #[error("cannot enumerate range `{{{range}}}` in pattern `{pattern}`")]
    BadRange {
        /// The full pattern that failed.
        pattern: String,
        /// The range body, braces stripped.
        range: String,
    },

    /// A range that would produce more items than the expander allows.
    #[error("range `{{{range}}}` in pattern `{pattern}` expands to {len} items (max {max})")]
    RangeTooLong {
        /// The full pattern that failed.
        pattern: String,
        /// The range body, braces stripped.
        range: String,
        /// Number of items the range would produce.
        len: u64,
        /// The expander's per-group limit.
        max: u64,
    },
}

impl PatternError {
    /// The pattern that triggered this error.
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::Unbalanced { pattern, .. }
            | PatternError::EmptyGroup { pattern }
            | PatternError::NotAGroup { pattern, .. }
            | PatternError::BadRange { pattern, .. }
            | PatternError::RangeTooLong { pattern, .. } => pattern,
        }
    }
}

/// The configuration document could not be used. Fatal.
///
/// Absent fields are not errors (they fall back to documented defaults);
/// only structurally unparseable input lands here.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The YAML input did not parse into a [`GenConfig`](crate::GenConfig).
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The render grid cannot be laid out. Fatal.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// `rows` or `columns` is zero.
    #[error("invalid grid: rows={rows}, columns={columns} (both must be >= 1)")]
    InvalidGrid {
        /// Configured row count.
        rows: u32,
        /// Configured column count.
        columns: u32,
    },

    /// The margins leave no usable page area, so a cell dimension came out
    /// non-positive.
    #[error("degenerate cell {cell_w}x{cell_h} pt: margins exceed the page")]
    DegenerateCell {
        /// Computed cell width in points.
        cell_w: f32,
        /// Computed cell height in points.
        cell_h: f32,
    },
}
