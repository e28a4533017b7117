//! shelfmark core library.
//!
//! Turns a small declarative configuration — zone/shelf/row sections and
//! brace-expansion address patterns — into an ordered label list, and
//! paginates that list into a fixed rows×columns grid of per-cell placement
//! instructions. The main entry points are [`GenConfig::from_yaml`] for
//! configuration, [`generate`] for the address list, and [`plan`] for the
//! layout. Rendering the plan to an actual document lives in
//! `shelfmark_render`.
//!
//! Everything here is pure and deterministic: no I/O, no globals, identical
//! inputs yield identical output.

#![warn(missing_docs)]

/// Address generation from sections and patterns.
pub mod addr;
/// Configuration document model and YAML parsing.
pub mod config;
/// Typed errors for the whole core pipeline.
pub mod error;
/// Brace pattern expansion.
pub mod expand;
/// Pagination and geometric placement.
pub mod layout;

// ── Convenience re-exports ──────────────────────────────────────────────
// Flat imports for the common entry points; full module paths remain
// available for less common types.

pub use addr::{AddressList, LabelRecord, generate};
pub use config::{DEFAULT_SEPARATOR, GenConfig, Orientation, RenderConfig, SectionSpec};
pub use error::{ConfigError, LayoutError, PatternError};
pub use expand::expand;
pub use layout::{LayoutPlan, Placement, Stroke, page_size, plan};
