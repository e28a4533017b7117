//! Output format selection and per-item skip reporting.
//!
//! Pretty output goes to the terminal (skips on stderr, data on stdout);
//! JSON output is a single machine-readable object on stdout. The default
//! is chosen by TTY detection, so pipes get JSON without extra flags.

use std::io::{self, IsTerminal};

use shelfmark_core::PatternError;
use shelfmark_render::EncodeError;

// ── Output format ───────────────────────────────────────────────────────

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Human-readable terminal output.
    Pretty,
    /// Machine-readable JSON.
    Json,
}

impl Format {
    /// Resolve an explicit `--output` value, or detect from the terminal:
    /// pretty for interactive use, JSON for pipes.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Skip reporting ──────────────────────────────────────────────────────

/// Print per-item pattern skips to stderr (pretty mode).
pub(crate) fn report_pattern_skips(skips: &[PatternError]) {
    for skip in skips {
        eprintln!("warning: skipped pattern `{}`: {skip}", skip.pattern());
    }
}

/// Print per-item QR encoding skips to stderr (pretty mode).
pub(crate) fn report_encode_skips(skips: &[EncodeError]) {
    for skip in skips {
        eprintln!("warning: label rendered without QR: {skip}");
    }
}

/// Skips as JSON values for the machine-readable envelope.
pub(crate) fn pattern_skips_json(skips: &[PatternError]) -> serde_json::Value {
    serde_json::json!(
        skips
            .iter()
            .map(|s| {
                serde_json::json!({
                    "pattern": s.pattern(),
                    "error": s.to_string(),
                })
            })
            .collect::<Vec<_>>()
    )
}

/// Encode skips as JSON values for the machine-readable envelope.
pub(crate) fn encode_skips_json(skips: &[EncodeError]) -> serde_json::Value {
    serde_json::json!(
        skips
            .iter()
            .map(|s| {
                serde_json::json!({
                    "payload": s.payload,
                    "error": s.to_string(),
                })
            })
            .collect::<Vec<_>>()
    )
}
