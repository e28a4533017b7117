//! Brace pattern expansion.
//!
//! Expands patterns like `Z{01..04}•{1..7}` into every literal string they
//! denote. Two group forms are supported:
//!
//! - `{a..b}` — inclusive range. Numeric operands of equal width keep that
//!   width as zero padding (`{01..04}` → `01 02 03 04`); single ASCII letters
//!   of the same case expand as a character range. Reversed operands
//!   enumerate descending.
//! - `{x,y,z}` — comma alternation, order preserved.
//!
//! Multiple groups combine as a cartesian product with the leftmost group as
//! the outer (slowest-varying) loop, matching nested-loop reading order.
//! A pattern without braces expands to itself. Nested groups are not
//! supported and report the inner brace as unbalanced.

use crate::error::PatternError;

/// Upper bound on the items one `{a..b}` group may produce.
/// Catches typos like `{1..9999999}` before they allocate the world.
pub const MAX_RANGE_LEN: u64 = 10_000;

// ── Public API ──────────────────────────────────────────────────────────

/// Expand one brace pattern into the ordered list of strings it denotes.
///
/// Enumeration order is left-to-right, low-to-high: the leftmost group
/// varies slowest. Duplicates are preserved; nothing is sorted.
pub fn expand(pattern: &str) -> Result<Vec<String>, PatternError> {
    let segments = parse_segments(pattern)?;

    let mut acc = vec![String::new()];
    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                for prefix in &mut acc {
                    prefix.push_str(&text);
                }
            }
            Segment::Group(items) => {
                let mut next = Vec::with_capacity(acc.len() * items.len());
                for prefix in &acc {
                    for item in &items {
                        let mut s = String::with_capacity(prefix.len() + item.len());
                        s.push_str(prefix);
                        s.push_str(item);
                        next.push(s);
                    }
                }
                acc = next;
            }
        }
    }
    Ok(acc)
}

// ── Segmentation ────────────────────────────────────────────────────────

#[derive(Debug)]
enum Segment {
    Literal(String),
    Group(Vec<String>),
}

/// Split a pattern into literal runs and expanded brace groups.
fn parse_segments(pattern: &str) -> Result<Vec<Segment>, PatternError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = pattern.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '{' => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                let mut body = String::new();
                let mut closed = false;
                for (inner_offset, inner) in chars.by_ref() {
                    match inner {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => {
                            return Err(PatternError::Unbalanced {
                                pattern: pattern.to_string(),
                                offset: inner_offset,
                            });
                        }
                        _ => body.push(inner),
                    }
                }
                if !closed {
                    return Err(PatternError::Unbalanced {
                        pattern: pattern.to_string(),
                        offset,
                    });
                }
                segments.push(Segment::Group(expand_group(pattern, &body)?));
            }
            '}' => {
                return Err(PatternError::Unbalanced {
                    pattern: pattern.to_string(),
                    offset,
                });
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

// ── Group expansion ─────────────────────────────────────────────────────

/// Expand one group body (braces stripped) into its item list.
fn expand_group(pattern: &str, body: &str) -> Result<Vec<String>, PatternError> {
    if body.is_empty() {
        return Err(PatternError::EmptyGroup {
            pattern: pattern.to_string(),
        });
    }

    // Alternation takes precedence: `{1,2..3}` is the items `1` and `2..3`.
    if body.contains(',') {
        return Ok(body.split(',').map(str::to_string).collect());
    }

    if let Some((lo, hi)) = body.split_once("..") {
        return expand_range(pattern, body, lo, hi);
    }

    Err(PatternError::NotAGroup {
        pattern: pattern.to_string(),
        group: body.to_string(),
    })
}

/// Expand an inclusive `lo..hi` range.
fn expand_range(
    pattern: &str,
    body: &str,
    lo: &str,
    hi: &str,
) -> Result<Vec<String>, PatternError> {
    let bad_range = || PatternError::BadRange {
        pattern: pattern.to_string(),
        range: body.to_string(),
    };

    let is_numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if is_numeric(lo) && is_numeric(hi) {
        let a: u64 = lo.parse().map_err(|_| bad_range())?;
        let b: u64 = hi.parse().map_err(|_| bad_range())?;
        let len = a.abs_diff(b) + 1;
        if len > MAX_RANGE_LEN {
            return Err(PatternError::RangeTooLong {
                pattern: pattern.to_string(),
                range: body.to_string(),
                len,
                max: MAX_RANGE_LEN,
            });
        }
        // Operands of equal width fix that width as zero padding.
        let width = if lo.len() == hi.len() { lo.len() } else { 0 };
        let items: Vec<String> = if a <= b {
            (a..=b).map(|n| format!("{n:0width$}")).collect()
        } else {
            (b..=a).rev().map(|n| format!("{n:0width$}")).collect()
        };
        return Ok(items);
    }

    // Single-letter ranges, same case on both ends.
    let single_letter = |s: &str| {
        let mut it = s.chars();
        match (it.next(), it.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
            _ => None,
        }
    };
    if let (Some(a), Some(b)) = (single_letter(lo), single_letter(hi)) {
        if a.is_ascii_lowercase() != b.is_ascii_lowercase() {
            return Err(bad_range());
        }
        let (a, b) = (a as u32, b as u32);
        let items: Vec<String> = if a <= b {
            (a..=b).filter_map(char::from_u32).map(String::from).collect()
        } else {
            (b..=a).rev().filter_map(char::from_u32).map(String::from).collect()
        };
        return Ok(items);
    }

    Err(bad_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_braces_is_a_singleton() {
        assert_eq!(expand("Z12•4").unwrap(), vec!["Z12•4"]);
    }

    #[test]
    fn empty_pattern_is_a_singleton() {
        assert_eq!(expand("").unwrap(), vec![""]);
    }

    #[test]
    fn zero_padded_range_keeps_width() {
        assert_eq!(expand("{01..04}").unwrap(), vec!["01", "02", "03", "04"]);
    }

    #[test]
    fn unequal_width_range_has_no_padding() {
        assert_eq!(
            expand("{8..11}").unwrap(),
            vec!["8", "9", "10", "11"]
        );
    }

    #[test]
    fn leftmost_group_varies_slowest() {
        assert_eq!(
            expand("Z{01..02}•{1..2}").unwrap(),
            vec!["Z01•1", "Z01•2", "Z02•1", "Z02•2"]
        );
    }

    #[test]
    fn alternation_preserves_order() {
        assert_eq!(expand("{c,a,b}").unwrap(), vec!["c", "a", "b"]);
    }

    #[test]
    fn alternation_allows_empty_items() {
        assert_eq!(expand("x{,a}").unwrap(), vec!["x", "xa"]);
    }

    #[test]
    fn letter_range() {
        assert_eq!(expand("{a..c}1").unwrap(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn descending_range_enumerates_descending() {
        assert_eq!(expand("{3..1}").unwrap(), vec!["3", "2", "1"]);
    }

    #[test]
    fn unbalanced_open_brace_names_pattern() {
        let err = expand("Z{01..04").unwrap_err();
        assert!(matches!(err, PatternError::Unbalanced { .. }));
        assert_eq!(err.pattern(), "Z{01..04");
    }

    #[test]
    fn stray_close_brace_is_unbalanced() {
        assert!(matches!(
            expand("Z}1").unwrap_err(),
            PatternError::Unbalanced { offset: 1, .. }
        ));
    }

    #[test]
    fn nested_group_is_unbalanced() {
        assert!(matches!(
            expand("{a,{b,c}}").unwrap_err(),
            PatternError::Unbalanced { .. }
        ));
    }

    #[test]
    fn empty_group_is_rejected() {
        assert!(matches!(
            expand("Z{}").unwrap_err(),
            PatternError::EmptyGroup { .. }
        ));
    }

    #[test]
    fn plain_word_group_is_rejected() {
        assert!(matches!(
            expand("{abc}").unwrap_err(),
            PatternError::NotAGroup { .. }
        ));
    }

    #[test]
    fn mixed_operand_range_is_rejected() {
        assert!(matches!(
            expand("{1..z}").unwrap_err(),
            PatternError::BadRange { .. }
        ));
    }

    #[test]
    fn oversized_range_is_capped() {
        assert!(matches!(
            expand("{1..99999}").unwrap_err(),
            PatternError::RangeTooLong { .. }
        ));
    }
}
