//! Region replacement for sentinel-delimited spans.
//!
//! Provides lenient and strict substitution of the content between a
//! region's start and end sentinels. Replacement rewrites only the
//! sentinel-delimited span; every byte outside it is preserved.

use crate::error::{Error, Result};
use crate::region::{end_sentinel, find_region, start_sentinel};
use tracing::warn;

/// Builds the sentinel-wrapped block form of a region, padding the
/// content with a newline on each side.
fn format_block(name: &str, content: &str) -> String {
    format!(
        "{}\n{}\n{}",
        start_sentinel(name),
        content,
        end_sentinel(name)
    )
}

/// Builds the sentinel-wrapped inline form of a region, without
/// newline padding.
fn format_inline(name: &str, content: &str) -> String {
    format!("{}{}{}", start_sentinel(name), content, end_sentinel(name))
}

fn splice(document: &str, span: std::ops::Range<usize>, replacement: &str) -> String {
    let mut result = String::with_capacity(document.len() + replacement.len());
    result.push_str(&document[..span.start]);
    result.push_str(replacement);
    result.push_str(&document[span.end..]);
    result
}

/// Replaces the content of region `name` with `content`, padded with a
/// leading and trailing newline.
///
/// If the document has no well-formed sentinel pair for `name`, the
/// document is returned unchanged and a warning is logged. The input is
/// never mutated.
///
/// # Example
/// ```
/// use readme_blocks::writer::replace_region;
///
/// let document = "A<!-- x starts -->old<!-- x ends -->B";
/// let result = replace_region(document, "x", "new");
/// assert_eq!(result, "A<!-- x starts -->\nnew\n<!-- x ends -->B");
/// ```
pub fn replace_region(document: &str, name: &str, content: &str) -> String {
    replace_with(document, name, &format_block(name, content))
}

/// Replaces the content of region `name` without newline padding.
pub fn replace_region_inline(document: &str, name: &str, content: &str) -> String {
    replace_with(document, name, &format_inline(name, content))
}

fn replace_with(document: &str, name: &str, block: &str) -> String {
    match find_region(document, name) {
        Some(region) => splice(document, region.span, block),
        None => {
            warn!(region = name, "sentinel pair not found, leaving document unchanged");
            document.to_string()
        }
    }
}

/// Strict variant of [`replace_region`]: errors when the sentinel pair
/// is absent instead of returning the document unchanged.
///
/// # Errors
/// Returns [`Error::RegionNotFound`] if no well-formed sentinel pair
/// for `name` exists in the document.
pub fn update_region(document: &str, name: &str, content: &str) -> Result<String> {
    let region = find_region(document, name).ok_or_else(|| Error::RegionNotFound {
        name: name.to_string(),
    })?;
    Ok(splice(document, region.span, &format_block(name, content)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_inline_document() {
        let document = "A<!-- x starts -->old<!-- x ends -->B";
        let result = replace_region(document, "x", "new");
        assert_eq!(result, "A<!-- x starts -->\nnew\n<!-- x ends -->B");
    }

    #[test]
    fn test_replace_missing_region_is_noop() {
        let document = "no sentinels at all";
        assert_eq!(replace_region(document, "x", "new"), document);
    }

    #[test]
    fn test_replace_is_idempotent() {
        let document = "A<!-- x starts -->old<!-- x ends -->B";
        let once = replace_region(document, "x", "new");
        let twice = replace_region(&once, "x", "new");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_replace_inline_form() {
        let document = "A<!-- x starts -->old<!-- x ends -->B";
        let result = replace_region_inline(document, "x", "new");
        assert_eq!(result, "A<!-- x starts -->new<!-- x ends -->B");
    }

    #[test]
    fn test_update_missing_region_fails() {
        let result = update_region("no sentinels", "x", "new");
        assert!(matches!(result, Err(Error::RegionNotFound { .. })));
    }
}
