//! Region parsing for sentinel-delimited replaceable spans.
//!
//! Parses named regions in text documents with the format:
//! ```text
//! <!-- name starts -->
//! content here
//! <!-- name ends -->
//! ```

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A parsed region with its name, content, and position information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// The marker name identifying this region.
    pub name: String,
    /// The content between the sentinels (excluding the sentinels themselves).
    pub content: String,
    /// Byte range in the source document, inclusive of both sentinels.
    pub span: Range<usize>,
    /// The 1-based line number where the start sentinel begins.
    pub start_line: usize,
    /// The 1-based line number where the end sentinel ends.
    pub end_line: usize,
}

/// Regex for matching start sentinels.
/// Supports alphanumeric names with hyphens and underscores.
static START_SENTINEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!-- ([a-zA-Z0-9_-]+) starts -->").expect("Invalid start sentinel regex")
});

/// Formats the start sentinel for a region.
pub(crate) fn start_sentinel(name: &str) -> String {
    format!("<!-- {} starts -->", name)
}

/// Formats the end sentinel for a region.
pub(crate) fn end_sentinel(name: &str) -> String {
    format!("<!-- {} ends -->", name)
}

/// Parses all regions from the given document.
///
/// Regions are returned in order of appearance. A start sentinel with
/// no matching end sentinel after it is skipped.
///
/// # Example
/// ```
/// use readme_blocks::region::parse_regions;
///
/// let document = r#"Some text
/// <!-- blog starts -->
/// region content
/// <!-- blog ends -->
/// More text"#;
///
/// let regions = parse_regions(document);
/// assert_eq!(regions.len(), 1);
/// assert_eq!(regions[0].name, "blog");
/// ```
pub fn parse_regions(document: &str) -> Vec<Region> {
    let mut regions = Vec::new();

    for caps in START_SENTINEL_REGEX.captures_iter(document) {
        let name = caps.get(1).unwrap().as_str();
        let start_match = caps.get(0).unwrap();
        let content_start = start_match.end();

        let end = end_sentinel(name);
        let Some(end_pos) = document[content_start..].find(&end) else {
            continue;
        };
        let end_start = content_start + end_pos;
        let end_end = end_start + end.len();

        // Content excludes the sentinels; strip the single padding
        // newline on each side when present.
        let raw = &document[content_start..end_start];
        let content = raw.strip_prefix('\n').unwrap_or(raw);
        let content = content.strip_suffix('\n').unwrap_or(content);

        // Count newlines rather than lines(): lines() counts a trailing
        // partial line, which over-reports for sentinels mid-line.
        let start_line = document[..start_match.start()].matches('\n').count() + 1;
        let end_line = document[..end_end].matches('\n').count() + 1;

        regions.push(Region {
            name: name.to_string(),
            content: content.to_string(),
            span: start_match.start()..end_end,
            start_line,
            end_line,
        });
    }

    regions
}

/// Finds a specific region by name.
///
/// Returns the first region with that name, or `None` if the document
/// has no well-formed sentinel pair for it.
pub fn find_region(document: &str, name: &str) -> Option<Region> {
    parse_regions(document)
        .into_iter()
        .find(|region| region.name == name)
}

/// Checks whether a well-formed sentinel pair for `name` exists.
pub fn has_region(document: &str, name: &str) -> bool {
    find_region(document, name).is_some()
}
