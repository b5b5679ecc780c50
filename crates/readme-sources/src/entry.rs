//! The transient fetched record and its Markdown renderings.

/// A single fetched record rendered into Markdown.
///
/// Entries are transient: fetched, rendered, and discarded in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    pub url: String,
    /// Publication date, already formatted `YYYY-MM-DD`.
    pub published: String,
}

/// Take the first `n` entries of a newest-first list.
///
/// Output length is `min(len, n)`.
pub fn take_latest<T>(mut entries: Vec<T>, n: usize) -> Vec<T> {
    entries.truncate(n);
    entries
}

/// Render entries as a Markdown link list, one blank line apart.
///
/// `[{title}]({url}) - {published}`
pub fn link_list(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| format!("[{}]({}) - {}", entry.title, entry.url, entry.published))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render entries as an HTML anchor bullet list, one per line.
///
/// `* <a href='{url}' target='_blank'>{title}</a> - {published}`
pub fn anchor_list(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            format!(
                "* <a href='{}' target='_blank'>{}</a> - {}",
                entry.url, entry.title, entry.published
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
