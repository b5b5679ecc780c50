//! Blog feed fetcher.
//!
//! Fetches the personal blog's Atom/RSS feed and maps it to entries,
//! newest first as the feed lists them.

use crate::client;
use crate::entry::Entry;
use crate::error::Result;
use tracing::debug;

/// Strip any `#fragment` from a link.
pub(crate) fn strip_fragment(link: &str) -> String {
    link.split('#').next().unwrap_or(link).to_string()
}

/// Fetch and parse the blog feed.
pub async fn fetch_blog_entries(client: &reqwest::Client, url: &str) -> Result<Vec<Entry>> {
    debug!(url, "fetching blog feed");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    parse_blog_feed(&body)
}

/// Parse a feed body into entries.
///
/// Entries without a title or link are skipped; the published date
/// falls back to the updated date and is formatted `YYYY-MM-DD`.
pub fn parse_blog_feed(body: &[u8]) -> Result<Vec<Entry>> {
    let feed = feed_rs::parser::parse(body)?;
    let entries = feed
        .entries
        .into_iter()
        .filter_map(|item| {
            let title = item.title.map(|t| t.content)?;
            let link = item.links.first().map(|l| l.href.clone())?;
            let published = item
                .published
                .or(item.updated)
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default();
            Some(Entry {
                title,
                url: strip_fragment(&link),
                published,
            })
        })
        .collect();
    Ok(entries)
}
