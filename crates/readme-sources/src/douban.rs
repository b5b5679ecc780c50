//! Douban interests feed fetcher.
//!
//! The Douban RSS feed timestamps entries in GMT; dates are shifted to
//! UTC+8 before the date portion is taken, so an evening entry lands on
//! the local day it was actually made.

use crate::blog::strip_fragment;
use crate::entry::Entry;
use crate::error::Result;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Shift a GMT timestamp to UTC+8 and keep the date portion.
fn to_local_date(date: DateTime<Utc>) -> String {
    (date + Duration::hours(8)).format("%Y-%m-%d").to_string()
}

/// Fetch and parse the Douban interests feed.
pub async fn fetch_douban_entries(client: &reqwest::Client, url: &str) -> Result<Vec<Entry>> {
    debug!(url, "fetching douban feed");
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    parse_douban_feed(&body)
}

/// Parse a feed body into entries with UTC+8 dates.
pub fn parse_douban_feed(body: &[u8]) -> Result<Vec<Entry>> {
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
                .map(to_local_date)
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
