//! TIL fetcher for a Datasette SQL-over-HTTP endpoint.
//!
//! A single GET with `sql` and `_shape=array` parameters; the endpoint
//! answers with a bare JSON array of rows, newest first per the query's
//! `order by created_utc desc`.

use crate::error::Result;
use serde::Deserialize;
use tracing::debug;

/// SQL sent to the endpoint. Underscores in titles are escaped so they
/// survive Markdown rendering; the configured limit caps the result
/// server-side.
fn til_sql(limit: usize) -> String {
    format!(
        "select path, replace(title, '_', '\\_') as title, url, topic, slug, created_utc from til order by created_utc desc limit {limit}"
    )
}

/// One row of the `til` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TilRow {
    pub path: String,
    pub title: String,
    pub url: String,
    pub topic: String,
    pub slug: String,
    pub created_utc: String,
}

/// Fetch the latest `limit` TIL rows.
pub async fn fetch_tils(client: &reqwest::Client, url: &str, limit: usize) -> Result<Vec<TilRow>> {
    debug!(url, limit, "fetching tils");
    let rows = client
        .get(url)
        .query(&[("sql", til_sql(limit).as_str()), ("_shape", "array")])
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<TilRow>>()
        .await?;
    Ok(rows)
}

/// Render TIL rows as an HTML anchor bullet list, prefixed with topic.
///
/// `* {topic}: <a href='{url}' target='_blank'>{title}</a>`
pub fn render_tils(rows: &[TilRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "* {}: <a href='{}' target='_blank'>{}</a>",
                row.topic, row.url, row.title
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
