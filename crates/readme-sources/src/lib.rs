//! Data-source fetchers and Markdown rendering for readme-sync.
//!
//! Each fetcher talks to one external service and produces a flat list
//! of records, newest first:
//!
//! - [`blog`]: the personal blog's Atom/RSS feed
//! - [`douban`]: the Douban interests RSS feed
//! - [`til`]: a Datasette SQL-over-HTTP endpoint of TIL entries
//! - [`yuque`]: the Yuque documentation-platform REST API
//! - [`github`]: latest releases via the GitHub GraphQL API
//!
//! Fetchers are independent one-shot calls with no retry policy; the
//! caller gathers them concurrently and renders the results into
//! Markdown fragments via [`entry`] and the per-source render helpers.

pub mod blog;
pub mod client;
pub mod douban;
pub mod entry;
pub mod error;
pub mod github;
pub mod til;
pub mod yuque;

pub use client::build_client;
pub use entry::{Entry, take_latest};
pub use error::{Error, Result};
pub use github::Release;
pub use til::TilRow;
