//! The sync command: fetch everything, splice, write back.

use crate::config::{self, Config};
use crate::error::Result;
use crate::io;
use colored::Colorize;
use readme_blocks::writer::replace_region;
use readme_sources::yuque::YuqueClient;
use readme_sources::{blog, douban, entry, github, take_latest, til};
use similar::TextDiff;
use std::path::Path;
use tracing::info;

/// Fetch all enabled sources concurrently, render each into its
/// region, and rewrite the README atomically.
///
/// Fetches are independent and gathered with a plain join; the README
/// is only touched after every enabled fetch has succeeded, so a
/// failing source never leaves a half-updated document.
pub async fn run_sync(config: &Config, readme_path: &Path, dry_run: bool) -> Result<()> {
    let original = io::read_text(readme_path)?;
    let client = readme_sources::build_client()?;

    // Resolve credentials up front so a missing token fails before any
    // network traffic.
    let yuque = if config.yuque.enabled {
        let token = config::token_from_env(&config.yuque.token_env)?;
        Some(YuqueClient::new(
            client.clone(),
            &config.yuque.api_url,
            token,
        ))
    } else {
        None
    };
    let github_token = if config.github.enabled {
        Some(config::token_from_env(&config.github.token_env)?)
    } else {
        None
    };

    let blog_fut = async {
        if config.blog.enabled {
            Ok(Some(
                blog::fetch_blog_entries(&client, &config.blog.url).await?,
            ))
        } else {
            Ok::<_, readme_sources::Error>(None)
        }
    };
    let douban_fut = async {
        if config.douban.enabled {
            Ok(Some(
                douban::fetch_douban_entries(&client, &config.douban.url).await?,
            ))
        } else {
            Ok::<_, readme_sources::Error>(None)
        }
    };
    let til_fut = async {
        if config.til.enabled {
            Ok(Some(
                til::fetch_tils(&client, &config.til.url, config.til.limit).await?,
            ))
        } else {
            Ok::<_, readme_sources::Error>(None)
        }
    };
    let yuque_fut = async {
        match &yuque {
            Some(yuque) => Ok(Some(
                yuque
                    .fetch_docs(&config.yuque.namespace, &config.yuque.repo)
                    .await?,
            )),
            None => Ok::<_, readme_sources::Error>(None),
        }
    };
    let github_fut = async {
        match &github_token {
            Some(token) => Ok(Some(github::fetch_releases(&client, token).await?)),
            None => Ok::<_, readme_sources::Error>(None),
        }
    };

    let (blog_entries, douban_entries, til_rows, yuque_docs, releases) =
        tokio::try_join!(blog_fut, douban_fut, til_fut, yuque_fut, github_fut)?;

    let mut document = original.clone();
    if let Some(entries) = blog_entries {
        let entries = take_latest(entries, config.blog.limit);
        document = replace_region(&document, &config.blog.marker, &entry::link_list(&entries));
    }
    if let Some(entries) = douban_entries {
        let entries = take_latest(entries, config.douban.limit);
        document = replace_region(&document, &config.douban.marker, &entry::anchor_list(&entries));
    }
    if let Some(rows) = til_rows {
        let rows = take_latest(rows, config.til.limit);
        document = replace_region(&document, &config.til.marker, &til::render_tils(&rows));
    }
    if let Some(docs) = yuque_docs {
        let docs = take_latest(docs, config.yuque.limit);
        document = replace_region(&document, &config.yuque.marker, &entry::anchor_list(&docs));
    }
    if let Some(releases) = releases {
        let releases = take_latest(releases, config.github.limit);
        document = replace_region(
            &document,
            &config.github.marker,
            &github::render_releases(&releases),
        );
    }

    if document == original {
        println!("{} {} already up to date", "ok".green().bold(), readme_path.display());
        return Ok(());
    }

    if dry_run {
        let diff = TextDiff::from_lines(&original, &document);
        print!(
            "{}",
            diff.unified_diff()
                .context_radius(3)
                .header("current", "updated")
        );
        return Ok(());
    }

    io::write_atomic(readme_path, document.as_bytes())?;
    info!(path = %readme_path.display(), "readme rewritten");
    println!("{} wrote {}", "ok".green().bold(), readme_path.display());
    Ok(())
}
