//! Latest-release fetcher for the GitHub GraphQL API.
//!
//! Pages through the viewer's public repositories 100 at a time,
//! following `pageInfo.endCursor` until exhausted, and keeps the most
//! recent release of every repository that has one. The cursor is
//! passed as a GraphQL variable.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const RELEASES_QUERY: &str = r#"
query($cursor: String) {
  viewer {
    repositories(first: 100, privacy: PUBLIC, after: $cursor) {
      pageInfo {
        hasNextPage
        endCursor
      }
      nodes {
        name
        description
        url
        releases(orderBy: {field: CREATED_AT, direction: DESC}, first: 1) {
          totalCount
          nodes {
            name
            publishedAt
            url
          }
        }
      }
    }
  }
}
"#;

/// The latest release of one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub repo: String,
    pub repo_url: String,
    pub description: String,
    /// Release name with the repository name stripped.
    pub release: String,
    /// Date portion of the publication timestamp.
    pub published_at: String,
    pub url: String,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<ResponseData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlError {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    repositories: RepositoryPage,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryPage {
    page_info: PageInfo,
    nodes: Vec<RepoNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageInfo {
    has_next_page: bool,
    end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RepoNode {
    name: String,
    description: Option<String>,
    url: String,
    releases: ReleaseConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseConnection {
    total_count: u64,
    nodes: Vec<ReleaseNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReleaseNode {
    name: Option<String>,
    published_at: Option<String>,
    url: String,
}

/// Fetch the latest release of every public repository with one.
pub async fn fetch_releases(client: &reqwest::Client, token: &str) -> Result<Vec<Release>> {
    let mut releases = Vec::new();
    let mut seen = HashSet::new();
    let mut cursor: Option<String> = None;

    loop {
        let payload = serde_json::json!({
            "query": RELEASES_QUERY,
            "variables": { "cursor": cursor },
        });

        debug!(?cursor, "fetching github releases page");
        let response: GraphqlResponse = client
            .post(GITHUB_GRAPHQL_URL)
            .header("Authorization", format!("Bearer {token}"))
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if let Some(errors) = response.errors {
            if !errors.is_empty() {
                let message = errors
                    .into_iter()
                    .map(|e| e.message)
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(Error::Graphql { message });
            }
        }

        let page = response
            .data
            .ok_or_else(|| Error::Graphql {
                message: "response carried no data".to_string(),
            })?
            .viewer
            .repositories;

        collect_page(&page, &mut seen, &mut releases);

        if !page.page_info.has_next_page {
            break;
        }
        cursor = page.page_info.end_cursor;
    }

    Ok(releases)
}

/// Fold one repository page into the release list, deduplicating by
/// repository name and skipping repositories without releases.
fn collect_page(page: &RepositoryPage, seen: &mut HashSet<String>, releases: &mut Vec<Release>) {
    for repo in &page.nodes {
        if repo.releases.total_count == 0 || !seen.insert(repo.name.clone()) {
            continue;
        }
        let Some(node) = repo.releases.nodes.first() else {
            continue;
        };

        let release = node
            .name
            .as_deref()
            .unwrap_or_default()
            .replace(&repo.name, "")
            .trim()
            .to_string();
        let published_at = node
            .published_at
            .as_deref()
            .and_then(|ts| ts.split('T').next())
            .unwrap_or_default()
            .to_string();

        releases.push(Release {
            repo: repo.name.clone(),
            repo_url: repo.url.clone(),
            description: repo.description.clone().unwrap_or_default(),
            release,
            published_at,
            url: node.url.clone(),
        });
    }
}

/// Render releases as a Markdown bullet list.
///
/// `* [{repo} {release}]({url}) - {published_at}`
pub fn render_releases(releases: &[Release]) -> String {
    releases
        .iter()
        .map(|release| {
            format!(
                "* [{} {}]({}) - {}",
                release.repo, release.release, release.url, release.published_at
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
