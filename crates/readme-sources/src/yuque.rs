//! Yuque documentation-platform REST client.
//!
//! Two calls per run: resolve the configured knowledge base by name via
//! `GET /users/{namespace}/repos`, then list its documents via
//! `GET /repos/{id}/docs`. Documents are sorted newest first by
//! creation time and mapped to entries.

use crate::entry::Entry;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Public web URL prefix for document links.
const WEB_URL: &str = "https://www.yuque.com";

/// Envelope every Yuque API response wraps its payload in.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// One knowledge base as listed under a user.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// One document as listed in a knowledge base.
#[derive(Debug, Clone, Deserialize)]
pub struct DocSummary {
    pub title: String,
    pub slug: String,
    pub created_at: String,
}

/// Authenticated Yuque API client.
pub struct YuqueClient {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl YuqueClient {
    pub fn new(
        client: reqwest::Client,
        api_url: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, api: &str) -> Result<T> {
        let url = format!("{}{}", self.api_url, api);
        debug!(url, "fetching yuque api");
        let value = self
            .client
            .get(&url)
            .header("X-Auth-Token", &self.token)
            .header("Content-Type", "application/json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(value)
    }

    /// List the knowledge bases under a user namespace.
    pub async fn list_repos(&self, namespace: &str) -> Result<Vec<RepoSummary>> {
        let envelope: DataEnvelope<Vec<RepoSummary>> =
            self.get_json(&format!("/users/{namespace}/repos")).await?;
        Ok(envelope.data)
    }

    /// List the documents of a knowledge base by id.
    pub async fn list_docs(&self, repo_id: u64) -> Result<Vec<DocSummary>> {
        let envelope: DataEnvelope<Vec<DocSummary>> =
            self.get_json(&format!("/repos/{repo_id}/docs")).await?;
        Ok(envelope.data)
    }

    /// Fetch the documents of the named knowledge base as entries,
    /// newest first.
    pub async fn fetch_docs(&self, namespace: &str, repo_name: &str) -> Result<Vec<Entry>> {
        let repos = self.list_repos(namespace).await?;
        let repo = repos
            .iter()
            .find(|repo| repo.name == repo_name)
            .ok_or_else(|| Error::RepoNotFound {
                name: repo_name.to_string(),
            })?;

        let docs = self.list_docs(repo.id).await?;
        Ok(docs_to_entries(docs, namespace, &repo.slug))
    }
}

/// Sort documents newest first and map them to entries.
fn docs_to_entries(mut docs: Vec<DocSummary>, namespace: &str, repo_slug: &str) -> Vec<Entry> {
    // ISO-8601 creation timestamps sort lexicographically.
    docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    docs.into_iter()
        .map(|doc| Entry {
            url: format!("{WEB_URL}/{namespace}/{repo_slug}/{}", doc.slug),
            published: doc
                .created_at
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
            title: doc.title,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOCS_FIXTURE: &str = r#"{
      "data": [
        {"title": "Older note", "slug": "older", "created_at": "2024-05-01T10:00:00.000Z"},
        {"title": "Newer note", "slug": "newer", "created_at": "2024-06-01T10:00:00.000Z"}
      ]
    }"#;

    #[test]
    fn test_docs_sorted_newest_first() {
        let envelope: DataEnvelope<Vec<DocSummary>> = serde_json::from_str(DOCS_FIXTURE).unwrap();
        let entries = docs_to_entries(envelope.data, "someone", "notes");
        assert_eq!(entries[0].title, "Newer note");
        assert_eq!(entries[0].url, "https://www.yuque.com/someone/notes/newer");
        assert_eq!(entries[0].published, "2024-06-01");
        assert_eq!(entries[1].title, "Older note");
    }

    #[test]
    fn test_repo_envelope_decodes() {
        let body = r#"{"data": [{"id": 42, "name": "TIL", "slug": "til"}]}"#;
        let envelope: DataEnvelope<Vec<RepoSummary>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data[0].id, 42);
        assert_eq!(envelope.data[0].name, "TIL");
    }
}
