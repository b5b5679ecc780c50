//! Configuration loading for readme-sync
//!
//! One TOML file, `readme-sync.toml`, next to the README. Every source
//! section can be disabled; a missing file means built-in defaults.
//! Credentials never live in the file: token sections name the
//! environment variable holding the token.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "readme-sync.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub readme: ReadmeConfig,
    pub blog: BlogConfig,
    pub douban: DoubanConfig,
    pub til: TilConfig,
    pub yuque: YuqueConfig,
    pub github: GithubConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            readme: ReadmeConfig::default(),
            blog: BlogConfig::default(),
            douban: DoubanConfig::default(),
            til: TilConfig::default(),
            yuque: YuqueConfig::default(),
            github: GithubConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReadmeConfig {
    /// Path to the README to rewrite.
    pub path: String,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            path: "README.md".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    pub enabled: bool,
    pub url: String,
    pub marker: String,
    pub limit: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://wuyuler.github.io/feed.xml".to_string(),
            marker: "blog".to_string(),
            limit: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DoubanConfig {
    pub enabled: bool,
    pub url: String,
    pub marker: String,
    pub limit: usize,
}

impl Default for DoubanConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://www.douban.com/feed/people/247254851/interests".to_string(),
            marker: "douban".to_string(),
            limit: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TilConfig {
    pub enabled: bool,
    pub url: String,
    pub marker: String,
    pub limit: usize,
}

impl Default for TilConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://til.simonwillison.net/tils.json".to_string(),
            marker: "til".to_string(),
            limit: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct YuqueConfig {
    pub enabled: bool,
    pub api_url: String,
    pub namespace: String,
    pub repo: String,
    pub marker: String,
    /// Name of the environment variable holding the API token.
    pub token_env: String,
    pub limit: usize,
}

impl Default for YuqueConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_url: "https://www.yuque.com/api/v2".to_string(),
            namespace: "yongyule".to_string(),
            repo: "TIL".to_string(),
            marker: "docs".to_string(),
            token_env: "YUQUE_TOKEN".to_string(),
            limit: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub enabled: bool,
    pub marker: String,
    /// Name of the environment variable holding the API token.
    pub token_env: String,
    pub limit: usize,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            marker: "releases".to_string(),
            token_env: "YJT_TOKEN".to_string(),
            limit: 5,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; otherwise `readme-sync.toml` in the
    /// working directory is used when present, and built-in defaults
    /// when not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Marker names of every enabled source, in README order.
    pub fn enabled_markers(&self) -> Vec<&str> {
        let mut markers = Vec::new();
        if self.blog.enabled {
            markers.push(self.blog.marker.as_str());
        }
        if self.douban.enabled {
            markers.push(self.douban.marker.as_str());
        }
        if self.til.enabled {
            markers.push(self.til.marker.as_str());
        }
        if self.yuque.enabled {
            markers.push(self.yuque.marker.as_str());
        }
        if self.github.enabled {
            markers.push(self.github.marker.as_str());
        }
        markers
    }
}

/// Resolve a token from the environment variable a config section names.
pub fn token_from_env(var: &str) -> Result<String> {
    std::env::var(var)
        .map_err(|_| CliError::user(format!("environment variable {var} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.readme.path, "README.md");
        assert!(config.blog.enabled);
        assert!(config.douban.enabled);
        assert!(config.til.enabled);
        assert!(!config.yuque.enabled);
        assert!(!config.github.enabled);
        assert_eq!(config.blog.limit, 5);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[blog]
url = "https://example.com/feed.xml"

[douban]
enabled = false
"#,
        )
        .unwrap();
        assert_eq!(config.blog.url, "https://example.com/feed.xml");
        assert_eq!(config.blog.marker, "blog");
        assert!(!config.douban.enabled);
        assert!(config.til.enabled);
    }

    #[test]
    fn test_enabled_markers() {
        let mut config = Config::default();
        assert_eq!(config.enabled_markers(), vec!["blog", "douban", "til"]);
        config.github.enabled = true;
        assert_eq!(
            config.enabled_markers(),
            vec!["blog", "douban", "til", "releases"]
        );
    }

    #[test]
    fn test_missing_token_env_is_user_error() {
        let result = token_from_env("README_SYNC_TEST_UNSET_VAR");
        assert!(result.is_err());
    }
}
