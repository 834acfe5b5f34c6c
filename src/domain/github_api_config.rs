//! GitHub REST API configuration.

use url::Url;

/// Endpoint and transport settings for the GitHub REST client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitHubApiConfig {
    /// API base URL (`GITHUB_API_URL` on hosted runners and GHES).
    pub api_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), timeout_secs: default_timeout() }
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("default API URL is valid")
}

fn default_timeout() -> u64 {
    30
}
