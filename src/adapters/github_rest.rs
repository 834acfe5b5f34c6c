//! GitHub REST client for issue labels, using reqwest.

use std::collections::BTreeSet;
use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::adapters::RunnerEnv;
use crate::domain::{AppError, GitHubApiConfig, RepoRef};
use crate::ports::IssueLabelClient;

const PER_PAGE: usize = 100;
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";

/// Issue label operations against one repository.
#[derive(Clone)]
pub struct GitHubRestClient {
    api_url: Url,
    repo: RepoRef,
    client: Client,
}

impl std::fmt::Debug for GitHubRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubRestClient")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl GitHubRestClient {
    /// Create a client for `repo` authenticated with `token`.
    pub fn new(token: &str, repo: RepoRef, config: &GitHubApiConfig) -> Result<Self, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("label-tracker/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
            .map_err(|_| AppError::config_error("GitHub token contains invalid characters"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { api_url: config.api_url.clone(), repo, client })
    }

    /// Create from runner variables: `GITHUB_API_URL`, `GITHUB_REPOSITORY`, and a token.
    ///
    /// `repo` and `token` override the runner values when given.
    pub fn from_env(
        env: &RunnerEnv,
        repo: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, AppError> {
        let repo = repo.or_else(|| env.get("GITHUB_REPOSITORY")).ok_or_else(|| {
            AppError::config_error(
                "GITHUB_REPOSITORY is not set; pass --repo owner/name outside of Actions",
            )
        })?;
        let repo = RepoRef::parse(repo)?;

        let token = token.or_else(|| env.first_of(&["GITHUB_TOKEN", "GH_TOKEN"])).ok_or_else(|| {
            AppError::config_error(
                "No GitHub token: set the 'repo-token' input, GITHUB_TOKEN, or GH_TOKEN",
            )
        })?;

        let mut config = GitHubApiConfig::default();
        if let Some(api_url) = env.get("GITHUB_API_URL") {
            config.api_url = Url::parse(api_url).map_err(|e| {
                AppError::config_error(format!("Invalid GITHUB_API_URL '{}': {}", api_url, e))
            })?;
        }

        Self::new(token, repo, &config)
    }

    fn labels_url(&self, issue_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/labels",
            self.api_url.as_str().trim_end_matches('/'),
            self.repo.owner,
            self.repo.name,
            issue_number
        )
    }

    fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response, AppError> {
        let response = request
            .send()
            .map_err(|e| AppError::Http { operation: operation.to_string(), details: e.to_string() })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|err| err.message)
            .unwrap_or_else(|_| if body.is_empty() { status.to_string() } else { body });
        Err(AppError::GitHubApi { operation: operation.to_string(), status: status.as_u16(), message })
    }
}

#[derive(Debug, Deserialize)]
struct ApiLabel {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Serialize)]
struct AddLabelsRequest<'a> {
    labels: [&'a str; 1],
}

impl IssueLabelClient for GitHubRestClient {
    fn list_labels(&self, issue_number: u64) -> Result<BTreeSet<String>, AppError> {
        let operation = format!("list labels on issue #{}", issue_number);
        let mut labels = BTreeSet::new();
        let mut page = 1_u32;

        loop {
            let request = self
                .client
                .get(self.labels_url(issue_number))
                .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())]);
            let chunk: Vec<ApiLabel> = self.send(&operation, request)?.json().map_err(|e| {
                AppError::ParseError { what: "issue labels response".into(), details: e.to_string() }
            })?;

            let chunk_len = chunk.len();
            labels.extend(chunk.into_iter().map(|label| label.name));
            if chunk_len < PER_PAGE {
                break;
            }
            page = page.saturating_add(1);
        }

        Ok(labels)
    }

    fn add_label(&self, issue_number: u64, label: &str) -> Result<(), AppError> {
        let operation = format!("add label to issue #{}", issue_number);
        let request =
            self.client.post(self.labels_url(issue_number)).json(&AddLabelsRequest { labels: [label] });
        self.send(&operation, request)?;
        Ok(())
    }
}
