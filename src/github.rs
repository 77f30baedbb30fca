use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{header, Client, Response, StatusCode};
use tracing::debug;

use crate::{
    config::LookupConfig,
    error::{LookupError, Result},
    source::ContentSource,
    types::DirectoryEntry,
};

/// GitHub-backed content source
///
/// Lists directories through the REST contents endpoint
/// (`/repos/{owner}/{repo}/contents/{path}`), unauthenticated.
#[derive(Clone)]
pub struct GitHubSource {
    client: Client,
    api_base: String,
}

impl GitHubSource {
    /// Create a source against api.github.com with default settings
    pub fn new() -> Self {
        let config = LookupConfig::default();
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: config.api_base,
        }
    }

    /// Create a source from explicit settings
    pub fn with_config(config: LookupConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_base: config.api_base.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Build the API URL for a directory listing
    fn contents_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_base,
            owner,
            repo,
            path.trim_matches('/')
        )
    }
}

/// Reason phrase of a response, preferring the one the server actually sent
fn status_text(response: &Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => String::from_utf8_lossy(reason.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

impl Default for GitHubSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentSource for GitHubSource {
    async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<Vec<DirectoryEntry>>> {
        let url = self.contents_url(owner, repo, path);
        debug!(%url, "listing repository contents");

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "contents response");

        match status {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body = response.text().await?;
                let entries: Vec<DirectoryEntry> = serde_json::from_str(&body)?;
                Ok(Some(entries))
            }
            status => Err(LookupError::unexpected_status(status, status_text(&response))),
        }
    }

    fn identifier(&self) -> String {
        format!("github+{}", self.api_base)
    }
}
