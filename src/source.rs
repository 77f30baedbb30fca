use async_trait::async_trait;

use crate::{error::Result, types::DirectoryEntry};

/// Core abstraction for a repository contents provider
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// List the entries at `path` inside `owner/repo`
    ///
    /// Returns `Ok(None)` when the provider reports the path does not exist.
    /// Any other non-success answer is an error.
    async fn list_directory(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<Option<Vec<DirectoryEntry>>>;

    /// Get a human-readable identifier for this source (for logging/debugging)
    fn identifier(&self) -> String;
}
