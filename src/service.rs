use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::{
    banner,
    config::LookupConfig,
    error::Result,
    github::GitHubSource,
    source::ContentSource,
    types::{Diagnostic, LookupOutcome},
    warn::{TracingWarnings, WarningSink},
};

/// Directory inspected for a banner image
pub const PUBLIC_DIR: &str = "public";

/// Looks for a banner image in a repository's `public` folder
///
/// Each lookup performs exactly one listing request and keeps no state,
/// so one service can serve many concurrent lookups.
pub struct BannerLookupService {
    source: Arc<dyn ContentSource>,
    warnings: Arc<dyn WarningSink>,
}

impl BannerLookupService {
    /// Create a service over the given source, logging warnings via `tracing`
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self {
            source,
            warnings: Arc::new(TracingWarnings),
        }
    }

    /// Create a service with an explicit warning sink
    pub fn with_warnings(source: Arc<dyn ContentSource>, warnings: Arc<dyn WarningSink>) -> Self {
        Self { source, warnings }
    }

    /// Create a service talking to GitHub with the given settings
    pub fn github(config: LookupConfig) -> Result<Self> {
        let source = GitHubSource::with_config(config)?;
        Ok(Self::new(Arc::new(source)))
    }

    /// Look up the banner of `owner/repo`
    ///
    /// Never fails: faults are reported as [`LookupOutcome::Failure`].
    pub async fn lookup_banner(&self, owner: &str, repo: &str) -> LookupOutcome {
        let entries = match self.source.list_directory(owner, repo, PUBLIC_DIR).await {
            Ok(Some(entries)) => entries,
            Ok(None) => return self.diagnose(owner, repo, Diagnostic::folder_missing(repo)),
            Err(err) => {
                debug!(
                    owner,
                    repo,
                    error = %err,
                    source = %self.source.identifier(),
                    "banner lookup failed"
                );
                return LookupOutcome::Failure(err);
            }
        };

        if entries.iter().any(banner::is_banner) {
            debug!(owner, repo, entries = entries.len(), "banner found");
            LookupOutcome::Listing(entries)
        } else {
            self.diagnose(owner, repo, Diagnostic::banner_missing(repo))
        }
    }

    /// Look up several repositories concurrently
    ///
    /// Outcomes are returned in the same order as `repos`.
    pub async fn lookup_many<O, R>(&self, repos: &[(O, R)]) -> Vec<LookupOutcome>
    where
        O: AsRef<str>,
        R: AsRef<str>,
    {
        let lookups = repos
            .iter()
            .map(|(owner, repo)| self.lookup_banner(owner.as_ref(), repo.as_ref()));
        join_all(lookups).await
    }

    fn diagnose(&self, owner: &str, repo: &str, diagnostic: Diagnostic) -> LookupOutcome {
        debug!(owner, repo, status = diagnostic.status(), "no banner");
        self.warnings.warn(&diagnostic.log_line());
        LookupOutcome::Diagnostic(diagnostic)
    }
}
