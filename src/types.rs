use serde::{Deserialize, Serialize};

use crate::{banner, error::LookupError};

/// One item of a contents listing, as returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Name of the file or folder
    pub name: String,
    /// Path relative to the repository root
    pub path: String,
    /// Provider-assigned content hash
    #[serde(rename = "sha")]
    pub content_hash: String,
    #[serde(rename = "size")]
    pub size_bytes: u64,
    /// API URL of this entry
    #[serde(rename = "url")]
    pub api_url: String,
    #[serde(rename = "html_url")]
    pub web_url: Option<String>,
    pub git_url: Option<String>,
    /// Direct download URL, absent for directories
    #[serde(rename = "download_url")]
    pub raw_content_url: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Type of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything else the provider reports
    #[serde(other)]
    Other,
}

/// Details attached to a [`Diagnostic`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticDetails {
    pub suggestion: String,
    pub status: u16,
}

/// A handled "no banner" result with remediation guidance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub success: bool,
    pub message: String,
    pub details: DiagnosticDetails,
}

impl Diagnostic {
    /// The repository has no `public` folder
    pub fn folder_missing(repo: &str) -> Self {
        Self {
            success: false,
            message: format!(
                "⚠️📂 In the repository >{}< the \"public\" folder was not found.",
                repo
            ),
            details: DiagnosticDetails {
                suggestion: "Create a \"public\" folder and insert your banner \
                             (e.g: /public/bannerXYZ.svg - bannerABC.png - bannerEFG.jpg)"
                    .to_string(),
                status: 404,
            },
        }
    }

    /// The `public` folder exists but holds no banner image
    pub fn banner_missing(repo: &str) -> Self {
        Self {
            success: false,
            message: format!(
                "⚠️🖼️ In repository >{}< no banner file was found in folder \"public\".",
                repo
            ),
            details: DiagnosticDetails {
                suggestion: "Insert an image that contains the name \"banner\" \
                             and is png, jpg, jpeg or svg"
                    .to_string(),
                status: 200,
            },
        }
    }

    pub fn status(&self) -> u16 {
        self.details.status
    }

    /// Message and suggestion joined the way they are logged
    pub fn log_line(&self) -> String {
        format!("{}  ℹ️{}", self.message, self.details.suggestion)
    }
}

/// Result of a single banner lookup
#[derive(Debug)]
pub enum LookupOutcome {
    /// The full `public` listing; at least one entry is a banner
    Listing(Vec<DirectoryEntry>),
    /// No banner, with the reason and a suggestion
    Diagnostic(Diagnostic),
    /// Transport, decode or unexpected status fault
    Failure(LookupError),
}

impl LookupOutcome {
    pub fn is_listing(&self) -> bool {
        matches!(self, LookupOutcome::Listing(_))
    }

    pub fn entries(&self) -> Option<&[DirectoryEntry]> {
        match self {
            LookupOutcome::Listing(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            LookupOutcome::Diagnostic(diagnostic) => Some(diagnostic),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            LookupOutcome::Failure(err) => Some(err),
            _ => None,
        }
    }

    /// Qualifying banner entries of a listing (empty for other outcomes)
    pub fn banners(&self) -> impl Iterator<Item = &DirectoryEntry> {
        self.entries()
            .unwrap_or_default()
            .iter()
            .filter(|entry| banner::is_banner(entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"[
        {
            "name": "banner.svg",
            "path": "public/banner.svg",
            "sha": "3d21ec53a331a6f037a91c368710b99387d012c1",
            "size": 1024,
            "url": "https://api.github.com/repos/octo-org/site/contents/public/banner.svg?ref=main",
            "html_url": "https://github.com/octo-org/site/blob/main/public/banner.svg",
            "git_url": "https://api.github.com/repos/octo-org/site/git/blobs/3d21ec53a331a6f037a91c368710b99387d012c1",
            "download_url": "https://raw.githubusercontent.com/octo-org/site/main/public/banner.svg",
            "type": "file",
            "_links": { "self": "ignored" }
        },
        {
            "name": "img",
            "path": "public/img",
            "sha": "a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
            "size": 0,
            "url": "https://api.github.com/repos/octo-org/site/contents/public/img?ref=main",
            "html_url": "https://github.com/octo-org/site/tree/main/public/img",
            "git_url": "https://api.github.com/repos/octo-org/site/git/trees/a84d88e7554fc1fa21bcbc4efae3c782a70d2b9d",
            "download_url": null,
            "type": "dir"
        },
        {
            "name": "vendor",
            "path": "public/vendor",
            "sha": "fa21bcbc4efae3c782a70d2b9da84d88e7554fc1",
            "size": 0,
            "url": "https://api.github.com/repos/octo-org/site/contents/public/vendor?ref=main",
            "html_url": null,
            "git_url": null,
            "download_url": null,
            "type": "submodule"
        }
    ]"#;

    #[test]
    fn test_decode_provider_listing() {
        let entries: Vec<DirectoryEntry> = serde_json::from_str(LISTING).unwrap();
        assert_eq!(entries.len(), 3);

        assert_eq!(entries[0].kind, EntryKind::File);
        assert_eq!(entries[0].size_bytes, 1024);
        assert_eq!(
            entries[0].content_hash,
            "3d21ec53a331a6f037a91c368710b99387d012c1"
        );
        assert!(entries[0].raw_content_url.is_some());

        assert_eq!(entries[1].kind, EntryKind::Dir);
        assert!(entries[1].raw_content_url.is_none());

        assert_eq!(entries[2].kind, EntryKind::Other);
        assert!(entries[2].web_url.is_none());
    }

    #[test]
    fn test_diagnostic_payload_shape() {
        let value = serde_json::to_value(Diagnostic::folder_missing("site")).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["details"]["status"], 404);
        assert!(value["message"].as_str().unwrap().contains(">site<"));
        assert!(value["details"]["suggestion"]
            .as_str()
            .unwrap()
            .starts_with("Create a \"public\" folder"));
    }

    #[test]
    fn test_banner_missing_diagnostic() {
        let diagnostic = Diagnostic::banner_missing("site");
        assert!(!diagnostic.success);
        assert_eq!(diagnostic.status(), 200);
        assert_eq!(
            diagnostic.message,
            "⚠️🖼️ In repository >site< no banner file was found in folder \"public\"."
        );
        assert_eq!(
            diagnostic.details.suggestion,
            "Insert an image that contains the name \"banner\" and is png, jpg, jpeg or svg"
        );
        assert!(diagnostic.log_line().contains("  ℹ️Insert an image"));
    }

    #[test]
    fn test_outcome_banners() {
        let entries: Vec<DirectoryEntry> = serde_json::from_str(LISTING).unwrap();
        let outcome = LookupOutcome::Listing(entries);

        let names: Vec<_> = outcome.banners().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["banner.svg"]);
        assert_eq!(outcome.entries().map(|e| e.len()), Some(3));

        let outcome = LookupOutcome::Diagnostic(Diagnostic::folder_missing("site"));
        assert_eq!(outcome.banners().count(), 0);
        assert!(outcome.entries().is_none());
    }
}
