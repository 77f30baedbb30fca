pub mod banner;
pub mod config;
pub mod error;
pub mod github;
pub mod service;
pub mod source;
pub mod types;
pub mod warn;

pub use banner::{is_banner, is_banner_name, BANNER_EXTENSIONS, BANNER_MARKER};
pub use config::LookupConfig;
pub use error::{ErrorKind, LookupError, Result};
pub use github::GitHubSource;
pub use service::{BannerLookupService, PUBLIC_DIR};
pub use source::ContentSource;
pub use types::{Diagnostic, DiagnosticDetails, DirectoryEntry, EntryKind, LookupOutcome};
pub use warn::{TracingWarnings, WarningSink};
