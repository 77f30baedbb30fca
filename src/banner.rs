use crate::types::{DirectoryEntry, EntryKind};

/// Substring a banner file name must contain (case-insensitive)
pub const BANNER_MARKER: &str = "banner";

/// Image extensions accepted for a banner (case-insensitive)
pub const BANNER_EXTENSIONS: [&str; 4] = [".png", ".jpg", ".jpeg", ".svg"];

/// Check whether a file name looks like a banner image
pub fn is_banner_name(name: &str) -> bool {
    let name = name.to_lowercase();
    name.contains(BANNER_MARKER) && BANNER_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Check whether a listing entry qualifies as a banner
///
/// Only plain files count; directories named `banner.png` do not.
pub fn is_banner(entry: &DirectoryEntry) -> bool {
    entry.kind == EntryKind::File && is_banner_name(&entry.name)
}
