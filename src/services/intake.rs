//! File intake controller.
//!
//! Owns the ordered collection of accepted files. Candidates arriving from a
//! drop or a picker selection pass a MIME allow-list check and are
//! de-duplicated by their `(name, size, mtime)` identity; rejected candidates
//! are dropped silently rather than surfaced as errors.

use std::path::Path;

use crate::models::file::{FileCandidate, FileEntry};
use crate::services::preview::PreviewRegistry;

/// MIME types eligible for preview. Fixed, process-wide allow-list.
pub const ACCEPTED_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/heic",
    "image/heif",
];

/// Extensions offered by the file picker, matching `ACCEPTED_TYPES`.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "heic", "heif"];

/// Extension to declared MIME type, covering exactly the accepted set.
const EXTENSION_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
    ("gif", "image/gif"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
];

/// Returns true if the declared MIME type is in the allow-list.
pub fn is_accepted(mime: &str) -> bool {
    ACCEPTED_TYPES.contains(&mime)
}

/// Declared MIME type for a file name, by extension (case-insensitive).
/// None when the extension is missing or unknown.
pub fn infer_mime(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    EXTENSION_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| (*mime).to_string())
}

/// Ordered, de-duplicated collection of accepted files.
#[derive(Default)]
pub struct IntakeController {
    entries: Vec<FileEntry>,
}

impl IntakeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters candidates and appends the survivors.
    ///
    /// Candidates whose declared MIME type is not accepted are skipped
    /// silently. A candidate whose id already exists in the collection is a
    /// no-op. Survivors get a freshly registered preview reference and are
    /// appended at the end, so insertion order is stable. Returns the number
    /// of entries actually added.
    pub fn add_files(
        &mut self,
        candidates: Vec<FileCandidate>,
        previews: &PreviewRegistry,
    ) -> usize {
        let mut added = 0;
        for candidate in candidates {
            if !candidate.mime_type.as_deref().is_some_and(is_accepted) {
                log::debug!(
                    "skipping {} (declared type {:?})",
                    candidate.file_name,
                    candidate.mime_type
                );
                continue;
            }
            let id = candidate.entry_id();
            if self.entries.iter().any(|e| e.id == id) {
                continue;
            }
            let preview_url = previews.register(&candidate);
            self.entries.push(FileEntry::accepted(candidate, preview_url));
            added += 1;
        }
        added
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Cloned view of the collection for returning over IPC.
    pub fn snapshot(&self) -> Vec<FileEntry> {
        self.entries.clone()
    }
}
