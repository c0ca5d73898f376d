//! File models for drag-and-drop intake.

use serde::{Deserialize, Serialize};

/// A raw file handle as delivered by a drop or picker event, before the
/// intake controller has filtered it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCandidate {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    /// Last-modified time in milliseconds since the Unix epoch.
    pub modified_ms: u64,
    /// Declared MIME type, inferred from the file extension. None when the
    /// extension is unknown.
    pub mime_type: Option<String>,
}

impl FileCandidate {
    /// Deterministic identity used for de-duplication. Two candidates with
    /// the same name, size, and mtime are the same logical file.
    pub fn entry_id(&self) -> String {
        format!("{}-{}-{}", self.file_name, self.file_size, self.modified_ms)
    }
}

/// Card text shown when the declared MIME type is absent.
const UNKNOWN_TYPE: &str = "unknown type";

/// An accepted, de-duplicated file with its preview reference.
///
/// Returned to the frontend for rendering one preview card per entry. The
/// card labels are derived here so the page never re-implements formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    pub id: String,
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub modified_ms: u64,
    pub mime_type: Option<String>,
    /// Human-readable size string for the preview card.
    pub size_label: String,
    /// MIME type for the preview card, falling back to "unknown type".
    pub mime_label: String,
    /// Revocable `preview://` URL served by the scheme handler until released.
    pub preview_url: String,
}

impl FileEntry {
    /// Builds the entry for an accepted candidate, deriving the id and the
    /// preview-card labels.
    pub fn accepted(candidate: FileCandidate, preview_url: String) -> Self {
        let id = candidate.entry_id();
        let size_label = format_bytes(candidate.file_size);
        let mime_label = candidate
            .mime_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string());
        Self {
            id,
            file_name: candidate.file_name,
            file_path: candidate.file_path,
            file_size: candidate.file_size,
            modified_ms: candidate.modified_ms,
            mime_type: candidate.mime_type,
            size_label,
            mime_label,
            preview_url,
        }
    }
}

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats a byte count for display.
///
/// Picks the largest unit up to GB, shows one decimal place below 10 (trimmed
/// when integral) and none at or above 10 or for plain bytes. Zero is "0 B".
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }
    let exponent =
        (((bytes as f64).ln() / 1024_f64.ln()).floor() as usize).min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    if value >= 10.0 || exponent == 0 {
        format!("{:.0} {}", value, UNITS[exponent])
    } else {
        let scaled = format!("{:.1}", value);
        let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
        format!("{} {}", scaled, UNITS[exponent])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, size: u64, modified_ms: u64) -> FileCandidate {
        FileCandidate {
            file_name: name.to_string(),
            file_path: format!("/tmp/{}", name),
            file_size: size,
            modified_ms,
            mime_type: Some("image/png".to_string()),
        }
    }

    #[test]
    fn entry_id_is_name_size_mtime() {
        let c = candidate("photo.png", 2048, 1700000000000);
        assert_eq!(c.entry_id(), "photo.png-2048-1700000000000");
    }

    #[test]
    fn entry_id_differs_when_size_differs() {
        let a = candidate("photo.png", 2048, 1700000000000);
        let b = candidate("photo.png", 2049, 1700000000000);
        assert_ne!(a.entry_id(), b.entry_id());
    }

    #[test]
    fn format_bytes_zero() {
        assert_eq!(format_bytes(0), "0 B");
    }

    #[test]
    fn format_bytes_plain_bytes_have_no_decimals() {
        assert_eq!(format_bytes(1), "1 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1023), "1023 B");
    }

    #[test]
    fn format_bytes_one_kilobyte() {
        assert_eq!(format_bytes(1024), "1 KB");
    }

    #[test]
    fn format_bytes_fractional_kilobytes() {
        assert_eq!(format_bytes(1536), "1.5 KB");
    }

    #[test]
    fn format_bytes_one_megabyte() {
        assert_eq!(format_bytes(1_048_576), "1 MB");
    }

    #[test]
    fn format_bytes_drops_decimals_at_ten() {
        assert_eq!(format_bytes(10_240), "10 KB");
    }

    #[test]
    fn format_bytes_two_kilobytes() {
        assert_eq!(format_bytes(2048), "2 KB");
    }

    #[test]
    fn format_bytes_gigabytes_is_the_cap() {
        // 2 TB still renders in GB because the unit list stops there.
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024 * 1024), "2048 GB");
    }

    #[test]
    fn accepted_entry_derives_labels() {
        let entry = FileEntry::accepted(
            candidate("photo.png", 2048, 0),
            "preview://localhost/abc".to_string(),
        );
        assert_eq!(entry.id, "photo.png-2048-0");
        assert_eq!(entry.size_label, "2 KB");
        assert_eq!(entry.mime_label, "image/png");
    }

    #[test]
    fn mime_label_falls_back_when_type_absent() {
        let mut c = candidate("blob", 1, 0);
        c.mime_type = None;
        let entry = FileEntry::accepted(c, "preview://localhost/abc".to_string());
        assert_eq!(entry.mime_label, "unknown type");
        assert_eq!(entry.mime_type, None);
    }

    #[test]
    fn serde_camel_case_keys() {
        let c = candidate("photo.png", 2048, 7);
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains("\"fileName\""), "got: {}", json);
        assert!(json.contains("\"fileSize\""), "got: {}", json);
        assert!(json.contains("\"modifiedMs\""), "got: {}", json);
        assert!(json.contains("\"mimeType\""), "got: {}", json);
        assert!(!json.contains("file_name"), "got: {}", json);
    }

    #[test]
    fn entry_serializes_card_labels() {
        let entry = FileEntry::accepted(
            candidate("photo.png", 2048, 7),
            "preview://localhost/abc".to_string(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"sizeLabel\":\"2 KB\""), "got: {}", json);
        assert!(json.contains("\"mimeLabel\":\"image/png\""), "got: {}", json);
    }
}
