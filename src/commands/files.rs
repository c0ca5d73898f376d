//! Candidate resolution for dropped and picked files.
//!
//! Dropped paths arrive as plain strings. Each is stat'ed into a
//! `FileCandidate` carrying size, mtime, and the declared MIME type inferred
//! from its extension. The allow-list filter itself lives in the intake
//! controller; this layer only turns paths into candidates.

use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::error::AppError;
use crate::models::file::{FileCandidate, FileEntry};
use crate::services::{intake, preview};

use super::IntakeState;

/// Builds a candidate from a single path. Directories and paths with
/// unreadable names yield None; the uploader accepts plain files only.
fn candidate_from_path(path: &Path) -> crate::error::Result<Option<FileCandidate>> {
    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n.to_string(),
        None => return Ok(None),
    };
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Ok(None);
    }
    let modified_ms = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mime_type = intake::infer_mime(&name);
    Ok(Some(FileCandidate {
        file_name: name,
        file_path: path.to_string_lossy().to_string(),
        file_size: metadata.len(),
        modified_ms,
        mime_type,
    }))
}

/// Resolves dropped/picked paths into candidates.
///
/// Returns an error if any path does not exist; everything else that cannot
/// become a candidate is skipped.
pub(crate) fn resolve_candidates(paths: &[String]) -> crate::error::Result<Vec<FileCandidate>> {
    let mut candidates = Vec::with_capacity(paths.len());
    for path_str in paths {
        let path = Path::new(path_str);
        if !path.exists() {
            return Err(AppError::Io(format!("Path does not exist: {}", path_str)));
        }
        if let Some(candidate) = candidate_from_path(path)? {
            candidates.push(candidate);
        }
    }
    Ok(candidates)
}

/// Adds dropped files to the collection and returns it in insertion order.
#[tauri::command]
pub async fn add_dropped_files(
    paths: Vec<String>,
    state: tauri::State<'_, IntakeState>,
) -> Result<Vec<FileEntry>, String> {
    super::ingest_paths(&state, paths).await
}

/// Returns the current collection in insertion order.
#[tauri::command]
pub async fn list_files(state: tauri::State<'_, IntakeState>) -> Result<Vec<FileEntry>, String> {
    Ok(state.controller.lock().await.snapshot())
}

/// Releases a preview reference once its image has finished rendering.
#[tauri::command]
pub async fn release_preview(
    preview_url: String,
    state: tauri::State<'_, IntakeState>,
) -> Result<(), String> {
    state.previews.revoke(preview::token_of(&preview_url));
    Ok(())
}
