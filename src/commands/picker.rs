//! File picker command.
//!
//! The OS file dialog is an external collaborator: opening it changes no
//! state, and only the selection coming back is fed through intake.

use tauri_plugin_dialog::DialogExt;

use crate::models::file::FileEntry;
use crate::services::intake;

use super::IntakeState;

/// Opens the native file dialog filtered to the accepted image types and
/// feeds the selection into the collection. A cancelled dialog leaves the
/// collection unchanged.
#[tauri::command]
pub async fn pick_files(
    app: tauri::AppHandle,
    state: tauri::State<'_, IntakeState>,
) -> Result<Vec<FileEntry>, String> {
    let (tx, rx) = tokio::sync::oneshot::channel();
    app.dialog()
        .file()
        .add_filter("Images", intake::ACCEPTED_EXTENSIONS)
        .pick_files(move |selection| {
            let _ = tx.send(selection);
        });
    let selection = rx.await.map_err(|e| e.to_string())?;

    let paths: Vec<String> = selection
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.into_path().ok())
        .map(|p| p.to_string_lossy().to_string())
        .collect();

    if paths.is_empty() {
        return Ok(state.controller.lock().await.snapshot());
    }
    super::ingest_paths(&state, paths).await
}
