//! Tauri IPC command handlers.
//!
//! This module is the entry point for frontend `invoke()` calls. Command
//! handlers perform parameter parsing and forward to the `services` layer for
//! business logic. Commands should not contain business logic directly.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::models::file::FileEntry;
use crate::services::drag::DropZoneMonitor;
use crate::services::intake::IntakeController;
use crate::services::preview::PreviewRegistry;

pub mod drag;
pub mod files;
pub mod info;
pub mod picker;

/// Tauri managed state for the intake command surface.
pub struct IntakeState {
    pub controller: Mutex<IntakeController>,
    pub drag: Mutex<DropZoneMonitor>,
    pub previews: Arc<PreviewRegistry>,
}

impl IntakeState {
    pub fn new() -> Self {
        Self {
            controller: Mutex::new(IntakeController::new()),
            drag: Mutex::new(DropZoneMonitor::new()),
            previews: Arc::new(PreviewRegistry::new()),
        }
    }
}

impl Default for IntakeState {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves paths off the async runtime, runs them through the controller,
/// and returns the resulting collection. Shared by the drop, drag-drop, and
/// picker commands.
pub(crate) async fn ingest_paths(
    state: &IntakeState,
    paths: Vec<String>,
) -> Result<Vec<FileEntry>, String> {
    let candidates = tokio::task::spawn_blocking(move || files::resolve_candidates(&paths))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())?;
    let mut controller = state.controller.lock().await;
    controller.add_files(candidates, &state.previews);
    Ok(controller.snapshot())
}
