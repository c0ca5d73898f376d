//! Drag surface commands.
//!
//! The page forwards drag events with viewport coordinates; the returned bool
//! is the resulting drag state, used to toggle the drop-zone highlight.

use crate::models::file::FileEntry;
use crate::services::drag::{Point, Rect};

use super::IntakeState;

/// Registers the drop target's bounding rect for containment tests.
#[tauri::command]
pub async fn set_drop_zone(
    zone: Rect,
    state: tauri::State<'_, IntakeState>,
) -> Result<(), String> {
    state.drag.lock().await.set_zone(zone);
    Ok(())
}

#[tauri::command]
pub async fn drag_over(
    point: Point,
    state: tauri::State<'_, IntakeState>,
) -> Result<bool, String> {
    Ok(state.drag.lock().await.drag_over(point))
}

/// `point` is the position the pointer moved to, None when it left the window.
#[tauri::command]
pub async fn drag_leave(
    point: Option<Point>,
    state: tauri::State<'_, IntakeState>,
) -> Result<bool, String> {
    Ok(state.drag.lock().await.drag_leave(point))
}

/// Drop: clears the highlight, then runs any dropped paths through intake.
#[tauri::command]
pub async fn drag_drop(
    paths: Vec<String>,
    state: tauri::State<'_, IntakeState>,
) -> Result<Vec<FileEntry>, String> {
    state.drag.lock().await.drop_ended();
    if paths.is_empty() {
        return Ok(state.controller.lock().await.snapshot());
    }
    super::ingest_paths(&state, paths).await
}
