//! Drop-zone drag state.
//!
//! The frontend registers the drop target's bounding rect once on load, then
//! forwards drag positions as they arrive. Containment tests against the rect
//! decide when the highlight clears, so drag movement over nested children of
//! the target never loses the state.

use serde::Deserialize;

/// A viewport position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// The drop target's bounding rect in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Tracks whether a drag is currently active over the drop target.
///
/// Purely visual feedback; nothing here persists.
#[derive(Debug, Default)]
pub struct DropZoneMonitor {
    zone: Rect,
    active: bool,
}

impl DropZoneMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_zone(&mut self, zone: Rect) {
        self.zone = zone;
    }

    /// Drag-over: activates when the pointer is inside the zone. Idempotent.
    /// Returns the resulting state.
    pub fn drag_over(&mut self, point: Point) -> bool {
        if !self.active && self.zone.contains(point) {
            self.active = true;
        }
        self.active
    }

    /// Drag-leave: clears the state only when the position the pointer moved
    /// to is outside the zone, or unknown (pointer left the window). A leave
    /// into a nested child of the target keeps the state.
    pub fn drag_leave(&mut self, related: Option<Point>) -> bool {
        match related {
            Some(point) if self.zone.contains(point) => {}
            _ => self.active = false,
        }
        self.active
    }

    /// A drop always ends the drag.
    pub fn drop_ended(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
