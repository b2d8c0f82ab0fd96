// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks one drag session and converts each cursor sample into the delta
//! since the previous sample.

use iced::{Point, Vector};

/// Manages the active drag session.
///
/// Every consumed sample re-arms the reference point, so consecutive
/// samples yield incremental deltas rather than the cumulative translation
/// since the gesture started. Skipping the re-arm would re-apply the whole
/// translation on every sample and send the dragged element flying.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Cursor position of the last consumed sample, `None` while idle.
    last_sample: Option<Point>,
}

impl DragState {
    /// Begins a drag session at `position`.
    pub fn begin(&mut self, position: Point) {
        self.last_sample = Some(position);
    }

    /// Ends the drag session.
    pub fn end(&mut self) {
        self.last_sample = None;
    }

    /// Whether a drag session is currently active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.last_sample.is_some()
    }

    /// Consumes a movement sample, returning the delta since the previous
    /// sample and re-arming on `position`.
    ///
    /// Returns `None` while no drag session is active.
    pub fn sample(&mut self, position: Point) -> Option<Vector> {
        let last = self.last_sample?;
        self.last_sample = Some(position);

        Some(position - last)
    }
}
