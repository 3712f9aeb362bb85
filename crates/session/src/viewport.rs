//! Pan/zoom controller layered over the rink render.
//!
//! Drag state is Idle or Dragging. Pointer moves are honoured wherever
//! they happen while a drag is active, and pointer-up always releases, so
//! a drag that leaves the rink element cannot get stuck. Zoom is
//! instantaneous per wheel step and independent of the drag state.

use rinkview_model::viewport::{clamp_scale, Point2D, ViewTransform};

/// Zoom factor applied for a positive wheel delta.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;
/// Zoom factor applied otherwise.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last: Point2D },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    transform: ViewTransform,
    drag: DragState,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            drag: DragState::Idle,
        }
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.transform.translate_x += dx;
        self.transform.translate_y += dy;
    }

    /// Zoom one wheel step, keeping the content under the cursor fixed.
    ///
    /// A positive `delta` zooms out by 0.9, anything else zooms in by 1.1;
    /// the result is clamped to `[0.5, 3.0]`.
    pub fn zoom_at(&mut self, cursor_x: f64, cursor_y: f64, delta: f64) {
        let factor = if delta > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };
        let old = self.transform;
        let scale = clamp_scale(old.scale * factor);
        let ratio = scale / old.scale;

        self.transform = ViewTransform {
            translate_x: cursor_x - (cursor_x - old.translate_x) * ratio,
            translate_y: cursor_y - (cursor_y - old.translate_y) * ratio,
            scale,
        };
        tracing::trace!(scale, "viewport zoomed");
    }

    /// Back to `{0, 0, 1}`; also ends any drag.
    pub fn reset(&mut self) {
        self.transform = ViewTransform::IDENTITY;
        self.drag = DragState::Idle;
    }

    pub fn pointer_down(&mut self, at: Point2D) {
        self.drag = DragState::Dragging { last: at };
    }

    /// Pan by the pointer's movement while dragging. Returns whether the
    /// view moved.
    pub fn pointer_move(&mut self, at: Point2D) -> bool {
        let DragState::Dragging { last } = self.drag else {
            return false;
        };
        self.pan(at.x - last.x, at.y - last.y);
        self.drag = DragState::Dragging { last: at };
        true
    }

    /// Release the drag, wherever the pointer is.
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Pre-transform content coordinates under a screen point.
    pub fn to_content(&self, screen: Point2D) -> Point2D {
        self.transform.invert(screen)
    }
}
