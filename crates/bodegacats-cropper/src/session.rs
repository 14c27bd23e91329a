//! The pointer-interaction state machine for one crop.
//!
//! A session owns the crop rectangle from invocation to commit/cancel.
//! Exactly one `DragState` is active at a time, and the only transitions
//! are `Idle -> Dragging -> Idle` and `Idle -> Resizing(handle) -> Idle`;
//! switching between a move and a resize requires releasing the pointer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use bodegacats_core::constants::{DEFAULT_CROP_ORIGIN, DEFAULT_CROP_WIDTH, MIN_CROP_SIZE};

use crate::geometry::{resized, CropRect, Handle};

/// What the pointer is currently doing to the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DragState {
    /// No interaction in progress; pointer moves are ignored.
    #[default]
    Idle,
    /// The whole rectangle follows the pointer; size is unchanged.
    Dragging,
    /// One corner follows the pointer; the opposite corner stays fixed.
    Resizing(Handle),
}

/// Owns the crop rectangle and drag state for the lifetime of one crop.
#[derive(Debug, Clone)]
pub struct CropSession {
    container_width: f64,
    container_height: f64,
    ratio: f64,
    min_size: f64,
    rect: CropRect,
    state: DragState,
}

impl CropSession {
    /// Creates a session over a container of the given display size with a
    /// fixed target aspect ratio.
    ///
    /// The rectangle starts at a fixed default origin with the default
    /// width and a ratio-derived height, shrunk (ratio preserved) if the
    /// container is too small for the default.
    pub fn new(container_width: f64, container_height: f64, ratio: f64) -> Self {
        let mut width = DEFAULT_CROP_WIDTH.min(container_width - DEFAULT_CROP_ORIGIN);
        let mut height = width / ratio;
        let room_below = container_height - DEFAULT_CROP_ORIGIN;
        if height > room_below {
            height = room_below;
            width = height * ratio;
        }
        let rect = CropRect::new(DEFAULT_CROP_ORIGIN, DEFAULT_CROP_ORIGIN, width, height);
        Self {
            container_width,
            container_height,
            ratio,
            min_size: MIN_CROP_SIZE,
            rect,
            state: DragState::Idle,
        }
    }

    /// The current crop rectangle.
    pub fn rect(&self) -> CropRect {
        self.rect
    }

    /// The current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// The target aspect ratio.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Container width in display pixels.
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Container height in display pixels.
    pub fn container_height(&self) -> f64 {
        self.container_height
    }

    /// Starts moving the rectangle. Returns false (state unchanged) if an
    /// interaction is already in progress.
    pub fn begin_drag(&mut self) -> bool {
        if self.state != DragState::Idle {
            debug!(state = ?self.state, "begin_drag ignored: interaction in progress");
            return false;
        }
        self.state = DragState::Dragging;
        true
    }

    /// Starts resizing from the given corner handle. Returns false (state
    /// unchanged) if an interaction is already in progress.
    pub fn begin_resize(&mut self, handle: Handle) -> bool {
        if self.state != DragState::Idle {
            debug!(state = ?self.state, ?handle, "begin_resize ignored: interaction in progress");
            return false;
        }
        self.state = DragState::Resizing(handle);
        true
    }

    /// Ends the current drag or resize; the state machine returns to idle.
    pub fn end_interaction(&mut self) {
        self.state = DragState::Idle;
    }

    /// Applies a pointer move. No-op while idle. While dragging, the
    /// rectangle is recentered on the pointer and clamped inside the
    /// container with its size untouched. While resizing, the rectangle is
    /// recomputed around the handle's fixed opposite corner.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        match self.state {
            DragState::Idle => {}
            DragState::Dragging => {
                let max_left = self.container_width - self.rect.width;
                let max_top = self.container_height - self.rect.height;
                self.rect.left = (x - self.rect.width / 2.0).min(max_left).max(0.0);
                self.rect.top = (y - self.rect.height / 2.0).min(max_top).max(0.0);
            }
            DragState::Resizing(handle) => {
                self.rect = resized(
                    &self.rect,
                    handle,
                    x,
                    y,
                    self.container_width,
                    self.container_height,
                    self.ratio,
                    self.min_size,
                );
            }
        }
    }
}
