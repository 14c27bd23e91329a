//! Crop-rectangle geometry and corner handles.
//!
//! Coordinates are display pixels relative to the image container's
//! top-left corner, +X right and +Y down. Resizing is a pure function of
//! `(handle, pointer, current rect)`: the corner diagonally opposite the
//! dragged handle stays fixed, width follows the pointer, and height is
//! always derived from the fixed aspect ratio. When the derived height
//! would run past the container toward the fixed corner, the rectangle
//! shrinks to fit rather than distorting.

use serde::{Deserialize, Serialize};

use bodegacats_core::constants::HANDLE_GRAB_RADIUS;

/// The user-adjustable crop region, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CropRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (left + width).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (top + height).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center of the rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Whether the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Width-to-height ratio of the rectangle.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Whether the rectangle lies fully inside a container of the given
    /// size.
    pub fn fits_in(&self, container_width: f64, container_height: f64) -> bool {
        self.left >= 0.0
            && self.top >= 0.0
            && self.right() <= container_width
            && self.bottom() <= container_height
    }
}

/// One of the four corner affordances used to resize the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handle {
    /// Top-left corner.
    Nw,
    /// Top-right corner.
    Ne,
    /// Bottom-left corner.
    Sw,
    /// Bottom-right corner.
    Se,
}

impl Handle {
    /// All four handles, in hit-test order.
    pub const ALL: [Handle; 4] = [Handle::Nw, Handle::Ne, Handle::Sw, Handle::Se];

    /// Position of this handle's corner on the rectangle.
    pub fn position(&self, rect: &CropRect) -> (f64, f64) {
        match self {
            Handle::Nw => (rect.left, rect.top),
            Handle::Ne => (rect.right(), rect.top),
            Handle::Sw => (rect.left, rect.bottom()),
            Handle::Se => (rect.right(), rect.bottom()),
        }
    }

    /// The corner diagonally opposite this handle. It stays fixed while
    /// the handle is dragged.
    pub fn anchor(&self, rect: &CropRect) -> (f64, f64) {
        self.opposite().position(rect)
    }

    /// The handle diagonally opposite this one.
    pub fn opposite(&self) -> Handle {
        match self {
            Handle::Nw => Handle::Se,
            Handle::Ne => Handle::Sw,
            Handle::Sw => Handle::Ne,
            Handle::Se => Handle::Nw,
        }
    }
}

/// What a pointer-press at a given position would grab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A corner handle; pressing starts a resize.
    Corner(Handle),
    /// The rectangle interior; pressing starts a move.
    Interior,
}

/// Hit-tests a pointer position against the rectangle. Corner affordances
/// win over the interior so small rectangles stay resizable.
pub fn hit_test(rect: &CropRect, x: f64, y: f64) -> Option<HitTarget> {
    for handle in Handle::ALL {
        let (hx, hy) = handle.position(rect);
        if (x - hx).hypot(y - hy) <= HANDLE_GRAB_RADIUS {
            return Some(HitTarget::Corner(handle));
        }
    }
    if rect.contains(x, y) {
        return Some(HitTarget::Interior);
    }
    None
}

/// Computes the rectangle after dragging `handle` to the pointer position.
///
/// The pointer's x drives the new width (measured from the fixed opposite
/// corner); height is derived from `ratio`. `min_size` bounds the width
/// from below, and if the derived height would extend past the container
/// toward the fixed corner, height is clamped to the remaining space and
/// width re-derived, so the ratio always holds. Left/top are recomputed so
/// the anchor corner does not move.
pub fn resized(
    rect: &CropRect,
    handle: Handle,
    pointer_x: f64,
    _pointer_y: f64,
    container_width: f64,
    container_height: f64,
    ratio: f64,
    min_size: f64,
) -> CropRect {
    let mut new_width;
    let mut new_height;
    let mut new_left = rect.left;
    let mut new_top = rect.top;

    match handle {
        Handle::Se => {
            let max_width = container_width - rect.left;
            new_width = (pointer_x - rect.left).min(max_width).max(min_size);
            new_height = new_width / ratio;
            let room_below = container_height - rect.top;
            if new_height > room_below {
                new_height = room_below;
                new_width = new_height * ratio;
            }
        }
        Handle::Sw => {
            new_width = (rect.right() - pointer_x.max(0.0)).max(min_size);
            new_height = new_width / ratio;
            let room_below = container_height - rect.top;
            if new_height > room_below {
                new_height = room_below;
                new_width = new_height * ratio;
            }
            new_left = rect.right() - new_width;
        }
        Handle::Ne => {
            let max_width = container_width - rect.left;
            new_width = (pointer_x - rect.left).min(max_width).max(min_size);
            new_height = new_width / ratio;
            let room_above = rect.bottom();
            if new_height > room_above {
                new_height = room_above;
                new_width = new_height * ratio;
            }
            new_top = rect.bottom() - new_height;
        }
        Handle::Nw => {
            new_width = (rect.right() - pointer_x.max(0.0)).max(min_size);
            new_height = new_width / ratio;
            let room_above = rect.bottom();
            if new_height > room_above {
                new_height = room_above;
                new_width = new_height * ratio;
            }
            new_left = rect.right() - new_width;
            new_top = rect.bottom() - new_height;
        }
    }

    CropRect::new(new_left, new_top, new_width, new_height)
}
