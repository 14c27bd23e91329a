//! # Bodega Cats Cropper
//!
//! Interactive fixed-aspect-ratio crop tool. Lets a calling UI position and
//! size a crop rectangle over a displayed photo, then rasterizes the
//! selection at the photo's native resolution.
//!
//! ## Core Components
//!
//! - **Geometry**: `CropRect` and the four corner `Handle`s, with a pure
//!   resize function that keeps the diagonally opposite corner fixed
//! - **Session**: the `Idle`/`Dragging`/`Resizing` pointer state machine
//!   that owns the rectangle for the lifetime of one crop
//! - **Source**: the borrowed photo plus its explicit load state; commit is
//!   gated on an external load-completion signal
//! - **Raster**: display-to-native coordinate mapping, pixel-block copy,
//!   and JPEG encoding of the committed selection
//!
//! ## Usage
//!
//! ```rust
//! use bodegacats_cropper::{CropTool, SourceImage};
//! use bodegacats_core::constants::CARD_ASPECT_RATIO;
//!
//! let source = SourceImage::new(400.0, 300.0);
//! let mut tool = CropTool::new(source, CARD_ASPECT_RATIO);
//!
//! // Pointer events arrive from the calling UI.
//! tool.pointer_down(150.0, 100.0);
//! tool.pointer_move(220.0, 140.0);
//! tool.pointer_up();
//!
//! // Commit fails until the image load signal arrives.
//! assert!(tool.commit().is_err());
//! ```

pub mod geometry;
pub mod raster;
pub mod session;
pub mod source;
pub mod tool;

pub use geometry::{hit_test, resized, CropRect, Handle, HitTarget};
pub use raster::{render_crop, CropOutput};
pub use session::{CropSession, DragState};
pub use source::{LoadState, SourceImage};
pub use tool::CropTool;
