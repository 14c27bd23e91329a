//! The assembled crop tool: one source photo, one session, one outcome.
//!
//! The calling UI feeds raw pointer events here; the tool hit-tests them
//! and drives the session state machine. Per invocation the terminal
//! action is exactly one of a successful `commit` (the caller receives the
//! encoded crop) or `cancel` (the tool is consumed and every buffer,
//! including the decoded photo, is dropped).

use tracing::debug;

use bodegacats_core::error::Result;

use crate::geometry::{hit_test, HitTarget};
use crate::raster::{render_crop, CropOutput};
use crate::session::CropSession;
use crate::source::SourceImage;

/// An interactive fixed-aspect-ratio crop over one photo.
#[derive(Debug)]
pub struct CropTool {
    source: SourceImage,
    session: CropSession,
}

impl CropTool {
    /// Creates a tool over the given photo. The crop container is the
    /// photo's displayed extent.
    pub fn new(source: SourceImage, ratio: f64) -> Self {
        let session = CropSession::new(
            source.displayed_width(),
            source.displayed_height(),
            ratio,
        );
        Self { source, session }
    }

    /// The session owning rectangle and drag state.
    pub fn session(&self) -> &CropSession {
        &self.session
    }

    /// Mutable session access for callers that drive the state machine
    /// directly instead of through pointer events.
    pub fn session_mut(&mut self) -> &mut CropSession {
        &mut self.session
    }

    /// The photo being cropped.
    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Whether the confirm action should be enabled: the photo has decoded
    /// and commit would not fail on readiness.
    pub fn is_ready(&self) -> bool {
        self.source.is_ready()
    }

    /// Pointer pressed: a corner affordance starts a resize, the rectangle
    /// interior starts a move. Returns true if an interaction began.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        match hit_test(&self.session.rect(), x, y) {
            Some(HitTarget::Corner(handle)) => self.session.begin_resize(handle),
            Some(HitTarget::Interior) => self.session.begin_drag(),
            None => false,
        }
    }

    /// Pointer moved: forwarded to the session (no-op while idle).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.session.pointer_move(x, y);
    }

    /// Pointer released: the state machine returns to idle.
    pub fn pointer_up(&mut self) {
        self.session.end_interaction();
    }

    /// Rasterizes the current selection. `ImageNotReady` is recoverable:
    /// the tool stays usable and the caller may retry after the load
    /// signal. `UnsupportedFormat` is terminal for this photo.
    pub fn commit(&self) -> Result<CropOutput> {
        let output = render_crop(&self.source, &self.session.rect())?;
        debug!(
            width = output.width,
            height = output.height,
            bytes = output.bytes.len(),
            "crop committed"
        );
        Ok(output)
    }

    /// Abandons the crop. Consumes the tool so the decoded photo and all
    /// session state are released; no output is produced.
    pub fn cancel(self) {
        debug!("crop cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::DragState;
    use bodegacats_core::constants::CARD_ASPECT_RATIO;

    #[test]
    fn pointer_down_picks_resize_on_corners() {
        let source = SourceImage::new(400.0, 300.0);
        let mut tool = CropTool::new(source, CARD_ASPECT_RATIO);
        // Default rect corner at (250, 50 + 118.2).
        assert!(tool.pointer_down(250.0, 50.0));
        assert!(matches!(tool.session().state(), DragState::Resizing(_)));
    }

    #[test]
    fn pointer_down_outside_does_nothing() {
        let source = SourceImage::new(400.0, 300.0);
        let mut tool = CropTool::new(source, CARD_ASPECT_RATIO);
        assert!(!tool.pointer_down(5.0, 290.0));
        assert_eq!(tool.session().state(), DragState::Idle);
    }

    #[test]
    fn commit_is_gated_on_readiness() {
        let source = SourceImage::new(400.0, 300.0);
        let tool = CropTool::new(source, CARD_ASPECT_RATIO);
        let err = tool.commit().unwrap_err();
        assert!(err.is_recoverable());
    }
}
