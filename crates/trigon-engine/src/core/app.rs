use anyhow::Result;

use crate::frame::RenderCtx;

use super::ctx::FrameCtx;

/// Application contract implemented by higher layers.
///
/// The runtime owns the loop and ends it when the window closes.
pub trait App {
    /// Called once, after the surface is configured and before the first frame.
    ///
    /// Long-lived GPU objects (the pipeline) are built here. An error ends the
    /// run before any frame is drawn.
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()>;

    /// Called once per display refresh while rendering. An error ends the run.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()>;
}
