use winit::window::Window;

use crate::device::{Gpu, SurfaceErrorAction};
use crate::error::RuntimeError;
use crate::frame::RenderTarget;
use crate::time::FrameTime;

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window: &'a Window,
    pub gpu: &'a mut Gpu<'w>,
    pub time: FrameTime,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Acquires the frame image, calls `draw` with a [`RenderTarget`] on it, then
    /// submits and presents.
    ///
    /// Returns `Ok(false)` when the frame was skipped after a recoverable
    /// surface error, and an error when the surface cannot be used any more.
    pub fn render<F>(&mut self, draw: F) -> Result<bool, RuntimeError>
    where
        F: FnOnce(&mut RenderTarget<'_>),
    {
        let mut frame = match self.gpu.begin_frame() {
            Ok(f) => f,
            Err(err) => {
                let message = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(RuntimeError::Fatal(message)),
                    SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(false),
                };
            }
        };

        // RenderTarget borrows frame.encoder; dropped before submit() takes frame.
        {
            let mut target = RenderTarget {
                encoder: &mut frame.encoder,
                color_view: &frame.view,
            };
            draw(&mut target);
        }

        self.window.pre_present_notify();
        self.gpu.submit(frame);

        Ok(true)
    }
}
