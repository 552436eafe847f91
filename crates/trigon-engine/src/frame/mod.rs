//! Per-frame recording.
//!
//! Each display tick acquires a frame image, records one cleared render pass
//! with a single 3-vertex draw, and submits it.

mod ctx;
mod driver;
mod plan;

pub use ctx::{RenderCtx, RenderTarget};
pub use driver::FrameDriver;
pub use plan::{DrawCall, FramePlan};
