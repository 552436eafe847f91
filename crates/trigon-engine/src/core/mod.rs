//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and the application: a one-time setup hook and a per-frame context.

mod app;
mod ctx;

pub use app::App;
pub use ctx::FrameCtx;
