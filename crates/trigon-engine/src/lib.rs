//! Trigon engine crate.
//!
//! Window, GPU device, pipeline and frame loop for drawing one triangle.
//! Setup runs once (`device`, then `pipeline`); `frame` then records the same
//! clear + draw on every display refresh until the window closes.

pub mod core;
pub mod device;
pub mod error;
pub mod frame;
pub mod lifecycle;
pub mod pipeline;
pub mod time;
pub mod window;

pub mod logging;
pub mod report;
