//! Hello-triangle programs built on `trigon-engine`.
//!
//! The two binaries differ only in how their shaders are packaged: `trigon`
//! uses one module with `vertex`/`fragment` entry points, `trigon-split` uses a
//! separate module per stage, each with a `main` entry point.

pub mod app;
pub mod shaders;

pub use app::{TriangleApp, run};
