//! Pipeline construction.
//!
//! Turns an embedded [`ShaderSet`] plus the surface format into the single
//! render pipeline used for every frame.

mod shader;
mod triangle;

pub use shader::{SPLIT_ENTRY, ShaderSet, ShaderSource, Stage, StageSource};
pub use triangle::{PipelineDesc, TrianglePipeline};
