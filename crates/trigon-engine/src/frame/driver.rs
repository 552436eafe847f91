use crate::error::PipelineError;
use crate::pipeline::{PipelineDesc, ShaderSet, TrianglePipeline};

use super::{FramePlan, RenderCtx, RenderTarget};

/// Records the per-frame clear + draw with the one pipeline it owns.
///
/// The pipeline is built once in [`FrameDriver::new`] and only read afterwards.
pub struct FrameDriver {
    pipeline: TrianglePipeline,
}

impl FrameDriver {
    /// Builds the pipeline for `shaders` against the surface format in `ctx`.
    pub fn new(ctx: &RenderCtx<'_>, shaders: ShaderSet) -> Result<Self, PipelineError> {
        let desc = PipelineDesc::new(shaders, ctx.surface_format);
        let pipeline = TrianglePipeline::build(ctx.device, desc)?;
        Ok(Self { pipeline })
    }

    /// Records one render pass into `target`.
    pub fn record(&self, target: &mut RenderTarget<'_>, plan: &FramePlan) {
        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("trigon triangle pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(plan.clear),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(self.pipeline.raw());
        rpass.draw(plan.draw.vertices.clone(), plan.draw.instances.clone());
    }
}
