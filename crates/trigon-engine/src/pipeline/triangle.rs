use crate::error::PipelineError;

use super::shader::{ShaderSet, ShaderSource, StageSource};

/// Everything the triangle pipeline is built from.
///
/// This is plain data: equal inputs give equal descriptions, and building the
/// same description twice gives pipelines with the same stage/topology setup.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PipelineDesc {
    pub label: &'static str,
    pub shaders: ShaderSet,
    /// Format of the single color target.
    pub target_format: wgpu::TextureFormat,
    pub topology: wgpu::PrimitiveTopology,
    /// Vertex positions come from the built-in vertex index, so nothing is bound.
    pub vertex_buffer_count: usize,
}

impl PipelineDesc {
    pub fn new(shaders: ShaderSet, target_format: wgpu::TextureFormat) -> Self {
        Self {
            label: "trigon triangle pipeline",
            shaders,
            target_format,
            topology: wgpu::PrimitiveTopology::TriangleList,
            vertex_buffer_count: 0,
        }
    }

    pub fn vertex(&self) -> StageSource {
        self.shaders.vertex()
    }

    pub fn fragment(&self) -> StageSource {
        self.shaders.fragment()
    }

    fn primitive(&self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: self.topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        }
    }

    fn color_target(&self) -> wgpu::ColorTargetState {
        wgpu::ColorTargetState {
            format: self.target_format,
            blend: None,
            write_mask: wgpu::ColorWrites::ALL,
        }
    }
}

/// The one render pipeline of the program.
pub struct TrianglePipeline {
    pipeline: wgpu::RenderPipeline,
}

impl TrianglePipeline {
    /// Compiles the shaders and creates the render pipeline.
    ///
    /// Shader source is checked on the CPU first; a malformed module is returned
    /// as an error before any GPU object is created. Creation itself runs inside
    /// a validation error scope, and this call blocks until the device has
    /// accepted or rejected the pipeline.
    pub fn build(device: &wgpu::Device, desc: PipelineDesc) -> Result<Self, PipelineError> {
        desc.shaders.validate()?;

        let vertex = desc.vertex();
        let fragment = desc.fragment();

        let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

        // A combined set shares one module between both stages.
        let vs_module = create_module(device, vertex.source);
        let split_fs_module =
            (fragment.source != vertex.source).then(|| create_module(device, fragment.source));
        let fs_module = split_fs_module.as_ref().unwrap_or(&vs_module);

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(desc.label),
            // Bind group layouts are inferred from the shaders.
            layout: None,

            vertex: wgpu::VertexState {
                module: &vs_module,
                entry_point: Some(vertex.entry),
                compilation_options: Default::default(),
                buffers: &[],
            },

            fragment: Some(wgpu::FragmentState {
                module: fs_module,
                entry_point: Some(fragment.entry),
                compilation_options: Default::default(),
                targets: &[Some(desc.color_target())],
            }),

            primitive: desc.primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        if let Some(err) = pollster::block_on(error_scope.pop()) {
            return Err(PipelineError::Link {
                label: desc.label,
                message: err.to_string(),
            });
        }

        log::info!(
            "pipeline ready: {}:{} -> {}:{} ({:?}, {:?})",
            vertex.source.label,
            vertex.entry,
            fragment.source.label,
            fragment.entry,
            desc.topology,
            desc.target_format,
        );

        Ok(Self { pipeline })
    }

    pub fn raw(&self) -> &wgpu::RenderPipeline {
        &self.pipeline
    }
}

fn create_module(device: &wgpu::Device, source: ShaderSource) -> wgpu::ShaderModule {
    device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(source.label),
        source: wgpu::ShaderSource::Wgsl(source.wgsl.into()),
    })
}
