//! Shader sets embedded at build time.

use trigon_engine::pipeline::{ShaderSet, ShaderSource};

/// One module exposing `vertex` and `fragment`.
pub const COMBINED: ShaderSet = ShaderSet::Combined {
    source: ShaderSource::new("triangle.wgsl", include_str!("../shaders/triangle.wgsl")),
    vertex_entry: "vertex",
    fragment_entry: "fragment",
};

/// Two modules, each exposing `main`.
pub const SPLIT: ShaderSet = ShaderSet::Split {
    vertex: ShaderSource::new(
        "triangle.vert.wgsl",
        include_str!("../shaders/triangle.vert.wgsl"),
    ),
    fragment: ShaderSource::new(
        "triangle.frag.wgsl",
        include_str!("../shaders/triangle.frag.wgsl"),
    ),
};

#[cfg(test)]
mod tests {
    use super::*;
    use trigon_engine::frame::{FrameDriver, RenderCtx};
    use trigon_engine::pipeline::{PipelineDesc, SPLIT_ENTRY};

    fn driver_for(shaders: ShaderSet) -> anyhow::Result<FrameDriver> {
        let (device, _queue) = wgpu::Device::noop(&wgpu::DeviceDescriptor::default());
        let ctx = RenderCtx {
            device: &device,
            surface_format: wgpu::TextureFormat::Bgra8UnormSrgb,
        };
        Ok(FrameDriver::new(&ctx, shaders)?)
    }

    #[test]
    fn combined_shaders_compile() {
        assert_eq!(COMBINED.validate(), Ok(()));
    }

    #[test]
    fn split_shaders_compile() {
        assert_eq!(SPLIT.validate(), Ok(()));
        assert_eq!(SPLIT.vertex().entry, SPLIT_ENTRY);
        assert_eq!(SPLIT.fragment().entry, SPLIT_ENTRY);
    }

    #[test]
    fn variants_differ_only_in_modules_and_entry_names() {
        let format = wgpu::TextureFormat::Bgra8Unorm;
        let a = PipelineDesc::new(COMBINED, format);
        let b = PipelineDesc::new(SPLIT, format);
        assert_eq!(a.topology, b.topology);
        assert_eq!(a.target_format, b.target_format);
        assert_eq!(a.vertex_buffer_count, b.vertex_buffer_count);
        assert_ne!(a.vertex().entry, b.vertex().entry);
    }

    #[test]
    fn combined_shaders_build_a_pipeline() {
        driver_for(COMBINED).unwrap();
    }

    #[test]
    fn split_shaders_build_a_pipeline() {
        driver_for(SPLIT).unwrap();
    }
}
