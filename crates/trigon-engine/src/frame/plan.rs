use std::ops::Range;

/// Arguments of one unindexed draw.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DrawCall {
    pub vertices: Range<u32>,
    pub instances: Range<u32>,
}

impl DrawCall {
    /// Three vertices, one instance, no base offsets.
    pub const fn triangle() -> Self {
        Self {
            vertices: 0..3,
            instances: 0..1,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.end - self.vertices.start
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.end - self.instances.start
    }
}

/// What every frame records: one clear and one draw.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear: wgpu::Color,
    pub draw: DrawCall,
}

impl FramePlan {
    pub const TRIANGLE: FramePlan = FramePlan {
        clear: wgpu::Color::BLACK,
        draw: DrawCall::triangle(),
    };

    /// The plan for frame `frame_index`.
    ///
    /// Nothing here depends on time or frame count; the index is accepted so the
    /// call site reads as a per-frame decision.
    pub fn for_frame(_frame_index: u64) -> FramePlan {
        Self::TRIANGLE
    }
}
