/// How the surface pixel format is picked from what the host reports.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FormatPolicy {
    /// Use the host's preferred format (the first one the surface reports).
    #[default]
    HostPreferred,
    /// Use an sRGB format when the host offers one, else the preferred format.
    PreferSrgb,
}

/// Initialization parameters for the GPU layer.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or backend requirement exists.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Backends the instance may use.
    ///
    /// `WGPU_BACKEND` overrides this at startup. An empty set means the process
    /// has no graphics capability.
    pub backends: wgpu::Backends,

    /// Adapter selection hint.
    pub power_preference: wgpu::PowerPreference,

    pub format_policy: FormatPolicy,

    /// Present mode (swap behavior).
    ///
    /// FIFO paces the frame loop to the display refresh.
    pub present_mode: wgpu::PresentMode,

    /// Alpha composition mode for the surface.
    ///
    /// If unsupported on the current surface, the first supported mode is used.
    pub alpha_mode: wgpu::CompositeAlphaMode,

    /// Required wgpu features.
    ///
    /// Favor an empty set for portability unless a feature is strictly necessary.
    pub required_features: wgpu::Features,

    /// Limits requested from the adapter/device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface.
    ///
    /// This value is a hint; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            backends: wgpu::Backends::all(),
            power_preference: wgpu::PowerPreference::HighPerformance,
            format_policy: FormatPolicy::HostPreferred,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::PreMultiplied,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}
