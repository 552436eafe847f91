use crate::error::InitError;

use super::{FormatPolicy, SurfaceErrorAction};

/// Resolves the backend set the instance will use.
///
/// `env_override` is the parsed `WGPU_BACKEND` value, if set. An empty result
/// means there is no graphics capability to work with.
pub(crate) fn resolve_backends(
    configured: wgpu::Backends,
    env_override: Option<wgpu::Backends>,
) -> Result<wgpu::Backends, InitError> {
    let backends = env_override.unwrap_or(configured);
    if backends.is_empty() {
        return Err(InitError::CapabilityMissing);
    }
    Ok(backends)
}

/// Picks the presentation format.
///
/// wgpu lists the surface's preferred format first.
pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    policy: FormatPolicy,
) -> Result<wgpu::TextureFormat, InitError> {
    let Some(&preferred) = caps.formats.first() else {
        return Err(InitError::SurfaceUnavailable(
            "surface reports no supported formats for this adapter".to_string(),
        ));
    };

    if policy == FormatPolicy::PreferSrgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Ok(f);
        }
    }

    Ok(preferred)
}

pub(crate) fn choose_alpha_mode(
    caps: &wgpu::SurfaceCapabilities,
    requested: wgpu::CompositeAlphaMode,
) -> wgpu::CompositeAlphaMode {
    if caps.alpha_modes.contains(&requested) {
        return requested;
    }

    let fallback = caps
        .alpha_modes
        .first()
        .copied()
        .unwrap_or(wgpu::CompositeAlphaMode::Auto);
    log::warn!("surface does not support {requested:?} alpha; using {fallback:?}");
    fallback
}

/// Maps an acquisition error to what the frame loop should do next.
///
/// The caller performs the reconfigure for `Reconfigured`.
pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode as Alpha, TextureFormat as Fmt};

    fn caps(formats: &[Fmt], alpha_modes: &[Alpha]) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            alpha_modes: alpha_modes.to_vec(),
            ..Default::default()
        }
    }

    // ── backends ──────────────────────────────────────────────────────────

    #[test]
    fn empty_backends_is_capability_missing() {
        assert_eq!(
            resolve_backends(wgpu::Backends::empty(), None),
            Err(InitError::CapabilityMissing)
        );
    }

    #[test]
    fn env_override_wins() {
        let got = resolve_backends(wgpu::Backends::all(), Some(wgpu::Backends::VULKAN));
        assert_eq!(got, Ok(wgpu::Backends::VULKAN));
    }

    #[test]
    fn empty_env_override_is_capability_missing() {
        let got = resolve_backends(wgpu::Backends::all(), Some(wgpu::Backends::empty()));
        assert_eq!(got, Err(InitError::CapabilityMissing));
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn host_preferred_takes_first_format() {
        let c = caps(&[Fmt::Bgra8Unorm, Fmt::Bgra8UnormSrgb], &[]);
        assert_eq!(
            choose_surface_format(&c, FormatPolicy::HostPreferred),
            Ok(Fmt::Bgra8Unorm)
        );
    }

    #[test]
    fn prefer_srgb_finds_srgb_variant() {
        let c = caps(&[Fmt::Bgra8Unorm, Fmt::Rgba8UnormSrgb], &[]);
        assert_eq!(
            choose_surface_format(&c, FormatPolicy::PreferSrgb),
            Ok(Fmt::Rgba8UnormSrgb)
        );
    }

    #[test]
    fn prefer_srgb_falls_back_to_first() {
        let c = caps(&[Fmt::Rgba16Float, Fmt::Bgra8Unorm], &[]);
        assert_eq!(
            choose_surface_format(&c, FormatPolicy::PreferSrgb),
            Ok(Fmt::Rgba16Float)
        );
    }

    #[test]
    fn no_formats_is_surface_unavailable() {
        let c = caps(&[], &[]);
        assert!(matches!(
            choose_surface_format(&c, FormatPolicy::HostPreferred),
            Err(InitError::SurfaceUnavailable(_))
        ));
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn premultiplied_used_when_supported() {
        let c = caps(&[], &[Alpha::Opaque, Alpha::PreMultiplied]);
        assert_eq!(choose_alpha_mode(&c, Alpha::PreMultiplied), Alpha::PreMultiplied);
    }

    #[test]
    fn unsupported_alpha_falls_back_to_first() {
        let c = caps(&[], &[Alpha::Opaque]);
        assert_eq!(choose_alpha_mode(&c, Alpha::PreMultiplied), Alpha::Opaque);
    }

    #[test]
    fn no_alpha_modes_falls_back_to_auto() {
        let c = caps(&[], &[]);
        assert_eq!(choose_alpha_mode(&c, Alpha::PreMultiplied), Alpha::Auto);
    }

    // ── surface errors ────────────────────────────────────────────────────

    #[test]
    fn surface_error_classification() {
        use wgpu::SurfaceError as E;
        assert_eq!(classify_surface_error(&E::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&E::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&E::Other), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&E::OutOfMemory), SurfaceErrorAction::Fatal);
    }
}
