//! Typed failures raised during setup and rendering.
//!
//! Every variant is terminal. Callers are expected to convert these into
//! `anyhow::Error` at the runtime boundary and report them once.

use thiserror::Error;

/// Failure while acquiring the device and binding the surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    /// No graphics backend is available to this process at all.
    #[error("graphics capability missing: no GPU backend is enabled")]
    CapabilityMissing,

    /// Backends exist but no adapter (or no device from it) could be obtained.
    #[error("no GPU adapter found: {0}")]
    AdapterUnavailable(String),

    /// The window could not be bound to a drawable surface.
    #[error("drawable surface not available: {0}")]
    SurfaceUnavailable(String),
}

/// Failure while turning shader source into a render pipeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PipelineError {
    #[error("shader module `{module}` failed to compile:\n{message}")]
    Compile { module: &'static str, message: String },

    #[error("shader module `{module}` has no {stage} entry point named `{entry}`")]
    MissingEntryPoint {
        module: &'static str,
        stage: &'static str,
        entry: &'static str,
    },

    /// The vertex stage reads `@location` inputs, but no vertex buffers are bound.
    #[error("vertex entry point `{entry}` declares {count} vertex input(s); none can be bound")]
    VertexInputs { entry: &'static str, count: usize },

    /// Each module compiled, but the device rejected them as one pipeline
    /// (e.g. the stage interfaces do not match).
    #[error("pipeline `{label}` rejected by the device:\n{message}")]
    Link { label: &'static str, message: String },
}

/// Failure after the frame loop has started.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("fatal surface error: {0}")]
    Fatal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_errors_stringify_with_kind() {
        assert!(InitError::CapabilityMissing.to_string().contains("capability missing"));
        assert!(
            InitError::AdapterUnavailable("none".into())
                .to_string()
                .starts_with("no GPU adapter found")
        );
        assert!(
            InitError::SurfaceUnavailable("zero size".into())
                .to_string()
                .ends_with("zero size")
        );
    }

    #[test]
    fn missing_entry_point_names_module_and_stage() {
        let e = PipelineError::MissingEntryPoint {
            module: "triangle",
            stage: "vertex",
            entry: "vs",
        };
        assert_eq!(
            e.to_string(),
            "shader module `triangle` has no vertex entry point named `vs`"
        );
    }

    #[test]
    fn errors_convert_into_anyhow() {
        let e: anyhow::Error = InitError::CapabilityMissing.into();
        assert_eq!(
            e.downcast_ref::<InitError>(),
            Some(&InitError::CapabilityMissing)
        );
    }
}
