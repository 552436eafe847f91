//! Embedded shader sources and their reflection checks.

use crate::error::PipelineError;

/// Entry point name used by each module of a split shader set.
pub const SPLIT_ENTRY: &str = "main";

/// One WGSL module, embedded at build time.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderSource {
    /// Debug label, also used in error messages.
    pub label: &'static str,
    pub wgsl: &'static str,
}

impl ShaderSource {
    pub const fn new(label: &'static str, wgsl: &'static str) -> Self {
        Self { label, wgsl }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Stage {
    Vertex,
    Fragment,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Vertex => "vertex",
            Stage::Fragment => "fragment",
        }
    }

    fn naga(self) -> naga::ShaderStage {
        match self {
            Stage::Vertex => naga::ShaderStage::Vertex,
            Stage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

/// A shader module paired with the entry point one stage uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StageSource {
    pub source: ShaderSource,
    pub stage: Stage,
    pub entry: &'static str,
}

/// The vertex + fragment shader pair of a pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ShaderSet {
    /// One module exposing both entry points.
    Combined {
        source: ShaderSource,
        vertex_entry: &'static str,
        fragment_entry: &'static str,
    },
    /// One module per stage, each exposing [`SPLIT_ENTRY`].
    Split {
        vertex: ShaderSource,
        fragment: ShaderSource,
    },
}

impl ShaderSet {
    pub fn vertex(&self) -> StageSource {
        match *self {
            ShaderSet::Combined { source, vertex_entry, .. } => StageSource {
                source,
                stage: Stage::Vertex,
                entry: vertex_entry,
            },
            ShaderSet::Split { vertex, .. } => StageSource {
                source: vertex,
                stage: Stage::Vertex,
                entry: SPLIT_ENTRY,
            },
        }
    }

    pub fn fragment(&self) -> StageSource {
        match *self {
            ShaderSet::Combined { source, fragment_entry, .. } => StageSource {
                source,
                stage: Stage::Fragment,
                entry: fragment_entry,
            },
            ShaderSet::Split { fragment, .. } => StageSource {
                source: fragment,
                stage: Stage::Fragment,
                entry: SPLIT_ENTRY,
            },
        }
    }

    /// Distinct modules in this set, in creation order.
    pub fn sources(&self) -> Vec<ShaderSource> {
        match *self {
            ShaderSet::Combined { source, .. } => vec![source],
            ShaderSet::Split { vertex, fragment } => vec![vertex, fragment],
        }
    }

    /// Compiles every module on the CPU and checks the entry points.
    ///
    /// This runs before any GPU object exists so that malformed source surfaces
    /// as a `PipelineError` instead of a device validation panic.
    pub fn validate(&self) -> Result<(), PipelineError> {
        let mut compiled = Vec::with_capacity(2);
        for source in self.sources() {
            compiled.push((source, compile(source)?));
        }

        for stage in [self.vertex(), self.fragment()] {
            let Some((_, module)) = compiled.iter().find(|(s, _)| *s == stage.source) else {
                continue;
            };
            check_entry_point(module, stage)?;
        }
        Ok(())
    }
}

fn compile(source: ShaderSource) -> Result<naga::Module, PipelineError> {
    let module = naga::front::wgsl::parse_str(source.wgsl).map_err(|e| PipelineError::Compile {
        module: source.label,
        message: e.emit_to_string(source.wgsl),
    })?;

    naga::valid::Validator::new(
        naga::valid::ValidationFlags::all(),
        naga::valid::Capabilities::empty(),
    )
    .validate(&module)
    .map_err(|e| PipelineError::Compile {
        module: source.label,
        message: e.emit_to_string(source.wgsl),
    })?;

    Ok(module)
}

fn check_entry_point(module: &naga::Module, stage: StageSource) -> Result<(), PipelineError> {
    let Some(ep) = module
        .entry_points
        .iter()
        .find(|ep| ep.name == stage.entry && ep.stage == stage.stage.naga())
    else {
        return Err(PipelineError::MissingEntryPoint {
            module: stage.source.label,
            stage: stage.stage.as_str(),
            entry: stage.entry,
        });
    };

    if stage.stage == Stage::Vertex {
        let count = location_inputs(module, &ep.function);
        if count > 0 {
            return Err(PipelineError::VertexInputs {
                entry: stage.entry,
                count,
            });
        }
    }
    Ok(())
}

/// Counts `@location` inputs, including those nested in struct arguments.
fn location_inputs(module: &naga::Module, function: &naga::Function) -> usize {
    function
        .arguments
        .iter()
        .map(|arg| match &arg.binding {
            Some(naga::Binding::Location { .. }) => 1,
            Some(_) => 0,
            None => match &module.types[arg.ty].inner {
                naga::TypeInner::Struct { members, .. } => members
                    .iter()
                    .filter(|m| matches!(m.binding, Some(naga::Binding::Location { .. })))
                    .count(),
                _ => 0,
            },
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMBINED: &str = r#"
        @vertex
        fn vs(@builtin(vertex_index) i: u32) -> @builtin(position) vec4f {
            var pos = array<vec2f, 3>(vec2f(0.0, 0.5), vec2f(-0.5, -0.5), vec2f(0.5, -0.5));
            return vec4f(pos[i], 0.0, 1.0);
        }

        @fragment
        fn fs() -> @location(0) vec4f {
            return vec4f(1.0, 0.0, 0.0, 1.0);
        }
    "#;

    const VERT_MAIN: &str = r#"
        @vertex
        fn main(@builtin(vertex_index) i: u32) -> @builtin(position) vec4f {
            let x = f32(i32(i) - 1) * 0.5;
            let y = select(-0.5, 0.5, i == 1u);
            return vec4f(x, y, 0.0, 1.0);
        }
    "#;

    const FRAG_MAIN: &str = r#"
        @fragment
        fn main() -> @location(0) vec4f {
            return vec4f(0.0, 1.0, 0.0, 1.0);
        }
    "#;

    const VERT_WITH_INPUTS: &str = r#"
        struct In {
            @location(0) pos: vec2f,
            @location(1) uv: vec2f,
        };

        @vertex
        fn main(v: In, @builtin(vertex_index) i: u32) -> @builtin(position) vec4f {
            return vec4f(v.pos + v.uv * f32(i), 0.0, 1.0);
        }
    "#;

    fn combined(wgsl: &'static str) -> ShaderSet {
        ShaderSet::Combined {
            source: ShaderSource::new("combined", wgsl),
            vertex_entry: "vs",
            fragment_entry: "fs",
        }
    }

    #[test]
    fn combined_set_validates() {
        assert_eq!(combined(COMBINED).validate(), Ok(()));
    }

    #[test]
    fn split_set_validates() {
        let set = ShaderSet::Split {
            vertex: ShaderSource::new("vert", VERT_MAIN),
            fragment: ShaderSource::new("frag", FRAG_MAIN),
        };
        assert_eq!(set.validate(), Ok(()));
        assert_eq!(set.vertex().entry, SPLIT_ENTRY);
        assert_eq!(set.fragment().source.label, "frag");
    }

    #[test]
    fn combined_set_has_one_module() {
        let set = combined(COMBINED);
        assert_eq!(set.sources().len(), 1);
        assert_eq!(set.vertex().source, set.fragment().source);
    }

    #[test]
    fn malformed_source_is_compile_error() {
        let err = combined("@vertex fn vs( -> {").validate().unwrap_err();
        assert!(matches!(err, PipelineError::Compile { module: "combined", .. }));
    }

    #[test]
    fn wrong_entry_name_is_reported() {
        let set = ShaderSet::Combined {
            source: ShaderSource::new("combined", COMBINED),
            vertex_entry: "vertex",
            fragment_entry: "fs",
        };
        assert_eq!(
            set.validate(),
            Err(PipelineError::MissingEntryPoint {
                module: "combined",
                stage: "vertex",
                entry: "vertex",
            })
        );
    }

    #[test]
    fn entry_with_wrong_stage_is_reported() {
        // `main` exists in the fragment module, but not as a vertex entry point.
        let set = ShaderSet::Split {
            vertex: ShaderSource::new("vert", FRAG_MAIN),
            fragment: ShaderSource::new("frag", FRAG_MAIN),
        };
        assert!(matches!(
            set.validate(),
            Err(PipelineError::MissingEntryPoint { stage: "vertex", .. })
        ));
    }

    #[test]
    fn vertex_inputs_are_rejected() {
        let set = ShaderSet::Split {
            vertex: ShaderSource::new("vert", VERT_WITH_INPUTS),
            fragment: ShaderSource::new("frag", FRAG_MAIN),
        };
        assert_eq!(
            set.validate(),
            Err(PipelineError::VertexInputs { entry: "main", count: 2 })
        );
    }
}
