use anyhow::{Context, Result};

use trigon_engine::core::{App, FrameCtx};
use trigon_engine::device::GpuInit;
use trigon_engine::frame::{FrameDriver, FramePlan, RenderCtx};
use trigon_engine::pipeline::ShaderSet;
use trigon_engine::window::{Runtime, RuntimeConfig};

/// Draws one hardcoded triangle on every frame.
pub struct TriangleApp {
    shaders: ShaderSet,
    driver: Option<FrameDriver>,
}

impl TriangleApp {
    pub fn new(shaders: ShaderSet) -> Self {
        Self {
            shaders,
            driver: None,
        }
    }
}

impl App for TriangleApp {
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let driver = FrameDriver::new(ctx, self.shaders).context("pipeline creation failed")?;
        log::info!(
            "triangle app ready ({} shader module(s))",
            self.shaders.sources().len()
        );
        self.driver = Some(driver);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
        let Some(driver) = self.driver.as_ref() else {
            return Ok(());
        };

        let plan = FramePlan::for_frame(ctx.time.frame_index);
        ctx.render(|target| driver.record(target, &plan))?;
        Ok(())
    }
}

/// Runs the triangle program with `shaders` until its window is closed.
pub fn run(title: &str, shaders: ShaderSet) -> Result<()> {
    let config = RuntimeConfig {
        title: title.to_string(),
        ..Default::default()
    };
    Runtime::run(config, GpuInit::default(), TriangleApp::new(shaders))
}
