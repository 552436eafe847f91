use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::frame::RenderCtx;
use crate::lifecycle::Phase;
use crate::time::{FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Size at startup. The surface keeps this size for the whole run.
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "trigon".to_string(),
            initial_size: LogicalSize::new(1280.0, 720.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, runs setup once, then drives frames until the window
    /// is closed.
    ///
    /// A failure during setup (or a fatal surface error later) ends the event
    /// loop and is returned here, unreported; the caller is the error boundary.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        state.finish()
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    phase: Phase,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            phase: Phase::Uninitialized,
            failure: None,
        }
    }

    fn finish(self) -> Result<()> {
        match self.failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Records the first failure, enters `Failed`, and stops the loop.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.phase.fail();
        if self.failure.is_none() {
            self.failure = Some(err);
        }
        event_loop.exit();
    }

    /// Initializing: window, surface, adapter and device.
    fn initialize(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        self.phase.advance(Phase::Initializing);

        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        let entry = WindowEntryTryBuilder {
            clock: FrameClock::default(),
            window,
            gpu_builder: |w| pollster::block_on(Gpu::new(w, gpu_init)),
        }
        .try_build()
        .context("GPU initialization failed")?;

        self.phase.advance(Phase::Ready);
        Ok(entry)
    }

    /// Ready: hand the configured device to the app so it can build its pipeline.
    fn prepare(&mut self, entry: &WindowEntry) -> Result<()> {
        let app = &mut self.app;
        entry.with_gpu(|gpu| {
            let rctx = RenderCtx {
                device: gpu.device(),
                surface_format: gpu.surface_format(),
            };
            app.on_ready(&rctx)
        })?;

        self.phase.advance(Phase::Rendering);
        Ok(())
    }

    fn draw_frame(&mut self) -> Result<()> {
        let (app, entry) = (&mut self.app, &mut self.entry);
        let Some(entry) = entry.as_mut() else {
            return Ok(());
        };

        entry.with_mut(|fields| {
            let ft: FrameTime = fields.clock.tick();
            log::trace!("frame {} (dt {:.4}s)", ft.frame_index, ft.dt);

            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                time: ft,
            };
            app.on_frame(&mut ctx)
        })?;

        // Re-arm for the next display refresh.
        entry.with_window(|w| w.request_redraw());
        Ok(())
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Setup runs once; later resumes keep the existing surface.
        if self.phase != Phase::Uninitialized {
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        let entry = match self.initialize(event_loop) {
            Ok(entry) => entry,
            Err(e) => return self.fail(event_loop, e),
        };

        if let Err(e) = self.prepare(&entry) {
            return self.fail(event_loop, e);
        }

        entry.with_window(|w| w.request_redraw());
        self.entry = Some(entry);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                self.entry = None;
                event_loop.exit();
            }

            WindowEvent::RedrawRequested if self.phase.is_rendering() => {
                if let Err(e) = self.draw_frame() {
                    self.fail(event_loop, e);
                }
            }

            // The surface keeps its startup size; resizes are not followed.
            _ => {}
        }
    }
}
