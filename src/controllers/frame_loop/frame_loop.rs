use tracing::{debug, error, info};

use crate::controllers::frame_loop::data::hud_status::HudStatus;
use crate::controllers::frame_loop::data::startup_settings::StartupSettings;
use crate::controllers::frame_loop::errors::FrameLoopError;
use crate::controllers::frame_loop::ports::display_surface::DisplaySurface;
use crate::controllers::frame_loop::ports::input_source::InputSource;
use crate::core::actions::render_pass::render_pass::{RenderScheduler, RenderStats};
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfigError;
use crate::core::navigation::controls::ControlsSnapshot;
use crate::core::navigation::viewport_controller::ViewportController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Closed,
}

/// Drives one session: input in, render when the view changed, present every tick.
#[derive(Debug)]
pub struct FrameLoop {
    controller: ViewportController,
    scheduler: RenderScheduler,
    buffer: PixelBuffer,
    dirty: bool,
    passes: u64,
    last_render: Option<RenderStats>,
    resize_aware: bool,
}

impl FrameLoop {
    pub fn new(frame: FrameSize, settings: &StartupSettings) -> Result<Self, RenderConfigError> {
        Self::with_scheduler(frame, settings, RenderScheduler::new())
    }

    pub fn with_scheduler(
        frame: FrameSize,
        settings: &StartupSettings,
        scheduler: RenderScheduler,
    ) -> Result<Self, RenderConfigError> {
        let config = settings.render_config()?;

        Ok(Self {
            controller: ViewportController::new(frame, config, settings.hud_visible),
            scheduler,
            buffer: PixelBuffer::new(frame),
            dirty: true,
            passes: 0,
            last_render: None,
            resize_aware: settings.resize_aware,
        })
    }

    /// Runs one frame. A close request wins over every other input in the
    /// same snapshot and nothing is rendered or presented.
    ///
    /// A failed render pass is logged and the previously uploaded image stays
    /// on screen; only surface failures are returned.
    pub fn tick<S: DisplaySurface>(
        &mut self,
        controls: &ControlsSnapshot,
        surface: &mut S,
    ) -> Result<TickOutcome, FrameLoopError<S::Error>> {
        if controls.close_requested {
            return Ok(TickOutcome::Closed);
        }

        self.dirty |= self.controller.apply(controls);

        if self.dirty {
            self.dirty = false;

            match self.scheduler.render(
                self.controller.viewport(),
                self.controller.config(),
                &mut self.buffer,
            ) {
                Ok(stats) => {
                    surface.upload(&self.buffer).map_err(FrameLoopError::Surface)?;
                    self.passes += 1;
                    self.last_render = Some(stats);
                }
                Err(err) => {
                    error!(
                        %err,
                        viewport = ?self.controller.viewport(),
                        "render pass failed, keeping the previous image"
                    );
                }
            }
        }

        let hud = self.controller.hud_visible().then(|| self.hud_status());
        surface
            .present(hud.as_ref())
            .map_err(FrameLoopError::Surface)?;

        Ok(TickOutcome::Continue)
    }

    /// Polls and ticks until the input asks to close.
    pub fn run<I: InputSource, S: DisplaySurface>(
        &mut self,
        input: &mut I,
        surface: &mut S,
    ) -> Result<(), FrameLoopError<S::Error>> {
        info!(
            width = self.buffer.frame().width(),
            height = self.buffer.frame().height(),
            workers = self.scheduler.workers(),
            "frame loop started"
        );

        loop {
            let controls = input.poll();

            if self.tick(&controls, surface)? == TickOutcome::Closed {
                info!(passes = self.passes, "frame loop closed");
                return Ok(());
            }
        }
    }

    /// Follows a window size change. Only resize-aware sessions reallocate;
    /// otherwise the existing image is kept and stretched by the surface.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.resize_aware {
            debug!(width, height, "resize ignored, render size is fixed");
            return false;
        }

        if !self.controller.resize(width, height) {
            return false;
        }

        self.buffer.resize(self.controller.frame_size());
        self.dirty = true;

        true
    }

    #[must_use]
    pub fn hud_status(&self) -> HudStatus {
        let viewport = self.controller.viewport();
        let config = self.controller.config();

        HudStatus {
            zoom: viewport.zoom,
            magnification: self.controller.magnification(),
            max_iterations: config.max_iterations(),
            colour_mode: config.colour_mode,
            fractal: config.fractal,
            last_render: self.last_render.map(|stats| stats.duration),
        }
    }

    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn controller(&self) -> &ViewportController {
        &self.controller
    }

    #[must_use]
    pub fn last_render(&self) -> Option<RenderStats> {
        self.last_render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("surface lost")]
    struct SurfaceLost;

    #[derive(Debug, Default)]
    struct RecordingSurface {
        uploads: usize,
        presents: Vec<Option<HudStatus>>,
        fail_present: bool,
    }

    impl DisplaySurface for RecordingSurface {
        type Error = SurfaceLost;

        fn upload(&mut self, _buffer: &PixelBuffer) -> Result<(), Self::Error> {
            self.uploads += 1;
            Ok(())
        }

        fn present(&mut self, hud: Option<&HudStatus>) -> Result<(), Self::Error> {
            if self.fail_present {
                return Err(SurfaceLost);
            }

            self.presents.push(hud.copied());
            Ok(())
        }
    }

    fn frame_loop(settings: StartupSettings) -> FrameLoop {
        FrameLoop::with_scheduler(
            FrameSize::new(80, 60).unwrap(),
            &settings,
            RenderScheduler::with_workers(3),
        )
        .unwrap()
    }

    fn idle() -> ControlsSnapshot {
        ControlsSnapshot::default()
    }

    #[test]
    fn test_first_tick_renders() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();

        assert!(frame_loop.is_dirty());
        assert_eq!(frame_loop.tick(&idle(), &mut surface).unwrap(), TickOutcome::Continue);

        assert_eq!(frame_loop.passes(), 1);
        assert!(!frame_loop.is_dirty());
        assert_eq!(surface.uploads, 1);
        assert_eq!(surface.presents.len(), 1);
        assert_eq!(frame_loop.buffer().pixel(30, 40), Some(Colour::BLACK));
    }

    #[test]
    fn test_idle_tick_reuses_image_but_presents() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();

        frame_loop.tick(&idle(), &mut surface).unwrap();
        frame_loop.tick(&idle(), &mut surface).unwrap();
        frame_loop.tick(&idle(), &mut surface).unwrap();

        assert_eq!(frame_loop.passes(), 1);
        assert_eq!(surface.uploads, 1);
        assert_eq!(surface.presents.len(), 3);
    }

    #[test]
    fn test_close_stops_before_rendering() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        let controls = ControlsSnapshot {
            close_requested: true,
            right: true,
            ..Default::default()
        };

        assert_eq!(frame_loop.tick(&controls, &mut surface).unwrap(), TickOutcome::Closed);
        assert_eq!(frame_loop.passes(), 0);
        assert_eq!(surface.uploads, 0);
        assert!(surface.presents.is_empty());
    }

    #[test]
    fn test_hud_toggle_does_not_render() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        frame_loop.tick(&idle(), &mut surface).unwrap();

        let toggle = ControlsSnapshot {
            toggle_hud: true,
            ..Default::default()
        };
        frame_loop.tick(&toggle, &mut surface).unwrap();

        assert_eq!(frame_loop.passes(), 1);
        assert!(surface.presents[0].is_some());
        assert_eq!(surface.presents[1], None);
    }

    #[test]
    fn test_hidden_hud_at_startup() {
        let mut frame_loop = frame_loop(StartupSettings {
            hud_visible: false,
            ..Default::default()
        });
        let mut surface = RecordingSurface::default();

        frame_loop.tick(&idle(), &mut surface).unwrap();

        assert_eq!(surface.presents, vec![None]);
    }

    #[test]
    fn test_each_change_renders_once() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        frame_loop.tick(&idle(), &mut surface).unwrap();

        let pan = ControlsSnapshot {
            left: true,
            ..Default::default()
        };
        frame_loop.tick(&pan, &mut surface).unwrap();
        frame_loop.tick(&pan, &mut surface).unwrap();

        assert_eq!(frame_loop.passes(), 3);
    }

    #[test]
    fn test_hud_status_reflects_last_pass() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();

        assert_eq!(frame_loop.hud_status().last_render, None);
        frame_loop.tick(&idle(), &mut surface).unwrap();

        let hud = frame_loop.hud_status();
        assert_eq!(hud.max_iterations, 50);
        assert_eq!(hud.magnification, 1.0);
        assert_eq!(hud.last_render, frame_loop.last_render().map(|s| s.duration));
        assert!(hud.last_render.is_some());
    }

    #[test]
    fn test_resize_marks_dirty_and_resizes_buffer() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        frame_loop.tick(&idle(), &mut surface).unwrap();

        assert!(frame_loop.resize(120, 90));
        assert!(frame_loop.is_dirty());
        assert_eq!(frame_loop.buffer().frame(), FrameSize::new(120, 90).unwrap());

        frame_loop.tick(&idle(), &mut surface).unwrap();
        assert_eq!(frame_loop.passes(), 2);
    }

    #[test]
    fn test_resize_to_zero_is_ignored() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        frame_loop.tick(&idle(), &mut surface).unwrap();

        assert!(!frame_loop.resize(0, 0));
        assert!(!frame_loop.is_dirty());
        assert_eq!(frame_loop.buffer().frame(), FrameSize::new(80, 60).unwrap());
    }

    #[test]
    fn test_fixed_size_session_ignores_resize() {
        let mut frame_loop = frame_loop(StartupSettings {
            resize_aware: false,
            ..Default::default()
        });
        let mut surface = RecordingSurface::default();
        frame_loop.tick(&idle(), &mut surface).unwrap();

        assert!(!frame_loop.resize(120, 90));
        assert!(!frame_loop.is_dirty());
        assert_eq!(frame_loop.buffer().frame(), FrameSize::new(80, 60).unwrap());
    }

    #[test]
    fn test_surface_failure_is_reported() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface {
            fail_present: true,
            ..Default::default()
        };

        let result = frame_loop.tick(&idle(), &mut surface);

        assert!(matches!(result, Err(FrameLoopError::Surface(SurfaceLost))));
    }

    #[test]
    fn test_failed_pass_keeps_session_and_previous_image() {
        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        frame_loop.tick(&idle(), &mut surface).unwrap();
        let previous = frame_loop.buffer().clone();

        let mut collapsed = frame_loop.controller().viewport();
        collapsed.zoom = f32::INFINITY;
        frame_loop.controller.set_viewport_unchecked(collapsed);
        frame_loop.dirty = true;

        assert_eq!(frame_loop.tick(&idle(), &mut surface).unwrap(), TickOutcome::Continue);
        assert_eq!(frame_loop.passes(), 1);
        assert_eq!(surface.uploads, 1);
        assert_eq!(surface.presents.len(), 2);
        assert!(!frame_loop.is_dirty());
        assert_eq!(frame_loop.buffer(), &previous);
    }

    #[test]
    fn test_run_stops_on_close() {
        struct Scripted(Vec<ControlsSnapshot>);

        impl InputSource for Scripted {
            fn poll(&mut self) -> ControlsSnapshot {
                if self.0.is_empty() {
                    ControlsSnapshot {
                        close_requested: true,
                        ..Default::default()
                    }
                } else {
                    self.0.remove(0)
                }
            }
        }

        let mut frame_loop = frame_loop(StartupSettings::default());
        let mut surface = RecordingSurface::default();
        let mut input = Scripted(vec![
            idle(),
            ControlsSnapshot {
                cycle_colour: true,
                ..Default::default()
            },
            idle(),
        ]);

        frame_loop.run(&mut input, &mut surface).unwrap();

        assert_eq!(frame_loop.passes(), 2);
        assert_eq!(surface.presents.len(), 3);
    }

    #[test]
    fn test_zero_iterations_rejected_at_startup() {
        let settings = StartupSettings {
            max_iterations: 0,
            ..Default::default()
        };

        assert_eq!(
            FrameLoop::new(FrameSize::new(10, 10).unwrap(), &settings).err(),
            Some(RenderConfigError::ZeroMaxIterations)
        );
    }
}
