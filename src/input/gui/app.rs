//! Window event loop driving the frame loop.

use std::time::Instant;

use thiserror::Error;
use tracing::{error, info};
use winit::{
    dpi::LogicalSize,
    error::{EventLoopError, OsError},
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowBuilder},
};

use crate::controllers::frame_loop::data::startup_settings::StartupSettings;
use crate::controllers::frame_loop::errors::FrameLoopError;
use crate::controllers::frame_loop::frame_loop::{FrameLoop, TickOutcome};
use crate::controllers::frame_loop::ports::input_source::InputSource;
use crate::core::data::frame_size::{FrameSize, FrameSizeError};
use crate::core::data::render_config::RenderConfigError;
use crate::input::gui::keyboard::KeyboardState;
use crate::presenters::pixels::surface::{PixelsSurface, SurfaceError};

const WINDOW_TITLE: &str = "Escape Explorer";
const DEFAULT_WINDOW_SIZE: LogicalSize<f64> = LogicalSize::new(1024.0, 768.0);
const MIN_WINDOW_SIZE: LogicalSize<f64> = LogicalSize::new(200.0, 200.0);

#[derive(Debug, Error)]
pub enum GuiError {
    #[error("event loop failed: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    FrameSize(#[from] FrameSizeError),
    #[error(transparent)]
    Config(#[from] RenderConfigError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error(transparent)]
    Frame(#[from] FrameLoopError<SurfaceError>),
}

/// Opens the window and runs the explorer until it is closed.
pub fn run_gui(settings: StartupSettings) -> Result<(), GuiError> {
    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE)
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let frame = FrameSize::new(size.width.max(1), size.height.max(1))?;
    let mut surface = PixelsSurface::new(window, &event_loop, frame)?;
    let mut frame_loop = FrameLoop::new(frame, &settings)?;
    let mut keyboard = KeyboardState::default();
    let frame_interval = settings.frame_interval();
    let mut next_tick = Instant::now();
    let mut failure: Option<GuiError> = None;

    info!(
        width = frame.width(),
        height = frame.height(),
        fps = settings.fps,
        "window opened"
    );

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => {
            surface.handle_window_event(event);

            match event {
                WindowEvent::CloseRequested => {
                    keyboard.request_close();
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { event, .. } => {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        keyboard.handle_key_event(key_code, event.state);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    keyboard.handle_wheel(*delta);
                }
                WindowEvent::Focused(false) => {
                    keyboard.release_all();
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = surface.resize_surface(size.width, size.height) {
                        error!(%err, "surface resize failed");
                        failure = Some(err.into());
                        elwt.exit();
                        return;
                    }
                    frame_loop.resize(size.width, size.height);
                    window.request_redraw();
                }
                WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                    surface.set_scale_factor(*scale_factor);
                }
                WindowEvent::RedrawRequested => {
                    let controls = keyboard.poll();

                    match frame_loop.tick(&controls, &mut surface) {
                        Ok(TickOutcome::Continue) => {}
                        Ok(TickOutcome::Closed) => elwt.exit(),
                        Err(err) => {
                            error!(%err, "frame failed");
                            failure = Some(err.into());
                            elwt.exit();
                        }
                    }
                }
                _ => {}
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();

            if now >= next_tick {
                window.request_redraw();
                next_tick = now + frame_interval;
            }

            elwt.set_control_flow(ControlFlow::WaitUntil(next_tick));
        }
        _ => {}
    })?;

    info!(passes = frame_loop.passes(), "window closed");

    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
