use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use egui_winit::State as EguiWinitState;
use pixels::{Pixels, SurfaceTexture, wgpu};
use thiserror::Error;
use tracing::debug;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::adapters::pixel_format::copy_colours_to_rgba;
use crate::controllers::frame_loop::data::hud_status::HudStatus;
use crate::controllers::frame_loop::ports::display_surface::DisplaySurface;
use crate::core::data::frame_size::FrameSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::hud::draw_hud;

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create or render the pixels surface: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("failed to resize the pixels surface: {0}")]
    Texture(#[from] pixels::TextureError),
}

/// Window surface backed by a `pixels` framebuffer with an egui overlay.
///
/// The framebuffer always has the size of the last uploaded image and is
/// scaled to the window, so a fixed-size session simply stretches.
pub struct PixelsSurface {
    window: &'static Window,
    pixels: Pixels<'static>,
    buffer_frame: FrameSize,
    surface_width: u32,
    surface_height: u32,
    egui_ctx: EguiContext,
    egui_state: EguiWinitState,
    egui_renderer: EguiRenderer,
}

impl PixelsSurface {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        frame: FrameSize,
    ) -> Result<Self, SurfaceError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(frame.width(), frame.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let egui_ctx = EguiContext::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Ok(Self {
            window,
            pixels,
            buffer_frame: frame,
            surface_width: size.width,
            surface_height: size.height,
            egui_ctx,
            egui_state,
            egui_renderer,
        })
    }

    /// Forwards a window event to egui.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(self.window, event);
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.egui_ctx.set_pixels_per_point(scale_factor as f32);
    }

    /// Follows the window size. Zero sizes (a minimised window) are skipped.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.surface_width = width;
        self.surface_height = height;

        Ok(())
    }

    fn resize_buffer(&mut self, frame: FrameSize) -> Result<(), SurfaceError> {
        if frame == self.buffer_frame {
            return Ok(());
        }

        self.pixels.resize_buffer(frame.width(), frame.height())?;
        self.buffer_frame = frame;
        debug!(width = frame.width(), height = frame.height(), "framebuffer resized");

        Ok(())
    }
}

impl DisplaySurface for PixelsSurface {
    type Error = SurfaceError;

    fn upload(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
        self.resize_buffer(buffer.frame())?;
        copy_colours_to_rgba(buffer.pixels(), self.pixels.frame_mut());

        Ok(())
    }

    fn present(&mut self, hud: Option<&HudStatus>) -> Result<(), Self::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let raw_input = self.egui_state.take_egui_input(self.window);
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            if let Some(hud) = hud {
                draw_hud(ctx, hud);
            }
        });
        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output);

        let pixels_per_point = self.egui_ctx.pixels_per_point();
        let clipped_primitives = self.egui_ctx.tessellate(egui_output.shapes, pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point,
        };
        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("hud"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }
}
