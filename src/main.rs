//! Tess4D - interactive tesseract wireframe viewer
//!
//! Maintains a tesseract in 4D space, applies drag-controlled 4D rotations,
//! projects it to the screen plane, and draws the wireframe every frame.

use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Fullscreen, Window, WindowId},
};

use tess4d::config::AppConfig;
use tess4d::input::{InputAction, InputMapper};
use tess4d_input::{ViewControl, ViewController};
use tess4d_math::Tesseract;
use tess4d_render::{
    painter_order,
    pipeline::{LineVertex, MarkerInstance, MarkerPipeline, ViewUniforms, WireframePipeline},
    Projector, RenderContext, View,
};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<Arc<Window>>,
    render_context: Option<RenderContext>,
    wireframe_pipeline: Option<WireframePipeline>,
    marker_pipeline: Option<MarkerPipeline>,
    /// The rotated model
    tesseract: Tesseract,
    projector: Projector,
    view: View,
    controller: ViewController,
}

impl App {
    fn new() -> Self {
        // Load configuration
        let config = AppConfig::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        });

        let tesseract = Tesseract::new(config.view.shape_size);
        log::info!(
            "Tesseract topology: {} vertices, {} edges",
            tesseract.vertices().len(),
            tesseract.edges().len()
        );

        let projector = Projector::new(
            config.view.view_distance,
            config.view.near,
            config.view.far,
        );

        let view = View::new(
            config.view.initial_scale,
            config.view.zoom_step,
            config.view.fov_factor,
        );

        let controller =
            ViewController::new().with_rotation_sensitivity(config.input.rotation_sensitivity);

        Self {
            config,
            window: None,
            render_context: None,
            wireframe_pipeline: None,
            marker_pipeline: None,
            tesseract,
            projector,
            view,
            controller,
        }
    }

    fn is_fullscreen(&self) -> bool {
        self.window
            .as_ref()
            .map(|w| w.fullscreen().is_some())
            .unwrap_or(false)
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        if let Some(window) = &self.window {
            let mode = fullscreen.then(|| Fullscreen::Borderless(None));
            window.set_fullscreen(mode);
        }
    }

    fn reset_view(&mut self) {
        self.view.reset();
        self.controller.reset();
        log::info!("View reset");
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let fullscreen = self
                .config
                .window
                .fullscreen
                .then(|| Fullscreen::Borderless(None));

            let window_attributes = Window::default_attributes()
                .with_title(&self.config.window.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.config.window.width,
                    self.config.window.height,
                ))
                .with_fullscreen(fullscreen);

            let window = Arc::new(
                event_loop
                    .create_window(window_attributes)
                    .expect("Failed to create window"),
            );

            // Create render context
            let render_context = pollster::block_on(RenderContext::new(
                window.clone(),
                self.config.window.vsync,
            ));

            // Create pipelines
            let wireframe_pipeline = WireframePipeline::new(
                &render_context.device,
                render_context.config.format,
            );
            let marker_pipeline = MarkerPipeline::new(
                &render_context.device,
                render_context.config.format,
            );

            self.window = Some(window);
            self.render_context = Some(render_context);
            self.wireframe_pipeline = Some(wireframe_pipeline);
            self.marker_pipeline = Some(marker_pipeline);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(ctx) = &mut self.render_context {
                    ctx.resize(physical_size);
                }
            }

            WindowEvent::ModifiersChanged(modifiers) => {
                self.controller
                    .process_modifiers(modifiers.state().control_key());
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let action =
                        InputMapper::map_keyboard(key, event.state, self.is_fullscreen());

                    match action {
                        Some(InputAction::Exit) => event_loop.exit(),
                        Some(InputAction::LeaveFullscreen) => self.set_fullscreen(false),
                        Some(InputAction::ToggleFullscreen) => {
                            self.set_fullscreen(!self.is_fullscreen());
                        }
                        Some(InputAction::ResetView) => self.reset_view(),
                        None => {}
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::CursorMoved { position, .. } => {
                if let Some(angles) = self.controller.process_cursor_moved(
                    position.x as f32,
                    position.y as f32,
                    &mut self.view,
                ) {
                    self.tesseract.rotate(angles);
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                    winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                if scroll != 0.0 {
                    self.controller.process_scroll(scroll, &mut self.view);
                }
            }

            WindowEvent::RedrawRequested => {
                // Project the current vertex positions with the zoom-derived
                // field of view
                let projected = self
                    .projector
                    .project_all(self.view.fov(), self.tesseract.vertices());

                let mut line_vertices =
                    Vec::with_capacity(self.tesseract.edges().len() * 2);
                for edge in self.tesseract.edges() {
                    let a = projected[edge.a];
                    let b = projected[edge.b];
                    line_vertices.push(LineVertex { position: [a.x, a.y] });
                    line_vertices.push(LineVertex { position: [b.x, b.y] });
                }

                // Markers composite back-to-front
                let marker_instances: Vec<MarkerInstance> = painter_order(&projected)
                    .into_iter()
                    .map(|i| MarkerInstance {
                        center: [projected[i].x, projected[i].y],
                    })
                    .collect();

                if let (Some(ctx), Some(wireframe_pipeline), Some(marker_pipeline)) = (
                    &self.render_context,
                    &mut self.wireframe_pipeline,
                    &mut self.marker_pipeline,
                ) {
                    wireframe_pipeline.upload_edges(&ctx.device, &ctx.queue, &line_vertices);
                    marker_pipeline.upload_markers(&ctx.device, &ctx.queue, &marker_instances);

                    let rendering = &self.config.rendering;
                    let uniforms = ViewUniforms {
                        scale: self.view.scale,
                        marker_radius: rendering.marker_diameter / 2.0,
                        offset: [self.view.offset_x, self.view.offset_y],
                        resolution: [ctx.size.width as f32, ctx.size.height as f32],
                        _padding: [0.0; 2],
                        edge_color: rendering.edge_color,
                        fill_color: rendering.vertex_fill_color,
                        outline_color: rendering.vertex_outline_color,
                    };
                    wireframe_pipeline.update_uniforms(&ctx.queue, &uniforms);
                    marker_pipeline.update_uniforms(&ctx.queue, &uniforms);

                    // Get surface texture
                    let output = match ctx.surface.get_current_texture() {
                        Ok(output) => output,
                        Err(wgpu::SurfaceError::Lost) => {
                            if let Some(ctx) = &mut self.render_context {
                                ctx.resize(ctx.size);
                            }
                            if let Some(window) = &self.window {
                                window.request_redraw();
                            }
                            return;
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            log::warn!("Surface error: {:?}", e);
                            return;
                        }
                    };

                    let view_texture = output
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());

                    let mut encoder = ctx.device.create_command_encoder(
                        &wgpu::CommandEncoderDescriptor {
                            label: Some("Frame Encoder"),
                        },
                    );

                    let bg = &rendering.background_color;
                    wireframe_pipeline.render(
                        &mut encoder,
                        &view_texture,
                        wgpu::Color {
                            r: bg[0] as f64,
                            g: bg[1] as f64,
                            b: bg[2] as f64,
                            a: bg[3] as f64,
                        },
                    );
                    marker_pipeline.render(&mut encoder, &view_texture);

                    // Submit
                    ctx.queue.submit(std::iter::once(encoder.finish()));
                    output.present();
                }

                // Request next frame (continuous repaint)
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

fn main() {
    // Initialize logging
    env_logger::init();
    log::info!("Starting Tess4D");

    // Create event loop
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    // Create and run application
    let mut app = App::new();
    event_loop.run_app(&mut app).expect("Event loop error");
}
