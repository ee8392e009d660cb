//! Application shell: window, surface, and the event loop.

use std::sync::Arc;

use kurbo::Point;
use peniko::Color;
use roundel_core::{Disc, Editor, EditorConfig, PointerButton};
use vello::util::{RenderContext, RenderSurface};
use vello::wgpu::PresentMode;
use vello::{AaConfig, RenderParams, RendererOptions, Scene};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::render::{self, RendererError};

/// Runtime state, created once the window and surface exist.
struct AppState {
    window: Arc<Window>,
    surface: RenderSurface<'static>,
    renderer: vello::Renderer,
    /// Blits the Rgba8Unorm render texture to the surface format.
    blitter: vello::wgpu::util::TextureBlitter,
    scene: Scene,
    editor: Editor,
    /// Last known pointer position; button events carry no position.
    cursor: Point,
}

/// Main application struct.
pub struct App {
    config: EditorConfig,
    state: Option<AppState>,
    render_cx: Option<RenderContext>,
}

impl App {
    /// Create an application with the default editor configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Create an application with a custom editor configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            state: None,
            render_cx: None,
        }
    }

    /// Run the application until the window closes.
    pub async fn run() {
        let event_loop = EventLoop::new().expect("Failed to create event loop");
        let mut app = App::new();
        event_loop.run_app(&mut app).expect("Event loop error");
    }

    /// Finish initialization once the surface exists.
    fn finish_init(&mut self, window: Arc<Window>, surface: RenderSurface<'static>) {
        let render_cx = self
            .render_cx
            .as_ref()
            .expect("RenderContext not initialized");
        let device = &render_cx.devices[surface.dev_id].device;

        let renderer = vello::Renderer::new(device, RendererOptions::default())
            .map_err(|e| RendererError::InitFailed(e.to_string()))
            .expect("Failed to create Vello renderer");

        let blitter = vello::wgpu::util::TextureBlitter::new(device, surface.config.format);

        // The editor works in the surface's physical coordinates, which
        // is also the space pointer events arrive in.
        let mut config = self.config.clone();
        config.width = surface.config.width as f64;
        config.height = surface.config.height as f64;
        let radius = config.disc_radius;
        let color = config.disc_color;

        let mut editor = Editor::new(config);
        editor.add_disc(Disc::new(Point::new(55.0, 55.0), radius, color));

        log::info!(
            "Roundel initialized - {}x{}",
            surface.config.width,
            surface.config.height
        );
        log::info!("Left-drag moves a disc, right-click creates one");

        self.state = Some(AppState {
            window: window.clone(),
            surface,
            renderer,
            blitter,
            scene: Scene::new(),
            editor,
            cursor: Point::ZERO,
        });

        window.request_redraw();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a winit mouse button onto the core's closed button set.
fn convert_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        log::info!("Creating window...");

        let window_attrs = Window::default_attributes()
            .with_title("Roundel")
            .with_resizable(false)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );

        let size = window.inner_size();
        let (width, height) = if size.width == 0 || size.height == 0 {
            (self.config.width as u32, self.config.height as u32)
        } else {
            (size.width, size.height)
        };

        let render_cx = self.render_cx.get_or_insert_with(RenderContext::new);
        let surface = pollster::block_on(render_cx.create_surface(
            window.clone(),
            width,
            height,
            PresentMode::AutoVsync,
        ))
        .expect("Failed to create surface");

        // Transmute lifetime to 'static - safe because App owns both
        // the window and the surface.
        let surface: RenderSurface<'static> = unsafe { std::mem::transmute(surface) };
        self.finish_init(window, surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width == 0 || size.height == 0 {
                    return;
                }
                if let Some(render_cx) = self.render_cx.as_mut() {
                    render_cx.resize_surface(&mut state.surface, size.width, size.height);
                }
                state.window.request_redraw();
            }

            WindowEvent::CursorMoved { position, .. } => {
                state.cursor = Point::new(position.x, position.y);
                state.editor.on_cursor_moved(state.cursor);
                state.window.request_redraw();
            }

            WindowEvent::MouseInput {
                state: element_state,
                button,
                ..
            } => {
                let Some(button) = convert_button(button) else {
                    return;
                };
                let pressed = element_state == ElementState::Pressed;
                let dispatch = state.editor.on_mouse_button(button, pressed, state.cursor);
                log::trace!("{button:?} {element_state:?} -> {dispatch:?}");
                state.window.request_redraw();
            }

            WindowEvent::RedrawRequested => {
                let selected = state.editor.selection();
                render::build_scene(&mut state.scene, &state.editor, selected);

                let Some(render_cx) = self.render_cx.as_ref() else {
                    return;
                };
                let device_handle = &render_cx.devices[state.surface.dev_id];
                let device = &device_handle.device;
                let queue = &device_handle.queue;

                let surface_texture = match state.surface.surface.get_current_texture() {
                    vello::wgpu::CurrentSurfaceTexture::Success(texture)
                    | vello::wgpu::CurrentSurfaceTexture::Suboptimal(texture) => texture,
                    status => {
                        log::warn!("{}", RendererError::Surface(format!("{status:?}")));
                        return;
                    }
                };

                let width = state.surface.config.width;
                let height = state.surface.config.height;

                let params = RenderParams {
                    base_color: Color::WHITE,
                    width,
                    height,
                    antialiasing_method: AaConfig::Area,
                };

                // Vello's compute shaders need a StorageBinding texture,
                // which WebGPU only allows for Rgba8Unorm; the surface
                // format may be Bgra8Unorm, so render there and blit.
                let render_texture = device.create_texture(&vello::wgpu::TextureDescriptor {
                    label: Some("vello render texture"),
                    size: vello::wgpu::Extent3d {
                        width,
                        height,
                        depth_or_array_layers: 1,
                    },
                    mip_level_count: 1,
                    sample_count: 1,
                    dimension: vello::wgpu::TextureDimension::D2,
                    format: vello::wgpu::TextureFormat::Rgba8Unorm,
                    usage: vello::wgpu::TextureUsages::STORAGE_BINDING
                        | vello::wgpu::TextureUsages::COPY_SRC
                        | vello::wgpu::TextureUsages::TEXTURE_BINDING,
                    view_formats: &[],
                });
                let render_view =
                    render_texture.create_view(&vello::wgpu::TextureViewDescriptor::default());

                if let Err(e) = state.renderer.render_to_texture(
                    device,
                    queue,
                    &state.scene,
                    &render_view,
                    &params,
                ) {
                    log::error!("{}", RendererError::RenderFailed(e.to_string()));
                    return;
                }

                let surface_view = surface_texture
                    .texture
                    .create_view(&vello::wgpu::TextureViewDescriptor::default());

                let mut encoder =
                    device.create_command_encoder(&vello::wgpu::CommandEncoderDescriptor {
                        label: Some("blit encoder"),
                    });
                state
                    .blitter
                    .copy(device, &mut encoder, &render_view, &surface_view);
                queue.submit(std::iter::once(encoder.finish()));

                surface_texture.present();
            }

            _ => {}
        }
    }
}
