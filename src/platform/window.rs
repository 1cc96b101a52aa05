//! Native window surface
//!
//! Events delivered by winit are classified and queued here until the
//! simulation drains them with `poll_event`. Draw calls are batched into a
//! vertex list and submitted on `present`.

use std::collections::VecDeque;
use std::sync::Arc;

use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::window::Window;

use crate::error::Result;
use crate::renderer::{RenderState, Vertex, shapes};
use crate::surface::{Bounds, Color, DisplaySurface, InputEvent, Rect};

/// Map a winit window event to the simulation's event kinds
pub fn classify(event: &WindowEvent) -> InputEvent {
    match event {
        WindowEvent::CloseRequested => InputEvent::Quit,
        WindowEvent::KeyboardInput { event, .. } => {
            by_state(event.state, InputEvent::KeyDown, InputEvent::KeyUp)
        }
        WindowEvent::MouseInput { state, .. } => {
            by_state(*state, InputEvent::MouseDown, InputEvent::MouseUp)
        }
        _ => InputEvent::Other,
    }
}

fn by_state(state: ElementState, pressed: InputEvent, released: InputEvent) -> InputEvent {
    match state {
        ElementState::Pressed => pressed,
        ElementState::Released => released,
    }
}

pub struct WindowSurface {
    window: Arc<Window>,
    renderer: RenderState,
    events: VecDeque<InputEvent>,
    draw_color: Color,
    clear_color: Color,
    vertices: Vec<Vertex>,
}

impl WindowSurface {
    /// Create the GPU surface and renderer for `window`
    pub fn new(window: Arc<Window>, vsync: bool) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;
        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let renderer = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width,
            size.height,
            vsync,
        ))?;

        Ok(Self {
            window,
            renderer,
            events: VecDeque::new(),
            draw_color: Color::rgb(0, 0, 0),
            clear_color: Color::rgb(0, 0, 0),
            vertices: Vec::new(),
        })
    }

    /// Queue an event for the next `poll_event` drain
    pub fn queue_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn resize(&mut self, size: PhysicalSize<u32>) {
        log::debug!("Window resized to {}x{}", size.width, size.height);
        self.renderer.resize(size.width, size.height);
    }
}

impl DisplaySurface for WindowSurface {
    fn size(&self) -> Bounds {
        let size = self.window.inner_size();
        Bounds::new(
            i32::try_from(size.width).unwrap_or(i32::MAX),
            i32::try_from(size.height).unwrap_or(i32::MAX),
        )
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn clear(&mut self) {
        self.clear_color = self.draw_color;
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.vertices
            .extend_from_slice(&shapes::rect(rect, self.draw_color.to_f32()));
    }

    fn present(&mut self) {
        let size = self.window.inner_size();
        // Minimized; nothing to draw into
        if size.width == 0 || size.height == 0 {
            self.vertices.clear();
            return;
        }

        match self.renderer.render(self.clear_color, &self.vertices) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.renderer.resize(size.width, size.height);
                self.renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => log::error!("Out of memory!"),
            Err(e) => log::warn!("Render error: {:?}", e),
        }
        self.vertices.clear();
    }
}
