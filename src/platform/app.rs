//! winit application driving the simulation
//!
//! Window events are only queued; the simulation runs at most one frame each
//! time the event loop is about to wait. While idle a frame only runs once
//! the pacing deadline has passed, so extra wakeups from window events don't
//! speed the square up. While input is held it polls flat out.

use std::sync::Arc;
use std::time::Instant;

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::window::{WindowSurface, classify};
use crate::error::{InitError, Result};
use crate::game_loop::Simulation;
use crate::random::RandomSource;
use crate::settings::Settings;
use crate::sim::{InputMode, LoopPhase};
use crate::surface::DisplaySurface;

struct App {
    settings: Settings,
    rng: RandomSource,
    surface: Option<WindowSurface>,
    sim: Option<Simulation>,
    /// Earliest time the next frame may run
    next_frame: Option<Instant>,
    error: Option<InitError>,
}

/// Deadline for the frame after one started at `now` in `mode`
fn next_frame_at(settings: &Settings, mode: InputMode, now: Instant) -> Option<Instant> {
    settings.frame_delay(mode).map(|delay| now + delay)
}

/// Whether a frame may run at `now`
fn frame_due(next_frame: Option<Instant>, now: Instant) -> bool {
    next_frame.is_none_or(|at| now >= at)
}

impl App {
    fn new(settings: Settings, rng: RandomSource) -> Self {
        Self {
            settings,
            rng,
            surface: None,
            sim: None,
            next_frame: None,
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.settings.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.settings.window_width,
                self.settings.window_height,
            ))
            .with_resizable(true);
        let window = Arc::new(event_loop.create_window(attributes)?);

        let surface = WindowSurface::new(window, self.settings.vsync)?;
        let bounds = surface.size();
        log::info!("Window created: {}x{}", bounds.width, bounds.height);

        self.sim = Some(Simulation::spawn(&mut self.rng, bounds, &self.settings));
        self.surface = Some(surface);
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() || self.error.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let WindowEvent::Resized(size) = event {
            surface.resize(size);
        }
        surface.queue_event(classify(&event));
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        if !frame_due(self.next_frame, now) {
            if let Some(at) = self.next_frame {
                event_loop.set_control_flow(ControlFlow::WaitUntil(at));
            }
            return;
        }

        let (Some(surface), Some(sim)) = (self.surface.as_mut(), self.sim.as_mut()) else {
            return;
        };

        if sim.frame(surface) == LoopPhase::Stopped {
            event_loop.exit();
            return;
        }

        self.next_frame = next_frame_at(&self.settings, sim.mode(), now);
        match self.next_frame {
            Some(at) => event_loop.set_control_flow(ControlFlow::WaitUntil(at)),
            None => event_loop.set_control_flow(ControlFlow::Poll),
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(sim) = &self.sim {
            log::info!("Exiting after {} frames", sim.state().frame);
        }
        // Drops the renderer before the window
        self.surface = None;
    }
}

/// Open the window and run until the user quits
pub fn run(settings: Settings, rng: RandomSource) -> Result<()> {
    let event_loop = EventLoop::new().map_err(InitError::EventLoop)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, rng);
    event_loop.run_app(&mut app).map_err(InitError::Run)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
