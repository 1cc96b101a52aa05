//! The simulation loop
//!
//! One call to [`Simulation::frame`] is one iteration: drain input, move,
//! bounce off the current window edges, then draw.

use crate::random::RandomSource;
use crate::settings::Settings;
use crate::sim::{self, InputMode, LoopPhase, SimState};
use crate::surface::{Bounds, DisplaySurface, InputEvent, Palette};

/// Owns the square and draws it onto a `DisplaySurface`
#[derive(Debug, Clone)]
pub struct Simulation {
    state: SimState,
    palette: Palette,
}

impl Simulation {
    pub fn new(state: SimState, palette: Palette) -> Self {
        Self { state, palette }
    }

    /// Random start inside `bounds`, sized and colored from `settings`
    pub fn spawn(rng: &mut RandomSource, bounds: Bounds, settings: &Settings) -> Self {
        let state = SimState::spawn(rng, bounds, settings.rect_size, settings.speed_range());
        log::info!(
            "Square spawned at ({}, {}) with velocity ({}, {})",
            state.rect.x(),
            state.rect.y(),
            state.vel.x,
            state.vel.y
        );
        Self::new(state, settings.palette)
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn mode(&self) -> InputMode {
        self.state.mode
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Run one iteration against `surface`.
    ///
    /// All pending events are drained first. If one of them was a quit the
    /// frame ends there: nothing moves and nothing is drawn.
    pub fn frame<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) -> LoopPhase {
        if !self.is_running() {
            return LoopPhase::Stopped;
        }

        let before = self.state.mode;
        while let Some(event) = surface.poll_event() {
            if event == InputEvent::Quit {
                log::info!("Quit requested after {} frames", self.state.frame);
            }
            sim::apply_event(&mut self.state, event);
        }
        if self.state.mode != before {
            log::debug!("Input mode {:?} -> {:?}", before, self.state.mode);
        }
        if !self.is_running() {
            return LoopPhase::Stopped;
        }

        sim::advance(&mut self.state);

        // The window may have been resized since last frame
        let bounds = surface.size();
        let hits = sim::collide(&mut self.state, bounds);
        if hits.any() {
            log::trace!(
                "Bounce x={} y={} at ({}, {}) in {}x{}",
                hits.x,
                hits.y,
                self.state.rect.x(),
                self.state.rect.y(),
                bounds.width,
                bounds.height
            );
        }

        self.draw(surface);
        LoopPhase::Running
    }

    /// Iterate until a quit is observed
    pub fn run<S: DisplaySurface + ?Sized>(&mut self, surface: &mut S) {
        while self.frame(surface) == LoopPhase::Running {}
    }

    fn draw<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        surface.set_draw_color(self.palette.background);
        surface.clear();
        surface.set_draw_color(self.palette.square_color(self.state.mode));
        surface.fill_rect(self.state.rect);
        surface.present();
    }
}
