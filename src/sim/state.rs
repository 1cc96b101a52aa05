//! Simulation state and core types
//!
//! Everything the loop mutates between frames lives in `SimState`.

use std::ops::RangeInclusive;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::random::RandomSource;

/// Per-frame displacement in pixels. Components are never zero.
pub type Velocity = IVec2;

/// Axis-aligned rectangle in window pixels (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub fn x(&self) -> i32 {
        self.pos.x
    }

    pub fn y(&self) -> i32 {
        self.pos.y
    }

    pub fn width(&self) -> i32 {
        self.size.x
    }

    pub fn height(&self) -> i32 {
        self.size.y
    }

    /// Right edge (x + width)
    pub fn right(&self) -> i32 {
        self.pos.x.saturating_add(self.size.x)
    }

    /// Bottom edge (y + height)
    pub fn bottom(&self) -> i32 {
        self.pos.y.saturating_add(self.size.y)
    }
}

/// Current drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Whether the user is holding a key or mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Nothing held
    #[default]
    Idle,
    /// A key or mouse button is down
    Active,
}

impl InputMode {
    pub fn is_active(&self) -> bool {
        *self == InputMode::Active
    }
}

/// Loop state machine. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopPhase {
    #[default]
    Running,
    Stopped,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub rect: Rect,
    pub vel: Velocity,
    pub mode: InputMode,
    pub phase: LoopPhase,
    /// Frames advanced so far
    pub frame: u64,
}

impl SimState {
    pub fn new(rect: Rect, vel: Velocity) -> Self {
        Self {
            rect,
            vel,
            mode: InputMode::Idle,
            phase: LoopPhase::Running,
            frame: 0,
        }
    }

    /// Place a `side`×`side` square at a random position inside `bounds`,
    /// moving down-right with a random speed per axis from `speed`.
    ///
    /// Panics if `speed` is empty.
    pub fn spawn(
        rng: &mut RandomSource,
        bounds: Bounds,
        side: i32,
        speed: RangeInclusive<i32>,
    ) -> Self {
        let x = rng.random_int(0, bounds.width.saturating_sub(side).max(0));
        let y = rng.random_int(0, bounds.height.saturating_sub(side).max(0));
        let vx = rng.random_int(*speed.start(), *speed.end());
        let vy = rng.random_int(*speed.start(), *speed.end());

        Self::new(Rect::new(x, y, side, side), Velocity::new(vx, vy))
    }

    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(50, 20, 100, 80);
        assert_eq!(rect.right(), 150);
        assert_eq!(rect.bottom(), 100);
    }

    #[test]
    fn test_spawn_inside_bounds() {
        let mut rng = RandomSource::with_seed(7);
        let bounds = Bounds::new(1280, 720);
        for _ in 0..500 {
            let state = SimState::spawn(&mut rng, bounds, 100, 1..=3);
            assert!(state.rect.x() >= 0 && state.rect.right() <= bounds.width);
            assert!(state.rect.y() >= 0 && state.rect.bottom() <= bounds.height);
            assert!((1..=3).contains(&state.vel.x));
            assert!((1..=3).contains(&state.vel.y));
            assert_eq!(state.mode, InputMode::Idle);
            assert!(state.is_running());
        }
    }

    #[test]
    fn test_spawn_in_window_smaller_than_square() {
        let mut rng = RandomSource::with_seed(1);
        let state = SimState::spawn(&mut rng, Bounds::new(60, 40), 100, 1..=3);
        assert_eq!(state.rect.pos, IVec2::ZERO);
    }
}
