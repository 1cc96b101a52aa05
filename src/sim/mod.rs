//! Simulation module
//!
//! All motion logic lives here. This module must stay pure:
//! - Integer pixel positions only
//! - Randomness only through an explicitly passed `RandomSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod event;
pub mod state;
pub mod tick;

pub use collision::{AxisBounce, WallHits, bounce_axis, bounce_off_walls};
pub use event::InputEvent;
pub use state::{Bounds, InputMode, LoopPhase, Rect, SimState, Velocity};
pub use tick::{advance, apply_event, apply_events, collide};
