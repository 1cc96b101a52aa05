//! Per-frame simulation update
//!
//! Input events only ever touch `mode` and `phase`; `advance` + `collide`
//! move the square and keep it inside the window.

use super::collision::{WallHits, bounce_off_walls};
use super::event::InputEvent;
use super::state::{Bounds, InputMode, LoopPhase, SimState};

/// Apply one input event to the state
pub fn apply_event(state: &mut SimState, event: InputEvent) {
    match event {
        InputEvent::Quit => state.phase = LoopPhase::Stopped,
        e if e.is_press() => state.mode = InputMode::Active,
        e if e.is_release() => state.mode = InputMode::Idle,
        _ => {}
    }
}

/// Apply every event yielded by `events`, in order.
///
/// The iterator is always exhausted, even after a `Quit`.
pub fn apply_events(state: &mut SimState, events: impl IntoIterator<Item = InputEvent>) {
    for event in events {
        apply_event(state, event);
    }
}

/// Integrate position by one frame of velocity. Saturates at the i32 range.
pub fn advance(state: &mut SimState) {
    state.rect.pos = state.rect.pos.saturating_add(state.vel);
    state.frame += 1;
}

/// Clamp the square into `bounds`, flipping velocity on any axis that hit
pub fn collide(state: &mut SimState, bounds: Bounds) -> WallHits {
    bounce_off_walls(&mut state.rect, &mut state.vel, bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Rect, Velocity};
    use proptest::prelude::*;

    fn state_at(x: i32, y: i32, vx: i32, vy: i32) -> SimState {
        SimState::new(Rect::new(x, y, 100, 100), Velocity::new(vx, vy))
    }

    fn step(state: &mut SimState, bounds: Bounds) -> WallHits {
        advance(state);
        collide(state, bounds)
    }

    #[test]
    fn test_step_moves_without_collision() {
        let mut state = state_at(50, 50, 2, 1);
        step(&mut state, Bounds::new(1280, 720));
        assert_eq!(state.rect.x(), 52);
        assert_eq!(state.rect.y(), 51);
        assert_eq!(state.vel, Velocity::new(2, 1));
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_step_bounces_off_right_wall() {
        let bounds = Bounds::new(1280, 720);
        let mut state = state_at(50, 300, 2, 1);

        // Keep going until the square would cross the right wall
        let mut frames = 0;
        while state.rect.right() + state.vel.x <= bounds.width {
            step(&mut state, bounds);
            assert_eq!(state.vel.x, 2);
            frames += 1;
        }
        assert_eq!(frames, 565);
        assert_eq!(state.rect.x(), 1180);

        let hits = step(&mut state, bounds);
        assert!(hits.x);
        assert_eq!(state.rect.x(), 1180);
        assert_eq!(state.vel.x, -2);
    }

    #[test]
    fn test_press_and_release_set_mode() {
        let mut state = state_at(0, 0, 1, 1);
        apply_event(&mut state, InputEvent::KeyDown);
        assert_eq!(state.mode, InputMode::Active);

        // Held across frames
        for _ in 0..10 {
            step(&mut state, Bounds::new(1280, 720));
            apply_events(&mut state, [InputEvent::Other]);
        }
        assert_eq!(state.mode, InputMode::Active);

        apply_event(&mut state, InputEvent::KeyUp);
        assert_eq!(state.mode, InputMode::Idle);

        apply_event(&mut state, InputEvent::MouseDown);
        assert_eq!(state.mode, InputMode::Active);
        apply_event(&mut state, InputEvent::MouseUp);
        assert_eq!(state.mode, InputMode::Idle);
    }

    #[test]
    fn test_last_event_wins() {
        let mut state = state_at(0, 0, 1, 1);
        apply_events(&mut state, [InputEvent::KeyDown, InputEvent::MouseUp]);
        assert_eq!(state.mode, InputMode::Idle);
    }

    #[test]
    fn test_quit_stops_and_drains_rest() {
        let mut state = state_at(10, 10, 1, 1);
        apply_events(&mut state, [InputEvent::KeyDown, InputEvent::Quit, InputEvent::KeyUp]);
        assert_eq!(state.phase, LoopPhase::Stopped);
        // Events after the quit are still consumed
        assert_eq!(state.mode, InputMode::Idle);
        assert!(!state.is_running());
    }

    #[test]
    fn test_advance_saturates() {
        let mut state = state_at(i32::MAX - 1, i32::MIN + 1, 3, -3);
        advance(&mut state);
        assert_eq!(state.rect.pos.to_array(), [i32::MAX, i32::MIN]);
    }

    proptest! {
        #[test]
        fn prop_square_stays_inside(
            seed_x in 0i32..1180,
            seed_y in 0i32..620,
            vx in prop_oneof![-3i32..=-1, 1i32..=3],
            vy in prop_oneof![-3i32..=-1, 1i32..=3],
            w in 100i32..2000,
            h in 100i32..2000,
            frames in 1usize..2000,
        ) {
            let mut state = state_at(seed_x, seed_y, vx, vy);
            let bounds = Bounds::new(w, h);
            for _ in 0..frames {
                step(&mut state, bounds);
                prop_assert!(state.rect.x() >= 0 && state.rect.x() <= w - 100);
                prop_assert!(state.rect.y() >= 0 && state.rect.y() <= h - 100);
                prop_assert_eq!(state.vel.x.abs(), vx.abs());
                prop_assert_eq!(state.vel.y.abs(), vy.abs());
            }
        }
    }
}
