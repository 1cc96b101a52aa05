//! Wall collision for the bouncing square
//!
//! Each axis is handled on its own: if the square pokes out past either wall
//! it is clamped back inside and its velocity on that axis is negated. The
//! clamp and the flip happen whenever a wall is violated, including when the
//! square is already heading away from it (e.g. after the window shrank).

use glam::IVec2;

use super::state::{Bounds, Rect, Velocity};

/// Result of checking one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisBounce {
    /// Position after clamping
    pub pos: i32,
    /// Velocity after (possible) inversion
    pub vel: i32,
    /// Whether a wall was hit
    pub hit: bool,
}

/// Bounce a span `[pos, pos + extent]` against the walls `0` and `limit`.
///
/// When `limit < extent` the upper clamp bound is raised to 0 so the clamp
/// range stays valid. Edge arithmetic saturates instead of overflowing.
pub fn bounce_axis(pos: i32, extent: i32, vel: i32, limit: i32) -> AxisBounce {
    if pos.saturating_add(extent) > limit || pos < 0 {
        let hi = limit.saturating_sub(extent).max(0);
        AxisBounce {
            pos: pos.clamp(0, hi),
            vel: -vel,
            hit: true,
        }
    } else {
        AxisBounce {
            pos,
            vel,
            hit: false,
        }
    }
}

/// Which axes bounced this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Bounce `rect` off the window edges, updating position and velocity in place
pub fn bounce_off_walls(rect: &mut Rect, vel: &mut Velocity, bounds: Bounds) -> WallHits {
    let bx = bounce_axis(rect.pos.x, rect.size.x, vel.x, bounds.width);
    let by = bounce_axis(rect.pos.y, rect.size.y, vel.y, bounds.height);

    rect.pos = IVec2::new(bx.pos, by.pos);
    *vel = IVec2::new(bx.vel, by.vel);

    WallHits { x: bx.hit, y: by.hit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_no_hit_inside() {
        let b = bounce_axis(52, 100, 2, 1280);
        assert_eq!(b, AxisBounce { pos: 52, vel: 2, hit: false });
    }

    #[test]
    fn test_right_wall_clamps_and_flips() {
        let b = bounce_axis(1181, 100, 2, 1280);
        assert_eq!(b, AxisBounce { pos: 1180, vel: -2, hit: true });
    }

    #[test]
    fn test_left_wall_clamps_and_flips() {
        let b = bounce_axis(-3, 100, -3, 1280);
        assert_eq!(b, AxisBounce { pos: 0, vel: 3, hit: true });
    }

    #[test]
    fn test_touching_wall_is_not_a_hit() {
        assert!(!bounce_axis(1180, 100, 2, 1280).hit);
        assert!(!bounce_axis(0, 100, -2, 1280).hit);
    }

    #[test]
    fn test_flips_even_when_moving_away() {
        // Window shrank under a square that is already heading left
        let b = bounce_axis(900, 100, -2, 800);
        assert_eq!(b, AxisBounce { pos: 700, vel: 2, hit: true });
    }

    #[test]
    fn test_window_smaller_than_square() {
        let b = bounce_axis(10, 100, 2, 60);
        assert_eq!(b, AxisBounce { pos: 0, vel: -2, hit: true });
    }

    #[test]
    fn test_axes_are_independent() {
        let mut rect = Rect::new(1181, 300, 100, 100);
        let mut vel = Velocity::new(2, 3);
        let hits = bounce_off_walls(&mut rect, &mut vel, Bounds::new(1280, 720));
        assert_eq!(hits, WallHits { x: true, y: false });
        assert_eq!(rect.pos, IVec2::new(1180, 300));
        assert_eq!(vel, Velocity::new(-2, 3));
    }

    #[test]
    fn test_huge_extent_does_not_overflow() {
        let b = bounce_axis(5, i32::MAX, 2, 1280);
        assert_eq!(b, AxisBounce { pos: 0, vel: -2, hit: true });

        let b = bounce_axis(i32::MAX - 50, 100, 3, i32::MAX - 10);
        assert_eq!(b, AxisBounce { pos: i32::MAX - 110, vel: -3, hit: true });
    }

    proptest! {
        #[test]
        fn prop_bounce_stays_in_range(
            pos in -10_000i32..10_000,
            vel in prop_oneof![-3i32..=-1, 1i32..=3],
            extent in 1i32..200,
            limit in 1i32..4000,
        ) {
            let b = bounce_axis(pos, extent, vel, limit);
            prop_assert_eq!(b.vel.abs(), vel.abs());
            prop_assert!(b.pos >= 0);
            if limit >= extent {
                prop_assert!(b.pos + extent <= limit);
            } else {
                prop_assert_eq!(b.pos, 0);
            }
            prop_assert_eq!(b.hit, b.vel != vel);
        }
    }
}
