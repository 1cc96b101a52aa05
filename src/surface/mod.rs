//! Display surface abstraction
//!
//! The simulation loop only needs a handful of capabilities from the
//! windowing/graphics layer: the current size, a non-blocking event queue,
//! and rectangle-fill drawing. Window creation and teardown belong to the
//! implementing type (constructor and `Drop`).

pub mod headless;

use serde::{Deserialize, Serialize};

pub use crate::sim::{Bounds, InputEvent, InputMode, Rect};
pub use headless::{DrawCommand, HeadlessSurface};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    pub const RED: Color = Color::rgb(0xFF, 0x00, 0x00);
    pub const GREEN: Color = Color::rgb(0x00, 0xFF, 0x00);
    pub const BLUE: Color = Color::rgb(0x00, 0x00, 0xFF);

    /// Normalized `[r, g, b, a]` for the GPU
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// The three fixed colors used by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Cleared behind the square every frame
    pub background: Color,
    /// Square color while nothing is held
    pub idle: Color,
    /// Square color while a key or mouse button is held
    pub active: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::RED,
            idle: Color::BLUE,
            active: Color::GREEN,
        }
    }
}

impl Palette {
    /// Square color for the given input mode
    pub fn square_color(&self, mode: InputMode) -> Color {
        match mode {
            InputMode::Active => self.active,
            InputMode::Idle => self.idle,
        }
    }
}

/// Windowing and 2D drawing capabilities consumed by the loop
pub trait DisplaySurface {
    /// Current drawable size in pixels. May change between frames.
    fn size(&self) -> Bounds;

    /// Next pending event, or `None` when the queue is empty. Never blocks.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Color used by subsequent `clear` and `fill_rect` calls
    fn set_draw_color(&mut self, color: Color);

    /// Fill the whole target with the draw color
    fn clear(&mut self);

    /// Fill `rect` with the draw color
    fn fill_rect(&mut self, rect: Rect);

    /// Show everything drawn since the last present
    fn present(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_colors_are_distinct() {
        let p = Palette::default();
        assert_ne!(p.background, p.idle);
        assert_ne!(p.background, p.active);
        assert_ne!(p.idle, p.active);
        assert_eq!(p.square_color(InputMode::Idle), Color::BLUE);
        assert_eq!(p.square_color(InputMode::Active), Color::GREEN);
    }

    #[test]
    fn test_color_to_f32() {
        assert_eq!(Color::rgba(255, 0, 51, 0).to_f32(), [1.0, 0.0, 0.2, 0.0]);
    }
}
