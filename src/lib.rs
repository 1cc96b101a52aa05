//! Bounce Square - a single square bouncing around a resizable window
//!
//! Core modules:
//! - `sim`: Pure simulation (rectangle state, input mode, bounce/clamp)
//! - `game_loop`: One frame of the loop against a `DisplaySurface`
//! - `surface`: Display surface capability set and a headless implementation
//! - `renderer`: wgpu pipeline that fills rectangles
//! - `platform`: winit window and event loop driving the simulation
//! - `settings`: JSON configuration
//! - `random`: Owned, seedable random source

pub mod error;
pub mod game_loop;
pub mod platform;
pub mod random;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod surface;

pub use error::InitError;
pub use game_loop::Simulation;
pub use random::RandomSource;
pub use settings::Settings;
pub use surface::{Bounds, Color, DisplaySurface, Palette};

/// Default configuration constants
pub mod consts {
    /// Initial window size in pixels
    pub const SCREEN_WIDTH: u32 = 1280;
    pub const SCREEN_HEIGHT: u32 = 720;

    /// Side length of the square
    pub const RECT_SIZE: i32 = 100;

    /// Initial per-axis speed range (pixels per frame, inclusive)
    pub const MIN_SPEED: i32 = 1;
    pub const MAX_SPEED: i32 = 3;

    /// Upper limits applied to configured values
    pub const WINDOW_SIZE_LIMIT: u32 = 16384;
    pub const RECT_SIZE_LIMIT: i32 = 16384;
    pub const SPEED_LIMIT: i32 = 4096;

    /// Delay between frames while idle (~250 FPS)
    pub const IDLE_FRAME_DELAY_MS: u64 = 4;

    /// Process exit code when the window or renderer can't be created
    pub const EXIT_INIT_FAILURE: u8 = 3;
}
