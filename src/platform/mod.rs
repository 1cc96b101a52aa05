//! Platform layer
//!
//! Handles the native window and its event loop:
//! - `window`: winit + wgpu implementation of `DisplaySurface`
//! - `app`: `ApplicationHandler` that feeds events to the simulation and
//!   paces frames

pub mod app;
pub mod window;

pub use app::run;
pub use window::{WindowSurface, classify};
