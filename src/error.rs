//! Startup errors
//!
//! Only window/renderer initialization can fail. Once the loop is running
//! nothing it does is fallible.

#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error("couldn't create event loop: {0}")]
    EventLoop(#[source] winit::error::EventLoopError),

    #[error("couldn't create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("couldn't create rendering surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("couldn't create graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface has no supported texture format")]
    NoSurfaceFormat,

    #[error("event loop failed: {0}")]
    Run(#[source] winit::error::EventLoopError),
}

pub type Result<T, E = InitError> = std::result::Result<T, E>;
