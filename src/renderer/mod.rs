//! WebGPU rendering module
//!
//! Draws solid-colored triangles over a cleared background; enough to fill
//! rectangles.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;
