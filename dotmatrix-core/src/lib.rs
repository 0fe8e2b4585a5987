/// Dotmatrix Core Library - 2D rendering for packed-bit monochrome displays
///
/// This library provides the rendering pipeline for 1-bit framebuffers:
/// homogeneous 2D transforms, Bresenham line rasterization, scanline
/// filling, and a render context that hands finished frames to a display
/// sink.

pub mod error;
pub mod fill;
pub mod framebuffer;
pub mod obj;
pub mod pipeline;
pub mod raster;
pub mod transform;

// Re-export commonly used types
pub use error::RenderError;
pub use framebuffer::FrameBuffer;
pub use pipeline::{Pipeline, RenderSink};
pub use transform::Transform;
