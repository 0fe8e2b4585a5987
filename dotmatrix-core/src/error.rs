/// Error taxonomy for the rendering pipeline
use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported by pipeline operations.
///
/// Out-of-bounds pixel writes are deliberately absent: they are clipped
/// silently by the framebuffer, never surfaced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("surface dimensions {width}x{height} are invalid")]
    InvalidSurface { width: usize, height: usize },
    #[error("no vertex array bound")]
    NoVertexArray,
    #[error("vertex count {requested} exceeds bound array length {bound}")]
    VertexCountOutOfRange { requested: usize, bound: usize },
    #[error("buffer allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}
