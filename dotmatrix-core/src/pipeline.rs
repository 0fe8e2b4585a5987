/// Render context and draw orchestration
use log::{debug, trace};
use nalgebra::{Matrix3, Point2};

use crate::error::RenderError;
use crate::fill;
use crate::framebuffer::FrameBuffer;
use crate::raster;
use crate::transform;

/// The sink a finished frame is handed to, e.g. a display driver. Called
/// once per draw with the packed framebuffer bytes.
pub type RenderSink = Box<dyn FnMut(&[u8])>;

/// A complete rendering context: framebuffer, projection and viewport
/// matrices, the bound vertex array, and the render sink.
///
/// Everything a draw touches is owned here rather than held process-wide,
/// so independent pipelines can coexist and nothing dangles between
/// frames. The model-view matrix is not stored; it is passed to
/// [`draw`](Pipeline::draw) directly, scoping the borrow to a single call.
pub struct Pipeline {
    framebuffer: FrameBuffer,
    projection: Matrix3<f32>,
    viewport: Matrix3<f32>,
    vertices: Option<Vec<Point2<f32>>>,
    render: RenderSink,
}

impl Pipeline {
    /// Create a pipeline over a `width` x `height` surface. The projection
    /// starts as identity and the viewport covers the full surface.
    pub fn new(
        width: usize,
        height: usize,
        render: impl FnMut(&[u8]) + 'static,
    ) -> Result<Self, RenderError> {
        let framebuffer = FrameBuffer::new(width, height)?;

        Ok(Self {
            framebuffer,
            projection: Matrix3::identity(),
            viewport: transform::viewport_matrix(0, 0, width, height),
            vertices: None,
            render: Box::new(render),
        })
    }

    pub fn width(&self) -> usize {
        self.framebuffer.width()
    }

    pub fn height(&self) -> usize {
        self.framebuffer.height()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Set the viewport to the given pixel rectangle. Persists across
    /// draws until reconfigured.
    pub fn set_viewport(&mut self, x: i32, y: i32, width: usize, height: usize) {
        self.viewport = transform::viewport_matrix(x, y, width, height);
    }

    /// Set an orthographic projection over the given world-space window.
    /// Persists across draws until reconfigured.
    pub fn set_orthographic(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.projection = transform::orthographic_matrix(left, right, bottom, top);
    }

    /// Reallocate the surface at a new size. The framebuffer is cleared
    /// and the viewport reset to cover the full surface; the projection
    /// and any bound vertices are kept.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), RenderError> {
        self.framebuffer = FrameBuffer::new(width, height)?;
        self.viewport = transform::viewport_matrix(0, 0, width, height);
        Ok(())
    }

    /// Bind a vertex array, replacing any previous binding. Insertion
    /// order is render order: consecutive vertices are joined by a line
    /// segment, first to last, with no implicit closing edge.
    ///
    /// The vertices are copied; the caller's slice is not referenced after
    /// this returns, and drawing never mutates the bound copy.
    pub fn bind_vertex_array(&mut self, vertices: &[Point2<f32>]) -> Result<(), RenderError> {
        let buffer = self.vertices.get_or_insert_with(Vec::new);
        buffer.clear();
        buffer.try_reserve(vertices.len())?;
        buffer.extend_from_slice(vertices);

        debug!("bound {} vertices", vertices.len());
        Ok(())
    }

    /// Unset every pixel, typically between frames.
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Transform the first `vertex_count` bound vertices through
    /// model-view, projection and viewport, rasterize the connecting
    /// polyline, and hand the finished buffer to the render sink.
    ///
    /// The fill stage is not run here; see [`fill`](Pipeline::fill).
    pub fn draw(
        &mut self,
        model_view: &Matrix3<f32>,
        vertex_count: usize,
    ) -> Result<(), RenderError> {
        let vertices = self.vertices.as_ref().ok_or(RenderError::NoVertexArray)?;
        if vertex_count > vertices.len() {
            return Err(RenderError::VertexCountOutOfRange {
                requested: vertex_count,
                bound: vertices.len(),
            });
        }

        trace!("drawing {} vertices", vertex_count);

        let screen: Vec<Point2<f32>> = vertices[..vertex_count]
            .iter()
            .map(|p| transform::to_screen(model_view, &self.projection, &self.viewport, p))
            .collect();

        raster::draw_polyline(&mut self.framebuffer, &screen);

        (self.render)(self.framebuffer.as_bytes());
        Ok(())
    }

    /// Run the scanline parity fill over the current framebuffer contents.
    /// Never invoked by [`draw`](Pipeline::draw); the caller decides when
    /// the outline is closed enough to fill.
    pub fn fill(&mut self) {
        fill::scanline_fill(&mut self.framebuffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn capture_sink() -> (Rc<RefCell<Vec<u8>>>, impl FnMut(&[u8])) {
        let captured = Rc::new(RefCell::new(Vec::new()));
        let clone = Rc::clone(&captured);
        (captured, move |bytes: &[u8]| {
            let mut frame = clone.borrow_mut();
            frame.clear();
            frame.extend_from_slice(bytes);
        })
    }

    #[test]
    fn test_triangle_end_to_end() {
        let (frame, sink) = capture_sink();
        let mut pipeline = Pipeline::new(16, 16, sink).unwrap();
        pipeline.set_orthographic(-1.0, 1.0, -1.0, 1.0);

        // Closed triangle: the final vertex repeats the first.
        let triangle = [
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, -1.0),
        ];
        pipeline.bind_vertex_array(&triangle).unwrap();
        pipeline.draw(&Matrix3::identity(), 4).unwrap();

        // The sink saw the whole packed buffer: 16 * 16 / 8 bytes.
        assert_eq!(frame.borrow().len(), 32);

        // Corners land on their rounded screen positions.
        let fb = pipeline.framebuffer();
        assert!(fb.get(0, 0));
        assert!(fb.get(15, 0));
        assert!(fb.get(8, 15));

        // The base edge is a solid run.
        for x in 0..16 {
            assert!(fb.get(x, 0), "base pixel ({}, 0) unset", x);
        }
    }

    #[test]
    fn test_draw_without_binding_is_an_error() {
        let mut pipeline = Pipeline::new(8, 8, |_| {}).unwrap();
        let result = pipeline.draw(&Matrix3::identity(), 0);
        assert!(matches!(result, Err(RenderError::NoVertexArray)));
    }

    #[test]
    fn test_draw_with_excess_count_is_an_error() {
        let mut pipeline = Pipeline::new(8, 8, |_| {}).unwrap();
        pipeline
            .bind_vertex_array(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)])
            .unwrap();

        let result = pipeline.draw(&Matrix3::identity(), 3);
        assert!(matches!(
            result,
            Err(RenderError::VertexCountOutOfRange {
                requested: 3,
                bound: 2
            })
        ));
    }

    #[test]
    fn test_rebinding_replaces_vertices() {
        let mut pipeline = Pipeline::new(8, 8, |_| {}).unwrap();
        pipeline
            .bind_vertex_array(&[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
            ])
            .unwrap();
        pipeline
            .bind_vertex_array(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)])
            .unwrap();

        // The old length is gone with the old contents.
        assert!(matches!(
            pipeline.draw(&Matrix3::identity(), 3),
            Err(RenderError::VertexCountOutOfRange { .. })
        ));
        assert!(pipeline.draw(&Matrix3::identity(), 2).is_ok());
    }

    #[test]
    fn test_draw_through_offset_viewport() {
        let mut pipeline = Pipeline::new(16, 16, |_| {}).unwrap();
        pipeline.set_orthographic(-1.0, 1.0, -1.0, 1.0);
        pipeline.set_viewport(4, 2, 8, 8);
        pipeline
            .bind_vertex_array(&[Point2::new(-1.0, -1.0), Point2::new(1.0, -1.0)])
            .unwrap();
        pipeline.draw(&Matrix3::identity(), 2).unwrap();

        // NDC [-1, 1] lands in the 8-pixel rectangle at (4, 2), not the
        // full surface.
        let fb = pipeline.framebuffer();
        for x in 4..=11 {
            assert!(fb.get(x, 2), "viewport pixel ({}, 2) unset", x);
        }
        assert!(!fb.get(3, 2));
        assert!(!fb.get(12, 2));
    }

    #[test]
    fn test_binding_survives_multiple_draws() {
        let mut pipeline = Pipeline::new(16, 16, |_| {}).unwrap();
        pipeline.set_orthographic(-1.0, 1.0, -1.0, 1.0);
        pipeline
            .bind_vertex_array(&[Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)])
            .unwrap();

        pipeline.draw(&Matrix3::identity(), 2).unwrap();
        pipeline.clear();

        // Same binding, shifted model-view: drawing must start from the
        // object-space coordinates, not the previous frame's screen space.
        let shift = crate::Transform::translation_matrix(0.0, 1.0);
        pipeline.draw(&shift, 2).unwrap();

        let fb = pipeline.framebuffer();
        assert!(!fb.get(8, 8));
        assert!(fb.get(8, 15));
    }

    #[test]
    fn test_resize_reallocates_consistently() {
        let mut pipeline = Pipeline::new(16, 16, |_| {}).unwrap();
        assert_eq!(pipeline.framebuffer().len(), 32);

        pipeline.resize(8, 8).unwrap();
        assert_eq!(pipeline.framebuffer().len(), 8);
        assert_eq!(pipeline.width(), 8);

        assert!(matches!(
            pipeline.resize(0, 8),
            Err(RenderError::InvalidSurface { .. })
        ));
    }

    #[test]
    fn test_fill_is_not_part_of_draw() {
        let mut pipeline = Pipeline::new(16, 16, |_| {}).unwrap();
        pipeline.set_orthographic(-1.0, 1.0, -1.0, 1.0);

        // Closed square outline.
        let square = [
            Point2::new(-0.5, -0.5),
            Point2::new(0.5, -0.5),
            Point2::new(0.5, 0.5),
            Point2::new(-0.5, 0.5),
            Point2::new(-0.5, -0.5),
        ];
        pipeline.bind_vertex_array(&square).unwrap();
        pipeline.draw(&Matrix3::identity(), 5).unwrap();

        // Interior untouched by draw, set after an explicit fill.
        assert!(!pipeline.framebuffer().get(8, 8));
        pipeline.fill();
        assert!(pipeline.framebuffer().get(8, 8));
    }
}
