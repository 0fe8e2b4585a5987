/// 2D homogeneous transforms and the vertex pipeline
use nalgebra::{Matrix3, Point2, Vector3};

/// Transform builder for caller-side model-view matrices
pub struct Transform;

impl Transform {
    /// Create a rotation matrix around the origin (angle in radians)
    pub fn rotation_matrix(angle: f32) -> Matrix3<f32> {
        let (s, c) = angle.sin_cos();
        Matrix3::new(
            c, -s, 0.0, //
            s, c, 0.0, //
            0.0, 0.0, 1.0,
        )
    }

    /// Create a translation matrix
    pub fn translation_matrix(x: f32, y: f32) -> Matrix3<f32> {
        let mut m = Matrix3::identity();
        m[(0, 2)] = x;
        m[(1, 2)] = y;
        m
    }

    /// Create a scale matrix
    pub fn scale_matrix(sx: f32, sy: f32) -> Matrix3<f32> {
        let mut m = Matrix3::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m
    }
}

/// Build the viewport matrix: scale from NDC to the viewport size and
/// translate to the viewport location. NDC [-1, 1] maps to pixel columns
/// [x, x + width - 1] and rows [y, y + height - 1].
pub fn viewport_matrix(x: i32, y: i32, width: usize, height: usize) -> Matrix3<f32> {
    let half_w = (width as f32 - 1.0) / 2.0;
    let half_h = (height as f32 - 1.0) / 2.0;

    let mut m = Matrix3::identity();
    m[(0, 0)] = half_w;
    m[(1, 1)] = half_h;
    m[(0, 2)] = half_w + x as f32;
    m[(1, 2)] = half_h + y as f32;
    m
}

/// Build the orthographic projection matrix: scale the world-space window
/// to [-1, 1] on both axes and translate to centre it on the origin.
pub fn orthographic_matrix(left: f32, right: f32, bottom: f32, top: f32) -> Matrix3<f32> {
    let mut m = Matrix3::identity();
    m[(0, 0)] = 2.0 / (right - left);
    m[(1, 1)] = 2.0 / (top - bottom);
    m[(0, 2)] = -(right + left) / (right - left);
    m[(1, 2)] = -(top + bottom) / (top - bottom);
    m
}

/// Carry a point through model-view, projection and viewport in turn.
///
/// Each step is a plain `Matrix3 x Vector3` product on `[x, y, 1]`; the
/// homogeneous w is never renormalized, so this is an affine chain with
/// no perspective divide.
pub fn to_screen(
    model_view: &Matrix3<f32>,
    projection: &Matrix3<f32>,
    viewport: &Matrix3<f32>,
    p: &Point2<f32>,
) -> Point2<f32> {
    let v = Vector3::new(p.x, p.y, 1.0);
    let v = model_view * v;
    let v = projection * v;
    let v = viewport * v;

    Point2::new(v.x, v.y)
}
