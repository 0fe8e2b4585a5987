/// Integer line rasterization
use nalgebra::Point2;

use crate::framebuffer::FrameBuffer;

/// Draw the open polyline connecting consecutive points. Nothing is drawn
/// for fewer than two points, and the shape is not closed automatically;
/// callers wanting a loop repeat the first point at the end.
pub fn draw_polyline(fb: &mut FrameBuffer, points: &[Point2<f32>]) {
    for pair in points.windows(2) {
        draw_line(fb, &pair[0], &pair[1]);
    }
}

/// Draw a single line segment with Bresenham stepping.
///
/// Endpoints are rounded to the nearest pixel first; from there the walk
/// is integer-only, driven by the accumulated error term. Both step
/// conditions are checked every iteration, so a step can move diagonally.
/// Pixels outside the surface are clipped by the framebuffer.
pub fn draw_line(fb: &mut FrameBuffer, p1: &Point2<f32>, p2: &Point2<f32>) {
    let mut x1 = p1.x.round() as i32;
    let mut y1 = p1.y.round() as i32;
    let x2 = p2.x.round() as i32;
    let y2 = p2.y.round() as i32;

    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let mut error = dx - dy;

    // Shift x and y in the correct direction based on line direction.
    let shift_x = if x1 < x2 { 1 } else { -1 };
    let shift_y = if y1 < y2 { 1 } else { -1 };

    loop {
        fb.set(x1, y1);

        if x1 == x2 && y1 == y2 {
            break;
        }

        // Shift the x and/or y position based on accumulated error.
        let error2 = 2 * error;

        if error2 > -dy {
            error -= dy;
            x1 += shift_x;
        }
        if error2 < dx {
            error += dx;
            y1 += shift_y;
        }
    }
}
