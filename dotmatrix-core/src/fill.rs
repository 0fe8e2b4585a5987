/// Scanline parity fill over a rasterized outline
use crate::framebuffer::FrameBuffer;

/// Fill the regions enclosed by already-set outline pixels, one scanline
/// at a time.
///
/// Walking each row left to right, the `inside` flag toggles on a falling
/// edge (previous pixel set, current unset) and is forced on across a flat
/// horizontal run (both set); every pixel visited while `inside` is set.
/// The pass reads and writes the same buffer, and the previous/current
/// pixel pair deliberately carries over from the end of one row into the
/// start of the next; both aliasing behaviors are part of the observable
/// fill shape and must not be "fixed" by buffering.
///
/// This stage is not part of [`Pipeline::draw`](crate::Pipeline::draw);
/// callers run it explicitly on an outline they know to be closed.
pub fn scanline_fill(fb: &mut FrameBuffer) {
    let mut previous_pixel;
    let mut this_pixel = false;
    let mut inside;

    for y in 0..fb.height() as i32 {
        inside = false;

        for x in 0..fb.width() as i32 {
            previous_pixel = this_pixel;
            this_pixel = fb.get(x, y);

            if previous_pixel && !this_pixel {
                inside = !inside;
            } else if previous_pixel && this_pixel {
                // Horizontal edge.
                inside = true;
            }

            if inside {
                fb.set(x, y);
            }
        }
    }
}
