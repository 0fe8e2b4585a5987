/// Dotmatrix Terminal Demo - Spinning Outline
///
/// Demonstrates the packed-bit rendering pipeline with a spinning square.
/// Controls:
///   - A/D / Arrow Keys: Rotate
///   - W/S: Scale
///   - F: Toggle scanline fill
///   - Space: Pause spin
///   - Q/ESC: Quit

use dotmatrix_terminal::TerminalApp;
use nalgebra::Point2;
use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    // A unit square, closed by repeating the first vertex.
    let square = [
        Point2::new(-1.0, -1.0),
        Point2::new(1.0, -1.0),
        Point2::new(1.0, 1.0),
        Point2::new(-1.0, 1.0),
        Point2::new(-1.0, -1.0),
    ];

    let mut app = TerminalApp::new(&square)?;
    app.run()
}
