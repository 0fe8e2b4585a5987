/// Example: Load an OBJ outline and view it in the terminal
///
/// Usage: cargo run --example load_obj -- path/to/model.obj
///
/// Only the `v` statements are used; the vertices are drawn as a closed
/// polyline in file order.

use dotmatrix_core::obj;
use nalgebra::Point2;
use std::env;
use std::fs;
use std::io;

use dotmatrix_terminal::TerminalApp;

fn main() -> io::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <obj-file>", args[0]);
        eprintln!("\nNo OBJ file provided, using a default triangle...");
        let triangle = [
            Point2::new(0.0, 1.0),
            Point2::new(-1.0, -1.0),
            Point2::new(1.0, -1.0),
            Point2::new(0.0, 1.0),
        ];
        let mut app = TerminalApp::new(&triangle)?;
        return app.run();
    }

    let obj_path = &args[1];
    let text = fs::read_to_string(obj_path).map_err(|e| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("Failed to read OBJ file: {}", e),
        )
    })?;

    let mut outline = obj::parse_obj(&text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse OBJ: {}", e),
        )
    })?;

    if outline.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "OBJ file contains no vertices",
        ));
    }

    println!("Loaded {} vertices", outline.len());

    // Close the outline.
    outline.push(outline[0]);

    let mut app = TerminalApp::new(&outline)?;
    app.run()
}
