/// Terminal viewer for the dotmatrix rendering pipeline
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use dotmatrix_core::{Pipeline, Transform};
use nalgebra::Point2;
use std::cell::RefCell;
use std::io::{self, stdout, Write};
use std::rc::Rc;
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::BitmapDisplay;

/// Main application struct for viewing a 2D outline in the terminal
pub struct TerminalApp {
    pipeline: Pipeline,
    frame: Rc<RefCell<Vec<u8>>>,
    display: BitmapDisplay,
    vertex_count: usize,
    angle: f32,
    scale: f32,
    spinning: bool,
    filled: bool,
    running: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(outline: &[Point2<f32>]) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let width = (cols as usize).max(8);
        // Round down to a multiple of 8 so rows align with packed pages.
        let height = (rows as usize & !7).max(8);

        let frame = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let frame = Rc::clone(&frame);
            move |bytes: &[u8]| {
                let mut frame = frame.borrow_mut();
                frame.clear();
                frame.extend_from_slice(bytes);
            }
        };

        log::debug!("terminal surface {}x{}", width, height);

        let mut pipeline = Pipeline::new(width, height, sink).map_err(io_error)?;
        pipeline.set_orthographic(-2.0, 2.0, -2.0, 2.0);
        pipeline.bind_vertex_array(outline).map_err(io_error)?;

        Ok(Self {
            pipeline,
            frame,
            display: BitmapDisplay::new(width, height),
            vertex_count: outline.len(),
            angle: 0.0,
            scale: 1.0,
            spinning: true,
            filled: false,
            running: true,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            // Update
            self.update();

            // Render
            self.render()?;

            // Frame timing
            self.frame_count += 1;
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            // Update FPS counter
            let now = Instant::now();
            if (now - self.last_frame).as_secs() >= 1 {
                self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
                self.frame_count = 0;
                self.last_frame = now;
            }
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('a') | KeyCode::Left => {
                    self.angle -= 0.1;
                }
                KeyCode::Char('d') | KeyCode::Right => {
                    self.angle += 0.1;
                }
                KeyCode::Char('w') | KeyCode::Up => {
                    self.scale = (self.scale * 1.1).min(10.0);
                }
                KeyCode::Char('s') | KeyCode::Down => {
                    self.scale = (self.scale / 1.1).max(0.1);
                }
                KeyCode::Char(' ') => {
                    self.spinning = !self.spinning;
                }
                KeyCode::Char('f') => {
                    self.filled = !self.filled;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn update(&mut self) {
        // Continuous slow rotation for demo effect
        if self.spinning {
            self.angle += 0.02;
        }
    }

    fn render(&mut self) -> io::Result<()> {
        let model =
            Transform::rotation_matrix(self.angle) * Transform::scale_matrix(self.scale, self.scale);

        self.pipeline.clear();
        self.pipeline
            .draw(&model, self.vertex_count)
            .map_err(io_error)?;

        // The fill stage is a separate pass over the outline, on request.
        // It runs after the sink has seen the outline frame, so the
        // presented copy has to be refreshed by hand.
        if self.filled {
            self.pipeline.fill();
            let mut frame = self.frame.borrow_mut();
            frame.clear();
            frame.extend_from_slice(self.pipeline.framebuffer().as_bytes());
        }

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.display.draw(&self.frame.borrow(), &mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Dotmatrix Terminal | FPS: {:.1} | A/D=Rotate W/S=Scale F=Fill Space=Spin Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn io_error(e: dotmatrix_core::RenderError) -> io::Error {
    io::Error::new(io::ErrorKind::Other, e)
}
