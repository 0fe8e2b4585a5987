/// Terminal presenter for packed-bit frames
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

/// Draws a page-packed 1-bit frame as terminal characters, one cell per
/// pixel. This sits where a display driver would: it only sees the packed
/// bytes and their dimensions.
pub struct BitmapDisplay {
    width: usize,
    height: usize,
}

impl BitmapDisplay {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Decode and queue the frame. Bit layout matches the framebuffer:
    /// byte `(y / 8) * width + x`, bit `y % 8`.
    pub fn draw<W: Write>(&self, frame: &[u8], writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(Color::Cyan))?;

        for y in 0..self.height {
            writer.queue(cursor::MoveTo(0, y as u16))?;

            for x in 0..self.width {
                let byte = y / 8 * self.width + x;
                let lit = frame
                    .get(byte)
                    .map_or(false, |b| b & (1u8 << (y % 8)) != 0);

                writer.queue(Print(if lit { '█' } else { ' ' }))?;
            }
        }

        writer.queue(ResetColor)?;
        Ok(())
    }
}
