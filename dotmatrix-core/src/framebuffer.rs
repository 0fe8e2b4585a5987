/// Packed-bit monochrome framebuffer
use crate::error::RenderError;

/// A 1-bit-per-pixel framebuffer with page-style packing: each byte holds
/// 8 vertically stacked pixels, so byte index is `(y / 8) * width + x` and
/// the bit within the byte is `y % 8`. This matches the memory layout of
/// small monochrome display controllers, which lets the buffer be handed
/// to a driver without repacking.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    bits: Vec<u8>,
}

impl FrameBuffer {
    /// Allocate a zeroed framebuffer of `width * ceil(height / 8)` bytes:
    /// a whole number of 8-row pages, so every in-range pixel has a byte
    /// to land in. Equal to `width * height / 8` whenever the height is a
    /// page multiple, which is what the packing targets.
    pub fn new(width: usize, height: usize) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSurface { width, height });
        }

        let len = width * ((height + 7) / 8);
        let mut bits = Vec::new();
        bits.try_reserve_exact(len)?;
        bits.resize(len, 0x00);

        Ok(Self {
            width,
            height,
            bits,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Byte length of the packed buffer, as seen by the render sink.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// The packed pixel bytes, in the layout described on the type.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Set the pixel at (x, y). Positions outside the surface are silently
    /// ignored; this is the clipping policy, not an error.
    pub fn set(&mut self, x: i32, y: i32) {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return;
        }

        let (byte, bit) = self.bit_position(x as usize, y as usize);
        self.bits[byte] |= 1 << bit;
    }

    /// Read the pixel at (x, y). Out-of-range reads return unset.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= self.width as i32 || y < 0 || y >= self.height as i32 {
            return false;
        }

        let (byte, bit) = self.bit_position(x as usize, y as usize);
        self.bits[byte] & (1 << bit) != 0
    }

    /// Unset every pixel.
    pub fn clear(&mut self) {
        self.bits.fill(0x00);
    }

    fn bit_position(&self, x: usize, y: usize) -> (usize, u8) {
        (y / 8 * self.width + x, (y % 8) as u8)
    }
}
