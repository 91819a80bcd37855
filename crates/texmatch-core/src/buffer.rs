//! RGBA pixel buffer.
//!
//! [`PixelBuffer`] is the single image container used across the workspace:
//! row-major, top-to-bottom, four f32 channels per pixel in [0, 1]:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  <- Row 0
//!         [R G B A R G B A ...]  <- Row 1
//!         ...
//! ```
//!
//! Alpha is carried for eligibility filtering (statistics and transfer skip
//! pixels below a configured threshold) and is never modified by any engine.
//!
//! # Usage
//!
//! ```rust
//! use texmatch_core::PixelBuffer;
//!
//! let mut img = PixelBuffer::filled(64, 64, [1.0, 0.0, 0.0, 1.0]);
//! img.set_pixel(10, 10, [0.0, 1.0, 0.0, 1.0]);
//! assert_eq!(img.pixel(10, 10), [0.0, 1.0, 0.0, 1.0]);
//! ```

use crate::{Error, OccupancyMask, Result};

/// Number of channels per pixel (RGBA).
pub const CHANNELS: usize = 4;

/// Owned RGBA f32 image buffer.
///
/// Invariant: `data.len() == width * height * 4`. Enforced by every
/// constructor; [`from_rgba`](Self::from_rgba) returns
/// [`Error::SizeMismatch`] on violation.
#[derive(Clone)]
pub struct PixelBuffer {
    data: Vec<f32>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Creates a buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize * CHANNELS;
        Self {
            data: vec![0.0; size],
            width,
            height,
        }
    }

    /// Creates a buffer from existing interleaved RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::size_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer filled with a single RGBA value.
    ///
    /// ```rust
    /// use texmatch_core::PixelBuffer;
    ///
    /// let red = PixelBuffer::filled(4, 4, [1.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(red.pixel(3, 3), [1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn filled(width: u32, height: u32, pixel: [f32; CHANNELS]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the buffer has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw interleaved RGBA data.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raw interleaved RGBA data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the buffer, returning the raw data.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f32; CHANNELS] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2], self.data[o + 3]]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f32; CHANNELS]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f32; CHANNELS]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        self.data[o..o + CHANNELS].copy_from_slice(&pixel);
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [f32; CHANNELS])> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Validates that a mask matches this buffer's dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MaskDimensionMismatch`] on any difference.
    pub fn check_mask(&self, mask: &OccupancyMask) -> Result<()> {
        if mask.dimensions() != self.dimensions() {
            return Err(Error::mask_mismatch(mask.dimensions(), self.dimensions()));
        }
        Ok(())
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &CHANNELS)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let buf = PixelBuffer::new(8, 4);
        assert_eq!(buf.dimensions(), (8, 4));
        assert_eq!(buf.pixel_count(), 32);
        assert_eq!(buf.pixel(7, 3), [0.0; 4]);
    }

    #[test]
    fn test_from_rgba_validates_length() {
        let ok = PixelBuffer::from_rgba(2, 2, vec![0.5; 16]);
        assert!(ok.is_ok());

        let bad = PixelBuffer::from_rgba(2, 2, vec![0.5; 15]);
        assert!(matches!(bad, Err(Error::SizeMismatch { expected: 16, actual: 15 })));
    }

    #[test]
    fn test_set_get_pixel() {
        let mut buf = PixelBuffer::new(4, 4);
        buf.set_pixel(1, 2, [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(buf.pixel(1, 2), [0.1, 0.2, 0.3, 0.4]);
        assert_eq!(buf.get_pixel(4, 0), None);
    }

    #[test]
    fn test_pixels_iterator_covers_all() {
        let buf = PixelBuffer::filled(3, 2, [0.5, 0.5, 0.5, 1.0]);
        let collected: Vec<_> = buf.pixels().collect();
        assert_eq!(collected.len(), 6);
        assert_eq!(collected[0], (0, 0, [0.5, 0.5, 0.5, 1.0]));
        assert_eq!(collected[5].0, 2);
        assert_eq!(collected[5].1, 1);
    }

    #[test]
    fn test_check_mask() {
        let buf = PixelBuffer::new(4, 4);
        let good = OccupancyMask::new(4, 4);
        let bad = OccupancyMask::new(2, 4);
        assert!(buf.check_mask(&good).is_ok());
        assert!(buf.check_mask(&bad).is_err());
    }
}
