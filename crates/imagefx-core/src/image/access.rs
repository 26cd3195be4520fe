//! Pixel access functions
//!
//! Getting and setting individual pixels and channels. Checked accessors
//! return `Option` / `Result`; the `_unchecked` variants index directly and
//! are meant for loops that have already validated their bounds.

use super::{Image, ImageMut};
use crate::color;
use crate::error::{Error, Result};

impl Image {
    /// Get a pixel word at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get ARGB channel values at (x, y).
    pub fn get_argb(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_argb)
    }

    /// Get RGB channel values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get the alpha channel at (x, y).
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).map(color::alpha)
    }

    /// Get the red channel at (x, y).
    pub fn red(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).map(color::red)
    }

    /// Get the green channel at (x, y).
    pub fn green(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).map(color::green)
    }

    /// Get the blue channel at (x, y).
    pub fn blue(&self, x: u32, y: u32) -> Option<u8> {
        self.get_pixel(x, y).map(color::blue)
    }
}

impl ImageMut {
    /// Get a pixel word at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get ARGB channel values at (x, y).
    pub fn get_argb(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_argb)
    }

    /// Set the pixel at (x, y) from individual channel values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if the coordinate lies
    /// outside the image.
    pub fn set_pixel(&mut self, x: u32, y: u32, a: u8, r: u8, g: u8, b: u8) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::CoordinateOutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = color::compose_argb(a, r, g, b);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, a: u8, r: u8, g: u8, b: u8) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = color::compose_argb(a, r, g, b);
    }

    /// Set every pixel to the given channel values.
    pub fn fill(&mut self, a: u8, r: u8, g: u8, b: u8) {
        let word = color::compose_argb(a, r, g, b);
        self.inner.data.fill(word);
    }

    /// Set the pixel at (x, y) to an opaque gray value (R = G = B).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfBounds`] if the coordinate lies
    /// outside the image.
    pub fn set_gray(&mut self, x: u32, y: u32, val: u8) -> Result<()> {
        self.set_pixel(x, y, 255, val, val, val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_pixel() {
        let mut img = ImageMut::new(4, 4).unwrap();
        img.set_pixel(2, 1, 255, 10, 20, 30).unwrap();
        assert_eq!(img.get_argb(2, 1), Some((255, 10, 20, 30)));
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let img = Image::new(4, 4).unwrap();
        assert_eq!(img.get_pixel(4, 0), None);
        assert_eq!(img.get_pixel(0, 4), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut img = ImageMut::new(4, 4).unwrap();
        let err = img.set_pixel(4, 0, 255, 0, 0, 0);
        assert!(matches!(err, Err(Error::CoordinateOutOfBounds { .. })));
    }

    #[test]
    fn test_channel_accessors() {
        let mut img = ImageMut::new(2, 2).unwrap();
        img.set_pixel(1, 1, 40, 50, 60, 70).unwrap();
        let img: Image = img.into();
        assert_eq!(img.alpha(1, 1), Some(40));
        assert_eq!(img.red(1, 1), Some(50));
        assert_eq!(img.green(1, 1), Some(60));
        assert_eq!(img.blue(1, 1), Some(70));
    }

    #[test]
    fn test_fill() {
        let mut img = ImageMut::new(3, 2).unwrap();
        img.fill(255, 7, 7, 7);
        let img: Image = img.into();
        assert!(img.data().iter().all(|&w| w == 0xFF070707));
    }

    #[test]
    fn test_set_gray_replicates_channels() {
        let mut img = ImageMut::new(2, 2).unwrap();
        img.set_gray(0, 0, 99).unwrap();
        assert_eq!(img.get_argb(0, 0), Some((255, 99, 99, 99)));
    }
}
