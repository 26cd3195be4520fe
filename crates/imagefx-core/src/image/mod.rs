//! The main image container
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, packed as `0xAARRGGBB`
//! - Rows are stored contiguously in raster order
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `ImageMut` via [`Image::try_into_mut`]
//! or [`Image::to_mut`], then convert back with `Into<Image>`.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// The pixel data, one ARGB word per pixel
    data: Vec<u32>,
}

impl ImageData {
    fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(ImageData {
            width,
            height,
            data,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

/// Main image container (shared, immutable handle)
///
/// # Examples
///
/// ```
/// use imagefx_core::Image;
///
/// let img = Image::new(640, 480).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Image {
    inner: Arc<ImageData>,
}

/// Mutable image handle with exclusive ownership of the pixel data.
///
/// Obtained from [`Image::try_into_mut`] or [`Image::to_mut`]; convert
/// back with `Into<Image>` when mutation is done.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl Image {
    /// Create a new image with the given dimensions.
    ///
    /// All pixels are initialized to zero (transparent black).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::new(width, height)?),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the pixel words of a single row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &self.inner.data[start..end]
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a new zero-filled image with the same dimensions as this one.
    ///
    /// Callers use this to allocate a result image matching a source.
    pub fn create_template(&self) -> Self {
        let data = vec![0u32; self.inner.data.len()];
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data,
            }),
        }
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Convert into a mutable handle without copying, if this is the only
    /// reference to the pixel data.
    ///
    /// # Errors
    ///
    /// Returns `Err(self)` unchanged if other references exist.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Image> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(ImageMut { inner }),
            Err(inner) => Err(Image { inner }),
        }
    }

    /// Get a mutable handle, copying the pixel data if it is shared.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl ImageMut {
    /// Create a new mutable image with the given dimensions.
    ///
    /// All pixels are initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::new(width, height)?,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the pixel words.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }
}

impl From<ImageMut> for Image {
    fn from(img: ImageMut) -> Image {
        Image {
            inner: Arc::new(img.inner),
        }
    }
}
