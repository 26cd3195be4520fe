//! ImageFX Math - Pixel arithmetic on raster images
//!
//! This crate provides pixel-wise arithmetic combination of images. Each
//! operation takes caller-owned source image(s) and writes every pixel of
//! the caller-supplied result image, saturating channel values at 255.
//!
//! - **Multiplication** ([`multiply`]): image×image and image×constant
//!   forms for binary, grayscale, and color images
//!
//! # Example
//!
//! ```
//! use imagefx_core::{Image, ImageMut};
//! use imagefx_math::multiply;
//!
//! let mut a = ImageMut::new(4, 4).unwrap();
//! a.fill(255, 10, 10, 10);
//! let a: Image = a.into();
//!
//! let mut out = ImageMut::new(4, 4).unwrap();
//! multiply::grayscale_const(&a, 3, &mut out).unwrap();
//! assert_eq!(out.get_argb(0, 0), Some((255, 30, 30, 30)));
//! ```

pub mod error;
pub mod multiply;

// Re-export core types
pub use imagefx_core;

// Re-export error types
pub use error::{MathError, MathResult};
