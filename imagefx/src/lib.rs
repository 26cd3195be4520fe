//! ImageFX - Pixel processing for raster images
//!
//! # Overview
//!
//! ImageFX provides pixel-wise arithmetic on raster images. Images are
//! stored as packed 32-bit ARGB words; binary and grayscale images share
//! that representation with R = G = B by convention.
//!
//! # Example
//!
//! ```
//! use imagefx::{Image, ImageMut};
//! use imagefx::math::multiply;
//!
//! let mut a = ImageMut::new(8, 8).unwrap();
//! a.fill(255, 12, 12, 12);
//! let a: Image = a.into();
//!
//! let mut b = ImageMut::new(8, 8).unwrap();
//! b.fill(255, 4, 4, 4);
//! let b: Image = b.into();
//!
//! let mut out = ImageMut::new(8, 8).unwrap();
//! multiply::grayscale(&a, &b, &mut out).unwrap();
//! assert_eq!(out.get_argb(0, 0), Some((255, 48, 48, 48)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imagefx_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use imagefx_math as math;
