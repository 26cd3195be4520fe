//! Pixel-wise image multiplication
//!
//! Multiplies corresponding pixels of two images, or the pixels of one
//! image by an integer constant, saturating each channel at 255. Three
//! image kinds are supported:
//!
//! - [`binary`] / [`binary_const`] - binary images (values 0 or 255)
//! - [`grayscale`] / [`grayscale_const`] - grayscale images (R = G = B)
//! - [`color()`] / [`color_const`] - full-color images, channels multiplied
//!   independently
//!
//! Binary and grayscale multiplication are the same algorithm: both read
//! the blue channel as the representative value and replicate the product
//! into all three color channels. The binary entry points delegate to the
//! grayscale ones unconditionally.
//!
//! Every operation writes the full extent of the first source into the
//! caller-supplied result image, one pixel per coordinate in raster order,
//! with alpha fixed at 255. Sources are never mutated. All validation
//! happens before the first write, so a failed call leaves the result
//! image untouched.

use crate::error::{MathError, MathResult};
use imagefx_core::color;
use imagefx_core::{Image, ImageMut};

/// Saturate a widened channel product at 255.
///
/// Takes `u64` so that a channel times any accepted constant cannot
/// overflow before the clamp.
#[inline]
fn clamp_channel(p: u64) -> u8 {
    if p > 255 { 255 } else { p as u8 }
}

/// Check that both source images have identical dimensions.
fn check_sources(src1: &Image, src2: &Image) -> MathResult<()> {
    if !src1.sizes_equal(src2) {
        return Err(MathError::DimensionMismatch {
            expected: (src1.width(), src1.height()),
            actual: (src2.width(), src2.height()),
        });
    }
    Ok(())
}

/// Check that the result image covers the source extent.
///
/// A larger result is allowed; only the source extent is written and any
/// excess region is left untouched.
fn check_result(src: &Image, dst: &ImageMut) -> MathResult<()> {
    if dst.width() < src.width() || dst.height() < src.height() {
        return Err(MathError::ResultTooSmall {
            required: (src.width(), src.height()),
            actual: (dst.width(), dst.height()),
        });
    }
    Ok(())
}

/// Check that the scalar constant is non-negative and widen it.
fn check_constant(c: i32) -> MathResult<u64> {
    if c < 0 {
        return Err(MathError::InvalidParameter(format!(
            "constant must be >= 0; got {c}"
        )));
    }
    Ok(c as u64)
}

/// Multiply the pixels of two binary images.
///
/// Binary pixel multiplication is the same algorithm as grayscale, so this
/// delegates to [`grayscale`].
///
/// # Errors
///
/// See [`grayscale`].
pub fn binary(src1: &Image, src2: &Image, dst: &mut ImageMut) -> MathResult<()> {
    grayscale(src1, src2, dst)
}

/// Multiply the pixels of a binary image by a constant.
///
/// Binary pixel multiplication is the same algorithm as grayscale, so this
/// delegates to [`grayscale_const`].
///
/// # Errors
///
/// See [`grayscale_const`].
pub fn binary_const(src: &Image, c: i32, dst: &mut ImageMut) -> MathResult<()> {
    grayscale_const(src, c, dst)
}

/// Multiply the pixels of two grayscale images.
///
/// Grayscale images carry the same value in all three color channels, so
/// only the blue channel is read. At each coordinate the result is
/// `min(blue1 * blue2, 255)`, written to red, green, and blue with alpha
/// set to 255.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if the sources differ in size,
/// or [`MathError::ResultTooSmall`] if `dst` does not cover `src1`'s
/// extent. Nothing is written on error.
pub fn grayscale(src1: &Image, src2: &Image, dst: &mut ImageMut) -> MathResult<()> {
    check_sources(src1, src2)?;
    check_result(src1, dst)?;

    for y in 0..src1.height() {
        for x in 0..src1.width() {
            let b1 = color::blue(src1.get_pixel_unchecked(x, y)) as u64;
            let b2 = color::blue(src2.get_pixel_unchecked(x, y)) as u64;
            let val = clamp_channel(b1 * b2);
            dst.set_pixel_unchecked(x, y, 255, val, val, val);
        }
    }

    Ok(())
}

/// Multiply the pixels of a grayscale image by a constant.
///
/// At each coordinate the result is `min(blue * c, 255)`, written to red,
/// green, and blue with alpha set to 255.
///
/// # Errors
///
/// Returns [`MathError::InvalidParameter`] if `c` is negative, or
/// [`MathError::ResultTooSmall`] if `dst` does not cover `src`'s extent.
/// Nothing is written on error.
pub fn grayscale_const(src: &Image, c: i32, dst: &mut ImageMut) -> MathResult<()> {
    let c = check_constant(c)?;
    check_result(src, dst)?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let b = color::blue(src.get_pixel_unchecked(x, y)) as u64;
            let val = clamp_channel(b * c);
            dst.set_pixel_unchecked(x, y, 255, val, val, val);
        }
    }

    Ok(())
}

/// Multiply the pixels of two color images.
///
/// The red, green, and blue channels are multiplied independently, each
/// product saturating at 255 with no cross-channel interaction. Alpha is
/// set to 255.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if the sources differ in size,
/// or [`MathError::ResultTooSmall`] if `dst` does not cover `src1`'s
/// extent. Nothing is written on error.
pub fn color(src1: &Image, src2: &Image, dst: &mut ImageMut) -> MathResult<()> {
    check_sources(src1, src2)?;
    check_result(src1, dst)?;

    for y in 0..src1.height() {
        for x in 0..src1.width() {
            let (r1, g1, b1) = color::extract_rgb(src1.get_pixel_unchecked(x, y));
            let (r2, g2, b2) = color::extract_rgb(src2.get_pixel_unchecked(x, y));

            let r = clamp_channel(r1 as u64 * r2 as u64);
            let g = clamp_channel(g1 as u64 * g2 as u64);
            let b = clamp_channel(b1 as u64 * b2 as u64);

            dst.set_pixel_unchecked(x, y, 255, r, g, b);
        }
    }

    Ok(())
}

/// Multiply the pixels of a color image by a constant.
///
/// Each of red, green, and blue is multiplied by `c` independently, each
/// product saturating at 255. Alpha is set to 255.
///
/// # Errors
///
/// Returns [`MathError::InvalidParameter`] if `c` is negative, or
/// [`MathError::ResultTooSmall`] if `dst` does not cover `src`'s extent.
/// Nothing is written on error.
pub fn color_const(src: &Image, c: i32, dst: &mut ImageMut) -> MathResult<()> {
    let c = check_constant(c)?;
    check_result(src, dst)?;

    for y in 0..src.height() {
        for x in 0..src.width() {
            let (r1, g1, b1) = color::extract_rgb(src.get_pixel_unchecked(x, y));

            let r = clamp_channel(r1 as u64 * c);
            let g = clamp_channel(g1 as u64 * c);
            let b = clamp_channel(b1 as u64 * c);

            dst.set_pixel_unchecked(x, y, 255, r, g, b);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: u32, height: u32, vals: &[u8]) -> Image {
        let mut img = ImageMut::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                let v = vals[(y * width + x) as usize];
                img.set_gray(x, y, v).unwrap();
            }
        }
        img.into()
    }

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(256), 255);
        assert_eq!(clamp_channel(65025), 255); // 255 * 255
        assert_eq!(clamp_channel(255 * i32::MAX as u64), 255);
    }

    #[test]
    fn test_grayscale_product_and_clamp() {
        let src1 = gray_image(2, 1, &[10, 30]);
        let src2 = gray_image(2, 1, &[20, 10]);
        let mut dst = ImageMut::new(2, 1).unwrap();

        grayscale(&src1, &src2, &mut dst).unwrap();

        // 10 * 20 = 200; 30 * 10 = 300 clamps to 255
        assert_eq!(dst.get_argb(0, 0), Some((255, 200, 200, 200)));
        assert_eq!(dst.get_argb(1, 0), Some((255, 255, 255, 255)));
    }

    #[test]
    fn test_grayscale_reads_blue_channel_only() {
        // Red and green deliberately disagree with blue; only blue counts.
        let mut src1 = ImageMut::new(1, 1).unwrap();
        src1.set_pixel(0, 0, 255, 1, 2, 10).unwrap();
        let src1: Image = src1.into();
        let src2 = gray_image(1, 1, &[5]);
        let mut dst = ImageMut::new(1, 1).unwrap();

        grayscale(&src1, &src2, &mut dst).unwrap();

        assert_eq!(dst.get_argb(0, 0), Some((255, 50, 50, 50)));
    }

    #[test]
    fn test_grayscale_dimension_mismatch() {
        let src1 = gray_image(2, 2, &[0; 4]);
        let src2 = gray_image(2, 3, &[0; 6]);
        let mut dst = ImageMut::new(2, 2).unwrap();

        let err = grayscale(&src1, &src2, &mut dst);
        assert!(matches!(err, Err(MathError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_result_too_small_rejected_before_write() {
        let src1 = gray_image(3, 3, &[9; 9]);
        let src2 = gray_image(3, 3, &[9; 9]);
        let mut dst = ImageMut::new(2, 3).unwrap();

        let err = grayscale(&src1, &src2, &mut dst);
        assert!(matches!(err, Err(MathError::ResultTooSmall { .. })));
        // No partial writes
        assert!(dst.data().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_larger_result_excess_untouched() {
        let src1 = gray_image(1, 1, &[2]);
        let src2 = gray_image(1, 1, &[3]);
        let mut dst = ImageMut::new(2, 2).unwrap();

        grayscale(&src1, &src2, &mut dst).unwrap();

        assert_eq!(dst.get_argb(0, 0), Some((255, 6, 6, 6)));
        assert_eq!(dst.get_pixel(1, 0), Some(0));
        assert_eq!(dst.get_pixel(0, 1), Some(0));
        assert_eq!(dst.get_pixel(1, 1), Some(0));
    }

    #[test]
    fn test_negative_constant_rejected() {
        let src = gray_image(1, 1, &[10]);
        let mut dst = ImageMut::new(1, 1).unwrap();

        assert!(matches!(
            grayscale_const(&src, -1, &mut dst),
            Err(MathError::InvalidParameter(_))
        ));
        assert!(matches!(
            color_const(&src, -5, &mut dst),
            Err(MathError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_color_channels_independent() {
        let mut src1 = ImageMut::new(1, 1).unwrap();
        src1.set_pixel(0, 0, 255, 2, 100, 255).unwrap();
        let src1: Image = src1.into();
        let mut src2 = ImageMut::new(1, 1).unwrap();
        src2.set_pixel(0, 0, 255, 3, 4, 2).unwrap();
        let src2: Image = src2.into();
        let mut dst = ImageMut::new(1, 1).unwrap();

        color(&src1, &src2, &mut dst).unwrap();

        // 2*3 = 6; 100*4 = 400 clamps; 255*2 = 510 clamps
        assert_eq!(dst.get_argb(0, 0), Some((255, 6, 255, 255)));
    }

    #[test]
    fn test_color_const_concrete() {
        let mut src = ImageMut::new(1, 1).unwrap();
        src.set_pixel(0, 0, 255, 5, 6, 7).unwrap();
        let src: Image = src.into();
        let mut dst = ImageMut::new(1, 1).unwrap();

        color_const(&src, 40, &mut dst).unwrap();

        // 5*40 = 200; 6*40 = 240; 7*40 = 280 clamps to 255
        assert_eq!(dst.get_argb(0, 0), Some((255, 200, 240, 255)));
    }

    #[test]
    fn test_binary_delegates_to_grayscale() {
        let src1 = gray_image(2, 1, &[0, 255]);
        let src2 = gray_image(2, 1, &[255, 255]);

        let mut via_binary = ImageMut::new(2, 1).unwrap();
        let mut via_gray = ImageMut::new(2, 1).unwrap();
        binary(&src1, &src2, &mut via_binary).unwrap();
        grayscale(&src1, &src2, &mut via_gray).unwrap();

        assert_eq!(via_binary.data(), via_gray.data());
    }
}
