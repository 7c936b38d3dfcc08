//! Power-of-two subsampling.
//!
//! Large camera photos are routinely an order of magnitude bigger than the
//! view they end up in. Decoding them at full resolution risks exhausting
//! memory for no visible benefit, so the decode pipeline reduces them by an
//! integer power of two chosen against the caller's bounding box.

use image::RgbaImage;

use super::types::BYTES_PER_PIXEL;
use super::RasterImage;

/// Compute the subsample factor for a decode.
///
/// Returns the largest power of two `s` such that both `(height/2)/s` and
/// `(width/2)/s` stay larger than the requested bounds, i.e. the coarsest
/// decode whose output is still no smaller than the bounding box. Sources
/// that already fit the box get a factor of 1.
///
/// Integer division throughout; the bounding box is a sizing hint, not an
/// output-size guarantee.
pub fn sample_factor(width: u32, height: u32, req_width: u32, req_height: u32) -> u32 {
    let mut factor = 1;

    if height > req_height || width > req_width {
        let half_height = height / 2;
        let half_width = width / 2;

        while half_height / factor > req_height && half_width / factor > req_width {
            factor *= 2;
        }
    }

    factor
}

/// Reduce an image by keeping every `factor`-th pixel in each direction.
///
/// Output dimensions are `max(1, width/factor) x max(1, height/factor)`.
/// A factor of 1 copies the image through unchanged.
pub(crate) fn subsample(image: &RgbaImage, factor: u32) -> RasterImage {
    let (width, height) = image.dimensions();

    if factor <= 1 {
        return RasterImage::new(width, height, image.as_raw().clone());
    }

    let out_width = (width / factor).max(1);
    let out_height = (height / factor).max(1);

    let src = image.as_raw();
    let row_stride = width as usize * BYTES_PER_PIXEL;
    let mut pixels =
        Vec::with_capacity(out_width as usize * out_height as usize * BYTES_PER_PIXEL);

    for y in 0..out_height {
        let src_y = (y * factor).min(height - 1);
        let row_start = src_y as usize * row_stride;

        for x in 0..out_width {
            let src_x = (x * factor).min(width - 1);
            let idx = row_start + src_x as usize * BYTES_PER_PIXEL;
            pixels.extend_from_slice(&src[idx..idx + BYTES_PER_PIXEL]);
        }
    }

    RasterImage::new(out_width, out_height, pixels)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dims_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=20_000, 1u32..=20_000)
    }

    fn box_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=4_000, 1u32..=4_000)
    }

    proptest! {
        /// Property: The factor is always a power of two.
        #[test]
        fn prop_factor_is_power_of_two(
            (width, height) in dims_strategy(),
            (req_width, req_height) in box_strategy(),
        ) {
            let factor = sample_factor(width, height, req_width, req_height);
            prop_assert!(factor.is_power_of_two());
        }

        /// Property: The loop terminates at the boundary - the halving
        /// condition no longer holds for the returned factor.
        #[test]
        fn prop_factor_is_terminal(
            (width, height) in dims_strategy(),
            (req_width, req_height) in box_strategy(),
        ) {
            let factor = sample_factor(width, height, req_width, req_height);
            let (half_width, half_height) = (width / 2, height / 2);

            prop_assert!(
                !(half_height / factor > req_height && half_width / factor > req_width),
                "factor {} should have been doubled",
                factor
            );
        }

        /// Property: The factor is the largest qualifying power of two -
        /// its predecessor still satisfied the halving condition.
        #[test]
        fn prop_factor_is_largest(
            (width, height) in dims_strategy(),
            (req_width, req_height) in box_strategy(),
        ) {
            let factor = sample_factor(width, height, req_width, req_height);
            let (half_width, half_height) = (width / 2, height / 2);

            if factor > 1 {
                let prev = factor / 2;
                prop_assert!(
                    half_height / prev > req_height && half_width / prev > req_width,
                    "factor {} overshoots",
                    factor
                );
            }
        }

        /// Property: Sources that already fit the box decode at factor 1.
        #[test]
        fn prop_fitting_source_is_not_sampled(
            (req_width, req_height) in box_strategy(),
        ) {
            let factor = sample_factor(req_width, req_height, req_width, req_height);
            prop_assert_eq!(factor, 1);
        }

        /// Property: Subsampled dimensions are the floored quotient,
        /// clamped to at least one pixel.
        #[test]
        fn prop_subsample_dimensions(
            (width, height) in (1u32..=64, 1u32..=64),
            shift in 0u32..=4,
        ) {
            let factor = 1u32 << shift;
            let img = RgbaImage::from_pixel(width, height, image::Rgba([1, 2, 3, 4]));
            let out = subsample(&img, factor);

            prop_assert_eq!(out.width, (width / factor).max(1));
            prop_assert_eq!(out.height, (height / factor).max(1));
            prop_assert_eq!(
                out.pixels.len(),
                out.width as usize * out.height as usize * BYTES_PER_PIXEL
            );
        }
    }
}
