//! Overlay scaling and alpha-blended drawing.

use image::{imageops, RgbaImage};

use crate::decode::{FilterType, RasterImage};

use super::CompositeError;

/// Resize the overlay to the dimensions derived from the base image.
pub(crate) fn scale_overlay(
    overlay: &RasterImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<RgbaImage, CompositeError> {
    let rgba = overlay
        .to_rgba_image()
        .ok_or(CompositeError::MissingImage("overlay"))?;

    if overlay.width == width && overlay.height == height {
        return Ok(rgba);
    }

    Ok(imageops::resize(&rgba, width, height, filter.to_image_filter()))
}

/// Draw the scaled overlay onto a fresh copy of the base with source-over
/// alpha blending. The corner may be negative or beyond the canvas; pixels
/// that fall outside are discarded.
pub(crate) fn draw_over(
    base: &RasterImage,
    overlay: &RgbaImage,
    corner_x: i64,
    corner_y: i64,
) -> Result<RasterImage, CompositeError> {
    let mut canvas = base
        .to_rgba_image()
        .ok_or(CompositeError::MissingImage("base"))?;

    imageops::overlay(&mut canvas, overlay, corner_x, corner_y);

    Ok(RasterImage::from_rgba_image(canvas))
}
