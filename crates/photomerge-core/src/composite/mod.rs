//! Bitmap compositing: draw a scaled overlay onto a copy of a base image.
//!
//! The compositor supports three placement modes:
//! - centered on the base,
//! - offset at an angle from the base's center,
//! - offset by explicit pixel coordinates from the top-left corner.
//!
//! In every mode the overlay is first resized to a fraction of the *base*
//! dimensions, then drawn with source-over alpha blending onto a fresh copy
//! of the base. The base operand is never mutated, and a composite is a
//! single pure transformation: it either returns one finished image or an
//! error, with no partial results.

mod draw;
mod placement;
mod types;

pub use types::{CompositeError, CompositeRequest, PlacementMode, DEFAULT_SCALE};

use log::debug;

use crate::decode::RasterImage;

/// Composite the request's overlay onto a copy of its base.
///
/// A non-positive scale skips drawing and yields an image pixel-identical
/// to the base, as does a scale small enough that the overlay rounds to
/// zero pixels. Otherwise the overlay is resized to
/// `(base_width * scale, base_height * scale)`, placed according to the
/// request's [`PlacementMode`], and blended over the copy; anything falling
/// outside the canvas is clipped.
///
/// # Errors
///
/// Returns `CompositeError::MissingImage` when the base or overlay operand
/// is empty.
pub fn composite(request: &CompositeRequest) -> Result<RasterImage, CompositeError> {
    if request.base.is_empty() {
        return Err(CompositeError::MissingImage("base"));
    }
    if request.overlay.is_empty() {
        return Err(CompositeError::MissingImage("overlay"));
    }

    if request.scale <= 0.0 {
        return Ok((*request.base).clone());
    }

    let (scaled_width, scaled_height) =
        placement::scaled_overlay_size(request.base.width, request.base.height, request.scale);

    // A scale small enough to round the overlay away still yields a fresh
    // copy of the base.
    if scaled_width == 0 || scaled_height == 0 {
        return Ok((*request.base).clone());
    }

    let scaled = draw::scale_overlay(&request.overlay, scaled_width, scaled_height, request.filter)?;
    let (corner_x, corner_y) = placement::resolve_corner(
        request.placement,
        request.base.width,
        request.base.height,
        scaled_width,
        scaled_height,
    );
    debug!(
        "composite: overlay scaled to {}x{}, corner ({}, {})",
        scaled_width, scaled_height, corner_x, corner_y
    );

    draw::draw_over(&request.base, &scaled, corner_x, corner_y)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
