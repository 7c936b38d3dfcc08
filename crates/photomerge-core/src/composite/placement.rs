//! Placement resolution for the three merge modes.
//!
//! Everything here is integer-exact and mirrors how the UI reasons about
//! positions: widths and heights halve by integer division, so centering on
//! odd dimensions lands one pixel up-left of the geometric center.

use super::PlacementMode;

/// Size of the overlay after scaling.
///
/// Both dimensions derive from the *base* image, so the overlay stretches or
/// squashes to a fraction of the base's proportions. Fractional results
/// truncate toward zero; a tiny scale can yield a zero dimension, which the
/// caller treats as nothing to draw.
pub(crate) fn scaled_overlay_size(base_width: u32, base_height: u32, scale: f32) -> (u32, u32) {
    let width = (base_width as f32 * scale) as u32;
    let height = (base_height as f32 * scale) as u32;
    (width, height)
}

/// Resolve the top-left corner at which the scaled overlay is drawn, in
/// base-image pixel coordinates. Corners may be negative or beyond the
/// canvas; drawing clips.
pub(crate) fn resolve_corner(
    placement: PlacementMode,
    base_width: u32,
    base_height: u32,
    overlay_width: u32,
    overlay_height: u32,
) -> (i64, i64) {
    match placement {
        PlacementMode::Center => (
            i64::from(base_width / 2) - i64::from(overlay_width / 2),
            i64::from(base_height / 2) - i64::from(overlay_height / 2),
        ),
        PlacementMode::TopLeftOffset { left, top } => (i64::from(left), i64::from(top)),
        PlacementMode::AngleOffset { angle_degrees } => {
            let radius = f64::from(base_width / 4);
            let center_x = f64::from(base_width / 2);
            let center_y = f64::from(base_height / 2);
            let radians = f64::from(angle_degrees).to_radians();

            // The overlay's *center* lands on the radial point, so pull the
            // corner back by half the overlay size.
            let x = (radius * radians.cos() + center_x) as i64;
            let y = (radius * radians.sin() + center_y) as i64;

            (
                x - i64::from(overlay_width / 2),
                y - i64::from(overlay_height / 2),
            )
        }
    }
}
