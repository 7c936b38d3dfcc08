//! Request and error types for compositing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{FilterType, RasterImage};

/// Default overlay scale: half the base dimensions.
pub const DEFAULT_SCALE: f32 = 0.5;

/// Error types for compositing operations.
#[derive(Debug, Error)]
pub enum CompositeError {
    /// The named operand was missing - an empty or malformed image.
    #[error("Missing {0} image")]
    MissingImage(&'static str),
}

/// Where the scaled overlay lands on the base image.
///
/// The mode is chosen once, when the request is built. Offsets and angle
/// are parameters of their variant rather than independent settings, so a
/// request can never carry a stale mix of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlacementMode {
    /// Center the overlay on the base.
    #[default]
    Center,
    /// Place the overlay's center at `base_width / 4` pixels out from the
    /// base's center, along the given angle. Degrees follow the standard
    /// trigonometric convention: 0 points along the positive x axis and
    /// angles increase counter-clockwise.
    AngleOffset {
        angle_degrees: i32,
    },
    /// Place the overlay's top-left corner at exact pixel offsets from the
    /// base's top-left corner. Offsets are not clamped; placements outside
    /// the canvas clip at draw time.
    TopLeftOffset {
        left: i32,
        top: i32,
    },
}

/// A request to draw a scaled overlay onto a copy of a base image.
///
/// Requests are plain immutable values: build one with [`CompositeRequest::new`],
/// adjust the public fields, and hand it to [`crate::composite::composite`].
/// Images are shared via `Arc` so a slider-driven caller can issue a request
/// per tick without copying pixel buffers.
#[derive(Debug, Clone)]
pub struct CompositeRequest {
    /// The background image. Never mutated.
    pub base: Arc<RasterImage>,
    /// The image drawn on top.
    pub overlay: Arc<RasterImage>,
    /// Overlay scale relative to the *base* dimensions. The overlay is
    /// resized to `(base_width * scale, base_height * scale)` regardless of
    /// its own aspect ratio. Non-positive values skip drawing entirely.
    pub scale: f32,
    /// Placement of the scaled overlay.
    pub placement: PlacementMode,
    /// Interpolation used when resizing the overlay.
    pub filter: FilterType,
}

impl CompositeRequest {
    /// Build a request with the default scale, centered placement, and
    /// bilinear scaling.
    pub fn new(base: Arc<RasterImage>, overlay: Arc<RasterImage>) -> Self {
        Self {
            base,
            overlay,
            scale: DEFAULT_SCALE,
            placement: PlacementMode::default(),
            filter: FilterType::default(),
        }
    }
}
