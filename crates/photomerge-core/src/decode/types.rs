//! Core types shared by the decode and composite pipelines.

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bytes per pixel in a [`RasterImage`] (RGBA8).
pub const BYTES_PER_PIXEL: usize = 4;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The request carried an invalid target bounding box.
    #[error("Invalid decode request: {0}")]
    InvalidRequest(String),

    /// The source could not be opened, or its bytes contain no
    /// recognizable image.
    #[error("Unreadable image source: {0}")]
    SourceUnreadable(String),
}

/// Filter type for image scaling operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterType {
    /// Nearest neighbor interpolation (fastest, lowest quality).
    Nearest,
    /// Bilinear interpolation (fast, acceptable quality).
    #[default]
    Bilinear,
    /// Lanczos3 interpolation (slower, highest quality).
    Lanczos3,
}

impl FilterType {
    /// Convert to the image crate's FilterType.
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            FilterType::Nearest => image::imageops::FilterType::Nearest,
            FilterType::Bilinear => image::imageops::FilterType::Triangle,
            FilterType::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// EXIF orientation values (1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if this orientation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// An encoded image source that can be opened for reading more than once.
///
/// The subsampled decode reads the source twice: a header-only probe pass
/// followed by the full decode pass. Each pass acquires a fresh handle, so
/// the underlying resource never needs to support rewinding a partially
/// consumed stream.
#[derive(Debug, Clone)]
pub enum ImageSource {
    /// Encoded image bytes held in memory, e.g. an asset bundled with the
    /// application.
    Memory(Arc<[u8]>),
    /// An image file on disk.
    Path(PathBuf),
}

impl ImageSource {
    /// Build a source from in-memory encoded bytes.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        ImageSource::Memory(bytes.into())
    }

    /// Build a source referring to an image file on disk.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ImageSource::Path(path.into())
    }
}

/// A request to decode an image subsampled to roughly fit a bounding box.
///
/// The bounding box is advisory: it steers the choice of sample factor but
/// the decoded image is whatever that factor naturally yields, not an exact
/// resize to `req_width x req_height`.
#[derive(Debug, Clone)]
pub struct DecodeRequest {
    /// Where the encoded image comes from.
    pub source: ImageSource,
    /// Target bounding box width in pixels. Must be > 0.
    pub req_width: u32,
    /// Target bounding box height in pixels. Must be > 0.
    pub req_height: u32,
}

impl DecodeRequest {
    pub fn new(source: ImageSource, req_width: u32, req_height: u32) -> Self {
        Self {
            source,
            req_width,
            req_height,
        }
    }

    /// Check the request parameters, failing eagerly before any I/O.
    pub fn validate(&self) -> Result<(), DecodeError> {
        if self.req_width == 0 {
            return Err(DecodeError::InvalidRequest(
                "required width must be > 0".to_string(),
            ));
        }
        if self.req_height == 0 {
            return Err(DecodeError::InvalidRequest(
                "required height must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// A decoded image with RGBA pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data in row-major order (4 bytes per pixel).
    /// Length should be width * height * 4.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a new RasterImage with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a RasterImage from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Get the RGBA channels of the pixel at (x, y), or None when the
    /// coordinates fall outside the image.
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let slice = self.pixels.get(idx..idx + BYTES_PER_PIXEL)?;
        Some([slice[0], slice[1], slice[2], slice[3]])
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

/// Output of a subsampled decode.
///
/// Besides the decoded pixels, callers get the source's native dimensions
/// (after orientation correction) so UI controls such as offset sliders can
/// be ranged against the real image size rather than the subsampled one.
#[derive(Debug, Clone)]
pub struct DecodedPhoto {
    /// The decoded, subsampled, orientation-corrected image.
    pub image: RasterImage,
    /// Full-resolution source width after orientation correction.
    pub native_width: u32,
    /// Full-resolution source height after orientation correction.
    pub native_height: u32,
    /// The power-of-two sample factor that was applied.
    pub sample_factor: u32,
}
