//! Subsampled image decoding.
//!
//! This module turns an encoded image source into a [`RasterImage`] whose
//! dimensions roughly fit a caller-provided bounding box, without ever
//! retaining a full-resolution decode of an arbitrarily large photo.
//!
//! # Two-pass protocol
//!
//! 1. **Probe pass** - open a fresh handle and read only the header: native
//!    dimensions plus EXIF orientation. No pixel buffer is allocated.
//! 2. **Decode pass** - compute the power-of-two sample factor from the
//!    probed dimensions, open a second fresh handle, decode, and reduce to
//!    the subsampled size.
//!
//! The bounding box is advisory. Callers size their layout against the box
//! they asked for; the pixels they get back are whatever the sample factor
//! naturally yields. Keeping the passes separate is what bounds memory: the
//! probe decides how coarse the decode may be before any pixels exist.
//!
//! # Sources
//!
//! [`ImageSource`] covers bytes bundled with the application and image files
//! on disk. Each pass opens its own handle, so sources never need to rewind
//! a partially consumed stream.

mod orient;
mod sample;
mod source;
mod types;

pub use sample::sample_factor;
pub use types::{
    DecodeError, DecodeRequest, DecodedPhoto, FilterType, ImageSource, Orientation, RasterImage,
    BYTES_PER_PIXEL,
};

use log::debug;

/// Decode the request's source, subsampled against its bounding box.
///
/// # Errors
///
/// Returns `DecodeError::InvalidRequest` when either bounding box dimension
/// is zero, and `DecodeError::SourceUnreadable` when the source cannot be
/// opened or does not contain a decodable image.
pub fn decode(request: &DecodeRequest) -> Result<DecodedPhoto, DecodeError> {
    request.validate()?;

    let info = request.source.probe()?;
    let factor = sample_factor(info.width, info.height, request.req_width, request.req_height);
    debug!(
        "decode: source {}x{}, box {}x{}, sample factor {}",
        info.width, info.height, request.req_width, request.req_height, factor
    );

    let decoded = request.source.decode_image()?.into_rgba8();
    let upright = orient::apply_orientation(decoded, info.orientation);
    let image = sample::subsample(&upright, factor);

    let (native_width, native_height) = info.oriented_dimensions();
    Ok(DecodedPhoto {
        image,
        native_width,
        native_height,
        sample_factor: factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// PNG bytes for a gradient image, so subsampling picks distinct pixels.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        });
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_decode_small_source_is_not_sampled() {
        let request = DecodeRequest::new(ImageSource::from_bytes(png_bytes(20, 10)), 64, 64);
        let photo = decode(&request).unwrap();

        assert_eq!(photo.sample_factor, 1);
        assert_eq!(photo.image.width, 20);
        assert_eq!(photo.image.height, 10);
        assert_eq!(photo.native_width, 20);
        assert_eq!(photo.native_height, 10);
    }

    #[test]
    fn test_decode_large_source_is_subsampled() {
        // Halves are 32x32; one halving still exceeds the 16x16 box.
        let request = DecodeRequest::new(ImageSource::from_bytes(png_bytes(64, 64)), 16, 16);
        let photo = decode(&request).unwrap();

        assert_eq!(photo.sample_factor, 2);
        assert_eq!(photo.image.width, 32);
        assert_eq!(photo.image.height, 32);
        // Native dimensions keep reporting the full resolution.
        assert_eq!(photo.native_width, 64);
        assert_eq!(photo.native_height, 64);
    }

    #[test]
    fn test_decode_output_is_not_resized_to_the_box() {
        // Box 30x30 on a 100x100 source: factor 2 gives 50x50, not 30x30.
        let request = DecodeRequest::new(ImageSource::from_bytes(png_bytes(100, 100)), 30, 30);
        let photo = decode(&request).unwrap();

        assert_eq!(photo.sample_factor, 2);
        assert_eq!(photo.image.width, 50);
        assert_eq!(photo.image.height, 50);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let bytes = png_bytes(48, 36);
        let request = DecodeRequest::new(ImageSource::from_bytes(bytes), 12, 12);

        let first = decode(&request).unwrap();
        let second = decode(&request).unwrap();

        assert_eq!(first.image.width, second.image.width);
        assert_eq!(first.image.height, second.image.height);
        assert_eq!(first.image.pixels, second.image.pixels);
    }

    #[test]
    fn test_decode_preserves_pixels_at_factor_one() {
        let request = DecodeRequest::new(ImageSource::from_bytes(png_bytes(8, 8)), 8, 8);
        let photo = decode(&request).unwrap();

        assert_eq!(photo.image.pixel_at(3, 5), Some([3, 5, 128, 255]));
    }

    #[test]
    fn test_decode_rejects_zero_box() {
        let source = ImageSource::from_bytes(png_bytes(8, 8));

        let result = decode(&DecodeRequest::new(source.clone(), 0, 8));
        assert!(matches!(result, Err(DecodeError::InvalidRequest(_))));

        let result = decode(&DecodeRequest::new(source, 8, 0));
        assert!(matches!(result, Err(DecodeError::InvalidRequest(_))));
    }

    #[test]
    fn test_decode_rejects_garbage_bytes() {
        let request = DecodeRequest::new(ImageSource::from_bytes(vec![1u8, 2, 3, 4]), 8, 8);
        let result = decode(&request);
        assert!(matches!(result, Err(DecodeError::SourceUnreadable(_))));
    }

    #[test]
    fn test_decode_rejects_missing_file() {
        let request = DecodeRequest::new(ImageSource::from_path("/nonexistent/photo.png"), 8, 8);
        let result = decode(&request);
        assert!(matches!(result, Err(DecodeError::SourceUnreadable(_))));
    }

    #[test]
    fn test_validation_runs_before_io() {
        // A bad box on a bad source reports the box first.
        let request = DecodeRequest::new(ImageSource::from_path("/nonexistent/photo.png"), 0, 0);
        let result = decode(&request);
        assert!(matches!(result, Err(DecodeError::InvalidRequest(_))));
    }
}
