//! EXIF orientation correction.

use image::{imageops, RgbaImage};

use super::Orientation;

/// Transform an image so it displays upright regardless of how the camera
/// stored it.
pub(crate) fn apply_orientation(img: RgbaImage, orientation: Orientation) -> RgbaImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => imageops::flip_horizontal(&img),
        Orientation::Rotate180 => imageops::rotate180(&img),
        Orientation::FlipVertical => imageops::flip_vertical(&img),
        Orientation::Transpose => imageops::flip_horizontal(&imageops::rotate90(&img)),
        Orientation::Rotate90CW => imageops::rotate90(&img),
        Orientation::Transverse => imageops::flip_horizontal(&imageops::rotate270(&img)),
        Orientation::Rotate270CW => imageops::rotate270(&img),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    /// 2x1 image: red on the left, green on the right.
    fn red_green() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(2, 1, RED);
        img.put_pixel(1, 0, GREEN);
        img
    }

    #[test]
    fn test_normal_is_unchanged() {
        let img = red_green();
        let out = apply_orientation(img.clone(), Orientation::Normal);
        assert_eq!(out, img);
    }

    #[test]
    fn test_rotate90_swaps_dimensions() {
        let out = apply_orientation(red_green(), Orientation::Rotate90CW);
        assert_eq!(out.dimensions(), (1, 2));
        // Rotating clockwise sends the left pixel to the top.
        assert_eq!(*out.get_pixel(0, 0), RED);
        assert_eq!(*out.get_pixel(0, 1), GREEN);
    }

    #[test]
    fn test_rotate180_reverses_order() {
        let out = apply_orientation(red_green(), Orientation::Rotate180);
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(*out.get_pixel(0, 0), GREEN);
        assert_eq!(*out.get_pixel(1, 0), RED);
    }

    #[test]
    fn test_flip_horizontal() {
        let out = apply_orientation(red_green(), Orientation::FlipHorizontal);
        assert_eq!(*out.get_pixel(0, 0), GREEN);
        assert_eq!(*out.get_pixel(1, 0), RED);
    }

    #[test]
    fn test_transpose_swaps_dimensions() {
        let out = apply_orientation(red_green(), Orientation::Transpose);
        assert_eq!(out.dimensions(), (1, 2));
    }
}
