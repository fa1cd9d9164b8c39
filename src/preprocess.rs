use crate::error::{Error, Result};
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use palette::{Pixel, Srgb};
use std::path::Path;

/// Open and decode the image at `path`, guessing the format from its contents.
pub fn load(path: &Path) -> Result<DynamicImage> {
    let to_error = |source| Error::ImageLoad {
        path: path.to_path_buf(),
        source,
    };

    image::io::Reader::open(path)
        .map_err(|err| to_error(image::ImageError::IoError(err)))?
        .with_guessed_format()
        .map_err(|err| to_error(image::ImageError::IoError(err)))?
        .decode()
        .map_err(to_error)
}

/// Scale the image down by `scale` in each dimension, convert it to RGB and flatten it into one sample per pixel,
/// with every channel in `0.0..=1.0`.
pub fn pixel_matrix(image: &DynamicImage, scale: f32) -> Result<Vec<Srgb>> {
    let (width, height) = image.dimensions();

    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }

    let (scaled_width, scaled_height) = (scale_dimension(width, scale), scale_dimension(height, scale));
    tracing::debug!(width, height, scaled_width, scaled_height, "scaling image down");

    // bilinear resampling on the way down, then drop alpha and expand grayscale so every sample has three channels
    let rgb = image
        .resize_exact(scaled_width, scaled_height, FilterType::Triangle)
        .into_rgb8();

    let pixels = Srgb::<u8>::from_raw_slice(rgb.as_raw());
    Ok(pixels.iter().map(|&pixel| pixel.into_format()).collect())
}

fn scale_dimension(dimension: u32, scale: f32) -> u32 {
    // halves round to even so an odd dimension behaves the same as in common image libraries
    ((dimension as f32 * scale).round_ties_even() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn to_u8(samples: Vec<Srgb>) -> Vec<(u8, u8, u8)> {
        samples
            .into_iter()
            .map(|sample| sample.into_format::<u8>().into_components())
            .collect()
    }

    #[test]
    fn halves_each_dimension() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 6, Rgb([1, 2, 3])));
        let samples = to_u8(pixel_matrix(&image, 0.5).unwrap());

        assert_eq!(samples.len(), 4 * 3);
        assert!(samples.iter().all(|sample| *sample == (1, 2, 3)));
    }

    #[test]
    fn odd_dimensions_round_half_to_even() {
        assert_eq!(scale_dimension(5, 0.5), 2);
        assert_eq!(scale_dimension(3, 0.5), 2);
        assert_eq!(scale_dimension(7, 0.5), 4);
    }

    #[test]
    fn tiny_images_keep_one_pixel() {
        assert_eq!(scale_dimension(1, 0.5), 1);

        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([9, 9, 9])));
        assert_eq!(to_u8(pixel_matrix(&image, 0.5).unwrap()), vec![(9, 9, 9)]);
    }

    #[test]
    fn alpha_is_dropped() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 0])));

        assert_eq!(to_u8(pixel_matrix(&image, 0.5).unwrap()), vec![(10, 20, 30)]);
    }

    #[test]
    fn empty_image_is_rejected() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(0, 4));

        assert!(matches!(pixel_matrix(&image, 0.5), Err(Error::EmptyImage)));
    }

    #[test]
    fn missing_file_fails_to_load() {
        let result = load(Path::new("definitely/not/here.png"));

        assert!(matches!(result, Err(Error::ImageLoad { .. })));
    }
}
