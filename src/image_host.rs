//! `image` crate integration: posterize `RgbaImage`/`DynamicImage` buffers.
//!
//! # Usage
//!
//! ```rust,no_run
//! use posterize::{image_host, QuantizeConfig};
//!
//! let img = image::open("photo.png").unwrap();
//! let out = image_host::quantize_dynamic(&img, &QuantizeConfig::new().iterations(4)).unwrap();
//! out.save("photo-16.png").unwrap();
//! ```

use image::{DynamicImage, Rgba, RgbaImage};

use crate::{QuantizeConfig, QuantizeError, QuantizeResult, RGBA8};

/// Quantize an `RgbaImage`, returning the full result (palette and indices).
pub fn quantize_rgba_image(
    img: &RgbaImage,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    let (width, height) = img.dimensions();
    let pixels: Vec<RGBA8> = img
        .pixels()
        .map(|Rgba([r, g, b, a])| RGBA8::new(*r, *g, *b, *a))
        .collect();

    crate::quantize_rgba(&pixels, width as usize, height as usize, config)
}

/// Quantize an `RgbaImage` and render the posterized result.
pub fn quantize_image(img: &RgbaImage, config: &QuantizeConfig) -> Result<RgbaImage, QuantizeError> {
    let result = quantize_rgba_image(img, config)?;
    to_rgba_image(&result)
}

/// Quantize any `DynamicImage`, converting it to 8-bit RGBA first.
pub fn quantize_dynamic(
    img: &DynamicImage,
    config: &QuantizeConfig,
) -> Result<RgbaImage, QuantizeError> {
    quantize_image(&img.to_rgba8(), config)
}

/// Render a result back into an `RgbaImage`.
pub fn to_rgba_image(result: &QuantizeResult) -> Result<RgbaImage, QuantizeError> {
    let raw: Vec<u8> = result
        .to_rgba()
        .iter()
        .flat_map(|p| [p.r, p.g, p.b, p.a])
        .collect();
    let len = raw.len() / 4;

    RgbaImage::from_raw(result.width() as u32, result.height() as u32, raw).ok_or(
        QuantizeError::DimensionMismatch {
            len,
            width: result.width(),
            height: result.height(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_rgba_image() {
        let img = RgbaImage::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 255, 255, x as u8])
            }
        });

        let out = quantize_image(&img, &QuantizeConfig::new().iterations(1)).unwrap();
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(out.get_pixel(0, 1), &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(3, 0), &Rgba([255, 255, 255, 3]));
    }

    #[test]
    fn dynamic_rgb_becomes_opaque() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(3, 3, image::Rgb([40, 80, 120])));
        let out = quantize_dynamic(&img, &QuantizeConfig::new()).unwrap();
        assert!(out.pixels().all(|p| *p == Rgba([40, 80, 120, 255])));
    }
}
