use rgb::{RGB8, RGBA8};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::QuantizeError;
use crate::palette::Palette;

/// Map RGB pixels to the index of their nearest palette entry.
///
/// Nearest is by Euclidean distance in RGB; equidistant entries resolve to
/// the lowest index.
pub fn remap_pixels(pixels: &[RGB8], palette: &Palette) -> Result<Vec<u8>, QuantizeError> {
    if palette.is_empty() {
        return Err(QuantizeError::EmptyPalette);
    }

    #[cfg(feature = "rayon")]
    let indices: Vec<u8> = pixels.par_iter().map(|p| palette.nearest(*p)).collect();

    #[cfg(not(feature = "rayon"))]
    let indices: Vec<u8> = pixels.iter().map(|p| palette.nearest(*p)).collect();

    Ok(indices)
}

/// Replace every pixel with its nearest palette color, keeping its alpha.
///
/// `alphas[i]` belongs to `pixels[i]` and is copied through unchanged. The
/// output never contains a color that is not in `palette`.
pub fn quantize_pixels(
    pixels: &[RGB8],
    alphas: &[u8],
    palette: &Palette,
) -> Result<Vec<RGBA8>, QuantizeError> {
    if pixels.len() != alphas.len() {
        return Err(QuantizeError::LengthMismatch {
            pixels: pixels.len(),
            alphas: alphas.len(),
        });
    }

    let indices = remap_pixels(pixels, palette)?;
    Ok(reassemble(&indices, alphas, palette))
}

/// Combine palette indices and alpha values into RGBA pixels.
pub(crate) fn reassemble(indices: &[u8], alphas: &[u8], palette: &Palette) -> Vec<RGBA8> {
    let entries = palette.entries();
    indices
        .iter()
        .zip(alphas)
        .map(|(&idx, &a)| {
            let c = entries[idx as usize];
            RGBA8::new(c.r, c.g, c.b, a)
        })
        .collect()
}

/// Split RGBA pixels into their color and alpha parts.
pub fn split_alpha(pixels: &[RGBA8]) -> (Vec<RGB8>, Vec<u8>) {
    pixels
        .iter()
        .map(|p| (RGB8::new(p.r, p.g, p.b), p.a))
        .unzip()
}
