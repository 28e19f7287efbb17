#![forbid(unsafe_code)]

//! Posterize images with a recursive median-cut palette.
//!
//! The pipeline has two stages. [`median_cut::build_palette`] sorts the pixel
//! population along its widest RGB channel, cuts it in half, and repeats for
//! a fixed number of levels, emitting the mean color of each final bucket.
//! [`remap::quantize_pixels`] then replaces every pixel with its nearest
//! palette color, carrying alpha through untouched.
//!
//! ```
//! use posterize::{QuantizeConfig, RGBA8};
//!
//! let pixels = vec![
//!     RGBA8::new(0, 0, 0, 255),
//!     RGBA8::new(10, 10, 10, 255),
//!     RGBA8::new(250, 0, 0, 128),
//!     RGBA8::new(255, 5, 5, 0),
//! ];
//! let result = posterize::quantize_rgba(&pixels, 2, 2, &QuantizeConfig::new().iterations(1)).unwrap();
//! assert_eq!(result.palette_len(), 2);
//! assert_eq!(result.to_rgba()[3], RGBA8::new(253, 3, 3, 0));
//! ```

pub mod color_math;
pub mod error;
#[cfg(feature = "image")]
pub mod image_host;
pub mod median_cut;
pub mod palette;
pub mod remap;

pub use error::QuantizeError;
pub use imgref::{ImgRef, ImgVec};
pub use palette::Palette;
pub use rgb::{RGB8, RGBA8};

/// Iteration count used when none is configured (4 colors).
pub const DEFAULT_ITERATIONS: u32 = 2;

/// Deepest supported subdivision (256 colors).
pub const MAX_ITERATIONS: u32 = 8;

/// Configuration for palette quantization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizeConfig {
    /// Median-cut levels. The palette has `2^max(iterations, 1)` colors for
    /// images with at least that many pixels. At most [`MAX_ITERATIONS`].
    pub iterations: u32,
}

impl Default for QuantizeConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

impl QuantizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iterations(mut self, n: u32) -> Self {
        self.iterations = n;
        self
    }

    /// Palette size this configuration produces for a large enough image.
    ///
    /// `None` when `iterations` exceeds [`MAX_ITERATIONS`]; quantizing with
    /// such a config fails with [`QuantizeError::InvalidIterations`].
    pub fn max_colors(&self) -> Option<usize> {
        if self.iterations > MAX_ITERATIONS {
            return None;
        }
        Some(median_cut::palette_size(self.iterations))
    }
}

/// Quantization result.
#[derive(Debug, Clone)]
pub struct QuantizeResult {
    palette: Palette,
    indices: Vec<u8>,
    alphas: Vec<u8>,
    width: usize,
    height: usize,
}

impl QuantizeResult {
    /// Palette entries, in the order the median cut produced them.
    pub fn palette(&self) -> &[RGB8] {
        self.palette.entries()
    }

    /// Number of colors in the palette.
    pub fn palette_len(&self) -> usize {
        self.palette.len()
    }

    /// Palette index for each pixel, row-major.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Original alpha for each pixel. All 255 for RGB input.
    pub fn alphas(&self) -> &[u8] {
        &self.alphas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Remapped pixels: each palette color paired with the source alpha.
    pub fn to_rgba(&self) -> Vec<RGBA8> {
        remap::reassemble(&self.indices, &self.alphas, &self.palette)
    }

    /// Remapped pixels as a 2-D image buffer.
    pub fn to_img(&self) -> ImgVec<RGBA8> {
        ImgVec::new(self.to_rgba(), self.width, self.height)
    }

    /// Take the palette out of the result.
    pub fn into_palette(self) -> Palette {
        self.palette
    }
}

/// Quantize an RGB image. The result reports full opacity for every pixel.
pub fn quantize(
    pixels: &[RGB8],
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    validate_inputs(pixels.len(), width, height, config)?;

    run(pixels, vec![255; pixels.len()], width, height, config)
}

/// Quantize an RGBA image. Alpha does not take part in palette construction
/// or matching and is carried through to the result unchanged.
pub fn quantize_rgba(
    pixels: &[RGBA8],
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    validate_inputs(pixels.len(), width, height, config)?;

    let (colors, alphas) = remap::split_alpha(pixels);
    run(&colors, alphas, width, height, config)
}

/// Quantize an RGBA image buffer and return the posterized image.
///
/// Honors the buffer's stride; the output is tightly packed.
pub fn quantize_img(
    img: ImgRef<'_, RGBA8>,
    config: &QuantizeConfig,
) -> Result<ImgVec<RGBA8>, QuantizeError> {
    let pixels: Vec<RGBA8> = img.pixels().collect();
    let result = quantize_rgba(&pixels, img.width(), img.height(), config)?;
    Ok(result.to_img())
}

fn run(
    colors: &[RGB8],
    alphas: Vec<u8>,
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<QuantizeResult, QuantizeError> {
    // 1. Median cut over the whole population
    let palette = median_cut::build_palette(colors, config.iterations)?;

    // 2. Nearest-color remap
    let indices = remap::remap_pixels(colors, &palette)?;

    log::debug!(
        "quantized {width}x{height} image with {} iterations to {} colors",
        config.iterations,
        palette.len()
    );

    Ok(QuantizeResult {
        palette,
        indices,
        alphas,
        width,
        height,
    })
}

fn validate_inputs(
    pixel_count: usize,
    width: usize,
    height: usize,
    config: &QuantizeConfig,
) -> Result<(), QuantizeError> {
    if width == 0 || height == 0 {
        return Err(QuantizeError::ZeroDimension);
    }
    if Some(pixel_count) != width.checked_mul(height) {
        return Err(QuantizeError::DimensionMismatch {
            len: pixel_count,
            width,
            height,
        });
    }
    if config.iterations > MAX_ITERATIONS {
        return Err(QuantizeError::InvalidIterations(config.iterations));
    }
    Ok(())
}
