use rgb::RGB8;

use crate::color_math::{channel, channel_ranges, index_of_max, mean};
use crate::error::QuantizeError;
use crate::palette::Palette;

/// Buckets at least this large split their halves on separate rayon tasks.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

/// A bucket of pixels owned by one step of the recursive subdivision.
#[derive(Debug, Clone)]
struct ColorBox {
    pixels: Vec<RGB8>,
}

impl ColorBox {
    fn new(pixels: Vec<RGB8>) -> Self {
        Self { pixels }
    }

    /// Channel with the widest spread. Ties go to red, then green.
    fn dominant_channel(&self) -> Result<usize, QuantizeError> {
        let ranges = channel_ranges(&self.pixels)?;
        index_of_max(&ranges)
    }

    /// Sort along the dominant channel and cut into two halves.
    ///
    /// The first half gets `ceil(n / 2)` pixels. The sort is stable, so
    /// pixels with equal keys keep their scan order.
    fn split(mut self) -> Result<(ColorBox, ColorBox), QuantizeError> {
        let axis = self.dominant_channel()?;
        self.pixels.sort_by_key(|p| channel(*p, axis));

        let mid = self.pixels.len().div_ceil(2);
        let right = self.pixels.split_off(mid);
        Ok((ColorBox::new(self.pixels), ColorBox::new(right)))
    }

    /// Emit palette entries for this bucket, `levels` cuts deep.
    fn subdivide(self, levels: u32) -> Result<Vec<RGB8>, QuantizeError> {
        match self.pixels.len() {
            0 => return Ok(Vec::new()),
            1 => return Ok(self.pixels),
            _ => {}
        }

        log::trace!("splitting {} pixels, {levels} levels left", self.pixels.len());

        let (left, right) = self.split()?;

        if levels <= 1 {
            // Both halves are non-empty here since the bucket had >= 2 pixels.
            return Ok(vec![mean(&left.pixels)?, mean(&right.pixels)?]);
        }

        let (mut first, second) = subdivide_pair(left, right, levels - 1)?;
        first.extend(second);
        Ok(first)
    }
}

#[cfg(not(feature = "rayon"))]
fn subdivide_pair(
    left: ColorBox,
    right: ColorBox,
    levels: u32,
) -> Result<(Vec<RGB8>, Vec<RGB8>), QuantizeError> {
    Ok((left.subdivide(levels)?, right.subdivide(levels)?))
}

#[cfg(feature = "rayon")]
fn subdivide_pair(
    left: ColorBox,
    right: ColorBox,
    levels: u32,
) -> Result<(Vec<RGB8>, Vec<RGB8>), QuantizeError> {
    if left.pixels.len() + right.pixels.len() < PARALLEL_THRESHOLD {
        return Ok((left.subdivide(levels)?, right.subdivide(levels)?));
    }
    let (first, second) = rayon::join(|| left.subdivide(levels), || right.subdivide(levels));
    Ok((first?, second?))
}

/// Number of colors `build_palette` produces for a population of at least
/// that many pixels. Assumes a valid count; anything above
/// [`crate::MAX_ITERATIONS`] reports the maximum, which `build_palette` rejects.
pub fn palette_size(iterations: u32) -> usize {
    1usize << iterations.clamp(1, crate::MAX_ITERATIONS)
}

/// Build a palette by recursive median cut on the dominant channel.
///
/// Every level sorts the current bucket along its widest channel and cuts it
/// into two near-equal halves. `iterations` is the number of levels, with a
/// minimum of one; the last level emits the mean color of each half. The
/// palette therefore has `2^max(iterations, 1)` entries when there are at
/// least that many pixels. Smaller populations yield fewer entries because a
/// single-pixel bucket emits itself and stops.
///
/// The input slice is not modified; the subdivision works on its own copy.
/// An empty input yields an empty palette.
pub fn build_palette(pixels: &[RGB8], iterations: u32) -> Result<Palette, QuantizeError> {
    if iterations > crate::MAX_ITERATIONS {
        return Err(QuantizeError::InvalidIterations(iterations));
    }

    let entries = ColorBox::new(pixels.to_vec()).subdivide(iterations.max(1))?;
    log::trace!(
        "median cut: {} pixels, {iterations} iterations -> {} colors",
        pixels.len(),
        entries.len()
    );
    Palette::from_entries(entries)
}
