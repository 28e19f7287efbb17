//! Numeric primitives over raw RGB triples.
//!
//! Everything here is a pure function of its arguments. Distances are plain
//! Euclidean distances in RGB space with no perceptual weighting.

use rgb::RGB8;

use crate::error::QuantizeError;

/// Value of channel `axis` (0 = red, 1 = green, 2 = blue).
#[inline]
pub fn channel(color: RGB8, axis: usize) -> u8 {
    match axis {
        0 => color.r,
        1 => color.g,
        _ => color.b,
    }
}

/// Per-channel spread (max - min) across `colors`, as `[red, green, blue]`.
pub fn channel_ranges(colors: &[RGB8]) -> Result<[u8; 3], QuantizeError> {
    let first = colors.first().ok_or(QuantizeError::EmptyInput)?;

    let mut min = [first.r, first.g, first.b];
    let mut max = min;

    for c in &colors[1..] {
        for (axis, v) in [c.r, c.g, c.b].into_iter().enumerate() {
            min[axis] = min[axis].min(v);
            max[axis] = max[axis].max(v);
        }
    }

    Ok([max[0] - min[0], max[1] - min[1], max[2] - min[2]])
}

/// Index of the largest value. Ties resolve to the lowest index.
pub fn index_of_max<T: PartialOrd + Copy>(values: &[T]) -> Result<usize, QuantizeError> {
    let mut iter = values.iter().enumerate();
    let (mut best_idx, mut best) = iter.next().ok_or(QuantizeError::EmptyInput)?;

    for (i, v) in iter {
        // Strict comparison keeps the first occurrence.
        if *v > *best {
            best_idx = i;
            best = v;
        }
    }

    Ok(best_idx)
}

/// Per-channel arithmetic mean, rounded half-up.
pub fn mean(colors: &[RGB8]) -> Result<RGB8, QuantizeError> {
    if colors.is_empty() {
        return Err(QuantizeError::EmptyInput);
    }

    let mut sums = [0u64; 3];
    for c in colors {
        sums[0] += u64::from(c.r);
        sums[1] += u64::from(c.g);
        sums[2] += u64::from(c.b);
    }

    let n = colors.len() as u64;
    let round = |sum: u64| ((2 * sum + n) / (2 * n)) as u8;

    Ok(RGB8::new(round(sums[0]), round(sums[1]), round(sums[2])))
}

/// Squared Euclidean distance. Exact, so it is what nearest-color
/// comparisons use.
#[inline]
pub fn distance_sq(a: RGB8, b: RGB8) -> u32 {
    let dr = i32::from(a.r) - i32::from(b.r);
    let dg = i32::from(a.g) - i32::from(b.g);
    let db = i32::from(a.b) - i32::from(b.b);
    (dr * dr + dg * dg + db * db) as u32
}

/// Euclidean distance over the three channels.
pub fn distance(a: RGB8, b: RGB8) -> f64 {
    f64::from(distance_sq(a, b)).sqrt()
}
