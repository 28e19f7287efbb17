use rgb::RGB8;

use crate::color_math::distance_sq;
use crate::error::QuantizeError;

/// Largest number of entries a palette may hold, so indices fit in a `u8`.
pub const MAX_PALETTE_LEN: usize = 256;

/// An ordered list of representative colors.
///
/// Order is meaningful: it is the order the median cut emitted the buckets,
/// and nearest-color ties resolve to the lower index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Palette {
    entries: Vec<RGB8>,
}

impl Palette {
    /// Wrap a list of colors. Fails if there are more than 256 of them.
    pub fn from_entries(entries: Vec<RGB8>) -> Result<Self, QuantizeError> {
        if entries.len() > MAX_PALETTE_LEN {
            return Err(QuantizeError::TooManyColors(entries.len()));
        }
        Ok(Self { entries })
    }

    /// Palette entries in emission order.
    pub fn entries(&self) -> &[RGB8] {
        &self.entries
    }

    /// Number of palette entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Color at `index`.
    pub fn get(&self, index: u8) -> Option<RGB8> {
        self.entries.get(index as usize).copied()
    }

    /// Find the nearest palette index for a color (brute force).
    ///
    /// Equidistant entries resolve to the lowest index. Returns 0 for an
    /// empty palette; callers check emptiness first.
    pub fn nearest(&self, color: RGB8) -> u8 {
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, entry) in self.entries.iter().enumerate() {
            let d = distance_sq(color, *entry);
            if d < best_dist {
                best_dist = d;
                best_idx = i;
                if d == 0 {
                    break;
                }
            }
        }

        best_idx as u8
    }

    /// Squared distance from a color to the entry at `index`, if there is one.
    pub fn distance_sq(&self, color: RGB8, index: u8) -> Option<u32> {
        self.get(index).map(|entry| distance_sq(color, entry))
    }

    /// Consume the palette, returning its entries in order.
    pub fn into_entries(self) -> Vec<RGB8> {
        self.entries
    }
}
