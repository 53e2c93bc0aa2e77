use crate::rng::SimRng;
use granule_core::constants::{CHUNK_SIZE, VOXELS_PER_SLICE};

/// Visiting order for the voxels of one horizontal slice.
///
/// Shuffled once when the simulation is built and reused for every slice of
/// every chunk on every tick. Slices themselves are always walked bottom to
/// top so settled material is processed before material above lands on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceOrder {
    /// In-slice indices `z * CHUNK_SIZE + x`.
    positions: Box<[u16]>,
}

impl SliceOrder {
    pub fn shuffled(rng: &mut SimRng) -> Self {
        let positions = rng
            .permutation(VOXELS_PER_SLICE as usize)
            .into_iter()
            .map(|i| i as u16)
            .collect();
        Self { positions }
    }

    /// Row-major order, for tests that need a predictable scan.
    pub fn sequential() -> Self {
        Self {
            positions: (0..VOXELS_PER_SLICE as u16).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The `(x, z)` visited at step `i`.
    pub fn position(&self, i: usize) -> (i32, i32) {
        let p = self.positions[i] as u32;
        ((p % CHUNK_SIZE) as i32, (p / CHUNK_SIZE) as i32)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.len()).map(|i| self.position(i))
    }
}
