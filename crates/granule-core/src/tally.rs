use crate::constants::MATERIAL_SLOTS;
use crate::types::MaterialId;

/// Per-material voxel counts, one slot per possible `MaterialId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialCounts {
    counts: Box<[u32; MATERIAL_SLOTS]>,
}

impl Default for MaterialCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialCounts {
    pub fn new() -> Self {
        Self {
            counts: Box::new([0; MATERIAL_SLOTS]),
        }
    }

    pub fn add(&mut self, id: MaterialId) {
        self.counts[id.index()] += 1;
    }

    pub fn get(&self, id: MaterialId) -> u32 {
        self.counts[id.index()]
    }

    /// Add every slot of `other` into this tally.
    pub fn merge(&mut self, other: &MaterialCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    pub fn clear(&mut self) {
        self.counts.fill(0);
    }
}
