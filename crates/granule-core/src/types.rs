use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Newtype for material identifiers. 0 = empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialId(pub u8);

impl MaterialId {
    pub const EMPTY: Self = Self(0);
    pub const SAND: Self = Self(1);
    pub const WATER: Self = Self(2);
    pub const STEAM: Self = Self(3);
    pub const STONE: Self = Self(4);
    pub const ICE: Self = Self(5);
    pub const LAVA: Self = Self(6);

    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Slot in per-material arrays.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Chunk coordinate in chunk-space (each unit = CHUNK_SIZE voxels).
pub type ChunkCoord = IVec3;

/// World coordinate in voxel-space.
pub type WorldCoord = IVec3;

/// Result of a voxel lookup.
///
/// `Unknown` is the "outside known space" sentinel. It is only ever returned
/// by reads; voxel buffers store `MaterialId` and cannot hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Unknown,
    Known(MaterialId),
}

impl Cell {
    pub const EMPTY: Self = Cell::Known(MaterialId::EMPTY);

    /// Known to hold nothing. `Unknown` is never empty.
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    pub fn is_unknown(self) -> bool {
        self == Cell::Unknown
    }

    pub fn is(self, material: MaterialId) -> bool {
        self == Cell::Known(material)
    }

    pub fn material(self) -> Option<MaterialId> {
        match self {
            Cell::Known(id) => Some(id),
            Cell::Unknown => None,
        }
    }
}

impl From<MaterialId> for Cell {
    fn from(id: MaterialId) -> Self {
        Cell::Known(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_not_empty() {
        assert!(!Cell::Unknown.is_empty());
        assert!(Cell::EMPTY.is_empty());
        assert_ne!(Cell::Unknown, Cell::EMPTY);
    }

    #[test]
    fn test_cell_material() {
        assert_eq!(Cell::Known(MaterialId::SAND).material(), Some(MaterialId::SAND));
        assert_eq!(Cell::Unknown.material(), None);
        assert!(Cell::from(MaterialId::WATER).is(MaterialId::WATER));
        assert!(!Cell::Unknown.is(MaterialId::EMPTY));
    }

    #[test]
    fn test_material_id_size() {
        assert_eq!(std::mem::size_of::<MaterialId>(), 1);
    }
}
