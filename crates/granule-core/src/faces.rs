//! Face table consumed by mesh generation.
//!
//! A face between two voxels is emitted only when the neighbor in that
//! direction is empty or unknown. Each face carries its outward direction,
//! four quad corners, and the texture row it samples (0 = side, 1 = bottom,
//! 2 = top). The texture column is the voxel's `material id - 1`.

use crate::types::Cell;
use glam::IVec3;

/// One quad corner: position within the unit cube and its UV.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    pub pos: [u8; 3],
    pub uv: [u8; 2],
}

/// One of the six cube faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub dir: IVec3,
    pub corners: [Corner; 4],
    pub uv_row: u8,
}

const fn corner(pos: [u8; 3], uv: [u8; 2]) -> Corner {
    Corner { pos, uv }
}

/// Left, right, bottom, top, back, front.
pub static FACES: [Face; 6] = [
    Face {
        dir: IVec3::new(-1, 0, 0),
        uv_row: 0,
        corners: [
            corner([0, 1, 0], [0, 1]),
            corner([0, 0, 0], [0, 0]),
            corner([0, 1, 1], [1, 1]),
            corner([0, 0, 1], [1, 0]),
        ],
    },
    Face {
        dir: IVec3::new(1, 0, 0),
        uv_row: 0,
        corners: [
            corner([1, 1, 1], [0, 1]),
            corner([1, 0, 1], [0, 0]),
            corner([1, 1, 0], [1, 1]),
            corner([1, 0, 0], [1, 0]),
        ],
    },
    Face {
        dir: IVec3::new(0, -1, 0),
        uv_row: 1,
        corners: [
            corner([1, 0, 1], [1, 0]),
            corner([0, 0, 1], [0, 0]),
            corner([1, 0, 0], [1, 1]),
            corner([0, 0, 0], [0, 1]),
        ],
    },
    Face {
        dir: IVec3::new(0, 1, 0),
        uv_row: 2,
        corners: [
            corner([0, 1, 1], [1, 1]),
            corner([1, 1, 1], [0, 1]),
            corner([0, 1, 0], [1, 0]),
            corner([1, 1, 0], [0, 0]),
        ],
    },
    Face {
        dir: IVec3::new(0, 0, -1),
        uv_row: 0,
        corners: [
            corner([1, 0, 0], [0, 0]),
            corner([0, 0, 0], [1, 0]),
            corner([1, 1, 0], [0, 1]),
            corner([0, 1, 0], [1, 1]),
        ],
    },
    Face {
        dir: IVec3::new(0, 0, 1),
        uv_row: 0,
        corners: [
            corner([0, 0, 1], [0, 0]),
            corner([1, 0, 1], [1, 0]),
            corner([0, 1, 1], [0, 1]),
            corner([1, 1, 1], [1, 1]),
        ],
    },
];

/// Whether a face toward `neighbor` is visible.
pub fn face_visible(neighbor: Cell) -> bool {
    match neighbor {
        Cell::Unknown => true,
        Cell::Known(id) => id.is_empty(),
    }
}
