use glam::IVec3;
use granule_core::types::{Cell, MaterialId};

/// Where a chunk sends reads and writes that fall outside its own storage.
/// Coordinates are chunk-local and lie outside `[0, CHUNK_SIZE)` on at least
/// one axis.
pub trait Boundary {
    fn read(&self, local: IVec3) -> Cell;
    fn write(&mut self, local: IVec3, material: MaterialId);
}

/// No world around the chunk: everything outside is unknown and writes there
/// are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl Boundary for Detached {
    fn read(&self, _local: IVec3) -> Cell {
        Cell::Unknown
    }

    fn write(&mut self, _local: IVec3, _material: MaterialId) {}
}
