use glam::IVec3;
use granule_core::direction::Direction;
use granule_core::types::{Cell, MaterialId};

/// Accessors an element rule uses to inspect and change the cells around
/// the voxel being processed. Offsets are relative; `IVec3::ZERO` is the
/// voxel itself.
pub trait Neighborhood {
    /// Read a cell. Returns `Cell::Unknown` outside known space.
    fn get(&self, offset: IVec3) -> Cell;

    /// Write a cell. Writes that leave the current chunk are forwarded by the
    /// implementor; writes into unknown space are dropped.
    fn set(&mut self, offset: IVec3, material: MaterialId);

    fn look(&self, dir: Direction) -> Cell {
        self.get(dir.offset())
    }

    fn put(&mut self, dir: Direction, material: MaterialId) {
        self.set(dir.offset(), material);
    }

    /// Replace the voxel being processed.
    fn transform(&mut self, material: MaterialId) {
        self.set(IVec3::ZERO, material);
    }

    /// Move `me` to `dir`, leaving `displaced` behind.
    fn swap_into(&mut self, dir: Direction, me: MaterialId, displaced: MaterialId) {
        self.set(IVec3::ZERO, displaced);
        self.set(dir.offset(), me);
    }
}
