use crate::chunk::Chunk;
use granule_core::math::{world_to_chunk, world_to_local};
use granule_core::types::{Cell, ChunkCoord, MaterialId, WorldCoord};
use std::collections::HashMap;

/// Spatial container for all chunks in the world.
///
/// Chunks are created lazily by the first write that lands in them. Reads of
/// a missing chunk see empty space; reads above the ceiling see
/// `Cell::Unknown`.
#[derive(Debug, Clone, Default)]
pub struct ChunkMap {
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Highest world Y that may hold voxels.
    ceiling_y: Option<i32>,
}

impl ChunkMap {
    pub fn new(ceiling_y: Option<i32>) -> Self {
        Self {
            chunks: HashMap::new(),
            ceiling_y,
        }
    }

    pub fn ceiling_y(&self) -> Option<i32> {
        self.ceiling_y
    }

    fn above_ceiling(&self, y: i32) -> bool {
        self.ceiling_y.is_some_and(|top| y > top)
    }

    /// Get a chunk by coordinate.
    pub fn get(&self, coord: &ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(coord)
    }

    /// Get a mutable chunk by coordinate.
    pub fn get_mut(&mut self, coord: &ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(coord)
    }

    /// Get the chunk at `coord`, creating an empty one if needed.
    pub fn get_or_create(&mut self, coord: ChunkCoord) -> &mut Chunk {
        self.chunks.entry(coord).or_insert_with(|| {
            log::debug!("created chunk {coord}");
            Chunk::new()
        })
    }

    /// Remove a chunk so it can be ticked against the rest of the map.
    pub(crate) fn take(&mut self, coord: &ChunkCoord) -> Option<Chunk> {
        self.chunks.remove(coord)
    }

    /// Put back a chunk removed by `take`. Boundary accesses from the
    /// detached chunk always land in other chunks, so `coord` is still vacant.
    pub(crate) fn restore(&mut self, coord: ChunkCoord, chunk: Chunk) {
        debug_assert!(
            !self.chunks.contains_key(&coord),
            "chunk {coord} was recreated while detached"
        );
        self.chunks.insert(coord, chunk);
    }

    /// World-space read.
    pub fn get_voxel(&self, world: WorldCoord) -> Cell {
        if self.above_ceiling(world.y) {
            return Cell::Unknown;
        }
        match self.chunks.get(&world_to_chunk(world)) {
            Some(chunk) => chunk.get_voxel(world_to_local(world)),
            None => Cell::EMPTY,
        }
    }

    /// World-space write. Above the ceiling the write is dropped.
    pub fn set_voxel(&mut self, world: WorldCoord, material: MaterialId) {
        if self.above_ceiling(world.y) {
            log::trace!("dropped write of {material:?} above ceiling at {world}");
            return;
        }
        let coord = world_to_chunk(world);
        // Writing empty into a missing chunk changes nothing.
        if material.is_empty() && !self.chunks.contains_key(&coord) {
            return;
        }
        self.get_or_create(coord)
            .set_voxel(world_to_local(world), material);
    }

    /// Loaded chunk coordinates, ordered by `(y, z, x)`.
    pub fn coords(&self) -> Vec<ChunkCoord> {
        let mut coords: Vec<ChunkCoord> = self.chunks.keys().copied().collect();
        coords.sort_by_key(|c| (c.y, c.z, c.x));
        coords
    }

    /// Iterator over all loaded chunks.
    pub fn iter(&self) -> impl Iterator<Item = (&ChunkCoord, &Chunk)> {
        self.chunks.iter()
    }

    /// Mutable iterator over all loaded chunks.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&ChunkCoord, &mut Chunk)> {
        self.chunks.iter_mut()
    }

    /// Number of loaded chunks.
    pub fn loaded_count(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn test_missing_chunk_reads_empty() {
        let map = ChunkMap::new(Some(31));
        assert_eq!(map.get_voxel(IVec3::new(100, 0, -100)), Cell::EMPTY);
        assert_eq!(map.loaded_count(), 0);
    }

    #[test]
    fn test_ceiling() {
        let mut map = ChunkMap::new(Some(31));
        assert_eq!(map.get_voxel(IVec3::new(0, 32, 0)), Cell::Unknown);
        map.set_voxel(IVec3::new(0, 32, 0), MaterialId::SAND);
        assert_eq!(map.loaded_count(), 0);

        map.set_voxel(IVec3::new(0, 31, 0), MaterialId::SAND);
        assert_eq!(map.get_voxel(IVec3::new(0, 31, 0)), Cell::Known(MaterialId::SAND));
    }

    #[test]
    fn test_no_ceiling() {
        let mut map = ChunkMap::new(None);
        map.set_voxel(IVec3::new(0, 1000, 0), MaterialId::STEAM);
        assert_eq!(
            map.get_voxel(IVec3::new(0, 1000, 0)),
            Cell::Known(MaterialId::STEAM)
        );
        assert!(map.get(&IVec3::new(0, 31, 0)).is_some());
    }

    #[test]
    fn test_lazy_creation_and_negative_coords() {
        let mut map = ChunkMap::new(Some(31));
        let pos = IVec3::new(-1, -40, -33);
        map.set_voxel(pos, MaterialId::STONE);
        assert_eq!(map.get_voxel(pos), Cell::Known(MaterialId::STONE));
        assert!(map.get(&IVec3::new(-1, -2, -2)).is_some());

        let chunk = map.get(&IVec3::new(-1, -2, -2)).expect("created");
        assert_eq!(
            chunk.get_voxel(IVec3::new(31, 24, 31)),
            Cell::Known(MaterialId::STONE)
        );
    }

    #[test]
    fn test_empty_write_creates_nothing() {
        let mut map = ChunkMap::new(Some(31));
        map.set_voxel(IVec3::new(3, 3, 3), MaterialId::EMPTY);
        assert_eq!(map.loaded_count(), 0);
    }

    #[test]
    fn test_coords_sorted_bottom_up() {
        let mut map = ChunkMap::new(None);
        for coord in [
            IVec3::new(1, 1, 0),
            IVec3::new(0, 0, 1),
            IVec3::new(1, 0, 0),
            IVec3::new(0, -1, 5),
        ] {
            map.get_or_create(coord);
        }
        assert_eq!(
            map.coords(),
            vec![
                IVec3::new(0, -1, 5),
                IVec3::new(1, 0, 0),
                IVec3::new(0, 0, 1),
                IVec3::new(1, 1, 0),
            ]
        );
    }

    #[test]
    fn test_take_and_restore_round_trip() {
        let mut map = ChunkMap::new(None);
        let coord = IVec3::ZERO;
        map.set_voxel(IVec3::new(1, 1, 1), MaterialId::SAND);
        let chunk = map.take(&coord).expect("loaded");
        assert_eq!(map.loaded_count(), 0);
        assert_eq!(map.get_voxel(IVec3::new(1, 1, 1)), Cell::EMPTY);

        map.restore(coord, chunk);
        assert_eq!(map.loaded_count(), 1);
        assert_eq!(map.get_voxel(IVec3::new(1, 1, 1)), Cell::Known(MaterialId::SAND));
    }
}
