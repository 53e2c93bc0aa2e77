pub mod boundary;
pub mod chunk;
pub mod chunk_map;

use boundary::Boundary;
use chunk::Chunk;
use chunk_map::ChunkMap;
use glam::IVec3;
use granule_core::config::SimConfig;
use granule_core::faces::{face_visible, Face, FACES};
use granule_core::math::{chunk_local_to_world, in_chunk};
use granule_core::tally::MaterialCounts;
use granule_core::types::{Cell, ChunkCoord, MaterialId, WorldCoord};
use granule_sim::{ElementTable, Simulation};
use std::collections::HashSet;

/// Outcome of one `World::tick`.
#[derive(Debug, Clone)]
pub struct TickReport {
    /// Chunks whose own pass reported a change, in tick order.
    pub changed: Vec<ChunkCoord>,
    /// Non-empty voxels visited across all chunks.
    pub active_voxels: u64,
    /// Per-material tally across all chunks.
    pub counts: MaterialCounts,
}

/// Primary public struct for the granule-world crate.
/// Owns the chunks, the simulation, and the bookkeeping the renderer reads.
pub struct World {
    chunks: ChunkMap,
    sim: Simulation,
    /// Tally from the most recent tick.
    counts: MaterialCounts,
    /// Chunks needing mesh regeneration since the last `drain_changed`.
    changed: HashSet<ChunkCoord>,
    ticks: u64,
}

impl Default for World {
    fn default() -> Self {
        Self::new(&SimConfig::default(), ElementTable::reference())
    }
}

impl World {
    pub fn new(config: &SimConfig, elements: ElementTable) -> Self {
        Self::with_simulation(config, Simulation::new(elements, config.seed))
    }

    /// Build around an existing simulation, e.g. one with a fixed slice order.
    pub fn with_simulation(config: &SimConfig, sim: Simulation) -> Self {
        Self {
            chunks: ChunkMap::new(config.ceiling_y),
            sim,
            counts: MaterialCounts::new(),
            changed: HashSet::new(),
            ticks: 0,
        }
    }

    /// Read a voxel. A position in a chunk that was never created is empty;
    /// above the ceiling it is `Cell::Unknown`.
    pub fn get_voxel(&self, pos: WorldCoord) -> Cell {
        self.chunks.get_voxel(pos)
    }

    /// Write a voxel, creating its chunk if needed.
    pub fn set_voxel(&mut self, pos: WorldCoord, material: MaterialId) {
        self.chunks.set_voxel(pos, material);
    }

    /// Tick every chunk once, bottom layer first.
    ///
    /// Chunks created by cross-chunk writes during this call wait for the
    /// next one.
    pub fn tick(&mut self) -> TickReport {
        self.counts.clear();
        let mut changed = Vec::new();
        let mut active_voxels = 0u64;

        for coord in self.chunks.coords() {
            let Some(mut chunk) = self.chunks.take(&coord) else {
                continue;
            };
            let mut boundary = WorldBoundary {
                chunks: &mut self.chunks,
                origin: coord,
            };
            if chunk.tick(&mut self.sim, &mut boundary) {
                changed.push(coord);
            }
            self.counts.merge(chunk.counts());
            active_voxels += chunk.active_voxels() as u64;
            self.chunks.restore(coord, chunk);
        }

        self.sweep_dirty();
        self.ticks += 1;
        log::debug!(
            "tick {}: {} chunks, {} active voxels, {} changed",
            self.ticks,
            self.chunks.loaded_count(),
            active_voxels,
            changed.len()
        );

        TickReport {
            changed,
            active_voxels,
            counts: self.counts.clone(),
        }
    }

    fn sweep_dirty(&mut self) {
        for (coord, chunk) in self.chunks.iter_mut() {
            if chunk.take_dirty() {
                self.changed.insert(*coord);
            }
        }
    }

    /// `(name, count)` for every element, from the last tick.
    pub fn counts(&self) -> Vec<(&str, u32)> {
        self.sim
            .elements()
            .iter()
            .map(|e| (e.name(), self.counts.get(e.id())))
            .collect()
    }

    pub fn material_counts(&self) -> &MaterialCounts {
        &self.counts
    }

    /// Chunks whose voxels changed since the last call, sorted bottom up.
    /// Includes chunks touched by writes as well as by their own tick.
    pub fn drain_changed(&mut self) -> Vec<ChunkCoord> {
        self.sweep_dirty();
        let mut coords: Vec<ChunkCoord> = self.changed.drain().collect();
        coords.sort_by_key(|c| (c.y, c.z, c.x));
        coords
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    pub fn chunk_coords(&self) -> Vec<ChunkCoord> {
        self.chunks.coords()
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.loaded_count()
    }

    /// Faces of the voxel at `pos` that border empty or unknown space.
    pub fn exposed_faces(&self, pos: WorldCoord) -> Vec<&'static Face> {
        match self.get_voxel(pos) {
            Cell::Known(id) if !id.is_empty() => FACES
                .iter()
                .filter(|face| face_visible(self.get_voxel(pos + face.dir)))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Highest world Y that may hold voxels, if any.
    pub fn ceiling_y(&self) -> Option<i32> {
        self.chunks.ceiling_y()
    }
}

/// Routes a detached chunk's out-of-range accesses into the rest of the map.
struct WorldBoundary<'a> {
    chunks: &'a mut ChunkMap,
    origin: ChunkCoord,
}

impl WorldBoundary<'_> {
    fn world(&self, local: IVec3) -> WorldCoord {
        debug_assert!(!in_chunk(local), "boundary access inside own chunk");
        chunk_local_to_world(self.origin, local)
    }
}

impl Boundary for WorldBoundary<'_> {
    fn read(&self, local: IVec3) -> Cell {
        // Nothing exists below the bottom layer.
        if self.origin.y == 0 && local.y < 0 {
            return Cell::Unknown;
        }
        self.chunks.get_voxel(self.world(local))
    }

    fn write(&mut self, local: IVec3, material: MaterialId) {
        let pos = self.world(local);
        self.chunks.set_voxel(pos, material);
    }
}
