use crate::boundary::{Boundary, Detached};
use glam::IVec3;
use granule_core::constants::{CHUNK_SIZE, VOXELS_PER_CHUNK};
use granule_core::error::CoreError;
use granule_core::math::{in_chunk, voxel_index};
use granule_core::tally::MaterialCounts;
use granule_core::types::{Cell, MaterialId};
use granule_sim::{Neighborhood, Simulation};

/// A 32^3 block of voxels and the unit of one simulation pass.
///
/// Coordinates are chunk-local. Anything outside `[0, CHUNK_SIZE)` goes to a
/// `Boundary` instead of the buffer; the plain `get_voxel`/`set_voxel` use
/// `Detached`.
#[derive(Debug, Clone)]
pub struct Chunk {
    voxels: Box<[MaterialId]>,
    /// Per-material tally of voxels visited by the last tick.
    counts: MaterialCounts,
    /// Non-empty voxels visited by the last tick.
    active: u32,
    /// A stored voxel changed since the last `take_dirty`.
    dirty: bool,
}

impl Default for Chunk {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    /// Create an empty chunk.
    pub fn new() -> Self {
        Self {
            voxels: vec![MaterialId::EMPTY; VOXELS_PER_CHUNK as usize].into_boxed_slice(),
            counts: MaterialCounts::new(),
            active: 0,
            dirty: false,
        }
    }

    /// Wrap an existing buffer laid out as `(y * S + z) * S + x`.
    pub fn from_voxels(voxels: Vec<MaterialId>) -> Result<Self, CoreError> {
        let expected = VOXELS_PER_CHUNK as usize;
        if voxels.len() != expected {
            return Err(CoreError::InvalidChunkSize {
                expected,
                actual: voxels.len(),
            });
        }
        Ok(Self {
            voxels: voxels.into_boxed_slice(),
            ..Self::new()
        })
    }

    /// Read with no world around: outside the chunk is `Cell::Unknown`.
    pub fn get_voxel(&self, local: IVec3) -> Cell {
        self.read(local, &Detached)
    }

    /// Write with no world around: outside the chunk is a no-op.
    pub fn set_voxel(&mut self, local: IVec3, material: MaterialId) {
        self.write(local, material, &mut Detached);
    }

    /// Read a voxel, forwarding out-of-range coordinates to `boundary`.
    pub fn read<B: Boundary + ?Sized>(&self, local: IVec3, boundary: &B) -> Cell {
        read_voxel(&self.voxels, local, boundary)
    }

    /// Write a voxel, forwarding out-of-range coordinates to `boundary`.
    pub fn write<B: Boundary + ?Sized>(
        &mut self,
        local: IVec3,
        material: MaterialId,
        boundary: &mut B,
    ) {
        write_voxel(&mut self.voxels, &mut self.dirty, local, material, boundary);
    }

    /// Run one simulation pass. Returns whether any voxel stored in this chunk
    /// changed; writes that only reach neighbors through `boundary` do not count.
    ///
    /// Slices are visited bottom to top; within a slice, columns follow the
    /// simulation's fixed slice order. Empty voxels are skipped. A voxel that
    /// moves to a later position of the same slice can be visited again in
    /// the same pass.
    pub fn tick<B: Boundary + ?Sized>(&mut self, sim: &mut Simulation, boundary: &mut B) -> bool {
        self.counts.clear();
        self.active = 0;
        let mut changed = false;

        for y in 0..CHUNK_SIZE as i32 {
            for i in 0..sim.slice_order().len() {
                let (x, z) = sim.slice_order().position(i);
                let local = IVec3::new(x, y, z);
                let material = self.voxels[voxel_index(local)];
                if material.is_empty() {
                    continue;
                }
                self.counts.add(material);
                self.active += 1;

                let mut cursor = VoxelCursor {
                    voxels: &mut self.voxels,
                    dirty: &mut changed,
                    boundary: &mut *boundary,
                    origin: local,
                };
                sim.decide(material, &mut cursor);
            }
        }

        self.dirty |= changed;
        changed
    }

    /// The raw buffer, for mesh generation.
    pub fn voxels(&self) -> &[MaterialId] {
        &self.voxels
    }

    pub fn counts(&self) -> &MaterialCounts {
        &self.counts
    }

    pub fn active_voxels(&self) -> u32 {
        self.active
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Return and clear the dirty flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

fn read_voxel<B: Boundary + ?Sized>(voxels: &[MaterialId], local: IVec3, boundary: &B) -> Cell {
    if in_chunk(local) {
        Cell::Known(voxels[voxel_index(local)])
    } else {
        boundary.read(local)
    }
}

fn write_voxel<B: Boundary + ?Sized>(
    voxels: &mut [MaterialId],
    dirty: &mut bool,
    local: IVec3,
    material: MaterialId,
    boundary: &mut B,
) {
    if in_chunk(local) {
        let slot = &mut voxels[voxel_index(local)];
        if *slot != material {
            *slot = material;
            *dirty = true;
        }
    } else {
        boundary.write(local, material);
    }
}

/// Neighborhood of one voxel during a tick, relative to `origin`.
struct VoxelCursor<'a, B: ?Sized> {
    voxels: &'a mut [MaterialId],
    dirty: &'a mut bool,
    boundary: &'a mut B,
    origin: IVec3,
}

impl<B: Boundary + ?Sized> Neighborhood for VoxelCursor<'_, B> {
    fn get(&self, offset: IVec3) -> Cell {
        read_voxel(self.voxels, self.origin + offset, &*self.boundary)
    }

    fn set(&mut self, offset: IVec3, material: MaterialId) {
        write_voxel(
            self.voxels,
            self.dirty,
            self.origin + offset,
            material,
            &mut *self.boundary,
        );
    }
}
