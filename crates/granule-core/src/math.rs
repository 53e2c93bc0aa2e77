use crate::constants::CHUNK_SIZE;
use crate::types::{ChunkCoord, WorldCoord};
use glam::IVec3;

/// Convert a world-space voxel coordinate to its containing chunk coordinate.
pub fn world_to_chunk(world: WorldCoord) -> ChunkCoord {
    let cs = CHUNK_SIZE as i32;
    IVec3::new(
        world.x.div_euclid(cs),
        world.y.div_euclid(cs),
        world.z.div_euclid(cs),
    )
}

/// Convert a world-space voxel coordinate to its local offset within a chunk.
pub fn world_to_local(world: WorldCoord) -> IVec3 {
    let cs = CHUNK_SIZE as i32;
    IVec3::new(
        world.x.rem_euclid(cs),
        world.y.rem_euclid(cs),
        world.z.rem_euclid(cs),
    )
}

/// Convert a chunk coordinate and local offset back to world-space.
/// `local` may lie outside `[0, CHUNK_SIZE)`; the result is still exact.
pub fn chunk_local_to_world(chunk: ChunkCoord, local: IVec3) -> WorldCoord {
    chunk * CHUNK_SIZE as i32 + local
}

/// Whether a chunk-local coordinate addresses this chunk's own storage.
pub fn in_chunk(local: IVec3) -> bool {
    let cs = CHUNK_SIZE as i32;
    (0..cs).contains(&local.x) && (0..cs).contains(&local.y) && (0..cs).contains(&local.z)
}

/// Row-major index `(y * S + z) * S + x`. Caller guarantees `in_chunk(local)`.
pub fn voxel_index(local: IVec3) -> usize {
    let cs = CHUNK_SIZE as usize;
    (local.y as usize * cs + local.z as usize) * cs + local.x as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::VOXELS_PER_CHUNK;

    #[test]
    fn test_world_to_chunk_positive() {
        assert_eq!(world_to_chunk(IVec3::new(0, 0, 0)), IVec3::ZERO);
        assert_eq!(world_to_chunk(IVec3::new(31, 31, 31)), IVec3::ZERO);
        assert_eq!(world_to_chunk(IVec3::new(32, 0, 0)), IVec3::new(1, 0, 0));
    }

    #[test]
    fn test_world_to_chunk_negative() {
        assert_eq!(world_to_chunk(IVec3::new(-1, 0, 0)), IVec3::new(-1, 0, 0));
        assert_eq!(world_to_chunk(IVec3::new(-32, 0, 0)), IVec3::new(-1, 0, 0));
        assert_eq!(world_to_chunk(IVec3::new(-33, 0, 0)), IVec3::new(-2, 0, 0));
    }

    #[test]
    fn test_world_to_local_negative() {
        assert_eq!(world_to_local(IVec3::new(-1, 0, 0)), IVec3::new(31, 0, 0));
        assert_eq!(world_to_local(IVec3::new(-32, 0, 0)), IVec3::new(0, 0, 0));
        assert_eq!(world_to_local(IVec3::new(0, -1, -33)), IVec3::new(0, 31, 31));
    }

    #[test]
    fn test_chunk_local_roundtrip() {
        let world = IVec3::new(-50, 100, 3);
        let chunk = world_to_chunk(world);
        let local = world_to_local(world);
        assert_eq!(chunk_local_to_world(chunk, local), world);
    }

    #[test]
    fn test_local_outside_chunk_maps_to_neighbor() {
        let world = chunk_local_to_world(IVec3::new(0, 1, 0), IVec3::new(0, -1, 0));
        assert_eq!(world, IVec3::new(0, 31, 0));
        assert_eq!(world_to_chunk(world), IVec3::ZERO);
    }

    #[test]
    fn test_in_chunk_bounds() {
        assert!(in_chunk(IVec3::ZERO));
        assert!(in_chunk(IVec3::splat(31)));
        assert!(!in_chunk(IVec3::new(-1, 0, 0)));
        assert!(!in_chunk(IVec3::new(0, 32, 0)));
        assert!(!in_chunk(IVec3::new(0, 0, 32)));
    }

    #[test]
    fn test_voxel_index_layout() {
        assert_eq!(voxel_index(IVec3::new(1, 0, 0)), 1);
        assert_eq!(voxel_index(IVec3::new(0, 0, 1)), 32);
        assert_eq!(voxel_index(IVec3::new(0, 1, 0)), 1024);
        assert_eq!(
            voxel_index(IVec3::splat(31)),
            VOXELS_PER_CHUNK as usize - 1
        );
    }
}
