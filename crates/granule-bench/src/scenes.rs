use glam::IVec3;
use granule_core::constants::CHUNK_SIZE;
use granule_core::types::MaterialId;
use granule_sim::SimRng;
use granule_world::World;

/// Side of the cube the pile scene scatters sand into.
pub const PILE_EXTENT: i32 = 50;
/// Grains scattered by the pile scene.
pub const PILE_GRAINS: u32 = (PILE_EXTENT * PILE_EXTENT * 10) as u32;
/// Water voxels added per tick by the rain scene.
pub const RAIN_PER_TICK: u32 = 100;
/// Drop height used when the world has no ceiling.
const OPEN_SKY_Y: i32 = 2 * CHUNK_SIZE as i32 - 1;

/// A scripted starting state plus what gets added every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Sand scattered through a cube, settling into piles.
    Pile,
    /// Water poured onto the top of the world every tick.
    Rain,
    /// Lava poured onto a water pool and an ice block.
    Forge,
    /// A water column straddling a chunk border.
    Boundary,
}

impl Scene {
    pub const ALL: [Scene; 4] = [Scene::Pile, Scene::Rain, Scene::Forge, Scene::Boundary];

    pub fn name(self) -> &'static str {
        match self {
            Scene::Pile => "pile",
            Scene::Rain => "rain",
            Scene::Forge => "forge",
            Scene::Boundary => "boundary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Place the scene's starting voxels.
    pub fn populate(self, world: &mut World, rng: &mut SimRng) {
        let top = drop_height(world);
        match self {
            Scene::Pile => {
                for _ in 0..PILE_GRAINS {
                    let pos = IVec3::new(
                        rng.next_bounded(PILE_EXTENT as u32) as i32,
                        rng.next_bounded(PILE_EXTENT as u32) as i32,
                        rng.next_bounded(PILE_EXTENT as u32) as i32,
                    );
                    world.set_voxel(pos, MaterialId::SAND);
                }
            }
            Scene::Rain => {
                // A stone basin so the water has somewhere to pool.
                for i in 0..PILE_EXTENT {
                    for h in 0..4 {
                        world.set_voxel(IVec3::new(i, h, 0), MaterialId::STONE);
                        world.set_voxel(IVec3::new(i, h, PILE_EXTENT - 1), MaterialId::STONE);
                        world.set_voxel(IVec3::new(0, h, i), MaterialId::STONE);
                        world.set_voxel(IVec3::new(PILE_EXTENT - 1, h, i), MaterialId::STONE);
                    }
                }
            }
            Scene::Forge => {
                fill_box(world, IVec3::new(0, 0, 0), IVec3::new(16, 3, 16), MaterialId::WATER);
                fill_box(world, IVec3::new(20, 0, 20), IVec3::new(26, 6, 26), MaterialId::ICE);
            }
            Scene::Boundary => {
                let border = CHUNK_SIZE as i32;
                fill_box(
                    world,
                    IVec3::new(border - 4, top - 8, 10),
                    IVec3::new(border + 4, top + 1, 14),
                    MaterialId::WATER,
                );
            }
        }
        log::debug!(
            "Populated scene '{}' across {} chunks",
            self.name(),
            world.chunk_count()
        );
    }

    /// Add the scene's per-tick material.
    pub fn feed(self, world: &mut World, rng: &mut SimRng) {
        let top = drop_height(world);
        match self {
            Scene::Rain => {
                for _ in 0..RAIN_PER_TICK {
                    let pos = IVec3::new(
                        rng.next_bounded(PILE_EXTENT as u32) as i32,
                        top,
                        rng.next_bounded(PILE_EXTENT as u32) as i32,
                    );
                    world.set_voxel(pos, MaterialId::WATER);
                }
            }
            Scene::Forge => {
                world.set_voxel(IVec3::new(8, top, 8), MaterialId::LAVA);
                world.set_voxel(IVec3::new(23, top, 23), MaterialId::LAVA);
            }
            Scene::Pile | Scene::Boundary => {}
        }
    }
}

fn drop_height(world: &World) -> i32 {
    world.ceiling_y().unwrap_or(OPEN_SKY_Y)
}

/// Fill the half-open box `[min, max)`.
fn fill_box(world: &mut World, min: IVec3, max: IVec3, material: MaterialId) {
    for y in min.y..max.y {
        for z in min.z..max.z {
            for x in min.x..max.x {
                world.set_voxel(IVec3::new(x, y, z), material);
            }
        }
    }
}
