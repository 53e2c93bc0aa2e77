//! Single source of truth for shared constants.
//! Reaction odds are expressed as "one in N" per tick.

/// Side length of a chunk in voxels.
pub const CHUNK_SIZE: u32 = 32;

/// Voxels in one horizontal slice of a chunk (32^2).
pub const VOXELS_PER_SLICE: u32 = CHUNK_SIZE * CHUNK_SIZE;

/// Total voxels per chunk (32^3).
pub const VOXELS_PER_CHUNK: u32 = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Number of distinct material ids a voxel can hold (u8). Material 0 = empty.
pub const MATERIAL_SLOTS: usize = 256;

/// Highest world-space Y that still holds voxels by default.
/// Reads above it return `Cell::Unknown`, writes are dropped.
pub const DEFAULT_CEILING_Y: i32 = CHUNK_SIZE as i32 - 1;

/// Default seed for the simulation random source.
pub const DEFAULT_SEED: u64 = 1;

/// Park–Miller modulus (2^31 - 1).
pub const RNG_MODULUS: u64 = 2_147_483_647;

/// Park–Miller multiplier.
pub const RNG_MULTIPLIER: u64 = 48_271;

/// Ice melts into water.
pub const ICE_MELT_ODDS: u32 = 10_000;

/// Ice resting on a fluid slides along a diagonal path.
pub const ICE_SLIDE_ODDS: u32 = 10;

/// Lava cools into stone without any contact.
pub const LAVA_COOL_ODDS: u32 = 10_000;

/// Lava flows sideways into an empty neighbor (lava is viscous).
pub const LAVA_FLOW_ODDS: u32 = 50;

/// Lava leaves stone behind after boiling water or melting ice.
pub const LAVA_CRUST_ODDS: u32 = 10;

/// Steam swaps with the cell above.
pub const STEAM_RISE_ODDS: u32 = 4;

/// Steam at the top of known space condenses into water.
pub const STEAM_CONDENSE_ODDS: u32 = 100;

/// Steam at the top of known space evaporates.
pub const STEAM_EVAPORATE_ODDS: u32 = 1_000;

/// Steam drifts sideways.
pub const STEAM_DRIFT_ODDS: u32 = 10;

/// Water with open air above boils off into steam.
pub const WATER_BOIL_ODDS: u32 = 100_000;
