pub mod config;
pub mod constants;
pub mod direction;
pub mod error;
pub mod faces;
pub mod material;
pub mod math;
pub mod tally;
pub mod types;

pub use error::CoreError;
pub use types::{Cell, ChunkCoord, MaterialId, WorldCoord};
