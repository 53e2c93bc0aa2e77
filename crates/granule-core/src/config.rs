use crate::constants::{DEFAULT_CEILING_Y, DEFAULT_SEED};
use serde::{Deserialize, Serialize};

/// Simulation settings, loadable from RON. Missing fields use defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Seed for the simulation random source.
    pub seed: u64,
    /// Highest world Y holding voxels. `None` removes the ceiling.
    pub ceiling_y: Option<i32>,
    /// Ticks between tally log lines in the runner. 0 disables them.
    pub log_every: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            ceiling_y: Some(DEFAULT_CEILING_Y),
            log_every: 30,
        }
    }
}
