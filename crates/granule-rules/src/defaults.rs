//! Data shipped with the crate: the built-in material table and config.

use granule_core::config::SimConfig;
use granule_core::material::MaterialTable;

use crate::loader::{load_config_from_str, load_materials_from_str, LoadError};

pub const MATERIALS_RON: &str = include_str!("../../../data/materials.ron");
pub const CONFIG_RON: &str = include_str!("../../../data/config.ron");

/// Parse the shipped material table.
pub fn default_materials() -> Result<MaterialTable, LoadError> {
    let table = load_materials_from_str(MATERIALS_RON)?;
    log::debug!("Loaded {} default materials", table.len());
    Ok(table)
}

/// Parse the shipped simulation config.
pub fn default_config() -> Result<SimConfig, LoadError> {
    load_config_from_str(CONFIG_RON)
}
