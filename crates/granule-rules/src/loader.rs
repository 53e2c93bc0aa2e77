use granule_core::config::SimConfig;
use granule_core::material::{MaterialDef, MaterialTable};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse materials RON: {0}")]
    MaterialParseError(String),
    #[error("Failed to parse config RON: {0}")]
    ConfigParseError(String),
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Parse a single materials RON string into a MaterialTable.
pub fn load_materials_from_str(ron_str: &str) -> Result<MaterialTable, LoadError> {
    let options = ron::Options::default();
    let materials: Vec<MaterialDef> = options
        .from_str(ron_str)
        .map_err(|e| LoadError::MaterialParseError(e.to_string()))?;
    Ok(MaterialTable { materials })
}

/// Load and merge multiple material sources into a single MaterialTable.
/// Later sources are appended; duplicates are left for the validator to report.
pub fn load_all_materials(sources: &[&str]) -> Result<MaterialTable, LoadError> {
    let mut all_materials = Vec::new();
    for source in sources {
        let table = load_materials_from_str(source)?;
        all_materials.extend(table.materials);
    }
    Ok(MaterialTable {
        materials: all_materials,
    })
}

/// Parse a simulation config from a RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<SimConfig, LoadError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| LoadError::ConfigParseError(e.to_string()))
}

/// Read a file into a string for the `load_*_from_str` functions.
pub fn read_source(path: &std::path::Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use granule_core::material::Behavior;

    #[test]
    fn test_load_single_material() {
        let ron = r#"[
            (id: 1, name: "sand", behavior: Sand, color: 0xb2b09b, density: 5.0),
        ]"#;
        let table = load_materials_from_str(ron).expect("should parse");
        assert_eq!(table.len(), 1);
        assert_eq!(table.materials[0].name, "sand");
        assert_eq!(table.materials[0].behavior, Behavior::Sand);
        assert_eq!(table.materials[0].color, 0xb2b09b);
    }

    #[test]
    fn test_density_defaults_to_zero() {
        let ron = r#"[(id: 4, name: "stone", behavior: Stone, color: 0x333333)]"#;
        let table = load_materials_from_str(ron).expect("should parse");
        assert_eq!(table.materials[0].density, 0.0);
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let ron = r#"[this is not valid RON {"#;
        let result = load_materials_from_str(ron);
        assert!(matches!(result, Err(LoadError::MaterialParseError(_))));
    }

    #[test]
    fn test_unknown_behavior_rejected() {
        let ron = r#"[(id: 7, name: "goo", behavior: Goo, color: 0)]"#;
        assert!(load_materials_from_str(ron).is_err());
    }

    #[test]
    fn test_load_all_merges() {
        let src1 = r#"[(id: 1, name: "sand", behavior: Sand, color: 0)]"#;
        let src2 = r#"[(id: 2, name: "water", behavior: Water, color: 0)]"#;
        let table = load_all_materials(&[src1, src2]).expect("should merge");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_config_partial_uses_defaults() {
        let config = load_config_from_str("(seed: 99)").expect("should parse");
        assert_eq!(config.seed, 99);
        assert_eq!(config.ceiling_y, SimConfig::default().ceiling_y);
        assert_eq!(config.log_every, SimConfig::default().log_every);
    }

    #[test]
    fn test_config_without_ceiling() {
        let config = load_config_from_str("(ceiling_y: None)").expect("should parse");
        assert_eq!(config.ceiling_y, None);
    }

    #[test]
    fn test_config_malformed_rejected() {
        let result = load_config_from_str("(seed: \"many\")");
        assert!(matches!(result, Err(LoadError::ConfigParseError(_))));
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_source(std::path::Path::new("/definitely/not/here.ron"));
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
