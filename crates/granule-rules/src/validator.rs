use granule_core::material::MaterialTable;
use granule_core::types::MaterialId;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate material ID {0}")]
    DuplicateMaterialId(u8),
    #[error("Material '{name}' uses reserved ID 0 (empty)")]
    ReservedId { name: String },
    #[error("Material '{name}' has ID {id} but its behavior lives at ID {expected}")]
    BehaviorIdMismatch { name: String, id: u8, expected: u8 },
    #[error("Material with ID {0} has an empty name")]
    EmptyName(u8),
    #[error("Material '{name}' has negative density {value}")]
    NegativeDensity { name: String, value: f32 },
}

/// Validate a material table. Reports every problem, not just the first.
pub fn validate_materials(table: &MaterialTable) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen_ids = HashSet::new();
    for mat in &table.materials {
        if !seen_ids.insert(mat.id) {
            errors.push(ValidationError::DuplicateMaterialId(mat.id));
        }
    }

    for mat in &table.materials {
        if mat.material_id() == MaterialId::EMPTY {
            errors.push(ValidationError::ReservedId {
                name: mat.name.clone(),
            });
        } else if mat.material_id() != mat.behavior.canonical_id() {
            errors.push(ValidationError::BehaviorIdMismatch {
                name: mat.name.clone(),
                id: mat.id,
                expected: mat.behavior.canonical_id().0,
            });
        }
        if mat.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName(mat.id));
        }
        if mat.density < 0.0 {
            errors.push(ValidationError::NegativeDensity {
                name: mat.name.clone(),
                value: mat.density,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use granule_core::material::{Behavior, MaterialDef};

    fn def(id: u8, name: &str, behavior: Behavior) -> MaterialDef {
        MaterialDef {
            id,
            name: name.into(),
            behavior,
            color: 0,
            density: 1.0,
        }
    }

    #[test]
    fn test_reference_table_valid() {
        assert!(validate_materials(&MaterialTable::reference()).is_ok());
    }

    #[test]
    fn test_subset_is_valid() {
        let table = MaterialTable {
            materials: vec![def(1, "sand", Behavior::Sand), def(4, "stone", Behavior::Stone)],
        };
        assert!(validate_materials(&table).is_ok());
    }

    #[test]
    fn test_duplicate_id_detected() {
        let table = MaterialTable {
            materials: vec![def(1, "sand", Behavior::Sand), def(1, "grit", Behavior::Sand)],
        };
        let errors = validate_materials(&table).expect_err("should fail");
        assert!(errors.contains(&ValidationError::DuplicateMaterialId(1)));
    }

    #[test]
    fn test_reserved_and_mismatch_reported_together() {
        let mut blank = def(3, " ", Behavior::Steam);
        blank.density = -2.0;
        let table = MaterialTable {
            materials: vec![
                def(0, "void", Behavior::Stone),
                def(9, "water", Behavior::Water),
                blank,
            ],
        };
        let errors = validate_materials(&table).expect_err("should fail");
        assert_eq!(errors.len(), 4, "{errors:?}");
        assert!(errors.contains(&ValidationError::ReservedId {
            name: "void".into()
        }));
        assert!(errors.contains(&ValidationError::BehaviorIdMismatch {
            name: "water".into(),
            id: 9,
            expected: 2,
        }));
        assert!(errors.contains(&ValidationError::EmptyName(3)));
    }
}
