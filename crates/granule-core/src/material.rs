use crate::types::MaterialId;
use serde::{Deserialize, Serialize};

/// Which element rule drives a material each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Sand,
    Water,
    Steam,
    Stone,
    Ice,
    Lava,
}

impl Behavior {
    /// The material id this behavior occupies in the rule table.
    /// Reactions address each other by these ids.
    pub fn canonical_id(self) -> MaterialId {
        match self {
            Behavior::Sand => MaterialId::SAND,
            Behavior::Water => MaterialId::WATER,
            Behavior::Steam => MaterialId::STEAM,
            Behavior::Stone => MaterialId::STONE,
            Behavior::Ice => MaterialId::ICE,
            Behavior::Lava => MaterialId::LAVA,
        }
    }
}

/// A single material definition loaded from RON data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Stable material ID. 0 = empty and is never defined.
    pub id: u8,
    /// Human-readable name used in tallies.
    pub name: String,
    /// Element rule applied to voxels of this material.
    pub behavior: Behavior,
    /// 0xRRGGBB display color. Only the renderer reads it.
    pub color: u32,
    /// Density in abstract units. Informational; rules compare ids.
    #[serde(default)]
    pub density: f32,
}

impl MaterialDef {
    pub fn material_id(&self) -> MaterialId {
        MaterialId(self.id)
    }
}

/// Collection of material definitions indexed by ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialTable {
    pub materials: Vec<MaterialDef>,
}

impl MaterialTable {
    /// The six built-in materials (sand, water, steam, stone, ice, lava).
    pub fn reference() -> Self {
        let def = |behavior: Behavior, name: &str, color: u32, density: f32| MaterialDef {
            id: behavior.canonical_id().0,
            name: name.into(),
            behavior,
            color,
            density,
        };
        Self {
            materials: vec![
                def(Behavior::Sand, "sand", 0xb2b09b, 5.0),
                def(Behavior::Water, "water", 0x59a5d8, 2.0),
                def(Behavior::Steam, "steam", 0xccccff, 1.0),
                def(Behavior::Stone, "stone", 0x333333, 10.0),
                def(Behavior::Ice, "ice", 0xffffff, 5.0),
                def(Behavior::Lava, "lava", 0xff0000, 3.0),
            ],
        }
    }

    /// Number of materials.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_ids_follow_behavior() {
        let table = MaterialTable::reference();
        assert_eq!(table.len(), 6);
        for mat in &table.materials {
            assert_eq!(mat.material_id(), mat.behavior.canonical_id(), "{}", mat.name);
        }
    }
}
