//! Element rule table: one decision function per material behavior.
//!
//! Every rule treats `Cell::Unknown` as blocking and reports `true` only
//! when it wrote at least one cell.

mod ice;
mod lava;
mod sand;
mod steam;
mod stone;
mod water;

use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use granule_core::constants::MATERIAL_SLOTS;
use granule_core::direction::{Direction, CARDINALS, SLIDE_PATHS};
use granule_core::material::{Behavior, MaterialDef, MaterialTable};
use granule_core::types::{Cell, MaterialId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("material '{0}' uses reserved id 0")]
    ReservedId(String),
    #[error("material id {0} is defined twice")]
    DuplicateId(u8),
}

/// A material plus the rule that moves it. Holds no per-voxel state.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    id: MaterialId,
    name: String,
    /// 0xRRGGBB display color.
    color: u32,
    behavior: Behavior,
}

impl Element {
    pub fn from_def(def: &MaterialDef) -> Self {
        Self {
            id: def.material_id(),
            name: def.name.clone(),
            color: def.color,
            behavior: def.behavior,
        }
    }

    pub fn id(&self) -> MaterialId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Run this element's rule for the voxel at the center of `cell`.
    /// Returns whether any cell was written.
    pub fn decide(&self, cell: &mut dyn Neighborhood, rng: &mut SimRng) -> bool {
        match self.behavior {
            Behavior::Sand => sand::decide(cell, rng),
            Behavior::Water => water::decide(cell, rng),
            Behavior::Steam => steam::decide(cell, rng),
            Behavior::Stone => stone::decide(cell),
            Behavior::Ice => ice::decide(cell, rng),
            Behavior::Lava => lava::decide(cell, rng),
        }
    }
}

/// Immutable id -> element dispatch table, built once.
#[derive(Debug, Clone)]
pub struct ElementTable {
    slots: Vec<Option<Element>>,
}

impl ElementTable {
    pub fn from_materials(table: &MaterialTable) -> Result<Self, TableError> {
        let mut slots = vec![None; MATERIAL_SLOTS];
        for def in &table.materials {
            let id = def.material_id();
            if id.is_empty() {
                return Err(TableError::ReservedId(def.name.clone()));
            }
            let slot = &mut slots[id.index()];
            if slot.is_some() {
                return Err(TableError::DuplicateId(def.id));
            }
            *slot = Some(Element::from_def(def));
        }
        Ok(Self { slots })
    }

    /// Sand, water, steam, stone, ice and lava at their canonical ids.
    pub fn reference() -> Self {
        let mut slots = vec![None; MATERIAL_SLOTS];
        for def in &MaterialTable::reference().materials {
            slots[def.material_id().index()] = Some(Element::from_def(def));
        }
        Self { slots }
    }

    pub fn get(&self, id: MaterialId) -> Option<&Element> {
        self.slots[id.index()].as_ref()
    }

    /// Elements in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.slots.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Cells a granular solid cannot pass: unknown space and other solids.
fn blocks_granular(cell: Cell) -> bool {
    match cell {
        Cell::Unknown => true,
        Cell::Known(id) => matches!(id, MaterialId::SAND | MaterialId::STONE | MaterialId::ICE),
    }
}

/// Fall straight down when the cell below is empty.
fn fall(cell: &mut dyn Neighborhood, me: MaterialId) -> bool {
    if cell.look(Direction::Down).is_empty() {
        cell.swap_into(Direction::Down, me, MaterialId::EMPTY);
        return true;
    }
    false
}

/// Pick one of the four sideways-then-down paths and follow it only if no
/// step is blocked. `me` swaps with whatever sits at the end of the path.
fn slide(cell: &mut dyn Neighborhood, rng: &mut SimRng, me: MaterialId) -> bool {
    let path = SLIDE_PATHS[rng.next_bounded(4) as usize];
    let mut end = Cell::Unknown;
    for dir in path {
        end = cell.look(dir);
        if blocks_granular(end) {
            return false;
        }
    }
    match end.material() {
        Some(displaced) => {
            cell.swap_into(path[1], me, displaced);
            true
        }
        None => false,
    }
}

/// Move into one randomly chosen empty cardinal neighbor.
fn spread(cell: &mut dyn Neighborhood, rng: &mut SimRng, me: MaterialId) -> bool {
    let dir = CARDINALS[rng.next_bounded(4) as usize];
    if cell.look(dir).is_empty() {
        cell.swap_into(dir, me, MaterialId::EMPTY);
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::ScriptedNeighborhood;
    use glam::IVec3;

    #[test]
    fn test_reference_table() {
        let table = ElementTable::reference();
        assert_eq!(table.len(), 6);
        let names: Vec<&str> = table.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["sand", "water", "steam", "stone", "ice", "lava"]);
        assert!(table.get(MaterialId::EMPTY).is_none());
        assert_eq!(
            table.get(MaterialId::ICE).map(|e| e.behavior()),
            Some(Behavior::Ice)
        );
        assert_eq!(table.get(MaterialId::WATER).map(|e| e.color()), Some(0x59a5d8));
    }

    #[test]
    fn test_from_materials_matches_reference() {
        let table = ElementTable::from_materials(&MaterialTable::reference()).expect("valid");
        let reference = ElementTable::reference();
        assert!(table.iter().eq(reference.iter()));
    }

    #[test]
    fn test_from_materials_rejects_duplicates_and_zero() {
        let mut materials = MaterialTable::reference();
        materials.materials.push(materials.materials[0].clone());
        assert_eq!(
            ElementTable::from_materials(&materials).unwrap_err(),
            TableError::DuplicateId(1)
        );

        let mut materials = MaterialTable::reference();
        materials.materials[2].id = 0;
        assert_eq!(
            ElementTable::from_materials(&materials).unwrap_err(),
            TableError::ReservedId("steam".into())
        );
    }

    #[test]
    fn test_subset_table() {
        let mut materials = MaterialTable::reference();
        materials.materials.retain(|m| m.behavior == Behavior::Stone);
        let table = ElementTable::from_materials(&materials).expect("valid");
        assert_eq!(table.len(), 1);
        assert!(table.get(MaterialId::SAND).is_none());
    }

    #[test]
    fn test_blocks_granular() {
        assert!(blocks_granular(Cell::Unknown));
        assert!(blocks_granular(Cell::Known(MaterialId::STONE)));
        assert!(!blocks_granular(Cell::EMPTY));
        assert!(!blocks_granular(Cell::Known(MaterialId::WATER)));
        assert!(!blocks_granular(Cell::Known(MaterialId::LAVA)));
    }

    #[test]
    fn test_slide_blocked_by_unknown_everywhere() {
        let mut cell = ScriptedNeighborhood::new(MaterialId::SAND, Cell::Unknown);
        let mut rng = SimRng::new(1);
        for _ in 0..16 {
            assert!(!slide(&mut cell, &mut rng, MaterialId::SAND));
        }
        assert!(cell.writes().is_empty());
    }

    #[test]
    fn test_slide_open_paths_swap_with_end() {
        // Everything around is empty except the cell below.
        let mut cell = ScriptedNeighborhood::new(MaterialId::SAND, Cell::EMPTY)
            .with(Direction::Down.offset(), Cell::Known(MaterialId::STONE));
        let mut rng = SimRng::new(5);
        assert!(slide(&mut cell, &mut rng, MaterialId::SAND));
        assert_eq!(cell.at(IVec3::ZERO), Cell::EMPTY);
        let moved: Vec<IVec3> = SLIDE_PATHS
            .iter()
            .map(|p| p[1].offset())
            .filter(|&o| cell.at(o) == Cell::Known(MaterialId::SAND))
            .collect();
        assert_eq!(moved.len(), 1, "sand should land on exactly one diagonal");
    }
}
