//! Scripted neighborhoods for exercising element rules without a chunk.

use crate::neighborhood::Neighborhood;
use glam::IVec3;
use granule_core::types::{Cell, MaterialId};
use std::collections::HashMap;

/// A neighborhood where every offset reads `fallback` unless scripted.
pub(crate) struct ScriptedNeighborhood {
    cells: HashMap<IVec3, Cell>,
    fallback: Cell,
    writes: Vec<(IVec3, MaterialId)>,
}

impl ScriptedNeighborhood {
    pub(crate) fn new(me: MaterialId, fallback: Cell) -> Self {
        let mut cells = HashMap::new();
        cells.insert(IVec3::ZERO, Cell::Known(me));
        Self {
            cells,
            fallback,
            writes: Vec::new(),
        }
    }

    pub(crate) fn with(mut self, offset: IVec3, cell: Cell) -> Self {
        self.cells.insert(offset, cell);
        self
    }

    pub(crate) fn at(&self, offset: IVec3) -> Cell {
        self.get(offset)
    }

    pub(crate) fn writes(&self) -> &[(IVec3, MaterialId)] {
        &self.writes
    }

    /// Count of cells currently scripted as `material`.
    pub(crate) fn count(&self, material: MaterialId) -> usize {
        self.cells.values().filter(|c| c.is(material)).count()
    }
}

impl Neighborhood for ScriptedNeighborhood {
    fn get(&self, offset: IVec3) -> Cell {
        self.cells.get(&offset).copied().unwrap_or(self.fallback)
    }

    fn set(&mut self, offset: IVec3, material: MaterialId) {
        self.writes.push((offset, material));
        self.cells.insert(offset, Cell::Known(material));
    }
}
