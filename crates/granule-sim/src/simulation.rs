use crate::elements::ElementTable;
use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use crate::schedule::SliceOrder;
use granule_core::types::MaterialId;

/// Everything a tick needs besides the voxels: the rule table, the slice
/// visiting order and the random source.
#[derive(Debug, Clone)]
pub struct Simulation {
    elements: ElementTable,
    order: SliceOrder,
    rng: SimRng,
}

impl Simulation {
    /// The slice order is drawn from the seeded source before any tick runs.
    pub fn new(elements: ElementTable, seed: u64) -> Self {
        let mut rng = SimRng::new(seed);
        let order = SliceOrder::shuffled(&mut rng);
        Self {
            elements,
            order,
            rng,
        }
    }

    /// Replace the slice order, e.g. with `SliceOrder::sequential()`.
    pub fn with_order(mut self, order: SliceOrder) -> Self {
        self.order = order;
        self
    }

    /// Apply the rule for `material` to the voxel at the center of `cell`.
    /// Materials without an element are inert.
    pub fn decide(&mut self, material: MaterialId, cell: &mut dyn Neighborhood) -> bool {
        match self.elements.get(material) {
            Some(element) => element.decide(cell, &mut self.rng),
            None => {
                log::trace!("No element for material {}; voxel left as is", material.0);
                false
            }
        }
    }

    pub fn elements(&self) -> &ElementTable {
        &self.elements
    }

    pub fn slice_order(&self) -> &SliceOrder {
        &self.order
    }
}
