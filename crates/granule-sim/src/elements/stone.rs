use crate::neighborhood::Neighborhood;
use granule_core::direction::Direction;
use granule_core::types::{Cell, MaterialId};

/// Stone sinks into any lower-id material below it and never slides.
pub(super) fn decide(cell: &mut dyn Neighborhood) -> bool {
    match cell.look(Direction::Down) {
        Cell::Known(below) if below < MaterialId::STONE => {
            cell.swap_into(Direction::Down, MaterialId::STONE, below);
            true
        }
        _ => false,
    }
}
