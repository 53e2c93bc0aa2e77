use super::{fall, slide};
use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use granule_core::direction::{Direction, SLIDE_PATHS};
use granule_core::types::{Cell, MaterialId};

/// Sand falls, sinks through water, and slides down diagonals.
pub(super) fn decide(cell: &mut dyn Neighborhood, rng: &mut SimRng) -> bool {
    match cell.look(Direction::Down) {
        Cell::Unknown => false,
        Cell::Known(MaterialId::EMPTY) => fall(cell, MaterialId::SAND),
        Cell::Known(MaterialId::WATER) => {
            sink_through_water(cell, rng);
            true
        }
        Cell::Known(_) => slide(cell, rng, MaterialId::SAND),
    }
}

/// Push the water below out to a free cell beside it if there is one,
/// otherwise trade places with it.
fn sink_through_water(cell: &mut dyn Neighborhood, rng: &mut SimRng) {
    let mut free = [Direction::Down; 4];
    let mut n = 0;
    for [_, beside_water] in SLIDE_PATHS {
        if cell.look(beside_water).is_empty() {
            free[n] = beside_water;
            n += 1;
        }
    }

    match rng.choose(&free[..n]) {
        Some(escape) => {
            cell.transform(MaterialId::EMPTY);
            cell.put(escape, MaterialId::WATER);
            cell.put(Direction::Down, MaterialId::SAND);
        }
        None => cell.swap_into(Direction::Down, MaterialId::SAND, MaterialId::WATER),
    }
}
