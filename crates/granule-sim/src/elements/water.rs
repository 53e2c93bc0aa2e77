use super::{fall, spread};
use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use granule_core::constants::WATER_BOIL_ODDS;
use granule_core::direction::Direction;
use granule_core::types::{Cell, MaterialId};

/// Water falls, boils on lava, and spreads sideways once it has something
/// known beneath it. Water resting on unknown space (the world floor) stays.
pub(super) fn decide(cell: &mut dyn Neighborhood, rng: &mut SimRng) -> bool {
    let under = cell.look(Direction::Down);
    match under {
        Cell::Known(MaterialId::EMPTY) => return fall(cell, MaterialId::WATER),
        Cell::Known(MaterialId::LAVA) => {
            cell.transform(MaterialId::STEAM);
            return true;
        }
        _ => {}
    }

    if rng.one_in(WATER_BOIL_ODDS) && cell.look(Direction::Up).is_empty() {
        cell.transform(MaterialId::STEAM);
        return true;
    }

    if under.is_unknown() {
        return false;
    }

    spread(cell, rng, MaterialId::WATER)
}
