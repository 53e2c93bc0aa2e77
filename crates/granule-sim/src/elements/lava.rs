use super::fall;
use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use granule_core::constants::{LAVA_COOL_ODDS, LAVA_CRUST_ODDS, LAVA_FLOW_ODDS};
use granule_core::direction::{Direction, CARDINALS};
use granule_core::types::{Cell, MaterialId};

/// Lava falls, boils water into steam, melts ice, slowly flows sideways and
/// occasionally cools into stone.
pub(super) fn decide(cell: &mut dyn Neighborhood, rng: &mut SimRng) -> bool {
    let under = cell.look(Direction::Down);
    match under {
        Cell::Known(MaterialId::EMPTY) => return fall(cell, MaterialId::LAVA),
        Cell::Known(MaterialId::WATER) => {
            cell.put(Direction::Down, MaterialId::STEAM);
            return true;
        }
        Cell::Known(MaterialId::ICE) => {
            cell.put(Direction::Down, MaterialId::WATER);
            return true;
        }
        _ => {}
    }

    if rng.one_in(LAVA_COOL_ODDS) {
        cell.transform(MaterialId::STONE);
        return true;
    }

    let dir = CARDINALS[rng.next_bounded(4) as usize];
    match cell.look(dir) {
        Cell::Known(MaterialId::EMPTY) => {
            if rng.one_in(LAVA_FLOW_ODDS) && !under.is_unknown() {
                cell.swap_into(dir, MaterialId::LAVA, MaterialId::EMPTY);
                return true;
            }
            false
        }
        Cell::Known(MaterialId::WATER) => {
            cell.put(dir, MaterialId::STEAM);
            crust(cell, rng);
            true
        }
        Cell::Known(MaterialId::ICE) => {
            cell.put(dir, MaterialId::WATER);
            crust(cell, rng);
            true
        }
        _ => false,
    }
}

/// Contact with water or ice sometimes leaves stone behind.
fn crust(cell: &mut dyn Neighborhood, rng: &mut SimRng) {
    if rng.one_in(LAVA_CRUST_ODDS) {
        cell.transform(MaterialId::STONE);
    }
}
