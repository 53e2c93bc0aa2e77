use super::{blocks_granular, fall, slide};
use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use granule_core::constants::{ICE_MELT_ODDS, ICE_SLIDE_ODDS};
use granule_core::direction::Direction;
use granule_core::types::MaterialId;

/// Ice falls like a slow granular solid and rarely melts. Once it rests on
/// ground (unknown space or another solid) it stops moving for good.
pub(super) fn decide(cell: &mut dyn Neighborhood, rng: &mut SimRng) -> bool {
    if fall(cell, MaterialId::ICE) {
        return true;
    }

    if rng.one_in(ICE_MELT_ODDS) {
        cell.transform(MaterialId::WATER);
        return true;
    }

    if blocks_granular(cell.look(Direction::Down)) {
        return false;
    }

    if !rng.one_in(ICE_SLIDE_ODDS) {
        return false;
    }

    slide(cell, rng, MaterialId::ICE)
}
