use crate::neighborhood::Neighborhood;
use crate::rng::SimRng;
use granule_core::constants::{
    STEAM_CONDENSE_ODDS, STEAM_DRIFT_ODDS, STEAM_EVAPORATE_ODDS, STEAM_RISE_ODDS,
};
use granule_core::direction::{Direction, CARDINALS};
use granule_core::types::{Cell, MaterialId};

/// Steam rises through anything known, and at the top of known space it
/// either condenses into water or evaporates. Otherwise it drifts.
pub(super) fn decide(cell: &mut dyn Neighborhood, rng: &mut SimRng) -> bool {
    match cell.look(Direction::Up) {
        Cell::Known(MaterialId::STEAM) => {}
        Cell::Known(above) => {
            if rng.one_in(STEAM_RISE_ODDS) {
                cell.swap_into(Direction::Up, MaterialId::STEAM, above);
                return true;
            }
            return false;
        }
        Cell::Unknown => {
            if rng.one_in(STEAM_CONDENSE_ODDS) {
                cell.transform(MaterialId::WATER);
                return true;
            }
            if rng.one_in(STEAM_EVAPORATE_ODDS) {
                cell.transform(MaterialId::EMPTY);
                return true;
            }
        }
    }

    if rng.one_in(STEAM_DRIFT_ODDS) {
        let dir = CARDINALS[rng.next_bounded(4) as usize];
        if cell.look(dir).is_empty() {
            cell.swap_into(dir, MaterialId::STEAM, MaterialId::EMPTY);
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::ScriptedNeighborhood;
    use glam::IVec3;

    const STEAM: Cell = Cell::Known(MaterialId::STEAM);

    fn up() -> IVec3 {
        Direction::Up.offset()
    }

    #[test]
    fn test_rises_eventually() {
        let mut cell = ScriptedNeighborhood::new(MaterialId::STEAM, Cell::EMPTY);
        let mut rng = SimRng::new(1);
        let mut ticks = 0;
        while !decide(&mut cell, &mut rng) {
            ticks += 1;
            assert!(ticks < 100, "steam never rose");
        }
        assert_eq!(cell.at(up()), STEAM);
        assert_eq!(cell.at(IVec3::ZERO), Cell::EMPTY);
    }

    #[test]
    fn test_rises_through_water() {
        let mut cell = ScriptedNeighborhood::new(MaterialId::STEAM, Cell::EMPTY)
            .with(up(), Cell::Known(MaterialId::WATER));
        let mut rng = SimRng::new(2);
        while !decide(&mut cell, &mut rng) {}
        assert_eq!(cell.at(up()), STEAM);
        assert_eq!(cell.at(IVec3::ZERO), Cell::Known(MaterialId::WATER));
    }

    #[test]
    fn test_top_of_known_space_condenses_or_vanishes() {
        let mut rng = SimRng::new(3);
        let mut outcomes = Vec::new();
        for _ in 0..50 {
            let mut cell = ScriptedNeighborhood::new(MaterialId::STEAM, Cell::Unknown);
            while !decide(&mut cell, &mut rng) {}
            outcomes.push(cell.at(IVec3::ZERO));
            assert_eq!(cell.at(up()), Cell::Unknown, "never written");
        }
        assert!(outcomes.contains(&Cell::Known(MaterialId::WATER)));
        for outcome in outcomes {
            assert!(outcome == Cell::Known(MaterialId::WATER) || outcome == Cell::EMPTY);
        }
    }

    #[test]
    fn test_packed_steam_drifts_only_into_empty() {
        let mut cell = ScriptedNeighborhood::new(MaterialId::STEAM, Cell::Known(MaterialId::STONE))
            .with(up(), STEAM);
        let mut rng = SimRng::new(4);
        for _ in 0..200 {
            assert!(!decide(&mut cell, &mut rng));
        }
    }

    #[test]
    fn test_capped_steam_drifts_into_one_empty_neighbor() {
        let mut rng = SimRng::new(5);
        let mut drifted = false;
        for _ in 0..500 {
            let mut cell =
                ScriptedNeighborhood::new(MaterialId::STEAM, Cell::EMPTY).with(up(), STEAM);
            if !decide(&mut cell, &mut rng) {
                assert!(cell.writes().is_empty());
                continue;
            }
            assert_eq!(cell.at(IVec3::ZERO), Cell::EMPTY);
            assert_eq!(cell.at(up()), STEAM);
            let moved = CARDINALS
                .iter()
                .filter(|d| cell.at(d.offset()) == STEAM)
                .count();
            assert_eq!(moved, 1);
            drifted = true;
            break;
        }
        assert!(drifted, "capped steam never drifted");
    }
}

