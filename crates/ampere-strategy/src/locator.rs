//! Nearest-station search over the board's energy stations.
//!
//! Two entry points, one per occupancy predicate. Both scan every
//! station each call -- the world changes every turn, so nothing is
//! cached -- and keep the first minimum encountered, which makes tie
//! breaking stable under the host's station ordering.

use ampere_types::{Map, Position, Robot};

use crate::distance::squared_distance;
use crate::occupancy::{cell_is_free, cell_is_unowned};

/// Position of the nearest station whose cell passes [`cell_is_free`].
///
/// Returns `None` when no station qualifies -- the explicit
/// "no station available" outcome the turn decision resolves to a
/// fallback command.
pub fn nearest_free_station(mover: &Robot, map: &dyn Map, robots: &[Robot]) -> Option<Position> {
    nearest_matching(mover, map, robots, cell_is_free)
}

/// Position of the nearest station whose cell passes [`cell_is_unowned`].
///
/// Used to pick a movement destination and to price the next expansion.
/// Because the unowned predicate blocks the mover's own cell, this can
/// disagree with [`nearest_free_station`] while the mover is parked on a
/// station; that asymmetry is intentional.
pub fn nearest_unowned_station(mover: &Robot, map: &dyn Map, robots: &[Robot]) -> Option<Position> {
    nearest_matching(mover, map, robots, cell_is_unowned)
}

/// Minimum-squared-distance scan with strict `<` so the first station
/// encountered wins ties.
fn nearest_matching(
    mover: &Robot,
    map: &dyn Map,
    robots: &[Robot],
    usable: fn(Position, &Robot, &[Robot]) -> bool,
) -> Option<Position> {
    let mut nearest: Option<(Position, u64)> = None;
    for station in map.stations() {
        if !usable(station.position, mover, robots) {
            continue;
        }
        let d = squared_distance(station.position, mover.position);
        if nearest.is_none_or(|(_, best)| d < best) {
            nearest = Some((station.position, d));
        }
    }
    nearest.map(|(position, _)| position)
}

#[cfg(test)]
mod tests {
    use ampere_types::EnergyStation;

    use super::*;

    struct FixtureMap {
        stations: Vec<EnergyStation>,
    }

    impl Map for FixtureMap {
        fn stations(&self) -> &[EnergyStation] {
            &self.stations
        }

        fn find_free_cell(&self, near: Position, _robots: &[Robot]) -> Option<Position> {
            Some(near)
        }
    }

    fn station(x: i32, y: i32) -> EnergyStation {
        EnergyStation {
            position: Position::new(x, y),
            energy: 1000,
            recovery_rate: 2,
        }
    }

    fn robot(x: i32, y: i32, owner: &str) -> Robot {
        Robot {
            position: Position::new(x, y),
            energy: 100,
            owner: owner.to_string(),
        }
    }

    fn board() -> FixtureMap {
        FixtureMap {
            stations: vec![station(0, 0), station(5, 5), station(10, 0)],
        }
    }

    #[test]
    fn picks_minimum_squared_distance() {
        let mover = robot(2, 2, "us");
        let robots = vec![mover.clone()];
        // (0,0) at distance 8 beats (5,5) at 18 and (10,0) at 68.
        assert_eq!(
            nearest_free_station(&mover, &board(), &robots),
            Some(Position::new(0, 0))
        );
        assert_eq!(
            nearest_unowned_station(&mover, &board(), &robots),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn all_stations_held_by_allies_yields_none() {
        let mover = robot(2, 2, "us");
        let robots = vec![
            mover.clone(),
            robot(0, 0, "us"),
            robot(5, 5, "us"),
            robot(10, 0, "us"),
        ];
        assert_eq!(nearest_free_station(&mover, &board(), &robots), None);
        assert_eq!(nearest_unowned_station(&mover, &board(), &robots), None);
    }

    #[test]
    fn enemy_held_station_still_eligible() {
        let mover = robot(2, 2, "us");
        let robots = vec![mover.clone(), robot(0, 0, "them")];
        assert_eq!(
            nearest_free_station(&mover, &board(), &robots),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn parked_mover_sees_own_station_only_through_free_predicate() {
        let mover = robot(0, 0, "us");
        let robots = vec![mover.clone()];
        assert_eq!(
            nearest_free_station(&mover, &board(), &robots),
            Some(Position::new(0, 0))
        );
        // The unowned scan treats the mover's own cell as taken, so the
        // next station out wins.
        assert_eq!(
            nearest_unowned_station(&mover, &board(), &robots),
            Some(Position::new(5, 5))
        );
    }

    #[test]
    fn first_station_wins_distance_ties() {
        let map = FixtureMap {
            stations: vec![station(4, 0), station(0, 4), station(-4, 0)],
        };
        let mover = robot(0, 0, "us");
        let robots = vec![mover.clone()];
        assert_eq!(
            nearest_unowned_station(&mover, &map, &robots),
            Some(Position::new(4, 0))
        );
    }

    #[test]
    fn empty_board_yields_none() {
        let map = FixtureMap { stations: vec![] };
        let mover = robot(0, 0, "us");
        let robots = vec![mover.clone()];
        assert_eq!(nearest_free_station(&mover, &map, &robots), None);
    }
}
