//! Scoring journeys against the bounty hunter sightings.
//!
//! Every encounter with bounty hunters carries a one in ten chance of
//! capture, independent of earlier encounters the vessel survived.

use shared::ThreatIndex;

use crate::journey::Waypoint;

/// Absorbs the rounding error of the floating point series, so that exact
/// percentages such as 90 or 81 are not truncated to 89 or 80.
const ODDS_TOLERANCE: f64 = 1e-9;

/// Number of waypoints at which bounty hunters were present on that day.
///
/// The first waypoint is the departure on day zero and is not checked. Each
/// later waypoint carries the elapsed day exactly as the search advanced it:
/// a move adds the route's travel time, a refuel one day, a wait its length.
pub fn encounter_count(route: &[Waypoint], threats: &ThreatIndex) -> u32 {
    route
        .iter()
        .skip(1)
        .filter(|waypoint| threats.is_threatened(waypoint.location.as_str(), waypoint.day))
        .count() as u32
}

/// Probability of being captured over `encounters` encounters:
/// `sum(9^i / 10^(i+1))` for `i` in `0..encounters`.
pub fn capture_probability(encounters: u32) -> f64 {
    let mut probability = 0.0;
    // 9^i / 10^(i+1)
    let mut term = 0.1;
    for _ in 0..encounters {
        probability += term;
        term *= 0.9;
        if term == 0.0 {
            break;
        }
    }
    probability
}

/// Chance of arriving uncaptured, as a whole percentage rounded down.
pub fn success_odds(encounters: u32) -> u8 {
    let percent = (1.0 - capture_probability(encounters)) * 100.0 + ODDS_TOLERANCE;
    percent.floor().clamp(0.0, 100.0) as u8
}
