use std::path::PathBuf;

use odds::risk::encounter_count;
use odds::{ComputationError, JourneyExplorer, Waypoint};
use shared::{Day, MissionConfig, RouteGraph, ThreatIndex, ThreatRecord};

fn config(autonomy: Day, departure: &str, arrival: &str) -> MissionConfig {
    MissionConfig {
        autonomy,
        departure: departure.into(),
        arrival: arrival.into(),
        routes_db: PathBuf::from("universe.db"),
    }
}

fn universe() -> RouteGraph {
    RouteGraph::from_routes(vec![
        ("Tatooine", "Dagobah", 6),
        ("Dagobah", "Endor", 4),
        ("Dagobah", "Hoth", 1),
        ("Hoth", "Endor", 1),
        ("Tatooine", "Hoth", 6),
    ])
}

fn hunters_on_hoth() -> ThreatIndex {
    ThreatIndex::new(&[
        ThreatRecord::new("Hoth", 6),
        ThreatRecord::new("Hoth", 7),
        ThreatRecord::new("Hoth", 8),
    ])
}

#[test]
fn test_all_journeys_end_at_arrival_in_time() {
    let graph = universe();
    let config = config(6, "Tatooine", "Endor");
    let explorer = JourneyExplorer::new(&graph, &config, 9).unwrap();

    let journeys = explorer.explore();
    assert!(!journeys.is_empty());
    for journey in &journeys {
        assert!(journey.is_successful("Endor", 9), "{}", journey);
        assert_eq!(journey.route[0], Waypoint::new("Tatooine", 0));
        assert!(journey.route.windows(2).all(|pair| pair[0].day < pair[1].day));
        assert!(journey.autonomy_left <= 6);
    }
}

#[test]
fn test_every_way_of_lingering_before_a_direct_route() {
    let graph = RouteGraph::from_routes(vec![("Tatooine", "Endor", 5)]);
    let config = config(6, "Tatooine", "Endor");
    let explorer = JourneyExplorer::new(&graph, &config, 9).unwrap();

    // leave on day 0, 1, 2, 3 or 4 with a full tank: 1 + 1 + 1 + 2 + 4 ways
    let journeys = explorer.explore();
    assert_eq!(journeys.len(), 9);
    assert_eq!(journeys.iter().filter(|j| j.elapsed == 5).count(), 1);
    assert_eq!(journeys.iter().filter(|j| j.elapsed == 9).count(), 4);
}

#[test]
fn test_waiting_burns_autonomy() {
    let graph = RouteGraph::from_routes(vec![("Tatooine", "Endor", 3)]);
    let config = config(3, "Tatooine", "Endor");
    let explorer = JourneyExplorer::new(&graph, &config, 5).unwrap();

    let journeys = explorer.explore();
    let mut arrivals: Vec<Day> = journeys.iter().map(|j| j.elapsed).collect();
    arrivals.sort_unstable();
    // leaving after a two day wait would need a tank the wait emptied
    assert_eq!(arrivals, vec![3, 4, 5]);
    assert!(journeys
        .iter()
        .all(|j| j.route != vec![Waypoint::new("Tatooine", 0), Waypoint::new("Tatooine", 2)]));
}

#[test]
fn test_refuel_is_required_on_long_legs() {
    let graph = RouteGraph::from_routes(vec![("Tatooine", "Hoth", 3), ("Hoth", "Endor", 3)]);
    let config = config(3, "Tatooine", "Endor");

    let explorer = JourneyExplorer::new(&graph, &config, 6).unwrap();
    assert!(explorer.explore().is_empty());
    assert_eq!(explorer.minimum_encounters(&ThreatIndex::default()), None);

    let explorer = JourneyExplorer::new(&graph, &config, 7).unwrap();
    let journeys = explorer.explore();
    assert_eq!(journeys.len(), 1);
    assert_eq!(
        journeys[0].route,
        vec![
            Waypoint::new("Tatooine", 0),
            Waypoint::new("Hoth", 3),
            Waypoint::new("Hoth", 4),
        ]
    );
    assert_eq!(journeys[0].elapsed, 7);
    assert_eq!(journeys[0].to_string(), "Tatooine@0->Hoth@3->Hoth@4->Endor@7");
}

#[test]
fn test_departure_equal_to_arrival_needs_a_round_trip() {
    let threats = ThreatIndex::new(&[ThreatRecord::new("Hoth", 1), ThreatRecord::new("Hoth", 2)]);
    let config = config(6, "Endor", "Endor");

    let nowhere = RouteGraph::new();
    let explorer = JourneyExplorer::new(&nowhere, &config, 3).unwrap();
    assert!(explorer.explore().is_empty());
    assert_eq!(explorer.minimum_encounters(&threats), None);

    let graph = RouteGraph::from_routes(vec![("Endor", "Hoth", 1)]);
    let explorer = JourneyExplorer::new(&graph, &config, 3).unwrap();
    let journeys = explorer.explore();
    assert!(!journeys.is_empty());
    for journey in &journeys {
        assert!(journey.is_successful("Endor", 3), "{}", journey);
        assert_eq!(journey.route[0], Waypoint::new("Endor", 0));
        assert!(journey.route.iter().any(|waypoint| waypoint.location == "Hoth"));
    }
    assert_eq!(explorer.minimum_encounters(&threats), Some(1));
    assert_eq!(exhaustive_minimum(&explorer, &threats), Some(1));
}

#[test]
fn test_staying_at_the_arrival_is_not_arriving() {
    // refuelling or waiting where the journey started never counts as arrival
    let graph = RouteGraph::from_routes(vec![("Endor", "Hoth", 2)]);
    let config = config(6, "Endor", "Endor");
    let explorer = JourneyExplorer::new(&graph, &config, 3).unwrap();

    assert!(explorer.explore().is_empty());
    assert_eq!(explorer.minimum_encounters(&ThreatIndex::default()), None);
}

#[test]
fn test_unknown_locations_have_no_journeys() {
    let graph = universe();
    for (departure, arrival) in [("Alderaan", "Endor"), ("Tatooine", "Alderaan")] {
        let config = config(6, departure, arrival);
        let explorer = JourneyExplorer::new(&graph, &config, 20).unwrap();
        assert!(explorer.explore().is_empty());
        assert_eq!(explorer.minimum_encounters(&hunters_on_hoth()), None);
    }
}

#[test]
fn test_zero_travel_time_is_a_computation_error() {
    let graph = RouteGraph::from_routes(vec![("Tatooine", "Hoth", 2), ("Hoth", "Endor", 0)]);
    let config = config(6, "Tatooine", "Endor");

    match JourneyExplorer::new(&graph, &config, 9) {
        Err(ComputationError::NonPositiveTravelTime { travel_time, .. }) => assert_eq!(travel_time, 0),
        Ok(_) => panic!("zero day route accepted"),
    }
}

fn exhaustive_minimum(explorer: &JourneyExplorer, threats: &ThreatIndex) -> Option<u32> {
    explorer
        .explore()
        .iter()
        .map(|journey| encounter_count(&journey.route, threats))
        .min()
}

#[test]
fn test_memoized_search_matches_exhaustive_search() {
    let graph = universe();
    let threats = hunters_on_hoth();
    let config = config(6, "Tatooine", "Endor");

    let expected = [None, None, None, None, None, None, None, None, Some(2), Some(1), Some(0)];
    for countdown in 0..=10 {
        let explorer = JourneyExplorer::new(&graph, &config, countdown).unwrap();
        let memoized = explorer.minimum_encounters(&threats);
        assert_eq!(memoized, exhaustive_minimum(&explorer, &threats), "countdown {}", countdown);
        assert_eq!(memoized, expected[countdown as usize], "countdown {}", countdown);
    }
}

#[test]
fn test_memoized_search_matches_on_a_denser_network() {
    let graph = RouteGraph::from_routes(vec![
        ("A", "B", 1),
        ("B", "C", 2),
        ("A", "C", 4),
        ("C", "D", 1),
        ("B", "D", 3),
        ("D", "D", 1),
    ]);
    let threats = ThreatIndex::new(&[
        ThreatRecord::new("B", 1),
        ThreatRecord::new("B", 2),
        ThreatRecord::new("C", 3),
        ThreatRecord::new("C", 4),
        ThreatRecord::new("D", 5),
        ThreatRecord::new("A", 1),
    ]);

    for autonomy in 1..=4 {
        let config = config(autonomy, "A", "D");
        for countdown in 0..=7 {
            let explorer = JourneyExplorer::new(&graph, &config, countdown).unwrap();
            assert_eq!(
                explorer.minimum_encounters(&threats),
                exhaustive_minimum(&explorer, &threats),
                "autonomy {} countdown {}",
                autonomy,
                countdown
            );
        }
    }
}
