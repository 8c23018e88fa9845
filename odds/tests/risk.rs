use odds::risk::{capture_probability, encounter_count, success_odds};
use odds::Waypoint;
use shared::{ThreatIndex, ThreatRecord};

fn hunters_on_hoth() -> ThreatIndex {
    ThreatIndex::new(&[
        ThreatRecord::new("Hoth", 6),
        ThreatRecord::new("Hoth", 7),
        ThreatRecord::new("Hoth", 8),
    ])
}

#[test]
fn test_odds_for_encounter_counts() {
    assert_eq!(success_odds(0), 100);
    assert_eq!(success_odds(1), 90);
    assert_eq!(success_odds(2), 81);
    assert_eq!(success_odds(3), 72);
    assert_eq!(success_odds(4), 65);
    assert_eq!(success_odds(18), 15);
    assert_eq!(success_odds(43), 1);
    assert_eq!(success_odds(44), 0);
    assert_eq!(success_odds(u32::MAX), 0);
}

#[test]
fn test_capture_probability_series() {
    assert_eq!(capture_probability(0), 0.0);
    assert!((capture_probability(1) - 0.1).abs() < 1e-12);
    assert!((capture_probability(2) - 0.19).abs() < 1e-12);
    assert!((capture_probability(3) - 0.271).abs() < 1e-12);
    assert!(capture_probability(200) <= 1.0);
}

#[test]
fn test_departure_is_never_checked() {
    let threats = ThreatIndex::new(&[ThreatRecord::new("Tatooine", 0)]);
    let route = vec![Waypoint::new("Tatooine", 0)];
    assert_eq!(encounter_count(&route, &threats), 0);
}

#[test]
fn test_encounters_counted_per_day_at_location() {
    let threats = hunters_on_hoth();

    // Tatooine -> Hoth (day 6), refuel (day 7), then on to Endor
    let route = vec![
        Waypoint::new("Tatooine", 0),
        Waypoint::new("Hoth", 6),
        Waypoint::new("Hoth", 7),
    ];
    assert_eq!(encounter_count(&route, &threats), 2);

    // through Dagobah, reaching Hoth on day 8
    let route = vec![
        Waypoint::new("Tatooine", 0),
        Waypoint::new("Dagobah", 6),
        Waypoint::new("Dagobah", 7),
        Waypoint::new("Hoth", 8),
    ];
    assert_eq!(encounter_count(&route, &threats), 1);

    // a long wait on Dagobah skips straight past the watched days
    let route = vec![
        Waypoint::new("Tatooine", 0),
        Waypoint::new("Dagobah", 6),
        Waypoint::new("Dagobah", 9),
        Waypoint::new("Hoth", 10),
    ];
    assert_eq!(encounter_count(&route, &threats), 0);
}
