use serde::{Deserialize, Serialize};

use crate::collections::{CustomHashMap, DaySet};
use crate::location::Location;
use crate::Day;

/// One sighting of a bounty hunter: present at `location` on `day`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatRecord {
    #[serde(rename = "planet", alias = "location")]
    pub location: Location,
    pub day: Day,
}

impl ThreatRecord {
    pub fn new(location: impl Into<Location>, day: Day) -> Self {
        ThreatRecord {
            location: location.into(),
            day,
        }
    }
}

/// Days on which each location is watched, built once per mission.
#[derive(Debug, Clone, Default)]
pub struct ThreatIndex {
    days_by_location: CustomHashMap<Location, DaySet>,
}

impl ThreatIndex {
    pub fn new(records: &[ThreatRecord]) -> Self {
        records.iter().cloned().collect()
    }

    pub fn is_threatened(&self, location: &str, day: Day) -> bool {
        self.days_by_location
            .get(location)
            .is_some_and(|days| days.contains(&day))
    }

    pub fn days_at(&self, location: &str) -> Option<&DaySet> {
        self.days_by_location.get(location)
    }

    pub fn is_empty(&self) -> bool {
        self.days_by_location.is_empty()
    }

    /// Number of distinct (location, day) pairs.
    pub fn len(&self) -> usize {
        self.days_by_location.values().map(|days| days.len()).sum()
    }
}

impl FromIterator<ThreatRecord> for ThreatIndex {
    fn from_iter<I: IntoIterator<Item = ThreatRecord>>(records: I) -> Self {
        let mut days_by_location: CustomHashMap<Location, DaySet> = CustomHashMap::default();
        for record in records {
            days_by_location
                .entry(record.location)
                .or_default()
                .insert(record.day);
        }
        ThreatIndex { days_by_location }
    }
}
