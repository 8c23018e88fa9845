use std::fmt;

use shared::{Day, Location};

use crate::format_route;

/// A place the vessel stood at, and the elapsed day it stood there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint {
    pub location: Location,
    pub day: Day,
}

impl Waypoint {
    pub fn new(location: impl Into<Location>, day: Day) -> Self {
        Waypoint {
            location: location.into(),
            day,
        }
    }
}

/// Where a journey stands after a sequence of moves, refuels and waits.
///
/// `route` holds every earlier position, departure first; the current
/// location is not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    pub location: Location,
    pub elapsed: Day,
    pub autonomy_left: i64,
    pub route: Vec<Waypoint>,
}

impl Journey {
    pub fn is_successful(&self, arrival: &str, countdown: Day) -> bool {
        self.location == arrival && self.elapsed <= countdown
    }
}

impl fmt::Display for Journey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.route.is_empty() {
            write!(f, "{}->", format_route(&self.route))?;
        }
        write!(f, "{}@{}", self.location, self.elapsed)
    }
}
