#![deny(clippy::all)]
#![allow(clippy::type_complexity)]

mod error;
pub mod explorer;
mod journey;
pub mod risk;
mod service;

extern crate shared;
extern crate typed_arena;

use itertools::Itertools;

pub use error::{ComputationError, OddsError};
pub use explorer::{JourneyExplorer, SearchStrategy};
pub use journey::{Journey, Waypoint};
pub use service::{assess, compute_odds, Fleet, OddsReport, OddsService};

fn format_route(route: &[Waypoint]) -> String {
    route
        .iter()
        .map(|waypoint| format!("{}@{}", waypoint.location, waypoint.day))
        .join("->")
}
