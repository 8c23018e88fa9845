use shared::{DataSourceError, Day, Location, ValidationError};
use thiserror::Error;

/// An internal invariant does not hold for otherwise decodable input.
#[derive(Debug, Error)]
pub enum ComputationError {
    #[error("route between {origin} and {destination} takes {travel_time} days, expected at least 1")]
    NonPositiveTravelTime {
        origin: Location,
        destination: Location,
        travel_time: Day,
    },
}

#[derive(Debug, Error)]
pub enum OddsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    #[error(transparent)]
    Computation(#[from] ComputationError),

    #[error("no fleet configuration has been loaded")]
    NoFleet,
}
