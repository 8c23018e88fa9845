use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;
use shared::{MissionConfig, MissionData, RouteGraph};

use crate::error::OddsError;
use crate::explorer::{JourneyExplorer, SearchStrategy};
use crate::risk::{encounter_count, success_odds};

/// A vessel configuration together with the route network it flies.
///
/// Loading the route store is the expensive part of a mission, so a fleet
/// is meant to be kept around and evaluated against many missions.
#[derive(Debug, Clone)]
pub struct Fleet {
    pub config: MissionConfig,
    pub routes: RouteGraph,
}

impl Fleet {
    pub fn new(config: MissionConfig, routes: RouteGraph) -> Self {
        Fleet { config, routes }
    }

    /// Reads the config document at `path` and the route store it names.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OddsError> {
        let config = MissionConfig::load(path)?;
        let routes = RouteGraph::load(&config.routes_db)?;
        Ok(Fleet { config, routes })
    }
}

/// Outcome of one mission evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OddsReport {
    /// Chance of arriving uncaptured, in percent.
    pub odds: u8,
    /// Encounters on the safest journey; `None` when the arrival cannot be
    /// reached before the countdown ends.
    pub min_encounters: Option<u32>,
    /// Successful journeys enumerated, only known for the exhaustive search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journeys: Option<usize>,
}

/// Evaluates one mission against a fleet.
pub fn assess(
    fleet: &Fleet,
    mission: &MissionData,
    strategy: SearchStrategy,
) -> Result<OddsReport, OddsError> {
    let threats = mission.threat_index();
    let explorer = JourneyExplorer::new(&fleet.routes, &fleet.config, mission.countdown)?;

    let (min_encounters, journeys) = match strategy {
        SearchStrategy::Memoized => (explorer.minimum_encounters(&threats), None),
        SearchStrategy::Exhaustive => {
            let journeys = explorer.explore();
            let min_encounters = journeys
                .iter()
                .map(|journey| encounter_count(&journey.route, &threats))
                .min();
            (min_encounters, Some(journeys.len()))
        }
    };

    let odds = min_encounters.map_or(0, success_odds);
    Ok(OddsReport {
        odds,
        min_encounters,
        journeys,
    })
}

/// Chance, in percent, that the fleet's vessel reaches its arrival before
/// the countdown ends without being captured. Zero if it cannot arrive.
pub fn compute_odds(
    fleet: &Fleet,
    mission: &MissionData,
    strategy: SearchStrategy,
) -> Result<u8, OddsError> {
    assess(fleet, mission, strategy).map(|report| report.odds)
}

/// Re-usable entry point that keeps the last loaded fleet.
#[derive(Debug, Default)]
pub struct OddsService {
    strategy: SearchStrategy,
    fleet: Option<(Option<PathBuf>, Fleet)>,
}

impl OddsService {
    pub fn new(strategy: SearchStrategy) -> Self {
        OddsService {
            strategy,
            fleet: None,
        }
    }

    pub fn with_fleet(fleet: Fleet, strategy: SearchStrategy) -> Self {
        OddsService {
            strategy,
            fleet: Some((None, fleet)),
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        self.strategy
    }

    pub fn fleet(&self) -> Option<&Fleet> {
        self.fleet.as_ref().map(|(_, fleet)| fleet)
    }

    /// Loads the fleet described by the config document at `path`, unless
    /// that document is the one already loaded.
    pub fn load_fleet(&mut self, path: impl AsRef<Path>) -> Result<&Fleet, OddsError> {
        let path = path.as_ref();
        let cached = matches!(&self.fleet, Some((Some(loaded), _)) if loaded.as_path() == path);
        if cached {
            debug!("reusing fleet loaded from {}", path.display());
        } else {
            let fleet = Fleet::load(path)?;
            self.fleet = Some((Some(path.to_path_buf()), fleet));
        }
        self.fleet().ok_or(OddsError::NoFleet)
    }

    pub fn assess(&self, mission: &MissionData) -> Result<OddsReport, OddsError> {
        let fleet = self.fleet().ok_or(OddsError::NoFleet)?;
        let report = assess(fleet, mission, self.strategy)?;
        info!(
            "{} -> {} within {} days: {}% ({} search)",
            fleet.config.departure, fleet.config.arrival, mission.countdown, report.odds, self.strategy
        );
        Ok(report)
    }

    pub fn compute_odds(&self, mission: &MissionData) -> Result<u8, OddsError> {
        self.assess(mission).map(|report| report.odds)
    }

    /// Loads both documents (the fleet only if not already loaded) and
    /// evaluates the mission.
    pub fn give_me_the_odds(
        &mut self,
        config_path: impl AsRef<Path>,
        mission_path: impl AsRef<Path>,
    ) -> Result<OddsReport, OddsError> {
        let mission = MissionData::load(mission_path)?;
        self.load_fleet(config_path)?;
        self.assess(&mission)
    }
}
