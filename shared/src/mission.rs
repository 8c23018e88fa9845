use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ValidationError;
use crate::location::Location;
use crate::threat_index::{ThreatIndex, ThreatRecord};
use crate::{get_reader, Day};

/// Encoding of a mission document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` (optionally gzip compressed) is TOML, everything else JSON.
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        if name.ends_with(".toml") {
            DocumentFormat::Toml
        } else {
            DocumentFormat::Json
        }
    }

    fn decode<T: DeserializeOwned>(self, document: &str, text: &str) -> Result<T, ValidationError> {
        let decoded = match self {
            DocumentFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        };
        decoded.map_err(|reason| ValidationError::Malformed {
            document: document.to_owned(),
            reason,
        })
    }
}

/// Vessel and fleet side of a mission: how far the vessel flies on a full
/// tank, where it starts, where it must go, and where the routes are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionConfig {
    pub autonomy: Day,
    pub departure: Location,
    pub arrival: Location,
    pub routes_db: PathBuf,
}

/// Adversary side of a mission: the deadline and the known hunter positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionData {
    pub countdown: Day,
    pub bounty_hunters: Vec<ThreatRecord>,
}

// Every field is optional so that a missing one is reported by name
// instead of as a generic decode failure.
#[derive(Deserialize)]
struct RawMissionConfig {
    autonomy: Option<i64>,
    departure: Option<String>,
    arrival: Option<String>,
    routes_db: Option<String>,
}

#[derive(Deserialize)]
struct RawMissionData {
    countdown: Option<i64>,
    bounty_hunters: Option<Vec<RawThreatRecord>>,
}

#[derive(Deserialize)]
struct RawThreatRecord {
    #[serde(alias = "location")]
    planet: Option<String>,
    day: Option<i64>,
}

fn read_document(path: &Path) -> Result<(String, String), ValidationError> {
    let document = path.display().to_string();
    let mut text = String::new();
    get_reader(path)
        .and_then(|mut reader| reader.read_to_string(&mut text))
        .map_err(|source| ValidationError::Unreadable {
            document: document.clone(),
            source,
        })?;
    Ok((document, text))
}

fn days(document: &str, field: &str, value: i64, minimum: i64) -> Result<Day, ValidationError> {
    if value < minimum {
        let expected = if minimum > 0 { "positive" } else { "non-negative" };
        return Err(ValidationError::invalid(
            document,
            field,
            format!("expected a {} number of days, got {}", expected, value),
        ));
    }
    Day::try_from(value).map_err(|_| {
        ValidationError::invalid(document, field, format!("{} days is out of range", value))
    })
}

impl MissionConfig {
    /// Decodes a config document. `routes_db` is kept as written.
    pub fn parse(document: &str, text: &str, format: DocumentFormat) -> Result<Self, ValidationError> {
        let raw: RawMissionConfig = format.decode(document, text)?;

        let autonomy = raw
            .autonomy
            .ok_or_else(|| ValidationError::missing(document, "autonomy"))?;
        let autonomy = days(document, "autonomy", autonomy, 1)?;
        let departure = raw
            .departure
            .ok_or_else(|| ValidationError::missing(document, "departure"))?;
        let arrival = raw
            .arrival
            .ok_or_else(|| ValidationError::missing(document, "arrival"))?;
        let routes_db = raw
            .routes_db
            .ok_or_else(|| ValidationError::missing(document, "routes_db"))?;

        Ok(MissionConfig {
            autonomy,
            departure: departure.into(),
            arrival: arrival.into(),
            routes_db: PathBuf::from(routes_db),
        })
    }

    /// Reads a config document from disk. A relative `routes_db` is taken
    /// relative to the directory holding the document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let (document, text) = read_document(path)?;
        let mut config = MissionConfig::parse(&document, &text, DocumentFormat::from_path(path))?;

        if config.routes_db.is_relative() {
            if let Some(base) = path.parent() {
                config.routes_db = base.join(&config.routes_db);
            }
        }

        info!(
            "mission config {}: {} -> {} with autonomy {}",
            document, config.departure, config.arrival, config.autonomy
        );
        debug!("route store resolved to {}", config.routes_db.display());
        Ok(config)
    }
}

impl MissionData {
    pub fn parse(document: &str, text: &str, format: DocumentFormat) -> Result<Self, ValidationError> {
        let raw: RawMissionData = format.decode(document, text)?;

        let countdown = raw
            .countdown
            .ok_or_else(|| ValidationError::missing(document, "countdown"))?;
        let countdown = days(document, "countdown", countdown, 0)?;
        let hunters = raw
            .bounty_hunters
            .ok_or_else(|| ValidationError::missing(document, "bounty_hunters"))?;

        let mut bounty_hunters = Vec::with_capacity(hunters.len());
        for (i, hunter) in hunters.into_iter().enumerate() {
            let planet = hunter
                .planet
                .ok_or_else(|| ValidationError::missing(document, format!("bounty_hunters[{}].planet", i)))?;
            let day = hunter
                .day
                .ok_or_else(|| ValidationError::missing(document, format!("bounty_hunters[{}].day", i)))?;
            let day = days(document, &format!("bounty_hunters[{}].day", i), day, 0)?;
            bounty_hunters.push(ThreatRecord::new(planet, day));
        }

        Ok(MissionData {
            countdown,
            bounty_hunters,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ValidationError> {
        let path = path.as_ref();
        let (document, text) = read_document(path)?;
        let data = MissionData::parse(&document, &text, DocumentFormat::from_path(path))?;
        info!(
            "mission data {}: countdown {} with {} bounty hunter sightings",
            document,
            data.countdown,
            data.bounty_hunters.len()
        );
        Ok(data)
    }

    pub fn threat_index(&self) -> ThreatIndex {
        ThreatIndex::new(&self.bounty_hunters)
    }
}
