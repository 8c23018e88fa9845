#![warn(clippy::all)]

mod collections;
pub use collections::CustomHashMap;
pub use collections::CustomHashSet;
pub use collections::DaySet;

mod error;
pub use error::DataSourceError;
pub use error::ValidationError;

mod location;
pub use location::Location;

mod mission;
pub use mission::DocumentFormat;
pub use mission::MissionConfig;
pub use mission::MissionData;

mod route_graph;
pub use route_graph::RouteGraph;

mod route_store;
pub use route_store::RouteStoreKind;

mod threat_index;
pub use threat_index::ThreatIndex;
pub use threat_index::ThreatRecord;

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

pub use petgraph::graph::NodeIndex;

/// Days, the only unit of time in a mission.
pub type Day = u32;

/// Opens `path` for reading, transparently decompressing `.gz` files.
pub fn get_reader(path: &Path) -> io::Result<Box<dyn Read>> {
    let file = BufReader::new(File::open(path)?);
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}
