//! Loading a [`RouteGraph`] from the tabular route store.
//!
//! Two layouts are understood:
//!
//! * a SQLite database with a `ROUTES(ORIGIN, DESTINATION, TRAVEL_TIME)`
//!   table (`.db`, `.sqlite`, `.sqlite3` and anything unrecognised),
//! * a CSV file with `origin`, `destination` and `travel_time` columns,
//!   optionally gzip compressed (`.csv`, `.csv.gz`).

use std::path::{Path, PathBuf};

use log::{info, trace};
use rusqlite::{Connection, OpenFlags};

use crate::error::DataSourceError;
use crate::route_graph::RouteGraph;
use crate::{get_reader, Day};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStoreKind {
    Sqlite,
    Csv,
}

impl RouteStoreKind {
    pub fn from_path(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".csv") || name.ends_with(".csv.gz") {
            RouteStoreKind::Csv
        } else {
            RouteStoreKind::Sqlite
        }
    }
}

fn travel_time(
    path: &Path,
    origin: &str,
    destination: &str,
    travel_time: i64,
) -> Result<Day, DataSourceError> {
    match Day::try_from(travel_time) {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(DataSourceError::InvalidTravelTime {
            path: path.to_path_buf(),
            origin: origin.to_owned(),
            destination: destination.to_owned(),
            travel_time,
        }),
    }
}

impl RouteGraph {
    /// Reads every route of the store at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<RouteGraph, DataSourceError> {
        let path = path.as_ref();
        let graph = match RouteStoreKind::from_path(path) {
            RouteStoreKind::Sqlite => load_sqlite(path)?,
            RouteStoreKind::Csv => load_csv(path)?,
        };
        info!(
            "loaded {} routes between {} locations from {}",
            graph.route_count(),
            graph.location_count(),
            path.display()
        );
        Ok(graph)
    }
}

fn load_sqlite(path: &Path) -> Result<RouteGraph, DataSourceError> {
    let sqlite_error = |source| DataSourceError::Sqlite {
        path: path.to_path_buf(),
        source,
    };

    // read only: opening must never create an empty database
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
        .map_err(sqlite_error)?;
    let mut stmt = conn
        .prepare("SELECT ORIGIN, DESTINATION, TRAVEL_TIME FROM ROUTES")
        .map_err(sqlite_error)?;
    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, i64>(2)?,
            ))
        })
        .map_err(sqlite_error)?;

    let mut graph = RouteGraph::new();
    for row in rows {
        let (origin, destination, days) = row.map_err(sqlite_error)?;
        let days = travel_time(path, &origin, &destination, days)?;
        trace!("route {} <-> {} in {} days", origin, destination, days);
        graph.add_route(&origin, &destination, days);
    }
    Ok(graph)
}

fn load_csv(path: &Path) -> Result<RouteGraph, DataSourceError> {
    let owned_path = || -> PathBuf { path.to_path_buf() };
    let reader = get_reader(path).map_err(|source| DataSourceError::Open {
        path: owned_path(),
        source,
    })?;
    let mut rdr = csv::Reader::from_reader(reader);
    let header_row = rdr
        .headers()
        .map_err(|source| DataSourceError::Csv {
            path: owned_path(),
            source,
        })?
        .clone();

    // get the ids for the relevant columns!
    let column = |name: &'static str| {
        header_row
            .iter()
            .position(|x| x.trim().eq_ignore_ascii_case(name))
            .ok_or(DataSourceError::MissingColumn {
                path: owned_path(),
                column: name,
            })
    };
    let origin_column = column("origin")?;
    let destination_column = column("destination")?;
    let travel_time_column = column("travel_time")?;

    let mut graph = RouteGraph::new();
    for (row, result) in rdr.records().enumerate() {
        let record = result.map_err(|source| DataSourceError::Csv {
            path: owned_path(),
            source,
        })?;
        let field = |index: usize, name: &str| {
            record
                .get(index)
                .map(str::trim)
                .ok_or_else(|| DataSourceError::InvalidRow {
                    path: owned_path(),
                    row: row + 1,
                    reason: format!("no {} value", name),
                })
        };

        let origin = field(origin_column, "origin")?;
        let destination = field(destination_column, "destination")?;
        let days = field(travel_time_column, "travel_time")?;
        let days = days
            .parse::<i64>()
            .map_err(|e| DataSourceError::InvalidRow {
                path: owned_path(),
                row: row + 1,
                reason: format!("travel_time {:?}: {}", days, e),
            })?;
        let days = travel_time(path, origin, destination, days)?;

        trace!("route {} <-> {} in {} days", origin, destination, days);
        graph.add_route(origin, destination, days);
    }
    Ok(graph)
}
