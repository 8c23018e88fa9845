use std::process;

extern crate colored;
use colored::*;

use anyhow::{Context, Result};
use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use odds::{OddsService, SearchStrategy};
use shared::MissionData;

/// Prints the odds (in percent) that the vessel described by the mission
/// config reaches its arrival before the countdown in the mission data ends.

pub fn main() {
    let matches = App::new("give-me-the-odds")
        .about("Computes the odds that the vessel reaches its destination in time")
        .arg(Arg::with_name("mission_config")
            .value_name("MISSION_CONFIG")
            .help("Vessel config (autonomy, departure, arrival, routes_db), JSON or TOML")
            .required(true)
            .index(1))
        .arg(Arg::with_name("mission_data")
            .value_name("MISSION_DATA")
            .help("Countdown and bounty hunter sightings, JSON or TOML")
            .required(true)
            .index(2))
        .arg(Arg::with_name("strategy")
            .long("strategy")
            .value_name("STRATEGY")
            .help("How to search the journeys")
            .possible_values(&["memoized", "exhaustive"])
            .default_value("memoized")
            .takes_value(true))
        .arg(Arg::with_name("json")
            .long("json")
            .help("Print the report as JSON"))
        .arg(Arg::with_name("verbose")
            .short("v")
            .long("verbose")
            .multiple(true)
            .help("Log more, repeat for even more (RUST_LOG overrides)"))
        .get_matches();

    let verbosity = matches.occurrences_of("verbose");
    env_logger::Builder::new()
        .filter_level(match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        })
        .parse_default_env()
        .init();

    match run(&matches) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            eprintln!("{} {:#}", "error:".red().bold(), error);
            process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<String> {
    let config_path = matches.value_of("mission_config").context("no mission config given")?;
    let data_path = matches.value_of("mission_data").context("no mission data given")?;
    let strategy: SearchStrategy = matches
        .value_of("strategy")
        .unwrap_or("memoized")
        .parse()
        .map_err(anyhow::Error::msg)?;

    let mission = MissionData::load(data_path)
        .with_context(|| format!("cannot compute the odds for {}", data_path))?;
    let mut service = OddsService::new(strategy);
    service.load_fleet(config_path)?;

    if matches.occurrences_of("verbose") > 0 {
        eprintln!("{}", "♞ Loading Data Completed".on_green().bold());
    }

    let report = service
        .assess(&mission)
        .with_context(|| format!("cannot compute the odds for {}", data_path))?;

    if matches.occurrences_of("verbose") > 0 {
        match report.min_encounters {
            Some(encounters) => eprintln!("safest journey meets bounty hunters {} times", encounters),
            None => eprintln!("{}", "arrival cannot be reached in time".yellow()),
        }
    }

    if matches.is_present("json") {
        Ok(serde_json::to_string(&report).context("cannot encode the odds report")?)
    } else {
        Ok(report.odds.to_string())
    }
}
