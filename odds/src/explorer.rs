use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::str::FromStr;

use log::debug;
use shared::{CustomHashMap, Day, DaySet, MissionConfig, NodeIndex, RouteGraph, ThreatIndex};
use typed_arena::Arena;

use crate::error::ComputationError;
use crate::journey::{Journey, Waypoint};

/// How the journey space is searched for the safest arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Keep one state per (location, elapsed, autonomy) with the fewest
    /// encounters so far.
    #[default]
    Memoized,
    /// Enumerate every successful journey, then score each of them.
    Exhaustive,
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memoized" => Ok(SearchStrategy::Memoized),
            "exhaustive" => Ok(SearchStrategy::Exhaustive),
            other => Err(format!("unknown search strategy `{}`", other)),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SearchStrategy::Memoized => "memoized",
            SearchStrategy::Exhaustive => "exhaustive",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct State {
    node: NodeIndex,
    elapsed: Day,
    autonomy_left: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Move,
    Refuel,
    Wait,
}

#[derive(Debug)]
struct Label<'a> {
    state: State,
    parent: Option<&'a Label<'a>>,
}

/// Breadth-first search over (location, elapsed, autonomy) states.
///
/// From every state three kinds of successors are generated, each only
/// while the countdown is not exceeded:
///
/// * move along a direct route the remaining autonomy covers,
/// * refuel in place for one day, restoring full autonomy,
/// * wait in place for two or more days, burning one day of autonomy per
///   day waited.
///
/// Only a move onto the arrival location ends a journey. A vessel departing
/// from its arrival location has to leave and come back.
pub struct JourneyExplorer<'a> {
    graph: &'a RouteGraph,
    config: &'a MissionConfig,
    countdown: Day,
    adjacency: Vec<Vec<(NodeIndex, Day)>>,
}

impl<'a> JourneyExplorer<'a> {
    pub fn new(
        graph: &'a RouteGraph,
        config: &'a MissionConfig,
        countdown: Day,
    ) -> Result<Self, ComputationError> {
        let adjacency: Vec<Vec<(NodeIndex, Day)>> = (0..graph.location_count())
            .map(|index| graph.routes_from(NodeIndex::new(index)))
            .collect();

        // a zero day hop would let the search circle forever without the clock moving
        for (index, routes) in adjacency.iter().enumerate() {
            if let Some(&(next, travel_time)) = routes.iter().find(|(_, days)| *days == 0) {
                return Err(ComputationError::NonPositiveTravelTime {
                    origin: graph.location(NodeIndex::new(index)).clone(),
                    destination: graph.location(next).clone(),
                    travel_time,
                });
            }
        }

        Ok(JourneyExplorer {
            graph,
            config,
            countdown,
            adjacency,
        })
    }

    fn endpoints(&self) -> Option<(NodeIndex, NodeIndex)> {
        let departure = self.graph.node_index(self.config.departure.as_str())?;
        let arrival = self.graph.node_index(self.config.arrival.as_str())?;
        Some((departure, arrival))
    }

    fn full_tank(&self) -> i64 {
        i64::from(self.config.autonomy)
    }

    fn next_states(&self, state: State) -> impl Iterator<Item = (Action, State)> + '_ {
        let days_left = self.countdown - state.elapsed;

        let moves = self.adjacency[state.node.index()]
            .iter()
            .filter_map(move |&(next, travel_time)| {
                if i64::from(travel_time) <= state.autonomy_left && travel_time <= days_left {
                    Some((
                        Action::Move,
                        State {
                            node: next,
                            elapsed: state.elapsed + travel_time,
                            autonomy_left: state.autonomy_left - i64::from(travel_time),
                        },
                    ))
                } else {
                    None
                }
            });

        let refuel = (days_left >= 1).then(|| {
            (
                Action::Refuel,
                State {
                    node: state.node,
                    elapsed: state.elapsed + 1,
                    autonomy_left: self.full_tank(),
                },
            )
        });

        let waits = (2..=days_left).map(move |days| {
            (
                Action::Wait,
                State {
                    node: state.node,
                    elapsed: state.elapsed + days,
                    autonomy_left: state.autonomy_left - i64::from(days),
                },
            )
        });

        moves.chain(refuel).chain(waits)
    }

    /// Every journey that reaches the arrival location within the countdown.
    ///
    /// No state is ever merged with another, so the amount of work grows
    /// combinatorially with the countdown.
    pub fn explore(&self) -> Vec<Journey> {
        let (departure, arrival) = match self.endpoints() {
            Some(endpoints) => endpoints,
            None => return Vec::new(),
        };

        let arena: Arena<Label> = Arena::new();
        let root: &Label = arena.alloc(Label {
            state: State {
                node: departure,
                elapsed: 0,
                autonomy_left: self.full_tank(),
            },
            parent: None,
        });

        let mut unprocessed_labels: VecDeque<&Label> = VecDeque::with_capacity(1024);
        unprocessed_labels.push_back(root);
        let mut arrived: Vec<&Label> = Vec::new();

        while let Some(label) = unprocessed_labels.pop_front() {
            for (action, state) in self.next_states(label.state) {
                let child: &Label = arena.alloc(Label {
                    state,
                    parent: Some(label),
                });

                if action == Action::Move && state.node == arrival {
                    #[cfg(feature = "journey_debug")]
                    println!("journey found: {}", self.journey(child));
                    arrived.push(child);
                } else {
                    unprocessed_labels.push_back(child);
                }
            }
        }

        debug!(
            "explored {} states, {} journeys reach {}",
            arena.len(),
            arrived.len(),
            self.config.arrival
        );
        arrived.into_iter().map(|label| self.journey(label)).collect()
    }

    fn journey(&self, label: &Label) -> Journey {
        let mut route = Vec::new();
        let mut parent = label.parent;
        while let Some(previous) = parent {
            route.push(Waypoint {
                location: self.graph.location(previous.state.node).clone(),
                day: previous.state.elapsed,
            });
            parent = previous.parent;
        }
        route.reverse();

        Journey {
            location: self.graph.location(label.state.node).clone(),
            elapsed: label.state.elapsed,
            autonomy_left: label.state.autonomy_left,
            route,
        }
    }

    /// Fewest encounters over all journeys that reach the arrival location,
    /// or `None` if it cannot be reached in time.
    ///
    /// Two states with equal location, elapsed days and autonomy have the
    /// same futures, so only the one with fewer encounters so far is kept.
    /// States are settled in order of elapsed days; every action takes at
    /// least one day, so a state's count is final once its day comes up.
    pub fn minimum_encounters(&self, threats: &ThreatIndex) -> Option<u32> {
        let (departure, arrival) = self.endpoints()?;

        let watched: Vec<Option<&DaySet>> = (0..self.graph.location_count())
            .map(|index| threats.days_at(self.graph.location(NodeIndex::new(index)).as_str()))
            .collect();
        let is_watched = |state: &State| {
            watched[state.node.index()].is_some_and(|days| days.contains(&state.elapsed))
        };

        let mut frontier: BTreeMap<Day, CustomHashMap<(NodeIndex, i64), u32>> = BTreeMap::new();
        frontier
            .entry(0)
            .or_default()
            .insert((departure, self.full_tank()), 0);
        let mut best: Option<u32> = None;
        let mut settled = 0usize;

        while let Some((elapsed, states)) = frontier.pop_first() {
            settled += states.len();
            for ((node, autonomy_left), encounters) in states {
                if best.is_some_and(|best| encounters >= best) {
                    continue;
                }
                let state = State {
                    node,
                    elapsed,
                    autonomy_left,
                };

                for (action, next) in self.next_states(state) {
                    if action == Action::Move && next.node == arrival {
                        best = Some(best.map_or(encounters, |best| best.min(encounters)));
                        continue;
                    }

                    let encounters = encounters + u32::from(is_watched(&next));
                    if best.is_some_and(|best| encounters >= best) {
                        continue;
                    }
                    let known = frontier
                        .entry(next.elapsed)
                        .or_default()
                        .entry((next.node, next.autonomy_left))
                        .or_insert(encounters);
                    *known = (*known).min(encounters);
                }
            }

            if best == Some(0) {
                break;
            }
        }

        debug!("settled {} states, fewest encounters {:?}", settled, best);
        best
    }
}
