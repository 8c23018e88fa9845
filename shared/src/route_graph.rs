use indexmap::{IndexMap, IndexSet};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;

use crate::location::Location;
use crate::Day;

/// Undirected network of locations weighted by travel time in days.
///
/// Each location maps to exactly one node, each unordered pair of
/// locations to at most one edge. Registering a pair again, in either
/// order, overwrites its travel time.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    graph: UnGraph<Location, Day>,
    nodes: IndexMap<Location, NodeIndex>,
}

impl RouteGraph {
    pub fn new() -> Self {
        RouteGraph::default()
    }

    pub fn from_routes<I, L>(routes: I) -> Self
    where
        I: IntoIterator<Item = (L, L, Day)>,
        L: AsRef<str>,
    {
        let mut graph = RouteGraph::new();
        for (origin, destination, travel_time) in routes {
            graph.add_route(origin, destination, travel_time);
        }
        graph
    }

    pub fn add_route(&mut self, origin: impl AsRef<str>, destination: impl AsRef<str>, travel_time: Day) {
        let a = self.node(origin.as_ref());
        let b = self.node(destination.as_ref());
        self.graph.update_edge(a, b, travel_time);
    }

    fn node(&mut self, location: &str) -> NodeIndex {
        if let Some(index) = self.nodes.get(location) {
            return *index;
        }
        let location = Location::from(location);
        let index = self.graph.add_node(location.clone());
        self.nodes.insert(location, index);
        index
    }

    /// Locations one direct route away. Empty for an unknown location.
    pub fn neighbors(&self, location: &str) -> IndexSet<&Location> {
        match self.nodes.get(location) {
            Some(&index) => self
                .routes_from(index)
                .into_iter()
                .map(|(next, _)| &self.graph[next])
                .collect(),
            None => IndexSet::new(),
        }
    }

    /// Travel time of the direct route between two locations, if there is one.
    pub fn travel_time(&self, origin: &str, destination: &str) -> Option<Day> {
        let a = *self.nodes.get(origin)?;
        let b = *self.nodes.get(destination)?;
        self.graph.find_edge(a, b).map(|edge| self.graph[edge])
    }

    /// Direct routes leaving `index`, one entry per neighbouring node.
    pub fn routes_from(&self, index: NodeIndex) -> Vec<(NodeIndex, Day)> {
        let mut routes: IndexMap<NodeIndex, Day> = IndexMap::new();
        for edge in self.graph.edges(index) {
            // undirected edges may be reported from either end
            let next = if edge.source() == index {
                edge.target()
            } else {
                edge.source()
            };
            routes.insert(next, *edge.weight());
        }
        routes.into_iter().collect()
    }

    pub fn node_index(&self, location: &str) -> Option<NodeIndex> {
        self.nodes.get(location).copied()
    }

    pub fn location(&self, index: NodeIndex) -> &Location {
        &self.graph[index]
    }

    pub fn contains(&self, location: &str) -> bool {
        self.nodes.contains_key(location)
    }

    /// Locations in the order they were first registered.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.nodes.keys()
    }

    pub fn location_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn route_count(&self) -> usize {
        self.graph.edge_count()
    }
}
