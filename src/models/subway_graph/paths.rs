use petgraph::algo::astar;
use petgraph::visit::EdgeRef;
use super::{Edges, SectionEdge, Stations, SubwayGraph};
use crate::error::{Result, SubwayError};
use crate::models::{Station, StationId};

/// A shortest path through the network
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Source to target, both included
    pub stations: Vec<Station>,
    pub distance: u32,
    /// The edge taken for each hop, `stations.len() - 1` of them
    pub legs: Vec<SectionEdge>,
}

impl Route {
    /// Highest surcharge among the lines actually ridden. Surcharges don't add up
    /// across lines.
    #[must_use]
    pub fn max_surcharge(&self) -> u32 {
        self.legs.iter().map(|leg| leg.surcharge).max().unwrap_or(0)
    }

    /// Names of the lines ridden, in riding order, each listed once
    #[must_use]
    pub fn line_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for leg in &self.legs {
            if !names.contains(&leg.line_name.as_str()) {
                names.push(&leg.line_name);
            }
        }
        names
    }
}

/// Extension trait for path queries on `SubwayGraph`
pub trait Paths {
    /// Find the shortest route between two stations by total distance.
    ///
    /// Runs Dijkstra (A* with a zero heuristic). Among routes of equal length
    /// the result follows petgraph's heap order over the insertion-ordered
    /// graph, so the same snapshot always yields the same route.
    ///
    /// # Errors
    ///
    /// `SameSourceTarget` if both ids are equal, `UnknownStation` if either is
    /// not in the graph, `UnreachablePath` if nothing connects them and
    /// `DistanceOverflow` if the shortest route is longer than a `u32`.
    fn shortest_path(&self, source: StationId, target: StationId) -> Result<Route>;
}

impl Paths for SubwayGraph {
    fn shortest_path(&self, source: StationId, target: StationId) -> Result<Route> {
        if source == target {
            return Err(SubwayError::SameSourceTarget);
        }
        let start = self
            .get_station_index_by_id(source)
            .ok_or(SubwayError::UnknownStation(source))?;
        let goal = self
            .get_station_index_by_id(target)
            .ok_or(SubwayError::UnknownStation(target))?;

        // Costs accumulate in u64 so long routes can't wrap mid-search
        let (distance, nodes) = astar(
            &self.graph,
            start,
            |n| n == goal,
            |e| u64::from(e.weight().distance),
            |_| 0,
        )
        .ok_or(SubwayError::UnreachablePath { from: source, to: target })?;
        let distance = u32::try_from(distance).map_err(|_| SubwayError::DistanceOverflow)?;

        let mut legs = Vec::with_capacity(nodes.len().saturating_sub(1));
        for pair in nodes.windows(2) {
            let edge = self
                .cheapest_edge_between(pair[0], pair[1])
                .and_then(|idx| self.get_edge(idx))
                .ok_or(SubwayError::UnreachablePath { from: source, to: target })?;
            legs.push(edge.clone());
        }

        let stations = nodes
            .iter()
            .filter_map(|&idx| self.get_station(idx).cloned())
            .collect();

        Ok(Route { stations, distance, legs })
    }
}
