use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::id::{LineId, StationId};
use super::line::Line;
use super::station::Station;

mod edges;
mod paths;
mod stations;

pub use edges::Edges;
pub use paths::{Paths, Route};
pub use stations::Stations;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationNode {
    pub station: Station,
}

/// One section of one line, as seen by the path search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionEdge {
    pub distance: u32,
    pub line_id: Option<LineId>,
    pub line_name: String,
    pub surcharge: u32,
}

/// The whole network folded into one undirected multigraph.
///
/// Built fresh from a snapshot of lines for every query. Overlapping lines
/// keep one edge each between the same pair of stations; the search picks
/// the cheaper one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubwayGraph {
    pub graph: UnGraph<StationNode, SectionEdge>,
    pub station_name_to_index: HashMap<String, NodeIndex>,
    pub station_id_to_index: HashMap<StationId, NodeIndex>,
}

impl SubwayGraph {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: UnGraph::default(),
            station_name_to_index: HashMap::new(),
            station_id_to_index: HashMap::new(),
        }
    }

    /// Fold every section of every line into a graph.
    ///
    /// Lines are visited in slice order and sections in chain order, so the
    /// node and edge indices (and with them the search's tie-breaking) depend
    /// only on the input.
    #[must_use]
    pub fn from_lines(lines: &[Line]) -> Self {
        let mut network = Self::new();
        for line in lines {
            for section in line.sections().as_slice() {
                let up = network.add_or_get_station(section.up_station());
                let down = network.add_or_get_station(section.down_station());
                network.add_section_edge(
                    up,
                    down,
                    SectionEdge {
                        distance: section.distance(),
                        line_id: line.id(),
                        line_name: line.name().to_string(),
                        surcharge: line.surcharge(),
                    },
                );
            }
        }
        crate::log!(
            "Built network graph: {} stations, {} edges from {} lines",
            network.graph.node_count(),
            network.graph.edge_count(),
            lines.len()
        );
        network
    }
}

impl Default for SubwayGraph {
    fn default() -> Self {
        Self::new()
    }
}
