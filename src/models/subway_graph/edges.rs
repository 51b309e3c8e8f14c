use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use super::{SectionEdge, SubwayGraph};

/// Extension trait for edge-related operations on `SubwayGraph`
pub trait Edges {
    /// Add a section edge between two stations, returns the `EdgeIndex`
    fn add_section_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: SectionEdge) -> EdgeIndex;

    /// Get section edge by edge index
    fn get_edge(&self, edge_idx: EdgeIndex) -> Option<&SectionEdge>;

    /// All edges joining two stations, whichever line offers them
    fn edges_between(&self, a: NodeIndex, b: NodeIndex) -> Vec<EdgeIndex>;

    /// The edge a rider would take between two adjacent stations: shortest
    /// first, then lowest surcharge, then lowest index
    fn cheapest_edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex>;
}

impl Edges for SubwayGraph {
    fn add_section_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: SectionEdge) -> EdgeIndex {
        self.graph.add_edge(from, to, edge)
    }

    fn get_edge(&self, edge_idx: EdgeIndex) -> Option<&SectionEdge> {
        self.graph.edge_weight(edge_idx)
    }

    fn edges_between(&self, a: NodeIndex, b: NodeIndex) -> Vec<EdgeIndex> {
        // Undirected edges may be stored either way round
        let mut edges: Vec<_> = self
            .graph
            .edges(a)
            .filter(|e| e.source() == b || e.target() == b)
            .map(|e| e.id())
            .collect();
        edges.sort_unstable();
        edges
    }

    fn cheapest_edge_between(&self, a: NodeIndex, b: NodeIndex) -> Option<EdgeIndex> {
        self.edges_between(a, b).into_iter().min_by_key(|&idx| {
            let weight = &self.graph[idx];
            (weight.distance, weight.surcharge, idx)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stations;
    use crate::models::Station;

    fn edge(line_name: &str, distance: u32, surcharge: u32) -> SectionEdge {
        SectionEdge {
            distance,
            line_id: None,
            line_name: line_name.to_string(),
            surcharge,
        }
    }

    fn create_pair() -> (SubwayGraph, NodeIndex, NodeIndex) {
        let mut network = SubwayGraph::new();
        let a = network.add_or_get_station(&Station::new("A").expect("valid name"));
        let b = network.add_or_get_station(&Station::new("B").expect("valid name"));
        (network, a, b)
    }

    #[test]
    fn test_add_section_edge() {
        let (mut network, a, b) = create_pair();
        let idx = network.add_section_edge(a, b, edge("1호선", 5, 0));

        assert_eq!(network.graph.edge_count(), 1);
        assert_eq!(network.get_edge(idx).map(|e| e.distance), Some(5));
        assert_eq!(network.graph.edge_endpoints(idx), Some((a, b)));
    }

    #[test]
    fn test_edges_between_either_direction() {
        let (mut network, a, b) = create_pair();
        let forward = network.add_section_edge(a, b, edge("1호선", 5, 0));
        let backward = network.add_section_edge(b, a, edge("2호선", 7, 0));

        assert_eq!(network.edges_between(a, b), vec![forward, backward]);
        assert_eq!(network.edges_between(b, a), vec![forward, backward]);
    }

    #[test]
    fn test_cheapest_edge_prefers_distance_then_surcharge() {
        let (mut network, a, b) = create_pair();
        network.add_section_edge(a, b, edge("완행", 7, 0));
        let express = network.add_section_edge(b, a, edge("급행", 5, 900));
        let cheap_express = network.add_section_edge(a, b, edge("급행2", 5, 100));

        assert_eq!(network.cheapest_edge_between(a, b), Some(cheap_express));
        assert_ne!(network.cheapest_edge_between(b, a), Some(express));
    }

    #[test]
    fn test_cheapest_edge_ties_pick_lowest_index() {
        let (mut network, a, b) = create_pair();
        let first = network.add_section_edge(a, b, edge("1호선", 5, 0));
        network.add_section_edge(a, b, edge("2호선", 5, 0));

        assert_eq!(network.cheapest_edge_between(a, b), Some(first));
    }

    #[test]
    fn test_no_edge_between_unconnected() {
        let (mut network, a, _) = create_pair();
        let c = network.add_or_get_station(&Station::new("C").expect("valid name"));
        assert_eq!(network.cheapest_edge_between(a, c), None);
    }
}
