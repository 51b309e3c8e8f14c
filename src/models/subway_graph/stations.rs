use petgraph::graph::NodeIndex;
use super::{StationNode, SubwayGraph};
use crate::models::{Station, StationId};

/// Extension trait for station-related operations on `SubwayGraph`
pub trait Stations {
    /// Add a station node if no station with that name exists, return its `NodeIndex`
    fn add_or_get_station(&mut self, station: &Station) -> NodeIndex;

    /// Get the station stored at a `NodeIndex`
    fn get_station(&self, index: NodeIndex) -> Option<&Station>;

    /// Get `NodeIndex` by station name
    fn get_station_index(&self, name: &str) -> Option<NodeIndex>;

    /// Get `NodeIndex` by station id
    fn get_station_index_by_id(&self, id: StationId) -> Option<NodeIndex>;
}

impl Stations for SubwayGraph {
    fn add_or_get_station(&mut self, station: &Station) -> NodeIndex {
        let index = if let Some(&index) = self.station_name_to_index.get(station.name()) {
            index
        } else {
            let index = self.graph.add_node(StationNode { station: station.clone() });
            self.station_name_to_index.insert(station.name().to_string(), index);
            index
        };

        // Lines may carry copies made before registration; the first id seen wins
        if let Some(id) = station.id() {
            self.station_id_to_index.entry(id).or_insert(index);
            if let Some(node) = self.graph.node_weight_mut(index) {
                node.station.assign_id(id);
            }
        }
        index
    }

    fn get_station(&self, index: NodeIndex) -> Option<&Station> {
        self.graph.node_weight(index).map(|node| &node.station)
    }

    fn get_station_index(&self, name: &str) -> Option<NodeIndex> {
        self.station_name_to_index.get(name).copied()
    }

    fn get_station_index_by_id(&self, id: StationId) -> Option<NodeIndex> {
        self.station_id_to_index.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_or_get_station_dedupes_by_name() {
        let mut network = SubwayGraph::new();
        let first = network.add_or_get_station(&Station::new("강남역").expect("valid name"));
        let again = network.add_or_get_station(&Station::with_id(StationId(1), "강남역").expect("valid name"));

        assert_eq!(first, again);
        assert_eq!(network.graph.node_count(), 1);
        // The unregistered copy picked up the id of the later one
        assert_eq!(network.get_station_index_by_id(StationId(1)), Some(first));
        assert_eq!(network.get_station(first).and_then(Station::id), Some(StationId(1)));
    }

    #[test]
    fn test_lookups() {
        let mut network = SubwayGraph::new();
        let idx = network.add_or_get_station(&Station::with_id(StationId(4), "남부터미널역").expect("valid name"));

        assert_eq!(network.get_station_index("남부터미널역"), Some(idx));
        assert_eq!(network.get_station_index("없는역"), None);
        assert_eq!(network.get_station_index_by_id(StationId(4)), Some(idx));
        assert_eq!(network.get_station_index_by_id(StationId(5)), None);
        assert_eq!(network.get_station(idx).map(Station::name), Some("남부터미널역"));
    }
}
