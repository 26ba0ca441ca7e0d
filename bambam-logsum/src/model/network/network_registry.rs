use super::{DistanceEntry, DistanceList, NodeRegistry, ParkAndRideNode, Parcel, StopArea, Zone};
use crate::model::LogsumError;
use std::collections::HashMap;

/// in-memory node registry assembled from the run's input tables
#[derive(Debug, Default)]
pub struct NetworkRegistry {
    zones: Vec<Zone>,
    zone_lookup: HashMap<i64, usize>,
    parcels: HashMap<i64, Parcel>,
    nodes: Vec<ParkAndRideNode>,
    node_lookup: HashMap<i64, usize>,
    stop_areas: HashMap<i64, StopArea>,
    parcel_stop_areas: HashMap<i64, DistanceList>,
    parcel_nodes: HashMap<i64, DistanceList>,
}

impl NetworkRegistry {
    /// builds the registry. zone indices are reassigned by position so that they
    /// address rows of the aggregate logsum table.
    pub fn new(
        mut zones: Vec<Zone>,
        parcels: Vec<Parcel>,
        nodes: Vec<ParkAndRideNode>,
        stop_areas: Vec<StopArea>,
    ) -> Result<NetworkRegistry, LogsumError> {
        let mut zone_lookup = HashMap::new();
        for (index, zone) in zones.iter_mut().enumerate() {
            zone.index = index;
            if zone_lookup.insert(zone.id, index).is_some() {
                return Err(LogsumError::InputError(format!(
                    "zone id {} appears more than once",
                    zone.id
                )));
            }
        }
        let mut parcel_map = HashMap::with_capacity(parcels.len());
        for parcel in parcels {
            if !zone_lookup.contains_key(&parcel.zone_id) {
                log::warn!(
                    "parcel {} references unknown zone {}",
                    parcel.id,
                    parcel.zone_id
                );
            }
            parcel_map.insert(parcel.id, parcel);
        }
        let node_lookup = nodes
            .iter()
            .enumerate()
            .map(|(idx, n)| (n.id, idx))
            .collect();
        let stop_areas = stop_areas.into_iter().map(|s| (s.key, s)).collect();
        Ok(NetworkRegistry {
            zones,
            zone_lookup,
            parcels: parcel_map,
            nodes,
            node_lookup,
            stop_areas,
            parcel_stop_areas: HashMap::new(),
            parcel_nodes: HashMap::new(),
        })
    }

    pub fn with_parcel_stop_areas(mut self, lists: HashMap<i64, DistanceList>) -> Self {
        self.parcel_stop_areas = lists;
        self
    }

    pub fn with_parcel_nodes(mut self, lists: HashMap<i64, DistanceList>) -> Self {
        self.parcel_nodes = lists;
        self
    }

    /// mutable access used between iterations to replace shadow prices
    pub fn get_node_mut(&mut self, node_id: i64) -> Option<&mut ParkAndRideNode> {
        let idx = *self.node_lookup.get(&node_id)?;
        self.nodes.get_mut(idx)
    }
}

impl NodeRegistry for NetworkRegistry {
    fn zones(&self) -> &[Zone] {
        &self.zones
    }

    fn get_zone(&self, zone_id: i64) -> Option<&Zone> {
        self.zone_lookup
            .get(&zone_id)
            .and_then(|idx| self.zones.get(*idx))
    }

    fn get_parcel(&self, parcel_id: i64) -> Option<&Parcel> {
        self.parcels.get(&parcel_id)
    }

    fn parcels(&self) -> Box<dyn Iterator<Item = &Parcel> + '_> {
        Box::new(self.parcels.values())
    }

    fn get_node(&self, node_id: i64) -> Option<&ParkAndRideNode> {
        self.node_lookup
            .get(&node_id)
            .and_then(|idx| self.nodes.get(*idx))
    }

    fn all_nodes(&self, predicate: &dyn Fn(&ParkAndRideNode) -> bool) -> Vec<&ParkAndRideNode> {
        self.nodes.iter().filter(|n| predicate(n)).collect()
    }

    fn get_stop_area(&self, key: i64) -> Option<&StopArea> {
        self.stop_areas.get(&key)
    }

    fn stop_areas_near(&self, parcel_id: i64) -> &[DistanceEntry] {
        self.parcel_stop_areas
            .get(&parcel_id)
            .map(|l| l.entries())
            .unwrap_or(&[])
    }

    fn nodes_near(&self, parcel_id: i64) -> &[DistanceEntry] {
        self.parcel_nodes
            .get(&parcel_id)
            .map(|l| l.entries())
            .unwrap_or(&[])
    }
}
