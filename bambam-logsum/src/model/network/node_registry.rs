use super::{DistanceEntry, ParkAndRideNode, Parcel, StopArea, Zone};
use crate::model::utility::logit_ops::EPSILON;

/// read access to zones, parcels, stop areas and parking nodes. implementations
/// must be safe to share between worker threads.
pub trait NodeRegistry: Send + Sync {
    fn zones(&self) -> &[Zone];

    fn get_zone(&self, zone_id: i64) -> Option<&Zone>;

    fn get_parcel(&self, parcel_id: i64) -> Option<&Parcel>;

    fn parcels(&self) -> Box<dyn Iterator<Item = &Parcel> + '_>;

    fn get_node(&self, node_id: i64) -> Option<&ParkAndRideNode>;

    fn all_nodes(&self, predicate: &dyn Fn(&ParkAndRideNode) -> bool) -> Vec<&ParkAndRideNode>;

    fn get_stop_area(&self, key: i64) -> Option<&StopArea>;

    /// stop areas reachable from a parcel, nearest first
    fn stop_areas_near(&self, parcel_id: i64) -> &[DistanceEntry];

    /// park-and-ride node zones reachable from a parcel, nearest first
    fn nodes_near(&self, parcel_id: i64) -> &[DistanceEntry];

    /// usable nodes located in a zone
    fn nodes_in_zone(&self, zone_id: i64, auto: bool) -> Vec<&ParkAndRideNode> {
        self.all_nodes(&|n| n.zone_id == zone_id && n.auto == auto && n.capacity >= EPSILON)
    }
}
