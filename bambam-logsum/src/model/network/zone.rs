use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Zone {
    pub id: i64,
    /// position of this zone in the registry and in the aggregate logsum table
    pub index: usize,
    pub destination_eligible: bool,
    pub x: f64,
    pub y: f64,
    /// stop area used when a zone-keyed transit query runs with stop areas enabled
    pub nearest_stop_area: Option<i64>,
}
