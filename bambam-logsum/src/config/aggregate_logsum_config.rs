use crate::model::query::time_of_day;
use serde::{Deserialize, Serialize};

/// settings for the zone-level accessibility batch
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AggregateLogsumConfig {
    /// number of worker threads. 0 lets rayon decide.
    pub workers: usize,
    /// representative outbound and return minute of the generated queries
    pub representative_minute: i32,
    pub base_time_coefficient: f64,
    /// value of time in currency units per hour for the low, medium and high segments
    pub value_of_time_divisors: [f64; 3],
    /// parcels within this many miles of transit fall into the near-transit subzone
    pub subzone_transit_distance: f64,
    pub size_multiplier: f64,
    /// subzones whose size falls at or below this value are skipped
    pub minimum_size: f64,
    /// mode logsum used when no mode is available
    pub unavailable_mode_logsum: f64,
}

impl Default for AggregateLogsumConfig {
    fn default() -> Self {
        Self {
            workers: 0,
            representative_minute: time_of_day::NINE_AM,
            base_time_coefficient: -0.02,
            value_of_time_divisors: [50.0, 60.0, 70.0],
            subzone_transit_distance: 0.5,
            size_multiplier: 1.0,
            minimum_size: -50.0,
            unavailable_mode_logsum: -30.0,
        }
    }
}
