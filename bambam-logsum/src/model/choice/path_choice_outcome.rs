use crate::model::{
    mode::{Mode, PathType},
    utility::{logit_ops::GENERALIZED_TIME_UNAVAILABLE, PathAlternative},
};
use serde::Serialize;

/// the result of one mode's path choice for one query
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PathChoiceOutcome {
    pub mode: Mode,
    pub available: bool,
    pub path_type: Option<PathType>,
    pub time: f64,
    pub distance: f64,
    pub cost: f64,
    pub utility: f64,
    /// ln(Σ exp(utility)) expressed in minutes, or -999 when unavailable
    pub generalized_time_logsum: f64,
    pub generalized_time_chosen: f64,
    pub node_id: Option<i64>,
    pub origin_stop_area: Option<i64>,
    pub destination_stop_area: Option<i64>,
    pub transit_time: f64,
    pub transit_distance: f64,
    pub transit_cost: f64,
    pub transit_generalized_time: f64,
    pub walk_time: f64,
    pub walk_distance: f64,
    pub bike_time: f64,
    pub bike_distance: f64,
    pub bike_cost: f64,
}

impl PathChoiceOutcome {
    pub fn unavailable(mode: Mode) -> PathChoiceOutcome {
        PathChoiceOutcome {
            mode,
            available: false,
            path_type: None,
            time: 0.0,
            distance: 0.0,
            cost: 0.0,
            utility: 0.0,
            generalized_time_logsum: GENERALIZED_TIME_UNAVAILABLE,
            generalized_time_chosen: GENERALIZED_TIME_UNAVAILABLE,
            node_id: None,
            origin_stop_area: None,
            destination_stop_area: None,
            transit_time: 0.0,
            transit_distance: 0.0,
            transit_cost: 0.0,
            transit_generalized_time: 0.0,
            walk_time: 0.0,
            walk_distance: 0.0,
            bike_time: 0.0,
            bike_distance: 0.0,
            bike_cost: 0.0,
        }
    }

    /// the outcome for a chosen alternative. `time_scale` is scale × time coefficient.
    pub fn chosen(chosen: &PathAlternative, logsum: f64, time_scale: f64) -> PathChoiceOutcome {
        PathChoiceOutcome {
            mode: chosen.mode,
            available: true,
            path_type: Some(chosen.path_type),
            time: chosen.time,
            distance: chosen.distance,
            cost: chosen.cost,
            utility: chosen.utility,
            generalized_time_logsum: logsum / time_scale,
            generalized_time_chosen: chosen.utility / time_scale,
            node_id: chosen.node_id,
            origin_stop_area: chosen.origin_stop_area,
            destination_stop_area: chosen.destination_stop_area,
            transit_time: chosen.transit_time,
            transit_distance: chosen.transit_distance,
            transit_cost: chosen.transit_cost,
            transit_generalized_time: chosen.transit_utility / time_scale,
            walk_time: chosen.walk_time,
            walk_distance: chosen.walk_distance,
            bike_time: chosen.bike_time,
            bike_distance: chosen.bike_distance,
            bike_cost: chosen.bike_cost,
        }
    }
}
