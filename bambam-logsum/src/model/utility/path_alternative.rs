use super::logit_ops::{self, EPSILON};
use crate::model::{
    mode::{Mode, PathType},
    transit::TransitLeg,
};

/// the impedances and utility of one (mode, path type) alternative for one query
#[derive(Clone, Debug, PartialEq)]
pub struct PathAlternative {
    pub mode: Mode,
    pub path_type: PathType,
    pub available: bool,
    pub time: f64,
    pub distance: f64,
    pub cost: f64,
    pub utility: f64,
    pub exp_utility: f64,
    pub node_id: Option<i64>,
    pub origin_stop_area: Option<i64>,
    pub destination_stop_area: Option<i64>,
    pub transit_time: f64,
    pub transit_distance: f64,
    pub transit_cost: f64,
    pub transit_utility: f64,
    pub walk_time: f64,
    pub walk_distance: f64,
    pub bike_time: f64,
    pub bike_distance: f64,
    pub bike_cost: f64,
}

impl PathAlternative {
    pub fn unavailable(mode: Mode, path_type: PathType) -> PathAlternative {
        PathAlternative {
            mode,
            path_type,
            available: false,
            time: 0.0,
            distance: 0.0,
            cost: 0.0,
            utility: 0.0,
            exp_utility: 0.0,
            node_id: None,
            origin_stop_area: None,
            destination_stop_area: None,
            transit_time: 0.0,
            transit_distance: 0.0,
            transit_cost: 0.0,
            transit_utility: 0.0,
            walk_time: 0.0,
            walk_distance: 0.0,
            bike_time: 0.0,
            bike_distance: 0.0,
            bike_cost: 0.0,
        }
    }

    /// an available alternative with the given impedances. the utility is stored
    /// clamped and exponentiated alongside the raw value.
    pub fn available(
        mode: Mode,
        path_type: PathType,
        time: f64,
        distance: f64,
        cost: f64,
        utility: f64,
    ) -> PathAlternative {
        let mut alternative = PathAlternative::unavailable(mode, path_type);
        alternative.available = true;
        alternative.time = time;
        alternative.distance = distance;
        alternative.cost = cost;
        alternative.set_utility(utility);
        alternative
    }

    pub fn set_utility(&mut self, utility: f64) {
        self.utility = utility;
        self.exp_utility = logit_ops::exp_utility(utility);
    }

    pub fn set_transit_leg(&mut self, leg: &TransitLeg) {
        self.transit_time = leg.time;
        self.transit_distance = leg.distance;
        self.transit_cost = leg.cost;
        self.transit_utility = leg.utility;
    }

    /// true when this alternative contributes to the logsum
    pub fn is_in_choice_set(&self) -> bool {
        self.available && self.exp_utility >= EPSILON
    }
}
