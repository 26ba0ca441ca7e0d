use crate::model::{choice::PathChoiceOutcome, query::TravelQuery};
use serde::Serialize;

/// one (query, mode) outcome in the query application's output
#[derive(Serialize, Clone, Debug)]
pub struct OutcomeRow {
    pub query_index: usize,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub available: bool,
    pub path_type: Option<String>,
    pub time: f64,
    pub distance: f64,
    pub cost: f64,
    pub utility: f64,
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

impl OutcomeRow {
    pub fn new(query_index: usize, query: &TravelQuery, o: &PathChoiceOutcome) -> OutcomeRow {
        OutcomeRow {
            query_index,
            origin: query.origin.to_string(),
            destination: query.destination.to_string(),
            mode: o.mode.to_string(),
            available: o.available,
            path_type: o.path_type.map(|p| p.to_string()),
            time: o.time,
            distance: o.distance,
            cost: o.cost,
            utility: o.utility,
            generalized_time_logsum: o.generalized_time_logsum,
            generalized_time_chosen: o.generalized_time_chosen,
            node_id: o.node_id,
            origin_stop_area: o.origin_stop_area,
            destination_stop_area: o.destination_stop_area,
            transit_time: o.transit_time,
            transit_distance: o.transit_distance,
            transit_cost: o.transit_cost,
            transit_generalized_time: o.transit_generalized_time,
            walk_time: o.walk_time,
            walk_distance: o.walk_distance,
            bike_time: o.bike_time,
            bike_distance: o.bike_distance,
            bike_cost: o.bike_cost,
        }
    }
}
