//! row layouts of the input tables and their conversion into model types.

use super::input_ops::deserialize_flag;
use crate::model::{
    mode::Mode,
    network::{Parcel, ParcelEmployment, ParkAndRideNode, ParkingType, StopArea, TransitDistances, Zone},
    query::{Purpose, TravelQuery, TripEndpoint},
};
use serde::Deserialize;

fn no_transit() -> f64 {
    -1.0
}

fn one() -> f64 {
    1.0
}

fn yes() -> bool {
    true
}

fn one_car() -> u32 {
    1
}

fn unbounded() -> f64 {
    f64::INFINITY
}

fn first_minute() -> i32 {
    1
}

fn last_minute() -> i32 {
    1440
}

fn unknown_parcel() -> i64 {
    -1
}

#[derive(Deserialize, Debug)]
pub struct ZoneRecord {
    pub zone_id: i64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub destination_eligible: bool,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub nearest_stop_area: Option<i64>,
}

impl From<ZoneRecord> for Zone {
    fn from(r: ZoneRecord) -> Self {
        Zone {
            id: r.zone_id,
            index: 0,
            destination_eligible: r.destination_eligible,
            x: r.x,
            y: r.y,
            nearest_stop_area: r.nearest_stop_area.filter(|key| *key > 0),
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ParcelRecord {
    pub parcel_id: i64,
    pub zone_id: i64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub thousands_square_length_units: f64,
    #[serde(default)]
    pub households: f64,
    #[serde(default)]
    pub students_k8: f64,
    #[serde(default)]
    pub students_hs: f64,
    #[serde(default)]
    pub students_uni: f64,
    #[serde(default)]
    pub emp_education: f64,
    #[serde(default)]
    pub emp_food: f64,
    #[serde(default)]
    pub emp_government: f64,
    #[serde(default)]
    pub emp_industrial: f64,
    #[serde(default)]
    pub emp_medical: f64,
    #[serde(default)]
    pub emp_office: f64,
    #[serde(default)]
    pub emp_retail: f64,
    #[serde(default)]
    pub emp_service: f64,
    #[serde(default)]
    pub emp_total: f64,
    #[serde(default = "no_transit")]
    pub dist_local_bus: f64,
    #[serde(default = "no_transit")]
    pub dist_light_rail: f64,
    #[serde(default = "no_transit")]
    pub dist_express_bus: f64,
    #[serde(default = "no_transit")]
    pub dist_commuter_rail: f64,
    #[serde(default = "no_transit")]
    pub dist_ferry: f64,
    #[serde(default = "no_transit")]
    pub dist_any_transit: f64,
    #[serde(default)]
    pub parking_price_23_08: f64,
    #[serde(default)]
    pub parking_price_08_18: f64,
    #[serde(default)]
    pub parking_price_18_23: f64,
    #[serde(default)]
    pub parking_search_21_05: f64,
    #[serde(default)]
    pub parking_search_05_06: f64,
    #[serde(default)]
    pub parking_search_06_07: f64,
    #[serde(default)]
    pub parking_search_07_08: f64,
    #[serde(default)]
    pub parking_search_08_09: f64,
    #[serde(default)]
    pub parking_search_09_15: f64,
    #[serde(default)]
    pub parking_search_15_16: f64,
    #[serde(default)]
    pub parking_search_16_17: f64,
    #[serde(default)]
    pub parking_search_17_18: f64,
    #[serde(default)]
    pub parking_search_18_21: f64,
    #[serde(default = "one")]
    pub circuity_half_mile: f64,
    #[serde(default = "one")]
    pub circuity_one_mile: f64,
    #[serde(default = "one")]
    pub circuity_mile_and_a_half: f64,
    #[serde(default)]
    pub node_id: Option<i64>,
}

impl From<ParcelRecord> for Parcel {
    fn from(r: ParcelRecord) -> Self {
        Parcel {
            id: r.parcel_id,
            zone_id: r.zone_id,
            x: r.x,
            y: r.y,
            thousands_square_length_units: r.thousands_square_length_units,
            households: r.households,
            students_k8: r.students_k8,
            students_hs: r.students_hs,
            students_uni: r.students_uni,
            employment: ParcelEmployment {
                education: r.emp_education,
                food: r.emp_food,
                government: r.emp_government,
                industrial: r.emp_industrial,
                medical: r.emp_medical,
                office: r.emp_office,
                retail: r.emp_retail,
                service: r.emp_service,
                total: r.emp_total,
            },
            transit_distances: TransitDistances {
                local_bus: r.dist_local_bus,
                light_rail: r.dist_light_rail,
                express_bus: r.dist_express_bus,
                commuter_rail: r.dist_commuter_rail,
                ferry: r.dist_ferry,
                any_transit: r.dist_any_transit,
            },
            parking_hourly_price: [
                r.parking_price_23_08,
                r.parking_price_08_18,
                r.parking_price_18_23,
            ],
            parking_search_minutes: [
                r.parking_search_21_05,
                r.parking_search_05_06,
                r.parking_search_06_07,
                r.parking_search_07_08,
                r.parking_search_08_09,
                r.parking_search_09_15,
                r.parking_search_15_16,
                r.parking_search_16_17,
                r.parking_search_17_18,
                r.parking_search_18_21,
            ],
            circuity_ratios: [
                r.circuity_half_mile,
                r.circuity_one_mile,
                r.circuity_mile_and_a_half,
            ],
            node_id: r.node_id.filter(|id| *id > 0),
        }
    }
}

/// one value of a long-format skim table
#[derive(Deserialize, Debug)]
pub struct SkimRecord {
    pub variable: String,
    pub mode: String,
    pub path_type: String,
    #[serde(default)]
    pub vot_min: f64,
    #[serde(default = "unbounded")]
    pub vot_max: f64,
    #[serde(default = "first_minute")]
    pub minute_start: i32,
    #[serde(default = "last_minute")]
    pub minute_end: i32,
    pub origin: i64,
    pub destination: i64,
    pub value: f64,
    #[serde(default)]
    pub blend_variable: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct NodeRecord {
    pub node_id: i64,
    pub zone_id: i64,
    pub parcel_id: i64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub capacity: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub cost_annual: f64,
    pub parking_type: i64,
    #[serde(deserialize_with = "deserialize_flag")]
    pub auto: bool,
    pub nearest_stop_area: i64,
    #[serde(default)]
    pub length_to_stop_area: f64,
    #[serde(default)]
    pub cost_23_08: f64,
    #[serde(default)]
    pub cost_08_18: f64,
    #[serde(default)]
    pub cost_18_23: f64,
}

impl TryFrom<NodeRecord> for ParkAndRideNode {
    type Error = String;

    fn try_from(r: NodeRecord) -> Result<Self, Self::Error> {
        let parking_type = ParkingType::try_from(r.parking_type)
            .map_err(|e| format!("node {}: {e}", r.node_id))?;
        let mut node = ParkAndRideNode::new(
            r.node_id,
            r.zone_id,
            r.parcel_id,
            r.capacity,
            r.cost,
            parking_type,
            r.auto,
            r.nearest_stop_area,
            r.length_to_stop_area,
        );
        node.x = r.x;
        node.y = r.y;
        node.cost_annual = r.cost_annual;
        node.hourly_cost = [r.cost_23_08, r.cost_08_18, r.cost_18_23];
        Ok(node)
    }
}

#[derive(Deserialize, Debug)]
pub struct StopAreaRecord {
    pub stop_area_key: i64,
    pub zone_id: i64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub bike_on_board_terminal: bool,
}

impl From<StopAreaRecord> for StopArea {
    fn from(r: StopAreaRecord) -> Self {
        StopArea {
            key: r.stop_area_key,
            zone_id: r.zone_id,
            bike_on_board_terminal: r.bike_on_board_terminal,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct ParcelStopAreaRecord {
    pub parcel_id: i64,
    pub stop_area_key: i64,
    pub length: f64,
}

#[derive(Deserialize, Debug)]
pub struct ParcelNodeRecord {
    pub parcel_id: i64,
    pub node_zone_id: i64,
    pub length: f64,
}

#[derive(Deserialize, Debug)]
pub struct NodeDistanceRecord {
    pub origin_node: i64,
    pub destination_node: i64,
    pub length: f64,
}

/// a park-and-ride shadow price for one minute of the day
#[derive(Deserialize, Debug)]
pub struct ShadowPriceRecord {
    pub node_id: i64,
    pub minute: i32,
    pub price: f64,
}

#[derive(Deserialize, Debug)]
pub struct QueryRecord {
    #[serde(default = "unknown_parcel")]
    pub origin_parcel: i64,
    #[serde(default = "unknown_parcel")]
    pub destination_parcel: i64,
    #[serde(default)]
    pub origin_zone: Option<i64>,
    #[serde(default)]
    pub destination_zone: Option<i64>,
    pub outbound_minute: i32,
    #[serde(default)]
    pub return_minute: Option<i32>,
    pub purpose: String,
    pub cost_coefficient: f64,
    pub time_coefficient: f64,
    #[serde(default = "yes", deserialize_with = "deserialize_flag")]
    pub driving_age: bool,
    #[serde(default = "one_car")]
    pub household_cars: u32,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub transit_pass: bool,
    #[serde(default)]
    pub transit_discount: f64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub random_choice: bool,
    /// `|`-separated mode names
    pub modes: String,
}

fn endpoint(parcel: i64, zone: Option<i64>) -> Result<TripEndpoint, String> {
    match (parcel, zone) {
        (p, _) if p > 0 => Ok(TripEndpoint::Parcel(p)),
        (_, Some(z)) => Ok(TripEndpoint::Zone(z)),
        (p, None) => Err(format!("parcel {p} is not a valid endpoint and no zone is given")),
    }
}

impl QueryRecord {
    pub fn into_query(self) -> Result<(TravelQuery, Vec<Mode>), String> {
        let origin = endpoint(self.origin_parcel, self.origin_zone)?;
        let destination = endpoint(self.destination_parcel, self.destination_zone)?;
        let purpose: Purpose = self.purpose.parse()?;
        let modes = self
            .modes
            .split('|')
            .filter(|m| !m.trim().is_empty())
            .map(|m| m.parse::<Mode>())
            .collect::<Result<Vec<_>, _>>()?;
        let mut query = TravelQuery::new(
            origin,
            destination,
            self.outbound_minute,
            purpose,
            self.cost_coefficient,
            self.time_coefficient,
        )
        .with_random_choice(self.random_choice);
        query.return_minute = self.return_minute;
        query.is_driving_age = self.driving_age;
        query.household_cars = self.household_cars;
        query.transit_pass = self.transit_pass;
        query.transit_discount = self.transit_discount;
        Ok((query, modes))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn decode<T: serde::de::DeserializeOwned>(data: &str) -> T {
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        reader
            .deserialize::<T>()
            .next()
            .expect("test invariant failed, no rows")
            .expect("test invariant failed, row did not decode")
    }

    #[test]
    fn test_parcel_defaults() {
        let parcel: Parcel =
            decode::<ParcelRecord>("parcel_id,zone_id,households,emp_total\n5,2,10,4\n").into();
        assert_eq!(parcel.households, 10.0);
        assert_eq!(parcel.employment.total, 4.0);
        assert_eq!(parcel.transit_distances.any_transit, -1.0);
        assert_eq!(parcel.circuity_ratios, [1.0; 3]);
        assert_eq!(parcel.node_id, None);
    }

    #[test]
    fn test_zone_keyed_query() {
        let record = decode::<QueryRecord>(
            "origin_parcel,origin_zone,destination_parcel,outbound_minute,return_minute,purpose,cost_coefficient,time_coefficient,modes\n\
             -1,4,17,420,,shopping,-0.15,-0.02,walk|transit\n",
        );
        let (query, modes) = record.into_query().expect("test invariant failed, bad query");
        assert_eq!(query.origin, TripEndpoint::Zone(4));
        assert_eq!(query.destination, TripEndpoint::Parcel(17));
        assert_eq!(query.return_minute, None);
        assert!(query.is_driving_age);
        assert_eq!(modes, vec![Mode::Walk, Mode::Transit]);
    }

    #[test]
    fn test_unknown_parking_type() {
        let record = decode::<NodeRecord>(
            "node_id,zone_id,parcel_id,capacity,parking_type,auto,nearest_stop_area\n1,2,3,50,9,1,4\n",
        );
        assert!(ParkAndRideNode::try_from(record).is_err());
    }
}
