//! parking rules for park-and-ride facilities.

use super::logit_ops::EPSILON;
use crate::model::{
    network::{ParkAndRideNode, ParkingType},
    query::{time_of_day::MINUTES_IN_A_DAY, TravelQuery},
};

/// hours a vehicle is left at the facility
pub fn parking_duration_hours(query: &TravelQuery) -> f64 {
    match query.return_minute {
        Some(ret) => (ret - query.outbound_minute) as f64 / 60.0,
        None => query.purpose.default_parking_hours(),
    }
}

/// cost of leaving a car at the node for this query, or None when the stay is
/// longer than the node allows
pub fn car_parking_cost(node: &ParkAndRideNode, query: &TravelQuery) -> Option<f64> {
    let duration = match node.parking_type {
        ParkingType::Paid | ParkingType::FreeTimeLimited => parking_duration_hours(query),
        ParkingType::Free => 0.0,
    };
    if node.parking_type == ParkingType::FreeTimeLimited
        && duration > ParkingType::TIME_LIMIT_HOURS + EPSILON
    {
        return None;
    }
    if node.parking_type.is_free() {
        Some(0.0)
    } else {
        Some(node.hourly_price(query.outbound_minute) * duration)
    }
}

/// estimated minute at which the traveler switches from the access mode to transit
pub fn mode_change_minute(outbound_minute: i32, transit_time: f64) -> i32 {
    let minute = (outbound_minute as f64 - transit_time / 2.0 - 3.0) as i32;
    minute.clamp(0, MINUTES_IN_A_DAY - 1)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::{
        network::{ParkAndRideNode, ParkingType},
        query::{Purpose, TravelQuery, TripEndpoint},
    };

    fn mock_node(parking_type: ParkingType) -> ParkAndRideNode {
        let mut node = ParkAndRideNode::new(1, 1, 1, 100.0, 0.0, parking_type, true, 5, 100.0);
        node.hourly_cost = [0.5, 1.5, 1.0];
        node
    }

    fn mock_query(purpose: Purpose) -> TravelQuery {
        TravelQuery::new(TripEndpoint::Parcel(1), TripEndpoint::Parcel(2), 400, purpose, -0.2, -0.03)
    }

    #[test]
    fn test_one_way_durations_by_purpose() {
        assert_eq!(parking_duration_hours(&mock_query(Purpose::Work)), 8.0);
        assert_eq!(parking_duration_hours(&mock_query(Purpose::School)), 6.0);
        assert_eq!(parking_duration_hours(&mock_query(Purpose::Social)), 3.0);
        assert_eq!(parking_duration_hours(&mock_query(Purpose::Shopping)), 2.0);
        let round_trip = mock_query(Purpose::Work).with_return(490);
        assert_eq!(parking_duration_hours(&round_trip), 1.5);
    }

    #[test]
    fn test_car_parking_cost_by_type() {
        let query = mock_query(Purpose::Work).with_return(520);
        assert_eq!(car_parking_cost(&mock_node(ParkingType::Free), &query), Some(0.0));
        assert_eq!(car_parking_cost(&mock_node(ParkingType::Paid), &query), Some(3.0));
        assert_eq!(car_parking_cost(&mock_node(ParkingType::FreeTimeLimited), &query), Some(0.0));
        let long_stay = mock_query(Purpose::Work);
        assert_eq!(car_parking_cost(&mock_node(ParkingType::FreeTimeLimited), &long_stay), None);
    }

    #[test]
    fn test_mode_change_minute_clamped() {
        assert_eq!(mode_change_minute(400, 30.0), 382);
        assert_eq!(mode_change_minute(5, 60.0), 0);
    }
}
