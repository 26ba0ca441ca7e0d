use super::ParkingType;
use crate::model::{
    query::time_of_day::{ParkingBand, MINUTES_IN_A_DAY},
    LogsumError,
};
use std::sync::Mutex;

/// a parking facility where travelers leave a car or bike to board transit.
///
/// the shadow price array is read by the path choice model and replaced between
/// simulation iterations. predicted demand is accumulated behind a lock so that
/// parallel callers may record choices concurrently.
#[derive(Debug)]
pub struct ParkAndRideNode {
    pub id: i64,
    pub zone_id: i64,
    pub parcel_id: i64,
    pub x: f64,
    pub y: f64,
    pub capacity: f64,
    /// daily cost in cents for cars, or daily bike parking cost
    pub cost: f64,
    pub cost_annual: f64,
    pub parking_type: ParkingType,
    /// true for car facilities, false for bike facilities
    pub auto: bool,
    pub nearest_stop_area: i64,
    pub length_to_stop_area: f64,
    /// hourly cost for the overnight, daytime and evening bands
    pub hourly_cost: [f64; 3],
    shadow_price: Vec<f64>,
    predictions: Mutex<f64>,
}

impl ParkAndRideNode {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        zone_id: i64,
        parcel_id: i64,
        capacity: f64,
        cost: f64,
        parking_type: ParkingType,
        auto: bool,
        nearest_stop_area: i64,
        length_to_stop_area: f64,
    ) -> ParkAndRideNode {
        ParkAndRideNode {
            id,
            zone_id,
            parcel_id,
            x: 0.0,
            y: 0.0,
            capacity,
            cost,
            cost_annual: 0.0,
            parking_type,
            auto,
            nearest_stop_area,
            length_to_stop_area,
            hourly_cost: [0.0; 3],
            shadow_price: vec![0.0; MINUTES_IN_A_DAY as usize],
            predictions: Mutex::new(0.0),
        }
    }

    pub fn hourly_price(&self, minute: i32) -> f64 {
        match ParkingBand::from_minute(minute) {
            ParkingBand::Overnight => self.hourly_cost[0],
            ParkingBand::Daytime => self.hourly_cost[1],
            ParkingBand::Evening => self.hourly_cost[2],
        }
    }

    /// bike parking cost: the daily cost, capped by a hundredth of the annual cost
    pub fn bike_parking_cost(&self) -> f64 {
        self.cost.min(self.cost_annual / 100.0)
    }

    /// shadow price at a minute of the day. minutes outside of the day are clamped
    /// into 0..1439.
    pub fn shadow_price(&self, minute: i32) -> f64 {
        let idx = minute.clamp(0, MINUTES_IN_A_DAY - 1) as usize;
        self.shadow_price.get(idx).copied().unwrap_or_default()
    }

    pub fn set_shadow_prices(&mut self, prices: Vec<f64>) -> Result<(), LogsumError> {
        if prices.len() != MINUTES_IN_A_DAY as usize {
            return Err(LogsumError::InvalidArgument(format!(
                "node {} expects {} shadow prices, found {}",
                self.id,
                MINUTES_IN_A_DAY,
                prices.len()
            )));
        }
        self.shadow_price = prices;
        Ok(())
    }

    /// adds predicted demand at this node
    pub fn record_prediction(&self, weight: f64) -> Result<(), LogsumError> {
        let mut predictions = self.predictions.lock().map_err(|e| {
            LogsumError::InvalidArgument(format!(
                "prediction accumulator for node {} is poisoned: {e}",
                self.id
            ))
        })?;
        *predictions += weight;
        Ok(())
    }

    /// returns the accumulated demand and resets it to zero
    pub fn drain_predictions(&self) -> Result<f64, LogsumError> {
        let mut predictions = self.predictions.lock().map_err(|e| {
            LogsumError::InvalidArgument(format!(
                "prediction accumulator for node {} is poisoned: {e}",
                self.id
            ))
        })?;
        let total = *predictions;
        *predictions = 0.0;
        Ok(total)
    }
}

#[cfg(test)]
mod test {
    use super::ParkAndRideNode;
    use crate::model::network::ParkingType;
    use rayon::prelude::*;

    fn mock_node() -> ParkAndRideNode {
        ParkAndRideNode::new(7, 1, 100, 50.0, 300.0, ParkingType::Paid, true, 20, 150.0)
    }

    #[test]
    fn test_shadow_price_clamps_minute() {
        let mut node = mock_node();
        let mut prices = vec![0.0; 1440];
        prices[0] = -1.0;
        prices[1439] = -2.0;
        node.set_shadow_prices(prices)
            .expect("test invariant failed, 1440 prices expected");
        assert_eq!(node.shadow_price(-15), -1.0);
        assert_eq!(node.shadow_price(5000), -2.0);
        assert!(node.set_shadow_prices(vec![0.0; 3]).is_err());
    }

    #[test]
    fn test_parallel_predictions_accumulate() {
        let node = mock_node();
        (0..1000).into_par_iter().for_each(|_| {
            node.record_prediction(0.5)
                .expect("test invariant failed, lock poisoned");
        });
        let total = node
            .drain_predictions()
            .expect("test invariant failed, lock poisoned");
        assert_eq!(total, 500.0);
        assert_eq!(node.drain_predictions().expect("lock poisoned"), 0.0);
    }

    #[test]
    fn test_bike_parking_cost_capped_by_annual() {
        let mut node = mock_node();
        node.cost = 2.0;
        node.cost_annual = 100.0;
        assert_eq!(node.bike_parking_cost(), 1.0);
    }
}
