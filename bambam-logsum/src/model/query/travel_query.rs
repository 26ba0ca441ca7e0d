use super::{Purpose, TripEndpoint};
use crate::model::LogsumError;
use serde::{Deserialize, Serialize};

/// one request to the path choice model. immutable for the duration of an evaluation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TravelQuery {
    pub origin: TripEndpoint,
    pub destination: TripEndpoint,
    pub outbound_minute: i32,
    pub return_minute: Option<i32>,
    pub purpose: Purpose,
    pub cost_coefficient: f64,
    pub time_coefficient: f64,
    pub is_driving_age: bool,
    pub household_cars: u32,
    pub transit_pass: bool,
    pub transit_discount: f64,
    pub random_choice: bool,
}

impl TravelQuery {
    pub fn new(
        origin: TripEndpoint,
        destination: TripEndpoint,
        outbound_minute: i32,
        purpose: Purpose,
        cost_coefficient: f64,
        time_coefficient: f64,
    ) -> TravelQuery {
        TravelQuery {
            origin,
            destination,
            outbound_minute,
            return_minute: None,
            purpose,
            cost_coefficient,
            time_coefficient,
            is_driving_age: true,
            household_cars: 1,
            transit_pass: false,
            transit_discount: 0.0,
            random_choice: false,
        }
    }

    pub fn with_return(mut self, return_minute: i32) -> Self {
        self.return_minute = Some(return_minute);
        self
    }

    pub fn with_random_choice(mut self, random_choice: bool) -> Self {
        self.random_choice = random_choice;
        self
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_minute.is_some()
    }

    /// 2 for round trips, 1 otherwise
    pub fn leg_count(&self) -> f64 {
        if self.is_round_trip() {
            2.0
        } else {
            1.0
        }
    }

    /// checks the values that would otherwise only fail deep inside a utility formula
    pub fn validate(&self) -> Result<(), LogsumError> {
        if !self.time_coefficient.is_finite() || !self.cost_coefficient.is_finite() {
            return Err(LogsumError::InvalidArgument(format!(
                "query from {} to {} has non-finite coefficients (time {}, cost {})",
                self.origin, self.destination, self.time_coefficient, self.cost_coefficient
            )));
        }
        if let Some(ret) = self.return_minute {
            if ret < self.outbound_minute {
                return Err(LogsumError::InvalidArgument(format!(
                    "return minute {ret} precedes outbound minute {}",
                    self.outbound_minute
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.transit_discount) {
            return Err(LogsumError::InvalidArgument(format!(
                "transit discount {} outside of [0, 1]",
                self.transit_discount
            )));
        }
        Ok(())
    }
}
