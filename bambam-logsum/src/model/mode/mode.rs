use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// travel modes evaluated by the path choice model. the first six are single-leg
/// modes, the rest combine an access leg, a transit leg and an egress leg.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Walk,
    Bike,
    Sov,
    HovDriver,
    HovPassenger,
    Transit,
    CarParkRideWalk,
    CarParkRideBike,
    BikeParkRideWalk,
    BikeParkRideBike,
    BikeOnTransit,
    WalkRideBike,
}

impl Mode {
    pub const ALL: [Mode; 12] = [
        Mode::Walk,
        Mode::Bike,
        Mode::Sov,
        Mode::HovDriver,
        Mode::HovPassenger,
        Mode::Transit,
        Mode::CarParkRideWalk,
        Mode::CarParkRideBike,
        Mode::BikeParkRideWalk,
        Mode::BikeParkRideBike,
        Mode::BikeOnTransit,
        Mode::WalkRideBike,
    ];

    /// the mode used to address skim matrices for this travel mode. every
    /// transit-combined mode reads transit skims except bike-on-transit, which
    /// has skims of its own.
    pub fn skim_mode(&self) -> Mode {
        match self {
            Mode::BikeOnTransit => Mode::BikeOnTransit,
            Mode::CarParkRideWalk
            | Mode::CarParkRideBike
            | Mode::BikeParkRideWalk
            | Mode::BikeParkRideBike
            | Mode::WalkRideBike => Mode::Transit,
            other => *other,
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Mode::Sov | Mode::HovDriver | Mode::HovPassenger)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Walk => "walk",
            Mode::Bike => "bike",
            Mode::Sov => "sov",
            Mode::HovDriver => "hov_driver",
            Mode::HovPassenger => "hov_passenger",
            Mode::Transit => "transit",
            Mode::CarParkRideWalk => "car_park_ride_walk",
            Mode::CarParkRideBike => "car_park_ride_bike",
            Mode::BikeParkRideWalk => "bike_park_ride_walk",
            Mode::BikeParkRideBike => "bike_park_ride_bike",
            Mode::BikeOnTransit => "bike_on_transit",
            Mode::WalkRideBike => "walk_ride_bike",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Mode::ALL
            .iter()
            .find(|m| m.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown mode '{s}'"))
    }
}

#[cfg(test)]
mod test {
    use super::Mode;

    #[test]
    fn test_skim_mode_for_combined_modes() {
        assert_eq!(Mode::CarParkRideWalk.skim_mode(), Mode::Transit);
        assert_eq!(Mode::WalkRideBike.skim_mode(), Mode::Transit);
        assert_eq!(Mode::BikeOnTransit.skim_mode(), Mode::BikeOnTransit);
        assert_eq!(Mode::HovPassenger.skim_mode(), Mode::HovPassenger);
    }

    #[test]
    fn test_parse_mode_names() {
        let mode: Mode = " Car_Park_Ride_Bike ".parse().expect("test invariant failed");
        assert_eq!(mode, Mode::CarParkRideBike);
        assert!("teleport".parse::<Mode>().is_err());
    }
}
