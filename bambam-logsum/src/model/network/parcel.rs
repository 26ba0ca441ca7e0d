use crate::model::{
    mode::PathType,
    query::time_of_day::{self, ParkingBand},
};

/// land use and accessibility attributes of a parcel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parcel {
    pub id: i64,
    pub zone_id: i64,
    pub x: f64,
    pub y: f64,
    pub thousands_square_length_units: f64,
    pub households: f64,
    pub students_k8: f64,
    pub students_hs: f64,
    pub students_uni: f64,
    pub employment: ParcelEmployment,
    pub transit_distances: TransitDistances,
    /// hourly destination parking price for the overnight, daytime and evening bands
    pub parking_hourly_price: [f64; 3],
    /// minutes spent searching for parking in each of the ten search bands
    pub parking_search_minutes: [f64; 10],
    /// circuity ratios for the half-mile, one-mile and mile-and-a-half distance bands
    pub circuity_ratios: [f64; 3],
    pub node_id: Option<i64>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParcelEmployment {
    pub education: f64,
    pub food: f64,
    pub government: f64,
    pub industrial: f64,
    pub medical: f64,
    pub office: f64,
    pub retail: f64,
    pub service: f64,
    pub total: f64,
}

impl ParcelEmployment {
    /// employment not covered by any named category
    pub fn other(&self) -> f64 {
        self.total
            - (self.education
                + self.food
                + self.government
                + self.industrial
                + self.medical
                + self.office
                + self.retail
                + self.service)
    }
}

/// walk distances in miles from a parcel to the nearest stop of each submode.
/// negative values mean no stop of that kind.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitDistances {
    pub local_bus: f64,
    pub light_rail: f64,
    pub express_bus: f64,
    pub commuter_rail: f64,
    pub ferry: f64,
    pub any_transit: f64,
}

impl Default for TransitDistances {
    fn default() -> Self {
        Self {
            local_bus: -1.0,
            light_rail: -1.0,
            express_bus: -1.0,
            commuter_rail: -1.0,
            ferry: -1.0,
            any_transit: -1.0,
        }
    }
}

impl TransitDistances {
    /// distance to the stop of the submode a path type rides, or None for path types
    /// served only by local bus or when the parcel has no such stop
    pub fn alternative_for(&self, path_type: PathType) -> Option<f64> {
        let distance = match path_type {
            PathType::LightRail => self.light_rail,
            PathType::PremiumBus => self.express_bus,
            PathType::CommuterRail => self.commuter_rail,
            PathType::Ferry => self.ferry,
            _ => return None,
        };
        Some(distance).filter(|d| *d >= 0.0)
    }
}

impl Parcel {
    pub fn parking_price(&self, minute: i32) -> f64 {
        match ParkingBand::from_minute(minute) {
            ParkingBand::Overnight => self.parking_hourly_price[0],
            ParkingBand::Daytime => self.parking_hourly_price[1],
            ParkingBand::Evening => self.parking_hourly_price[2],
        }
    }

    pub fn parking_search_minutes(&self, minute: i32) -> f64 {
        self.parking_search_minutes[time_of_day::parking_search_band(minute)]
    }
}
