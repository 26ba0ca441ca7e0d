use super::{
    BikeQualityWeights, ByAggregatePurpose, DriverClassWeights, MileagePricing, TransitForm,
    TransitSubmodeWeights,
};
use crate::model::{
    mode::{Mode, PathType},
    utility::logit_ops::EPSILON,
    LogsumError,
};
use serde::{Deserialize, Serialize};

/// the weights and limits read by every path impedance formula. built once and
/// shared by reference with every component of the path choice model.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct PathImpedanceConfig {
    pub utility_scale: f64,
    pub available_path_upper_time_limit: f64,
    pub estimation_mode: bool,
    pub use_stop_areas: bool,
    pub shadow_pricing_enabled: bool,
    pub excluded_combinations: Vec<(Mode, PathType)>,

    // units and blending
    pub distance_units_per_mile: f64,
    pub length_units_per_foot: f64,
    pub blending_enabled: bool,
    pub use_node_to_node_distances: bool,
    pub use_circuity_distances: bool,
    pub maximum_blending_distance: f64,
    pub minimum_intra_parcel_distance: f64,
    pub walk_minutes_per_mile: f64,
    pub bike_minutes_per_mile: f64,
    pub auto_minutes_per_mile: f64,

    // walk and bike
    pub walk_time_weight: f64,
    pub bike_time_weight: f64,
    pub bike_quality_classes_enabled: bool,
    pub bike_quality_weights: BikeQualityWeights,

    // auto
    pub auto_operating_cost_per_distance_unit: f64,
    pub auto_tolled_path_constant: f64,
    pub auto_in_vehicle_time_weights: ByAggregatePurpose<DriverClassWeights>,
    pub auto_extra_time_weight_driver: f64,
    pub auto_extra_time_weight_passenger: f64,
    pub auto_congestion_multiplier: f64,
    pub gamma_in_vehicle_time: f64,
    pub gamma_extra_time: f64,
    pub gamma_cost: f64,
    pub passengers_incur_costs: bool,
    pub hov_driver_cost_divisor_work: f64,
    pub hov_driver_cost_divisor_other: f64,
    pub hov_passenger_cost_divisor_work: f64,
    pub hov_passenger_cost_divisor_other: f64,
    pub mileage_pricing_enabled: bool,
    pub mileage_pricing: MileagePricing,
    pub parking_search_time_enabled: bool,
    pub destination_parking_enabled: bool,

    // transit
    pub transit_form: TransitForm,
    pub pass_holders_ride_free: bool,
    pub transit_in_vehicle_time_weight: f64,
    pub transit_submode_weights: ByAggregatePurpose<TransitSubmodeWeights>,
    pub transit_first_wait_time_weight: f64,
    pub transit_transfer_wait_time_weight: f64,
    pub transit_number_boardings_weight: f64,
    /// replaces the boardings weight on light rail and commuter rail paths when positive
    pub transit_number_boardings_weight_rail: f64,
    pub transit_walk_access_time_weight: f64,
    pub transit_drive_access_time_weight: f64,
    pub transit_access_egress_time_weight: f64,
    pub transit_bike_access_time_weight: f64,
    pub gamma_transit_fare: f64,
    pub gamma_transit_in_vehicle_time: f64,
    pub local_bus_path_constant: f64,
    pub light_rail_path_constant: f64,
    pub premium_bus_path_constant: f64,
    pub commuter_rail_path_constant: f64,
    pub ferry_path_constant: f64,
    pub use_path_type_specific_time: bool,
    pub light_rail_time_additive_weight: f64,
    pub premium_bus_time_additive_weight: f64,
    pub transit_walk_access_distance_limit: f64,
    pub transit_walk_access_direct_limit: f64,
    pub transit_single_boarding_limit: f64,
    pub zone_transit_walk_minutes: f64,

    // stop area and park-and-ride search
    pub max_stop_areas_to_search: usize,
    pub max_stop_area_length: f64,
    pub max_park_and_ride_stop_area_length: f64,
    pub max_drive_distance: f64,
    pub max_drive_distance_ratio: f64,
    pub max_bike_length: f64,
    pub min_bike_length: f64,
    pub max_bike_distance_ratio: f64,
}

impl Default for PathImpedanceConfig {
    fn default() -> Self {
        Self {
            utility_scale: 1.0,
            available_path_upper_time_limit: 180.0,
            estimation_mode: false,
            use_stop_areas: false,
            shadow_pricing_enabled: false,
            excluded_combinations: vec![],
            distance_units_per_mile: 1.0,
            length_units_per_foot: 1.0,
            blending_enabled: false,
            use_node_to_node_distances: false,
            use_circuity_distances: false,
            maximum_blending_distance: 1.0,
            minimum_intra_parcel_distance: 0.01,
            walk_minutes_per_mile: 20.0,
            bike_minutes_per_mile: 6.0,
            auto_minutes_per_mile: 3.0,
            walk_time_weight: 1.0,
            bike_time_weight: 1.0,
            bike_quality_classes_enabled: false,
            bike_quality_weights: BikeQualityWeights::default(),
            auto_operating_cost_per_distance_unit: 0.15,
            auto_tolled_path_constant: 0.0,
            auto_in_vehicle_time_weights: ByAggregatePurpose::uniform(
                DriverClassWeights::default(),
            ),
            auto_extra_time_weight_driver: 1.0,
            auto_extra_time_weight_passenger: 1.0,
            auto_congestion_multiplier: 0.0,
            gamma_in_vehicle_time: 1.0,
            gamma_extra_time: 1.0,
            gamma_cost: 1.0,
            passengers_incur_costs: false,
            hov_driver_cost_divisor_work: 2.0,
            hov_driver_cost_divisor_other: 2.0,
            hov_passenger_cost_divisor_work: 2.0,
            hov_passenger_cost_divisor_other: 2.0,
            mileage_pricing_enabled: false,
            mileage_pricing: MileagePricing::default(),
            parking_search_time_enabled: false,
            destination_parking_enabled: false,
            transit_form: TransitForm::default(),
            pass_holders_ride_free: true,
            transit_in_vehicle_time_weight: 1.0,
            transit_submode_weights: ByAggregatePurpose::uniform(
                TransitSubmodeWeights::default(),
            ),
            transit_first_wait_time_weight: 2.0,
            transit_transfer_wait_time_weight: 2.0,
            transit_number_boardings_weight: 8.0,
            transit_number_boardings_weight_rail: 0.0,
            transit_walk_access_time_weight: 2.0,
            transit_drive_access_time_weight: 1.5,
            transit_access_egress_time_weight: 2.0,
            transit_bike_access_time_weight: 1.5,
            gamma_transit_fare: 1.0,
            gamma_transit_in_vehicle_time: 1.0,
            local_bus_path_constant: 0.0,
            light_rail_path_constant: 0.0,
            premium_bus_path_constant: 0.0,
            commuter_rail_path_constant: 0.0,
            ferry_path_constant: 0.0,
            use_path_type_specific_time: false,
            light_rail_time_additive_weight: 0.0,
            premium_bus_time_additive_weight: 0.0,
            transit_walk_access_distance_limit: 1.0,
            transit_walk_access_direct_limit: 1.0,
            transit_single_boarding_limit: 1.1,
            zone_transit_walk_minutes: 5.0,
            max_stop_areas_to_search: 99,
            max_stop_area_length: 99999.0,
            max_park_and_ride_stop_area_length: 99999.0,
            max_drive_distance: 999.0,
            max_drive_distance_ratio: 99.0,
            max_bike_length: 99999.0,
            min_bike_length: 0.0,
            max_bike_distance_ratio: 99.0,
        }
    }
}

impl PathImpedanceConfig {
    /// the path time limit, doubled when the trip comes back
    pub fn time_limit(&self, round_trip: bool) -> f64 {
        if round_trip {
            self.available_path_upper_time_limit * 2.0
        } else {
            self.available_path_upper_time_limit
        }
    }

    pub fn walk_minutes_per_distance_unit(&self) -> f64 {
        self.walk_minutes_per_mile / self.distance_units_per_mile
    }

    pub fn bike_minutes_per_distance_unit(&self) -> f64 {
        self.bike_minutes_per_mile / self.distance_units_per_mile
    }

    /// converts a network length (for example, a parcel-to-stop length) into distance units
    pub fn length_to_distance(&self, length: f64) -> f64 {
        length / self.length_units_per_foot / 5280.0 * self.distance_units_per_mile
    }

    pub fn path_type_constant(&self, path_type: PathType) -> f64 {
        match path_type {
            PathType::LocalBus => self.local_bus_path_constant,
            PathType::LightRail => self.light_rail_path_constant,
            PathType::PremiumBus => self.premium_bus_path_constant,
            PathType::CommuterRail => self.commuter_rail_path_constant,
            PathType::Ferry => self.ferry_path_constant,
            PathType::FullNetwork | PathType::NoTolls => 0.0,
        }
    }

    /// rejects values that would make every utility formula meaningless
    pub fn boardings_weight(&self, path_type: PathType) -> f64 {
        let rail = matches!(path_type, PathType::LightRail | PathType::CommuterRail);
        if rail && self.transit_number_boardings_weight_rail > EPSILON {
            self.transit_number_boardings_weight_rail
        } else {
            self.transit_number_boardings_weight
        }
    }

    pub fn validate(&self) -> Result<(), LogsumError> {
        let positive = [
            ("utility_scale", self.utility_scale),
            (
                "available_path_upper_time_limit",
                self.available_path_upper_time_limit,
            ),
            ("distance_units_per_mile", self.distance_units_per_mile),
            ("length_units_per_foot", self.length_units_per_foot),
            ("maximum_blending_distance", self.maximum_blending_distance),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(LogsumError::ConfigurationError(format!(
                    "{name} must be positive, found {value}"
                )));
            }
        }
        if self.max_stop_areas_to_search == 0 {
            return Err(LogsumError::ConfigurationError(String::from(
                "max_stop_areas_to_search must be at least 1",
            )));
        }
        Ok(())
    }
}
