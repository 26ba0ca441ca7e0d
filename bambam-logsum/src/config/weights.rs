use crate::model::{mode::Mode, query::AggregatePurpose};
use serde::{Deserialize, Serialize};

/// a value for each of the three aggregate purposes
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct ByAggregatePurpose<T> {
    pub commute: T,
    pub business: T,
    pub personal: T,
}

impl<T> ByAggregatePurpose<T> {
    pub fn get(&self, purpose: AggregatePurpose) -> &T {
        match purpose {
            AggregatePurpose::Commute => &self.commute,
            AggregatePurpose::Business => &self.business,
            AggregatePurpose::Personal => &self.personal,
        }
    }
}

impl<T: Clone> ByAggregatePurpose<T> {
    pub fn uniform(value: T) -> Self {
        Self {
            commute: value.clone(),
            business: value.clone(),
            personal: value,
        }
    }
}

/// auto in-vehicle time weights by who is in the vehicle
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct DriverClassWeights {
    pub sov: f64,
    pub hov_driver: f64,
    pub hov_passenger: f64,
}

impl DriverClassWeights {
    pub fn get(&self, mode: Mode) -> f64 {
        match mode {
            Mode::Sov => self.sov,
            Mode::HovDriver => self.hov_driver,
            _ => self.hov_passenger,
        }
    }
}

impl Default for DriverClassWeights {
    fn default() -> Self {
        Self {
            sov: 1.0,
            hov_driver: 1.0,
            hov_passenger: 1.0,
        }
    }
}

/// in-vehicle time weights for each transit submode group
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct TransitSubmodeWeights {
    pub train: f64,
    pub bus: f64,
    pub metro: f64,
    pub light_rail: f64,
}

impl Default for TransitSubmodeWeights {
    fn default() -> Self {
        Self {
            train: 1.0,
            bus: 1.0,
            metro: 1.0,
            light_rail: 1.0,
        }
    }
}

/// time multipliers applied to the share of a bike trip on each facility class
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct BikeQualityWeights {
    pub class1: f64,
    pub class2: f64,
    pub bad: f64,
    pub worst: f64,
}

impl BikeQualityWeights {
    /// skim variable names paired with their weights
    pub fn classes(&self) -> [(&'static str, f64); 4] {
        [
            ("class1distance", self.class1),
            ("class2distance", self.class2),
            ("baddistance", self.bad),
            ("worstdistance", self.worst),
        ]
    }
}

/// time-of-day mileage pricing. windows are clock minutes after midnight.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct MileagePricing {
    pub am_peak_start: i32,
    pub am_peak_end: i32,
    pub pm_peak_start: i32,
    pub pm_peak_end: i32,
    pub am_peak_cents_per_distance_unit: f64,
    pub pm_peak_cents_per_distance_unit: f64,
    pub between_peaks_cents_per_distance_unit: f64,
    pub outside_peaks_cents_per_distance_unit: f64,
}

impl Default for MileagePricing {
    fn default() -> Self {
        Self {
            am_peak_start: 420,
            am_peak_end: 540,
            pm_peak_start: 900,
            pm_peak_end: 1080,
            am_peak_cents_per_distance_unit: 0.0,
            pm_peak_cents_per_distance_unit: 0.0,
            between_peaks_cents_per_distance_unit: 0.0,
            outside_peaks_cents_per_distance_unit: 0.0,
        }
    }
}

impl MileagePricing {
    /// cents charged per distance unit for a trip starting at this model minute
    pub fn cents_per_distance_unit(&self, model_minute: i32) -> f64 {
        let clock_minute = model_minute + 180;
        if clock_minute >= self.am_peak_start && clock_minute <= self.am_peak_end {
            self.am_peak_cents_per_distance_unit
        } else if clock_minute >= self.pm_peak_start && clock_minute <= self.pm_peak_end {
            self.pm_peak_cents_per_distance_unit
        } else if clock_minute > self.am_peak_end && clock_minute < self.pm_peak_start {
            self.between_peaks_cents_per_distance_unit
        } else {
            self.outside_peaks_cents_per_distance_unit
        }
    }
}
