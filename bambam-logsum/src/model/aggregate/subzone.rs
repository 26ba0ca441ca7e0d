use super::LogsumPurpose;
use crate::config::AggregateLogsumConfig;
use crate::model::{
    network::{NodeRegistry, Parcel, ParcelEmployment},
    utility::logit_ops::EPSILON,
};

type ByPurpose = [f64; 7];

const SIZE_EDUCATION: ByPurpose = [0.267, 0.295, 6.959, 0.141, 0.000, 0.441, 4.855];
const SIZE_FOOD: ByPurpose = [0.604, 0.582, 2.641, 0.582, 0.006, 0.000, 21.54];
const SIZE_GOVERNMENT: ByPurpose = [0.026, 0.000, 0.000, 0.000, 0.002, 0.247, 0.411];
const SIZE_INDUSTRIAL: ByPurpose = [0.021, 0.000, 0.254, 0.061, 0.000, 0.357, 0.369];
const SIZE_MEDICAL: ByPurpose = [0.093, 0.394, 0.217, 0.756, 0.002, 0.307, 1.404];
const SIZE_OFFICE: ByPurpose = [0.008, 0.174, 0.000, 0.017, 0.001, 0.346, 0.170];
const SIZE_RETAIL: ByPurpose = [0.470, 0.542, 0.636, 0.605, 0.333, 0.000, 1.597];
const SIZE_SERVICE: ByPurpose = [1.0; 7];
const SIZE_HOUSEHOLDS: ByPurpose = [0.060, 0.000, 0.323, 0.061, 0.002, 0.000, 1.774];
const SIZE_OTHER_EMPLOYMENT: ByPurpose = [0.084, 0.000, 0.000, 0.113, 0.008, 0.000, 2.177];

/// size used when a subzone attracts nothing
pub const EMPTY_SIZE: f64 = -99.0;

/// subzone 0 is within walking distance of transit, subzone 1 is the rest of the zone
pub const SUBZONES_PER_ZONE: usize = 2;

/// land use totals of one subzone and the log size terms derived from them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubzoneAttraction {
    pub households: f64,
    pub employment: ParcelEmployment,
    sizes: ByPurpose,
}

impl SubzoneAttraction {
    fn add(&mut self, parcel: &Parcel) {
        let e = &mut self.employment;
        let p = &parcel.employment;
        self.households += parcel.households;
        e.education += p.education;
        e.food += p.food;
        e.government += p.government;
        e.industrial += p.industrial;
        e.medical += p.medical;
        e.office += p.office;
        e.retail += p.retail;
        e.service += p.service;
        e.total += p.total;
    }

    fn compute_sizes(&mut self, multiplier: f64) {
        let e = &self.employment;
        let other = e.other();
        for purpose in LogsumPurpose::ALL {
            let i = purpose.index();
            let total = SIZE_EDUCATION[i] * e.education
                + SIZE_FOOD[i] * e.food
                + SIZE_GOVERNMENT[i] * e.government
                + SIZE_INDUSTRIAL[i] * e.industrial
                + SIZE_MEDICAL[i] * e.medical
                + SIZE_OFFICE[i] * e.office
                + SIZE_OTHER_EMPLOYMENT[i] * other
                + SIZE_RETAIL[i] * e.retail
                + SIZE_SERVICE[i] * e.service
                + SIZE_HOUSEHOLDS[i] * self.households;
            self.sizes[i] = if total < EPSILON {
                EMPTY_SIZE
            } else {
                total.ln() * multiplier
            };
        }
    }

    pub fn size(&self, purpose: LogsumPurpose) -> f64 {
        self.sizes[purpose.index()]
    }
}

/// which subzone a parcel belongs to, by its distance in miles to any transit
pub fn subzone_of(parcel: &Parcel, conf: &AggregateLogsumConfig) -> usize {
    let distance = parcel.transit_distances.any_transit;
    if distance > 0.0 && distance <= conf.subzone_transit_distance {
        0
    } else {
        1
    }
}

/// subzone attractions for every zone, addressed by zone index
pub fn build_subzones(
    registry: &dyn NodeRegistry,
    conf: &AggregateLogsumConfig,
) -> Vec<[SubzoneAttraction; SUBZONES_PER_ZONE]> {
    let mut subzones = vec![<[SubzoneAttraction; SUBZONES_PER_ZONE]>::default(); registry.zones().len()];
    for parcel in registry.parcels() {
        let Some(zone) = registry.get_zone(parcel.zone_id) else {
            continue;
        };
        if let Some(zone_subzones) = subzones.get_mut(zone.index) {
            zone_subzones[subzone_of(parcel, conf)].add(parcel);
        }
    }
    for subzone in subzones.iter_mut().flatten() {
        subzone.compute_sizes(conf.size_multiplier);
    }
    subzones
}
