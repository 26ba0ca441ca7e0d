//! per-purpose coefficients of the aggregate mode utilities, indexed by
//! [`LogsumPurpose::index`].

use super::{CarOwnership, LogsumPurpose, TransitAccess, VotSegment};

/// the per-mode utility clamp. wider than the path choice clamp.
pub const AGGREGATE_UTILITY_LIMIT: f64 = 88.0;

type ByPurpose = [f64; 7];

const WALK_CONSTANT: ByPurpose = [0.0; 7];
const WALK_INTRAZONAL: ByPurpose = [-3.61, -3.36, -5.32, -4.02, -5.09, -0.248, -2.65];
const WALK_GEN_TIME: ByPurpose = [-0.0446, -0.0428, -0.0590, -0.0470, -0.0568, -0.0282, -0.0379];

const BIKE_CONSTANT: ByPurpose = [-2.18, -2.6, 0.055, -1.63, -1.84, 0.141, -2.48];
const BIKE_LOW_INCOME: ByPurpose = [0.0, 0.0, 0.397, 0.755, 0.0, 0.0, 0.0];
const BIKE_NO_CAR: ByPurpose = [0.525, 2.041, -0.224, 0.517, 0.0633, 0.0, 1.25];
const BIKE_CAR_COMPETITION: ByPurpose = [0.388, 2.604, -0.512, 0.486, 0.316, 0.0, 0.735];
const BIKE_CHILD: ByPurpose = [1.05, 0.0, 0.0, 0.0, 0.0, 0.0, 1.74];
const BIKE_INTRAZONAL: ByPurpose = [-3.8, -24.87, -6.95, -4.06, -5.37, -13.7, -3.15];
const BIKE_GEN_TIME: ByPurpose = [-0.05, -0.0441, -0.0821, -0.0525, -0.0704, -0.0292, -0.0438];

const SOV_CONSTANT: ByPurpose = [-3.67, -3.135, -4.75, -2.52, -2.46, -1.15, -3.53];
const SOV_HIGH_INCOME: ByPurpose = [0.451, -1.00, 0.875, 0.431, 0.0, 0.755, 0.337];
const SOV_NO_CAR: ByPurpose = [-3.5, -1.641, -2.12, -3.46, -5.05, -4.07, -2.61];
const SOV_CAR_COMPETITION: ByPurpose = [-0.855, 1.139, -1.05, -0.743, -1.04, -0.958, -0.676];
const SOV_INTRAZONAL: ByPurpose = [-2.05, -23.08, -2.99, -2.86, -3.66, 0.0904, -1.85];
const SOV_GEN_TIME: ByPurpose = [-0.0303, -0.0273, -0.0502, -0.0322, -0.0483, -0.0125, -0.0286];

const HOV_CONSTANT: ByPurpose = [-3.28, -3.251, -2.08, -3.8, -4.94, -1.47, -3.93];
const HOV_NO_CAR: ByPurpose = [-2.73, -0.911, -4.25, -2.72, -2.96, -2.89, -1.36];
const HOV_CAR_COMPETITION: ByPurpose = [-0.284, 0.804, -1.26, 0.346, 0.0181, -1.31, 0.117];
const HOV_CHILD: ByPurpose = [-0.142, 0.0, -0.637, 0.0, 0.18, 0.0, 0.812];
const HOV_INTRAZONAL: ByPurpose = [-2.21, -0.264, -3.28, -2.49, -2.6, 0.665, -1.77];
const HOV_GEN_TIME: ByPurpose = [-0.0335, -0.03, -0.0417, -0.0309, -0.0377, -0.0155, -0.0293];

const TRANSIT_CONSTANT: ByPurpose = [-9.18, -21.71, -11.6, -9.23, -9.34, -4.8, -9.02];
const TRANSIT_LOW_INCOME: ByPurpose = [0.0, -0.441, 0.0, 0.0, -0.877, 0.0, -0.284];
const TRANSIT_HIGH_INCOME: ByPurpose = [0.65, 0.48, 0.0, 0.599, 0.835, 0.0, 0.807];
const TRANSIT_NO_CAR: ByPurpose = [1.5, 13.11, 1.1, 1.99, 0.9, 0.464, 2.08];
const TRANSIT_CAR_COMPETITION: ByPurpose = [0.541, 14.61, 0.0, 1.34, -0.098, 0.0, 0.88];
const TRANSIT_CHILD: ByPurpose = [1.23, 0.0, 0.0, 1.61, 1.19, 0.0, 1.58];
const TRANSIT_GEN_TIME: ByPurpose = [-0.0266, -0.0254, -0.0246, -0.028, -0.0451, -0.0148, -0.0233];
const TRANSIT_ORIGIN_CLOSE: ByPurpose = [0.285, 1.768, 0.662, 0.593, -0.148, 0.0973, 0.405];
const TRANSIT_ORIGIN_FAR: ByPurpose = [-3.0; 7];
const TRANSIT_DESTINATION_FAR: ByPurpose = [-3.0; 7];

/// generalized times in minutes for one origin-destination pair. unavailable modes
/// carry the negative unavailable marker and fail the `> 0` tests below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralizedTimes {
    pub walk: f64,
    pub bike: f64,
    pub sov: f64,
    pub hov: f64,
    pub transit: f64,
}

/// the segment and pair attributes that enter the mode utilities
#[derive(Clone, Copy, Debug)]
pub struct SegmentFlags {
    pub purpose: LogsumPurpose,
    pub car_ownership: CarOwnership,
    pub vot: VotSegment,
    pub transit_access: TransitAccess,
    pub intrazonal: bool,
    /// the destination subzone is beyond walking distance of transit
    pub no_egress: bool,
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

fn clamped_exp(utility: f64) -> f64 {
    utility
        .clamp(-AGGREGATE_UTILITY_LIMIT, AGGREGATE_UTILITY_LIMIT)
        .exp()
}

/// Σ exp(u) over the modes available for this segment
pub fn mode_utility_sum(times: &GeneralizedTimes, s: &SegmentFlags) -> f64 {
    let p = s.purpose.index();
    let intrazonal = flag(s.intrazonal);
    let low_income = flag(s.vot == VotSegment::Low);
    let high_income = flag(s.vot == VotSegment::High);
    let no_car = flag(s.car_ownership.has_no_cars());
    let car_competition = flag(s.car_ownership.has_car_competition());
    let child = flag(s.car_ownership.is_child());

    let mut sum = 0.0;
    if times.walk > 0.0 || s.intrazonal {
        sum += clamped_exp(
            WALK_CONSTANT[p] + WALK_INTRAZONAL[p] * intrazonal + WALK_GEN_TIME[p] * times.walk,
        );
    }
    if times.bike > 0.0 || s.intrazonal {
        sum += clamped_exp(
            BIKE_CONSTANT[p]
                + BIKE_LOW_INCOME[p] * low_income
                + BIKE_NO_CAR[p] * no_car
                + BIKE_CAR_COMPETITION[p] * car_competition
                + BIKE_CHILD[p] * child
                + BIKE_INTRAZONAL[p] * intrazonal
                + BIKE_GEN_TIME[p] * times.bike,
        );
    }
    if (times.sov > 0.0 || s.intrazonal) && !s.car_ownership.is_child() {
        sum += clamped_exp(
            SOV_CONSTANT[p]
                + SOV_HIGH_INCOME[p] * high_income
                + SOV_NO_CAR[p] * no_car
                + SOV_CAR_COMPETITION[p] * car_competition
                + SOV_INTRAZONAL[p] * intrazonal
                + SOV_GEN_TIME[p] * times.sov,
        );
    }
    if times.hov > 0.0 || s.intrazonal {
        sum += clamped_exp(
            HOV_CONSTANT[p]
                + HOV_NO_CAR[p] * no_car
                + HOV_CAR_COMPETITION[p] * car_competition
                + HOV_CHILD[p] * child
                + HOV_INTRAZONAL[p] * intrazonal
                + HOV_GEN_TIME[p] * times.hov,
        );
    }
    if times.transit > 0.0 && !s.intrazonal {
        sum += clamped_exp(
            TRANSIT_CONSTANT[p]
                + TRANSIT_LOW_INCOME[p] * low_income
                + TRANSIT_HIGH_INCOME[p] * high_income
                + TRANSIT_NO_CAR[p] * no_car
                + TRANSIT_CAR_COMPETITION[p] * car_competition
                + TRANSIT_CHILD[p] * child
                + TRANSIT_GEN_TIME[p] * times.transit
                + TRANSIT_ORIGIN_CLOSE[p] * flag(s.transit_access == TransitAccess::Near)
                + TRANSIT_ORIGIN_FAR[p] * flag(s.transit_access == TransitAccess::None)
                + TRANSIT_DESTINATION_FAR[p] * flag(s.no_egress),
        );
    }
    sum
}

#[cfg(test)]
mod test {
    use super::*;

    const UNAVAILABLE: f64 = -999.0;

    fn mock_flags(intrazonal: bool) -> SegmentFlags {
        SegmentFlags {
            purpose: LogsumPurpose::Shopping,
            car_ownership: CarOwnership::Child,
            vot: VotSegment::Medium,
            transit_access: TransitAccess::Mid,
            intrazonal,
            no_egress: false,
        }
    }

    #[test]
    fn test_walk_only() {
        let times = GeneralizedTimes {
            walk: 10.0,
            bike: UNAVAILABLE,
            sov: UNAVAILABLE,
            hov: UNAVAILABLE,
            transit: UNAVAILABLE,
        };
        let sum = mode_utility_sum(&times, &mock_flags(false));
        let expected = (-0.0568_f64 * 10.0).exp();
        assert!((sum - expected).abs() < 1e-12);
    }

    #[test]
    fn test_intrazonal_excludes_transit_and_child_sov() {
        let times = GeneralizedTimes {
            walk: 5.0,
            bike: 3.0,
            sov: 5.0,
            hov: 5.0,
            transit: 20.0,
        };
        let s = mock_flags(true);
        let p = s.purpose.index();
        let walk = (WALK_INTRAZONAL[p] + WALK_GEN_TIME[p] * 5.0).exp();
        let bike =
            (BIKE_CONSTANT[p] + BIKE_CHILD[p] + BIKE_INTRAZONAL[p] + BIKE_GEN_TIME[p] * 3.0).exp();
        let hov =
            (HOV_CONSTANT[p] + HOV_CHILD[p] + HOV_INTRAZONAL[p] + HOV_GEN_TIME[p] * 5.0).exp();
        let sum = mode_utility_sum(&times, &s);
        let expected = walk + bike + hov;
        assert!(((sum - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_utility_clamp() {
        assert_eq!(clamped_exp(500.0), 88.0_f64.exp());
        assert_eq!(clamped_exp(-500.0), (-88.0_f64).exp());
    }
}
