use crate::config::PathImpedanceConfig;
use crate::model::{mode::Mode, network::Parcel, utility::logit_ops::EPSILON};

const DEFAULT_CIRCUITY: f64 = 1.4;

/// the subset of the path impedance configuration used to blend parcel-level skims
#[derive(Clone, Debug)]
pub struct BlendingParameters {
    pub enabled: bool,
    pub use_node_to_node_distances: bool,
    pub use_circuity_distances: bool,
    pub maximum_blending_distance: f64,
    pub distance_units_per_mile: f64,
    pub length_units_per_foot: f64,
    pub minimum_intra_parcel_distance: f64,
    pub walk_minutes_per_mile: f64,
    pub bike_minutes_per_mile: f64,
    pub auto_minutes_per_mile: f64,
}

impl From<&PathImpedanceConfig> for BlendingParameters {
    fn from(conf: &PathImpedanceConfig) -> Self {
        Self {
            enabled: conf.blending_enabled,
            use_node_to_node_distances: conf.use_node_to_node_distances,
            use_circuity_distances: conf.use_circuity_distances,
            maximum_blending_distance: conf.maximum_blending_distance,
            distance_units_per_mile: conf.distance_units_per_mile,
            length_units_per_foot: conf.length_units_per_foot,
            minimum_intra_parcel_distance: conf.minimum_intra_parcel_distance,
            walk_minutes_per_mile: conf.walk_minutes_per_mile,
            bike_minutes_per_mile: conf.bike_minutes_per_mile,
            auto_minutes_per_mile: conf.auto_minutes_per_mile,
        }
    }
}

impl BlendingParameters {
    pub fn length_to_distance(&self, length: f64) -> f64 {
        length / self.length_units_per_foot / 5280.0 * self.distance_units_per_mile
    }

    /// fallback speed when a skim carries no usable distance
    pub fn default_minutes_per_distance_unit(&self, mode: Mode) -> f64 {
        let per_mile = match mode {
            Mode::Walk => self.walk_minutes_per_mile,
            Mode::Bike => self.bike_minutes_per_mile,
            _ => self.auto_minutes_per_mile,
        };
        per_mile / self.distance_units_per_mile
    }

    /// half the side of a square parcel of the same area, floored at the minimum
    /// intra-parcel distance
    pub fn intra_parcel_distance(&self, parcel: &Parcel) -> f64 {
        let side = (1000.0 * parcel.thousands_square_length_units.max(0.0)).sqrt();
        let distance = self.length_to_distance(side / 2.0);
        distance.max(self.minimum_intra_parcel_distance * self.distance_units_per_mile)
    }

    /// straight-line distance scaled by the origin parcel's circuity ratios
    pub fn circuity_distance(&self, origin: &Parcel, destination: &Parcel) -> f64 {
        if origin.id == destination.id && origin.thousands_square_length_units > EPSILON {
            return self.intra_parcel_distance(origin);
        }
        let dx = (destination.x - origin.x).abs();
        let dy = (destination.y - origin.y).abs();
        let xy_length = (dx * dx + dy * dy).sqrt();
        let xy_distance = self.length_to_distance(xy_length);
        if xy_distance > self.maximum_blending_distance {
            return xy_distance * DEFAULT_CIRCUITY;
        }
        if xy_length < EPSILON {
            return 0.0;
        }

        let band1 = 2640.0 * self.length_units_per_foot;
        let band2 = 5280.0 * self.length_units_per_foot;
        let band3 = 7920.0 * self.length_units_per_foot;
        let weights = if xy_length < band1 {
            [1.0, 0.0, 0.0]
        } else if xy_length < band2 {
            let w2 = (xy_length - band1) / (band2 - band1);
            [1.0 - w2, w2, 0.0]
        } else if xy_length < band3 {
            let w3 = (xy_length - band2) / (band3 - band2);
            [0.0, 1.0 - w3, w3]
        } else {
            [0.0, 0.0, 1.0]
        };
        let ratio: f64 = weights
            .iter()
            .zip(origin.circuity_ratios.iter())
            .map(|(w, r)| if *r > EPSILON { w * r } else { w * DEFAULT_CIRCUITY })
            .sum();
        xy_distance * ratio
    }

    /// orthogonal distance with a 300 foot floor
    pub fn orthogonal_distance(&self, origin: &Parcel, destination: &Parcel) -> f64 {
        let manhattan = (origin.x - destination.x).abs() + (origin.y - destination.y).abs();
        self.length_to_distance(manhattan.max(300.0 * self.length_units_per_foot))
    }
}

#[cfg(test)]
mod test {
    use super::BlendingParameters;
    use crate::config::PathImpedanceConfig;
    use crate::model::network::Parcel;

    fn mock_parcel(id: i64, x: f64, y: f64) -> Parcel {
        Parcel {
            id,
            x,
            y,
            thousands_square_length_units: 100.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_intra_parcel_distance() {
        let params = BlendingParameters::from(&PathImpedanceConfig::default());
        let parcel = mock_parcel(1, 0.0, 0.0);
        let expected = 100_000f64.sqrt() / 2.0 / 5280.0;
        assert!((params.intra_parcel_distance(&parcel) - expected).abs() < 1e-12);
        assert!((params.circuity_distance(&parcel, &parcel) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_circuity_uses_band_ratios() {
        let params = BlendingParameters::from(&PathImpedanceConfig::default());
        let mut origin = mock_parcel(1, 0.0, 0.0);
        origin.circuity_ratios = [1.2, 1.3, 1.5];
        let destination = mock_parcel(2, 1320.0, 0.0);
        let distance = params.circuity_distance(&origin, &destination);
        assert!((distance - 0.25 * 1.2).abs() < 1e-12);
        let far = mock_parcel(3, 52800.0, 0.0);
        assert!((params.circuity_distance(&origin, &far) - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_orthogonal_floor() {
        let params = BlendingParameters::from(&PathImpedanceConfig::default());
        let a = mock_parcel(1, 0.0, 0.0);
        let b = mock_parcel(2, 10.0, 10.0);
        assert!((params.orthogonal_distance(&a, &b) - 300.0 / 5280.0).abs() < 1e-12);
        let mut tiny = mock_parcel(3, 0.0, 0.0);
        tiny.thousands_square_length_units = 0.01;
        assert_eq!(params.intra_parcel_distance(&tiny), 0.01);
    }
}
