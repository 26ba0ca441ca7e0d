//! shared builders for unit tests across the model modules.

use crate::config::PathImpedanceConfig;
use crate::model::{
    impedance::{BlendingParameters, SkimRoster},
    mode::{Mode, PathType},
    network::{NetworkRegistry, Parcel, Zone},
};

pub const ALL_VOT: (f64, f64) = (0.0, 1.0e6);
pub const ALL_DAY: (i32, i32) = (1, 1440);

/// rows for a skim roster, collected before the roster's blending parameters are known
#[derive(Default)]
pub struct MockSkims {
    rows: Vec<(String, Mode, PathType, i64, i64, f64, Option<f64>)>,
}

impl MockSkims {
    pub fn new() -> MockSkims {
        MockSkims::default()
    }

    /// adds a value valid for every vot and minute. a blend value is stored as the
    /// "distance" variable of the same mode and path type.
    #[allow(clippy::too_many_arguments)]
    pub fn with(
        mut self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        origin: i64,
        destination: i64,
        value: f64,
        blend: Option<f64>,
    ) -> Self {
        self.rows.push((
            variable.to_string(),
            mode,
            path_type,
            origin,
            destination,
            value,
            blend,
        ));
        self
    }

    /// adds the same value in both directions
    #[allow(clippy::too_many_arguments)]
    pub fn with_symmetric(
        self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        a: i64,
        b: i64,
        value: f64,
        blend: Option<f64>,
    ) -> Self {
        self.with(variable, mode, path_type, a, b, value, blend)
            .with(variable, mode, path_type, b, a, value, blend)
    }

    pub fn build(self, conf: &PathImpedanceConfig) -> SkimRoster {
        let mut roster = SkimRoster::new(BlendingParameters::from(conf));
        for (variable, mode, path_type, o, d, value, blend) in self.rows {
            let blend_variable = blend.map(|_| "distance");
            roster.insert(
                &variable,
                mode,
                path_type,
                ALL_VOT,
                ALL_DAY,
                blend_variable,
                o,
                d,
                value,
            );
            if let Some(distance) = blend {
                roster.insert(
                    "distance", mode, path_type, ALL_VOT, ALL_DAY, None, o, d, distance,
                );
            }
        }
        roster
    }
}

pub fn mock_zone(id: i64) -> Zone {
    Zone {
        id,
        index: 0,
        destination_eligible: true,
        x: 0.0,
        y: 0.0,
        nearest_stop_area: None,
    }
}

pub fn mock_parcel(id: i64, zone_id: i64, thousands_square_length_units: f64) -> Parcel {
    Parcel {
        id,
        zone_id,
        thousands_square_length_units,
        ..Default::default()
    }
}

/// three zones and no parcels or nodes
pub fn mock_registry() -> NetworkRegistry {
    NetworkRegistry::new(
        vec![mock_zone(1), mock_zone(2), mock_zone(3)],
        vec![],
        vec![],
        vec![],
    )
    .unwrap_or_default()
}
