use super::{
    BlendingParameters, ImpedanceLookup, NodeDistanceCache, NodeDistanceTable, SkimEndpoint,
    SkimRequest, SkimValue,
};
use crate::model::{
    mode::{Mode, PathType},
    network::Parcel,
    utility::logit_ops::EPSILON,
};
use std::collections::HashMap;

/// one skim matrix, valid over a value-of-time range and a range of minutes
#[derive(Clone, Debug)]
struct RosterEntry {
    vot_min: f64,
    vot_max: f64,
    minute_start: i32,
    minute_end: i32,
    blend_variable: Option<String>,
    values: HashMap<(i64, i64), f64>,
}

impl RosterEntry {
    fn matches(&self, value_of_time: f64, minute: i32) -> bool {
        let vot = value_of_time.max(EPSILON);
        vot > self.vot_min
            && vot <= self.vot_max
            && minute >= self.minute_start
            && minute <= self.minute_end
    }
}

/// in-memory impedance lookup over zone-to-zone skims, with parcel-level blending
/// of short trips toward node-to-node or circuity distances.
#[derive(Clone, Debug)]
pub struct SkimRoster {
    entries: HashMap<String, HashMap<(Mode, PathType), Vec<RosterEntry>>>,
    node_distances: Option<NodeDistanceTable>,
    blending: BlendingParameters,
}

impl SkimRoster {
    pub fn new(blending: BlendingParameters) -> SkimRoster {
        SkimRoster {
            entries: HashMap::new(),
            node_distances: None,
            blending,
        }
    }

    pub fn with_node_distances(mut self, table: NodeDistanceTable) -> Self {
        self.node_distances = Some(table);
        self
    }

    /// adds one origin-destination value. the matrix is created on first use of its
    /// (variable, mode, path type, vot range, minute range) address.
    #[allow(clippy::too_many_arguments)]
    pub fn insert(
        &mut self,
        variable: &str,
        mode: Mode,
        path_type: PathType,
        vot_range: (f64, f64),
        minute_range: (i32, i32),
        blend_variable: Option<&str>,
        origin: i64,
        destination: i64,
        value: f64,
    ) {
        let entries = self
            .entries
            .entry(variable.to_string())
            .or_default()
            .entry((mode, path_type))
            .or_default();
        let position = entries.iter().position(|e| {
            e.vot_min == vot_range.0
                && e.vot_max == vot_range.1
                && e.minute_start == minute_range.0
                && e.minute_end == minute_range.1
        });
        let idx = match position {
            Some(idx) => idx,
            None => {
                entries.push(RosterEntry {
                    vot_min: vot_range.0,
                    vot_max: vot_range.1,
                    minute_start: minute_range.0,
                    minute_end: minute_range.1,
                    blend_variable: None,
                    values: HashMap::new(),
                });
                entries.len() - 1
            }
        };
        let entry = &mut entries[idx];
        if entry.blend_variable.is_none() {
            entry.blend_variable = blend_variable.map(String::from);
        }
        entry.values.insert((origin, destination), value);
    }

    /// number of distinct skim variables
    pub fn variable_count(&self) -> usize {
        self.entries.len()
    }

    fn find_entry(&self, request: &SkimRequest) -> Option<&RosterEntry> {
        self.entries
            .get(request.variable)?
            .get(&(request.mode, request.path_type))?
            .iter()
            .find(|e| e.matches(request.value_of_time, request.minute))
    }

    fn raw_value(&self, request: &SkimRequest, origin: i64, destination: i64) -> f64 {
        let value = self
            .find_entry(request)
            .and_then(|e| e.values.get(&(origin, destination)).copied())
            .unwrap_or(0.0);
        if origin == destination && value < EPSILON {
            self.intrazonal_default(request.variable, request.mode)
                .unwrap_or(value)
        } else {
            value
        }
    }

    /// zone-level value and its blend variable
    fn zone_value(&self, request: &SkimRequest, origin: i64, destination: i64) -> SkimValue {
        let value = self.raw_value(request, origin, destination);
        let blend = match self.find_entry(request).and_then(|e| e.blend_variable.as_deref()) {
            Some(blend_variable) => {
                self.raw_value(&request.with_variable(blend_variable), origin, destination)
            }
            None => 0.0,
        };
        SkimValue::new(value, blend)
    }

    /// intrazonal values used when a zone's own cell is empty
    fn intrazonal_default(&self, variable: &str, mode: Mode) -> Option<f64> {
        match variable {
            "distance" => Some(0.25 * self.blending.distance_units_per_mile),
            "time" | "ivtime" | "ivtfree" => Some(match mode {
                Mode::Walk => 5.0,
                Mode::Bike => 2.0,
                m if m.is_auto() => 1.0,
                _ => 0.0,
            }),
            _ => None,
        }
    }

    fn xy_distance(
        &self,
        origin: &Parcel,
        destination: &Parcel,
        cache: &mut NodeDistanceCache,
    ) -> f64 {
        let params = &self.blending;
        if params.use_node_to_node_distances {
            if let (Some(table), Some(o), Some(d)) =
                (&self.node_distances, origin.node_id, destination.node_id)
            {
                if let Some(length) = cache.node_to_node_length(table, o, d) {
                    return params.length_to_distance(length);
                }
            }
        }
        if params.use_circuity_distances {
            let circuity = params.circuity_distance(origin, destination);
            if circuity > EPSILON {
                return circuity;
            }
        }
        params.orthogonal_distance(origin, destination)
    }

    fn blend_parcels(
        &self,
        request: &SkimRequest,
        origin: &Parcel,
        destination: &Parcel,
        zone_value: SkimValue,
        cache: &mut NodeDistanceCache,
    ) -> SkimValue {
        let network_distance = zone_value.blend;
        let network_fraction = if origin.zone_id == destination.zone_id {
            0.0
        } else {
            (network_distance / self.blending.maximum_blending_distance).min(1.0)
        };
        let xy_distance = if network_fraction >= 1.0 {
            network_distance
        } else {
            self.xy_distance(origin, destination, cache)
        };
        let blended = match (network_distance >= EPSILON, xy_distance >= EPSILON) {
            (true, true) => {
                network_fraction * network_distance + (1.0 - network_fraction) * xy_distance
            }
            (false, true) => xy_distance,
            (true, false) => network_distance,
            (false, false) => 0.0,
        };
        let minutes_per_distance_unit = if network_distance >= EPSILON {
            zone_value.value / network_distance
        } else {
            self.blending.default_minutes_per_distance_unit(request.mode)
        };
        SkimValue::new(blended * minutes_per_distance_unit, blended)
    }
}

impl ImpedanceLookup for SkimRoster {
    fn get_value(
        &self,
        request: &SkimRequest,
        origin: SkimEndpoint<'_>,
        destination: SkimEndpoint<'_>,
        cache: &mut NodeDistanceCache,
    ) -> SkimValue {
        let zone_value = self.zone_value(request, origin.zone_id(), destination.zone_id());
        let has_blend = self
            .find_entry(request)
            .map(|e| e.blend_variable.is_some())
            .unwrap_or(false);
        match (origin, destination) {
            (SkimEndpoint::Parcel(o), SkimEndpoint::Parcel(d))
                if self.blending.enabled && has_blend =>
            {
                self.blend_parcels(request, o, d, zone_value, cache)
            }
            _ => zone_value,
        }
    }
}

#[cfg(test)]
mod test {
    use super::SkimRoster;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        impedance::{
            BlendingParameters, ImpedanceLookup, NodeDistanceCache, NodeDistanceTable,
            SkimEndpoint, SkimRequest,
        },
        mode::{Mode, PathType},
        network::Parcel,
    };

    const ALL_VOT: (f64, f64) = (0.0, 10000.0);
    const ALL_DAY: (i32, i32) = (1, 1440);

    fn mock_roster(blending_enabled: bool) -> SkimRoster {
        let conf = PathImpedanceConfig {
            blending_enabled,
            use_node_to_node_distances: true,
            maximum_blending_distance: 2.0,
            ..Default::default()
        };
        let mut roster = SkimRoster::new(BlendingParameters::from(&conf));
        roster.insert("time", Mode::Walk, PathType::FullNetwork, ALL_VOT, ALL_DAY, Some("distance"), 1, 2, 20.0);
        roster.insert("distance", Mode::Walk, PathType::FullNetwork, ALL_VOT, ALL_DAY, None, 1, 2, 1.0);
        roster.insert("time", Mode::Sov, PathType::FullNetwork, (0.0, 10.0), (1, 600), None, 1, 2, 12.0);
        roster.insert("time", Mode::Sov, PathType::FullNetwork, (0.0, 10.0), (601, 1440), None, 1, 2, 18.0);
        roster.with_node_distances(NodeDistanceTable::new(vec![(100, 200, 2640.0)]))
    }

    fn mock_parcel(id: i64, zone_id: i64, node_id: i64) -> Parcel {
        Parcel {
            id,
            zone_id,
            node_id: Some(node_id),
            ..Default::default()
        }
    }

    #[test]
    fn test_zone_lookup_with_blend_variable() {
        let roster = mock_roster(false);
        let mut cache = NodeDistanceCache::new();
        let request = SkimRequest::new("time", Mode::Walk, PathType::FullNetwork, 5.0, 300);
        let value = roster.get_value(&request, SkimEndpoint::Zone(1), SkimEndpoint::Zone(2), &mut cache);
        assert_eq!(value.value, 20.0);
        assert_eq!(value.blend, 1.0);
    }

    #[test]
    fn test_minute_ranges_select_matrix() {
        let roster = mock_roster(false);
        let mut cache = NodeDistanceCache::new();
        let am = SkimRequest::new("time", Mode::Sov, PathType::FullNetwork, 5.0, 300);
        let pm = am.at_minute(900);
        let o = SkimEndpoint::Zone(1);
        let d = SkimEndpoint::Zone(2);
        assert_eq!(roster.get_value(&am, o, d, &mut cache).value, 12.0);
        assert_eq!(roster.get_value(&pm, o, d, &mut cache).value, 18.0);
        // outside of every vot range
        let rich = SkimRequest::new("time", Mode::Sov, PathType::FullNetwork, 50.0, 300);
        assert_eq!(roster.get_value(&rich, o, d, &mut cache).value, 0.0);
    }

    #[test]
    fn test_intrazonal_defaults() {
        let roster = mock_roster(false);
        let mut cache = NodeDistanceCache::new();
        let request = SkimRequest::new("time", Mode::Walk, PathType::FullNetwork, 5.0, 300);
        let value = roster.get_value(&request, SkimEndpoint::Zone(3), SkimEndpoint::Zone(3), &mut cache);
        assert_eq!(value.value, 5.0);
        assert_eq!(value.blend, 0.25);
    }

    #[test]
    fn test_parcel_blending_pivots_on_node_distance() {
        let roster = mock_roster(true);
        let mut cache = NodeDistanceCache::new();
        let request = SkimRequest::new("time", Mode::Walk, PathType::FullNetwork, 5.0, 300);
        let origin = mock_parcel(10, 1, 100);
        let destination = mock_parcel(20, 2, 200);
        let value = roster.get_value(
            &request,
            SkimEndpoint::Parcel(&origin),
            SkimEndpoint::Parcel(&destination),
            &mut cache,
        );
        // network fraction 0.5 of a 1.0 network distance and a 0.5 node distance
        assert!((value.blend - 0.75).abs() < 1e-12);
        assert!((value.value - 15.0).abs() < 1e-9);
    }
}
