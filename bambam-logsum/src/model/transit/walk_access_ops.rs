use crate::config::PathImpedanceConfig;
use crate::model::{impedance::SkimEndpoint, mode::PathType, network::Parcel};

/// one-way walk minutes between an endpoint and transit for a path type, or None
/// when transit is beyond walking distance. zone endpoints use a fixed access time.
/// `boardings` counts the boardings of the direction this end is walked on.
pub fn transit_walk_time(
    conf: &PathImpedanceConfig,
    endpoint: SkimEndpoint,
    path_type: PathType,
    boardings: f64,
) -> Option<f64> {
    match endpoint.parcel() {
        None => Some(conf.zone_transit_walk_minutes),
        Some(parcel) => {
            let miles = transit_walk_distance(conf, parcel, path_type, boardings)?;
            Some(miles * conf.walk_minutes_per_mile)
        }
    }
}

/// walk distance in miles to the stop used for access. local bus is the default
/// feeder; the path type's own submode stop replaces it when closer, or when the
/// trip is a single boarding and that stop is within the direct-access limit.
fn transit_walk_distance(
    conf: &PathImpedanceConfig,
    parcel: &Parcel,
    path_type: PathType,
    boardings: f64,
) -> Option<f64> {
    let distances = &parcel.transit_distances;
    let mut distance = distances.local_bus;
    if let Some(alternative) = distances.alternative_for(path_type) {
        let single_boarding = boardings < conf.transit_single_boarding_limit
            && alternative < conf.transit_walk_access_direct_limit;
        if alternative < distance || single_boarding {
            distance = alternative;
        }
    }
    if distance >= 0.0 && distance < conf.transit_walk_access_distance_limit {
        Some(distance)
    } else {
        None
    }
}

#[cfg(test)]
mod test {
    use super::transit_walk_time;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        impedance::SkimEndpoint,
        mode::PathType,
        network::{Parcel, TransitDistances},
    };

    fn mock_parcel(local_bus: f64, light_rail: f64) -> Parcel {
        Parcel {
            transit_distances: TransitDistances {
                local_bus,
                light_rail,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_walk_time_choices() {
        let conf = PathImpedanceConfig::default();
        let near_bus = mock_parcel(0.25, 0.5);
        let walk = |parcel: &Parcel, path_type, boardings| {
            transit_walk_time(&conf, SkimEndpoint::Parcel(parcel), path_type, boardings)
        };
        assert_eq!(walk(&near_bus, PathType::LightRail, 2.0), Some(5.0));
        // a single boarding prefers the rail stop within the direct limit
        assert_eq!(walk(&near_bus, PathType::LightRail, 1.0), Some(10.0));
        // local bus paths never use the rail stop
        assert_eq!(walk(&near_bus, PathType::LocalBus, 1.0), Some(5.0));
        let far = mock_parcel(1.5, -1.0);
        assert_eq!(walk(&far, PathType::LightRail, 1.0), None);
        assert_eq!(
            transit_walk_time(&conf, SkimEndpoint::Zone(4), PathType::LocalBus, 1.0),
            Some(5.0)
        );
    }

    #[test]
    fn test_walk_stop_follows_path_type() {
        let conf = PathImpedanceConfig::default();
        let parcel = mock_parcel(0.3, 0.1);
        let walk = |path_type| {
            transit_walk_time(&conf, SkimEndpoint::Parcel(&parcel), path_type, 2.0)
        };
        assert_eq!(walk(PathType::LocalBus), Some(6.0));
        assert_eq!(walk(PathType::LightRail), Some(2.0));
        // no express bus stop, so premium bus walks to the local bus
        assert_eq!(walk(PathType::PremiumBus), Some(6.0));
    }

    #[test]
    fn test_walk_limits_are_exclusive() {
        let conf = PathImpedanceConfig::default();
        let at_limit = mock_parcel(conf.transit_walk_access_distance_limit, -1.0);
        let walk = transit_walk_time(&conf, SkimEndpoint::Parcel(&at_limit), PathType::LocalBus, 1.0);
        assert_eq!(walk, None);
        // a rail stop exactly at the direct limit is not taken on a single boarding
        let parcel = mock_parcel(0.2, conf.transit_walk_access_direct_limit);
        let walk = transit_walk_time(&conf, SkimEndpoint::Parcel(&parcel), PathType::LightRail, 1.0);
        assert_eq!(walk, Some(0.2 * conf.walk_minutes_per_mile));
    }
}
