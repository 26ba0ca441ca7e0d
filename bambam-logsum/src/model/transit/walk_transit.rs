use super::{evaluate_transit_leg, transit_walk_time, TransitLeg};
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::PathType,
    network::Parcel,
    utility::{AlternativeRequest, PathAlternative, PathContext},
};

/// walk → transit → walk. parcel endpoints search stop-area pairs when stop areas
/// are enabled; otherwise the zone-to-zone transit skim is used with walk access
/// from each endpoint's distance to transit.
pub fn evaluate_walk_transit(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    match (
        ctx.config.use_stop_areas,
        request.origin.parcel(),
        request.destination.parcel(),
    ) {
        (true, Some(origin), Some(destination)) => {
            search_stop_areas(ctx, request, path_type, origin, destination, cache)
        }
        (true, None, None) => nearest_stop_area_transit(ctx, request, path_type, cache),
        _ => zone_transit(ctx, request, path_type, cache),
    }
}

/// transit between the origin and destination zones, walking at each end
fn zone_transit(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let origin_zone = SkimEndpoint::Zone(request.origin.zone_id());
    let destination_zone = SkimEndpoint::Zone(request.destination.zone_id());
    let Some(leg) =
        evaluate_transit_leg(ctx, request, path_type, origin_zone, destination_zone, cache)
    else {
        return PathAlternative::unavailable(request.mode, path_type);
    };
    let legs = request.query.leg_count();
    let walk_times = (
        transit_walk_time(ctx.config, request.origin, path_type, leg.boardings_outbound),
        transit_walk_time(ctx.config, request.destination, path_type, leg.boardings_return),
    );
    let (Some(origin_walk), Some(destination_walk)) = walk_times else {
        return PathAlternative::unavailable(request.mode, path_type);
    };
    let walk_time = (origin_walk + destination_walk) * legs;
    let walk_distance = walk_time / ctx.config.walk_minutes_per_distance_unit();
    with_walk_access(ctx, request, path_type, leg, walk_time, walk_distance)
}

/// zone-keyed transit between each zone's nearest stop area
fn nearest_stop_area_transit(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let stop_of = |endpoint: SkimEndpoint| {
        ctx.registry
            .get_zone(endpoint.zone_id())
            .and_then(|z| z.nearest_stop_area)
    };
    let (Some(origin_stop), Some(destination_stop)) =
        (stop_of(request.origin), stop_of(request.destination))
    else {
        return PathAlternative::unavailable(request.mode, path_type);
    };
    let leg = evaluate_transit_leg(
        ctx,
        request,
        path_type,
        SkimEndpoint::Zone(origin_stop),
        SkimEndpoint::Zone(destination_stop),
        cache,
    );
    let Some(leg) = leg else {
        return PathAlternative::unavailable(request.mode, path_type);
    };
    let walk_time = 2.0 * ctx.config.zone_transit_walk_minutes * request.query.leg_count();
    let walk_distance = walk_time / ctx.config.walk_minutes_per_distance_unit();
    let mut alternative = with_walk_access(ctx, request, path_type, leg, walk_time, walk_distance);
    if alternative.available {
        alternative.origin_stop_area = Some(origin_stop);
        alternative.destination_stop_area = Some(destination_stop);
    }
    alternative
}

fn with_walk_access(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    leg: TransitLeg,
    walk_time: f64,
    walk_distance: f64,
) -> PathAlternative {
    let conf = ctx.config;
    let time = leg.time + walk_time;
    if time > conf.time_limit(request.query.is_round_trip()) {
        return PathAlternative::unavailable(request.mode, path_type);
    }
    let utility = leg.utility
        + conf.utility_scale
            * request.time_coefficient
            * conf.transit_walk_access_time_weight
            * walk_time;
    let mut alternative = PathAlternative::available(
        request.mode,
        path_type,
        time,
        leg.distance + walk_distance,
        leg.cost,
        utility,
    );
    alternative.set_transit_leg(&leg);
    alternative.walk_time = walk_time;
    alternative.walk_distance = walk_distance;
    alternative
}

/// every pair of stop areas near the origin and destination parcels, keeping the
/// pair with the highest utility
fn search_stop_areas(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    origin: &Parcel,
    destination: &Parcel,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let legs = request.query.leg_count();
    let time_limit = conf.time_limit(request.query.is_round_trip());
    let within_reach = |length: f64| length <= conf.max_stop_area_length;
    let origin_stops = ctx
        .registry
        .stop_areas_near(origin.id)
        .iter()
        .take(conf.max_stop_areas_to_search)
        .take_while(|e| within_reach(e.length));

    let mut best: Option<PathAlternative> = None;
    for origin_stop in origin_stops {
        let destination_stops = ctx
            .registry
            .stop_areas_near(destination.id)
            .iter()
            .take(conf.max_stop_areas_to_search)
            .take_while(|e| within_reach(e.length));
        for destination_stop in destination_stops {
            let walk_distance =
                conf.length_to_distance(origin_stop.length + destination_stop.length) * legs;
            let walk_time = walk_distance * conf.walk_minutes_per_distance_unit();
            let Some(leg) = evaluate_transit_leg(
                ctx,
                request,
                path_type,
                SkimEndpoint::Zone(origin_stop.key),
                SkimEndpoint::Zone(destination_stop.key),
                cache,
            ) else {
                continue;
            };
            let time = leg.time + walk_time;
            if time > time_limit {
                continue;
            }
            let utility = leg.utility
                + conf.utility_scale
                    * request.time_coefficient
                    * conf.transit_access_egress_time_weight
                    * walk_time;
            if best.as_ref().is_some_and(|b| utility <= b.utility) {
                continue;
            }
            let mut alternative = PathAlternative::available(
                request.mode,
                path_type,
                time,
                leg.distance + walk_distance,
                leg.cost,
                utility,
            );
            alternative.set_transit_leg(&leg);
            alternative.origin_stop_area = Some(origin_stop.key);
            alternative.destination_stop_area = Some(destination_stop.key);
            alternative.walk_time = walk_time;
            alternative.walk_distance = walk_distance;
            best = Some(alternative);
        }
    }
    best.unwrap_or_else(|| PathAlternative::unavailable(request.mode, path_type))
}

#[cfg(test)]
mod test {
    use super::evaluate_walk_transit;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        impedance::{NodeDistanceCache, SkimEndpoint},
        mode::{Mode, PathType},
        network::{DistanceEntry, DistanceList, NetworkRegistry, Parcel, TransitDistances},
        query::{Purpose, TravelQuery, TripEndpoint},
        test_fixtures::{mock_parcel, mock_zone, MockSkims},
        utility::{AlternativeRequest, PathContext},
    };
    use std::collections::HashMap;

    const LB: PathType = PathType::LocalBus;

    fn mock_transit_skims() -> MockSkims {
        // stop areas 101/102 near the origin, 201 near the destination
        MockSkims::new()
            .with("distance", Mode::Transit, LB, 101, 201, 5.0, None)
            .with("invehtimebus", Mode::Transit, LB, 101, 201, 30.0, None)
            .with("distance", Mode::Transit, LB, 102, 201, 5.0, None)
            .with("invehtimebus", Mode::Transit, LB, 102, 201, 12.0, None)
            .with("distance", Mode::Transit, LB, 1, 2, 5.0, None)
            .with("invehtimebus", Mode::Transit, LB, 1, 2, 20.0, None)
    }

    fn mock_network() -> NetworkRegistry {
        let stops = HashMap::from([
            (
                10,
                DistanceList::new(vec![
                    DistanceEntry { key: 101, length: 528.0 },
                    DistanceEntry { key: 102, length: 1056.0 },
                ]),
            ),
            (20, DistanceList::new(vec![DistanceEntry { key: 201, length: 528.0 }])),
        ]);
        let parcels = vec![
            Parcel {
                transit_distances: TransitDistances {
                    local_bus: 0.1,
                    ..Default::default()
                },
                ..mock_parcel(10, 1, 1.0)
            },
            Parcel {
                transit_distances: TransitDistances {
                    local_bus: 0.2,
                    ..Default::default()
                },
                ..mock_parcel(20, 2, 1.0)
            },
        ];
        NetworkRegistry::new(vec![mock_zone(1), mock_zone(2)], parcels, vec![], vec![])
            .expect("test invariant failed, registry build")
            .with_parcel_stop_areas(stops)
    }

    fn run(conf: &PathImpedanceConfig) -> crate::model::utility::PathAlternative {
        let skims = mock_transit_skims().build(conf);
        let registry = mock_network();
        let ctx = PathContext::new(conf, &skims, &registry);
        let origin = ctx.registry.get_parcel(10).expect("parcel 10");
        let destination = ctx.registry.get_parcel(20).expect("parcel 20");
        let query = TravelQuery::new(TripEndpoint::Parcel(10), TripEndpoint::Parcel(20), 300, Purpose::Work, -0.1, -0.02);
        let request = AlternativeRequest {
            query: &query,
            mode: Mode::Transit,
            origin: SkimEndpoint::Parcel(origin),
            destination: SkimEndpoint::Parcel(destination),
            cost_coefficient: -0.1,
            time_coefficient: -0.02,
            value_of_time: 12.0,
        };
        let mut cache = NodeDistanceCache::new();
        evaluate_walk_transit(&ctx, &request, LB, &mut cache)
    }

    #[test]
    fn test_stop_area_search_keeps_best_pair() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            ..Default::default()
        };
        let transit = run(&conf);
        assert!(transit.available);
        // the farther origin stop has the much shorter ride
        assert_eq!(transit.origin_stop_area, Some(102));
        assert_eq!(transit.destination_stop_area, Some(201));
        let walk_distance = (1056.0 + 528.0) / 5280.0;
        assert!((transit.walk_distance - walk_distance).abs() < 1e-12);
        assert!((transit.time - (12.0 + walk_distance * 20.0)).abs() < 1e-9);
        assert_eq!(transit.transit_time, 12.0);
    }

    #[test]
    fn test_stop_area_search_respects_max_stops() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            max_stop_areas_to_search: 1,
            ..Default::default()
        };
        let transit = run(&conf);
        assert_eq!(transit.origin_stop_area, Some(101));
    }

    #[test]
    fn test_zone_transit_with_parcel_walk_access() {
        let conf = PathImpedanceConfig::default();
        let transit = run(&conf);
        assert!(transit.available);
        // 0.1 and 0.2 miles at 20 minutes per mile
        assert!((transit.walk_time - 6.0).abs() < 1e-9);
        assert!((transit.time - 26.0).abs() < 1e-9);
        let expected = -0.02 * 20.0 + -0.02 * 2.0 * 6.0;
        assert!((transit.utility - expected).abs() < 1e-9);
    }

    #[test]
    fn test_zone_transit_walks_by_direction_boardings() {
        let conf = PathImpedanceConfig::default();
        let lr = PathType::LightRail;
        let skims = MockSkims::new()
            .with_symmetric("distance", Mode::Transit, lr, 1, 2, 5.0, None)
            .with_symmetric("invehtimelrandlocaltrain", Mode::Transit, lr, 1, 2, 10.0, None)
            .with("noofchanges", Mode::Transit, lr, 2, 1, 1.0, None)
            .build(&conf);
        let parcels = vec![
            Parcel {
                transit_distances: TransitDistances {
                    local_bus: 0.3,
                    light_rail: 0.5,
                    ..Default::default()
                },
                ..mock_parcel(10, 1, 1.0)
            },
            Parcel {
                transit_distances: TransitDistances {
                    local_bus: 0.2,
                    ..Default::default()
                },
                ..mock_parcel(20, 2, 1.0)
            },
        ];
        let registry =
            NetworkRegistry::new(vec![mock_zone(1), mock_zone(2)], parcels, vec![], vec![])
                .expect("test invariant failed, registry build");
        let ctx = PathContext::new(&conf, &skims, &registry);
        let origin = ctx.registry.get_parcel(10).expect("parcel 10");
        let destination = ctx.registry.get_parcel(20).expect("parcel 20");
        let query = TravelQuery::new(TripEndpoint::Parcel(10), TripEndpoint::Parcel(20), 300, Purpose::Work, -0.1, -0.02)
            .with_return(600);
        let request = AlternativeRequest {
            query: &query,
            mode: Mode::Transit,
            origin: SkimEndpoint::Parcel(origin),
            destination: SkimEndpoint::Parcel(destination),
            cost_coefficient: -0.1,
            time_coefficient: -0.02,
            value_of_time: 12.0,
        };
        let mut cache = NodeDistanceCache::new();
        let transit = evaluate_walk_transit(&ctx, &request, lr, &mut cache);
        assert!(transit.available);
        // one outbound boarding takes the 0.5 mi rail stop at the origin; the
        // destination has only local bus at 0.2 mi. both walked twice.
        assert!((transit.walk_time - (10.0 + 4.0) * 2.0).abs() < 1e-9);
    }
}
