use super::access_ops::{
    bike_access_nodes, combine, direct_distance, keep_best, station_walk_distance, stops_near,
    AccessLegs, BikeAccess,
};
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::{Mode, PathType},
    network::Parcel,
    transit::evaluate_transit_leg,
    utility::{AlternativeRequest, PathAlternative, PathContext},
};

/// walk → transit → bike. the bike waits at a facility near the destination; the
/// traveler walks from the facility's stop area to the bike.
pub fn evaluate_walk_ride_bike(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    (origin, destination): (&Parcel, &Parcel),
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let legs = request.query.leg_count();
    let direct = direct_distance(ctx, request, Mode::Bike, cache);
    let egress_nodes = bike_access_nodes(ctx, destination.id, direct, legs);

    let mut best = None;
    for origin_stop in stops_near(ctx, origin.id, conf.max_stop_area_length) {
        let walk_distance = conf.length_to_distance(origin_stop.length) * legs;
        for BikeAccess {
            node,
            bike_distance,
            ..
        } in egress_nodes.iter()
        {
            let Some(leg) = evaluate_transit_leg(
                ctx,
                request,
                path_type,
                SkimEndpoint::Zone(origin_stop.key),
                SkimEndpoint::Zone(node.nearest_stop_area),
                cache,
            ) else {
                continue;
            };
            let bike_cost = node.bike_parking_cost();
            let mut access = AccessLegs {
                node_id: Some(node.id),
                ..Default::default()
            }
            .with_walk(ctx, request, walk_distance)
            .with_walk(ctx, request, station_walk_distance(ctx, node, legs))
            .with_bike(ctx, request, *bike_distance)
            .with_cost(ctx, request, bike_cost);
            access.bike_cost = bike_cost;
            let stops = (Some(origin_stop.key), Some(node.nearest_stop_area));
            if let Some(candidate) = combine(ctx, request, path_type, &leg, &access, stops) {
                keep_best(&mut best, candidate);
            }
        }
    }
    best.unwrap_or_else(|| PathAlternative::unavailable(request.mode, path_type))
}

#[cfg(test)]
mod test {
    use super::evaluate_walk_ride_bike;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        impedance::{NodeDistanceCache, SkimEndpoint},
        mode::{Mode, PathType},
        network::{DistanceEntry, DistanceList, NetworkRegistry, ParkAndRideNode, ParkingType},
        query::{Purpose, TravelQuery, TripEndpoint},
        test_fixtures::{mock_parcel, mock_zone, MockSkims},
        utility::{AlternativeRequest, PathContext},
    };
    use std::collections::HashMap;

    const LR: PathType = PathType::LightRail;

    #[test]
    fn test_walk_then_bike_from_destination_facility() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            ..Default::default()
        };
        let skims = MockSkims::new()
            .with("distance", Mode::Bike, PathType::FullNetwork, 1, 2, 10.0, None)
            .with("distance", Mode::Transit, LR, 101, 401, 6.0, None)
            .with("invehtimelrandlocaltrain", Mode::Transit, LR, 101, 401, 18.0, None)
            .build(&conf);
        // a bike facility in zone 4, listed 1/4 mile from the destination parcel
        let node = ParkAndRideNode::new(11, 4, 40, 20.0, 0.0, ParkingType::Free, false, 401, 0.0);
        let registry = NetworkRegistry::new(
            vec![mock_zone(1), mock_zone(2), mock_zone(4)],
            vec![
                mock_parcel(10, 1, 1.0),
                mock_parcel(20, 2, 1.0),
                mock_parcel(40, 4, 1.0),
            ],
            vec![node],
            vec![],
        )
        .expect("test invariant failed, registry build")
        .with_parcel_stop_areas(HashMap::from([(
            10,
            DistanceList::new(vec![DistanceEntry { key: 101, length: 528.0 }]),
        )]))
        .with_parcel_nodes(HashMap::from([(
            20,
            DistanceList::new(vec![DistanceEntry { key: 4, length: 1320.0 }]),
        )]));
        let ctx = PathContext::new(&conf, &skims, &registry);
        let origin = ctx.registry.get_parcel(10).expect("parcel 10");
        let destination = ctx.registry.get_parcel(20).expect("parcel 20");
        let query = TravelQuery::new(
            TripEndpoint::Parcel(10),
            TripEndpoint::Parcel(20),
            420,
            Purpose::School,
            -0.1,
            -0.02,
        );
        let request = AlternativeRequest {
            query: &query,
            mode: Mode::WalkRideBike,
            origin: SkimEndpoint::Parcel(origin),
            destination: SkimEndpoint::Parcel(destination),
            cost_coefficient: -0.1,
            time_coefficient: -0.02,
            value_of_time: 12.0,
        };
        let mut cache = NodeDistanceCache::new();
        let result =
            evaluate_walk_ride_bike(&ctx, &request, LR, (origin, destination), &mut cache);
        assert!(result.available);
        assert_eq!(result.node_id, Some(11));
        assert_eq!(result.destination_stop_area, Some(401));
        // 0.1 mi walk, 0.25 mi bike
        assert!((result.walk_time - 2.0).abs() < 1e-9);
        assert!((result.bike_time - 1.5).abs() < 1e-9);
        assert!((result.time - 21.5).abs() < 1e-9);
    }
}
