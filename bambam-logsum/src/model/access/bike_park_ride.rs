use super::access_ops::{
    bike_access_nodes, combine, direct_distance, keep_best, shadow_price, station_walk_distance,
    stops_near, AccessLegs, BikeAccess, Egress,
};
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::{Mode, PathType},
    network::Parcel,
    transit::evaluate_transit_leg,
    utility::{parking_ops, AlternativeRequest, PathAlternative, PathContext},
};

/// bike → park → transit, then walk or bike from the destination stop area. the
/// bike is parked at a facility in one of the zones listed near the origin parcel.
pub fn evaluate_bike_park_ride(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    (origin, destination): (&Parcel, &Parcel),
    egress: Egress,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let legs = request.query.leg_count();
    let direct = direct_distance(ctx, request, Mode::Bike, cache);

    let mut best = None;
    for BikeAccess {
        node,
        bike_distance,
        ..
    } in bike_access_nodes(ctx, origin.id, direct, legs)
    {
        let bike_cost = node.bike_parking_cost();
        let mut access = AccessLegs {
            node_id: Some(node.id),
            ..Default::default()
        }
        .with_bike(ctx, request, bike_distance)
        .with_walk(ctx, request, station_walk_distance(ctx, node, legs))
        .with_cost(ctx, request, bike_cost);
        access.bike_cost = bike_cost;

        for destination_stop in stops_near(ctx, destination.id, conf.max_stop_area_length) {
            let Some(leg) = evaluate_transit_leg(
                ctx,
                request,
                path_type,
                SkimEndpoint::Zone(node.nearest_stop_area),
                SkimEndpoint::Zone(destination_stop.key),
                cache,
            ) else {
                continue;
            };
            let egress_distance = conf.length_to_distance(destination_stop.length) * legs;
            let minute = parking_ops::mode_change_minute(request.query.outbound_minute, leg.time);
            let combined = egress
                .add_to(access, ctx, request, egress_distance)
                .with_utility(shadow_price(ctx, node, minute));
            let stops = (Some(node.nearest_stop_area), Some(destination_stop.key));
            if let Some(candidate) = combine(ctx, request, path_type, &leg, &combined, stops) {
                keep_best(&mut best, candidate);
            }
        }
    }
    best.unwrap_or_else(|| PathAlternative::unavailable(request.mode, path_type))
}

#[cfg(test)]
mod test {
    use super::evaluate_bike_park_ride;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        access::access_ops::Egress,
        impedance::{NodeDistanceCache, SkimEndpoint},
        mode::{Mode, PathType},
        network::{DistanceEntry, DistanceList, NetworkRegistry, ParkAndRideNode, ParkingType},
        query::{Purpose, TravelQuery, TripEndpoint},
        test_fixtures::{mock_parcel, mock_zone, MockSkims},
        utility::{AlternativeRequest, PathAlternative, PathContext},
    };
    use std::collections::HashMap;

    const LB: PathType = PathType::LocalBus;

    fn mock_network(max_bike_in_zone_list: f64) -> NetworkRegistry {
        let mut node =
            ParkAndRideNode::new(9, 3, 30, 50.0, 1.0, ParkingType::Paid, false, 301, 264.0);
        node.cost_annual = 50.0;
        let stops = HashMap::from([(
            20,
            DistanceList::new(vec![DistanceEntry { key: 201, length: 528.0 }]),
        )]);
        let nodes_near = HashMap::from([(
            10,
            DistanceList::new(vec![DistanceEntry {
                key: 3,
                length: max_bike_in_zone_list,
            }]),
        )]);
        NetworkRegistry::new(
            vec![mock_zone(1), mock_zone(2), mock_zone(3)],
            vec![
                mock_parcel(10, 1, 1.0),
                mock_parcel(20, 2, 1.0),
                mock_parcel(30, 3, 1.0),
            ],
            vec![node],
            vec![],
        )
        .expect("test invariant failed, registry build")
        .with_parcel_stop_areas(stops)
        .with_parcel_nodes(nodes_near)
    }

    fn run(conf: &PathImpedanceConfig, registry: &NetworkRegistry, egress: Egress) -> PathAlternative {
        let skims = MockSkims::new()
            .with("distance", Mode::Bike, PathType::FullNetwork, 1, 2, 10.0, None)
            .with_symmetric("distance", Mode::Transit, LB, 301, 201, 6.0, None)
            .with_symmetric("invehtimebus", Mode::Transit, LB, 301, 201, 15.0, None)
            .build(conf);
        let ctx = PathContext::new(conf, &skims, registry);
        let origin = ctx.registry.get_parcel(10).expect("parcel 10");
        let destination = ctx.registry.get_parcel(20).expect("parcel 20");
        let query = TravelQuery::new(
            TripEndpoint::Parcel(10),
            TripEndpoint::Parcel(20),
            420,
            Purpose::Shopping,
            -0.1,
            -0.02,
        )
        .with_return(600);
        let mode = match egress {
            Egress::Walk => Mode::BikeParkRideWalk,
            Egress::Bike => Mode::BikeParkRideBike,
        };
        let request = AlternativeRequest {
            query: &query,
            mode,
            origin: SkimEndpoint::Parcel(origin),
            destination: SkimEndpoint::Parcel(destination),
            cost_coefficient: -0.1,
            time_coefficient: -0.02,
            value_of_time: 12.0,
        };
        let mut cache = NodeDistanceCache::new();
        evaluate_bike_park_ride(&ctx, &request, LB, (origin, destination), egress, &mut cache)
    }

    #[test]
    fn test_bike_access_walk_egress() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            ..Default::default()
        };
        let registry = mock_network(2640.0);
        let result = run(&conf, &registry, Egress::Walk);
        assert!(result.available);
        assert_eq!(result.node_id, Some(9));
        // 2 × 0.5 mi at 6 minutes per mile
        assert!((result.bike_time - 6.0).abs() < 1e-9);
        // station walk 0.1 mi and egress 0.2 mi
        assert!((result.walk_time - 6.0).abs() < 1e-9);
        assert!((result.time - 42.0).abs() < 1e-9);
        // annual cost / 100 is below the daily cost
        assert!((result.bike_cost - 0.5).abs() < 1e-12);
        assert!((result.cost - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bike_access_bike_egress() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            ..Default::default()
        };
        let registry = mock_network(2640.0);
        let result = run(&conf, &registry, Egress::Bike);
        assert!(result.available);
        assert!((result.bike_time - 7.2).abs() < 1e-9);
        assert!((result.walk_time - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_bike_length_limit() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            max_bike_length: 1000.0,
            ..Default::default()
        };
        let registry = mock_network(2640.0);
        let result = run(&conf, &registry, Egress::Walk);
        assert!(!result.available);
    }
}
