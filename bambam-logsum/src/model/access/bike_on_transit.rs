use super::access_ops::{combine, keep_best, stops_near, AccessLegs};
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::PathType,
    network::{DistanceEntry, Parcel},
    transit::evaluate_transit_leg,
    utility::{AlternativeRequest, PathAlternative, PathContext},
};

/// bike → transit with the bike on board → bike. both stop areas must accept bikes.
pub fn evaluate_bike_on_transit(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    (origin, destination): (&Parcel, &Parcel),
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let legs = request.query.leg_count();
    let accepts_bikes = |entry: &&DistanceEntry| {
        ctx.registry
            .get_stop_area(entry.key)
            .map(|s| s.bike_on_board_terminal)
            .unwrap_or(false)
    };
    let destination_stops: Vec<&DistanceEntry> =
        stops_near(ctx, destination.id, conf.max_stop_area_length)
            .filter(accepts_bikes)
            .collect();

    let mut best = None;
    for origin_stop in stops_near(ctx, origin.id, conf.max_stop_area_length).filter(accepts_bikes) {
        for destination_stop in destination_stops.iter() {
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
            let bike_distance =
                conf.length_to_distance(origin_stop.length + destination_stop.length) * legs;
            let access = AccessLegs::default().with_bike(ctx, request, bike_distance);
            let stops = (Some(origin_stop.key), Some(destination_stop.key));
            if let Some(candidate) = combine(ctx, request, path_type, &leg, &access, stops) {
                keep_best(&mut best, candidate);
            }
        }
    }
    best.unwrap_or_else(|| PathAlternative::unavailable(request.mode, path_type))
}

#[cfg(test)]
mod test {
    use super::evaluate_bike_on_transit;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        impedance::{NodeDistanceCache, SkimEndpoint},
        mode::{Mode, PathType},
        network::{DistanceEntry, DistanceList, NetworkRegistry, StopArea},
        query::{Purpose, TravelQuery, TripEndpoint},
        test_fixtures::{mock_parcel, mock_zone, MockSkims},
        utility::{AlternativeRequest, PathContext},
    };
    use std::collections::HashMap;

    const CR: PathType = PathType::CommuterRail;

    fn stop(key: i64, bike_on_board_terminal: bool) -> StopArea {
        StopArea {
            key,
            zone_id: 1,
            bike_on_board_terminal,
        }
    }

    #[test]
    fn test_only_bike_terminals_are_used() {
        let conf = PathImpedanceConfig {
            use_stop_areas: true,
            ..Default::default()
        };
        let skims = MockSkims::new()
            .with("distance", Mode::BikeOnTransit, CR, 101, 201, 8.0, None)
            .with("invehtimeretrain", Mode::BikeOnTransit, CR, 101, 201, 20.0, None)
            .with("distance", Mode::BikeOnTransit, CR, 102, 201, 8.0, None)
            .with("invehtimeretrain", Mode::BikeOnTransit, CR, 102, 201, 5.0, None)
            .build(&conf);
        let stops = HashMap::from([
            (
                10,
                DistanceList::new(vec![
                    DistanceEntry { key: 102, length: 528.0 },
                    DistanceEntry { key: 101, length: 1056.0 },
                ]),
            ),
            (20, DistanceList::new(vec![DistanceEntry { key: 201, length: 528.0 }])),
        ]);
        let registry = NetworkRegistry::new(
            vec![mock_zone(1), mock_zone(2)],
            vec![mock_parcel(10, 1, 1.0), mock_parcel(20, 2, 1.0)],
            vec![],
            vec![stop(101, true), stop(102, false), stop(201, true)],
        )
        .expect("test invariant failed, registry build")
        .with_parcel_stop_areas(stops);
        let ctx = PathContext::new(&conf, &skims, &registry);
        let origin = ctx.registry.get_parcel(10).expect("parcel 10");
        let destination = ctx.registry.get_parcel(20).expect("parcel 20");
        let query = TravelQuery::new(
            TripEndpoint::Parcel(10),
            TripEndpoint::Parcel(20),
            420,
            Purpose::Recreation,
            -0.1,
            -0.02,
        );
        let request = AlternativeRequest {
            query: &query,
            mode: Mode::BikeOnTransit,
            origin: SkimEndpoint::Parcel(origin),
            destination: SkimEndpoint::Parcel(destination),
            cost_coefficient: -0.1,
            time_coefficient: -0.02,
            value_of_time: 12.0,
        };
        let mut cache = NodeDistanceCache::new();
        let result =
            evaluate_bike_on_transit(&ctx, &request, CR, (origin, destination), &mut cache);
        assert!(result.available);
        // 102 has the faster ride but does not take bikes
        assert_eq!(result.origin_stop_area, Some(101));
        // 0.3 mi at 6 minutes per mile
        assert!((result.bike_time - 1.8).abs() < 1e-9);
        assert!((result.time - 21.8).abs() < 1e-9);
        let expected = -0.02 * 20.0 + -0.02 * 1.5 * 1.8;
        assert!((result.utility - expected).abs() < 1e-9);
    }
}
