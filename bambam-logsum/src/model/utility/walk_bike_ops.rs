use super::{logit_ops::EPSILON, AlternativeRequest, PathAlternative, PathContext};
use crate::model::{impedance::NodeDistanceCache, mode::Mode, mode::PathType};

/// time, distance and utility of a walk or bike trip
pub fn evaluate_walk_bike(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let mode = request.mode;
    let legs = request.query.leg_count();

    let (time, distance) = match (request.origin.parcel(), request.destination.parcel()) {
        (Some(o), Some(d)) if o.id == d.id => {
            // same parcel, the skims have nothing to offer
            let distance = ctx.blending.intra_parcel_distance(o);
            let minutes_per_unit = match mode {
                Mode::Bike => conf.bike_minutes_per_distance_unit(),
                _ => conf.walk_minutes_per_distance_unit(),
            };
            let time = (distance * minutes_per_unit).max(1.0);
            (time * legs, distance * legs)
        }
        _ => {
            let skim = request.skim_round_trip(
                ctx,
                cache,
                "time",
                mode,
                path_type,
                request.origin,
                request.destination,
            );
            let mut time = skim.value;
            if mode == Mode::Bike && conf.bike_quality_classes_enabled && skim.blend > EPSILON {
                time *= 1.0 + bike_quality_adjustment(ctx, request, path_type, skim.blend, cache);
            }
            (time, skim.blend)
        }
    };

    if time < EPSILON || time > conf.time_limit(request.query.is_round_trip()) {
        return PathAlternative::unavailable(mode, path_type);
    }

    let weight = match mode {
        Mode::Bike => conf.bike_time_weight,
        _ => conf.walk_time_weight,
    };
    let utility = conf.utility_scale * request.time_coefficient * time * weight;
    let mut alternative =
        PathAlternative::available(mode, path_type, time, distance, 0.0, utility);
    match mode {
        Mode::Bike => {
            alternative.bike_time = time;
            alternative.bike_distance = distance;
        }
        _ => {
            alternative.walk_time = time;
            alternative.walk_distance = distance;
        }
    }
    alternative
}

/// weighted share of the trip on each bike facility class
fn bike_quality_adjustment(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    distance: f64,
    cache: &mut NodeDistanceCache,
) -> f64 {
    ctx.config
        .bike_quality_weights
        .classes()
        .iter()
        .filter(|(_, weight)| weight.abs() >= EPSILON)
        .map(|(variable, weight)| {
            let class_distance = request
                .skim_round_trip(
                    ctx,
                    cache,
                    variable,
                    Mode::Bike,
                    path_type,
                    request.origin,
                    request.destination,
                )
                .value;
            class_distance / distance * weight
        })
        .sum()
}

#[cfg(test)]
mod test {
    use super::evaluate_walk_bike;
    use crate::config::{BikeQualityWeights, PathImpedanceConfig};
    use crate::model::{
        impedance::{NodeDistanceCache, SkimEndpoint},
        mode::{Mode, PathType},
        query::{Purpose, TravelQuery, TripEndpoint},
        test_fixtures::{mock_parcel, mock_registry, MockSkims},
        utility::{AlternativeRequest, PathContext},
    };

    fn mock_request<'q>(
        query: &'q TravelQuery,
        mode: Mode,
        origin: SkimEndpoint<'q>,
        destination: SkimEndpoint<'q>,
    ) -> AlternativeRequest<'q> {
        AlternativeRequest {
            query,
            mode,
            origin,
            destination,
            cost_coefficient: -0.15,
            time_coefficient: -0.045,
            value_of_time: 18.0,
        }
    }

    #[test]
    fn test_same_parcel_uses_intrazonal_floor() {
        let conf = PathImpedanceConfig::default();
        // no walk skims at all
        let skims = MockSkims::new().build(&conf);
        let registry = mock_registry();
        let ctx = PathContext::new(&conf, &skims, &registry);
        let parcel = mock_parcel(1, 1, 10_000.0);
        let query = TravelQuery::new(TripEndpoint::Parcel(1), TripEndpoint::Parcel(1), 300, Purpose::Shopping, -0.15, -0.045);
        let request = mock_request(&query, Mode::Walk, SkimEndpoint::Parcel(&parcel), SkimEndpoint::Parcel(&parcel));
        let mut cache = NodeDistanceCache::new();
        let walk = evaluate_walk_bike(&ctx, &request, PathType::FullNetwork, &mut cache);

        let expected_distance = (1000.0f64 * 10_000.0).sqrt() / 2.0 / 5280.0;
        assert!(walk.available, "intrazonal walk must not be unavailable");
        assert!((walk.distance - expected_distance).abs() < 1e-9);
        assert!((walk.time - expected_distance * 20.0).abs() < 1e-9);
        assert!((walk.utility - (-0.045 * walk.time)).abs() < 1e-12);
        assert_eq!(walk.walk_time, walk.time);
    }

    #[test]
    fn test_round_trip_doubles_floor() {
        let conf = PathImpedanceConfig::default();
        let skims = MockSkims::new().build(&conf);
        let registry = mock_registry();
        let ctx = PathContext::new(&conf, &skims, &registry);
        let parcel = mock_parcel(1, 1, 0.0);
        let query = TravelQuery::new(TripEndpoint::Parcel(1), TripEndpoint::Parcel(1), 300, Purpose::Shopping, -0.15, -0.045)
            .with_return(400);
        let request = mock_request(&query, Mode::Bike, SkimEndpoint::Parcel(&parcel), SkimEndpoint::Parcel(&parcel));
        let mut cache = NodeDistanceCache::new();
        let bike = evaluate_walk_bike(&ctx, &request, PathType::FullNetwork, &mut cache);
        // one minute floor on each leg
        assert_eq!(bike.time, 2.0);
        assert_eq!(bike.distance, 0.02);
        assert_eq!(bike.bike_time, 2.0);
    }

    #[test]
    fn test_time_limit_makes_unavailable() {
        let conf = PathImpedanceConfig {
            available_path_upper_time_limit: 30.0,
            ..Default::default()
        };
        let skims = MockSkims::new()
            .with("time", Mode::Walk, PathType::FullNetwork, 1, 2, 45.0, Some(2.2))
            .build(&conf);
        let registry = mock_registry();
        let ctx = PathContext::new(&conf, &skims, &registry);
        let query = TravelQuery::new(TripEndpoint::Zone(1), TripEndpoint::Zone(2), 300, Purpose::Work, -0.15, -0.045);
        let request = mock_request(&query, Mode::Walk, SkimEndpoint::Zone(1), SkimEndpoint::Zone(2));
        let mut cache = NodeDistanceCache::new();
        let walk = evaluate_walk_bike(&ctx, &request, PathType::FullNetwork, &mut cache);
        assert!(!walk.available);
    }

    #[test]
    fn test_bike_quality_classes_scale_time() {
        let conf = PathImpedanceConfig {
            bike_quality_classes_enabled: true,
            bike_quality_weights: BikeQualityWeights {
                class1: -0.5,
                bad: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let skims = MockSkims::new()
            .with("time", Mode::Bike, PathType::FullNetwork, 1, 2, 20.0, Some(4.0))
            .with("class1distance", Mode::Bike, PathType::FullNetwork, 1, 2, 2.0, None)
            .with("baddistance", Mode::Bike, PathType::FullNetwork, 1, 2, 1.0, None)
            .build(&conf);
        let registry = mock_registry();
        let ctx = PathContext::new(&conf, &skims, &registry);
        let query = TravelQuery::new(TripEndpoint::Zone(1), TripEndpoint::Zone(2), 300, Purpose::Work, -0.15, -0.045);
        let request = mock_request(&query, Mode::Bike, SkimEndpoint::Zone(1), SkimEndpoint::Zone(2));
        let mut cache = NodeDistanceCache::new();
        let bike = evaluate_walk_bike(&ctx, &request, PathType::FullNetwork, &mut cache);
        // 1 + 0.5 × -0.5 + 0.25 × 1.0 = 1.0
        assert!((bike.time - 20.0).abs() < 1e-12);
        assert_eq!(bike.distance, 4.0);
    }
}
