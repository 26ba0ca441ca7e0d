use super::access_ops::{
    car_access_nodes, combine, keep_best, shadow_price, station_walk_distance, stops_near,
    AccessLegs, CarAccess, Egress,
};
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::PathType,
    network::{ParkAndRideNode, Parcel},
    transit::{evaluate_transit_leg, transit_walk_time},
    utility::{
        logit_ops::gamma_function, parking_ops, AlternativeRequest, PathAlternative, PathContext,
    },
};

/// drive → park → transit → walk. with stop areas and a parcel destination, every
/// reachable facility is combined with the stop areas near the destination;
/// otherwise transit runs zone to zone from the facility's zone.
pub fn evaluate_car_park_ride_walk(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    if !request.query.is_round_trip() {
        return PathAlternative::unavailable(request.mode, path_type);
    }
    match (ctx.config.use_stop_areas, request.destination.parcel()) {
        (true, Some(destination)) => {
            search_car_access(ctx, request, path_type, destination, Egress::Walk, cache)
        }
        _ => zone_car_access(ctx, request, path_type, cache),
    }
}

/// drive → park → transit → bike from the destination stop area
pub fn evaluate_car_park_ride_bike(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    destination: &Parcel,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    if !request.query.is_round_trip() {
        return PathAlternative::unavailable(request.mode, path_type);
    }
    search_car_access(ctx, request, path_type, destination, Egress::Bike, cache)
}

fn search_car_access(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    destination: &Parcel,
    egress: Egress,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let legs = request.query.leg_count();
    let parking = |node: &ParkAndRideNode| parking_ops::car_parking_cost(node, request.query);
    let candidates = car_access_nodes(ctx, request, &parking, cache);

    let mut best = None;
    for CarAccess {
        node,
        parking_cost,
        drive,
    } in candidates
    {
        if node.length_to_stop_area > conf.max_park_and_ride_stop_area_length {
            continue;
        }
        let access = AccessLegs {
            time: drive.time,
            distance: drive.distance,
            cost: drive.cost,
            utility: drive.utility,
            node_id: Some(node.id),
            ..Default::default()
        }
        .with_cost(ctx, request, parking_cost)
        .with_walk(ctx, request, station_walk_distance(ctx, node, legs));

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

/// zone-to-zone transit from each facility's zone. the drive is weighted as transit
/// access time and parking is the node's daily cost.
fn zone_car_access(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let legs = request.query.leg_count();
    let parking = |node: &ParkAndRideNode| Some(node.cost / 100.0);
    let candidates = car_access_nodes(ctx, request, &parking, cache);
    let destination_zone = SkimEndpoint::Zone(request.destination.zone_id());

    let mut best = None;
    for CarAccess {
        node,
        parking_cost,
        drive,
    } in candidates
    {
        let Some(leg) = evaluate_transit_leg(
            ctx,
            request,
            path_type,
            SkimEndpoint::Zone(node.zone_id),
            destination_zone,
            cache,
        ) else {
            continue;
        };
        let Some(egress_minutes) =
            transit_walk_time(conf, request.destination, path_type, leg.boardings_outbound)
        else {
            continue;
        };
        let drive_utility = conf.utility_scale
            * (request.time_coefficient * conf.transit_drive_access_time_weight * drive.time
                + request.cost_coefficient * gamma_function(drive.cost, conf.gamma_cost));
        let minute = parking_ops::mode_change_minute(request.query.outbound_minute, leg.time);
        let egress_distance = egress_minutes * legs / conf.walk_minutes_per_distance_unit();
        let access = AccessLegs {
            time: drive.time,
            distance: drive.distance,
            cost: drive.cost,
            utility: drive_utility + shadow_price(ctx, node, minute),
            node_id: Some(node.id),
            ..Default::default()
        }
        .with_cost(ctx, request, parking_cost)
        .with_walk(ctx, request, egress_distance);
        if let Some(candidate) = combine(ctx, request, path_type, &leg, &access, (None, None)) {
            keep_best(&mut best, candidate);
        }
    }
    best.unwrap_or_else(|| PathAlternative::unavailable(request.mode, path_type))
}
