use super::{
    logit_ops::{gamma_function, EPSILON},
    AlternativeRequest, PathAlternative, PathContext,
};
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::{Mode, PathType},
};

/// evaluates a drive-alone or shared-ride alternative between the request's endpoints,
/// adding destination parking when the destination is a parcel
pub fn evaluate_auto(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let mut alternative = evaluate_auto_leg(
        ctx,
        request,
        path_type,
        request.origin,
        request.destination,
        true,
        cache,
    );
    if alternative.available && ctx.config.destination_parking_enabled {
        add_destination_parking(ctx, request, &mut alternative);
    }
    alternative
}

/// the drive itself: tolls, operating cost, mileage pricing, free-flow and
/// congested time. also used for the drive access leg of park-and-ride trips,
/// which never compete with an untolled twin.
pub fn evaluate_auto_leg(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    origin: SkimEndpoint,
    destination: SkimEndpoint,
    suppress_duplicate_tolls: bool,
    cache: &mut NodeDistanceCache,
) -> PathAlternative {
    let conf = ctx.config;
    let mode = auto_skim_mode(request.mode);
    let query = request.query;

    let toll = request.skim_round_trip(ctx, cache, "toll", mode, path_type, origin, destination);
    let mut tolled_path_constant = 0.0;
    if suppress_duplicate_tolls
        && path_type == PathType::FullNetwork
        && ctx.combinations.contains(mode, PathType::NoTolls)
    {
        let untolled = request.skim_round_trip(
            ctx,
            cache,
            "toll",
            mode,
            PathType::NoTolls,
            origin,
            destination,
        );
        if toll.value - untolled.value < EPSILON {
            // the tolled route duplicates the untolled one
            return PathAlternative::unavailable(request.mode, path_type);
        }
        tolled_path_constant = conf.auto_tolled_path_constant;
    }

    let (free_out, free_ret) =
        request.skim_legs(ctx, cache, "ivtfree", mode, path_type, origin, destination);
    let mut free_time = free_out.value;
    let mut distance = free_out.blend;
    let mut extra_time = request
        .skim(ctx, cache, "ivtextra", mode, path_type, origin, destination, query.outbound_minute)
        .value;
    if conf.parking_search_time_enabled {
        if let Some(parcel) = destination.parcel() {
            extra_time += parcel.parking_search_minutes(query.outbound_minute);
        }
    }
    let mut cost = toll.value;
    if conf.mileage_pricing_enabled {
        cost += free_out.blend
            * conf
                .mileage_pricing
                .cents_per_distance_unit(query.outbound_minute)
            / 100.0;
    }
    if let (Some(free_ret), Some(return_minute)) = (free_ret, query.return_minute) {
        free_time += free_ret.value;
        distance += free_ret.blend;
        extra_time += request
            .skim(ctx, cache, "ivtextra", mode, path_type, destination, origin, return_minute)
            .value;
        if conf.mileage_pricing_enabled {
            cost += free_ret.blend
                * conf.mileage_pricing.cents_per_distance_unit(return_minute)
                / 100.0;
        }
    }

    let time = free_time + extra_time;
    if time < EPSILON || time > conf.time_limit(query.is_round_trip()) {
        return PathAlternative::unavailable(request.mode, path_type);
    }
    cost += distance * conf.auto_operating_cost_per_distance_unit;

    let gamma_free = gamma_function(free_time, conf.gamma_in_vehicle_time);
    let congested = if conf.auto_congestion_multiplier != 0.0 {
        extra_time * conf.auto_congestion_multiplier
    } else {
        extra_time
    };
    let gamma_extra = gamma_function(congested, conf.gamma_extra_time);
    let is_passenger = request.mode == Mode::HovPassenger;
    let extra_weight = if is_passenger {
        conf.auto_extra_time_weight_passenger
    } else {
        conf.auto_extra_time_weight_driver
    };
    let in_vehicle_weight = conf
        .auto_in_vehicle_time_weights
        .get(query.purpose.aggregate())
        .get(mode);
    let gamma_cost = if is_passenger && !conf.passengers_incur_costs {
        0.0
    } else {
        gamma_function(cost, conf.gamma_cost)
    };
    let utility = conf.utility_scale
        * (request.cost_coefficient * gamma_cost
            + request.time_coefficient
                * in_vehicle_weight
                * (gamma_free + gamma_extra * extra_weight)
            + tolled_path_constant);

    PathAlternative::available(request.mode, path_type, time, distance, cost, utility)
}

/// park-and-ride access legs always drive alone
fn auto_skim_mode(mode: Mode) -> Mode {
    if mode.is_auto() {
        mode
    } else {
        Mode::Sov
    }
}

/// charges the destination parcel's hourly parking price for the length of stay
fn add_destination_parking(
    ctx: &PathContext,
    request: &AlternativeRequest,
    alternative: &mut PathAlternative,
) {
    let conf = ctx.config;
    if request.mode == Mode::HovPassenger && !conf.passengers_incur_costs {
        return;
    }
    let Some(parcel) = request.destination.parcel() else {
        return;
    };
    let query = request.query;
    let hourly_price = parcel.parking_price(query.outbound_minute);
    let hours = match query.return_minute {
        Some(ret) => ((ret - query.outbound_minute) / 60) as f64,
        None => 1.0,
    };
    let parking_cost = hourly_price * hours;
    if parking_cost <= 0.0 {
        return;
    }
    let parking_utility = conf.utility_scale
        * request.cost_coefficient
        * gamma_function(parking_cost, conf.gamma_cost);
    alternative.cost += parking_cost;
    let utility = alternative.utility + parking_utility;
    alternative.set_utility(utility);
}
