use super::TransitLeg;
use crate::config::TransitForm;
use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint, SkimValue},
    mode::PathType,
    utility::{
        logit_ops::{gamma_function, EPSILON},
        AlternativeRequest, PathContext,
    },
};

const SUBMODE_IN_VEHICLE_TIMES: [&str; 7] = [
    "invehtimeferry",
    "invehtimemetro",
    "invehtimebus",
    "invehtimelrandlocaltrain",
    "invehtimeretrain",
    "invehtimestrain",
    "invehtimeictrain",
];

/// the transit leg between two stops or zones for one path type, or None when
/// no usable path exists
pub fn evaluate_transit_leg(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    origin: SkimEndpoint,
    destination: SkimEndpoint,
    cache: &mut NodeDistanceCache,
) -> Option<TransitLeg> {
    match ctx.config.transit_form {
        TransitForm::Submode => submode_leg(ctx, request, path_type, origin, destination, cache),
        TransitForm::Classic => classic_leg(ctx, request, path_type, origin, destination, cache),
    }
}

/// fare after the pass and discount rules
fn traveler_fare(ctx: &PathContext, request: &AlternativeRequest, fare: f64) -> f64 {
    let query = request.query;
    if query.transit_pass && ctx.config.pass_holders_ride_free {
        0.0
    } else {
        fare * (1.0 - query.transit_discount)
    }
}

fn has_both_legs(outbound: SkimValue, inbound: Option<SkimValue>) -> bool {
    outbound.value >= EPSILON && inbound.map(|v| v.value >= EPSILON).unwrap_or(true)
}

fn submode_leg(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    origin: SkimEndpoint,
    destination: SkimEndpoint,
    cache: &mut NodeDistanceCache,
) -> Option<TransitLeg> {
    let conf = ctx.config;
    let skim_mode = request.mode.skim_mode();
    let (distance_out, distance_ret) = request.skim_legs(
        ctx,
        cache,
        "distance",
        skim_mode,
        path_type,
        origin,
        destination,
    );
    if !has_both_legs(distance_out, distance_ret) {
        return None;
    }
    let distance = distance_out.value + distance_ret.map(|v| v.value).unwrap_or_default();
    let mut skim = |variable: &str| {
        request
            .skim_round_trip(ctx, cache, variable, skim_mode, path_type, origin, destination)
            .value
    };

    let first_wait = skim("firstandhiddenwaittime");
    let transfer_wait = skim("waittime");
    let fare = traveler_fare(ctx, request, skim("farecard10"));
    let transfer_walk = skim("transferwalktime");
    let [ferry, metro, bus, light_rail, regional, s_train, intercity] =
        SUBMODE_IN_VEHICLE_TIMES.map(&mut skim);

    let train = regional + s_train + intercity;
    let bus = bus + ferry;
    let time = train + bus + metro + light_rail;
    if time > conf.time_limit(request.query.is_round_trip()) {
        return None;
    }

    let weights = conf
        .transit_submode_weights
        .get(request.query.purpose.aggregate());
    let weighted_in_vehicle = train * weights.train
        + bus * weights.bus
        + metro * weights.metro
        + light_rail * weights.light_rail;
    let utility = conf.utility_scale
        * (request.cost_coefficient * gamma_function(fare, conf.gamma_transit_fare)
            + request.time_coefficient
                * (conf.transit_in_vehicle_time_weight
                    * gamma_function(weighted_in_vehicle, conf.gamma_transit_in_vehicle_time)
                    + conf.transit_first_wait_time_weight * first_wait
                    + conf.transit_transfer_wait_time_weight * transfer_wait
                    + conf.transit_access_egress_time_weight * transfer_walk));

    let (changes_out, changes_ret) = request.skim_legs(
        ctx,
        cache,
        "noofchanges",
        skim_mode,
        path_type,
        origin,
        destination,
    );
    Some(TransitLeg {
        time,
        distance,
        cost: fare,
        utility,
        boardings_outbound: changes_out.value + 1.0,
        boardings_return: changes_ret.map(|v| v.value + 1.0).unwrap_or_default(),
    })
}

fn classic_leg(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    origin: SkimEndpoint,
    destination: SkimEndpoint,
    cache: &mut NodeDistanceCache,
) -> Option<TransitLeg> {
    let conf = ctx.config;
    let skim_mode = request.mode.skim_mode();
    let (ivt_out, ivt_ret) = request.skim_legs(
        ctx,
        cache,
        "ivtime",
        skim_mode,
        path_type,
        origin,
        destination,
    );
    if !has_both_legs(ivt_out, ivt_ret) {
        return None;
    }
    let (boardings_out, boardings_ret) = request.skim_legs(
        ctx,
        cache,
        "nboard",
        skim_mode,
        path_type,
        origin,
        destination,
    );
    let boardings_outbound = boardings_out.value;
    let boardings_return = boardings_ret.map(|v| v.value).unwrap_or_default();
    let mut skim = |variable: &str| {
        request
            .skim_round_trip(ctx, cache, variable, skim_mode, path_type, origin, destination)
            .value
    };
    let in_vehicle = ivt_out.value + ivt_ret.map(|v| v.value).unwrap_or_default();
    let initial_wait = skim("iwaittime");
    let transfer_wait = skim("xwaittime");
    let fare = traveler_fare(ctx, request, skim("fare"));
    let distance = skim("distance");

    let time = in_vehicle + initial_wait + transfer_wait;
    if time > conf.time_limit(request.query.is_round_trip()) {
        return None;
    }

    let (specific_variable, specific_weight) = match path_type {
        PathType::LightRail => ("lrttime", conf.light_rail_time_additive_weight),
        PathType::PremiumBus => ("comtime", conf.premium_bus_time_additive_weight),
        _ => ("", 0.0),
    };
    let specific_time = if conf.use_path_type_specific_time && specific_weight.abs() > EPSILON {
        skim(specific_variable)
    } else {
        0.0
    };

    let utility = conf.utility_scale
        * (conf.path_type_constant(path_type)
            + request.cost_coefficient * fare
            + request.time_coefficient
                * (conf.transit_in_vehicle_time_weight * in_vehicle
                    + conf.transit_first_wait_time_weight * initial_wait
                    + conf.transit_transfer_wait_time_weight * transfer_wait
                    + conf.boardings_weight(path_type) * (boardings_outbound + boardings_return)
                    + specific_weight * specific_time));

    Some(TransitLeg {
        time,
        distance,
        cost: fare,
        utility,
        boardings_outbound,
        boardings_return,
    })
}
