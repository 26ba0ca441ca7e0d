//! candidate enumeration and leg assembly shared by the park-and-ride and bike
//! access searches.

use crate::model::{
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::{Mode, PathType},
    network::{DistanceEntry, ParkAndRideNode},
    transit::TransitLeg,
    utility::{
        evaluate_auto_leg,
        logit_ops::{gamma_function, EPSILON},
        AlternativeRequest, PathAlternative, PathContext,
    },
};

/// a car facility within driving reach, with its drive leg and parking cost
pub struct CarAccess<'a> {
    pub node: &'a ParkAndRideNode,
    pub parking_cost: f64,
    pub drive: PathAlternative,
}

/// a bike facility reachable by bike from a parcel
pub struct BikeAccess<'a> {
    pub node: &'a ParkAndRideNode,
    pub bike_time: f64,
    pub bike_distance: f64,
}

/// everything in a combination except the transit leg
#[derive(Clone, Copy, Debug, Default)]
pub struct AccessLegs {
    pub time: f64,
    pub distance: f64,
    pub cost: f64,
    pub utility: f64,
    pub walk_time: f64,
    pub walk_distance: f64,
    pub bike_time: f64,
    pub bike_distance: f64,
    pub bike_cost: f64,
    pub node_id: Option<i64>,
}

impl AccessLegs {
    pub fn with_walk(mut self, ctx: &PathContext, request: &AlternativeRequest, distance: f64) -> Self {
        let minutes = distance * ctx.config.walk_minutes_per_distance_unit();
        self.time += minutes;
        self.distance += distance;
        self.walk_time += minutes;
        self.walk_distance += distance;
        self.utility += ctx.config.utility_scale
            * request.time_coefficient
            * ctx.config.transit_access_egress_time_weight
            * minutes;
        self
    }

    pub fn with_bike(mut self, ctx: &PathContext, request: &AlternativeRequest, distance: f64) -> Self {
        let minutes = distance * ctx.config.bike_minutes_per_distance_unit();
        self.time += minutes;
        self.distance += distance;
        self.bike_time += minutes;
        self.bike_distance += distance;
        self.utility += ctx.config.utility_scale
            * request.time_coefficient
            * ctx.config.transit_bike_access_time_weight
            * minutes;
        self
    }

    /// a monetary cost valued through the cost coefficient
    pub fn with_cost(mut self, ctx: &PathContext, request: &AlternativeRequest, cost: f64) -> Self {
        self.cost += cost;
        self.utility += ctx.config.utility_scale
            * request.cost_coefficient
            * gamma_function(cost, ctx.config.gamma_cost);
        self
    }

    pub fn with_utility(mut self, utility: f64) -> Self {
        self.utility += utility;
        self
    }
}

/// how the traveler covers the last stretch from the destination stop area
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Egress {
    Walk,
    Bike,
}

impl Egress {
    pub fn add_to(
        self,
        access: AccessLegs,
        ctx: &PathContext,
        request: &AlternativeRequest,
        distance: f64,
    ) -> AccessLegs {
        match self {
            Egress::Walk => access.with_walk(ctx, request, distance),
            Egress::Bike => access.with_bike(ctx, request, distance),
        }
    }
}

/// direct origin-to-destination distance, the yardstick for access detours
pub fn direct_distance(
    ctx: &PathContext,
    request: &AlternativeRequest,
    skim_mode: Mode,
    cache: &mut NodeDistanceCache,
) -> f64 {
    request
        .skim(
            ctx,
            cache,
            "distance",
            skim_mode,
            PathType::FullNetwork,
            request.origin,
            request.destination,
            request.query.outbound_minute,
        )
        .value
}

/// true when a detour of `distance` is too long compared to the direct trip
fn exceeds_ratio(distance: f64, direct: f64, max_ratio: f64) -> bool {
    direct >= EPSILON && distance / direct > max_ratio
}

/// the stop areas listed for a parcel, nearest first, within the search limits
pub fn stops_near<'a>(
    ctx: &PathContext<'a>,
    parcel_id: i64,
    max_length: f64,
) -> impl Iterator<Item = &'a DistanceEntry> {
    ctx.registry
        .stop_areas_near(parcel_id)
        .iter()
        .take(ctx.config.max_stop_areas_to_search)
        .take_while(move |e| e.length <= max_length)
}

/// the shadow price applied at the node, when shadow pricing is in effect
pub fn shadow_price(ctx: &PathContext, node: &ParkAndRideNode, minute: i32) -> f64 {
    if ctx.config.shadow_pricing_enabled && !ctx.config.estimation_mode {
        node.shadow_price(minute)
    } else {
        0.0
    }
}

/// car facilities within driving reach of the origin. the drive leg is evaluated
/// drive-alone on the full network; `parking` prices the stay or rejects the node.
pub fn car_access_nodes<'a>(
    ctx: &PathContext<'a>,
    request: &AlternativeRequest,
    parking: &dyn Fn(&ParkAndRideNode) -> Option<f64>,
    cache: &mut NodeDistanceCache,
) -> Vec<CarAccess<'a>> {
    let conf = ctx.config;
    let direct = direct_distance(ctx, request, Mode::Sov, cache);
    let mut result = vec![];
    for node in ctx.registry.all_nodes(&|n| n.auto && n.capacity >= EPSILON) {
        let Some(node_parcel) = ctx.registry.get_parcel(node.parcel_id) else {
            continue;
        };
        let drive_distance = request
            .skim(
                ctx,
                cache,
                "distance",
                Mode::Sov,
                PathType::FullNetwork,
                SkimEndpoint::Zone(request.origin.zone_id()),
                SkimEndpoint::Zone(node.zone_id),
                request.query.outbound_minute,
            )
            .value;
        if drive_distance > conf.max_drive_distance
            || exceeds_ratio(drive_distance, direct, conf.max_drive_distance_ratio)
        {
            continue;
        }
        let Some(parking_cost) = parking(node) else {
            continue;
        };
        let drive = evaluate_auto_leg(
            ctx,
            request,
            PathType::FullNetwork,
            request.origin,
            SkimEndpoint::Parcel(node_parcel),
            false,
            cache,
        );
        if drive.available {
            result.push(CarAccess {
                node,
                parking_cost,
                drive,
            });
        }
    }
    result
}

/// bike facilities in the zones listed near a parcel, within the bike length limits
/// and the detour ratio against the direct distance. the bike distance covers
/// `legs` trips between the parcel and the node.
pub fn bike_access_nodes<'a>(
    ctx: &PathContext<'a>,
    parcel_id: i64,
    direct: f64,
    legs: f64,
) -> Vec<BikeAccess<'a>> {
    let conf = ctx.config;
    let mut result = vec![];
    for entry in ctx.registry.nodes_near(parcel_id) {
        if entry.length > conf.max_bike_length {
            break;
        }
        if entry.length < conf.min_bike_length {
            continue;
        }
        let one_way = conf.length_to_distance(entry.length);
        if exceeds_ratio(one_way, direct, conf.max_bike_distance_ratio) {
            break;
        }
        let bike_distance = one_way * legs;
        let bike_time = bike_distance * conf.bike_minutes_per_distance_unit();
        for node in ctx.registry.nodes_in_zone(entry.key, false) {
            result.push(BikeAccess {
                node,
                bike_time,
                bike_distance,
            });
        }
    }
    result
}

/// walk distance between a node and its stop area over `legs` trips
pub fn station_walk_distance(ctx: &PathContext, node: &ParkAndRideNode, legs: f64) -> f64 {
    ctx.config.length_to_distance(node.length_to_stop_area) * legs
}

/// the full alternative for one combination, or None when it exceeds the time limit
pub fn combine(
    ctx: &PathContext,
    request: &AlternativeRequest,
    path_type: PathType,
    leg: &TransitLeg,
    access: &AccessLegs,
    stops: (Option<i64>, Option<i64>),
) -> Option<PathAlternative> {
    let time = leg.time + access.time;
    if time > ctx.config.time_limit(request.query.is_round_trip()) {
        return None;
    }
    let mut alternative = PathAlternative::available(
        request.mode,
        path_type,
        time,
        leg.distance + access.distance,
        leg.cost + access.cost,
        leg.utility + access.utility,
    );
    alternative.set_transit_leg(leg);
    alternative.node_id = access.node_id;
    alternative.origin_stop_area = stops.0;
    alternative.destination_stop_area = stops.1;
    alternative.walk_time = access.walk_time;
    alternative.walk_distance = access.walk_distance;
    alternative.bike_time = access.bike_time;
    alternative.bike_distance = access.bike_distance;
    alternative.bike_cost = access.bike_cost;
    Some(alternative)
}

/// replaces the current best when the candidate's utility is strictly higher
pub fn keep_best(best: &mut Option<PathAlternative>, candidate: PathAlternative) {
    if best
        .as_ref()
        .map(|b| candidate.utility > b.utility)
        .unwrap_or(true)
    {
        *best = Some(candidate);
    }
}
