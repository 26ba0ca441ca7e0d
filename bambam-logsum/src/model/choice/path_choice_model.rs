use super::PathChoiceOutcome;
use crate::model::{
    access::{
        evaluate_bike_on_transit, evaluate_bike_park_ride, evaluate_car_park_ride_bike,
        evaluate_car_park_ride_walk, Egress,
    },
    access::evaluate_walk_ride_bike,
    impedance::{NodeDistanceCache, SkimEndpoint},
    mode::{Mode, PathType},
    query::{Purpose, TravelQuery, TripEndpoint},
    transit::evaluate_walk_transit,
    utility::{
        evaluate_auto, evaluate_walk_bike, logit_ops::EPSILON, AlternativeRequest,
        PathAlternative, PathContext,
    },
    LogsumError,
};
use rand::Rng;

/// evaluates every allowed path type of each requested mode and turns the
/// alternatives into a logsum and a chosen path.
pub struct PathChoiceModel<'a> {
    ctx: PathContext<'a>,
}

impl<'a> PathChoiceModel<'a> {
    pub fn new(ctx: PathContext<'a>) -> PathChoiceModel<'a> {
        PathChoiceModel { ctx }
    }

    pub fn context(&self) -> &PathContext<'a> {
        &self.ctx
    }

    /// one outcome per requested mode, in request order. the cache is scratch space
    /// owned by the calling thread; `rng` is only drawn from for stochastic choices.
    pub fn run<R: Rng>(
        &self,
        query: &TravelQuery,
        modes: &[Mode],
        cache: &mut NodeDistanceCache,
        rng: &mut R,
    ) -> Result<Vec<PathChoiceOutcome>, LogsumError> {
        query.validate()?;
        let origin = self.resolve(query.origin)?;
        let destination = self.resolve(query.destination)?;
        modes
            .iter()
            .map(|mode| self.run_mode(query, *mode, origin, destination, cache, rng))
            .collect()
    }

    fn resolve(&self, endpoint: TripEndpoint) -> Result<SkimEndpoint<'a>, LogsumError> {
        let registry = self.ctx.registry;
        match endpoint {
            TripEndpoint::Zone(id) => registry
                .get_zone(id)
                .map(|_| SkimEndpoint::Zone(id))
                .ok_or_else(|| LogsumError::InvalidArgument(format!("unknown zone {id}"))),
            TripEndpoint::Parcel(id) => registry
                .get_parcel(id)
                .map(SkimEndpoint::Parcel)
                .ok_or_else(|| LogsumError::InvalidArgument(format!("unknown parcel {id}"))),
        }
    }

    fn run_mode<R: Rng>(
        &self,
        query: &TravelQuery,
        mode: Mode,
        origin: SkimEndpoint,
        destination: SkimEndpoint,
        cache: &mut NodeDistanceCache,
        rng: &mut R,
    ) -> Result<PathChoiceOutcome, LogsumError> {
        let ctx = &self.ctx;
        let cost_coefficient = query.cost_coefficient / hov_cost_divisor(ctx, mode, query.purpose);
        let request = AlternativeRequest {
            query,
            mode,
            origin,
            destination,
            cost_coefficient,
            time_coefficient: query.time_coefficient,
            value_of_time: 60.0 * query.time_coefficient / cost_coefficient,
        };

        let mut alternatives = Vec::new();
        for path_type in ctx.combinations.path_types(mode) {
            if let Some(alternative) = self.evaluate(&request, path_type, cache)? {
                alternatives.push(alternative);
            }
        }
        let choice_set: Vec<&PathAlternative> =
            alternatives.iter().filter(|a| a.is_in_choice_set()).collect();

        let sum: f64 = choice_set.iter().map(|a| a.exp_utility).sum();
        if sum < EPSILON {
            return Ok(PathChoiceOutcome::unavailable(mode));
        }
        let logsum = sum.ln();
        let time_scale = request.scaled_time_coefficient(ctx);
        let generalized_time = logsum / time_scale;
        let values = [sum, logsum, time_scale, generalized_time];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(LogsumError::NumericalFault {
                mode,
                origin: query.origin.to_string(),
                destination: query.destination.to_string(),
                sum,
                logsum,
                time_coefficient: time_scale,
            });
        }

        let draw = query.random_choice && choice_set.len() > 1 && !ctx.config.estimation_mode;
        let chosen = if draw {
            stochastic_choice(&choice_set, sum, rng.random::<f64>())
        } else {
            best_choice(&choice_set)
        };
        match chosen {
            Some(chosen) => Ok(PathChoiceOutcome::chosen(chosen, logsum, time_scale)),
            None => Ok(PathChoiceOutcome::unavailable(mode)),
        }
    }

    /// the alternative for one path type, None when the mode does not apply to
    /// this traveler
    fn evaluate(
        &self,
        request: &AlternativeRequest,
        path_type: PathType,
        cache: &mut NodeDistanceCache,
    ) -> Result<Option<PathAlternative>, LogsumError> {
        let ctx = &self.ctx;
        let query = request.query;
        let parcels = match (request.origin, request.destination) {
            (SkimEndpoint::Parcel(o), SkimEndpoint::Parcel(d)) if ctx.config.use_stop_areas => {
                Some((o, d))
            }
            _ => None,
        };
        let alternative = match (request.mode, parcels) {
            (Mode::Walk | Mode::Bike, _) => evaluate_walk_bike(ctx, request, path_type, cache),
            (Mode::Sov, _) if !query.is_driving_age || query.household_cars == 0 => {
                return Ok(None)
            }
            (Mode::Sov | Mode::HovDriver | Mode::HovPassenger, _) => {
                evaluate_auto(ctx, request, path_type, cache)
            }
            (Mode::Transit, _) => evaluate_walk_transit(ctx, request, path_type, cache),
            (Mode::CarParkRideWalk, _) => {
                evaluate_car_park_ride_walk(ctx, request, path_type, cache)
            }
            (Mode::CarParkRideBike, Some((_, d))) => {
                evaluate_car_park_ride_bike(ctx, request, path_type, d, cache)
            }
            (Mode::BikeParkRideWalk, Some(pair)) => {
                evaluate_bike_park_ride(ctx, request, path_type, pair, Egress::Walk, cache)
            }
            (Mode::BikeParkRideBike, Some(pair)) => {
                evaluate_bike_park_ride(ctx, request, path_type, pair, Egress::Bike, cache)
            }
            (Mode::BikeOnTransit, Some(pair)) => {
                evaluate_bike_on_transit(ctx, request, path_type, pair, cache)
            }
            (Mode::WalkRideBike, Some(pair)) => {
                evaluate_walk_ride_bike(ctx, request, path_type, pair, cache)
            }
            (mode, None) => {
                return Err(LogsumError::InvalidArgument(format!(
                    "mode {mode} requires stop areas and parcel endpoints"
                )))
            }
        };
        Ok(Some(alternative))
    }
}

/// shared-ride cost is split between occupants
fn hov_cost_divisor(ctx: &PathContext, mode: Mode, purpose: Purpose) -> f64 {
    let conf = ctx.config;
    let work = purpose == Purpose::Work;
    match (mode, work) {
        (Mode::HovDriver, true) => conf.hov_driver_cost_divisor_work,
        (Mode::HovDriver, false) => conf.hov_driver_cost_divisor_other,
        (Mode::HovPassenger, true) => conf.hov_passenger_cost_divisor_work,
        (Mode::HovPassenger, false) => conf.hov_passenger_cost_divisor_other,
        _ => 1.0,
    }
}

/// highest exponentiated utility, first maximum in evaluation order
fn best_choice<'b>(choice_set: &[&'b PathAlternative]) -> Option<&'b PathAlternative> {
    let mut best: Option<&'b PathAlternative> = None;
    for alternative in choice_set.iter().copied() {
        if best.map_or(true, |b| alternative.exp_utility > b.exp_utility) {
            best = Some(alternative);
        }
    }
    best
}

/// walks the choice set subtracting each probability from `uniform` and picks the
/// alternative that takes it below zero. rounding may leave a tiny remainder, in
/// which case the last alternative is chosen.
fn stochastic_choice<'b>(
    choice_set: &[&'b PathAlternative],
    sum: f64,
    uniform: f64,
) -> Option<&'b PathAlternative> {
    let mut remaining = uniform;
    for alternative in choice_set.iter().copied() {
        remaining -= alternative.exp_utility / sum;
        if remaining < 0.0 {
            return Some(alternative);
        }
    }
    choice_set.last().copied()
}
