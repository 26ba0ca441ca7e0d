use crate::config::PathImpedanceConfig;
use crate::model::{
    impedance::{
        BlendingParameters, ImpedanceLookup, NodeDistanceCache, SkimEndpoint, SkimRequest,
        SkimValue,
    },
    mode::{Mode, ModeCombinations, PathType},
    network::NodeRegistry,
    query::TravelQuery,
};

/// the read-only state shared by every evaluation of a run
pub struct PathContext<'a> {
    pub config: &'a PathImpedanceConfig,
    pub impedance: &'a dyn ImpedanceLookup,
    pub registry: &'a dyn NodeRegistry,
    pub combinations: ModeCombinations,
    pub blending: BlendingParameters,
}

impl<'a> PathContext<'a> {
    pub fn new(
        config: &'a PathImpedanceConfig,
        impedance: &'a dyn ImpedanceLookup,
        registry: &'a dyn NodeRegistry,
    ) -> PathContext<'a> {
        PathContext {
            config,
            impedance,
            registry,
            combinations: ModeCombinations::new(&config.excluded_combinations),
            blending: BlendingParameters::from(config),
        }
    }
}

/// one query specialized to one mode: resolved endpoints and the coefficients
/// that apply to this mode
#[derive(Clone, Copy, Debug)]
pub struct AlternativeRequest<'q> {
    pub query: &'q TravelQuery,
    pub mode: Mode,
    pub origin: SkimEndpoint<'q>,
    pub destination: SkimEndpoint<'q>,
    pub cost_coefficient: f64,
    pub time_coefficient: f64,
    pub value_of_time: f64,
}

impl<'q> AlternativeRequest<'q> {
    /// scale × time coefficient, the divisor that turns utility into minutes
    pub fn scaled_time_coefficient(&self, ctx: &PathContext) -> f64 {
        ctx.config.utility_scale * self.time_coefficient
    }

    /// one directional skim lookup
    #[allow(clippy::too_many_arguments)]
    pub fn skim(
        &self,
        ctx: &PathContext,
        cache: &mut NodeDistanceCache,
        variable: &str,
        skim_mode: Mode,
        path_type: PathType,
        origin: SkimEndpoint,
        destination: SkimEndpoint,
        minute: i32,
    ) -> SkimValue {
        let request = SkimRequest::new(variable, skim_mode, path_type, self.value_of_time, minute);
        ctx.impedance.get_value(&request, origin, destination, cache)
    }

    /// the outbound leg from `origin` to `destination` and, when the query returns,
    /// the return leg in the opposite direction
    #[allow(clippy::too_many_arguments)]
    pub fn skim_legs(
        &self,
        ctx: &PathContext,
        cache: &mut NodeDistanceCache,
        variable: &str,
        skim_mode: Mode,
        path_type: PathType,
        origin: SkimEndpoint,
        destination: SkimEndpoint,
    ) -> (SkimValue, Option<SkimValue>) {
        let outbound = self.skim(
            ctx,
            cache,
            variable,
            skim_mode,
            path_type,
            origin,
            destination,
            self.query.outbound_minute,
        );
        let inbound = self.query.return_minute.map(|minute| {
            self.skim(
                ctx,
                cache,
                variable,
                skim_mode,
                path_type,
                destination,
                origin,
                minute,
            )
        });
        (outbound, inbound)
    }

    /// both legs summed
    #[allow(clippy::too_many_arguments)]
    pub fn skim_round_trip(
        &self,
        ctx: &PathContext,
        cache: &mut NodeDistanceCache,
        variable: &str,
        skim_mode: Mode,
        path_type: PathType,
        origin: SkimEndpoint,
        destination: SkimEndpoint,
    ) -> SkimValue {
        let (outbound, inbound) =
            self.skim_legs(ctx, cache, variable, skim_mode, path_type, origin, destination);
        match inbound {
            Some(inbound) => SkimValue::new(
                outbound.value + inbound.value,
                outbound.blend + inbound.blend,
            ),
            None => outbound,
        }
    }
}
