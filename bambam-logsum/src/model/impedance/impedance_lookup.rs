use super::{NodeDistanceCache, SkimEndpoint, SkimValue};
use crate::model::mode::{Mode, PathType};

/// addresses one skim variable for a mode, path type, value of time and minute
#[derive(Clone, Copy, Debug)]
pub struct SkimRequest<'a> {
    pub variable: &'a str,
    pub mode: Mode,
    pub path_type: PathType,
    pub value_of_time: f64,
    pub minute: i32,
}

impl<'a> SkimRequest<'a> {
    pub fn new(
        variable: &'a str,
        mode: Mode,
        path_type: PathType,
        value_of_time: f64,
        minute: i32,
    ) -> SkimRequest<'a> {
        SkimRequest {
            variable,
            mode,
            path_type,
            value_of_time,
            minute,
        }
    }

    /// the same address for a different variable
    pub fn with_variable(&self, variable: &'a str) -> SkimRequest<'a> {
        SkimRequest { variable, ..*self }
    }

    pub fn at_minute(&self, minute: i32) -> SkimRequest<'a> {
        SkimRequest { minute, ..*self }
    }
}

/// read-only network impedance service. a request with no matching skim returns
/// zeros, which downstream availability checks treat as a missing path.
///
/// the cache argument holds per-task memoized node distances and must never be
/// shared between worker threads.
pub trait ImpedanceLookup: Send + Sync {
    fn get_value(
        &self,
        request: &SkimRequest,
        origin: SkimEndpoint<'_>,
        destination: SkimEndpoint<'_>,
        cache: &mut NodeDistanceCache,
    ) -> SkimValue;
}
