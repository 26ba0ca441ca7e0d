use super::{
    build_subzones, mode_utility_sum, AggregateLogsumTable, CellKey, GeneralizedTimes,
    SegmentFlags, SubzoneAttraction, SUBZONES_PER_ZONE,
};
use crate::config::AggregateLogsumConfig;
use crate::model::{
    choice::PathChoiceModel,
    impedance::NodeDistanceCache,
    mode::Mode,
    network::Zone,
    query::{Purpose, TravelQuery, TripEndpoint},
    utility::logit_ops::EPSILON,
    LogsumError,
};
use kdam::{Bar, BarExt};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use std::sync::{Arc, Mutex};

const GENERALIZED_TIME_MODES: [Mode; 5] = [
    Mode::Walk,
    Mode::Bike,
    Mode::Sov,
    Mode::HovPassenger,
    Mode::Transit,
];

/// fills the aggregate logsum table from representative zone-to-zone queries.
/// origins run in parallel; each task owns its scratch cache and returns its row.
pub struct AggregateLogsumCalculator<'a> {
    model: PathChoiceModel<'a>,
    conf: &'a AggregateLogsumConfig,
    subzones: Vec<[SubzoneAttraction; SUBZONES_PER_ZONE]>,
}

impl<'a> AggregateLogsumCalculator<'a> {
    pub fn new(
        model: PathChoiceModel<'a>,
        conf: &'a AggregateLogsumConfig,
    ) -> AggregateLogsumCalculator<'a> {
        let subzones = build_subzones(model.context().registry, conf);
        AggregateLogsumCalculator {
            model,
            conf,
            subzones,
        }
    }

    pub fn calculate(&self) -> Result<AggregateLogsumTable, LogsumError> {
        let zones = self.model.context().registry.zones();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.conf.workers)
            .build()
            .map_err(|e| LogsumError::ThreadPoolError(e.to_string()))?;
        log::info!(
            "computing aggregate logsums for {} zones on {} threads",
            zones.len(),
            pool.current_num_threads()
        );

        let bar = Arc::new(Mutex::new(
            Bar::builder()
                .desc("aggregate logsums")
                .total(zones.len())
                .build()
                .map_err(|e| LogsumError::OutputError(format!("progress bar error: {e}")))?,
        ));
        let rows = pool.install(|| {
            zones
                .par_iter()
                .map(|origin| {
                    let row = self.origin_row(origin, zones);
                    if let Ok(mut bar) = bar.clone().lock() {
                        let _ = bar.update(1);
                    }
                    row.map(|r| (origin.index, r))
                })
                .collect::<Result<Vec<_>, LogsumError>>()
        })?;
        eprintln!();

        let mut table = AggregateLogsumTable::new(zones.iter().map(|z| z.id).collect());
        for (index, row) in rows.iter() {
            table.set_row(*index, row);
        }
        table.apply_log();
        Ok(table)
    }

    /// the pre-log row of one origin zone
    fn origin_row(&self, origin: &Zone, zones: &[Zone]) -> Result<Vec<f64>, LogsumError> {
        let mut row = AggregateLogsumTable::seeded_row();
        if !origin.destination_eligible {
            return Ok(row);
        }
        let mut cache = NodeDistanceCache::new();
        for destination in zones.iter().filter(|z| z.destination_eligible) {
            let Some(subzones) = self.subzones.get(destination.index) else {
                continue;
            };
            let intrazonal = origin.id == destination.id;
            let mut times: Option<GeneralizedTimes> = None;
            for key in CellKey::all() {
                let mut purpose_utility = 0.0;
                for (sequence, subzone) in subzones.iter().enumerate() {
                    let size = subzone.size(key.purpose);
                    if size <= self.conf.minimum_size {
                        continue;
                    }
                    let times = match times {
                        Some(t) => t,
                        None => {
                            let t = self.generalized_times(origin, destination, &mut cache)?;
                            times = Some(t);
                            t
                        }
                    };
                    let flags = SegmentFlags {
                        purpose: key.purpose,
                        car_ownership: key.car_ownership,
                        vot: key.vot,
                        transit_access: key.transit_access,
                        intrazonal,
                        no_egress: sequence != 0,
                    };
                    let sum = mode_utility_sum(&times, &flags);
                    let mode_logsum = if sum > EPSILON {
                        sum.ln()
                    } else {
                        self.conf.unavailable_mode_logsum
                    };
                    // later subzones replace earlier ones
                    purpose_utility = mode_logsum + size;
                }
                row[key.offset()] += purpose_utility;
            }
        }
        let (hits, misses) = cache.stats();
        log::debug!("origin zone {}: node distance cache {hits} hits, {misses} misses", origin.id);
        // a negative running total would have no logarithm
        for cell in row.iter_mut() {
            *cell = cell.max(EPSILON);
        }
        Ok(row)
    }

    /// generalized time logsums of the representative query. the coefficients are
    /// those of the first segment to need them, which is always the low vot segment.
    fn generalized_times(
        &self,
        origin: &Zone,
        destination: &Zone,
        cache: &mut NodeDistanceCache,
    ) -> Result<GeneralizedTimes, LogsumError> {
        let conf = self.conf;
        let time_coefficient = conf.base_time_coefficient;
        let cost_coefficient = time_coefficient * 60.0 / conf.value_of_time_divisors[0];
        let query = TravelQuery::new(
            TripEndpoint::Zone(origin.id),
            TripEndpoint::Zone(destination.id),
            conf.representative_minute,
            Purpose::PersonalBusiness,
            cost_coefficient,
            time_coefficient,
        )
        .with_return(conf.representative_minute);
        // deterministic choice, the generator is never drawn from
        let mut rng = StdRng::seed_from_u64(0);
        let outcomes = self
            .model
            .run(&query, &GENERALIZED_TIME_MODES, cache, &mut rng)?;
        match outcomes.as_slice() {
            [walk, bike, sov, hov, transit] => Ok(GeneralizedTimes {
                walk: walk.generalized_time_logsum,
                bike: bike.generalized_time_logsum,
                sov: sov.generalized_time_logsum,
                hov: hov.generalized_time_logsum,
                transit: transit.generalized_time_logsum,
            }),
            _ => Err(LogsumError::InvalidArgument(format!(
                "expected {} outcomes from {} to {}, found {}",
                GENERALIZED_TIME_MODES.len(),
                origin.id,
                destination.id,
                outcomes.len()
            ))),
        }
    }
}
