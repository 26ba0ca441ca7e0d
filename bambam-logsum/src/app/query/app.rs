use super::OutcomeRow;
use crate::app::inputs::{read_rows, write_rows, InputFiles, ModelInputs, QueryRecord};
use crate::config::LogsumAppConfig;
use crate::model::{
    choice::{PathChoiceModel, PathChoiceOutcome},
    impedance::NodeDistanceCache,
    mode::Mode,
    network::NodeRegistry,
    query::TravelQuery,
    utility::PathContext,
    LogsumError,
};
use itertools::Itertools;
use kdam::{Bar, BarExt};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::{Arc, Mutex};

#[derive(Serialize)]
struct NodePredictionRow {
    node_id: i64,
    predictions: f64,
}

/// runs the path choice model for every query in a file. each query draws from its
/// own generator seeded with `seed + query index`, so results do not depend on
/// scheduling.
pub fn run(
    files: &InputFiles,
    conf: &LogsumAppConfig,
    queries_file: &String,
    output_file: &String,
    seed: u64,
    node_predictions_file: Option<&String>,
) -> Result<(), LogsumError> {
    let inputs = ModelInputs::load(files, &conf.path_impedance)?;
    let queries = read_rows::<QueryRecord>(queries_file, "read queries")?
        .into_iter()
        .map(QueryRecord::into_query)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| LogsumError::InputError(format!("{queries_file}: {e}")))?;

    let ctx = PathContext::new(&conf.path_impedance, &inputs.skims, &inputs.registry);
    let model = PathChoiceModel::new(ctx);
    let outcomes = run_queries(&model, &queries, seed)?;

    for outcome in outcomes.iter().flatten() {
        if let (true, Some(node_id)) = (outcome.available, outcome.node_id) {
            if let Some(node) = inputs.registry.get_node(node_id) {
                node.record_prediction(1.0)?;
            }
        }
    }

    let rows = queries
        .iter()
        .zip(outcomes.iter())
        .enumerate()
        .flat_map(|(idx, ((query, _), query_outcomes))| {
            query_outcomes.iter().map(move |o| OutcomeRow::new(idx, query, o))
        });
    write_rows(output_file, rows)?;

    if let Some(f) = node_predictions_file {
        let predictions = inputs
            .registry
            .all_nodes(&|_| true)
            .into_iter()
            .map(|node| {
                node.drain_predictions().map(|predictions| NodePredictionRow {
                    node_id: node.id,
                    predictions,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        write_rows(f, predictions.into_iter())?;
    }
    Ok(())
}

pub fn run_queries(
    model: &PathChoiceModel,
    queries: &[(TravelQuery, Vec<Mode>)],
    seed: u64,
) -> Result<Vec<Vec<PathChoiceOutcome>>, LogsumError> {
    log::info!("running {} queries", queries.len());
    let bar = Arc::new(Mutex::new(
        Bar::builder()
            .desc("path choice queries")
            .total(queries.len())
            .build()
            .map_err(|e| LogsumError::OutputError(format!("progress bar error: {e}")))?,
    ));
    let outcomes = queries
        .par_iter()
        .enumerate()
        .map_init(NodeDistanceCache::new, |cache, (idx, (query, modes))| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(idx as u64));
            let result = model.run(query, modes, cache, &mut rng);
            if let Ok(mut bar) = bar.clone().lock() {
                let _ = bar.update(1);
            }
            if let Ok(outcomes) = &result {
                log::debug!(
                    "query {idx} from {} to {}: {}",
                    query.origin,
                    query.destination,
                    outcomes
                        .iter()
                        .map(|o| format!("{}={:.2}", o.mode, o.generalized_time_logsum))
                        .join(", ")
                );
            }
            result
        })
        .collect::<Result<Vec<_>, LogsumError>>()?;
    eprintln!();
    Ok(outcomes)
}

#[cfg(test)]
mod test {
    use super::run_queries;
    use crate::config::PathImpedanceConfig;
    use crate::model::{
        choice::PathChoiceModel,
        mode::{Mode, PathType},
        query::{Purpose, TravelQuery, TripEndpoint},
        test_fixtures::{mock_registry, MockSkims},
        utility::PathContext,
    };

    #[test]
    fn test_seeded_queries_are_reproducible() {
        let conf = PathImpedanceConfig::default();
        let skims = MockSkims::new()
            .with("ivtfree", Mode::Sov, PathType::FullNetwork, 1, 2, 10.0, Some(5.0))
            .with("toll", Mode::Sov, PathType::FullNetwork, 1, 2, 1.0, None)
            .with("ivtfree", Mode::Sov, PathType::NoTolls, 1, 2, 12.0, Some(5.0))
            .build(&conf);
        let registry = mock_registry();
        let model = PathChoiceModel::new(PathContext::new(&conf, &skims, &registry));
        let queries: Vec<(TravelQuery, Vec<Mode>)> = (0..16)
            .map(|_| {
                let query = TravelQuery::new(
                    TripEndpoint::Zone(1),
                    TripEndpoint::Zone(2),
                    420,
                    Purpose::Work,
                    -0.1,
                    -0.02,
                )
                .with_random_choice(true);
                (query, vec![Mode::Sov])
            })
            .collect();
        let first = run_queries(&model, &queries, 7).expect("test invariant failed, run");
        let second = run_queries(&model, &queries, 7).expect("test invariant failed, run");
        assert_eq!(first, second);
        assert_eq!(first.len(), 16);
    }
}
