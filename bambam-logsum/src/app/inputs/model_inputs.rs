use super::{input_ops::read_rows, records::*};
use crate::config::PathImpedanceConfig;
use crate::model::{
    impedance::{BlendingParameters, NodeDistanceTable, SkimRoster},
    mode::{Mode, PathType},
    network::{DistanceEntry, DistanceList, NetworkRegistry, ParkAndRideNode},
    query::time_of_day::MINUTES_IN_A_DAY,
    LogsumError,
};
use itertools::Itertools;
use std::collections::HashMap;

/// input table locations shared by every application
#[derive(clap::Args, Clone, Debug)]
pub struct InputFiles {
    #[arg(long, help = "zones CSV file")]
    pub zones_file: String,
    #[arg(long, help = "parcels CSV file")]
    pub parcels_file: String,
    #[arg(long, help = "long-format skims CSV file")]
    pub skims_file: String,
    #[arg(long, help = "park-and-ride nodes CSV file")]
    pub nodes_file: Option<String>,
    #[arg(long, help = "transit stop areas CSV file")]
    pub stop_areas_file: Option<String>,
    #[arg(long, help = "parcel to stop area lengths CSV file")]
    pub parcel_stop_areas_file: Option<String>,
    #[arg(long, help = "parcel to node zone lengths CSV file")]
    pub parcel_nodes_file: Option<String>,
    #[arg(long, help = "network node to network node lengths CSV file")]
    pub node_distances_file: Option<String>,
    #[arg(long, help = "park-and-ride shadow prices CSV file")]
    pub shadow_prices_file: Option<String>,
}

/// the loaded registry and impedance tables of one run
pub struct ModelInputs {
    pub registry: NetworkRegistry,
    pub skims: SkimRoster,
}

impl ModelInputs {
    pub fn load(files: &InputFiles, conf: &PathImpedanceConfig) -> Result<ModelInputs, LogsumError> {
        let zones = read_rows::<ZoneRecord>(&files.zones_file, "read zones")?
            .into_iter()
            .map_into()
            .collect_vec();
        let parcels = read_rows::<ParcelRecord>(&files.parcels_file, "read parcels")?
            .into_iter()
            .map_into()
            .collect_vec();
        let nodes = match &files.nodes_file {
            None => vec![],
            Some(f) => read_rows::<NodeRecord>(f, "read park-and-ride nodes")?
                .into_iter()
                .map(ParkAndRideNode::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| LogsumError::InputError(format!("{f}: {e}")))?,
        };
        let stop_areas = match &files.stop_areas_file {
            None => vec![],
            Some(f) => read_rows::<StopAreaRecord>(f, "read stop areas")?
                .into_iter()
                .map_into()
                .collect_vec(),
        };

        let parcel_stop_areas = match &files.parcel_stop_areas_file {
            None => HashMap::new(),
            Some(f) => distance_lists(
                read_rows::<ParcelStopAreaRecord>(f, "read parcel stop areas")?
                    .into_iter()
                    .map(|r| (r.parcel_id, r.stop_area_key, r.length)),
            ),
        };
        let parcel_nodes = match &files.parcel_nodes_file {
            None => HashMap::new(),
            Some(f) => distance_lists(
                read_rows::<ParcelNodeRecord>(f, "read parcel nodes")?
                    .into_iter()
                    .map(|r| (r.parcel_id, r.node_zone_id, r.length)),
            ),
        };
        if conf.use_stop_areas && parcel_stop_areas.is_empty() {
            log::warn!("stop areas are enabled but no parcel stop area lengths were provided");
        }

        let mut registry = NetworkRegistry::new(zones, parcels, nodes, stop_areas)?
            .with_parcel_stop_areas(parcel_stop_areas)
            .with_parcel_nodes(parcel_nodes);
        if let Some(f) = &files.shadow_prices_file {
            apply_shadow_prices(&mut registry, f)?;
        }

        let mut skims = read_skims(&files.skims_file, conf)?;
        if let Some(f) = &files.node_distances_file {
            let rows = read_rows::<NodeDistanceRecord>(f, "read node distances")?;
            let table = NodeDistanceTable::new(
                rows.into_iter()
                    .map(|r| (r.origin_node, r.destination_node, r.length)),
            );
            skims = skims.with_node_distances(table);
        }
        log::info!("loaded {} skim variables", skims.variable_count());
        Ok(ModelInputs { registry, skims })
    }
}

/// groups (parcel, key, length) triples into per-parcel lists, nearest first
fn distance_lists(rows: impl Iterator<Item = (i64, i64, f64)>) -> HashMap<i64, DistanceList> {
    rows.map(|(parcel_id, key, length)| (parcel_id, DistanceEntry { key, length }))
        .into_group_map()
        .into_iter()
        .map(|(parcel_id, entries)| (parcel_id, DistanceList::new(entries)))
        .collect()
}

fn read_skims(filepath: &str, conf: &PathImpedanceConfig) -> Result<SkimRoster, LogsumError> {
    let rows = read_rows::<SkimRecord>(filepath, "read skims")?;
    let mut roster = SkimRoster::new(BlendingParameters::from(conf));
    for row in rows {
        let mode: Mode = row
            .mode
            .parse()
            .map_err(|e| LogsumError::InputError(format!("{filepath}: {e}")))?;
        let path_type: PathType = row
            .path_type
            .parse()
            .map_err(|e| LogsumError::InputError(format!("{filepath}: {e}")))?;
        roster.insert(
            &row.variable,
            mode,
            path_type,
            (row.vot_min, row.vot_max),
            (row.minute_start, row.minute_end),
            row.blend_variable.as_deref(),
            row.origin,
            row.destination,
            row.value,
        );
    }
    Ok(roster)
}

fn apply_shadow_prices(registry: &mut NetworkRegistry, filepath: &str) -> Result<(), LogsumError> {
    let rows = read_rows::<ShadowPriceRecord>(filepath, "read shadow prices")?;
    let mut prices: HashMap<i64, Vec<f64>> = HashMap::new();
    for row in rows {
        let minute = match usize::try_from(row.minute) {
            Ok(m) if m < MINUTES_IN_A_DAY as usize => m,
            _ => {
                log::warn!(
                    "{filepath}: ignoring shadow price of node {} at minute {}",
                    row.node_id,
                    row.minute
                );
                continue;
            }
        };
        prices
            .entry(row.node_id)
            .or_insert_with(|| vec![0.0; MINUTES_IN_A_DAY as usize])[minute] = row.price;
    }
    for (node_id, node_prices) in prices {
        match registry.get_node_mut(node_id) {
            Some(node) => node.set_shadow_prices(node_prices)?,
            None => log::warn!("{filepath}: shadow prices reference unknown node {node_id}"),
        }
    }
    Ok(())
}
