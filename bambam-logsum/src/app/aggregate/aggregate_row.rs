use crate::model::aggregate::{CarOwnership, CellKey, LogsumPurpose, TransitAccess, VotSegment};
use serde::Serialize;

/// one cell of the aggregate logsum table
#[derive(Serialize, Clone, Debug)]
pub struct AggregateRow {
    pub zone_id: i64,
    pub purpose: LogsumPurpose,
    pub car_ownership: CarOwnership,
    pub vot: VotSegment,
    pub transit_access: TransitAccess,
    pub logsum: f64,
}

impl From<(i64, CellKey, f64)> for AggregateRow {
    fn from((zone_id, key, logsum): (i64, CellKey, f64)) -> Self {
        AggregateRow {
            zone_id,
            purpose: key.purpose,
            car_ownership: key.car_ownership,
            vot: key.vot,
            transit_access: key.transit_access,
            logsum,
        }
    }
}
