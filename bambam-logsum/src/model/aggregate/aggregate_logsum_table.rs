use super::{CarOwnership, LogsumPurpose, TransitAccess, VotSegment};
use crate::model::utility::logit_ops::EPSILON;
use itertools::iproduct;

/// cells per origin zone
pub const ROW_LENGTH: usize = LogsumPurpose::ALL.len()
    * CarOwnership::ALL.len()
    * VotSegment::ALL.len()
    * TransitAccess::ALL.len();

/// the segment combination addressed by one cell of a row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellKey {
    pub purpose: LogsumPurpose,
    pub car_ownership: CarOwnership,
    pub vot: VotSegment,
    pub transit_access: TransitAccess,
}

impl CellKey {
    /// position of this key within a zone's row
    pub fn offset(&self) -> usize {
        ((self.purpose.index() * CarOwnership::ALL.len() + self.car_ownership.index())
            * VotSegment::ALL.len()
            + self.vot.index())
            * TransitAccess::ALL.len()
            + self.transit_access.index()
    }

    /// every key in row order
    pub fn all() -> impl Iterator<Item = CellKey> {
        iproduct!(
            LogsumPurpose::ALL,
            CarOwnership::ALL,
            VotSegment::ALL,
            TransitAccess::ALL
        )
        .map(|(purpose, car_ownership, vot, transit_access)| CellKey {
            purpose,
            car_ownership,
            vot,
            transit_access,
        })
    }
}

/// zone accessibility by purpose and traveler segment. rows are addressed by zone
/// index; cells are seeded with EPSILON so that the final log is always finite.
#[derive(Clone, Debug)]
pub struct AggregateLogsumTable {
    zone_ids: Vec<i64>,
    cells: Vec<f64>,
}

impl AggregateLogsumTable {
    pub fn new(zone_ids: Vec<i64>) -> AggregateLogsumTable {
        let cells = vec![EPSILON; zone_ids.len() * ROW_LENGTH];
        AggregateLogsumTable { zone_ids, cells }
    }

    pub fn seeded_row() -> Vec<f64> {
        vec![EPSILON; ROW_LENGTH]
    }

    pub fn zone_count(&self) -> usize {
        self.zone_ids.len()
    }

    pub(crate) fn set_row(&mut self, zone_index: usize, row: &[f64]) {
        let start = zone_index * ROW_LENGTH;
        if let Some(dst) = self.cells.get_mut(start..start + ROW_LENGTH) {
            dst.copy_from_slice(row);
        }
    }

    /// the final transform, applied once after every row is written
    pub(crate) fn apply_log(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = cell.ln();
        }
    }

    pub fn get_accessibility(
        &self,
        zone_index: usize,
        purpose: LogsumPurpose,
        car_ownership: CarOwnership,
        vot: VotSegment,
        transit_access: TransitAccess,
    ) -> Option<f64> {
        let key = CellKey {
            purpose,
            car_ownership,
            vot,
            transit_access,
        };
        self.cells.get(zone_index * ROW_LENGTH + key.offset()).copied()
    }

    /// (zone id, key, value) for every cell, in row order
    pub fn iter(&self) -> impl Iterator<Item = (i64, CellKey, f64)> + '_ {
        self.zone_ids
            .iter()
            .zip(self.cells.chunks(ROW_LENGTH))
            .flat_map(|(zone_id, row)| {
                CellKey::all()
                    .zip(row.iter())
                    .map(move |(key, value)| (*zone_id, key, *value))
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_offsets_follow_row_order() {
        let offsets: Vec<usize> = CellKey::all().map(|k| k.offset()).collect();
        assert_eq!(offsets.len(), ROW_LENGTH);
        assert!(offsets.iter().enumerate().all(|(i, o)| i == *o));
    }

    #[test]
    fn test_unwritten_rows_log_to_epsilon() {
        let mut table = AggregateLogsumTable::new(vec![7, 8]);
        let mut row = AggregateLogsumTable::seeded_row();
        let key = CellKey {
            purpose: LogsumPurpose::Escort,
            car_ownership: CarOwnership::NoCars,
            vot: VotSegment::High,
            transit_access: TransitAccess::Mid,
        };
        row[key.offset()] += 1.0;
        table.set_row(1, &row);
        table.apply_log();
        let untouched = table
            .get_accessibility(
                0,
                LogsumPurpose::Social,
                CarOwnership::Child,
                VotSegment::Low,
                TransitAccess::None,
            )
            .expect("test invariant failed, cell exists");
        assert_eq!(untouched, EPSILON.ln());
        let written = table
            .get_accessibility(1, key.purpose, key.car_ownership, key.vot, key.transit_access)
            .expect("test invariant failed, cell exists");
        assert!(written.abs() < 1e-12);
        assert_eq!(table.get_accessibility(2, key.purpose, key.car_ownership, key.vot, key.transit_access), None);
        assert_eq!(table.iter().count(), 2 * ROW_LENGTH);
    }
}
