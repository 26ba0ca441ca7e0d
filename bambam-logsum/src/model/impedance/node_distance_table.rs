use std::collections::HashMap;

/// shortest network lengths between network nodes near parcels. each origin row
/// is sorted by destination node id.
#[derive(Clone, Debug, Default)]
pub struct NodeDistanceTable {
    rows: Vec<Vec<(i64, f64)>>,
    row_index: HashMap<i64, usize>,
}

impl NodeDistanceTable {
    pub fn new(entries: impl IntoIterator<Item = (i64, i64, f64)>) -> NodeDistanceTable {
        let mut grouped: HashMap<i64, Vec<(i64, f64)>> = HashMap::new();
        for (origin, destination, length) in entries {
            grouped.entry(origin).or_default().push((destination, length));
        }
        let mut table = NodeDistanceTable::default();
        for (origin, mut row) in grouped {
            row.sort_by_key(|(d, _)| *d);
            table.row_index.insert(origin, table.rows.len());
            table.rows.push(row);
        }
        table
    }

    pub fn row_of(&self, origin_node: i64) -> Option<usize> {
        self.row_index.get(&origin_node).copied()
    }

    pub fn length_in_row(&self, row: usize, destination_node: i64) -> Option<f64> {
        let entries = self.rows.get(row)?;
        entries
            .binary_search_by_key(&destination_node, |(d, _)| *d)
            .ok()
            .map(|idx| entries[idx].1)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
