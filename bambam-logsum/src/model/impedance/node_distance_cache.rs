use super::NodeDistanceTable;

/// memoizes the most recent node distance lookups of one worker. every parallel
/// task owns its own cache.
#[derive(Clone, Debug, Default)]
pub struct NodeDistanceCache {
    origin_row: Option<(i64, Option<usize>)>,
    last_pair: Option<((i64, i64), Option<f64>)>,
    hits: u64,
    misses: u64,
}

impl NodeDistanceCache {
    pub fn new() -> NodeDistanceCache {
        NodeDistanceCache::default()
    }

    /// network length between two nodes, or None if the table has no such pair
    pub fn node_to_node_length(
        &mut self,
        table: &NodeDistanceTable,
        origin_node: i64,
        destination_node: i64,
    ) -> Option<f64> {
        if let Some((pair, length)) = self.last_pair {
            if pair == (origin_node, destination_node) {
                self.hits += 1;
                return length;
            }
        }
        self.misses += 1;
        let row = match self.origin_row {
            Some((node, row)) if node == origin_node => row,
            _ => {
                let row = table.row_of(origin_node);
                self.origin_row = Some((origin_node, row));
                row
            }
        };
        let length = row.and_then(|r| table.length_in_row(r, destination_node));
        self.last_pair = Some(((origin_node, destination_node), length));
        length
    }

    /// (hits, misses) of the pair memo
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
