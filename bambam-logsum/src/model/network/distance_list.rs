/// a candidate (stop area or node zone) and its network length from a parcel
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceEntry {
    pub key: i64,
    pub length: f64,
}

/// candidates reachable from one parcel, ordered by increasing length so that a
/// search may stop at the first entry beyond its radius
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DistanceList {
    entries: Vec<DistanceEntry>,
}

impl DistanceList {
    pub fn new(mut entries: Vec<DistanceEntry>) -> DistanceList {
        entries.sort_by(|a, b| a.length.total_cmp(&b.length));
        DistanceList { entries }
    }

    pub fn entries(&self) -> &[DistanceEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
