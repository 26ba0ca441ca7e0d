use serde::{Deserialize, Serialize};

/// where a trip starts or ends. zone endpoints are used for sketch-level
/// batches, parcel endpoints when fine-grained network detail is wanted.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TripEndpoint {
    Zone(i64),
    Parcel(i64),
}

impl std::fmt::Display for TripEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripEndpoint::Zone(id) => write!(f, "zone {id}"),
            TripEndpoint::Parcel(id) => write!(f, "parcel {id}"),
        }
    }
}
