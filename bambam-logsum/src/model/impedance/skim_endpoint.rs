use crate::model::network::Parcel;

/// one end of a skim lookup. zone endpoints address matrices directly, parcel
/// endpoints address the matrix of their zone and may be blended.
#[derive(Clone, Copy, Debug)]
pub enum SkimEndpoint<'a> {
    Zone(i64),
    Parcel(&'a Parcel),
}

impl SkimEndpoint<'_> {
    pub fn zone_id(&self) -> i64 {
        match self {
            SkimEndpoint::Zone(id) => *id,
            SkimEndpoint::Parcel(p) => p.zone_id,
        }
    }

    pub fn parcel(&self) -> Option<&Parcel> {
        match self {
            SkimEndpoint::Zone(_) => None,
            SkimEndpoint::Parcel(p) => Some(p),
        }
    }
}

impl std::fmt::Display for SkimEndpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkimEndpoint::Zone(id) => write!(f, "zone {id}"),
            SkimEndpoint::Parcel(p) => write!(f, "parcel {}", p.id),
        }
    }
}
