use serde::{Deserialize, Serialize};

/// which set of transit skims and utility terms to use for a transit leg
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransitForm {
    /// in-vehicle time split by submode with per-submode weights and gamma transforms
    #[default]
    Submode,
    /// total in-vehicle time, waits, boardings and a path-type constant
    Classic,
}
