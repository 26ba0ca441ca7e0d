use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// network sub-options within a mode. the order of the variants is the order
/// in which the path choice model evaluates them.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PathType {
    FullNetwork,
    NoTolls,
    LocalBus,
    LightRail,
    PremiumBus,
    CommuterRail,
    Ferry,
}

impl PathType {
    pub const ALL: [PathType; 7] = [
        PathType::FullNetwork,
        PathType::NoTolls,
        PathType::LocalBus,
        PathType::LightRail,
        PathType::PremiumBus,
        PathType::CommuterRail,
        PathType::Ferry,
    ];

    pub const TRANSIT: [PathType; 5] = [
        PathType::LocalBus,
        PathType::LightRail,
        PathType::PremiumBus,
        PathType::CommuterRail,
        PathType::Ferry,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PathType::FullNetwork => "full_network",
            PathType::NoTolls => "no_tolls",
            PathType::LocalBus => "local_bus",
            PathType::LightRail => "light_rail",
            PathType::PremiumBus => "premium_bus",
            PathType::CommuterRail => "commuter_rail",
            PathType::Ferry => "ferry",
        }
    }
}

impl std::fmt::Display for PathType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PathType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        PathType::ALL
            .iter()
            .find(|p| p.as_str() == normalized)
            .copied()
            .ok_or_else(|| format!("unknown path type '{s}'"))
    }
}
