use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    Work,
    School,
    Escort,
    PersonalBusiness,
    Shopping,
    Meal,
    Social,
    Recreation,
    Medical,
    Business,
}

/// the three purpose groups used to select in-vehicle time weights
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AggregatePurpose {
    Commute,
    Business,
    Personal,
}

impl Purpose {
    pub fn aggregate(&self) -> AggregatePurpose {
        match self {
            Purpose::Work | Purpose::School | Purpose::Escort => AggregatePurpose::Commute,
            Purpose::Business => AggregatePurpose::Business,
            _ => AggregatePurpose::Personal,
        }
    }

    /// hours a vehicle is assumed to stay parked when the trip has no return leg
    pub fn default_parking_hours(&self) -> f64 {
        match self {
            Purpose::Work => 8.0,
            Purpose::School => 6.0,
            Purpose::Social => 3.0,
            _ => 2.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Work => "work",
            Purpose::School => "school",
            Purpose::Escort => "escort",
            Purpose::PersonalBusiness => "personal_business",
            Purpose::Shopping => "shopping",
            Purpose::Meal => "meal",
            Purpose::Social => "social",
            Purpose::Recreation => "recreation",
            Purpose::Medical => "medical",
            Purpose::Business => "business",
        }
    }
}

impl FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Purpose as P;
        let all = [
            P::Work,
            P::School,
            P::Escort,
            P::PersonalBusiness,
            P::Shopping,
            P::Meal,
            P::Social,
            P::Recreation,
            P::Medical,
            P::Business,
        ];
        let normalized = s.trim().to_lowercase();
        all.into_iter()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| format!("unknown purpose '{s}'"))
    }
}
