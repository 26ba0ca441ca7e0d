//! the four segmentation axes of the aggregate logsum table.

use serde::Serialize;
use std::fmt::Display;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogsumPurpose {
    HomeBasedComposite,
    WorkBased,
    Escort,
    PersonalBusiness,
    Shopping,
    Business,
    Social,
}

impl LogsumPurpose {
    pub const ALL: [LogsumPurpose; 7] = [
        LogsumPurpose::HomeBasedComposite,
        LogsumPurpose::WorkBased,
        LogsumPurpose::Escort,
        LogsumPurpose::PersonalBusiness,
        LogsumPurpose::Shopping,
        LogsumPurpose::Business,
        LogsumPurpose::Social,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &str {
        match self {
            LogsumPurpose::HomeBasedComposite => "home_based_composite",
            LogsumPurpose::WorkBased => "work_based",
            LogsumPurpose::Escort => "escort",
            LogsumPurpose::PersonalBusiness => "personal_business",
            LogsumPurpose::Shopping => "shopping",
            LogsumPurpose::Business => "business",
            LogsumPurpose::Social => "social",
        }
    }
}

impl Display for LogsumPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// household car ownership relative to driving-age adults
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarOwnership {
    Child,
    NoCars,
    FewerCarsThanAdults,
    CarsForAllAdults,
}

impl CarOwnership {
    pub const ALL: [CarOwnership; 4] = [
        CarOwnership::Child,
        CarOwnership::NoCars,
        CarOwnership::FewerCarsThanAdults,
        CarOwnership::CarsForAllAdults,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn is_child(&self) -> bool {
        *self == CarOwnership::Child
    }

    pub fn has_no_cars(&self) -> bool {
        *self == CarOwnership::NoCars
    }

    /// adults compete for fewer cars than there are drivers
    pub fn has_car_competition(&self) -> bool {
        *self == CarOwnership::FewerCarsThanAdults
    }

    pub fn as_str(&self) -> &str {
        match self {
            CarOwnership::Child => "child",
            CarOwnership::NoCars => "no_cars",
            CarOwnership::FewerCarsThanAdults => "fewer_cars_than_adults",
            CarOwnership::CarsForAllAdults => "cars_for_all_adults",
        }
    }
}

impl Display for CarOwnership {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VotSegment {
    Low,
    Medium,
    High,
}

impl VotSegment {
    pub const ALL: [VotSegment; 3] = [VotSegment::Low, VotSegment::Medium, VotSegment::High];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &str {
        match self {
            VotSegment::Low => "low",
            VotSegment::Medium => "medium",
            VotSegment::High => "high",
        }
    }
}

impl Display for VotSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// walk access from the origin to transit
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TransitAccess {
    /// within a quarter mile
    Near,
    /// a quarter to half a mile
    Mid,
    None,
}

impl TransitAccess {
    pub const ALL: [TransitAccess; 3] = [TransitAccess::Near, TransitAccess::Mid, TransitAccess::None];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &str {
        match self {
            TransitAccess::Near => "near",
            TransitAccess::Mid => "mid",
            TransitAccess::None => "none",
        }
    }
}

impl Display for TransitAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
