use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParkingType {
    #[default]
    Free,
    Paid,
    /// free, but only for stays up to two hours
    FreeTimeLimited,
}

impl ParkingType {
    pub const TIME_LIMIT_HOURS: f64 = 2.0;

    pub fn is_free(&self) -> bool {
        matches!(self, ParkingType::Free | ParkingType::FreeTimeLimited)
    }
}

impl TryFrom<i64> for ParkingType {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(ParkingType::Free),
            2 => Ok(ParkingType::Paid),
            3 => Ok(ParkingType::FreeTimeLimited),
            other => Err(format!("unknown parking type code {other}")),
        }
    }
}
