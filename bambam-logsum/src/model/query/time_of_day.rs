//! minutes of the modeled day. minute 1 is 3 AM and the day ends at minute 1440.

pub const THREE_AM: i32 = 1;
pub const FIVE_AM: i32 = 121;
pub const SIX_AM: i32 = 181;
pub const SEVEN_AM: i32 = 241;
pub const EIGHT_AM: i32 = 301;
pub const NINE_AM: i32 = 361;
pub const THREE_PM: i32 = 721;
pub const FOUR_PM: i32 = 781;
pub const FIVE_PM: i32 = 841;
pub const SIX_PM: i32 = 901;
pub const NINE_PM: i32 = 1081;
pub const ELEVEN_PM: i32 = 1201;
pub const MINUTES_IN_A_DAY: i32 = 1440;

/// true when `lower < minute <= upper`
pub fn is_left_exclusive_between(minute: i32, lower: i32, upper: i32) -> bool {
    minute > lower && minute <= upper
}

/// hourly-priced bands used by parking cost schedules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParkingBand {
    /// 11 PM through 8 AM
    Overnight,
    /// 8 AM through 6 PM
    Daytime,
    /// 6 PM through 11 PM
    Evening,
}

impl ParkingBand {
    pub fn from_minute(minute: i32) -> ParkingBand {
        if is_left_exclusive_between(minute, ELEVEN_PM, MINUTES_IN_A_DAY)
            || is_left_exclusive_between(minute, THREE_AM - 1, EIGHT_AM)
        {
            ParkingBand::Overnight
        } else if is_left_exclusive_between(minute, EIGHT_AM, SIX_PM) {
            ParkingBand::Daytime
        } else {
            ParkingBand::Evening
        }
    }
}

/// index into the ten parking search time bands kept on a parcel:
/// 21-05, 05-06, 06-07, 07-08, 08-09, 09-15, 15-16, 16-17, 17-18, 18-21
pub fn parking_search_band(minute: i32) -> usize {
    let bounds = [
        FIVE_AM,
        SIX_AM,
        SEVEN_AM,
        EIGHT_AM,
        NINE_AM,
        THREE_PM,
        FOUR_PM,
        FIVE_PM,
        SIX_PM,
        NINE_PM,
    ];
    if minute <= FIVE_AM || minute > NINE_PM {
        return 0;
    }
    bounds
        .windows(2)
        .position(|w| is_left_exclusive_between(minute, w[0], w[1]))
        .map(|idx| idx + 1)
        .unwrap_or(0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parking_band_edges() {
        assert_eq!(ParkingBand::from_minute(THREE_AM), ParkingBand::Overnight);
        assert_eq!(ParkingBand::from_minute(EIGHT_AM), ParkingBand::Overnight);
        assert_eq!(ParkingBand::from_minute(EIGHT_AM + 1), ParkingBand::Daytime);
        assert_eq!(ParkingBand::from_minute(SIX_PM), ParkingBand::Daytime);
        assert_eq!(ParkingBand::from_minute(SIX_PM + 1), ParkingBand::Evening);
        assert_eq!(ParkingBand::from_minute(ELEVEN_PM + 1), ParkingBand::Overnight);
    }

    #[test]
    fn test_search_bands() {
        assert_eq!(parking_search_band(THREE_AM), 0);
        assert_eq!(parking_search_band(FIVE_AM + 1), 1);
        assert_eq!(parking_search_band(NINE_AM + 10), 5);
        assert_eq!(parking_search_band(THREE_PM + 1), 6);
        assert_eq!(parking_search_band(NINE_PM), 9);
        assert_eq!(parking_search_band(NINE_PM + 1), 0);
    }
}
