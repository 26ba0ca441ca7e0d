use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct StopArea {
    pub key: i64,
    pub zone_id: i64,
    /// bikes may be carried on board from this stop area
    pub bike_on_board_terminal: bool,
}
