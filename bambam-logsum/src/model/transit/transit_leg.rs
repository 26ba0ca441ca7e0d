/// impedances of the in-vehicle part of a transit trip between two stops or zones
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitLeg {
    pub time: f64,
    pub distance: f64,
    pub cost: f64,
    pub utility: f64,
    pub boardings_outbound: f64,
    /// zero for one-way trips
    pub boardings_return: f64,
}

impl TransitLeg {
    pub fn boardings(&self) -> f64 {
        self.boardings_outbound + self.boardings_return
    }
}
