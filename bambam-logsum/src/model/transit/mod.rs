mod transit_leg;
mod transit_ops;
mod walk_access_ops;
mod walk_transit;

pub use transit_leg::TransitLeg;
pub use transit_ops::evaluate_transit_leg;
pub use walk_access_ops::transit_walk_time;
pub use walk_transit::evaluate_walk_transit;
