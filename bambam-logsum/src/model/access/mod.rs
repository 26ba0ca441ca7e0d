//! transit alternatives that add a drive or bike leg through a parking facility,
//! or carry the bike on board.

pub(crate) mod access_ops;
mod bike_on_transit;
mod bike_park_ride;
mod car_park_ride;
mod walk_ride_bike;

pub use access_ops::Egress;
pub use bike_on_transit::evaluate_bike_on_transit;
pub use bike_park_ride::evaluate_bike_park_ride;
pub use car_park_ride::{evaluate_car_park_ride_bike, evaluate_car_park_ride_walk};
pub use walk_ride_bike::evaluate_walk_ride_bike;
