mod purpose;
pub mod time_of_day;
mod travel_query;
mod trip_endpoint;

pub use purpose::{AggregatePurpose, Purpose};
pub use travel_query::TravelQuery;
pub use trip_endpoint::TripEndpoint;
