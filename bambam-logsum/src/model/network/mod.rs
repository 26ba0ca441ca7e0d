mod distance_list;
mod network_registry;
mod node_registry;
mod parcel;
mod park_and_ride_node;
mod parking_type;
mod stop_area;
mod zone;

pub use distance_list::{DistanceEntry, DistanceList};
pub use network_registry::NetworkRegistry;
pub use node_registry::NodeRegistry;
pub use parcel::{Parcel, ParcelEmployment, TransitDistances};
pub use park_and_ride_node::ParkAndRideNode;
pub use parking_type::ParkingType;
pub use stop_area::StopArea;
pub use zone::Zone;
