mod blending_parameters;
mod impedance_lookup;
mod node_distance_cache;
mod node_distance_table;
mod skim_endpoint;
mod skim_roster;
mod skim_value;

pub use blending_parameters::BlendingParameters;
pub use impedance_lookup::{ImpedanceLookup, SkimRequest};
pub use node_distance_cache::NodeDistanceCache;
pub use node_distance_table::NodeDistanceTable;
pub use skim_endpoint::SkimEndpoint;
pub use skim_roster::SkimRoster;
pub use skim_value::SkimValue;
