mod auto_ops;
pub mod logit_ops;
pub mod parking_ops;
mod path_alternative;
mod path_context;
mod walk_bike_ops;

pub use auto_ops::{evaluate_auto, evaluate_auto_leg};
pub use path_alternative::PathAlternative;
pub use path_context::{AlternativeRequest, PathContext};
pub use walk_bike_ops::evaluate_walk_bike;
