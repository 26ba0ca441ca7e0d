mod mode;
mod mode_combinations;
mod path_type;

pub use mode::Mode;
pub use mode_combinations::ModeCombinations;
pub use path_type::PathType;
