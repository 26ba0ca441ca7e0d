mod app;
mod outcome_row;

pub use app::{run, run_queries};
pub use outcome_row::OutcomeRow;
