mod aggregate_row;
mod app;

pub use aggregate_row::AggregateRow;
pub use app::run;
