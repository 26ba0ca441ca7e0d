pub mod aggregate;
pub mod inputs;
pub mod query;
