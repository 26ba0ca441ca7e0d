pub mod access;
pub mod aggregate;
pub mod choice;
pub mod impedance;
pub mod mode;
pub mod network;
pub mod query;
pub mod transit;
pub mod utility;

mod logsum_error;

pub use logsum_error::LogsumError;

#[cfg(test)]
pub(crate) mod test_fixtures;
