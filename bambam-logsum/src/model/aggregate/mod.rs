mod aggregate_logsum_calculator;
mod aggregate_logsum_table;
mod mode_coefficients;
mod segment;
mod subzone;

pub use aggregate_logsum_calculator::AggregateLogsumCalculator;
pub use aggregate_logsum_table::{AggregateLogsumTable, CellKey, ROW_LENGTH};
pub use mode_coefficients::{mode_utility_sum, GeneralizedTimes, SegmentFlags, AGGREGATE_UTILITY_LIMIT};
pub use segment::{CarOwnership, LogsumPurpose, TransitAccess, VotSegment};
pub use subzone::{build_subzones, subzone_of, SubzoneAttraction, EMPTY_SIZE, SUBZONES_PER_ZONE};
