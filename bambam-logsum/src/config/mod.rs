mod aggregate_logsum_config;
mod logsum_app_config;
mod path_impedance_config;
mod transit_form;
mod weights;

pub use aggregate_logsum_config::AggregateLogsumConfig;
pub use logsum_app_config::LogsumAppConfig;
pub use path_impedance_config::PathImpedanceConfig;
pub use transit_form::TransitForm;
pub use weights::{
    BikeQualityWeights, ByAggregatePurpose, DriverClassWeights, MileagePricing,
    TransitSubmodeWeights,
};

use crate::model::LogsumError;
use serde::de::DeserializeOwned;

/// reads a TOML or JSON configuration file, choosing the decoder by file extension
pub(crate) fn read_config_file<T: DeserializeOwned>(f: &String) -> Result<T, LogsumError> {
    if f.ends_with(".toml") {
        let s = std::fs::read_to_string(f)
            .map_err(|e| LogsumError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        toml::from_str(&s)
            .map_err(|e| LogsumError::ConfigurationError(format!("failure decoding {f}: {e}")))
    } else if f.ends_with(".json") {
        let s = std::fs::read_to_string(f)
            .map_err(|e| LogsumError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        serde_json::from_str(&s)
            .map_err(|e| LogsumError::ConfigurationError(format!("failure decoding {f}: {e}")))
    } else {
        Err(LogsumError::ConfigurationError(format!(
            "unsupported file type: {f}"
        )))
    }
}
