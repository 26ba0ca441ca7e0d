use super::{AggregateLogsumConfig, PathImpedanceConfig};
use crate::model::LogsumError;
use serde::{Deserialize, Serialize};

/// top-level run configuration for the bambam-logsum application
#[derive(Clone, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct LogsumAppConfig {
    pub path_impedance: PathImpedanceConfig,
    pub aggregate: AggregateLogsumConfig,
}

impl TryFrom<&String> for LogsumAppConfig {
    type Error = LogsumError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: LogsumAppConfig = super::read_config_file(f)?;
        conf.path_impedance.validate()?;
        Ok(conf)
    }
}
