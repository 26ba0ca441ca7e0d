use crate::model::mode::Mode;

#[derive(thiserror::Error, Debug)]
pub enum LogsumError {
    #[error("numerical fault evaluating {mode} from {origin} to {destination}: sum of exponentiated utilities {sum}, logsum {logsum}, effective time coefficient {time_coefficient}")]
    NumericalFault {
        mode: Mode,
        origin: String,
        destination: String,
        sum: f64,
        logsum: f64,
        time_coefficient: f64,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading input: {0}")]
    InputError(String),
    #[error("failure writing output: {0}")]
    OutputError(String),
    #[error("failure building worker pool: {0}")]
    ThreadPoolError(String),
    #[error("i/o failure: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("csv failure: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
