use super::AggregateRow;
use crate::app::inputs::{write_rows, InputFiles, ModelInputs};
use crate::config::LogsumAppConfig;
use crate::model::{
    aggregate::AggregateLogsumCalculator, choice::PathChoiceModel, utility::PathContext,
    LogsumError,
};

/// computes the aggregate logsum table for every zone and writes it as one row per cell
pub fn run(
    files: &InputFiles,
    conf: &LogsumAppConfig,
    output_file: &String,
) -> Result<(), LogsumError> {
    let inputs = ModelInputs::load(files, &conf.path_impedance)?;
    let ctx = PathContext::new(&conf.path_impedance, &inputs.skims, &inputs.registry);
    let calculator = AggregateLogsumCalculator::new(PathChoiceModel::new(ctx), &conf.aggregate);
    let table = calculator.calculate()?;
    log::info!("writing aggregate logsums for {} zones", table.zone_count());
    write_rows(output_file, table.iter().map(AggregateRow::from))
}
