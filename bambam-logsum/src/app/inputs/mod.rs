mod input_ops;
mod model_inputs;
mod records;

pub use input_ops::{read_rows, write_rows};
pub use model_inputs::{InputFiles, ModelInputs};
pub use records::QueryRecord;
