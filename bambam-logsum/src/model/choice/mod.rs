mod path_choice_model;
mod path_choice_outcome;

pub use path_choice_model::PathChoiceModel;
pub use path_choice_outcome::PathChoiceOutcome;
