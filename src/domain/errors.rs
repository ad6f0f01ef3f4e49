use derive_more::Display;

use crate::domain::order_form::{Action, Indicator, SlotId};

/// Rejected selection transitions.
///
/// The form prevents both cases structurally (disabled options, disabled
/// action picker), so these only surface when the domain is driven directly.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SelectionError {
    #[display(fmt = "{} is already selected in {}", indicator, taken_by)]
    DuplicateIndicator { indicator: Indicator, taken_by: SlotId },
    #[display(fmt = "{} is not an action of {}", action, indicator)]
    ActionNotInVocabulary { indicator: Indicator, action: Action },
}

impl std::error::Error for SelectionError {}

/// Everything that can end a request attempt. None of these are fatal to the page.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    Transport(String),
    #[display(fmt = "Network response was not ok. Status Code: {} {}", status, status_text)]
    HttpStatus { status: u16, status_text: String },
    #[display(fmt = "The response was not valid JSON: {}", _0)]
    MalformedJson(String),
    #[display(fmt = "The response contained no results")]
    EmptyResponse,
    #[display(fmt = "Selection Error: {}", _0)]
    Selection(SelectionError),
}

impl std::error::Error for AppError {}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::Selection(err)
    }
}

pub type NetworkResult<T> = Result<T, AppError>;
