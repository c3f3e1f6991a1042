use thiserror::Error;

/// Returned when a string names neither `checkbox` nor `radio`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid toggle input type '{value}', expected 'checkbox' or 'radio'")]
pub struct ParseInputTypeError {
    pub value: String,
}
