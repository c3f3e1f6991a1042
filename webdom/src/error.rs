use thiserror::Error;

/// Errors raised by document operations that target an element by ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("no element with id '{0}' in the document")]
    UnknownElement(String),

    #[error("element '{0}' cannot receive focus")]
    NotFocusable(String),
}
