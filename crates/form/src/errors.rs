use thiserror::Error;

use crate::values::Field;

/// Errors for malformed update operations on the store.
///
/// Validation failures are NOT errors in this sense; they are data carried in
/// [`crate::ValidationErrors`] for the presentation layer to display.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("field `{0}` is not active for the current position")]
    NotActive(Field),

    #[error("field `{0}` is not a text field")]
    NotText(Field),
}
