use thiserror::Error;

/// Why a submit was rejected. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name is empty")]
    EmptyName,
    #[error("message is empty")]
    EmptyMessage,
    #[error("name and message are empty")]
    EmptyNameAndMessage,
}

/// Both fields must hold something other than whitespace.
pub fn validate(name: &str, message: &str) -> Result<(), ValidationError> {
    match (name.trim().is_empty(), message.trim().is_empty()) {
        (false, false) => Ok(()),
        (true, false) => Err(ValidationError::EmptyName),
        (false, true) => Err(ValidationError::EmptyMessage),
        (true, true) => Err(ValidationError::EmptyNameAndMessage),
    }
}

pub fn is_valid(name: &str, message: &str) -> bool {
    validate(name, message).is_ok()
}
