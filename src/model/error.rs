use thiserror::Error;

// Input validation errors, detected before the store is reached
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("task title must be at least {0} characters")]
    TitleTooShort(usize),
}
