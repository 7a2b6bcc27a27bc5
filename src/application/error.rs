// src/application/error.rs
use crate::application::forms::FormErrors;
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Submitted form data failed validation. Recoverable: the caller
    /// re-displays the form with these annotations.
    #[error("invalid form: {0}")]
    InvalidForm(FormErrors),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }
}

impl From<FormErrors> for ApplicationError {
    fn from(errors: FormErrors) -> Self {
        Self::InvalidForm(errors)
    }
}
