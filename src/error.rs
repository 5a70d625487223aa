//! Error handler for signup.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::Field;

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Errors raised by collaborators.
///
/// The controller never exposes their content; any of them ends up as a
/// generic internal server error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("account already exists")]
    DuplicateAccount,
    #[error("something went wrong")]
    Unknown,

    #[error("internal server error")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ApplicationError {
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

pub trait ToInternal<T> {
    fn catch(self) -> Result<T>;
}

impl<T, E> ToInternal<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> Result<T> {
        self.map_err(|e| ApplicationError::Internal(Box::new(e)))
    }
}

/// Request rejected by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParamError {
    #[error("Missing param: {0}")]
    MissingParam(Field),
    #[error("Invalid param: {0}")]
    InvalidParam(Field),
}

impl ParamError {
    /// Field responsible for the rejection.
    pub fn field(&self) -> Field {
        match self {
            ParamError::MissingParam(field)
            | ParamError::InvalidParam(field) => *field,
        }
    }
}

/// Every way a signup can end without an account.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error(transparent)]
    Server(#[from] ApplicationError),
}

/// Structure for detailed error responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub r#type: Option<String>,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: Option<String>,
    pub errors: Option<Vec<FieldError>>,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code.as_u16();
        self
    }

    /// Update `title` field.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Add detailed error.
    pub fn details(mut self, description: &str) -> Self {
        self.detail = description.into();
        self
    }

    /// Attach an error to a specific field.
    pub fn field(mut self, field: Field, message: &str) -> Self {
        self.errors.get_or_insert_with(Vec::new).push(FieldError {
            field: field.as_str().to_owned(),
            message: message.into(),
        });
        self
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            r#type: None,
            title: "Internal server error.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: String::default(),
            instance: None,
            errors: None,
        }
    }
}

impl From<&ParamError> for ResponseError {
    fn from(err: &ParamError) -> Self {
        let title = match err {
            ParamError::MissingParam(_) => "Missing required parameter.",
            ParamError::InvalidParam(_) => "Invalid parameter.",
        };
        let message = err.to_string();

        ResponseError::default()
            .title(title)
            .details(&message)
            .status(StatusCode::BAD_REQUEST)
            .field(err.field(), &message)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_error_message() {
        assert_eq!(
            ParamError::MissingParam(Field::PasswordConfirmation).to_string(),
            "Missing param: password_confirmation"
        );
        assert_eq!(
            ParamError::InvalidParam(Field::Email).to_string(),
            "Invalid param: email"
        );
    }

    #[test]
    fn test_response_error_from_param() {
        let error = ResponseError::from(&ParamError::MissingParam(Field::Name));

        assert_eq!(error.status, 400);
        assert_eq!(error.title, "Missing required parameter.");
        assert_eq!(error.detail, "Missing param: name");
        assert_eq!(
            error.errors,
            Some(vec![FieldError {
                field: "name".into(),
                message: "Missing param: name".into(),
            }])
        );
    }

    #[test]
    fn test_catch_boxes_foreign_error() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("connection reset"));

        let err = result.catch().unwrap_err();
        assert!(matches!(err, ApplicationError::Internal(_)));
        assert_eq!(err.to_string(), "internal server error");
    }
}
