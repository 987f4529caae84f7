//! Error types for the portal core and its HTTP surface.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::content::ContentKind;
use crate::models::{Role, Section};

/// Login failures. Expected outcomes, never panics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field checks that failed for one payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(|e| e.field).collect()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Lifecycle failures on the content store.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("{kind} {id} not found")]
    NotFound { kind: ContentKind, id: Uuid },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("{kind} id {id} is already in use")]
    DuplicateId { kind: ContentKind, id: Uuid },

    #[error("Role {role} may not manage the {section} section")]
    Forbidden { role: Role, section: Section },
}

impl From<ValidationErrors> for ContentError {
    fn from(errors: ValidationErrors) -> Self {
        ContentError::Validation(errors)
    }
}

pub type ContentResult<T> = Result<T, ContentError>;

/// Environment configuration failures, reported once at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// ApiError
///
/// The error type returned by every HTTP handler. Each variant maps to one
/// status code and a `{"error": ...}` JSON body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No authenticated session, or a failed login.
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Forbidden")]
    Forbidden,

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("Not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized | ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Content(err) => match err {
                ContentError::NotFound { .. } => StatusCode::NOT_FOUND,
                ContentError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                ContentError::DuplicateId { .. } => StatusCode::CONFLICT,
                ContentError::Forbidden { .. } => StatusCode::FORBIDDEN,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::Content(ContentError::Validation(errors)) => json!({
                "error": self.to_string(),
                "fields": errors.0,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
