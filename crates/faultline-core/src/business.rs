use std::fmt;

use http::StatusCode;
use thiserror::Error;

use crate::{ErrorType, HttpError};

/// Intended outcome of a business error; the only thing that picks its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessErrorKind {
    /// Caller sent something the domain rejects (400)
    BadRequest,
    /// Request conflicts with current resource state (409)
    Conflict,
    /// Caller is known but not allowed (403)
    Forbidden,
    /// Resource does not exist (404)
    NotFound,
    /// Caller is not authenticated (401)
    Unauthorized,
    /// Domain failure with no more specific kind (500)
    Business,
}

impl BusinessErrorKind {
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Business => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable name used in logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Conflict => "conflict",
            Self::Forbidden => "forbidden",
            Self::NotFound => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Business => "business",
        }
    }
}

impl fmt::Display for BusinessErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected, domain-level failure raised by application code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} error {error}")]
pub struct BusinessError {
    kind: BusinessErrorKind,
    error: ErrorType,
    detail: Option<String>,
}

impl BusinessError {
    pub const fn new(kind: BusinessErrorKind, error: ErrorType) -> Self {
        Self {
            kind,
            error,
            detail: None,
        }
    }

    pub const fn bad_request(error: ErrorType) -> Self {
        Self::new(BusinessErrorKind::BadRequest, error)
    }

    pub const fn conflict(error: ErrorType) -> Self {
        Self::new(BusinessErrorKind::Conflict, error)
    }

    pub const fn forbidden(error: ErrorType) -> Self {
        Self::new(BusinessErrorKind::Forbidden, error)
    }

    pub const fn not_found(error: ErrorType) -> Self {
        Self::new(BusinessErrorKind::NotFound, error)
    }

    pub const fn unauthorized(error: ErrorType) -> Self {
        Self::new(BusinessErrorKind::Unauthorized, error)
    }

    /// Generic business failure, reported as 500
    pub const fn business(error: ErrorType) -> Self {
        Self::new(BusinessErrorKind::Business, error)
    }

    /// Attach free-text detail shown to the caller
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub const fn kind(&self) -> BusinessErrorKind {
        self.kind
    }

    pub const fn error(&self) -> ErrorType {
        self.error
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl HttpError for BusinessError {
    fn status_code(&self) -> StatusCode {
        self.kind.status_code()
    }

    fn error_type(&self) -> ErrorType {
        self.error
    }

    fn client_detail(&self) -> Option<&str> {
        self.detail()
    }
}
