use http::StatusCode;
use thiserror::Error;

use crate::{ErrorType, HttpError};

/// Malformed request detected by the HTTP layer before reaching a handler
///
/// Each variant carries the framework's own description of the problem,
/// which is reported to the caller as the error detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestFault {
    /// Route exists but not for this method
    #[error("{0}")]
    MethodNotAllowed(String),
    /// Request body has a content type the route does not accept
    #[error("{0}")]
    UnsupportedMediaType(String),
    /// Caller does not accept any content type the route produces
    #[error("{0}")]
    NotAcceptable(String),
    /// Path segment could not be extracted
    #[error("{0}")]
    MissingPathVariable(String),
    /// Query string parameter is missing or invalid
    #[error("{0}")]
    MissingParameter(String),
    /// Required header is absent
    #[error("{0}")]
    MissingHeader(String),
    /// No route matches the request path
    #[error("{0}")]
    NoRouteFound(String),
    /// Request body could not be read or parsed
    #[error("{0}")]
    UnreadableBody(String),
}

impl RequestFault {
    /// Framework message describing the fault
    pub fn message(&self) -> &str {
        match self {
            Self::MethodNotAllowed(message)
            | Self::UnsupportedMediaType(message)
            | Self::NotAcceptable(message)
            | Self::MissingPathVariable(message)
            | Self::MissingParameter(message)
            | Self::MissingHeader(message)
            | Self::NoRouteFound(message)
            | Self::UnreadableBody(message) => message,
        }
    }

    /// Stable name used in logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MethodNotAllowed(_) => "method_not_allowed",
            Self::UnsupportedMediaType(_) => "unsupported_media_type",
            Self::NotAcceptable(_) => "not_acceptable",
            Self::MissingPathVariable(_) => "missing_path_variable",
            Self::MissingParameter(_) => "missing_parameter",
            Self::MissingHeader(_) => "missing_header",
            Self::NoRouteFound(_) => "no_route_found",
            Self::UnreadableBody(_) => "unreadable_body",
        }
    }
}

impl HttpError for RequestFault {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            // Not-acceptable shares 415 with unsupported media types
            Self::UnsupportedMediaType(_) | Self::NotAcceptable(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MissingPathVariable(_)
            | Self::MissingParameter(_)
            | Self::MissingHeader(_)
            | Self::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            Self::NoRouteFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_type(&self) -> ErrorType {
        ErrorType::REQUEST_ERROR
    }

    fn client_detail(&self) -> Option<&str> {
        Some(self.message())
    }
}
