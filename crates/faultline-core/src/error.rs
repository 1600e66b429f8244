use http::StatusCode;

use crate::ErrorType;

/// Trait for errors that can be rendered as an HTTP error body
///
/// Implemented by every fault kind. The server layer turns these into
/// actual responses, keeping the taxonomy decoupled from axum.
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Code and message reported to the caller
    fn error_type(&self) -> ErrorType;

    /// Detail safe to expose to API consumers, if any
    fn client_detail(&self) -> Option<&str>;
}
