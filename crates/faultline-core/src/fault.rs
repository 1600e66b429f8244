use http::StatusCode;
use thiserror::Error;

use crate::{BusinessError, ErrorType, HttpError, RequestFault};

/// Any failure that can reach the error boundary
#[derive(Debug, Error)]
pub enum Fault {
    /// Intentional domain failure
    #[error(transparent)]
    Business(#[from] BusinessError),

    /// Malformed request detected by the HTTP layer
    #[error(transparent)]
    Request(#[from] RequestFault),

    /// Anything else
    ///
    /// The inner error is logged but never shown to the caller.
    #[error(transparent)]
    Unclassified(anyhow::Error),
}

impl Fault {
    /// Recover a known fault kind from an opaque error
    ///
    /// Errors that wrap a [`Fault`], [`BusinessError`] or [`RequestFault`]
    /// (possibly under added context) keep their kind; everything else is
    /// unclassified.
    pub fn classify(error: anyhow::Error) -> Self {
        let error = match error.downcast::<Self>() {
            Ok(fault) => return fault,
            Err(error) => error,
        };

        let error = match error.downcast::<BusinessError>() {
            Ok(business) => return Self::Business(business),
            Err(error) => error,
        };

        match error.downcast::<RequestFault>() {
            Ok(request) => Self::Request(request),
            Err(error) => Self::Unclassified(error),
        }
    }

    /// Stable name of the fault kind, used in logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Business(error) => error.kind().as_str(),
            Self::Request(fault) => fault.as_str(),
            Self::Unclassified(_) => "unclassified",
        }
    }

    pub const fn is_unclassified(&self) -> bool {
        matches!(self, Self::Unclassified(_))
    }
}

impl From<anyhow::Error> for Fault {
    fn from(error: anyhow::Error) -> Self {
        Self::classify(error)
    }
}

impl HttpError for Fault {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Business(error) => error.status_code(),
            Self::Request(fault) => fault.status_code(),
            Self::Unclassified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> ErrorType {
        match self {
            Self::Business(error) => error.error_type(),
            Self::Request(fault) => fault.error_type(),
            Self::Unclassified(_) => ErrorType::SERVER_ERROR,
        }
    }

    fn client_detail(&self) -> Option<&str> {
        match self {
            Self::Business(error) => error.client_detail(),
            Self::Request(fault) => fault.client_detail(),
            Self::Unclassified(_) => None,
        }
    }
}
