use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use faultline_core::{Fault, HttpError};

/// Error returned by handlers and extractors
///
/// Anything convertible into [`anyhow::Error`] converts into an `ApiError`,
/// so `?` works on business errors, request faults and arbitrary library
/// errors alike. Known kinds are recovered with [`Fault::classify`];
/// everything else becomes an unclassified `500 server error`.
///
/// The response produced here is only a placeholder carrying the fault;
/// [`crate::error_boundary`] renders the final body once the request URL is
/// known.
#[derive(Debug)]
pub struct ApiError(Fault);

impl ApiError {
    pub const fn fault(&self) -> &Fault {
        &self.0
    }

    pub fn into_fault(self) -> Fault {
        self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(error: E) -> Self {
        Self(Fault::classify(error.into()))
    }
}

/// Fault waiting in response extensions to be rendered by the boundary
#[derive(Debug, Clone)]
pub(crate) struct PendingFault(pub(crate) Arc<Fault>);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut response = self.0.status_code().into_response();
        response.extensions_mut().insert(PendingFault(Arc::new(self.0)));
        response
    }
}
