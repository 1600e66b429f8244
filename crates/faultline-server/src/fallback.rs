use axum::http::{Method, Uri};
use faultline_core::RequestFault;

use crate::ApiError;

/// Fallback for paths no route matches
pub async fn no_route(method: Method, uri: Uri) -> ApiError {
    RequestFault::NoRouteFound(format!("No route found for {method} {}", uri.path())).into()
}

/// Fallback for routes that exist but not for the request method
pub async fn method_not_allowed(method: Method) -> ApiError {
    RequestFault::MethodNotAllowed(format!("Request method '{method}' is not supported")).into()
}
