use axum::Json;
use axum::extract::{OriginalUri, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::PendingFault;

/// Middleware that renders every fault raised below it
///
/// Responses produced from an [`crate::ApiError`] carry the fault in their
/// extensions. This layer picks it up, maps it against the request URL and
/// replaces the placeholder with the JSON error body. Other responses pass
/// through untouched.
pub async fn error_boundary(request: Request, next: Next) -> Response {
    let url = request_url(&request);

    let mut response = next.run(request).await;

    let Some(PendingFault(fault)) = response.extensions_mut().remove::<PendingFault>() else {
        return response;
    };

    let (status, info) = faultline_core::handle(&fault, &url);

    (status, Json(info)).into_response()
}

/// URL of the request as the client sent it
///
/// Prefers the original URI so nested routers still report the full path.
fn request_url(request: &Request) -> String {
    request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri().to_string(), |original| original.0.to_string())
}
