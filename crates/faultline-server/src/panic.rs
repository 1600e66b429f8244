use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::ApiError;

/// Turn a caught handler panic into an unclassified fault
///
/// The panic message only reaches the logs.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload");

    ApiError::from(anyhow::anyhow!("handler panicked: {message}")).into_response()
}
