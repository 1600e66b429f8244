//! Extractors whose rejections are request faults
//!
//! Drop-in replacements for the axum extractors of the same name. A failed
//! extraction is reported through the error boundary as `000001 request
//! error` with axum's rejection text as the detail.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::HeaderMap;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use faultline_core::RequestFault;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ApiError;

/// Query string extractor; failures are missing-parameter faults
#[derive(Debug, Clone, Copy, Default)]
pub struct Query<T>(pub T);

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Query::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(RequestFault::MissingParameter(rejection.body_text()).into()),
        }
    }
}

/// Path parameter extractor; failures are missing-path-variable faults
#[derive(Debug, Clone, Copy, Default)]
pub struct Path<T>(pub T);

impl<T, S> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match axum::extract::Path::<T>::from_request_parts(parts, state).await {
            Ok(axum::extract::Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(RequestFault::MissingPathVariable(rejection.body_text()).into()),
        }
    }
}

/// JSON body extractor and response
///
/// A missing or wrong `Content-Type` is an unsupported-media-type fault;
/// any other failure to read or parse the body is an unreadable-body fault.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T, S> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(request, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(rejection)) => {
                Err(RequestFault::UnsupportedMediaType(rejection.body_text()).into())
            }
            Err(rejection) => Err(RequestFault::UnreadableBody(rejection.body_text()).into()),
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Guard for routes that only produce JSON
///
/// Rejects requests whose `Accept` header rules out `application/json`.
/// A missing header accepts anything.
#[derive(Debug, Clone, Copy)]
pub struct AcceptsJson;

impl<S> FromRequestParts<S> for AcceptsJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(accept) = parts.headers.get(http::header::ACCEPT) else {
            return Ok(Self);
        };

        let accept = String::from_utf8_lossy(accept.as_bytes());
        if accepts_json(&accept) {
            Ok(Self)
        } else {
            Err(RequestFault::NotAcceptable(format!(
                "Could not find acceptable representation for Accept '{accept}', supported: application/json"
            ))
            .into())
        }
    }
}

/// Whether any media range in an `Accept` value admits JSON
///
/// Ranges with `q=0` are excluded.
fn accepts_json(accept: &str) -> bool {
    accept.split(',').any(|range| {
        let mut params = range.split(';');
        let media = params.next().unwrap_or_default().trim().to_ascii_lowercase();

        let excluded = params.any(|param| {
            let Some((name, value)) = param.split_once('=') else {
                return false;
            };
            name.trim().eq_ignore_ascii_case("q") && value.trim().parse::<f32>().is_ok_and(|q| q <= 0.0)
        });

        !excluded
            && (media == "*/*" || media == "application/*" || media == "application/json" || media.ends_with("+json"))
    })
}

/// Read a required header as text
///
/// # Errors
///
/// Returns a missing-header fault if the header is absent or not visible ASCII
pub fn required_header<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ApiError> {
    let Some(value) = headers.get(name) else {
        return Err(RequestFault::MissingHeader(format!("Required request header '{name}' is not present")).into());
    };

    value
        .to_str()
        .map_err(|_| RequestFault::MissingHeader(format!("Request header '{name}' is not valid text")).into())
}
