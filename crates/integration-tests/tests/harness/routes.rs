//! Application routes raising each kind of fault

use axum::Router;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use faultline_core::{BusinessError, ErrorType};
use faultline_server::{ApiError, Json, Path, Query, required_header};
use serde::{Deserialize, Serialize};

pub const USER_NOT_FOUND: ErrorType = ErrorType::new("U01", "user not found");
pub const INVALID_NAME: ErrorType = ErrorType::new("U02", "invalid name");
pub const NAME_TAKEN: ErrorType = ErrorType::new("U03", "name taken");
pub const NOT_SIGNED_IN: ErrorType = ErrorType::new("A01", "not signed in");
pub const ADMIN_ONLY: ErrorType = ErrorType::new("A02", "admin only");
pub const QUOTA_EXCEEDED: ErrorType = ErrorType::new("Q01", "quota exceeded");

#[derive(Debug, Deserialize)]
struct Page {
    page: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NewUser {
    pub name: String,
}

pub fn routes() -> Router {
    Router::new()
        .route("/users/{id}", get(user))
        .route("/users", post(create_user))
        .route("/items", get(items))
        .route("/admin", get(admin))
        .route("/quota", get(quota))
        .route("/export", get(export))
        .route("/crash", get(crash))
}

async fn user(Path(id): Path<u64>) -> Result<String, ApiError> {
    Err(BusinessError::not_found(USER_NOT_FOUND).with_detail(format!("id={id}")).into())
}

async fn create_user(headers: HeaderMap, Json(user): Json<NewUser>) -> Result<Json<NewUser>, ApiError> {
    required_header(&headers, "x-tenant")?;

    match user.name.as_str() {
        "" => Err(BusinessError::bad_request(INVALID_NAME).into()),
        "root" => Err(BusinessError::conflict(NAME_TAKEN).with_detail("name=root").into()),
        _ => Ok(Json(user)),
    }
}

async fn items(Query(page): Query<Page>) -> String {
    format!("page {}", page.page)
}

async fn admin(headers: HeaderMap) -> Result<&'static str, ApiError> {
    match headers.get("x-role").map(|role| role.as_bytes()) {
        None => Err(BusinessError::unauthorized(NOT_SIGNED_IN).into()),
        Some(b"admin") => Ok("welcome"),
        Some(_) => Err(BusinessError::forbidden(ADMIN_ONLY).into()),
    }
}

async fn quota() -> Result<&'static str, ApiError> {
    Err(BusinessError::business(QUOTA_EXCEEDED).with_detail("limit=100").into())
}

async fn export() -> Result<&'static str, ApiError> {
    Err(anyhow::anyhow!("pool timed out connecting to postgres://svc:hunter2@db:5432").into())
}

async fn crash() -> &'static str {
    panic!("invariant violated: ledger out of balance")
}
