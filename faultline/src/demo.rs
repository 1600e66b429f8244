//! Demo routes exercising each branch of the error mapping

use anyhow::Context;
use axum::Router;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use faultline_core::{BusinessError, ErrorType};
use faultline_server::{AcceptsJson, ApiError, Json, Path, Query, required_header};
use serde::{Deserialize, Serialize};

const USER_NOT_FOUND: ErrorType = ErrorType::new("U01", "user not found");
const NOT_SIGNED_IN: ErrorType = ErrorType::new("A01", "not signed in");
const ADMIN_ONLY: ErrorType = ErrorType::new("A02", "admin only");
const INVALID_QUANTITY: ErrorType = ErrorType::new("O01", "invalid quantity");
const ORDER_EXISTS: ErrorType = ErrorType::new("O02", "order already exists");
const QUOTA_EXCEEDED: ErrorType = ErrorType::new("Q01", "quota exceeded");

#[derive(Debug, Serialize)]
struct User {
    id: u64,
    name: &'static str,
}

#[derive(Debug, Deserialize)]
struct Page {
    page: u32,
}

#[derive(Debug, Deserialize, Serialize)]
struct Order {
    reference: String,
    quantity: u32,
}

pub fn routes() -> Router {
    Router::new()
        .route("/users/{id}", get(user))
        .route("/items", get(items))
        .route("/orders", post(create_order))
        .route("/admin", get(admin))
        .route("/quota", get(quota))
        .route("/export", get(export))
}

async fn user(_: AcceptsJson, Path(id): Path<u64>) -> Result<Json<User>, ApiError> {
    if id == 1 {
        return Ok(Json(User { id, name: "ada" }));
    }

    Err(BusinessError::not_found(USER_NOT_FOUND).with_detail(format!("id={id}")).into())
}

async fn items(Query(page): Query<Page>) -> String {
    format!("items page {}", page.page)
}

async fn create_order(headers: HeaderMap, Json(order): Json<Order>) -> Result<Json<Order>, ApiError> {
    let tenant = required_header(&headers, "x-tenant")?;
    tracing::debug!(tenant, reference = %order.reference, "creating order");

    if order.quantity == 0 {
        return Err(BusinessError::bad_request(INVALID_QUANTITY).with_detail("quantity must be positive").into());
    }

    if order.reference == "existing" {
        return Err(BusinessError::conflict(ORDER_EXISTS)
            .with_detail(format!("reference={}", order.reference))
            .into());
    }

    Ok(Json(order))
}

async fn admin(headers: HeaderMap) -> Result<&'static str, ApiError> {
    let Some(role) = headers.get("x-role") else {
        return Err(BusinessError::unauthorized(NOT_SIGNED_IN).into());
    };

    if role != "admin" {
        return Err(BusinessError::forbidden(ADMIN_ONLY).into());
    }

    Ok("welcome")
}

async fn quota() -> Result<&'static str, ApiError> {
    Err(BusinessError::business(QUOTA_EXCEEDED).with_detail("limit=100/day").into())
}

async fn export() -> Result<String, ApiError> {
    let report = std::fs::read_to_string("/var/lib/faultline/report.csv").context("reading export report")?;
    Ok(report)
}
