//! REST endpoint handlers for the Yak Shop.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | HTML index with recent orders and an order form |
//! | `GET` | `/yak-shop/stock/{day}` | Stock still on offer at `day` |
//! | `GET` | `/yak-shop/stock/?day=` | Same, day from the query string |
//! | `GET` | `/yak-shop/herd/{day}` | Herd as it looks after `day` days |
//! | `GET` | `/yak-shop/herd/?day=` | Same, day from the query string |
//! | `POST` | `/yak-shop/order/{day}` | Place an order (JSON body) |
//! | `POST` | `/yak-shop/order/` | Place an order (form fields) |
//! | `GET` | `/health` | Liveness check |

use std::fmt::Write as _;
use std::sync::Arc;

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::{Form, Json};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::warn;
use validator::{Validate, ValidationError};
use yakshop_core::{OrderRequest, display_liters};
use yakshop_types::{AvailableStock, OrderStatus};

use crate::error::ApiError;
use crate::state::AppState;

/// Orders listed on the index page.
const RECENT_ORDERS: usize = 10;

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Body of `POST /yak-shop/order/{day}`.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderBody {
    /// Customer name.
    #[validate(length(max = 256))]
    pub customer: Option<String>,
    /// Requested quantities.
    #[validate(nested)]
    pub order: OrderLines,
}

/// Requested quantities inside an [`OrderBody`].
#[derive(Debug, Deserialize, Validate)]
pub struct OrderLines {
    /// Liters of milk.
    #[serde(default)]
    #[validate(custom(function = non_negative))]
    pub milk: Decimal,
    /// Skins of wool.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub skins: i64,
}

/// Fields of `POST /yak-shop/order/`, as sent by the index page form.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderForm {
    /// Day the order is placed against.
    pub day: i64,
    /// Customer name; an empty field counts as none.
    #[serde(default)]
    #[validate(length(max = 256))]
    pub customer: Option<String>,
    /// Liters of milk.
    #[serde(default)]
    #[validate(custom(function = non_negative))]
    pub milk: Decimal,
    /// Skins of wool.
    #[serde(default, alias = "skin")]
    #[validate(range(min = 0))]
    pub skins: i64,
}

/// Query string of the `?day=` read endpoints.
#[derive(Debug, Deserialize)]
pub struct DayParam {
    /// Day to report on.
    pub day: i64,
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        return Err(ValidationError::new("negative"));
    }
    Ok(())
}

fn order_request(
    milk: Decimal,
    skins: i64,
    customer: Option<String>,
) -> Result<OrderRequest, ApiError> {
    let skins = u32::try_from(skins)
        .map_err(|e| ApiError::InvalidRequest(format!("skins {skins} out of range: {e}")))?;
    Ok(OrderRequest {
        milk,
        skins,
        customer: customer.filter(|name| !name.trim().is_empty()),
    })
}

fn validated<T: Validate>(input: &T) -> Result<(), ApiError> {
    input.validate().map_err(|e| {
        warn!(error = %e, "order failed validation");
        ApiError::InvalidRequest(e.to_string())
    })
}

/// Check a day against the configured bound.
fn bounded_day(state: &AppState, day: i64) -> Result<i64, ApiError> {
    if day < 0 || day > i64::from(state.max_day) {
        warn!(day, max_day = state.max_day, "day out of range");
        return Err(ApiError::InvalidDay(day));
    }
    Ok(day)
}

fn path_day(state: &AppState, day: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    let Path(day) = day.map_err(|e| {
        warn!(error = %e, "unparseable day");
        ApiError::InvalidRequest(e.body_text())
    })?;
    bounded_day(state, day)
}

fn query_day(
    state: &AppState,
    query: Result<Query<DayParam>, QueryRejection>,
) -> Result<i64, ApiError> {
    let Query(DayParam { day }) = query.map_err(|e| {
        warn!(error = %e, "unparseable day query");
        ApiError::InvalidRequest(e.body_text())
    })?;
    bounded_day(state, day)
}

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page: endpoints, recent orders and an order form.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let shop = state.shop.read().await;
    let yaks = shop.herd().len();
    let orders = shop.ledger().len();
    let mut rows = String::new();
    for record in shop.ledger().recent(RECENT_ORDERS) {
        let _ = write!(
            rows,
            "\n        <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            record.day,
            display_liters(record.milk),
            record.skins,
        );
    }
    drop(shop);

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Yak Shop</title>
</head>
<body>
    <h1>Yak Shop</h1>
    <p>{yaks} yaks in the herd, {orders} orders on the books.</p>
    <ul>
        <li><code>GET /yak-shop/stock/{{day}}</code> or <code>?day=</code> -- stock on offer</li>
        <li><code>GET /yak-shop/herd/{{day}}</code> or <code>?day=</code> -- herd after {{day}} days</li>
        <li><code>POST /yak-shop/order/{{day}}</code> -- place an order</li>
        <li><code>GET /health</code> -- liveness</li>
    </ul>
    <h2>Recent orders</h2>
    <table>
        <tr><th>Day</th><th>Milk</th><th>Skins</th></tr>{rows}
    </table>
    <h2>Place an order</h2>
    <form method="post" action="/yak-shop/order/">
        <label>Day <input name="day" type="number" min="0" required></label>
        <label>Milk <input name="milk" type="number" min="0" step="0.01" value="0"></label>
        <label>Skins <input name="skins" type="number" min="0" value="0"></label>
        <button type="submit">Order</button>
    </form>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// GET /yak-shop/stock/{day}
// ---------------------------------------------------------------------------

async fn stock_at(state: &AppState, day: i64) -> Result<Json<AvailableStock>, ApiError> {
    let available = state.shop.read().await.available_stock(day)?;
    Ok(Json(AvailableStock {
        milk: display_liters(available.milk),
        skins: available.skins,
    }))
}

/// Milk and skins still on offer at `day`: produced minus already sold.
pub async fn get_stock(
    State(state): State<Arc<AppState>>,
    day: Result<Path<i64>, PathRejection>,
) -> Result<Json<AvailableStock>, ApiError> {
    let day = path_day(&state, day)?;
    stock_at(&state, day).await
}

/// [`get_stock`] with the day taken from `?day=`.
pub async fn query_stock(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DayParam>, QueryRejection>,
) -> Result<Json<AvailableStock>, ApiError> {
    let day = query_day(&state, query)?;
    stock_at(&state, day).await
}

// ---------------------------------------------------------------------------
// GET /yak-shop/herd/{day}
// ---------------------------------------------------------------------------

async fn herd_at(state: &AppState, day: i64) -> Result<Json<serde_json::Value>, ApiError> {
    let herd = state.shop.read().await.herd_view(day)?;
    Ok(Json(serde_json::json!({ "herd": herd })))
}

/// The herd's ages and last-shave ages after `day` days.
pub async fn get_herd(
    State(state): State<Arc<AppState>>,
    day: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let day = path_day(&state, day)?;
    herd_at(&state, day).await
}

/// [`get_herd`] with the day taken from `?day=`.
pub async fn query_herd(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DayParam>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let day = query_day(&state, query)?;
    herd_at(&state, day).await
}

// ---------------------------------------------------------------------------
// POST /yak-shop/order/{day}
// ---------------------------------------------------------------------------

async fn book(
    state: &AppState,
    day: i64,
    request: OrderRequest,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let outcome = state.shop.write().await.place_order(day, request)?;

    let status = match outcome.status {
        OrderStatus::Fulfilled => StatusCode::CREATED,
        OrderStatus::Partial => StatusCode::PARTIAL_CONTENT,
        OrderStatus::Rejected => StatusCode::NOT_FOUND,
    };
    let body = serde_json::json!({
        "milk": display_liters(outcome.granted.milk),
        "skins": outcome.granted.skins,
        "status": outcome.status,
    });
    Ok((status, Json(body)))
}

/// Place an order.
///
/// Responds `201` when fully granted, `206` when only one side is granted,
/// and `404` when nothing could be granted.
pub async fn place_order(
    State(state): State<Arc<AppState>>,
    day: Result<Path<i64>, PathRejection>,
    body: Result<Json<OrderBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let day = path_day(&state, day)?;
    let Json(body) = body.map_err(|e| {
        warn!(error = %e, "malformed order body");
        ApiError::InvalidRequest(e.body_text())
    })?;
    validated(&body)?;
    let request = order_request(body.order.milk, body.order.skins, body.customer)?;
    book(&state, day, request).await
}

/// [`place_order`] from form fields, the day among them.
pub async fn place_form_order(
    State(state): State<Arc<AppState>>,
    form: Result<Form<OrderForm>, FormRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Form(form) = form.map_err(|e| {
        warn!(error = %e, "malformed order form");
        ApiError::InvalidRequest(e.body_text())
    })?;
    validated(&form)?;
    let day = bounded_day(&state, form.day)?;
    let request = order_request(form.milk, form.skins, form.customer)?;
    book(&state, day, request).await
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Liveness check.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
