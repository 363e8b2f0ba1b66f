//! REST API endpoints for conversion operations.
//!
//! A conversion is performed and recorded by POSTing to this resource; the
//! recorded operations can then be listed with pagination, fetched by id, and
//! cleared. Validation of amounts and currency codes happens in the core —
//! this module only maps its typed failures onto response statuses.

use crate::ApiApplication;
use aide::axum::{
    ApiRouter,
    routing::{get, post},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use fx_core::models::{ConvertError, Operation, OperationId, PageQuery, PageResponse};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{Level, event};

/// Path parameter for operation-specific endpoints.
#[derive(Deserialize, JsonSchema)]
struct Id {
    /// The unique identifier of the operation
    operation_id: OperationId,
}

/// Creates a router with operation-related endpoints.
pub fn router<T: ApiApplication>() -> ApiRouter<T> {
    ApiRouter::new()
        .api_route(
            "/",
            post(convert::<T>)
                .get(list_operations::<T>)
                .delete(clear_operations::<T>),
        )
        .api_route("/{operation_id}", get(get_operation::<T>))
}

/// Request body for performing a conversion.
#[derive(Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
struct ConvertRequest {
    /// Amount to convert, in units of `from`; must be strictly positive
    amount: f64,
    /// Source currency code (any casing, surrounding whitespace ignored)
    from: String,
    /// Target currency code
    to: String,
}

/// Response body for a successful conversion.
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct ConvertResponse {
    /// Applied rate (1 unit of `from` in `to`), rounded to 6 decimal places
    rate: f64,
    /// Converted amount, rounded to 2 decimal places
    result: f64,
    /// The record appended to the operation log
    operation: Operation,
}

/// Response body for clearing the log.
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct ClearResponse {
    /// Number of operations removed (the count immediately before clearing)
    deleted: usize,
}

/// Convert an amount between two currencies and record the operation.
///
/// The conversion goes through the base currency using the loaded rate
/// table; on success the operation is appended to the log and returned
/// together with the applied rate and rounded result.
///
/// # Returns
///
/// - `200 OK`: Conversion performed and recorded
/// - `400 Bad Request`: Amount is zero or negative
/// - `404 Not Found`: Either currency is absent from the rate table
async fn convert<T: ApiApplication>(
    State(app): State<T>,
    Json(request): Json<ConvertRequest>,
) -> Result<Json<ConvertResponse>, (StatusCode, String)> {
    let conversion = app
        .converter()
        .convert(request.amount, &request.from, &request.to)
        .map_err(|err| {
            let status = match &err {
                ConvertError::InvalidAmount(_) => StatusCode::BAD_REQUEST,
                ConvertError::UnknownCurrency(_) => StatusCode::NOT_FOUND,
            };
            (status, err.to_string())
        })?;

    let operation = app.operations().add(
        conversion.from_currency.clone(),
        conversion.to_currency.clone(),
        conversion.amount,
        conversion.rate,
        conversion.result,
    );
    event!(
        Level::DEBUG,
        operation = %operation.id,
        from = %operation.from_currency,
        to = %operation.to_currency,
        "recorded conversion"
    );

    Ok(Json(ConvertResponse {
        rate: conversion.rate,
        result: conversion.result,
        operation,
    }))
}

/// List recorded operations, oldest first.
///
/// `limit` and `offset` page through the log: a negative `offset` clamps to
/// the start, an absent `limit` selects through the end, and a negative
/// `limit` selects nothing. `count` is always the total log size, not the
/// size of the returned page.
///
/// # Returns
///
/// - `200 OK`: Page of operations
/// - `400 Bad Request`: Non-integer `limit` or `offset`
async fn list_operations<T: ApiApplication>(
    State(app): State<T>,
    Query(page): Query<PageQuery>,
) -> Json<PageResponse<Operation>> {
    let log = app.operations();
    Json(PageResponse {
        count: log.count(),
        items: log.list(page.limit, page.offset.unwrap_or(0)),
    })
}

/// Retrieve a single operation by id.
///
/// # Returns
///
/// - `200 OK`: The operation
/// - `400 Bad Request`: Malformed operation id
/// - `404 Not Found`: No operation with this id
async fn get_operation<T: ApiApplication>(
    State(app): State<T>,
    Path(Id { operation_id }): Path<Id>,
) -> Result<Json<Operation>, (StatusCode, String)> {
    app.operations().get(operation_id).map(Json).ok_or((
        StatusCode::NOT_FOUND,
        format!("unknown operation {operation_id}"),
    ))
}

/// Remove every recorded operation.
///
/// Irreversible; snapshots already returned to clients are unaffected.
///
/// # Returns
///
/// - `200 OK`: All operations removed, response carries how many
async fn clear_operations<T: ApiApplication>(State(app): State<T>) -> Json<ClearResponse> {
    let deleted = app.operations().clear();
    event!(Level::DEBUG, deleted, "cleared operation log");
    Json(ClearResponse { deleted })
}
