#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

mod operation_routes;

use aide::{
    axum::{ApiRouter, routing::get},
    openapi::OpenApi,
};
use axum::{Extension, Json};
use fx_core::ports::Application;
use schemars::JsonSchema;
use serde::Serialize;
use std::sync::Arc;

mod openapi;
use openapi::{api_docs, docs_routes};

pub mod config;
use config::AxumConfig;

/// Response for the health check endpoint
#[derive(Serialize, JsonSchema)]
#[schemars(inline)]
struct HealthResponse {
    status: String,
}

/// Simple health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Construct a full API router with the given state
pub fn router<T: ApiApplication>(state: T) -> axum::Router {
    let mut api = OpenApi::default();
    ApiRouter::new()
        .api_route("/health", get(health_check))
        .nest("/operations", operation_routes::router())
        .nest_api_service("/docs", docs_routes())
        .finish_api_with(&mut api, api_docs)
        .layer(Extension(Arc::new(api))) // Arc matters: the document would otherwise be cloned into every request
        .with_state(state)
}

/// Starts the HTTP server with the provided configuration
pub async fn start_server<T: ApiApplication>(
    config: AxumConfig,
    app: T,
) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("listening for requests on {}", listener.local_addr()?);

    axum::serve(listener, router(app)).await
}

/// Axum imposes several constraints on what can pass for state. This trait,
/// coupled with a blanket implementation, specifies them all upfront and in
/// one place: a route handler only ever needs a generic `T: ApiApplication`.
pub trait ApiApplication: Clone + Send + Sync + 'static + Application {}

// this is the blanket implementation
impl<T> ApiApplication for T where T: Clone + Send + Sync + 'static + Application {}
