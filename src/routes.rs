//! Route definitions and router setup
//!
//! Configures all API routes and middleware.

mod activity;
mod admin_gallery;
mod customer;
mod gallery;
mod inventory;

use crate::config::Settings;
use crate::state::SharedState;
use axum::{
    http::{header, Method},
    routing::{get, patch, put},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::MakeRequestUuid,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
    ServiceBuilderExt,
};
use tracing::Level;

/// Create the application router with all routes and middleware
pub fn create_router(state: SharedState, settings: &Settings) -> Router {
    let cors = build_cors_layer(settings);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let middleware = ServiceBuilder::new()
        .set_x_request_id(MakeRequestUuid)
        .layer(trace_layer)
        .layer(CompressionLayer::new())
        .layer(cors)
        .propagate_x_request_id();

    Router::new()
        .route("/health", get(health_check))
        // Public gallery
        .route(
            "/api/gallery",
            get(gallery::list_albums).post(gallery::create_album),
        )
        .route("/api/gallery/{id}", get(gallery::get_album))
        // Admin gallery
        .route("/api/admin/gallery", get(admin_gallery::list_albums))
        .route(
            "/api/admin/gallery/{id}",
            get(admin_gallery::get_album)
                .put(admin_gallery::update_album)
                .delete(admin_gallery::delete_album),
        )
        .route(
            "/api/admin/gallery/{id}/items",
            get(admin_gallery::list_items).post(admin_gallery::create_item),
        )
        .route(
            "/api/admin/gallery/{id}/items/{item_id}",
            put(admin_gallery::update_item).delete(admin_gallery::delete_item),
        )
        // Catalog
        .route(
            "/api/admin/inventory-hierarchy",
            get(inventory::get_hierarchy),
        )
        // Customers
        .route("/api/admin/customers", get(customer::list_customers))
        .route(
            "/api/admin/customers/{id}/status",
            patch(customer::update_status),
        )
        .route(
            "/api/admin/activity-logs",
            get(activity::list_activity_logs),
        )
        .layer(middleware)
        .with_state(state)
}

/// Build CORS layer from settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<_> = settings
        .cors
        .allowed_origins
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let cors = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any)
    } else {
        CorsLayer::new().allow_origin(origins)
    };

    cors.allow_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
    .max_age(Duration::from_secs(3600))
}

/// Health check endpoint
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
