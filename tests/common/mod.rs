#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use pavilion_admin::config::{parse_database_url, DatabaseConfig, Settings};
use pavilion_admin::db::{schema, Database};
use pavilion_admin::routes::create_router;
use pavilion_admin::state::AppState;
use serde_json::Value;
use tokio::sync::OnceCell;
use tower::ServiceExt;

static SCHEMA_READY: OnceCell<()> = OnceCell::const_new();

/// Router whose pool points at a port nothing listens on.
///
/// Every request that reaches the database fails, which is exactly what the
/// error-path tests need.
pub fn build_unreachable_app() -> Router {
    let config = DatabaseConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        max_pool_size: 2,
        pool_timeout_secs: 1,
        ..DatabaseConfig::default()
    };
    build_app(Database::from_config(&config).unwrap())
}

/// Storefront tables the admin routes read but this service does not create.
/// Only the columns the queries touch.
const STOREFRONT_FIXTURE: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        email VARCHAR(255)
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id SERIAL PRIMARY KEY,
        customer_id INTEGER,
        status VARCHAR(50),
        total_amount NUMERIC(12, 2),
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS customer_types (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS customers (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255),
        email VARCHAR(255),
        phone VARCHAR(50),
        customer_type_id INTEGER REFERENCES customer_types(id),
        is_active BOOLEAN DEFAULT true,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS b2b_customers (
        id SERIAL PRIMARY KEY,
        company_name VARCHAR(255),
        email VARCHAR(255),
        phone VARCHAR(50),
        customer_type_id INTEGER REFERENCES customer_types(id),
        is_active BOOLEAN DEFAULT true,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )",
    "CREATE TABLE IF NOT EXISTS parent_collections (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS products (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        sku VARCHAR(100),
        stock_quantity INTEGER NOT NULL DEFAULT 0,
        is_active BOOLEAN NOT NULL DEFAULT true,
        parent_collection_id INTEGER REFERENCES parent_collections(id) ON DELETE SET NULL
    )",
    schema::CREATE_ACTIVITY_LOGS,
];

/// Database behind `TEST_DATABASE_URL`, or `None` when it is not set.
pub async fn live_database() -> Option<Database> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let config = parse_database_url(&url).unwrap();
    Some(bootstrapped(config).await)
}

/// Like [`live_database`] but every request shares the same connections
pub async fn live_database_with_pool_size(max_pool_size: usize) -> Option<Database> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let config = DatabaseConfig {
        max_pool_size,
        ..parse_database_url(&url).unwrap()
    };
    Some(bootstrapped(config).await)
}

async fn bootstrapped(config: DatabaseConfig) -> Database {
    let db = Database::from_config(&config).unwrap();
    // Concurrent CREATE TABLE IF NOT EXISTS can collide; bootstrap once per binary
    SCHEMA_READY
        .get_or_init(|| async {
            for statement in STOREFRONT_FIXTURE {
                db.query(statement, &[]).await.unwrap();
            }
            schema::ensure_gallery_schema(&db).await.unwrap();
        })
        .await;
    db
}

/// Router backed by `TEST_DATABASE_URL`, or `None` when it is not set.
pub async fn build_live_app() -> Option<Router> {
    live_database().await.map(build_app)
}

pub fn build_app(db: Database) -> Router {
    let settings = Settings::default();
    create_router(Arc::new(AppState::new(db)), &settings)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.oneshot(request).await.unwrap()
}

pub async fn patch_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
