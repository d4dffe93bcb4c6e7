//! Error handling module
//!
//! Every failure a handler can hit is a database or pool failure. Both are
//! answered with status 500 and the raw driver message in `error`.
//! `tokio_postgres::Error` only displays its kind ("db error"), so the
//! message is taken from the server's error or the source chain instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deadpool_postgres::PoolError;
use serde::Serialize;
use std::error::Error as _;
use thiserror::Error;
use tracing::error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Database(#[from] tokio_postgres::Error),

    #[error("{0}")]
    Pool(#[from] PoolError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Pool(_) => "POOL_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Text sent back to the client in `error`
    pub fn message(&self) -> String {
        match self {
            AppError::Database(e) | AppError::Pool(PoolError::Backend(e)) => driver_message(e),
            other => other.to_string(),
        }
    }
}

/// The server's own message when Postgres rejected the statement, otherwise
/// the error followed by each of its sources
pub fn driver_message(err: &tokio_postgres::Error) -> String {
    if let Some(db_error) = err.as_db_error() {
        return db_error.message().to_string();
    }

    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => error!("Database error: {:?}", e),
            AppError::Pool(e) => error!("Pool error: {:?}", e),
            AppError::Config(msg) => error!("Configuration error: {}", msg),
        }

        let body = Json(ErrorResponse {
            error: self.message(),
            code: self.code(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(err: crate::config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, AppError>;
