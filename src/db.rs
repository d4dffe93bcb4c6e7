//! Database access
//!
//! Owns the connection pool and the single helper every route goes through:
//! [`Database::query`] runs one parameterized statement and hands back the
//! rows together with the row count.

pub mod queries;
pub mod schema;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{
    Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime, Timeouts,
};
use postgres_types::{FromSql, ToSql, Type};
use serde_json::Value;
use std::time::Duration;
use tokio_postgres::{NoTls, Row};
use tracing::{debug, info};

/// Rows returned by a statement plus the number of rows it produced or touched
#[derive(Debug, Default)]
pub struct QueryResult {
    pub rows: Vec<Row>,
    pub row_count: u64,
}

impl QueryResult {
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }
}

/// Pooled database handle shared by all handlers
#[derive(Clone)]
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Build the pool. No connection is opened until the first query.
    pub fn from_config(config: &DatabaseConfig) -> Result<Self, AppError> {
        let mut cfg = Config::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.user = Some(config.user.clone());
        cfg.password = Some(config.password.clone());
        cfg.dbname = Some(config.database.clone());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let timeout = Some(Duration::from_secs(config.pool_timeout_secs));
        cfg.pool = Some(PoolConfig {
            max_size: config.max_pool_size,
            timeouts: Timeouts {
                wait: timeout,
                create: timeout,
                recycle: timeout,
            },
            ..Default::default()
        });

        let created = if config.use_tls {
            cfg.create_pool(Some(Runtime::Tokio1), tls_connector())
        } else {
            cfg.create_pool(Some(Runtime::Tokio1), NoTls)
        };
        let pool =
            created.map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))?;

        debug!(
            host = %config.host,
            database = %config.database,
            tls = config.use_tls,
            "Connection pool configured"
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// Check that a connection can be drawn and used
    pub async fn verify(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1 AS ok", &[]).await?;
        info!("✅ Database connection verified");
        Ok(())
    }

    /// Execute one parameterized statement.
    ///
    /// Statements that return columns are run as queries and report the number
    /// of rows returned; everything else is executed and reports the number of
    /// rows affected. The pooled client goes back to the pool when this returns,
    /// error or not.
    pub async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<QueryResult, AppError> {
        let client = self.pool.get().await?;
        let statement = client.prepare_cached(sql).await?;

        if statement.columns().is_empty() {
            let row_count = client.execute(&statement, params).await?;
            Ok(QueryResult {
                rows: Vec::new(),
                row_count,
            })
        } else {
            let rows = client.query(&statement, params).await?;
            Ok(QueryResult {
                row_count: rows.len() as u64,
                rows,
            })
        }
    }
}

/// TLS connector backed by the platform's root certificates
pub fn tls_connector() -> tokio_postgres_rustls::MakeRustlsConnect {
    let certs = rustls_native_certs::load_native_certs();
    let mut root_store = rustls::RootCertStore::empty();
    for cert in certs.certs {
        root_store.add(cert).ok();
    }

    let tls_config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    tokio_postgres_rustls::MakeRustlsConnect::new(tls_config)
}

/// Convert any row into a JSON object keyed by column name.
///
/// Columns of a type with no JSON mapping here come out as `null`; cast them
/// in SQL (`total::text`) to see their value.
pub fn row_to_json(row: &Row) -> Value {
    let mut object = serde_json::Map::with_capacity(row.len());
    for (idx, column) in row.columns().iter().enumerate() {
        object.insert(
            column.name().to_string(),
            column_to_json(row, idx, column.type_()),
        );
    }
    Value::Object(object)
}

fn column_to_json(row: &Row, idx: usize, ty: &Type) -> Value {
    let value = match *ty {
        Type::BOOL => get::<bool>(row, idx),
        Type::INT2 => get::<i16>(row, idx),
        Type::INT4 => get::<i32>(row, idx),
        Type::INT8 => get::<i64>(row, idx),
        Type::OID => get::<u32>(row, idx),
        Type::FLOAT4 => get::<f32>(row, idx),
        Type::FLOAT8 => get::<f64>(row, idx),
        Type::TEXT | Type::VARCHAR | Type::BPCHAR | Type::NAME | Type::UNKNOWN => {
            get::<String>(row, idx)
        }
        Type::JSON | Type::JSONB => get::<Value>(row, idx),
        Type::TEXT_ARRAY | Type::VARCHAR_ARRAY => get::<Vec<String>>(row, idx),
        Type::INT4_ARRAY => get::<Vec<i32>>(row, idx),
        Type::TIMESTAMPTZ => row
            .try_get::<_, Option<chrono::DateTime<chrono::Utc>>>(idx)
            .ok()
            .flatten()
            .map(|ts| Value::String(ts.to_rfc3339())),
        Type::TIMESTAMP => row
            .try_get::<_, Option<chrono::NaiveDateTime>>(idx)
            .ok()
            .flatten()
            .map(|ts| Value::String(ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string())),
        Type::DATE => row
            .try_get::<_, Option<chrono::NaiveDate>>(idx)
            .ok()
            .flatten()
            .map(|d| Value::String(d.to_string())),
        Type::UUID => row
            .try_get::<_, Option<uuid::Uuid>>(idx)
            .ok()
            .flatten()
            .map(|id| Value::String(id.to_string())),
        _ => None,
    };

    value.unwrap_or(Value::Null)
}

fn get<'a, T>(row: &'a Row, idx: usize) -> Option<Value>
where
    T: FromSql<'a> + Into<Value>,
{
    row.try_get::<_, Option<T>>(idx).ok().flatten().map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            pool_timeout_secs: 1,
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn test_empty_query_result_has_no_first_row() {
        let result = QueryResult::default();
        assert!(result.first().is_none());
        assert_eq!(result.row_count, 0);
    }

    #[tokio::test]
    async fn test_pool_is_lazy() {
        // Building the pool must not touch the network
        let db = Database::from_config(&unreachable_config()).unwrap();
        assert_eq!(db.pool().status().size, 0);
    }

    #[tokio::test]
    async fn test_query_against_unreachable_server_propagates_error() {
        let db = Database::from_config(&unreachable_config()).unwrap();
        let err = db.query("SELECT 1", &[]).await.unwrap_err();
        assert!(matches!(err, AppError::Pool(_)));
        assert!(!err.to_string().is_empty());
    }
}
