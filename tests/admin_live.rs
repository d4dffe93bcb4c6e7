//! Customer, catalog and activity routes against a real database.
//!
//! Skipped unless `TEST_DATABASE_URL` is set. Rows are tagged with a unique
//! suffix and removed at the end of each test.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_app, get, live_database, live_database_with_pool_size, patch_json};
use pavilion_admin::db::Database;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

async fn insert_customer(db: &Database, email: &str, is_active: bool) -> i64 {
    let result = db
        .query(
            "INSERT INTO customers (name, email, is_active) VALUES ($1, $2, $3)
             RETURNING id::bigint AS id",
            &[&"Test Customer", &email, &is_active],
        )
        .await
        .unwrap();
    result.first().unwrap().get("id")
}

async fn delete_customer(db: &Database, id: i64) {
    db.query("DELETE FROM customers WHERE id = $1::bigint", &[&id])
        .await
        .unwrap();
}

fn find_by<'a>(rows: &'a Value, key: &str, value: &str) -> Option<&'a Value> {
    rows.as_array()?.iter().find(|row| row[key] == value)
}

#[tokio::test]
async fn customer_list_filters_on_active_flag() {
    let Some(db) = live_database().await else {
        return;
    };
    let app = build_app(db.clone());
    let email = format!("inactive-{}@pavilion.test", unique_suffix());
    let id = insert_customer(&db, &email, false).await;

    let inactive = body_json(get(app.clone(), "/api/admin/customers?active=false").await).await;
    let customer = find_by(&inactive, "email", &email).expect("inactive customer listed");
    assert_eq!(customer["id"], id);
    assert_eq!(customer["segment"], "retail");
    assert!(inactive
        .as_array()
        .unwrap()
        .iter()
        .all(|row| row["is_active"] == false));

    let active = body_json(get(app, "/api/admin/customers?active=true").await).await;
    assert!(find_by(&active, "email", &email).is_none());

    delete_customer(&db, id).await;
}

#[tokio::test]
async fn status_update_on_missing_customer_returns_null() {
    let Some(app) = live_database().await.map(build_app) else {
        return;
    };

    let response = patch_json(
        app,
        &format!("/api/admin/customers/{}/status", i32::MAX),
        json!({ "is_active": false }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, Value::Null);
}

#[tokio::test]
async fn status_update_survives_column_added_on_warm_connection() {
    // One connection, so the second request reuses the cached statement
    let Some(db) = live_database_with_pool_size(1).await else {
        return;
    };
    let app = build_app(db.clone());
    let email = format!("warm-{}@pavilion.test", unique_suffix());
    let id = insert_customer(&db, &email, true).await;
    let uri = format!("/api/admin/customers/{id}/status");

    let first = patch_json(app.clone(), &uri, json!({ "is_active": false })).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["is_active"], false);

    let column = format!("extra_{}", unique_suffix());
    db.query(&format!("ALTER TABLE customers ADD COLUMN {column} INTEGER"), &[])
        .await
        .unwrap();

    let second = patch_json(app, &uri, json!({ "is_active": true })).await;
    let status = second.status();
    let body = body_json(second).await;
    assert_eq!(status, StatusCode::OK, "body: {body}");
    assert_eq!(body["is_active"], true);
    assert_eq!(body["email"], email.as_str());

    db.query(&format!("ALTER TABLE customers DROP COLUMN {column}"), &[])
        .await
        .unwrap();
    delete_customer(&db, id).await;
}

#[tokio::test]
async fn inventory_hierarchy_nests_products_under_collection() {
    let Some(db) = live_database().await else {
        return;
    };
    let app = build_app(db.clone());
    let name = format!("Footwear {}", unique_suffix());

    let collection_id: i32 = db
        .query(
            "INSERT INTO parent_collections (name) VALUES ($1) RETURNING id",
            &[&name],
        )
        .await
        .unwrap()
        .first()
        .unwrap()
        .get("id");
    db.query(
        "INSERT INTO products (name, sku, stock_quantity, parent_collection_id)
         VALUES ('Boot B', 'BT-B', 3, $1), ('Boot A', 'BT-A', 0, $1)",
        &[&collection_id],
    )
    .await
    .unwrap();

    let response = get(app, "/api/admin/inventory-hierarchy").await;
    assert_eq!(response.status(), StatusCode::OK);
    let hierarchy = body_json(response).await;

    let collection = find_by(&hierarchy, "name", &name).expect("collection listed");
    assert_eq!(collection["id"], collection_id);
    assert_eq!(collection["product_count"], 2);
    assert_eq!(collection["products"][0]["name"], "Boot A");
    assert_eq!(collection["products"][0]["stock_quantity"], 0);
    assert_eq!(collection["products"][1]["sku"], "BT-B");

    db.query(
        "DELETE FROM products WHERE parent_collection_id = $1",
        &[&collection_id],
    )
    .await
    .unwrap();
    db.query("DELETE FROM parent_collections WHERE id = $1", &[&collection_id])
        .await
        .unwrap();
}

#[tokio::test]
async fn activity_logs_filter_by_customer_newest_first() {
    let Some(db) = live_database().await else {
        return;
    };
    let app = build_app(db.clone());
    // Not a foreign key, so any unused id works
    let customer_id = 1_000_000_000 + (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i32;

    db.query(
        "INSERT INTO activity_logs (customer_id, event_type, description, created_at) VALUES
            ($1, 'customer.created', 'first', NOW() - INTERVAL '1 minute'),
            ($1, 'customer.deactivated', 'second', NOW())",
        &[&customer_id],
    )
    .await
    .unwrap();

    let logs = body_json(
        get(app.clone(), &format!("/api/admin/activity-logs?customer_id={customer_id}")).await,
    )
    .await;
    assert_eq!(logs.as_array().map(Vec::len), Some(2));
    assert_eq!(logs[0]["event_type"], "customer.deactivated");
    assert_eq!(logs[1]["description"], "first");
    assert_eq!(logs[0]["metadata"], json!({}));

    let limited = body_json(
        get(app, &format!("/api/admin/activity-logs?customer_id={customer_id}&limit=1")).await,
    )
    .await;
    assert_eq!(limited.as_array().map(Vec::len), Some(1));

    db.query("DELETE FROM activity_logs WHERE customer_id = $1", &[&customer_id])
        .await
        .unwrap();
}

#[tokio::test]
async fn rejected_statement_returns_server_message() {
    let Some(app) = live_database().await.map(build_app) else {
        return;
    };

    let response = get(app, "/api/admin/activity-logs?limit=-1").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "LIMIT must not be negative", "code": "DATABASE_ERROR" })
    );
}
