//! Shared fixtures for the HTTP integration tests.

#![allow(dead_code)]

use order_dashboard::prelude::*;
use serde_json::{json, Value};
use wiremock::MockServer;

/// Route crate logs to the test harness. `RUST_LOG=order_dashboard=debug` to see them
/// (a local `.env` is honored).
pub fn init_tracing() {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

pub async fn server_and_client() -> (MockServer, DashboardClient) {
    init_tracing();
    let server = MockServer::start().await;
    let client = DashboardClient::builder()
        .base_url(&server.uri())
        .auth_url(&server.uri())
        .build()
        .expect("client should build");
    (server, client)
}

pub fn order_json(id: i64, status: &str, total: f64) -> Value {
    json!({
        "id": id,
        "status": status,
        "total_amount": total,
        "created_at": "2025-07-25T12:00:00",
        "updated_at": "2025-07-25T13:30:00",
        "items": [
            {
                "id": id * 10,
                "stock_item_id": 3,
                "name": "Widget",
                "quantity": 2,
                "unit_price": total / 2.0,
                "total_price": total
            }
        ]
    })
}

pub fn post_json(id: i64, user_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "user_id": user_id,
        "title": format!("Post {id}"),
        "content": content,
        "created_at": "2025-07-20T08:15:00Z"
    })
}
