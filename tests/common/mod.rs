// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::time::Duration;

use axum::{Router, http::header, routing::get};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// A full awesomeapi body as captured from the live endpoint.
pub const SAMPLE_UPSTREAM_BODY: &str = r#"{
    "USDBRL": {
        "code": "USD",
        "codein": "BRL",
        "name": "Dólar Americano/Real Brasileiro",
        "high": "5.4335",
        "low": "5.3919",
        "varBid": "-0.0062",
        "pctChange": "-0.11",
        "bid": "5.4213",
        "ask": "5.4223",
        "timestamp": "1754568000",
        "create_date": "2026-08-07 09:00:00"
    }
}"#;

/// Set up an in-memory test database with the schema applied.
///
/// A single pooled connection keeps the in-memory database alive for the
/// whole test; a second connection would see an empty database.
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);

    let db = Database::connect(options).await?;
    migration::Migrator::up(&db, None).await?;

    Ok(db)
}

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn serve_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Mock of the awesomeapi quote endpoint answering `body` after `delay`.
pub fn mock_upstream(body: &'static str, delay: Duration) -> Router {
    Router::new().route(
        "/json/last/USD-BRL",
        get(move || async move {
            tokio::time::sleep(delay).await;
            ([(header::CONTENT_TYPE, "application/json")], body)
        }),
    )
}
