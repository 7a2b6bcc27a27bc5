// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Method, Request, header};
use axum::response::Response;
use sqlx::SqlitePool;

use super::mocks::{InMemoryStore, SteppingClock};
use newsroom::application::services::ApplicationServices;
use newsroom::infrastructure::database;
use newsroom::presentation::http::{routes::build_router, state::HttpState};

pub fn build_services(store: &InMemoryStore) -> Arc<ApplicationServices> {
    Arc::new(ApplicationServices::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(SteppingClock::new()),
    ))
}

pub fn make_test_router(store: &InMemoryStore) -> axum::Router {
    build_router(HttpState {
        services: build_services(store),
    })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form_post(uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(fields).unwrap();
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn location(resp: &Response) -> Option<String> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Fresh in-memory SQLite database with the schema applied.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrations");
    pool
}
