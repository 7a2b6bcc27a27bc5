// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, comments},
    error::HttpError,
};
use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(articles::index))
        .route("/health", get(health))
        .route(
            "/article/create",
            get(articles::create_form).post(articles::create),
        )
        .route("/article/{id}", get(articles::show))
        .route(
            "/article/{id}/update",
            get(articles::edit_form).post(articles::update),
        )
        .route(
            "/article/{id}/delete",
            get(articles::delete_confirm).post(articles::delete),
        )
        .route("/comment", get(comments::index))
        .route(
            "/comment/create",
            get(comments::create_form).post(comments::create),
        )
        .route(
            "/comment/{id}/update",
            get(comments::edit_form).post(comments::update),
        )
        .route(
            "/comment/{id}/delete",
            get(comments::delete_confirm).post(comments::delete),
        )
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}

async fn fallback() -> HttpError {
    HttpError::not_found("page not found")
}
