pub mod error;
pub mod movies;
pub mod server;
pub mod views;

use axum::{response::Redirect, routing::get, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub use error::AppError;

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn error(code: i32, message: &str) -> Self {
        Self {
            code,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Build the HTTP router / 构建路由
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/movies") }))
        .route("/api/health", get(server::health_check))
        .route("/movies", get(movies::list_movies))
        .route("/movies/search", get(movies::search_movies_api))
        .route("/movies/:id/details", get(movies::movie_details))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
