use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use minijinja::context;
use thiserror::Error;

use super::{views, ApiResponse};

/// Handler errors / 处理器错误
#[derive(Debug, Error)]
pub enum AppError {
    /// Rendered as the HTML error page with 404
    #[error("{message}")]
    NotFound { title: String, message: String },

    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
}

impl AppError {
    pub fn movie_not_found(id: i64) -> Self {
        AppError::NotFound {
            title: "Movie Not Found".to_string(),
            message: format!("Movie with ID {} was not found.", id),
        }
    }
}

fn internal_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResponse::<()>::error(500, message)),
    )
        .into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound { title, message } => {
                match views::render("error.html", context! { title, message }) {
                    Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
                    Err(e) => {
                        tracing::error!("Failed to render error page: {}", e);
                        internal_error("Internal server error")
                    }
                }
            }
            AppError::Render(e) => {
                tracing::error!("Template rendering failed: {}", e);
                internal_error("Internal server error")
            }
        }
    }
}
