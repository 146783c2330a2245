use chrono::{DateTime, Utc};
use std::sync::Arc;

use movies_backend::reviews::ReviewSource;
use movies_backend::MovieService;

/// Shared application state / 共享应用状态
///
/// Everything in here is built once in `main` and only read afterwards.
pub struct AppState {
    pub movies: MovieService,
    pub reviews: Arc<dyn ReviewSource>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(movies: MovieService, reviews: Arc<dyn ReviewSource>) -> Self {
        Self {
            movies,
            reviews,
            started_at: Utc::now(),
        }
    }
}
