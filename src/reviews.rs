//! Review collaborator / 影评服务
//!
//! Reviews come from a JSON array (`movieId, userName, avatar, rating, comment`)
//! and are grouped by movie id at load time.

use std::collections::HashMap;

use crate::dataset::DatasetSource;
use crate::error::DataLoadError;
use crate::models::Review;

/// Supplies reviews for a movie / 提供影评
pub trait ReviewSource: Send + Sync {
    /// Reviews in dataset order, empty when the movie has none / 按数据顺序返回
    fn reviews_for_movie(&self, movie_id: i64) -> Vec<Review>;
}

/// In-memory review store / 内存影评存储
#[derive(Debug, Default)]
pub struct ReviewStore {
    by_movie: HashMap<i64, Vec<Review>>,
}

impl ReviewStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(reviews: Vec<Review>) -> Self {
        let mut by_movie: HashMap<i64, Vec<Review>> = HashMap::new();
        for review in reviews {
            by_movie.entry(review.movie_id).or_default().push(review);
        }
        Self { by_movie }
    }

    pub fn from_json(json: &str) -> Result<Self, DataLoadError> {
        let reviews: Vec<Review> = serde_json::from_str(json)?;
        Ok(Self::new(reviews))
    }

    /// Load reviews, degrading to an empty store on failure / 加载失败时返回空存储
    pub fn load_or_empty(source: &DatasetSource) -> Self {
        match source.read().and_then(|content| Self::from_json(&content)) {
            Ok(store) => {
                tracing::info!("Loaded reviews for {} movies from {}", store.by_movie.len(), source);
                store
            }
            Err(e) => {
                tracing::error!("Failed to load reviews from {}: {}", source, e);
                Self::empty()
            }
        }
    }
}

impl ReviewSource for ReviewStore {
    fn reviews_for_movie(&self, movie_id: i64) -> Vec<Review> {
        self.by_movie.get(&movie_id).cloned().unwrap_or_default()
    }
}
