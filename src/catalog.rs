//! Catalog store - immutable in-memory movie collection / 电影目录
//!
//! Built once at startup, then shared read-only (behind an `Arc`) by every request.

use std::collections::{BTreeSet, HashMap};

use crate::dataset::DatasetSource;
use crate::error::DataLoadError;
use crate::models::Movie;

/// Movie catalog / 电影目录
///
/// Keeps dataset order for listing and an id -> position map for lookups.
#[derive(Debug, Default)]
pub struct Catalog {
    movies: Vec<Movie>,
    index: HashMap<i64, usize>,
    genres: Vec<String>,
}

impl Catalog {
    /// Empty catalog, used when the dataset cannot be loaded / 空目录
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from records in dataset order / 从记录构建
    pub fn new(movies: Vec<Movie>) -> Result<Self, DataLoadError> {
        let mut index = HashMap::with_capacity(movies.len());
        for (pos, movie) in movies.iter().enumerate() {
            if index.insert(movie.id, pos).is_some() {
                return Err(DataLoadError::DuplicateId(movie.id));
            }
        }

        // The catalog never changes, so the distinct sorted genre list is computed once.
        let genres = movies
            .iter()
            .map(|m| m.genre.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        Ok(Self { movies, index, genres })
    }

    /// Parse a JSON array of movie objects / 解析 JSON 数据集
    pub fn from_json(json: &str) -> Result<Self, DataLoadError> {
        let movies: Vec<Movie> = serde_json::from_str(json)?;
        Self::new(movies)
    }

    pub fn load(source: &DatasetSource) -> Result<Self, DataLoadError> {
        let content = source.read()?;
        Self::from_json(&content)
    }

    /// Load the catalog, degrading to an empty one on failure / 加载失败时返回空目录
    pub fn load_or_empty(source: &DatasetSource) -> Self {
        match Self::load(source) {
            Ok(catalog) => {
                tracing::info!("Loaded {} movies from {}", catalog.len(), source);
                catalog
            }
            Err(e) => {
                tracing::error!("Failed to load movies from {}: {}", source, e);
                Self::empty()
            }
        }
    }

    /// All movies in dataset order / 全部电影
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn by_id(&self, id: i64) -> Option<&Movie> {
        self.index.get(&id).map(|&pos| &self.movies[pos])
    }

    /// Distinct genres, ascending / 去重排序后的类型列表
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MOVIES_FILE;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"id": 3, "movieName": "Comedy Film", "director": "C", "year": 2021, "genre": "Comedy", "description": "c", "duration": 95, "imdbRating": 3.5},
        {"id": 1, "movieName": "Test Movie", "director": "A", "year": 2023, "genre": "Drama", "description": "a", "duration": 120, "imdbRating": 4.5},
        {"id": 2, "movieName": "Action Movie", "director": "B", "year": 2022, "genre": "Action", "description": "b", "duration": 110, "imdbRating": 4.0},
        {"id": 4, "movieName": "Another Drama", "director": "D", "year": 2020, "genre": "Drama", "description": "d", "duration": 101, "imdbRating": 7.1}
    ]"#;

    #[test]
    fn test_from_json_keeps_dataset_order() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let ids: Vec<i64> = catalog.all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
        assert_eq!(catalog.len(), 4);

        let movie = catalog.by_id(1).unwrap();
        assert_eq!(movie.name, "Test Movie");
        assert_eq!(movie.duration_minutes, 120);
        assert_eq!(movie.imdb_rating, 4.5);
    }

    #[test]
    fn test_by_id_missing() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert!(catalog.by_id(99).is_none());
        assert!(catalog.by_id(0).is_none());
        assert!(catalog.by_id(-1).is_none());
    }

    #[test]
    fn test_genres_sorted_and_distinct() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.genres(), &["Action", "Comedy", "Drama"]);
    }

    #[test]
    fn test_genres_exact_string_dedup() {
        let json = r#"[
            {"id": 1, "movieName": "a", "director": "", "year": 1, "genre": "drama", "description": "", "duration": 1, "imdbRating": 1.0},
            {"id": 2, "movieName": "b", "director": "", "year": 1, "genre": "Drama", "description": "", "duration": 1, "imdbRating": 1.0}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.genres(), &["Drama", "drama"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": 1, "movieName": "a", "director": "", "year": 1, "genre": "x", "description": "", "duration": 1, "imdbRating": 1.0},
            {"id": 1, "movieName": "b", "director": "", "year": 1, "genre": "y", "description": "", "duration": 1, "imdbRating": 1.0}
        ]"#;
        assert!(matches!(Catalog::from_json(json), Err(DataLoadError::DuplicateId(1))));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Catalog::from_json("{not json"), Err(DataLoadError::Parse(_))));
        // missing required field
        let json = r#"[{"id": 1, "movieName": "a"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(DataLoadError::Parse(_))));
    }

    #[test]
    fn test_load_or_empty_degrades() {
        let catalog = Catalog::load_or_empty(&DatasetSource::File("/no/such/movies.json".into()));
        assert!(catalog.is_empty());
        assert!(catalog.genres().is_empty());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"broken\": ").unwrap();
        let catalog = Catalog::load_or_empty(&DatasetSource::File(file.path().to_path_buf()));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let catalog = Catalog::load(&DatasetSource::File(file.path().to_path_buf())).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_bundled_dataset() {
        let catalog = Catalog::load(&DatasetSource::Bundled(MOVIES_FILE)).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.all().iter().all(|m| m.id > 0));
    }
}
