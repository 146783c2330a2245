//! Movie service - operations used by the HTTP layer / 电影服务

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::Movie;
use crate::search::{self, SearchQuery};

/// Read-only facade over a shared catalog / 目录只读门面
///
/// Cheap to clone; every clone points at the same catalog.
#[derive(Debug, Clone)]
pub struct MovieService {
    catalog: Arc<Catalog>,
}

impl MovieService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All movies in catalog order / 全部电影
    pub fn get_all_movies(&self) -> &[Movie] {
        self.catalog.all()
    }

    /// Absent, zero and negative ids find nothing / 按 ID 查找
    pub fn get_movie_by_id(&self, id: Option<i64>) -> Option<&Movie> {
        match id {
            Some(id) if id > 0 => self.catalog.by_id(id),
            _ => None,
        }
    }

    pub fn search_movies(&self, name: Option<&str>, id: Option<i64>, genre: Option<&str>) -> Vec<&Movie> {
        self.search(&SearchQuery::new(name, id, genre))
    }

    /// Search with an already normalized query / 使用规范化条件搜索
    pub fn search(&self, query: &SearchQuery) -> Vec<&Movie> {
        tracing::info!("Searching movies: {:?}", query);
        let results = search::search(&self.catalog, query);
        tracing::info!("Search completed, {} movies matched", results.len());
        results
    }

    /// Distinct genres, ascending / 全部类型
    pub fn get_all_genres(&self) -> &[String] {
        self.catalog.genres()
    }
}
