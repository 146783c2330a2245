//! Search engine - filters over the catalog / 搜索引擎
//!
//! Rules:
//! - A positive id wins: name and genre are ignored, result has at most one movie
//! - Otherwise name and genre filters are ANDed, catalog order is kept
//! - Blank filters (empty or whitespace) are the same as absent ones
//! - Matching is case-insensitive substring containment on the trimmed filter

use crate::catalog::Catalog;
use crate::models::Movie;

/// Id constraint after boundary validation / 经过校验的 ID 过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdFilter {
    #[default]
    Any,
    Exact(i64),
}

impl IdFilter {
    /// Zero, negative and absent ids all disable the filter / 非正数视为未设置
    pub fn parse(raw: Option<i64>) -> Self {
        match raw {
            Some(id) if id > 0 => IdFilter::Exact(id),
            _ => IdFilter::Any,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, IdFilter::Exact(_))
    }
}

/// Case-insensitive containment filter / 文本包含过滤
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFilter {
    needle: Option<String>,
}

impl TextFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        let needle = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);
        Self { needle }
    }

    pub fn is_active(&self) -> bool {
        self.needle.is_some()
    }

    /// Inactive filters match everything / 未设置时全部匹配
    pub fn matches(&self, field: &str) -> bool {
        match &self.needle {
            Some(needle) => field.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

/// Normalized search request / 搜索条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    pub name: TextFilter,
    pub id: IdFilter,
    pub genre: TextFilter,
}

impl SearchQuery {
    pub fn new(name: Option<&str>, id: Option<i64>, genre: Option<&str>) -> Self {
        Self {
            name: TextFilter::parse(name),
            id: IdFilter::parse(id),
            genre: TextFilter::parse(genre),
        }
    }

    /// Whether any constraint is active / 是否包含有效条件
    pub fn is_search(&self) -> bool {
        self.id.is_active() || self.name.is_active() || self.genre.is_active()
    }

    fn matches(&self, movie: &Movie) -> bool {
        self.name.matches(&movie.name) && self.genre.matches(&movie.genre)
    }
}

/// Run a search against the catalog / 执行搜索
pub fn search<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a Movie> {
    if let IdFilter::Exact(id) = query.id {
        return match catalog.by_id(id) {
            Some(movie) => {
                tracing::debug!("Found movie by id {}", id);
                vec![movie]
            }
            None => {
                tracing::warn!("No movie found with id {}", id);
                Vec::new()
            }
        };
    }

    catalog.all().iter().filter(|m| query.matches(m)).collect()
}
