use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use minijinja::context;
use serde::Deserialize;
use std::sync::Arc;

use movies_backend::icons::movie_icon;
use movies_backend::{Movie, SearchQuery};

use super::{views, AppError};
use crate::state::AppState;

const NO_RESULTS_MESSAGE: &str =
    "No movies found matching your search. Try different criteria or go back to see all movies.";

/// Query string shared by the list page and the search API / 搜索参数
///
/// `id` stays a string so that empty or non-numeric form values count as "no id".
#[derive(Debug, Default, Deserialize)]
pub struct MovieSearchParams {
    pub name: Option<String>,
    pub id: Option<String>,
    pub genre: Option<String>,
}

impl MovieSearchParams {
    pub fn parsed_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }

    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.name.as_deref(), self.parsed_id(), self.genre.as_deref())
    }
}

/// GET /movies - 电影列表（带搜索）
pub async fn list_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieSearchParams>,
) -> Result<Html<String>, AppError> {
    tracing::info!(
        "Fetching movies - name: {:?}, id: {:?}, genre: {:?}",
        params.name, params.id, params.genre
    );

    let query = params.to_query();
    let search_performed = query.is_search();
    let movies: Vec<&Movie> = if search_performed {
        state.movies.search(&query)
    } else {
        state.movies.get_all_movies().iter().collect()
    };
    let no_results = search_performed && movies.is_empty();

    let html = views::render("movies.html", context! {
        movies,
        all_genres => state.movies.get_all_genres(),
        search_performed,
        search_name => params.name,
        search_id => params.parsed_id(),
        search_genre => params.genre,
        no_results,
        message => no_results.then_some(NO_RESULTS_MESSAGE),
    })?;
    Ok(Html(html))
}

/// GET /movies/:id/details - 电影详情
pub async fn movie_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Html<String>, AppError> {
    tracing::info!("Fetching details for movie id {}", id);

    let movie = match state.movies.get_movie_by_id(Some(id)) {
        Some(movie) => movie,
        None => {
            tracing::warn!("Movie with id {} not found", id);
            return Err(AppError::movie_not_found(id));
        }
    };

    let html = views::render("movie_details.html", context! {
        movie,
        icon => movie_icon(&movie.name),
        reviews => state.reviews.reviews_for_movie(movie.id),
    })?;
    Ok(Html(html))
}

/// GET /movies/search - JSON 搜索接口
///
/// Without any active criteria the whole catalog is returned.
pub async fn search_movies_api(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MovieSearchParams>,
) -> Json<Vec<Movie>> {
    tracing::info!(
        "API search request - name: {:?}, id: {:?}, genre: {:?}",
        params.name, params.id, params.genre
    );

    let query = params.to_query();
    if !query.is_search() {
        tracing::debug!("Empty search criteria, returning all movies");
        return Json(state.movies.get_all_movies().to_vec());
    }

    let results: Vec<Movie> = state.movies.search(&query).into_iter().cloned().collect();
    tracing::info!("API search completed, {} movies found", results.len());
    Json(results)
}
