use serde::{Deserialize, Serialize};

/// Movie record as stored in the dataset / 电影记录
///
/// Field names on the wire follow the dataset format (`movieName`, `duration`, `imdbRating`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    #[serde(rename = "movieName")]
    pub name: String,
    pub director: String,
    pub year: i32,
    pub genre: String,
    pub description: String,
    /// Running time in minutes / 时长（分钟）
    #[serde(rename = "duration")]
    pub duration_minutes: i32,
    /// Not range-checked, usually 0.0 - 10.0
    #[serde(rename = "imdbRating")]
    pub imdb_rating: f64,
}

/// User review attached to a movie / 用户影评
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub movie_id: i64,
    pub user_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// 0.0 - 5.0
    pub rating: f32,
    pub comment: String,
}
