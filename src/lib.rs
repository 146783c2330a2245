pub mod config;
pub mod error;
pub mod models;
pub mod dataset;
pub mod catalog;
pub mod search;
pub mod service;
pub mod reviews;
pub mod icons;

pub use catalog::Catalog;
pub use error::DataLoadError;
pub use models::{Movie, Review};
pub use search::{IdFilter, SearchQuery, TextFilter};
pub use service::MovieService;
