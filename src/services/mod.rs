pub mod catalog;
pub mod query_engine;

pub use catalog::{CatalogService, RELATED_LIMIT};
pub use query_engine::run_query;
