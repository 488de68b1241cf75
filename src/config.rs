use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::AppError;
use crate::source::{CourseSource, JsonFileCourseSource, SeedCourseSource};

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// When unset the built-in seed catalog is served.
    pub data_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, AppError> {
        Self::from_vars(
            env::var("CATALOG_ADDR").ok(),
            env::var("CATALOG_DATA_PATH").ok(),
        )
    }

    fn from_vars(addr: Option<String>, data_path: Option<String>) -> Result<Self, AppError> {
        let raw_addr = addr.unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| AppError::Config(format!("CATALOG_ADDR {:?}: {}", raw_addr, e)))?;

        let data_path = data_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self { addr, data_path })
    }

    pub fn course_source(&self) -> Box<dyn CourseSource> {
        match &self.data_path {
            Some(path) => Box::new(JsonFileCourseSource::new(path)),
            None => Box::new(SeedCourseSource),
        }
    }
}
