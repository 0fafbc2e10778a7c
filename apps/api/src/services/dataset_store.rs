use crate::{error::Result, models::Dataset};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the users/restaurants/ratings document from disk.
///
/// The file is read again on every call so each request sees the current data.
#[derive(Debug, Clone)]
pub struct JsonDatasetStore {
    path: PathBuf,
}

impl JsonDatasetStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Dataset> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let dataset = Dataset::from_json_str(&raw)?;
        debug!(
            path = %self.path.display(),
            users = dataset.users.len(),
            restaurants = dataset.restaurants.len(),
            ratings = dataset.ratings.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }
}
