use crate::core::{Snapshot, Storage};
use crate::domain::model::{Lane, SeriesPoint};
use crate::utils::error::{DashboardError, Result};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Builds the immutable snapshot from the two JSON fixture files.
///
/// The fixture contract assumes every key in the series file corresponds
/// to a lane id in the lanes file; this is not runtime-checked, a lane
/// without series data simply answers 404 on the series endpoint.
pub struct FixtureLoader<S: Storage> {
    storage: S,
}

impl<S: Storage> FixtureLoader<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn load(&self, lanes_path: &str, series_path: &str) -> Result<Snapshot> {
        let lanes: Vec<Lane> = self.read_json(lanes_path).await?;
        let series: HashMap<String, Vec<SeriesPoint>> = self.read_json(series_path).await?;

        tracing::debug!(
            "Loaded {} lanes and {} series entries",
            lanes.len(),
            series.len()
        );

        Ok(Snapshot::new(lanes, series))
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let bytes = self
            .storage
            .read_file(path)
            .await
            .map_err(|e| DashboardError::FixtureError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&bytes).map_err(|e| DashboardError::FixtureError {
            path: path.to_string(),
            message: format!("invalid JSON: {}", e),
        })
    }
}
