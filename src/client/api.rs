use crate::core::{DashboardApi, DateRange, Lane, LaneFilter, SeriesPoint};
use crate::utils::error::{DashboardError, Result};
use crate::utils::validation;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};

/// Typed client for the two dashboard endpoints.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    base_url: String,
    client: Client,
}

impl DashboardClient {
    pub fn new(base_url: &str) -> Result<Self> {
        validation::validate_base_url("server_url", base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DashboardApi for DashboardClient {
    async fn list_lanes(&self, filter: &LaneFilter) -> Result<Vec<Lane>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(origin) = &filter.origin {
            query.push(("origin", origin.clone()));
        }
        if let Some(destination) = &filter.destination {
            query.push(("destination", destination.clone()));
        }

        tracing::debug!("Fetching lanes from {}/lanes", self.base_url);
        let response = self
            .client
            .get(format!("{}/lanes", self.base_url))
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::TransportError {
                status: status.as_u16(),
                message: "lane listing failed".to_string(),
            });
        }

        Ok(response.json().await?)
    }

    async fn lane_series(&self, lane_id: &str, range: &DateRange) -> Result<Vec<SeriesPoint>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(from) = range.from {
            query.push(("from", from.to_string()));
        }
        if let Some(to) = range.to {
            query.push(("to", to.to_string()));
        }

        tracing::debug!("Fetching series for lane '{}'", lane_id);
        let response = self
            .client
            .get(format!("{}/lanes/{}/series", self.base_url, lane_id))
            .query(&query)
            .send()
            .await?;

        // 404 is a distinct state for the dashboard, not a generic failure.
        match response.status() {
            StatusCode::NOT_FOUND => Err(DashboardError::LaneNotFound {
                lane_id: lane_id.to_string(),
            }),
            status if !status.is_success() => Err(DashboardError::TransportError {
                status: status.as_u16(),
                message: format!("series fetch for lane '{}' failed", lane_id),
            }),
            _ => Ok(response.json().await?),
        }
    }
}
