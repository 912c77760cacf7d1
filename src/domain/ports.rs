use crate::domain::model::{DateRange, Lane, LaneFilter, SeriesPoint};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn lanes_file(&self) -> &str;
    fn series_file(&self) -> &str;
    fn verbose(&self) -> bool;
}

/// The two read operations the dashboard consumes. Object-safe so view
/// models can be driven by fakes in tests.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_lanes(&self, filter: &LaneFilter) -> Result<Vec<Lane>>;
    async fn lane_series(&self, lane_id: &str, range: &DateRange) -> Result<Vec<SeriesPoint>>;
}
