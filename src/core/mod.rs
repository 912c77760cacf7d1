pub mod lanes;
pub mod series;
pub mod store;

pub use crate::domain::model::{DateRange, Lane, LaneFilter, SeriesPoint, TransportMode};
pub use crate::domain::ports::{ConfigProvider, DashboardApi, Storage};
pub use crate::utils::error::Result;
pub use store::Snapshot;
