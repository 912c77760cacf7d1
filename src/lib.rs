pub mod adapters;
pub mod app;
pub mod client;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FixtureLoader, LocalStorage};
pub use client::{DashboardClient, LaneListModel, SeriesState, SeriesViewModel};
pub use config::{file_config::FileConfig, CliConfig};
pub use core::Snapshot;
pub use utils::error::{DashboardError, Result};
