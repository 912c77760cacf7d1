use crate::domain::model::{Lane, SeriesPoint};
use std::collections::HashMap;

/// Process-wide immutable dataset, built once at startup and shared via
/// `Arc`. Every query is a pure function of (snapshot, parameters), so
/// concurrent reads need no locking.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    lanes: Vec<Lane>,
    series: HashMap<String, Vec<SeriesPoint>>,
}

impl Snapshot {
    pub fn new(lanes: Vec<Lane>, series: HashMap<String, Vec<SeriesPoint>>) -> Self {
        Self { lanes, series }
    }

    /// Lanes in store order. Listing never re-sorts.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Daily points for one lane, date-ascending as loaded from the
    /// fixture. `None` when the lane has no series data.
    pub fn series_for(&self, lane_id: &str) -> Option<&[SeriesPoint]> {
        self.series.get(lane_id).map(Vec::as_slice)
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}
