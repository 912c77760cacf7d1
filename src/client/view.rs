use crate::core::{DashboardApi, DateRange, Lane, LaneFilter, SeriesPoint};
use crate::utils::error::{DashboardError, Result};

/// Monotonically increasing request ticket. A fetch result is only
/// applied if its ticket still matches the latest issued one, so a
/// late-arriving response for a superseded request can never overwrite
/// the most recent selection's state.
pub type RequestTicket = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum SeriesState {
    Idle,
    Loading {
        lane_id: String,
    },
    Loaded {
        lane_id: String,
        points: Vec<SeriesPoint>,
    },
    /// The lane exists but has no series data (server 404). Shown with a
    /// specific message, distinct from a generic failure.
    Unavailable {
        lane_id: String,
        message: String,
    },
    Failed {
        lane_id: String,
        message: String,
    },
}

/// State machine for the series drill-down view:
/// Idle -> Loading -> {Loaded, Unavailable, Failed}, back to Idle on
/// close, and re-entering Loading on any new selection.
#[derive(Debug)]
pub struct SeriesViewModel {
    state: SeriesState,
    issued: RequestTicket,
}

impl Default for SeriesViewModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesViewModel {
    pub fn new() -> Self {
        Self {
            state: SeriesState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &SeriesState {
        &self.state
    }

    /// Starts loading a lane's series. Always enters `Loading`,
    /// regardless of the prior state.
    pub fn select(&mut self, lane_id: &str) -> RequestTicket {
        self.issued += 1;
        self.state = SeriesState::Loading {
            lane_id: lane_id.to_string(),
        };
        self.issued
    }

    /// Closing clears the series state so the next selection starts from
    /// a clean loading state. Any in-flight request becomes stale.
    pub fn close(&mut self) {
        self.issued += 1;
        self.state = SeriesState::Idle;
    }

    /// Applies a fetch outcome. Returns false when the ticket is stale
    /// and the result was dropped.
    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<Vec<SeriesPoint>>) -> bool {
        if ticket != self.issued {
            tracing::debug!("Dropping stale series result (ticket {})", ticket);
            return false;
        }

        let lane_id = match &self.state {
            SeriesState::Loading { lane_id } => lane_id.clone(),
            _ => return false,
        };

        self.state = match outcome {
            Ok(points) => SeriesState::Loaded { lane_id, points },
            Err(e @ DashboardError::LaneNotFound { .. }) => SeriesState::Unavailable {
                lane_id,
                message: e.user_friendly_message(),
            },
            Err(e) => SeriesState::Failed {
                lane_id,
                message: e.user_friendly_message(),
            },
        };
        true
    }

    /// Convenience driver: select, fetch through the API port, apply.
    pub async fn select_and_fetch(
        &mut self,
        api: &dyn DashboardApi,
        lane_id: &str,
        range: &DateRange,
    ) -> bool {
        let ticket = self.select(lane_id);
        let outcome = api.lane_series(lane_id, range).await;
        self.apply(ticket, outcome)
    }
}

/// Lane list with filter-apply semantics: each refresh replaces any
/// in-flight result with the latest, and a fetch failure surfaces an
/// inline error and clears the list.
#[derive(Debug, Default)]
pub struct LaneListModel {
    lanes: Vec<Lane>,
    error: Option<String>,
    loading: bool,
    issued: RequestTicket,
}

impl LaneListModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn refresh(&mut self) -> RequestTicket {
        self.issued += 1;
        self.loading = true;
        self.error = None;
        self.issued
    }

    pub fn apply(&mut self, ticket: RequestTicket, outcome: Result<Vec<Lane>>) -> bool {
        if ticket != self.issued {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(lanes) => {
                self.lanes = lanes;
                self.error = None;
            }
            Err(e) => {
                self.lanes.clear();
                self.error = Some(e.user_friendly_message());
            }
        }
        true
    }

    pub async fn refresh_and_fetch(&mut self, api: &dyn DashboardApi, filter: &LaneFilter) -> bool {
        let ticket = self.refresh();
        let outcome = api.list_lanes(filter).await;
        self.apply(ticket, outcome)
    }
}
