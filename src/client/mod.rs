// Dashboard client: typed API calls plus the view models that hold the
// orchestration state (loading, errors, last-request-wins).

pub mod api;
pub mod view;

pub use api::DashboardClient;
pub use view::{LaneListModel, RequestTicket, SeriesState, SeriesViewModel};
