use crate::core::{self, ConfigProvider, DateRange, Lane, LaneFilter, Snapshot};
use crate::utils::error::{DashboardError, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

// Application state: one immutable snapshot shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
}

#[derive(Debug, Deserialize)]
pub struct LaneListParams {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeriesParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/lanes", get(list_lanes))
        .route("/lanes/:id/series", get(lane_series))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

/// Binds the configured address and serves requests until shutdown.
pub async fn serve(config: &impl ConfigProvider, snapshot: Snapshot) -> Result<()> {
    let state = AppState {
        snapshot: Arc::new(snapshot),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("Serving lane dashboard on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

// Unmatched paths (including an empty lane id segment, which never
// reaches the series route) get the same JSON error envelope as a
// missing lane.
async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

// GET /lanes?origin=&destination=
//
// Always 200; an empty array is a valid "no results".
async fn list_lanes(
    State(state): State<AppState>,
    Query(params): Query<LaneListParams>,
) -> Json<Vec<Lane>> {
    let filter = LaneFilter::new(params.origin, params.destination);
    Json(core::lanes::list_lanes(&state.snapshot, &filter))
}

// GET /lanes/:id/series?from=&to=
//
// Unparseable date bounds are ignored rather than rejected, matching the
// best-effort nature of a read-only endpoint.
async fn lane_series(
    Path(id): Path<String>,
    Query(params): Query<SeriesParams>,
    State(state): State<AppState>,
) -> Response {
    let range = DateRange::parse(params.from.as_deref(), params.to.as_deref());

    match core::series::lane_series(&state.snapshot, &id, &range) {
        Ok(points) => Json(points).into_response(),
        Err(DashboardError::LaneNotFound { .. }) => (
            StatusCode::NOT_FOUND,
            Json(ErrorBody {
                error: "Lane not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            warn!("Series lookup for '{}' failed: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response()
        }
    }
}
