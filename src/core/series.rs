use crate::core::store::Snapshot;
use crate::domain::model::{DateRange, SeriesPoint};
use crate::utils::error::{DashboardError, Result};

/// Returns the lane's series filtered to the inclusive date range,
/// preserving stored order. An unknown lane id is an error; an inverted
/// range (`from > to`) is a valid degenerate query yielding an empty
/// sequence.
pub fn lane_series(
    snapshot: &Snapshot,
    lane_id: &str,
    range: &DateRange,
) -> Result<Vec<SeriesPoint>> {
    let points = snapshot
        .series_for(lane_id)
        .ok_or_else(|| DashboardError::LaneNotFound {
            lane_id: lane_id.to_string(),
        })?;

    Ok(points
        .iter()
        .filter(|point| range.contains(point.date))
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn point(day: &str, shipments: u32) -> SeriesPoint {
        SeriesPoint {
            date: date(day),
            shipments,
            avg_cost_per_ton: 120.0,
            avg_lead_days: 3.5,
            on_time_rate: 0.92,
        }
    }

    fn sample_snapshot() -> Snapshot {
        let mut series = HashMap::new();
        series.insert(
            "L1".to_string(),
            vec![
                point("2024-01-01", 10),
                point("2024-01-05", 12),
                point("2024-01-10", 8),
            ],
        );
        Snapshot::new(Vec::new(), series)
    }

    #[test]
    fn unknown_lane_is_not_found() {
        let snapshot = sample_snapshot();
        let result = lane_series(&snapshot, "UNKNOWN", &DateRange::default());

        assert!(matches!(
            result,
            Err(DashboardError::LaneNotFound { ref lane_id }) if lane_id == "UNKNOWN"
        ));
    }

    #[test]
    fn empty_lane_id_is_not_found() {
        let snapshot = sample_snapshot();
        assert!(lane_series(&snapshot, "", &DateRange::default()).is_err());
    }

    #[test]
    fn no_bounds_round_trips_the_stored_series() {
        let snapshot = sample_snapshot();
        let points = lane_series(&snapshot, "L1", &DateRange::default()).unwrap();

        assert_eq!(points, snapshot.series_for("L1").unwrap().to_vec());
    }

    #[test]
    fn bounds_are_inclusive_on_both_ends() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(Some(date("2024-01-01")), Some(date("2024-01-05")));

        let points = lane_series(&snapshot, "L1", &range).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date("2024-01-01"));
        assert_eq!(points[1].date, date("2024-01-05"));
    }

    #[test]
    fn interior_range_selects_the_middle_point() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(Some(date("2024-01-02")), Some(date("2024-01-09")));

        let points = lane_series(&snapshot, "L1", &range).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, date("2024-01-05"));
    }

    #[test]
    fn lower_bound_only_preserves_order() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(Some(date("2024-01-02")), None);

        let points = lane_series(&snapshot, "L1", &range).unwrap();
        let dates: Vec<NaiveDate> = points.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date("2024-01-05"), date("2024-01-10")]);
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let snapshot = sample_snapshot();
        let range = DateRange::new(Some(date("2024-02-01")), Some(date("2024-01-01")));

        let points = lane_series(&snapshot, "L1", &range).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn unparseable_bounds_are_ignored() {
        let snapshot = sample_snapshot();
        let range = DateRange::parse(Some("not-a-date"), Some("2024-01-05"));

        assert_eq!(range.from, None);
        let points = lane_series(&snapshot, "L1", &range).unwrap();
        assert_eq!(points.len(), 2);
    }
}
