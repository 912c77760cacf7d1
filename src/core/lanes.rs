use crate::core::store::Snapshot;
use crate::domain::model::{Lane, LaneFilter};

/// Returns every lane matching the filter, in store order. No filter
/// means the full store; there are no error conditions.
pub fn list_lanes(snapshot: &Snapshot, filter: &LaneFilter) -> Vec<Lane> {
    snapshot
        .lanes()
        .iter()
        .filter(|lane| filter.matches(lane))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::TransportMode;
    use std::collections::HashMap;

    fn lane(id: &str, origin: &str, destination: &str, mode: TransportMode) -> Lane {
        Lane {
            id: id.to_string(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost_per_ton: 100.0,
            volume_tons: 500.0,
            lead_days: 3,
            reliability: 0.9,
            mode,
        }
    }

    fn sample_snapshot() -> Snapshot {
        Snapshot::new(
            vec![
                lane("L1", "Chicago", "Dallas", TransportMode::Truck),
                lane("L2", "Miami", "Dallas", TransportMode::Rail),
                lane("L3", "Chicago", "Atlanta", TransportMode::Air),
            ],
            HashMap::new(),
        )
    }

    #[test]
    fn no_filter_returns_full_store_in_order() {
        let snapshot = sample_snapshot();
        let lanes = list_lanes(&snapshot, &LaneFilter::default());

        assert_eq!(lanes.len(), 3);
        assert_eq!(lanes, snapshot.lanes().to_vec());
    }

    #[test]
    fn empty_strings_are_no_constraint() {
        let snapshot = sample_snapshot();
        let filter = LaneFilter::new(Some(String::new()), Some(String::new()));

        assert!(filter.is_empty());
        assert_eq!(list_lanes(&snapshot, &filter).len(), 3);
    }

    #[test]
    fn origin_filter_is_case_insensitive_substring() {
        let snapshot = sample_snapshot();
        let filter = LaneFilter::new(Some("chic".to_string()), None);

        let lanes = list_lanes(&snapshot, &filter);
        assert_eq!(lanes.len(), 2);
        assert!(lanes.iter().all(|l| l.origin == "Chicago"));
    }

    #[test]
    fn destination_filter_keeps_store_order() {
        let snapshot = sample_snapshot();
        let filter = LaneFilter::new(None, Some("dallas".to_string()));

        let lanes = list_lanes(&snapshot, &filter);
        let ids: Vec<&str> = lanes.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["L1", "L2"]);
    }

    #[test]
    fn both_filters_are_conjunctive() {
        let snapshot = sample_snapshot();
        let both = LaneFilter::new(Some("Chicago".to_string()), Some("Dallas".to_string()));

        let lanes = list_lanes(&snapshot, &both);
        assert_eq!(lanes.len(), 1);
        assert_eq!(lanes[0].id, "L1");

        // Conjunction equals the intersection of the single-filter results.
        let by_origin = list_lanes(&snapshot, &LaneFilter::new(Some("Chicago".to_string()), None));
        let by_dest = list_lanes(&snapshot, &LaneFilter::new(None, Some("Dallas".to_string())));
        for lane in &lanes {
            assert!(by_origin.contains(lane));
            assert!(by_dest.contains(lane));
        }
    }

    #[test]
    fn unmatched_filter_returns_empty() {
        let snapshot = sample_snapshot();
        let filter = LaneFilter::new(Some("Seattle".to_string()), None);

        assert!(list_lanes(&snapshot, &filter).is_empty());
    }
}
