use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A directional shipping route between an origin and a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub cost_per_ton: f64,
    pub volume_tons: f64,
    pub lead_days: u32,
    pub reliability: f64,
    pub mode: TransportMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    Truck,
    Rail,
    Air,
    Sea,
}

/// One daily metrics snapshot for a lane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub shipments: u32,
    pub avg_cost_per_ton: f64,
    pub avg_lead_days: f64,
    pub on_time_rate: f64,
}

/// Substring filters for lane listing. Empty strings count as "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaneFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

impl LaneFilter {
    pub fn new(origin: Option<String>, destination: Option<String>) -> Self {
        Self {
            origin: origin.filter(|s| !s.is_empty()),
            destination: destination.filter(|s| !s.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none() && self.destination.is_none()
    }

    /// Both filters are conjunctive; each one is a case-insensitive
    /// substring match against its lane field.
    pub fn matches(&self, lane: &Lane) -> bool {
        contains_ci(&lane.origin, self.origin.as_deref())
            && contains_ci(&lane.destination, self.destination.as_deref())
    }
}

fn contains_ci(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

/// Inclusive calendar-date bounds. Comparison is on calendar days
/// (`NaiveDate`); time of day is not meaningful in this data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        Self { from, to }
    }

    /// Builds a range from raw query values. Unparseable values are
    /// ignored rather than rejected, so a bad bound never fails the
    /// whole request.
    pub fn parse(from: Option<&str>, to: Option<&str>) -> Self {
        Self {
            from: from.and_then(parse_iso_date),
            to: to.and_then(parse_iso_date),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.from, self.to) {
            (Some(from), _) if date < from => false,
            (_, Some(to)) if date > to => false,
            _ => true,
        }
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
