//! Claims trend aggregates
//!
//! Mirrors the `/claims/trend-analysis` endpoint payload: pivot counts over
//! the claim set, grouped by day of week, claim type, status, and region,
//! plus a date-ordered filing timeline. Pivot rows keep the order the
//! backend emitted them in; the composer never re-sorts them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Claims filed per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub count: u32,
}

/// Claims filed per claim type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    #[serde(rename = "type")]
    pub claim_type: String,
    pub count: u32,
}

/// Claims per processing status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u32,
}

/// Claims filed per region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    pub region: String,
    pub count: u32,
}

/// Claims filed on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub count: u32,
}

/// The full trend-analysis aggregate set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendData {
    pub by_day_of_week: Vec<DayCount>,
    pub by_claim_type: Vec<TypeCount>,
    pub by_status: Vec<StatusCount>,
    pub by_region: Vec<RegionCount>,
    /// Filing counts per day, ascending by date.
    pub timeline: Vec<TimelinePoint>,
}
