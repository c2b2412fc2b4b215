//! Client-side claims analytics
//!
//! Owns the pivot aggregation behind the trend-analysis view and the KPI
//! metric computations the dashboard header shows. Aggregation preserves
//! first-seen input order for every category breakdown (the composer
//! renders rows in exactly this order); only the filing timeline is sorted,
//! ascending by date.
//!
//! All rate computations guard a zero denominator and yield `0` rather
//! than propagating NaN or infinity into rendered output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{
    Claim, ClaimStatus, DayCount, RegionCount, StatusCount, TimelinePoint, TrendData, TypeCount,
};

/// Format `count` as a percentage of `total` with one decimal, e.g.
/// `"23.3%"`. Returns `"0.0%"` when `total` is zero.
pub fn percent_of(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0%".to_string();
    }
    format!("{:.1}%", count as f64 / total as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Count occurrences of `key`, preserving first-seen order.
fn bump(entries: &mut Vec<(String, u32)>, key: &str) {
    match entries.iter_mut().find(|(existing, _)| existing == key) {
        Some(entry) => entry.1 += 1,
        None => entries.push((key.to_string(), 1)),
    }
}

impl TrendData {
    /// Aggregate a claim set into the trend pivot counts.
    pub fn from_claims(claims: &[Claim]) -> TrendData {
        let mut by_day: Vec<(String, u32)> = Vec::new();
        let mut by_type: Vec<(String, u32)> = Vec::new();
        let mut by_status: Vec<(String, u32)> = Vec::new();
        let mut by_region: Vec<(String, u32)> = Vec::new();
        let mut by_date: Vec<(NaiveDate, u32)> = Vec::new();

        for claim in claims {
            bump(&mut by_day, &claim.date_filed.format("%A").to_string());
            bump(&mut by_type, &claim.claim_type);
            bump(&mut by_status, &claim.status.to_string());
            bump(&mut by_region, &claim.region);

            match by_date.iter_mut().find(|(date, _)| *date == claim.date_filed) {
                Some(entry) => entry.1 += 1,
                None => by_date.push((claim.date_filed, 1)),
            }
        }
        by_date.sort_by_key(|(date, _)| *date);

        TrendData {
            by_day_of_week: by_day
                .into_iter()
                .map(|(day, count)| DayCount { day, count })
                .collect(),
            by_claim_type: by_type
                .into_iter()
                .map(|(claim_type, count)| TypeCount { claim_type, count })
                .collect(),
            by_status: by_status
                .into_iter()
                .map(|(status, count)| StatusCount { status, count })
                .collect(),
            by_region: by_region
                .into_iter()
                .map(|(region, count)| RegionCount { region, count })
                .collect(),
            timeline: by_date
                .into_iter()
                .map(|(date, count)| TimelinePoint { date, count })
                .collect(),
        }
    }
}

/// Headline KPI metrics over a claim set.
///
/// Mirrors the `/kpi-metrics` endpoint payload; rates are percentages
/// rounded to one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiMetrics {
    /// Mean resolution time in hours over claims that have one; 0 when
    /// none do.
    pub avg_resolution_time: f64,
    pub auto_route_success_rate: f64,
    pub escalation_rate: f64,
    pub total_claims: u32,
    pub open_claims: u32,
    pub closed_claims: u32,
    pub escalated_claims: u32,
}

impl KpiMetrics {
    pub fn from_claims(claims: &[Claim]) -> KpiMetrics {
        let total = claims.len();
        let open = claims.iter().filter(|c| c.status == ClaimStatus::Open).count();
        let closed = claims.iter().filter(|c| c.status == ClaimStatus::Closed).count();
        let escalated = claims
            .iter()
            .filter(|c| c.status == ClaimStatus::Escalated)
            .count();

        let resolution_times: Vec<f64> =
            claims.iter().filter_map(|c| c.resolution_time_hours).collect();
        let avg_resolution = if resolution_times.is_empty() {
            0.0
        } else {
            resolution_times.iter().sum::<f64>() / resolution_times.len() as f64
        };

        let auto_routed = claims.iter().filter(|c| c.auto_routed).count();
        let auto_route_rate = if total == 0 {
            0.0
        } else {
            auto_routed as f64 / total as f64 * 100.0
        };
        let escalation_rate = if total == 0 {
            0.0
        } else {
            escalated as f64 / total as f64 * 100.0
        };

        KpiMetrics {
            avg_resolution_time: round1(avg_resolution),
            auto_route_success_rate: round1(auto_route_rate),
            escalation_rate: round1(escalation_rate),
            total_claims: total as u32,
            open_claims: open as u32,
            closed_claims: closed as u32,
            escalated_claims: escalated as u32,
        }
    }
}
