//! Claim record model
//!
//! Mirrors the `/claims` endpoint payload: one record per FNOL intake, with
//! routing outcome and (for closed claims) the measured resolution time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Rating;
use crate::report::canvas::Rgb;

/// Processing status of a claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Open,
    Closed,
    Escalated,
    #[serde(rename = "In Review")]
    InReview,
}

impl ClaimStatus {
    /// Status badge color, matching the dashboard's styling.
    pub fn color(&self) -> Rgb {
        match self {
            ClaimStatus::Open => Rgb::AMBER_500,
            ClaimStatus::Closed => Rgb::EMERALD_500,
            ClaimStatus::Escalated => Rgb::RED_500,
            ClaimStatus::InReview => Rgb::SLATE_500,
        }
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClaimStatus::Open => write!(f, "Open"),
            ClaimStatus::Closed => write!(f, "Closed"),
            ClaimStatus::Escalated => write!(f, "Escalated"),
            ClaimStatus::InReview => write!(f, "In Review"),
        }
    }
}

/// An auto insurance claim record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    pub id: Uuid,
    pub claim_number: String,
    pub policyholder: String,
    pub policy_number: String,
    pub date_filed: NaiveDate,
    /// Collision, Windshield, Theft, Comprehensive, Liability.
    pub claim_type: String,
    pub status: ClaimStatus,
    /// Claimed amount in USD.
    pub amount: f64,
    /// Whether the routing engine assigned this claim without manual help.
    pub auto_routed: bool,
    pub zip_code: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adjuster_assigned: Option<String>,
    /// Hours from filing to closure; present only for closed claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_time_hours: Option<f64>,
    pub risk_level: Rating,
}
