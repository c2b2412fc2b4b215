//! Risk register model
//!
//! Mirrors the `/risks` endpoint payload. Mitigation steps are ordered and a
//! risk must carry at least one; the validation layer rejects a risk
//! without them before any document layout starts.

use serde::{Deserialize, Serialize};

use super::Rating;
use crate::report::canvas::Rgb;

/// Lifecycle status of a tracked risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Active,
    Mitigated,
    /// The risk materialized and its contingency plan is in effect.
    Occurred,
    Closed,
}

impl RiskStatus {
    /// Status badge color, matching the dashboard's styling.
    pub fn color(&self) -> Rgb {
        match self {
            RiskStatus::Active => Rgb::AMBER_500,
            RiskStatus::Mitigated => Rgb::EMERALD_500,
            RiskStatus::Occurred => Rgb::RED_500,
            RiskStatus::Closed => Rgb::SLATE_400,
        }
    }
}

impl std::fmt::Display for RiskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskStatus::Active => write!(f, "Active"),
            RiskStatus::Mitigated => write!(f, "Mitigated"),
            RiskStatus::Occurred => write!(f, "Occurred"),
            RiskStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A risk register entry with its mitigation and contingency planning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Risk {
    pub risk_id: String,
    pub title: String,
    pub description: String,
    pub probability: Rating,
    pub impact: Rating,
    pub status: RiskStatus,
    /// Mitigation steps in planning order; must be non-empty.
    pub mitigation_steps: Vec<String>,
    pub contingency_plan: String,
    pub owner: String,
}
