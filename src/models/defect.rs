//! Defect model
//!
//! Mirrors the `/defects` endpoint payload. Defect ids (`DEF-001`, ...) are
//! assigned by the backend in creation order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::canvas::Rgb;

/// Defect severity classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefectSeverity {
    Critical,
    High,
    Medium,
    Low,
}

impl DefectSeverity {
    /// Severity badge color, matching the dashboard's styling.
    pub fn color(&self) -> Rgb {
        match self {
            DefectSeverity::Critical => Rgb::RED_500,
            DefectSeverity::High => Rgb::AMBER_500,
            DefectSeverity::Medium => Rgb::SLATE_500,
            DefectSeverity::Low => Rgb::SLATE_400,
        }
    }
}

impl std::fmt::Display for DefectSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefectSeverity::Critical => write!(f, "Critical"),
            DefectSeverity::High => write!(f, "High"),
            DefectSeverity::Medium => write!(f, "Medium"),
            DefectSeverity::Low => write!(f, "Low"),
        }
    }
}

/// Defect lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DefectStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl DefectStatus {
    /// Status badge color, matching the dashboard's styling.
    pub fn color(&self) -> Rgb {
        match self {
            DefectStatus::Open => Rgb::RED_500,
            DefectStatus::InProgress => Rgb::AMBER_500,
            DefectStatus::Resolved => Rgb::EMERALD_500,
            DefectStatus::Closed => Rgb::SLATE_400,
        }
    }
}

impl std::fmt::Display for DefectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefectStatus::Open => write!(f, "Open"),
            DefectStatus::InProgress => write!(f, "In Progress"),
            DefectStatus::Resolved => write!(f, "Resolved"),
            DefectStatus::Closed => write!(f, "Closed"),
        }
    }
}

/// A defect raised during UAT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defect {
    pub defect_id: String,
    pub title: String,
    pub description: String,
    pub severity: DefectSeverity,
    pub status: DefectStatus,
    pub reported_by: String,
    pub reported_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_date: Option<NaiveDate>,
    /// Originating test script, when the defect was found by one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_script_id: Option<String>,
}
