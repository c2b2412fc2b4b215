//! UAT test script model
//!
//! Mirrors the `/test-scripts` endpoint payload. Execution fields
//! (`tested_by`, `tested_date`, `notes`) are absent until a script has been
//! run.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::report::canvas::Rgb;

/// Execution status of a UAT test script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestStatus {
    Pass,
    Fail,
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
}

impl TestStatus {
    /// Status badge color, matching the dashboard's styling.
    pub fn color(&self) -> Rgb {
        match self {
            TestStatus::Pass => Rgb::EMERALD_500,
            TestStatus::Fail => Rgb::RED_500,
            TestStatus::NotStarted => Rgb::SLATE_400,
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "Pass"),
            TestStatus::Fail => write!(f, "Fail"),
            TestStatus::NotStarted => write!(f, "Not Started"),
        }
    }
}

/// A UAT test script with its ordered execution steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestScript {
    pub script_id: String,
    pub title: String,
    pub description: String,
    /// Steps in execution order.
    pub steps: Vec<String>,
    pub expected_result: String,
    pub status: TestStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tested_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tested_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
