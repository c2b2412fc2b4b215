//! Document composer entry points
//!
//! [`DocumentComposer`] binds the injected authorship configuration to the
//! four report templates. Each call is synchronous, owns its own canvas,
//! and runs to completion; nothing persists between calls.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{ComposedDocument, DocumentKind, ReportError, brd, risk, trend, uat};
use crate::models::{Brd, Claim, Defect, Risk, TestScript, TrendData, UseCase};

/// Document authorship configuration.
///
/// The author identity appears in the report headers and footers; the
/// system label is the footer prefix on the Risk and Analytics documents.
/// Injected into the composer so the templates carry no hidden global
/// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorship {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_email")]
    pub email: String,
    #[serde(default = "default_system_label")]
    pub system_label: String,
}

fn default_name() -> String {
    "Sai Tarun Reddy".to_string()
}

fn default_title() -> String {
    "Operations Analyst".to_string()
}

fn default_email() -> String {
    "saitarunreddymittapalli@gmail.com".to_string()
}

fn default_system_label() -> String {
    "MAPFRE FNOL System".to_string()
}

impl Default for Authorship {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: default_title(),
            email: default_email(),
            system_label: default_system_label(),
        }
    }
}

/// The full record set the dashboard fetches before composing.
///
/// All collections must be fully materialized; there is no streaming input.
/// `brd` and `trend` are optional because their fetches can fail
/// independently of the list endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brd: Option<Brd>,
    #[serde(default)]
    pub use_cases: Vec<UseCase>,
    #[serde(default)]
    pub test_scripts: Vec<TestScript>,
    #[serde(default)]
    pub defects: Vec<Defect>,
    #[serde(default)]
    pub risks: Vec<Risk>,
    #[serde(default)]
    pub claims: Vec<Claim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendData>,
}

/// Composes paginated PDF reports from in-memory domain records.
pub struct DocumentComposer {
    authorship: Authorship,
}

impl Default for DocumentComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentComposer {
    /// Create a composer with the default authorship.
    pub fn new() -> Self {
        Self {
            authorship: Authorship::default(),
        }
    }

    /// Create a composer with custom authorship.
    pub fn with_authorship(authorship: Authorship) -> Self {
        Self { authorship }
    }

    pub fn authorship(&self) -> &Authorship {
        &self.authorship
    }

    /// Compose the Business Requirements Document with its use cases.
    pub fn compose_brd(
        &self,
        brd: &Brd,
        use_cases: &[UseCase],
    ) -> Result<ComposedDocument, ReportError> {
        let doc = brd::render(brd, use_cases, &self.authorship)?;
        info!(filename = %doc.filename, pages = doc.page_count, "composed business requirements document");
        Ok(doc)
    }

    /// Compose the UAT Test Plan with its defect register.
    pub fn compose_uat_plan(
        &self,
        test_scripts: &[TestScript],
        defects: &[Defect],
    ) -> Result<ComposedDocument, ReportError> {
        let doc = uat::render(test_scripts, defects, &self.authorship)?;
        info!(filename = %doc.filename, pages = doc.page_count, "composed UAT test plan");
        Ok(doc)
    }

    /// Compose the Risk Mitigation Plan.
    pub fn compose_risk_plan(&self, risks: &[Risk]) -> Result<ComposedDocument, ReportError> {
        let doc = risk::render(risks, &self.authorship)?;
        info!(filename = %doc.filename, pages = doc.page_count, "composed risk mitigation plan");
        Ok(doc)
    }

    /// Compose the Data Trend Analysis report.
    pub fn compose_analytics(
        &self,
        claims: &[Claim],
        trend: &TrendData,
    ) -> Result<ComposedDocument, ReportError> {
        let doc = trend::render(claims, trend, &self.authorship)?;
        info!(filename = %doc.filename, pages = doc.page_count, "composed trend analysis report");
        Ok(doc)
    }

    /// Compose the document selected by `kind` from a full record set.
    pub fn compose(
        &self,
        kind: DocumentKind,
        records: &RecordSet,
    ) -> Result<ComposedDocument, ReportError> {
        match kind {
            DocumentKind::BusinessRequirements => {
                let brd = records
                    .brd
                    .as_ref()
                    .ok_or_else(|| ReportError::MissingRecords("brd".to_string()))?;
                self.compose_brd(brd, &records.use_cases)
            }
            DocumentKind::UatTestPlan => {
                self.compose_uat_plan(&records.test_scripts, &records.defects)
            }
            DocumentKind::RiskMitigationPlan => self.compose_risk_plan(&records.risks),
            DocumentKind::TrendAnalysis => {
                let trend = records
                    .trend
                    .as_ref()
                    .ok_or_else(|| ReportError::MissingRecords("trend".to_string()))?;
                self.compose_analytics(&records.claims, trend)
            }
        }
    }
}
