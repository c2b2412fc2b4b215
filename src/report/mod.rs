//! Report composition
//!
//! Provides the document composer for the four operational reports:
//! - Business Requirements Document (with use cases)
//! - UAT Test Plan (with defect register)
//! - Risk Mitigation Plan
//! - Data Trend Analysis
//!
//! Each composition is a single-shot, stateless pipeline over read-only
//! records: validate, render header and sections (page-breaking as needed),
//! stamp footers, assemble bytes. A validation failure aborts the whole
//! document before any bytes exist; there is no partial output.

pub mod canvas;
pub mod composer;

mod brd;
mod pdf;
mod risk;
mod trend;
mod uat;

use serde::{Deserialize, Serialize};

pub use composer::{Authorship, DocumentComposer, RecordSet};

/// Producer string written to every document's info dictionary.
const PRODUCER: &str = "Claims Reporting SDK";

/// Project line rendered under the UAT and Risk report titles.
pub(crate) const PROJECT_LINE: &str = "Auto Claims FNOL Workflow Optimization";

/// Error during report composition
#[derive(Debug, thiserror::Error, Serialize, Deserialize)]
pub enum ReportError {
    /// A required field is missing, blank, or wrong-shaped. Fatal: the
    /// caller must surface the failure and must not save a partial file
    /// (none is produced).
    #[error("malformed {record} record '{id}': {reason}")]
    MalformedRecord {
        record: String,
        id: String,
        reason: String,
    },
    /// The record set lacks a collection the selected document needs.
    #[error("missing record collection for composition: {0}")]
    MissingRecords(String),
}

/// Selects which report template the composer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    BusinessRequirements,
    UatTestPlan,
    RiskMitigationPlan,
    TrendAnalysis,
}

impl DocumentKind {
    /// Fixed download filename for this document kind.
    pub fn filename(&self) -> &'static str {
        match self {
            DocumentKind::BusinessRequirements => "FNOL_Business_Requirements_Document.pdf",
            DocumentKind::UatTestPlan => "FNOL_UAT_Test_Plan.pdf",
            DocumentKind::RiskMitigationPlan => "FNOL_Risk_Mitigation_Plan.pdf",
            DocumentKind::TrendAnalysis => "FNOL_Data_Trend_Analysis.pdf",
        }
    }

    /// Document title, as rendered in the header band and info dictionary.
    pub fn title(&self) -> &'static str {
        match self {
            DocumentKind::BusinessRequirements => "Business Requirements Document",
            DocumentKind::UatTestPlan => "UAT Test Plan",
            DocumentKind::RiskMitigationPlan => "Risk Mitigation Plan",
            DocumentKind::TrendAnalysis => "Data Trend Analysis Report",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of a report composition.
///
/// Holds the complete PDF byte stream together with its fixed download
/// filename; bytes only exist after a fully successful layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use = "composed documents hold the rendered bytes and should be saved or sent"]
pub struct ComposedDocument {
    /// The PDF file contents.
    pub bytes: Vec<u8>,
    /// Fixed, document-kind-specific filename.
    pub filename: String,
    /// Number of produced pages.
    pub page_count: u32,
    /// Document title.
    pub title: String,
}

impl ComposedDocument {
    /// Base64 encoding of the PDF bytes, for JS/WASM hosts that trigger the
    /// browser download themselves.
    pub fn to_base64(&self) -> String {
        use base64::Engine as _;
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }
}

/// Stamp footers are already applied by the templates; this packs the page
/// streams into the final byte stream and result struct.
pub(crate) fn seal(
    canvas: canvas::PageCanvas,
    kind: DocumentKind,
    creator: &str,
) -> ComposedDocument {
    let page_count = canvas.page_count() as u32;
    let title = kind.title();
    let bytes = pdf::assemble(
        &canvas.into_pages(),
        &pdf::DocumentInfo {
            title,
            producer: PRODUCER,
            creator,
        },
    );
    ComposedDocument {
        bytes,
        filename: kind.filename().to_string(),
        page_count,
        title: title.to_string(),
    }
}
