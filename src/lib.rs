//! Claims Reporting SDK - Shared library for claims-operations reporting
//!
//! Provides unified interfaces for:
//! - Domain records (claims, test scripts, defects, risks, BRD content)
//! - Client-side trend and KPI analytics
//! - Deterministic PDF report composition (BRD, UAT plan, risk plan,
//!   trend analysis)
//! - Record validation

pub mod analytics;
pub mod models;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use analytics::KpiMetrics;
pub use models::{
    Brd, BrdSection, Claim, ClaimStatus, Defect, DefectSeverity, DefectStatus, Rating, Risk,
    RiskStatus, TestScript, TestStatus, TrendData, UseCase,
};
pub use report::{
    Authorship, ComposedDocument, DocumentComposer, DocumentKind, RecordSet, ReportError,
};
