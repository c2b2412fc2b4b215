//! Models module for the SDK
//!
//! Defines the claims-operations domain records consumed by the report
//! composer and the analytics module. Records arrive pre-deserialized from
//! the dashboard backend's REST endpoints; the SDK never mutates them.

pub mod brd;
pub mod claim;
pub mod defect;
pub mod enums;
pub mod risk;
pub mod test_script;
pub mod trend;
pub mod use_case;

pub use brd::{Brd, BrdSection};
pub use claim::{Claim, ClaimStatus};
pub use defect::{Defect, DefectSeverity, DefectStatus};
pub use enums::Rating;
pub use risk::{Risk, RiskStatus};
pub use test_script::{TestScript, TestStatus};
pub use trend::{DayCount, RegionCount, StatusCount, TimelinePoint, TrendData, TypeCount};
pub use use_case::UseCase;
