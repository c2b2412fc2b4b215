//! Record validation
//!
//! Validates the record collections before any document layout starts, so a
//! malformed record aborts composition while no bytes exist yet. Empty
//! collections are fine everywhere; what is rejected is a record whose
//! identity fields are blank, a risk without mitigation steps, or a claim
//! with a non-finite amount.

use crate::models::{Brd, Claim, Defect, Risk, TestScript, UseCase};
use crate::report::ReportError;

fn require_field(
    record: &str,
    id: &str,
    field: &str,
    value: &str,
) -> Result<(), ReportError> {
    if value.trim().is_empty() {
        return Err(ReportError::MalformedRecord {
            record: record.to_string(),
            id: id.to_string(),
            reason: format!("{field} must not be blank"),
        });
    }
    Ok(())
}

pub fn validate_brd(brd: &Brd) -> Result<(), ReportError> {
    require_field("brd", &brd.project, "title", &brd.title)?;
    require_field("brd", &brd.title, "project", &brd.project)?;
    require_field("brd", &brd.project, "version", &brd.version)?;
    for section in &brd.sections {
        require_field("brd section", &brd.project, "title", &section.title)?;
    }
    Ok(())
}

pub fn validate_use_cases(use_cases: &[UseCase]) -> Result<(), ReportError> {
    for use_case in use_cases {
        require_field("use case", &use_case.id, "id", &use_case.id)?;
        require_field("use case", &use_case.id, "title", &use_case.title)?;
    }
    Ok(())
}

pub fn validate_test_scripts(test_scripts: &[TestScript]) -> Result<(), ReportError> {
    for script in test_scripts {
        require_field("test script", &script.script_id, "script_id", &script.script_id)?;
        require_field("test script", &script.script_id, "title", &script.title)?;
    }
    Ok(())
}

pub fn validate_defects(defects: &[Defect]) -> Result<(), ReportError> {
    for defect in defects {
        require_field("defect", &defect.defect_id, "defect_id", &defect.defect_id)?;
        require_field("defect", &defect.defect_id, "title", &defect.title)?;
    }
    Ok(())
}

pub fn validate_risks(risks: &[Risk]) -> Result<(), ReportError> {
    for risk in risks {
        require_field("risk", &risk.risk_id, "risk_id", &risk.risk_id)?;
        require_field("risk", &risk.risk_id, "title", &risk.title)?;
        if risk.mitigation_steps.is_empty() {
            return Err(ReportError::MalformedRecord {
                record: "risk".to_string(),
                id: risk.risk_id.clone(),
                reason: "mitigation_steps must not be empty".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_claims(claims: &[Claim]) -> Result<(), ReportError> {
    for claim in claims {
        require_field("claim", &claim.claim_number, "claim_number", &claim.claim_number)?;
        if !claim.amount.is_finite() {
            return Err(ReportError::MalformedRecord {
                record: "claim".to_string(),
                id: claim.claim_number.clone(),
                reason: format!("amount is not a finite number: {}", claim.amount),
            });
        }
        if let Some(hours) = claim.resolution_time_hours
            && !hours.is_finite()
        {
            return Err(ReportError::MalformedRecord {
                record: "claim".to_string(),
                id: claim.claim_number.clone(),
                reason: format!("resolution_time_hours is not a finite number: {hours}"),
            });
        }
    }
    Ok(())
}
