//! Report composition tests
//!
//! Exercises the composed PDF byte streams: the content streams are
//! uncompressed, so rendered text can be asserted on directly.

use chrono::NaiveDate;
use claims_reporting_sdk::models::{
    Brd, BrdSection, Claim, ClaimStatus, Defect, DefectSeverity, DefectStatus, Rating, Risk,
    RiskStatus, TestScript, TestStatus, TrendData, UseCase,
};
use claims_reporting_sdk::report::{
    Authorship, ComposedDocument, DocumentComposer, DocumentKind, RecordSet, ReportError,
};
use uuid::Uuid;

fn sample_brd() -> Brd {
    Brd {
        title: "Business Requirements Document".to_string(),
        version: "1.0".to_string(),
        date: "January 2026".to_string(),
        project: "Auto Claims FNOL Workflow Automation".to_string(),
        sections: vec![
            BrdSection {
                title: "1. Executive Summary".to_string(),
                content: Some(
                    "This document outlines the business requirements for implementing an \
                     automated routing system for auto insurance claims."
                        .to_string(),
                ),
                requirements: None,
            },
            BrdSection {
                title: "2. Business Objectives".to_string(),
                content: None,
                requirements: Some(vec![
                    "Reduce average ticket resolution time by 40%".to_string(),
                    "Achieve 85%+ automatic routing success rate".to_string(),
                    "Decrease call center escalation rate to below 15%".to_string(),
                ]),
            },
        ],
    }
}

fn sample_use_case(n: u32) -> UseCase {
    UseCase {
        id: format!("UC-{n:03}"),
        title: "Low-Risk Claim Auto-Approval".to_string(),
        actor: "Policyholder".to_string(),
        precondition: "Policyholder has an active auto insurance policy".to_string(),
        scenario: format!("scenario-text-{n}"),
        postcondition: format!("expected-result-{n}"),
        success_criteria: "No manual intervention required".to_string(),
    }
}

fn sample_script(n: u32, status: TestStatus) -> TestScript {
    TestScript {
        script_id: format!("UAT-{n:03}"),
        title: "Auto-Route Windshield Claim".to_string(),
        description: "Verify windshield claims are automatically routed".to_string(),
        steps: vec![
            "Log in as Call Center Rep".to_string(),
            "Input mock claim data for a broken windshield".to_string(),
            "Submit the claim".to_string(),
        ],
        expected_result: "Claim is automatically assigned to Glass Repair queue".to_string(),
        status,
        tested_by: Some("QA Team".to_string()),
        tested_date: NaiveDate::from_ymd_opt(2024, 11, 18),
        notes: None,
    }
}

fn sample_defect(n: u32) -> Defect {
    Defect {
        defect_id: format!("DEF-{n:03}"),
        title: "Regional Assignment Exceeds SLA".to_string(),
        description: "Adjuster assignment taking 5+ minutes instead of 2 minute SLA".to_string(),
        severity: DefectSeverity::High,
        status: DefectStatus::InProgress,
        reported_by: "Operations Team".to_string(),
        reported_date: NaiveDate::from_ymd_opt(2024, 11, 20).unwrap(),
        assigned_to: Some("Development Team".to_string()),
        resolved_date: None,
        test_script_id: Some("UAT-004".to_string()),
    }
}

fn sample_risk(n: u32) -> Risk {
    Risk {
        risk_id: format!("RISK-{n:03}"),
        title: "Automated System Downtime".to_string(),
        description: "The automated routing system may experience unplanned downtime during peak hours".to_string(),
        probability: Rating::Medium,
        impact: Rating::High,
        status: RiskStatus::Active,
        mitigation_steps: vec![
            "Implement redundant routing servers".to_string(),
            "Set up real-time monitoring alerts".to_string(),
            "Create automated failover procedures".to_string(),
        ],
        contingency_plan: "Immediately activate manual routing queue. Notify all call center staff.".to_string(),
        owner: "IT Operations".to_string(),
    }
}

fn sample_claim(n: u32, status: ClaimStatus, claim_type: &str, region: &str) -> Claim {
    Claim {
        id: Uuid::nil(),
        claim_number: format!("CLM-2024-{:05}", 1000 + n),
        policyholder: "James Smith".to_string(),
        policy_number: "POL-100001".to_string(),
        date_filed: NaiveDate::from_ymd_opt(2024, 11, 1 + (n % 28)).unwrap(),
        claim_type: claim_type.to_string(),
        status,
        amount: 1500.0 + n as f64,
        auto_routed: n % 5 != 0,
        zip_code: "10001".to_string(),
        region: region.to_string(),
        adjuster_assigned: None,
        resolution_time_hours: (status == ClaimStatus::Closed).then_some(24.0),
        risk_level: Rating::Low,
    }
}

fn sample_claims() -> Vec<Claim> {
    vec![
        sample_claim(1, ClaimStatus::Open, "Collision", "Northeast"),
        sample_claim(2, ClaimStatus::Closed, "Windshield", "West"),
        sample_claim(3, ClaimStatus::Closed, "Theft", "Midwest"),
        sample_claim(4, ClaimStatus::Escalated, "Collision", "Northeast"),
        sample_claim(5, ClaimStatus::InReview, "Liability", "Southeast"),
    ]
}

fn pdf_text(doc: &ComposedDocument) -> String {
    String::from_utf8_lossy(&doc.bytes).into_owned()
}

/// Split the PDF into its per-page content streams, in page order.
/// Splits on "\nstream\n" because "endstream" itself ends in "stream".
fn page_streams(doc: &ComposedDocument) -> Vec<String> {
    let text = pdf_text(doc);
    text.split("\nstream\n")
        .skip(1)
        .filter_map(|chunk| chunk.split("\nendstream").next().map(str::to_string))
        .collect()
}

mod idempotence_tests {
    use super::*;

    #[test]
    fn test_brd_composition_is_byte_identical() {
        let composer = DocumentComposer::new();
        let brd = sample_brd();
        let use_cases = vec![sample_use_case(1), sample_use_case(2)];
        let first = composer.compose_brd(&brd, &use_cases).unwrap();
        let second = composer.compose_brd(&brd, &use_cases).unwrap();
        assert_eq!(first.bytes, second.bytes);
    }

    #[test]
    fn test_analytics_composition_is_byte_identical() {
        let composer = DocumentComposer::new();
        let claims = sample_claims();
        let trend = TrendData::from_claims(&claims);
        let first = composer.compose_analytics(&claims, &trend).unwrap();
        let second = composer.compose_analytics(&claims, &trend).unwrap();
        assert_eq!(first.bytes, second.bytes);
    }

    #[test]
    fn test_uat_and_risk_compositions_are_byte_identical() {
        let composer = DocumentComposer::new();
        let scripts = vec![sample_script(1, TestStatus::Pass)];
        let defects = vec![sample_defect(1)];
        let risks = vec![sample_risk(1)];
        assert_eq!(
            composer.compose_uat_plan(&scripts, &defects).unwrap().bytes,
            composer.compose_uat_plan(&scripts, &defects).unwrap().bytes
        );
        assert_eq!(
            composer.compose_risk_plan(&risks).unwrap().bytes,
            composer.compose_risk_plan(&risks).unwrap().bytes
        );
    }
}

mod pagination_tests {
    use super::*;

    #[test]
    fn test_page_count_grows_with_content() {
        let composer = DocumentComposer::new();
        let brd = sample_brd();
        let few = composer
            .compose_brd(&brd, &[sample_use_case(1)])
            .unwrap();
        let use_cases: Vec<UseCase> = (1..=24).map(sample_use_case).collect();
        let many = composer.compose_brd(&brd, &use_cases).unwrap();
        assert!(many.page_count > few.page_count);
        assert!(many.page_count >= 6);
    }

    #[test]
    fn test_use_case_cards_are_atomic() {
        let composer = DocumentComposer::new();
        let use_cases: Vec<UseCase> = (1..=24).map(sample_use_case).collect();
        let doc = composer.compose_brd(&sample_brd(), &use_cases).unwrap();
        let pages = page_streams(&doc);
        assert_eq!(pages.len() as u32, doc.page_count);

        // Each card's header and its expected-result body land on the same
        // page: the card is never split across a boundary.
        for n in 1..=24u32 {
            let header = format!("UC-{n:03}:");
            let result = format!("expected-result-{n}");
            let holding: Vec<usize> = pages
                .iter()
                .enumerate()
                .filter(|(_, p)| p.contains(&header))
                .map(|(i, _)| i)
                .collect();
            assert_eq!(holding.len(), 1, "card {header} on exactly one page");
            assert!(pages[holding[0]].contains(&result), "card {header} intact");
        }
    }

    #[test]
    fn test_long_test_script_table_repeats_header() {
        let composer = DocumentComposer::new();
        let scripts: Vec<TestScript> = (1..=80).map(|n| sample_script(n, TestStatus::Pass)).collect();
        let doc = composer.compose_uat_plan(&scripts, &[]).unwrap();
        // Table overflow pages carry the header row again.
        assert!(doc.page_count > 2);
        let pages = page_streams(&doc);
        assert!(pages[1].contains("(Tested By)"));
    }
}

mod computation_tests {
    use super::*;

    #[test]
    fn test_pass_rate_rendered_for_mixed_statuses() {
        let composer = DocumentComposer::new();
        let scripts = vec![
            sample_script(1, TestStatus::Pass),
            sample_script(2, TestStatus::Pass),
            sample_script(3, TestStatus::Fail),
            sample_script(4, TestStatus::NotStarted),
        ];
        let doc = composer.compose_uat_plan(&scripts, &[]).unwrap();
        let text = pdf_text(&doc);
        assert!(text.contains("Pass Rate: 50%"));
        assert!(text.contains("Total Test Scripts: 4"));
        assert!(text.contains("Passed: 2  |  Failed: 1  |  Not Started: 1"));
    }

    #[test]
    fn test_pass_rate_zero_scripts_renders_zero() {
        let composer = DocumentComposer::new();
        let doc = composer.compose_uat_plan(&[], &[]).unwrap();
        let text = pdf_text(&doc);
        assert!(text.contains("Pass Rate: 0%"));
    }

    #[test]
    fn test_percentages_with_no_claims_never_nan() {
        let composer = DocumentComposer::new();
        // Trend rows exist but the claim set is empty: every percentage
        // cell must fall back to 0.0% instead of NaN.
        let claims = sample_claims();
        let trend = TrendData::from_claims(&claims);
        let doc = composer.compose_analytics(&[], &trend).unwrap();
        let text = pdf_text(&doc);
        assert!(!text.contains("NaN"));
        assert!(!text.contains("inf"));
        assert!(text.contains("0.0%"));
    }

    #[test]
    fn test_percentages_sum_over_partition() {
        let composer = DocumentComposer::new();
        let claims = sample_claims();
        let trend = TrendData::from_claims(&claims);
        let doc = composer.compose_analytics(&claims, &trend).unwrap();
        let text = pdf_text(&doc);
        // 2 of 5 claims are Collision.
        assert!(text.contains("40.0%"));
    }
}

mod footer_tests {
    use super::*;

    fn assert_footers(doc: &ComposedDocument, prefix: &str) {
        let pages = page_streams(doc);
        assert_eq!(pages.len() as u32, doc.page_count);
        for (i, page) in pages.iter().enumerate() {
            let expected = format!("{prefix} | Page {} of {}", i + 1, doc.page_count);
            assert!(
                page.contains(&expected),
                "page {} missing footer {expected:?}",
                i + 1
            );
        }
    }

    #[test]
    fn test_author_footer_on_every_brd_page() {
        let composer = DocumentComposer::new();
        let use_cases: Vec<UseCase> = (1..=10).map(sample_use_case).collect();
        let doc = composer.compose_brd(&sample_brd(), &use_cases).unwrap();
        assert!(doc.page_count > 2);
        assert_footers(&doc, "Sai Tarun Reddy | saitarunreddymittapalli@gmail.com");
    }

    #[test]
    fn test_system_footer_on_risk_and_analytics_documents() {
        let composer = DocumentComposer::new();
        let risks: Vec<Risk> = (1..=6).map(sample_risk).collect();
        let doc = composer.compose_risk_plan(&risks).unwrap();
        assert_footers(&doc, "MAPFRE FNOL System - Risk Plan");

        let claims = sample_claims();
        let trend = TrendData::from_claims(&claims);
        let doc = composer.compose_analytics(&claims, &trend).unwrap();
        assert_footers(&doc, "MAPFRE FNOL System - Analytics Report");
    }

    #[test]
    fn test_custom_authorship_flows_into_footer() {
        let composer = DocumentComposer::with_authorship(Authorship {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            ..Default::default()
        });
        let doc = composer
            .compose_uat_plan(&[sample_script(1, TestStatus::Pass)], &[])
            .unwrap();
        assert_footers(&doc, "Jane Doe | jane@example.com");
    }
}

mod empty_collection_tests {
    use super::*;

    #[test]
    fn test_zero_defects_renders_placeholder() {
        let composer = DocumentComposer::new();
        let doc = composer
            .compose_uat_plan(&[sample_script(1, TestStatus::Pass)], &[])
            .unwrap();
        let text = pdf_text(&doc);
        assert!(text.contains("Defect Register"));
        assert!(text.contains("No defects logged."));
    }

    #[test]
    fn test_zero_risks_renders_header_only() {
        let composer = DocumentComposer::new();
        let doc = composer.compose_risk_plan(&[]).unwrap();
        assert_eq!(doc.page_count, 1);
        assert!(pdf_text(&doc).contains("Risk Mitigation Plan"));
    }

    #[test]
    fn test_empty_trend_renders_table_headers_only() {
        let composer = DocumentComposer::new();
        let doc = composer
            .compose_analytics(&[], &TrendData::default())
            .unwrap();
        let text = pdf_text(&doc);
        assert!(text.contains("Claims by Day of Week"));
        assert!(text.contains("Claims by Region"));
    }
}

mod ordering_tests {
    use super::*;

    #[test]
    fn test_table_rows_keep_input_order() {
        let composer = DocumentComposer::new();
        // Deliberately unsorted severities; the register must not re-sort.
        let mut defects = vec![sample_defect(3), sample_defect(1), sample_defect(2)];
        defects[0].severity = DefectSeverity::Low;
        defects[1].severity = DefectSeverity::Critical;
        let doc = composer
            .compose_uat_plan(&[sample_script(1, TestStatus::Pass)], &defects)
            .unwrap();
        let text = pdf_text(&doc);
        let p3 = text.find("DEF-003").unwrap();
        let p1 = text.find("DEF-001").unwrap();
        let p2 = text.find("DEF-002").unwrap();
        assert!(p3 < p1 && p1 < p2);
    }

    #[test]
    fn test_pivot_rows_keep_input_order() {
        let composer = DocumentComposer::new();
        let claims = vec![
            sample_claim(1, ClaimStatus::Open, "Windshield", "West"),
            sample_claim(2, ClaimStatus::Open, "Collision", "Northeast"),
        ];
        let trend = TrendData::from_claims(&claims);
        let doc = composer.compose_analytics(&claims, &trend).unwrap();
        let text = pdf_text(&doc);
        assert!(text.find("Windshield").unwrap() < text.find("Collision").unwrap());
    }
}

mod error_tests {
    use super::*;

    #[test]
    fn test_risk_without_mitigation_steps_aborts() {
        let composer = DocumentComposer::new();
        let mut risk = sample_risk(1);
        risk.mitigation_steps.clear();
        let err = composer.compose_risk_plan(&[risk]).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRecord { .. }));
    }

    #[test]
    fn test_claim_with_nan_amount_aborts() {
        let composer = DocumentComposer::new();
        let mut claims = sample_claims();
        claims[0].amount = f64::NAN;
        let trend = TrendData::default();
        let err = composer.compose_analytics(&claims, &trend).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRecord { .. }));
    }

    #[test]
    fn test_blank_script_id_aborts() {
        let composer = DocumentComposer::new();
        let mut script = sample_script(1, TestStatus::Pass);
        script.script_id = String::new();
        let err = composer.compose_uat_plan(&[script], &[]).unwrap_err();
        assert!(err.to_string().contains("script_id"));
    }
}

mod dispatch_tests {
    use super::*;

    fn full_record_set() -> RecordSet {
        let claims = sample_claims();
        let trend = TrendData::from_claims(&claims);
        RecordSet {
            brd: Some(sample_brd()),
            use_cases: vec![sample_use_case(1)],
            test_scripts: vec![sample_script(1, TestStatus::Pass)],
            defects: vec![sample_defect(1)],
            risks: vec![sample_risk(1)],
            claims,
            trend: Some(trend),
        }
    }

    #[test]
    fn test_compose_dispatches_to_fixed_filenames() {
        let composer = DocumentComposer::new();
        let records = full_record_set();
        let expectations = [
            (
                DocumentKind::BusinessRequirements,
                "FNOL_Business_Requirements_Document.pdf",
            ),
            (DocumentKind::UatTestPlan, "FNOL_UAT_Test_Plan.pdf"),
            (DocumentKind::RiskMitigationPlan, "FNOL_Risk_Mitigation_Plan.pdf"),
            (DocumentKind::TrendAnalysis, "FNOL_Data_Trend_Analysis.pdf"),
        ];
        for (kind, filename) in expectations {
            let doc = composer.compose(kind, &records).unwrap();
            assert_eq!(doc.filename, filename);
            assert_eq!(doc.title, kind.title());
            assert!(doc.page_count >= 1);
        }
    }

    #[test]
    fn test_compose_without_brd_fails() {
        let composer = DocumentComposer::new();
        let mut records = full_record_set();
        records.brd = None;
        let err = composer
            .compose(DocumentKind::BusinessRequirements, &records)
            .unwrap_err();
        assert!(matches!(err, ReportError::MissingRecords(_)));
    }
}

/// Generate sample PDFs for visual inspection.
/// Run with: cargo test generate_sample_documents_for_inspection -- --ignored --nocapture
#[test]
#[ignore]
fn generate_sample_documents_for_inspection() {
    let composer = DocumentComposer::new();
    let claims = sample_claims();
    let trend = TrendData::from_claims(&claims);
    let records = RecordSet {
        brd: Some(sample_brd()),
        use_cases: (1..=3).map(sample_use_case).collect(),
        test_scripts: (1..=8)
            .map(|n| sample_script(n, TestStatus::Pass))
            .collect(),
        defects: vec![sample_defect(1), sample_defect(2)],
        risks: (1..=3).map(sample_risk).collect(),
        claims,
        trend: Some(trend),
    };

    // Keep the directory around so the PDFs can actually be opened.
    let dir = tempfile::tempdir().unwrap().into_path();
    for kind in [
        DocumentKind::BusinessRequirements,
        DocumentKind::UatTestPlan,
        DocumentKind::RiskMitigationPlan,
        DocumentKind::TrendAnalysis,
    ] {
        let doc = composer.compose(kind, &records).unwrap();
        let path = dir.join(&doc.filename);
        std::fs::write(&path, &doc.bytes).unwrap();
        println!("Wrote {} ({} bytes)", path.display(), doc.bytes.len());
    }
}
