//! Risk Mitigation Plan template
//!
//! One card per risk: header strip with the probability/impact/status badge
//! line, description, check-marked mitigation steps, contingency plan, and
//! owner. The card header is one atomic block; mitigation steps break per
//! item.

use super::canvas::{Cursor, PAGE_WIDTH_MM, PageCanvas, Rgb, TextStyle};
use super::composer::Authorship;
use super::{ComposedDocument, DocumentKind, PROJECT_LINE, ReportError, seal};
use crate::models::Risk;
use crate::validation;

const LINE_MM: f64 = 5.0;
const STEP_LINE_MM: f64 = 4.0;
// Space checked before a risk card and before each mitigation step.
const CARD_BLOCK_MM: f64 = 77.0;
const STEP_BLOCK_MM: f64 = 8.0;

pub(crate) fn render(risks: &[Risk], who: &Authorship) -> Result<ComposedDocument, ReportError> {
    validation::validate_risks(risks)?;

    let mut canvas = PageCanvas::new();
    canvas.fill_rect(0, 0.0, 0.0, PAGE_WIDTH_MM, 35.0, Rgb::AMBER_500);
    canvas.text_at(
        0,
        14.0,
        18.0,
        DocumentKind::RiskMitigationPlan.title(),
        TextStyle::bold(20.0, Rgb::WHITE),
    );
    canvas.text_at(0, 14.0, 28.0, PROJECT_LINE, TextStyle::regular(11.0, Rgb::WHITE));

    let mut cursor = Cursor { page: 0, y: 50.0 };

    for risk in risks {
        cursor = canvas.ensure_space(cursor, CARD_BLOCK_MM);

        canvas.fill_rect(
            cursor.page,
            14.0,
            cursor.y - 6.0,
            PAGE_WIDTH_MM - 28.0,
            14.0,
            Rgb::SLATE_100,
        );
        canvas.text_at(
            cursor.page,
            18.0,
            cursor.y,
            &format!("{}: {}", risk.risk_id, risk.title),
            TextStyle::bold(12.0, Rgb::SLATE_900),
        );

        // Badge line; each enum value is drawn in its mapped color.
        let badge_y = cursor.y + 6.0;
        let mut x = 18.0;
        x = badge(&mut canvas, cursor.page, x, badge_y, "P: ", &risk.probability.to_string(), risk.probability.color());
        x = badge(&mut canvas, cursor.page, x, badge_y, "  |  I: ", &risk.impact.to_string(), risk.impact.color());
        badge(&mut canvas, cursor.page, x, badge_y, "  |  Status: ", &risk.status.to_string(), risk.status.color());
        cursor.y += 18.0;

        let lines = canvas.write_text(
            cursor,
            14.0,
            PAGE_WIDTH_MM - 28.0,
            TextStyle::regular(10.0, Rgb::SLATE_600),
            LINE_MM,
            &risk.description,
        );
        cursor.y += lines as f64 * LINE_MM + 8.0;

        canvas.text_at(
            cursor.page,
            14.0,
            cursor.y,
            "Mitigation Steps:",
            TextStyle::bold(10.0, Rgb::SLATE_900),
        );
        cursor.y += 6.0;

        for step in &risk.mitigation_steps {
            cursor = canvas.ensure_space(cursor, STEP_BLOCK_MM);
            let lines = canvas.write_text(
                cursor,
                18.0,
                PAGE_WIDTH_MM - 36.0,
                TextStyle::regular(10.0, Rgb::EMERALD_500),
                STEP_LINE_MM,
                &format!("\u{2713} {step}"),
            );
            cursor.y += lines as f64 * STEP_LINE_MM + 2.0;
        }
        cursor.y += 5.0;

        canvas.text_at(
            cursor.page,
            14.0,
            cursor.y,
            "Contingency Plan:",
            TextStyle::bold(10.0, Rgb::RED_500),
        );
        cursor.y += 6.0;
        let lines = canvas.write_text(
            cursor,
            14.0,
            PAGE_WIDTH_MM - 28.0,
            TextStyle::regular(10.0, Rgb::RED_500),
            LINE_MM,
            &risk.contingency_plan,
        );
        cursor.y += lines as f64 * LINE_MM + 8.0;

        canvas.text_at(
            cursor.page,
            14.0,
            cursor.y,
            &format!("Owner: {}", risk.owner),
            TextStyle::regular(9.0, Rgb::SLATE_500),
        );
        cursor.y += 15.0;
    }

    canvas.stamp_footers(|page, total| {
        format!("{} - Risk Plan | Page {} of {}", who.system_label, page, total)
    });

    Ok(seal(canvas, DocumentKind::RiskMitigationPlan, &who.name))
}

/// Draw one `label` + colored `value` badge segment; returns the X where
/// the next segment starts.
fn badge(
    canvas: &mut PageCanvas,
    page: usize,
    x: f64,
    y: f64,
    label: &str,
    value: &str,
    color: Rgb,
) -> f64 {
    canvas.text_at(page, x, y, label, TextStyle::bold(8.0, Rgb::SLATE_900));
    let x = x + PageCanvas::text_width_mm(label, 8.0);
    canvas.text_at(page, x, y, value, TextStyle::bold(8.0, color));
    x + PageCanvas::text_width_mm(value, 8.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Rating, RiskStatus};

    fn sample_risk(id: &str) -> Risk {
        Risk {
            risk_id: id.to_string(),
            title: "Automated System Downtime".to_string(),
            description: "The automated routing system may experience unplanned downtime during peak hours".to_string(),
            probability: Rating::Medium,
            impact: Rating::High,
            status: RiskStatus::Active,
            mitigation_steps: vec![
                "Implement redundant routing servers".to_string(),
                "Set up real-time monitoring alerts".to_string(),
            ],
            contingency_plan: "Immediately activate manual routing queue.".to_string(),
            owner: "IT Operations".to_string(),
        }
    }

    #[test]
    fn test_single_risk_fits_one_page() {
        let doc = render(&[sample_risk("RISK-001")], &Authorship::default()).unwrap();
        assert_eq!(doc.page_count, 1);
    }

    #[test]
    fn test_many_risks_paginate() {
        let risks: Vec<Risk> = (0..8).map(|i| sample_risk(&format!("RISK-{:03}", i + 1))).collect();
        let doc = render(&risks, &Authorship::default()).unwrap();
        assert!(doc.page_count > 1);
    }

    #[test]
    fn test_risk_without_mitigation_steps_is_rejected() {
        let mut risk = sample_risk("RISK-001");
        risk.mitigation_steps.clear();
        let err = render(&[risk], &Authorship::default()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRecord { .. }));
    }
}
