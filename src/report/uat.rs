//! UAT Test Plan template
//!
//! Test summary with client-side pass/fail counts and pass rate, the test
//! script table, then a fresh page with the defect register and the
//! escalation protocol. An empty defect register renders a placeholder
//! line instead of an empty table.

use super::canvas::{Cell, Cursor, PAGE_WIDTH_MM, PageCanvas, Rgb, TableSpec, TextStyle};
use super::composer::Authorship;
use super::{ComposedDocument, DocumentKind, PROJECT_LINE, ReportError, seal};
use crate::models::{Defect, TestScript, TestStatus};
use crate::validation;

const LINE_MM: f64 = 5.0;

const ESCALATION_PROTOCOL: [&str; 3] = [
    "1. Log the Defect: Create detailed ticket with reproduction steps, expected vs actual results, screenshots",
    "2. Assign Severity: Critical (System down), High (Major function broken), Medium/Low (Minor issues)",
    "3. Escalate: Critical defects escalate to Development Lead immediately. Track exposure until resolved.",
];

pub(crate) fn render(
    test_scripts: &[TestScript],
    defects: &[Defect],
    who: &Authorship,
) -> Result<ComposedDocument, ReportError> {
    validation::validate_test_scripts(test_scripts)?;
    validation::validate_defects(defects)?;

    let mut canvas = PageCanvas::new();

    canvas.fill_rect(0, 0.0, 0.0, PAGE_WIDTH_MM, 42.0, Rgb::SLATE_900);
    canvas.text_at(
        0,
        14.0,
        16.0,
        DocumentKind::UatTestPlan.title(),
        TextStyle::bold(20.0, Rgb::WHITE),
    );
    canvas.text_at(0, 14.0, 26.0, PROJECT_LINE, TextStyle::regular(11.0, Rgb::WHITE));
    canvas.text_at(
        0,
        14.0,
        38.0,
        &format!("Prepared by: {} | {}", who.name, who.title),
        TextStyle::regular(9.0, Rgb::WHITE),
    );

    let mut cursor = Cursor { page: 0, y: 55.0 };
    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y,
        "Test Summary",
        TextStyle::bold(14.0, Rgb::SLATE_900),
    );
    cursor.y += 10.0;

    let passed = count_status(test_scripts, TestStatus::Pass);
    let failed = count_status(test_scripts, TestStatus::Fail);
    let not_started = count_status(test_scripts, TestStatus::NotStarted);

    let body = TextStyle::regular(10.0, Rgb::SLATE_900);
    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y,
        &format!("Total Test Scripts: {}", test_scripts.len()),
        body,
    );
    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y + 6.0,
        &format!("Passed: {passed}  |  Failed: {failed}  |  Not Started: {not_started}"),
        body,
    );
    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y + 12.0,
        &format!("Pass Rate: {}%", pass_rate(test_scripts)),
        body,
    );
    cursor.y += 25.0;

    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y,
        "Test Scripts",
        TextStyle::bold(12.0, Rgb::SLATE_900),
    );
    cursor.y += 5.0;

    let scripts_table = TableSpec {
        head: ["ID", "Title", "Steps", "Status", "Tested By", "Date"]
            .iter()
            .map(|h| h.to_string())
            .collect(),
        body: test_scripts
            .iter()
            .map(|script| {
                vec![
                    Cell::plain(script.script_id.as_str()),
                    Cell::plain(script.title.as_str()),
                    Cell::plain(format!("{} steps", script.steps.len())),
                    Cell::tinted(script.status.to_string(), script.status.color()),
                    Cell::plain(script.tested_by.as_deref().unwrap_or("-")),
                    Cell::plain(
                        script
                            .tested_date
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    ),
                ]
            })
            .collect(),
        head_fill: Rgb::SLATE_900,
        col_widths: Some(vec![20.0, 50.0, 20.0, 25.0, 30.0, 25.0]),
        font_size: 8.0,
    };
    canvas.draw_table(cursor, &scripts_table);

    // Defect register on its own page.
    let mut cursor = canvas.new_page();
    canvas.fill_rect(cursor.page, 0.0, 0.0, PAGE_WIDTH_MM, 25.0, Rgb::RED_500);
    canvas.text_at(
        cursor.page,
        14.0,
        16.0,
        "Defect Register",
        TextStyle::bold(16.0, Rgb::WHITE),
    );
    cursor.y = 35.0;

    if defects.is_empty() {
        canvas.text_at(
            cursor.page,
            14.0,
            cursor.y,
            "No defects logged.",
            TextStyle::regular(10.0, Rgb::SLATE_900),
        );
        cursor.y += 10.0;
    } else {
        let defects_table = TableSpec {
            head: ["ID", "Title", "Severity", "Status", "Reported By", "Date"]
                .iter()
                .map(|h| h.to_string())
                .collect(),
            body: defects
                .iter()
                .map(|defect| {
                    vec![
                        Cell::plain(defect.defect_id.as_str()),
                        Cell::plain(defect.title.as_str()),
                        Cell::tinted(defect.severity.to_string(), defect.severity.color()),
                        Cell::tinted(defect.status.to_string(), defect.status.color()),
                        Cell::plain(defect.reported_by.as_str()),
                        Cell::plain(defect.reported_date.format("%Y-%m-%d").to_string()),
                    ]
                })
                .collect(),
            head_fill: Rgb::RED_500,
            col_widths: None,
            font_size: 8.0,
        };
        cursor = canvas.draw_table(cursor, &defects_table);
    }

    cursor.y += 20.0;
    cursor = canvas.ensure_space(cursor, 30.0);
    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y,
        "Defect Escalation Protocol",
        TextStyle::bold(12.0, Rgb::SLATE_900),
    );
    cursor.y += 8.0;

    for step in ESCALATION_PROTOCOL {
        cursor = canvas.ensure_space(cursor, 12.0);
        let lines = canvas.write_text(
            cursor,
            14.0,
            PAGE_WIDTH_MM - 28.0,
            TextStyle::regular(9.0, Rgb::SLATE_600),
            LINE_MM,
            step,
        );
        cursor.y += lines as f64 * LINE_MM + 5.0;
    }

    canvas.stamp_footers(|page, total| {
        format!("{} | {} | Page {} of {}", who.name, who.email, page, total)
    });

    Ok(seal(canvas, DocumentKind::UatTestPlan, &who.name))
}

fn count_status(test_scripts: &[TestScript], status: TestStatus) -> usize {
    test_scripts.iter().filter(|s| s.status == status).count()
}

/// Percentage of passed scripts, rounded to the nearest whole number; 0
/// when no scripts exist.
fn pass_rate(test_scripts: &[TestScript]) -> u32 {
    if test_scripts.is_empty() {
        return 0;
    }
    let passed = count_status(test_scripts, TestStatus::Pass);
    (passed as f64 / test_scripts.len() as f64 * 100.0).round() as u32
}
