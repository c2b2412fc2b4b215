//! Business Requirements Document template
//!
//! Header band with document metadata, the ordered BRD sections (narrative
//! text and/or bulleted requirements), then a fresh page with one card per
//! use case. Requirement bullets break per item; a use-case card is treated
//! as one atomic block.

use super::canvas::{Cursor, PAGE_WIDTH_MM, PageCanvas, Rgb, TextStyle};
use super::composer::Authorship;
use super::{ComposedDocument, DocumentKind, ReportError, seal};
use crate::models::{Brd, UseCase};
use crate::validation;

const LINE_MM: f64 = 5.0;
// Space checked before a section heading, a requirement bullet, and a
// use-case card respectively.
const SECTION_BLOCK_MM: f64 = 27.0;
const BULLET_BLOCK_MM: f64 = 7.0;
const CARD_BLOCK_MM: f64 = 57.0;

pub(crate) fn render(
    brd: &Brd,
    use_cases: &[UseCase],
    who: &Authorship,
) -> Result<ComposedDocument, ReportError> {
    validation::validate_brd(brd)?;
    validation::validate_use_cases(use_cases)?;

    let mut canvas = PageCanvas::new();

    // 45mm header band with project, version and author lines.
    canvas.fill_rect(0, 0.0, 0.0, PAGE_WIDTH_MM, 45.0, Rgb::SLATE_900);
    canvas.text_at(
        0,
        14.0,
        18.0,
        DocumentKind::BusinessRequirements.title(),
        TextStyle::bold(22.0, Rgb::WHITE),
    );
    canvas.text_at(0, 14.0, 28.0, &brd.project, TextStyle::regular(12.0, Rgb::WHITE));
    canvas.text_at(
        0,
        14.0,
        35.0,
        &format!("Version {} | {}", brd.version, brd.date),
        TextStyle::regular(12.0, Rgb::WHITE),
    );
    canvas.text_at(
        0,
        14.0,
        42.0,
        &format!("Prepared by: {} | {}", who.name, who.title),
        TextStyle::regular(9.0, Rgb::WHITE),
    );

    let mut cursor = Cursor { page: 0, y: 60.0 };

    for section in &brd.sections {
        cursor = canvas.ensure_space(cursor, SECTION_BLOCK_MM);
        canvas.text_at(
            cursor.page,
            14.0,
            cursor.y,
            &section.title,
            TextStyle::bold(14.0, Rgb::SLATE_900),
        );
        cursor.y += 8.0;

        if let Some(content) = &section.content {
            let lines = canvas.write_text(
                cursor,
                14.0,
                PAGE_WIDTH_MM - 28.0,
                TextStyle::regular(10.0, Rgb::SLATE_600),
                LINE_MM,
                content,
            );
            cursor.y += lines as f64 * LINE_MM + 8.0;
        }

        if let Some(requirements) = &section.requirements {
            for requirement in requirements {
                cursor = canvas.ensure_space(cursor, BULLET_BLOCK_MM);
                let lines = canvas.write_text(
                    cursor,
                    18.0,
                    PAGE_WIDTH_MM - 32.0,
                    TextStyle::regular(10.0, Rgb::SLATE_600),
                    LINE_MM,
                    &format!("\u{2022} {requirement}"),
                );
                cursor.y += lines as f64 * LINE_MM + 3.0;
            }
            cursor.y += 5.0;
        }

        cursor.y += 5.0;
    }

    // Use cases always start on their own page under a slim banner.
    let mut cursor = canvas.new_page();
    canvas.fill_rect(cursor.page, 0.0, 0.0, PAGE_WIDTH_MM, 25.0, Rgb::SLATE_900);
    canvas.text_at(
        cursor.page,
        14.0,
        16.0,
        "Use Cases",
        TextStyle::bold(18.0, Rgb::WHITE),
    );
    cursor.y = 40.0;

    for use_case in use_cases {
        cursor = canvas.ensure_space(cursor, CARD_BLOCK_MM);

        canvas.fill_rect(
            cursor.page,
            14.0,
            cursor.y - 6.0,
            PAGE_WIDTH_MM - 28.0,
            12.0,
            Rgb::SLATE_100,
        );
        canvas.text_at(
            cursor.page,
            18.0,
            cursor.y,
            &format!("{}: {}", use_case.id, use_case.title),
            TextStyle::bold(12.0, Rgb::SLATE_900),
        );
        cursor.y += 12.0;

        canvas.text_at(
            cursor.page,
            14.0,
            cursor.y,
            "Actor:",
            TextStyle::bold(10.0, Rgb::SLATE_900),
        );
        canvas.text_at(
            cursor.page,
            30.0,
            cursor.y,
            &use_case.actor,
            TextStyle::regular(10.0, Rgb::SLATE_900),
        );
        cursor.y += 8.0;

        cursor = labeled_block(&mut canvas, cursor, "Precondition:", &use_case.precondition, Rgb::SLATE_600);
        cursor = labeled_block(&mut canvas, cursor, "Scenario:", &use_case.scenario, Rgb::SLATE_600);
        cursor = labeled_block(
            &mut canvas,
            cursor,
            "Expected Result:",
            &use_case.postcondition,
            Rgb::EMERALD_500,
        );
        cursor.y += 10.0;
    }

    canvas.stamp_footers(|page, total| {
        format!("{} | {} | Page {} of {}", who.name, who.email, page, total)
    });

    Ok(seal(canvas, DocumentKind::BusinessRequirements, &who.name))
}

/// Bold label line followed by indented wrapped body text.
fn labeled_block(
    canvas: &mut PageCanvas,
    mut cursor: Cursor,
    label: &str,
    text: &str,
    color: Rgb,
) -> Cursor {
    canvas.text_at(
        cursor.page,
        14.0,
        cursor.y,
        label,
        TextStyle::bold(10.0, Rgb::SLATE_900),
    );
    cursor.y += 5.0;
    let lines = canvas.write_text(
        cursor,
        18.0,
        PAGE_WIDTH_MM - 32.0,
        TextStyle::regular(10.0, color),
        LINE_MM,
        text,
    );
    cursor.y += lines as f64 * LINE_MM + 5.0;
    cursor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_brd(section_count: usize) -> Brd {
        Brd {
            title: "Business Requirements Document".to_string(),
            version: "1.0".to_string(),
            date: "January 2026".to_string(),
            project: "Auto Claims FNOL Workflow Automation".to_string(),
            sections: (0..section_count)
                .map(|i| crate::models::BrdSection {
                    title: format!("{}. Section", i + 1),
                    content: Some("Narrative content describing the section scope.".to_string()),
                    requirements: Some(vec![
                        "Requirement line one".to_string(),
                        "Requirement line two".to_string(),
                    ]),
                })
                .collect(),
        }
    }

    #[test]
    fn test_use_cases_start_on_fresh_page() {
        let doc = render(&sample_brd(1), &[], &Authorship::default()).unwrap();
        assert_eq!(doc.page_count, 2);
    }

    #[test]
    fn test_many_sections_paginate() {
        let doc = render(&sample_brd(20), &[], &Authorship::default()).unwrap();
        assert!(doc.page_count > 2);
    }

    #[test]
    fn test_section_with_neither_content_nor_requirements() {
        let mut brd = sample_brd(1);
        brd.sections[0].content = None;
        brd.sections[0].requirements = None;
        assert!(render(&brd, &[], &Authorship::default()).is_ok());
    }
}
