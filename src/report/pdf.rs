//! Low-level PDF document assembly
//!
//! Takes the per-page content streams produced by the canvas and writes a
//! complete PDF 1.4 file: catalog, page tree, uncompressed content streams,
//! the two standard Helvetica fonts (WinAnsi encoded), info dictionary,
//! cross-reference table and trailer.
//!
//! The info dictionary deliberately carries no creation date: composing the
//! same records twice must yield byte-identical output.

use super::canvas::{MM_TO_PT, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};

/// Metadata written to the PDF info dictionary.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DocumentInfo<'a> {
    pub title: &'a str,
    pub producer: &'a str,
    pub creator: &'a str,
}

/// Assemble the final PDF byte stream from finished page content streams.
pub(crate) fn assemble(pages: &[String], info: &DocumentInfo<'_>) -> Vec<u8> {
    let width_pt = PAGE_WIDTH_MM * MM_TO_PT;
    let height_pt = PAGE_HEIGHT_MM * MM_TO_PT;
    let page_count = pages.len();

    // Fixed object numbering: 1 catalog, 2 page tree, then a page/content
    // object pair per page, then the two fonts and the info dictionary.
    let font_base = 3 + 2 * page_count;
    let info_id = font_base + 2;

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets: Vec<usize> = Vec::with_capacity(info_id);

    offsets.push(out.len());
    out.extend_from_slice(b"1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

    let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();
    offsets.push(out.len());
    out.extend(
        format!(
            "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
            kids.join(" "),
            page_count
        )
        .into_bytes(),
    );

    for (i, stream) in pages.iter().enumerate() {
        let page_id = 3 + 2 * i;
        let content_id = page_id + 1;

        offsets.push(out.len());
        out.extend(
            format!(
                "{} 0 obj\n<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] /Contents {} 0 R /Resources << /Font << /F1 {} 0 R /F2 {} 0 R >> >> >>\nendobj\n",
                page_id,
                width_pt,
                height_pt,
                content_id,
                font_base,
                font_base + 1
            )
            .into_bytes(),
        );

        offsets.push(out.len());
        out.extend(
            format!(
                "{} 0 obj\n<< /Length {} >>\nstream\n{}\nendstream\nendobj\n",
                content_id,
                stream.len(),
                stream
            )
            .into_bytes(),
        );
    }

    offsets.push(out.len());
    out.extend(
        format!(
            "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>\nendobj\n",
            font_base
        )
        .into_bytes(),
    );
    offsets.push(out.len());
    out.extend(
        format!(
            "{} 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>\nendobj\n",
            font_base + 1
        )
        .into_bytes(),
    );

    offsets.push(out.len());
    out.extend(
        format!(
            "{} 0 obj\n<< /Title ({}) /Producer ({}) /Creator ({}) >>\nendobj\n",
            info_id,
            escape_text(info.title),
            escape_text(info.producer),
            escape_text(info.creator)
        )
        .into_bytes(),
    );

    let xref_at = out.len();
    out.extend(format!("xref\n0 {}\n", offsets.len() + 1).into_bytes());
    out.extend_from_slice(b"0000000000 65535 f \n");
    for offset in &offsets {
        out.extend(format!("{offset:010} 00000 n \n").into_bytes());
    }
    out.extend(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            info_id,
            xref_at
        )
        .into_bytes(),
    );

    out
}

/// Escape text for a PDF literal string under WinAnsi encoding.
///
/// Non-ASCII characters without a WinAnsi octal mapping are replaced with
/// `?` rather than emitting bytes the encoding cannot represent.
pub(crate) fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '•' => out.push_str("\\267"),
            // WinAnsi has no check mark; render it as a bullet.
            '✓' => out.push_str("\\267"),
            '©' => out.push_str("\\251"),
            '–' => out.push_str("\\226"),
            '—' => out.push_str("\\227"),
            _ if c.is_ascii() => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> DocumentInfo<'static> {
        DocumentInfo {
            title: "Test Document",
            producer: "Claims Reporting SDK",
            creator: "QA Team",
        }
    }

    #[test]
    fn test_assemble_structure() {
        let pages = vec!["BT\n/F1 10.0 Tf\nET\n".to_string(), String::new()];
        let bytes = assemble(&pages, &info());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-1.4"));
        assert!(text.ends_with("%%EOF\n"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/BaseFont /Helvetica-Bold"));
        assert!(text.contains("(Test Document)"));
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let pages = vec!["(hello) Tj\n".to_string()];
        assert_eq!(assemble(&pages, &info()), assemble(&pages, &info()));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("Hello"), "Hello");
        assert_eq!(escape_text("(test)"), "\\(test\\)");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
        assert_eq!(escape_text("✓ done"), "\\267 done");
        assert_eq!(escape_text("naïve"), "na?ve");
    }
}
