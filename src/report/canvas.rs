//! Page canvas primitive
//!
//! A fixed-size A4 drawing surface producing one PDF content stream per
//! page. Coordinates are millimetres with the origin at the top-left corner
//! (the convention the dashboard's layout constants were written in); the
//! emitted operators are converted to PDF points with the Y axis flipped.
//!
//! The canvas owns the page streams; the write position is an explicit
//! [`Cursor`] value that drawing operations take and return, so section
//! renderers can be unit tested by asserting the cursor and page count they
//! produce.

use super::pdf::escape_text;

/// A4 portrait page width in millimetres.
pub const PAGE_WIDTH_MM: f64 = 210.0;
/// A4 portrait page height in millimetres.
pub const PAGE_HEIGHT_MM: f64 = 297.0;
/// Conversion factor from millimetres to PDF points.
pub const MM_TO_PT: f64 = 2.834_65;

/// Cursor reset position after a page break.
pub const TOP_MARGIN_MM: f64 = 20.0;
/// Content below this line triggers a page break.
pub const BOTTOM_LIMIT_MM: f64 = 277.0;

const FOOTER_Y_MM: f64 = 290.0;
const FOOTER_SIZE_PT: f64 = 8.0;

// Approximate Helvetica advance per character, as a fraction of the font
// size. Conservative so wrapped text always fits its column.
const CHAR_WIDTH_FACTOR: f64 = 0.45;
const MIN_WRAP_CHARS: usize = 10;

const TABLE_X_MM: f64 = 14.0;
const TABLE_WIDTH_MM: f64 = PAGE_WIDTH_MM - 28.0;
const CELL_PAD_X_MM: f64 = 2.0;
const CELL_PAD_Y_MM: f64 = 1.5;

/// An sRGB color, stored as 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // The dashboard's Tailwind palette, so documents match the app chrome.
    pub const SLATE_900: Rgb = Rgb::new(15, 23, 42);
    pub const SLATE_600: Rgb = Rgb::new(71, 85, 105);
    pub const SLATE_500: Rgb = Rgb::new(100, 116, 139);
    pub const SLATE_400: Rgb = Rgb::new(148, 163, 184);
    pub const SLATE_100: Rgb = Rgb::new(241, 245, 249);
    pub const SLATE_50: Rgb = Rgb::new(248, 250, 252);
    pub const RED_500: Rgb = Rgb::new(239, 68, 68);
    pub const AMBER_500: Rgb = Rgb::new(245, 158, 11);
    pub const AMBER_900: Rgb = Rgb::new(146, 64, 14);
    pub const AMBER_50: Rgb = Rgb::new(254, 243, 199);
    pub const EMERALD_500: Rgb = Rgb::new(16, 185, 129);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    fn fill_op(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3} rg\n",
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0
        )
    }

    fn stroke_op(&self) -> String {
        format!(
            "{:.3} {:.3} {:.3} RG\n",
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0
        )
    }
}

/// Font face; the document embeds the two standard Helvetica variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    fn resource(&self) -> &'static str {
        match self {
            FontFace::Regular => "/F1",
            FontFace::Bold => "/F2",
        }
    }
}

/// Face, size (points) and color for one text run.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    pub face: FontFace,
    pub size: f64,
    pub color: Rgb,
}

impl TextStyle {
    pub fn regular(size: f64, color: Rgb) -> Self {
        Self {
            face: FontFace::Regular,
            size,
            color,
        }
    }

    pub fn bold(size: f64, color: Rgb) -> Self {
        Self {
            face: FontFace::Bold,
            size,
            color,
        }
    }
}

/// Write position: a page index (0-based) and a Y offset from the page top
/// in millimetres. Copied and returned by drawing operations rather than
/// held as canvas state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub page: usize,
    pub y: f64,
}

/// One table cell; `tint` overrides the default body text color.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub tint: Option<Rgb>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tint: None,
        }
    }

    pub fn tinted(text: impl Into<String>, tint: Rgb) -> Self {
        Self {
            text: text.into(),
            tint: Some(tint),
        }
    }
}

/// A themed table: header row filled with the theme color, striped body
/// rows, per-cell word wrap.
#[derive(Debug, Clone)]
pub struct TableSpec {
    pub head: Vec<String>,
    pub body: Vec<Vec<Cell>>,
    pub head_fill: Rgb,
    /// Column widths in millimetres; equal split of the table width when
    /// absent or mismatched.
    pub col_widths: Option<Vec<f64>>,
    pub font_size: f64,
}

impl TableSpec {
    fn column_widths(&self) -> Vec<f64> {
        if self.head.is_empty() {
            return Vec::new();
        }
        match &self.col_widths {
            Some(widths) if widths.len() == self.head.len() => widths.clone(),
            _ => vec![TABLE_WIDTH_MM / self.head.len() as f64; self.head.len()],
        }
    }
}

/// The page stream builder described in the module docs.
#[derive(Debug)]
pub struct PageCanvas {
    pages: Vec<String>,
}

impl Default for PageCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCanvas {
    /// Create a canvas with a single empty page.
    pub fn new() -> Self {
        Self {
            pages: vec![String::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Append a fresh page and return a cursor at its top margin.
    pub fn new_page(&mut self) -> Cursor {
        self.pages.push(String::new());
        Cursor {
            page: self.pages.len() - 1,
            y: TOP_MARGIN_MM,
        }
    }

    /// Page break if `required_mm` of vertical space is not left above the
    /// bottom limit; otherwise the cursor is returned unchanged. Call this
    /// before any block that must not be split mid-item.
    pub fn ensure_space(&mut self, cursor: Cursor, required_mm: f64) -> Cursor {
        if cursor.y + required_mm > BOTTOM_LIMIT_MM {
            self.new_page()
        } else {
            cursor
        }
    }

    /// Filled rectangle; `y` is the top edge.
    pub fn fill_rect(&mut self, page: usize, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let op = format!(
            "q\n{}{:.2} {:.2} {:.2} {:.2} re f\nQ\n",
            color.fill_op(),
            x * MM_TO_PT,
            (PAGE_HEIGHT_MM - y - h) * MM_TO_PT,
            w * MM_TO_PT,
            h * MM_TO_PT
        );
        self.pages[page].push_str(&op);
    }

    /// Stroked rectangle outline; `y` is the top edge.
    pub fn stroke_rect(&mut self, page: usize, x: f64, y: f64, w: f64, h: f64, color: Rgb) {
        let op = format!(
            "q\n{}{:.2} {:.2} {:.2} {:.2} re S\nQ\n",
            color.stroke_op(),
            x * MM_TO_PT,
            (PAGE_HEIGHT_MM - y - h) * MM_TO_PT,
            w * MM_TO_PT,
            h * MM_TO_PT
        );
        self.pages[page].push_str(&op);
    }

    /// Single line of text at an absolute position; `y` is the baseline.
    pub fn text_at(&mut self, page: usize, x: f64, y: f64, text: &str, style: TextStyle) {
        let op = format!(
            "BT\n{} {:.1} Tf\n{}1 0 0 1 {:.2} {:.2} Tm\n({}) Tj\nET\n",
            style.face.resource(),
            style.size,
            style.color.fill_op(),
            x * MM_TO_PT,
            (PAGE_HEIGHT_MM - y) * MM_TO_PT,
            escape_text(text)
        );
        self.pages[page].push_str(&op);
    }

    /// Approximate rendered width of `text` in millimetres.
    pub fn text_width_mm(text: &str, size_pt: f64) -> f64 {
        text.chars().count() as f64 * size_pt * CHAR_WIDTH_FACTOR / MM_TO_PT
    }

    /// Greedy word wrap into lines that fit `max_width_mm` at `size_pt`.
    /// Always returns at least one (possibly empty) line.
    pub fn wrap(text: &str, max_width_mm: f64, size_pt: f64) -> Vec<String> {
        let max_chars =
            (((max_width_mm * MM_TO_PT) / (size_pt * CHAR_WIDTH_FACTOR)) as usize).max(MIN_WRAP_CHARS);

        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0usize;

        for word in text.split_whitespace() {
            let word_chars = word.chars().count();
            if current.is_empty() {
                current = word.to_string();
                current_chars = word_chars;
            } else if current_chars + 1 + word_chars <= max_chars {
                current.push(' ');
                current.push_str(word);
                current_chars += 1 + word_chars;
            } else {
                lines.push(current);
                current = word.to_string();
                current_chars = word_chars;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    /// Word-wrap `text` to `max_width_mm` and draw the wrapped lines
    /// starting at the cursor, `line_height_mm` apart. Returns the line
    /// count; the caller advances the cursor.
    pub fn write_text(
        &mut self,
        cursor: Cursor,
        x: f64,
        max_width_mm: f64,
        style: TextStyle,
        line_height_mm: f64,
        text: &str,
    ) -> usize {
        let lines = Self::wrap(text, max_width_mm, style.size);
        for (i, line) in lines.iter().enumerate() {
            self.text_at(cursor.page, x, cursor.y + i as f64 * line_height_mm, line, style);
        }
        lines.len()
    }

    /// Full-width colored band at the top of `page` with a white bold title
    /// and optional subtitle at fixed offsets. Does not move any cursor;
    /// bands are positioned absolutely.
    pub fn draw_header_band(
        &mut self,
        page: usize,
        color: Rgb,
        height_mm: f64,
        title: &str,
        subtitle: Option<&str>,
    ) {
        self.fill_rect(page, 0.0, 0.0, PAGE_WIDTH_MM, height_mm, color);
        self.text_at(page, 14.0, 18.0, title, TextStyle::bold(20.0, Rgb::WHITE));
        if let Some(subtitle) = subtitle {
            self.text_at(page, 14.0, 28.0, subtitle, TextStyle::regular(11.0, Rgb::WHITE));
        }
    }

    /// Render a themed table starting at the cursor and return the cursor
    /// just past its final row. Row heights depend on wrapping, so callers
    /// must use the returned cursor rather than assume a fixed height. Rows
    /// that do not fit the page break to a new one, where the header row is
    /// repeated.
    pub fn draw_table(&mut self, cursor: Cursor, table: &TableSpec) -> Cursor {
        let widths = table.column_widths();
        if widths.is_empty() {
            return cursor;
        }
        let line_h = table.font_size * CHAR_WIDTH_FACTOR;

        let head_wrapped: Vec<Vec<String>> = table
            .head
            .iter()
            .zip(&widths)
            .map(|(text, w)| Self::wrap(text, w - 2.0 * CELL_PAD_X_MM, table.font_size))
            .collect();
        let head_lines = head_wrapped.iter().map(Vec::len).max().unwrap_or(1);
        let head_h = head_lines as f64 * line_h + 2.0 * CELL_PAD_Y_MM;

        // Never leave a header row orphaned at the page bottom.
        let mut cursor = self.ensure_space(cursor, head_h + line_h + 2.0 * CELL_PAD_Y_MM);
        self.paint_row(
            cursor,
            &widths,
            &head_wrapped,
            FontFace::Bold,
            table.font_size,
            Some(table.head_fill),
            |_| Rgb::WHITE,
            head_h,
        );
        cursor.y += head_h;

        for (idx, row) in table.body.iter().enumerate() {
            let wrapped: Vec<Vec<String>> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| Self::wrap(&cell.text, w - 2.0 * CELL_PAD_X_MM, table.font_size))
                .collect();
            let row_lines = wrapped.iter().map(Vec::len).max().unwrap_or(1);
            let row_h = row_lines as f64 * line_h + 2.0 * CELL_PAD_Y_MM;

            if cursor.y + row_h > BOTTOM_LIMIT_MM {
                cursor = self.new_page();
                self.paint_row(
                    cursor,
                    &widths,
                    &head_wrapped,
                    FontFace::Bold,
                    table.font_size,
                    Some(table.head_fill),
                    |_| Rgb::WHITE,
                    head_h,
                );
                cursor.y += head_h;
            }

            let stripe = if idx % 2 == 1 {
                Some(Rgb::SLATE_50)
            } else {
                None
            };
            self.paint_row(
                cursor,
                &widths,
                &wrapped,
                FontFace::Regular,
                table.font_size,
                stripe,
                |col| row[col].tint.unwrap_or(Rgb::SLATE_900),
                row_h,
            );
            cursor.y += row_h;
        }
        cursor
    }

    #[allow(clippy::too_many_arguments)]
    fn paint_row<C: Fn(usize) -> Rgb>(
        &mut self,
        cursor: Cursor,
        widths: &[f64],
        cells: &[Vec<String>],
        face: FontFace,
        size: f64,
        fill: Option<Rgb>,
        color_for: C,
        row_h: f64,
    ) {
        if let Some(fill) = fill {
            let total: f64 = widths.iter().sum();
            self.fill_rect(cursor.page, TABLE_X_MM, cursor.y, total, row_h, fill);
        }
        let line_h = size * CHAR_WIDTH_FACTOR;
        let mut x = TABLE_X_MM;
        for (col, lines) in cells.iter().enumerate() {
            let style = TextStyle {
                face,
                size,
                color: color_for(col),
            };
            for (i, line) in lines.iter().enumerate() {
                if !line.is_empty() {
                    self.text_at(
                        cursor.page,
                        x + CELL_PAD_X_MM,
                        cursor.y + CELL_PAD_Y_MM + (i as f64 + 0.8) * line_h,
                        line,
                        style,
                    );
                }
            }
            x += widths[col];
        }
    }

    /// Write the centered footer line onto every produced page. Must be the
    /// last drawing call: pages added afterwards would carry no footer.
    pub fn stamp_footers<F: Fn(usize, usize) -> String>(&mut self, make_line: F) {
        let total = self.pages.len();
        for page in 0..total {
            let line = make_line(page + 1, total);
            let x = (PAGE_WIDTH_MM - Self::text_width_mm(&line, FOOTER_SIZE_PT)) / 2.0;
            self.text_at(
                page,
                x,
                FOOTER_Y_MM,
                &line,
                TextStyle::regular(FOOTER_SIZE_PT, Rgb::SLATE_400),
            );
        }
    }

    /// Consume the canvas and hand the raw page streams to the document
    /// assembler.
    pub fn into_pages(self) -> Vec<String> {
        self.pages
    }
}
