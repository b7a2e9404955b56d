//! Two-column table widget.
//!
//! Left column is left-aligned, right column right-aligned; widths are
//! computed with `unicode-width` so non-ASCII product names line up.

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::border::BorderChar;
use crate::ui::primitives::text::ColoredText;

const COLUMN_GAP: usize = 2;

#[derive(Debug, Clone)]
pub struct Table {
    left_header: String,
    right_header: String,
    rows: Vec<(String, String)>,
}

impl Table {
    pub fn new(left_header: impl Into<String>, right_header: impl Into<String>) -> Self {
        Self {
            left_header: left_header.into(),
            right_header: right_header.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, left: impl Into<String>, right: impl Into<String>) {
        self.rows.push((left.into(), right.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let left_width = self
            .rows
            .iter()
            .map(|(l, _)| l.width())
            .chain([self.left_header.width()])
            .max()
            .unwrap_or(0);
        let right_width = self
            .rows
            .iter()
            .map(|(_, r)| r.width())
            .chain([self.right_header.width()])
            .max()
            .unwrap_or(0);

        let mut out = String::new();

        out.push_str(
            &ColoredText::plain(pad_right(&self.left_header, left_width))
                .bold()
                .render(supports_color),
        );
        out.push_str(&" ".repeat(COLUMN_GAP));
        out.push_str(
            &ColoredText::plain(pad_left(&self.right_header, right_width))
                .bold()
                .render(supports_color),
        );
        out.push('\n');

        let rule = BorderChar::Horizontal
            .render(supports_unicode)
            .repeat(left_width + COLUMN_GAP + right_width);
        out.push_str(&ColoredText::dim(rule).render(supports_color));
        out.push('\n');

        for (left, right) in &self.rows {
            out.push_str(&pad_right(left, left_width));
            out.push_str(&" ".repeat(COLUMN_GAP));
            out.push_str(&pad_left(right, right_width));
            out.push('\n');
        }

        out
    }
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}
