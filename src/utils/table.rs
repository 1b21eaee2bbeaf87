//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::{pad_left, pad_right, visible_width};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|cell| visible_width(cell))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render header, separator line (made of `separator`) and rows.
    pub fn render(&self, separator: &str) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push_str("  ");
        }
        out = out.trim_end().to_string();
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let sep = if separator.is_empty() { "-" } else { separator };
        out.push_str(&sep.repeat(total / visible_width(sep).max(1)));
        out.push('\n');

        // Rows
        for row in &self.rows {
            let mut line = String::new();
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let padded = match col.align {
                    Align::Left => pad_right(cell, *w),
                    Align::Right => pad_left(cell, *w),
                };
                line.push_str(&padded);
                line.push_str("  ");
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}
