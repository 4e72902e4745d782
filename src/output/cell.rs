//! Cell values for report rows
//!
//! Hyperlinks are kept as structured values (text plus link target or link
//! spans). The destination's formula syntax is only produced on demand by
//! [`Cell::formula`].

use serde::{Deserialize, Serialize};

use super::utils::hyperlink_formula;

/// How the destination should interpret a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellFormat {
    Number,
    /// Stored verbatim, never interpreted as a number, date or formula.
    PlainText,
}

/// A hyperlink covering the characters `start..end` of a rich-text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSpan {
    pub start: usize,
    pub end: usize,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CellValue {
    Empty,
    Number { value: u64 },
    Text { text: String },
    /// Whole-cell hyperlink.
    Link { text: String, url: String },
    /// Text with per-substring hyperlinks.
    RichText { text: String, links: Vec<LinkSpan> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub format: CellFormat,
}

impl Cell {
    pub fn number(value: u64) -> Self {
        Self {
            value: CellValue::Number { value },
            format: CellFormat::Number,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text { text: text.into() },
            format: CellFormat::PlainText,
        }
    }

    pub fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            format: CellFormat::PlainText,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            value: CellValue::Link {
                text: text.into(),
                url: url.into(),
            },
            format: CellFormat::PlainText,
        }
    }

    pub fn rich_text(text: impl Into<String>, links: Vec<LinkSpan>) -> Self {
        Self {
            value: CellValue::RichText {
                text: text.into(),
                links,
            },
            format: CellFormat::PlainText,
        }
    }

    /// The text shown in the cell.
    pub fn display_text(&self) -> String {
        match &self.value {
            CellValue::Empty => String::new(),
            CellValue::Number { value } => value.to_string(),
            CellValue::Text { text } => text.clone(),
            CellValue::Link { text, .. } => text.clone(),
            CellValue::RichText { text, .. } => text.clone(),
        }
    }

    /// `=HYPERLINK(...)` formula for whole-cell links, with quotes escaped.
    pub fn formula(&self) -> Option<String> {
        match &self.value {
            CellValue::Link { text, url } => Some(hyperlink_formula(url, text)),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.value, CellValue::Empty)
    }
}
