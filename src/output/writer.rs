//! Report destinations
//!
//! A `ReportWriter` persists rows the renderer already computed; it makes no
//! decisions about content. Row indices are 1-based sheet rows: the header is
//! row 1 and data starts at row 2.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::DestinationError;

use super::cell::Cell;

/// Row index of the header.
pub const HEADER_ROW: usize = 1;

/// Horizontal alignment of header labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
}

/// Styling that sets the header row apart from data rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderStyle {
    pub background: String,
    pub alignment: Alignment,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            background: "orange".to_string(),
            alignment: Alignment::Center,
        }
    }
}

/// A destination sheet.
pub trait ReportWriter {
    /// Remove all existing content.
    fn clear(&mut self) -> Result<(), DestinationError>;

    fn write_header_row(
        &mut self,
        labels: &[String],
        style: &HeaderStyle,
    ) -> Result<(), DestinationError>;

    fn write_row(&mut self, row_index: usize, cells: &[Cell]) -> Result<(), DestinationError>;

    /// Persist buffered content. Called once after the last row.
    fn finish(&mut self) -> Result<(), DestinationError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRow {
    pub labels: Vec<String>,
    pub style: HeaderStyle,
}

/// In-memory sheet. Also the model other writers render from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderRow>,
    #[serde(default)]
    pub rows: BTreeMap<usize, Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn row(&self, row_index: usize) -> Option<&[Cell]> {
        self.rows.get(&row_index).map(Vec::as_slice)
    }

    /// Data rows in sheet order, without their indices.
    pub fn data_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.values().map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.rows.is_empty()
    }
}

impl ReportWriter for Sheet {
    fn clear(&mut self) -> Result<(), DestinationError> {
        self.header = None;
        self.rows.clear();
        Ok(())
    }

    fn write_header_row(
        &mut self,
        labels: &[String],
        style: &HeaderStyle,
    ) -> Result<(), DestinationError> {
        self.header = Some(HeaderRow {
            labels: labels.to_vec(),
            style: style.clone(),
        });
        Ok(())
    }

    fn write_row(&mut self, row_index: usize, cells: &[Cell]) -> Result<(), DestinationError> {
        self.rows.insert(row_index, cells.to_vec());
        Ok(())
    }
}
