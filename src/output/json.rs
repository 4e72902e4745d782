//! JSON workbook output
//!
//! A workbook file holds any number of named sheets. Writing a report replaces
//! one sheet and leaves the others untouched. Whole-cell links are stored
//! with their `=HYPERLINK(...)` formula next to the structured value.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::DestinationError;

use super::cell::Cell;
use super::writer::{HeaderRow, HeaderStyle, ReportWriter, Sheet};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Workbook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    sheets: BTreeMap<String, serde_json::Value>,
}

#[derive(Serialize)]
struct SheetRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    header: Option<&'a HeaderRow>,
    rows: Vec<RowRecord<'a>>,
}

#[derive(Serialize)]
struct RowRecord<'a> {
    row: usize,
    cells: Vec<CellRecord<'a>>,
}

#[derive(Serialize)]
struct CellRecord<'a> {
    #[serde(flatten)]
    cell: &'a Cell,
    #[serde(skip_serializing_if = "Option::is_none")]
    formula: Option<String>,
}

impl<'a> SheetRecord<'a> {
    fn from_sheet(sheet: &'a Sheet) -> Self {
        let rows = sheet
            .rows
            .iter()
            .map(|(&row, cells)| RowRecord {
                row,
                cells: cells
                    .iter()
                    .map(|cell| CellRecord {
                        cell,
                        formula: cell.formula(),
                    })
                    .collect(),
            })
            .collect();
        Self {
            header: sheet.header.as_ref(),
            rows,
        }
    }
}

/// Writes one sheet of a JSON workbook file.
///
/// Nothing touches the file until [`ReportWriter::finish`], so a run that
/// fails earlier leaves the previous workbook intact.
pub struct WorkbookWriter {
    path: PathBuf,
    workbook: Workbook,
    sheet: Sheet,
}

impl WorkbookWriter {
    /// Open `path` (created on finish if missing) and target `sheet_name`.
    pub fn open(path: &Path, sheet_name: &str) -> Result<Self, DestinationError> {
        let workbook = match fs::read_to_string(path) {
            Ok(content) => {
                serde_json::from_str(&content).map_err(|source| DestinationError::Format {
                    destination: path.display().to_string(),
                    source,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "starting new workbook");
                Workbook::default()
            }
            Err(source) => {
                return Err(DestinationError::Io {
                    destination: path.display().to_string(),
                    source,
                });
            }
        };

        if !workbook.sheets.contains_key(sheet_name) {
            warn!(sheet = sheet_name, path = %path.display(), "creating sheet");
        }

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
            sheet: Sheet::new(sheet_name),
        })
    }

    /// The sheet as written so far.
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    fn destination(&self) -> String {
        format!("{}#{}", self.path.display(), self.sheet.name)
    }
}

impl ReportWriter for WorkbookWriter {
    fn clear(&mut self) -> Result<(), DestinationError> {
        self.sheet.clear()
    }

    fn write_header_row(
        &mut self,
        labels: &[String],
        style: &HeaderStyle,
    ) -> Result<(), DestinationError> {
        self.sheet.write_header_row(labels, style)
    }

    fn write_row(&mut self, row_index: usize, cells: &[Cell]) -> Result<(), DestinationError> {
        self.sheet.write_row(row_index, cells)
    }

    fn finish(&mut self) -> Result<(), DestinationError> {
        let record = serde_json::to_value(SheetRecord::from_sheet(&self.sheet)).map_err(
            |source| DestinationError::Format {
                destination: self.destination(),
                source,
            },
        )?;
        self.workbook.sheets.insert(self.sheet.name.clone(), record);
        self.workbook.updated_at = Some(Utc::now());

        let json = serde_json::to_string_pretty(&self.workbook).map_err(|source| {
            DestinationError::Format {
                destination: self.destination(),
                source,
            }
        })?;
        fs::write(&self.path, json).map_err(|source| DestinationError::Io {
            destination: self.destination(),
            source,
        })
    }
}
