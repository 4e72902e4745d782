//! Console table output
//!
//! This module provides `ConsoleWriter` which prints the report as an aligned
//! table, with the header row highlighted when color is enabled.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::DestinationError;

use super::cell::{Cell, CellFormat};
use super::utils::{center, char_len};
use super::writer::{Alignment, HeaderStyle, ReportWriter, Sheet};

const COLUMN_GAP: &str = "  ";

/// Aligned table writer. Column widths depend on every row, so the table is
/// printed on `finish`.
pub struct ConsoleWriter<W: WriteColor> {
    out: W,
    sheet: Sheet,
}

impl ConsoleWriter<StandardStream> {
    pub fn stdout(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            sheet: Sheet::new("console"),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .sheet
            .header
            .as_ref()
            .map(|h| h.labels.iter().map(|l| char_len(l)).collect())
            .unwrap_or_default();

        for row in self.sheet.data_rows() {
            if row.len() > widths.len() {
                widths.resize(row.len(), 0);
            }
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(char_len(&cell.display_text()));
            }
        }
        widths
    }

    fn print_table(&mut self) -> io::Result<()> {
        let widths = self.column_widths();

        if let Some(header) = self.sheet.header.clone() {
            let mut spec = ColorSpec::new();
            spec.set_bold(true)
                .set_fg(Some(Color::Black))
                .set_bg(Some(background_color(&header.style.background)));
            self.out.set_color(&spec)?;

            let cells: Vec<String> = header
                .labels
                .iter()
                .zip(&widths)
                .map(|(label, &width)| match header.style.alignment {
                    Alignment::Center => center(label, width),
                    Alignment::Left => format!("{:<width$}", label, width = width),
                })
                .collect();
            write!(self.out, "{}", cells.join(COLUMN_GAP))?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        for row in self.sheet.rows.values() {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| pad_cell(cell, width))
                .collect();
            writeln!(self.out, "{}", cells.join(COLUMN_GAP).trim_end())?;
        }
        self.out.flush()
    }
}

impl<W: WriteColor> ReportWriter for ConsoleWriter<W> {
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
        self.print_table().map_err(|source| DestinationError::Io {
            destination: "stdout".to_string(),
            source,
        })
    }
}

fn pad_cell(cell: &Cell, width: usize) -> String {
    let text = cell.display_text();
    match cell.format {
        CellFormat::Number => format!("{:>width$}", text, width = width),
        CellFormat::PlainText => format!("{:<width$}", text, width = width),
    }
}

/// Terminal color for a header background name.
fn background_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "orange" => Color::Rgb(255, 165, 0),
        "yellow" => Color::Yellow,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "cyan" => Color::Cyan,
        "red" => Color::Red,
        "magenta" => Color::Magenta,
        _ => Color::White,
    }
}
