//! Markdown output formatting
//!
//! This module provides `MarkdownWriter` which renders the report as a
//! Markdown table, with hyperlinks as inline links.

use std::io::{self, Write};

use crate::error::DestinationError;

use super::cell::{Cell, CellFormat, CellValue};
use super::utils::split_by_links;
use super::writer::{HeaderStyle, ReportWriter, Sheet};

/// Markdown table writer. The table is built on `finish`.
pub struct MarkdownWriter {
    sheet: Sheet,
    output: String,
}

impl MarkdownWriter {
    pub fn new(name: &str) -> Self {
        Self {
            sheet: Sheet::new(name),
            output: String::new(),
        }
    }

    /// Get the formatted output string.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Take ownership of the output string.
    pub fn into_output(self) -> String {
        self.output
    }

    fn format_table(&self) -> String {
        let mut out = String::new();
        let Some(ref header) = self.sheet.header else {
            return out;
        };

        out.push('|');
        for label in &header.labels {
            out.push(' ');
            out.push_str(&escape_text(label));
            out.push_str(" |");
        }
        out.push('\n');

        // Column alignment follows the first data row: numbers right-aligned
        let first_row = self.sheet.data_rows().next();
        out.push('|');
        for i in 0..header.labels.len() {
            let numeric = first_row
                .and_then(|row| row.get(i))
                .is_some_and(|cell| cell.format == CellFormat::Number);
            out.push_str(if numeric { " ---: |" } else { " --- |" });
        }
        out.push('\n');

        for row in self.sheet.data_rows() {
            out.push('|');
            for cell in row {
                out.push(' ');
                out.push_str(&format_cell(cell));
                out.push_str(" |");
            }
            out.push('\n');
        }
        out
    }
}

impl ReportWriter for MarkdownWriter {
    fn clear(&mut self) -> Result<(), DestinationError> {
        self.output.clear();
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
        self.output = self.format_table();
        Ok(())
    }
}

fn format_cell(cell: &Cell) -> String {
    match &cell.value {
        CellValue::Empty => String::new(),
        CellValue::Number { value } => value.to_string(),
        CellValue::Text { text } => escape_text(text),
        CellValue::Link { text, url } => format_link(text, url),
        CellValue::RichText { text, links } => split_by_links(text, links)
            .into_iter()
            .map(|(segment, url)| match url {
                Some(url) => format_link(&segment, url),
                None => escape_text(&segment),
            })
            .collect(),
    }
}

fn format_link(text: &str, url: &str) -> String {
    format!("[{}]({})", escape_text(text), escape_url(url))
}

/// Escape characters that would break a table cell or a link label.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '|' | '[' | ']' | '\\' | '*' | '_' | '`' => {
                out.push('\\');
                out.push(c);
            }
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}

fn escape_url(url: &str) -> String {
    url.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace('|', "%7C")
}

/// Print markdown output to stdout.
pub fn print_markdown(writer: &MarkdownWriter) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(writer.output().as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::cell::LinkSpan;

    fn write(rows: Vec<Vec<Cell>>) -> String {
        let mut writer = MarkdownWriter::new("Index");
        writer.clear().unwrap();
        writer
            .write_header_row(
                &["No.".to_string(), "Type".to_string(), "File Path".to_string()],
                &HeaderStyle::default(),
            )
            .unwrap();
        for (i, row) in rows.iter().enumerate() {
            writer.write_row(i + 2, row).unwrap();
        }
        writer.finish().unwrap();
        writer.into_output()
    }

    #[test]
    fn test_table_layout() {
        let output = write(vec![vec![
            Cell::number(1),
            Cell::text("File"),
            Cell::link("a.txt", "https://x/a"),
        ]]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "| No. | Type | File Path |");
        assert_eq!(lines[1], "| ---: | --- | --- |");
        assert_eq!(lines[2], "| 1 | File | [a.txt](https://x/a) |");
    }

    #[test]
    fn test_rich_text_links_each_segment() {
        let path = Cell::rich_text(
            "A > B",
            vec![
                LinkSpan {
                    start: 0,
                    end: 1,
                    url: "ua".to_string(),
                },
                LinkSpan {
                    start: 4,
                    end: 5,
                    url: "ub".to_string(),
                },
            ],
        );
        let output = write(vec![vec![Cell::number(1), Cell::text("File"), path]]);
        assert!(output.contains("[A](ua) > [B](ub)"), "output: {}", output);
    }

    #[test]
    fn test_escapes_pipes_and_brackets() {
        let output = write(vec![vec![
            Cell::number(1),
            Cell::text("a|b"),
            Cell::link("[draft]", "https://x/a b"),
        ]]);
        assert!(output.contains(r"a\|b"));
        assert!(output.contains(r"[\[draft\]](https://x/a%20b)"));
    }

    #[test]
    fn test_empty_without_header() {
        let mut writer = MarkdownWriter::new("Index");
        writer.finish().unwrap();
        assert_eq!(writer.output(), "");
    }
}
