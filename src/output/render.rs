//! Row rendering: sorted entries to report rows
//!
//! Two column layouts are supported:
//!
//! - `Schema::Delimited`: `No.`, `Type`, `MIME Type`, `File Path`, `File Name`
//! - `Schema::PerLevel`: `No.`, `Type`, `MIME Type`, `Full Path`, then
//!   `Path (Level 0)` up to the longest route in the run

use std::fmt;
use std::str::FromStr;

use crate::source::Node;
use crate::tree::{PathEntry, join_names};

use super::cell::{Cell, LinkSpan};
use super::utils::char_len;

pub const FILE_LABEL: &str = "File";
pub const DIRECTORY_LABEL: &str = "Directory";

const COMMON_HEADERS: [&str; 3] = ["No.", "Type", "MIME Type"];

/// Column layout of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schema {
    /// One joined path column with a link per segment, plus the file name.
    #[default]
    Delimited,
    /// A joined path column plus one column per depth level.
    PerLevel,
}

impl Schema {
    pub fn name(&self) -> &'static str {
        match self {
            Schema::Delimited => "delimited",
            Schema::PerLevel => "per-level",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Schema {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delimited" => Ok(Schema::Delimited),
            "per-level" | "per_level" | "levels" => Ok(Schema::PerLevel),
            other => Err(format!(
                "unknown schema '{}' (expected 'delimited' or 'per-level')",
                other
            )),
        }
    }
}

/// Header labels and data rows, ready for a writer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl RenderedReport {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}

/// Render `entries` (already sorted) under `schema`.
pub fn render(entries: &[PathEntry], separator: &str, schema: Schema) -> RenderedReport {
    match schema {
        Schema::Delimited => render_delimited(entries, separator),
        Schema::PerLevel => render_per_level(entries, separator),
    }
}

fn render_delimited(entries: &[PathEntry], separator: &str) -> RenderedReport {
    let mut header: Vec<String> = COMMON_HEADERS.iter().map(|s| s.to_string()).collect();
    header.push("File Path".to_string());
    header.push("File Name".to_string());

    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let node = entry.node();
            let mut row = common_cells(i, node);
            row.push(linked_path(entry.full_route(), separator));
            row.push(Cell::link(node.name(), node.url()));
            row
        })
        .collect();

    RenderedReport { header, rows }
}

fn render_per_level(entries: &[PathEntry], separator: &str) -> RenderedReport {
    let levels = entries
        .iter()
        .map(|e| e.full_route().len())
        .max()
        .unwrap_or(0);

    let mut header: Vec<String> = COMMON_HEADERS.iter().map(|s| s.to_string()).collect();
    header.push("Full Path".to_string());
    header.extend((0..levels).map(|level| format!("Path (Level {})", level)));

    let rows = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let node = entry.node();
            let route = entry.full_route();
            let mut row = common_cells(i, node);
            row.push(Cell::link(join_names(route, separator), node.url()));
            row.extend(route.iter().map(|n| Cell::link(n.name(), n.url())));
            row.resize(4 + levels, Cell::empty());
            row
        })
        .collect();

    RenderedReport { header, rows }
}

/// `No.`, `Type` and `MIME Type` cells for the entry at sorted position `index`.
fn common_cells(index: usize, node: &Node) -> Vec<Cell> {
    let type_label = if node.is_file() {
        FILE_LABEL
    } else {
        DIRECTORY_LABEL
    };
    let mime_type = match node.mime_type() {
        Some(mime) => Cell::text(mime),
        None => Cell::empty(),
    };
    vec![Cell::number(index as u64 + 1), Cell::text(type_label), mime_type]
}

/// Route names joined by `separator`, each name linked to its own node.
fn linked_path(route: &[Node], separator: &str) -> Cell {
    let separator_len = char_len(separator);
    let mut links = Vec::with_capacity(route.len());
    let mut start = 0;
    for node in route {
        let end = start + char_len(node.name());
        links.push(LinkSpan {
            start,
            end,
            url: node.url().to_string(),
        });
        start = end + separator_len;
    }
    Cell::rich_text(join_names(route, separator), links)
}
