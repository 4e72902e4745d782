//! Report rendering and destinations
//!
//! This module turns sorted path entries into rows and writes them out:
//! - Console output with a highlighted header
//! - JSON workbook output
//! - Markdown output
//!
//! # Module Structure
//!
//! - `cell` - Structured cell values (numbers, text, links, rich text)
//! - `render` - Column schemas and row construction
//! - `writer` - The `ReportWriter` trait and the in-memory `Sheet`
//! - `console` - Aligned table for the terminal
//! - `json` - Named sheets in a JSON workbook file
//! - `markdown` - Markdown table output
//! - `utils` - Shared helpers (formula escaping, link segments)

mod cell;
mod console;
mod json;
mod markdown;
mod render;
mod utils;
mod writer;

pub use cell::{Cell, CellFormat, CellValue, LinkSpan};
pub use console::ConsoleWriter;
pub use json::WorkbookWriter;
pub use markdown::{MarkdownWriter, print_markdown};
pub use render::{DIRECTORY_LABEL, FILE_LABEL, RenderedReport, Schema, render};
pub use writer::{Alignment, HEADER_ROW, HeaderRow, HeaderStyle, ReportWriter, Sheet};

pub use utils::{escape_quotes, hyperlink_formula, split_by_links};
