//! Index generation: one full run from root to destination
//!
//! A run collects entries below the root, renders them under the configured
//! schema and rewrites the destination sheet from scratch. Nothing is kept
//! between runs.

use tracing::info;

use crate::error::{DestinationError, Result};
use crate::options::IndexOptions;
use crate::output::{HEADER_ROW, HeaderStyle, RenderedReport, ReportWriter, render};
use crate::source::{Node, NodeSource};
use crate::tree::collect;

/// Counts describing a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexSummary {
    pub entries: usize,
    pub files: usize,
    pub folders: usize,
    pub columns: usize,
}

/// Index the tree under `root` into `writer`.
///
/// Traversal finishes before the destination is touched, so a listing
/// failure leaves the writer as it was.
pub fn generate<S, W>(
    source: &S,
    writer: &mut W,
    root: &Node,
    options: &IndexOptions,
) -> Result<IndexSummary>
where
    S: NodeSource + ?Sized,
    W: ReportWriter + ?Sized,
{
    options.validate()?;
    info!(
        root = root.name(),
        max_depth = options.max_depth,
        schema = %options.schema,
        "indexing"
    );

    let entries = collect(
        source,
        root,
        &options.walker_config(),
        &options.path_separator,
    )?;
    let files = entries.iter().filter(|e| e.node().is_file()).count();
    let summary = IndexSummary {
        entries: entries.len(),
        files,
        folders: entries.len() - files,
        columns: 0,
    };

    let report = render(&entries, &options.path_separator, options.schema);
    write_report(writer, &report)?;

    let summary = IndexSummary {
        columns: report.column_count(),
        ..summary
    };
    info!(
        entries = summary.entries,
        files = summary.files,
        folders = summary.folders,
        "index written"
    );
    Ok(summary)
}

/// Resolve `options.root` (or `default_root` when unset) and generate.
pub fn run<S, W>(
    source: &S,
    writer: &mut W,
    default_root: &str,
    options: &IndexOptions,
) -> Result<IndexSummary>
where
    S: NodeSource + ?Sized,
    W: ReportWriter + ?Sized,
{
    let reference = options.root.as_deref().unwrap_or(default_root);
    let root = source.resolve(reference)?;
    generate(source, writer, &root, options)
}

/// Clear the destination, then write the header and every row in order.
pub fn write_report<W: ReportWriter + ?Sized>(
    writer: &mut W,
    report: &RenderedReport,
) -> Result<(), DestinationError> {
    writer.clear()?;
    writer.write_header_row(&report.header, &HeaderStyle::default())?;
    for (i, row) in report.rows.iter().enumerate() {
        writer.write_row(HEADER_ROW + 1 + i, row)?;
    }
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::output::{Cell, Schema, Sheet};
    use crate::source::{ManifestNode, MemorySource};
    use crate::test_utils::{chain_tree, sample_tree};

    fn index(source: &MemorySource, options: &IndexOptions) -> (Sheet, IndexSummary) {
        let mut sheet = Sheet::new("Document Index");
        let summary = generate(source, &mut sheet, source.root(), options).unwrap();
        (sheet, summary)
    }

    fn link_text(cell: &Cell) -> String {
        cell.display_text()
    }

    fn paths(sheet: &Sheet) -> Vec<String> {
        sheet.data_rows().map(|row| link_text(&row[3])).collect()
    }

    #[test]
    fn test_full_index() {
        let source = MemorySource::new(sample_tree());
        let (sheet, summary) = index(&source, &IndexOptions::default());

        assert_eq!(paths(&sheet), vec!["A", "A > B", "A > B > C", "A > D"]);
        assert_eq!(
            summary,
            IndexSummary {
                entries: 4,
                files: 2,
                folders: 2,
                columns: 5
            }
        );

        let header = sheet.header.as_ref().unwrap();
        assert_eq!(header.labels[0], "No.");
        assert_eq!(header.style, HeaderStyle::default());
    }

    #[test]
    fn test_rows_start_below_header() {
        let source = MemorySource::new(sample_tree());
        let (sheet, _) = index(&source, &IndexOptions::default());
        let indices: Vec<usize> = sheet.rows.keys().copied().collect();
        assert_eq!(indices, vec![2, 3, 4, 5]);
        assert_eq!(sheet.row(2).unwrap()[0], Cell::number(1));
    }

    #[test]
    fn test_folders_only() {
        let source = MemorySource::new(sample_tree());
        let options = IndexOptions {
            include_files: false,
            ..Default::default()
        };
        let (sheet, _) = index(&source, &options);
        assert_eq!(paths(&sheet), vec!["A", "A > B"]);
    }

    #[test]
    fn test_depth_one() {
        let source = MemorySource::new(sample_tree());
        let options = IndexOptions {
            max_depth: 1,
            ..Default::default()
        };
        let (sheet, _) = index(&source, &options);
        assert_eq!(paths(&sheet), vec!["A", "A > B", "A > D"]);
    }

    #[test]
    fn test_nothing_included() {
        let source = MemorySource::new(sample_tree());
        let options = IndexOptions {
            include_files: false,
            include_folders: false,
            ..Default::default()
        };
        let (sheet, summary) = index(&source, &options);
        assert!(sheet.header.is_some());
        assert!(sheet.rows.is_empty());
        assert_eq!(summary.entries, 0);
    }

    #[test]
    fn test_per_level_arity() {
        let source = MemorySource::new(chain_tree(3));
        let options = IndexOptions {
            schema: Schema::PerLevel,
            ..Default::default()
        };
        let (sheet, summary) = index(&source, &options);
        // root > d1 > d2 > d3 is the longest route
        assert_eq!(summary.columns, 4 + 4);
        assert!(sheet.data_rows().all(|row| row.len() == summary.columns));
    }

    #[test]
    fn test_every_row_matches_header_width() {
        let source = MemorySource::new(chain_tree(4));
        for schema in [Schema::Delimited, Schema::PerLevel] {
            let options = IndexOptions {
                schema,
                ..Default::default()
            };
            let (sheet, _) = index(&source, &options);
            let width = sheet.header.as_ref().unwrap().labels.len();
            assert!(sheet.data_rows().all(|row| row.len() == width));
        }
    }

    #[test]
    fn test_rerun_replaces_previous_rows() {
        let source = MemorySource::new(sample_tree());
        let mut sheet = Sheet::new("Document Index");
        generate(&source, &mut sheet, source.root(), &IndexOptions::default()).unwrap();

        let options = IndexOptions {
            include_files: false,
            ..Default::default()
        };
        generate(&source, &mut sheet, source.root(), &options).unwrap();
        assert_eq!(sheet.rows.len(), 2);
    }

    #[test]
    fn test_listing_failure_leaves_destination_untouched() {
        let tree = ManifestNode::folder(
            "A",
            vec![ManifestNode::folder("B", vec![]).with_listing_error("quota exceeded")],
        );
        let source = MemorySource::new(tree);
        let mut sheet = Sheet::new("Document Index");
        sheet.write_row(2, &[Cell::text("previous")]).unwrap();

        let err = generate(&source, &mut sheet, source.root(), &IndexOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Traversal(_)));
        assert!(err.to_string().contains("'B'"));
        assert_eq!(sheet.rows.len(), 1);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let source = MemorySource::new(sample_tree());
        let mut sheet = Sheet::new("Document Index");
        let options = IndexOptions {
            max_depth: 0,
            ..Default::default()
        };
        let err = generate(&source, &mut sheet, source.root(), &options).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_run_resolves_root() {
        let source = MemorySource::new(sample_tree());
        let mut sheet = Sheet::new("Document Index");
        let options = IndexOptions {
            root: Some("A/B".to_string()),
            ..Default::default()
        };
        run(&source, &mut sheet, "A", &options).unwrap();
        assert_eq!(paths(&sheet), vec!["B", "B > C"]);

        let summary = run(&source, &mut sheet, "A", &IndexOptions::default()).unwrap();
        assert_eq!(summary.entries, 4);
    }

    #[test]
    fn test_run_unknown_root() {
        let source = MemorySource::new(sample_tree());
        let mut sheet = Sheet::new("Document Index");
        let options = IndexOptions {
            root: Some("nowhere".to_string()),
            ..Default::default()
        };
        let err = run(&source, &mut sheet, "A", &options).unwrap_err();
        assert!(matches!(err, Error::Source(_)));
    }
}
