//! CLI entry point for docindex

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use docindex::output::print_markdown;
use docindex::{
    ConsoleWriter, Defaults, DestinationError, IndexOptions, LocalSource, MarkdownWriter,
    MemorySource, NodeSource, ReportWriter, Schema, Settings, WorkbookWriter,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Column layout
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SchemaArg {
    /// One joined path column plus the file name
    Delimited,
    /// One column per depth level
    PerLevel,
}

impl From<SchemaArg> for Schema {
    fn from(arg: SchemaArg) -> Self {
        match arg {
            SchemaArg::Delimited => Schema::Delimited,
            SchemaArg::PerLevel => Schema::PerLevel,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "docindex")]
#[command(about = "Index a document tree into a table of linked paths")]
#[command(version)]
struct Args {
    /// Root folder: a path, a file:// URL, or a manifest node id
    root: Option<String>,

    /// Descend only N levels below the root
    #[arg(short = 'L', long = "level", value_name = "N")]
    level: Option<usize>,

    /// Separator between names in the joined path
    #[arg(short = 's', long = "separator", value_name = "SEP")]
    separator: Option<String>,

    /// Leave files out of the report
    #[arg(long = "no-files")]
    no_files: bool,

    /// Leave folders out of the report
    #[arg(long = "no-folders")]
    no_folders: bool,

    /// Column layout of the report
    #[arg(long = "schema", value_name = "SCHEMA")]
    schema: Option<SchemaArg>,

    /// Name of the sheet to write
    #[arg(long = "sheet", value_name = "NAME")]
    sheet: Option<String>,

    /// Write the report into a JSON workbook file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "WORKBOOK", conflicts_with = "markdown")]
    output: Option<PathBuf>,

    /// Output a Markdown table
    #[arg(long = "markdown", short = 'm')]
    markdown: bool,

    /// Read the tree from a JSON manifest instead of the file system
    #[arg(long = "manifest", value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Settings table to load (can be used multiple times, later files win)
    #[arg(long = "settings", value_name = "FILE")]
    settings: Vec<PathBuf>,

    /// Only use settings under this scope prefix
    #[arg(long = "scope", value_name = "NAME")]
    scope: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Merge settings files in order, then narrow to the scope if one was given.
fn load_settings(args: &Args) -> docindex::Result<Settings> {
    let files = args
        .settings
        .iter()
        .map(|path| Settings::from_json_file(path))
        .collect::<Result<Vec<_>, _>>()?;
    let merged = Settings::merge(files);
    Ok(match &args.scope {
        Some(scope) => merged.scope(scope),
        None => merged,
    })
}

/// Command-line flags override settings.
fn apply_flags(options: &mut IndexOptions, args: &Args) {
    if let Some(ref root) = args.root {
        options.root = Some(root.clone());
    }
    if let Some(level) = args.level {
        options.max_depth = level;
    }
    if let Some(ref separator) = args.separator {
        options.path_separator = separator.clone();
    }
    if args.no_files {
        options.include_files = false;
    }
    if args.no_folders {
        options.include_folders = false;
    }
    if let Some(schema) = args.schema {
        options.schema = schema.into();
    }
    if let Some(ref sheet) = args.sheet {
        options.output_sheet_name = sheet.clone();
    }
}

fn index_into<W: ReportWriter>(
    source: &dyn NodeSource,
    writer: &mut W,
    default_root: &str,
    options: &IndexOptions,
) -> docindex::Result<()> {
    docindex::run(source, writer, default_root, options)?;
    Ok(())
}

fn try_main(args: &Args) -> docindex::Result<()> {
    let defaults = Defaults::default();
    let settings = load_settings(args)?;
    let mut options = IndexOptions::from_settings(&settings, &defaults)?;
    apply_flags(&mut options, args);
    options.validate()?;

    let (source, default_root): (Box<dyn NodeSource>, String) = match &args.manifest {
        Some(path) => {
            let source = MemorySource::from_manifest_file(path)?;
            let root = source.root().id().to_string();
            (Box::new(source), root)
        }
        None => (Box::new(LocalSource::new()), ".".to_string()),
    };

    if let Some(ref path) = args.output {
        let mut writer = WorkbookWriter::open(path, &options.output_sheet_name)?;
        index_into(source.as_ref(), &mut writer, &default_root, &options)
    } else if args.markdown {
        let mut writer = MarkdownWriter::new(&options.output_sheet_name);
        index_into(source.as_ref(), &mut writer, &default_root, &options)?;
        print_markdown(&writer).map_err(|source| DestinationError::Io {
            destination: "stdout".to_string(),
            source,
        })?;
        Ok(())
    } else {
        let mut writer = ConsoleWriter::stdout(should_use_color(args.color));
        index_into(source.as_ref(), &mut writer, &default_root, &options)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = try_main(&args) {
        eprintln!("docindex: {}", e);
        process::exit(1);
    }
}
