//! csvtable - inspect and convert character-separated value files

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use csvtable::config::{Config, OutputFormat};
use csvtable::output::render_to_stdout;
use csvtable::{logging, Table};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Terminal,
    Json,
    Csv,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Terminal => OutputFormat::Terminal,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Csv => OutputFormat::Csv,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

/// Inspect and convert character-separated value files
#[derive(Parser, Debug)]
#[command(name = "csvtable")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to load
    file: PathBuf,

    /// Field separator of the input file
    #[arg(short, long, default_value = ",")]
    separator: String,

    /// Comment line prefix; lines starting with it are skipped
    #[arg(short, long, default_value = "#")]
    comment: String,

    /// Output format when printing to stdout
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: CliOutputFormat,

    /// Save the table to this path instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Field separator for output (defaults to the input separator)
    #[arg(long)]
    output_separator: Option<String>,

    /// Double quote every field on output
    #[arg(long)]
    quote: bool,

    /// Trim leading and trailing whitespace from every field
    #[arg(long)]
    trim: bool,

    /// Expand to at least ROWS rows and COLS columns
    #[arg(long, num_args = 2, value_names = ["ROWS", "COLS"])]
    expand: Option<Vec<usize>>,

    /// When to color terminal output
    #[arg(long, value_enum, default_value = "auto")]
    color: ColorMode,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::new()
        .with_separator(cli.separator)
        .with_comment_prefix(cli.comment);

    let mut table = Table::with_config(config);
    table
        .try_load(&cli.file)
        .with_context(|| format!("Failed to load file: {}", cli.file.display()))?;

    if cli.trim {
        table.trim();
    }

    if let Some(dims) = cli.expand.as_deref() {
        if let [rows, cols] = *dims {
            table.expand(rows, cols);
        }
    }

    if let Some(separator) = cli.output_separator {
        table.set_field_separator(separator);
    }
    table.set_quote_fields(cli.quote);

    if let Some(output) = cli.output {
        table
            .try_save(&output)
            .with_context(|| format!("Failed to save file: {}", output.display()))?;
        tracing::info!(path = %output.display(), rows = table.num_rows(), "wrote table");
        return Ok(());
    }

    let color = match cli.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    };

    render_to_stdout(&table, cli.format.into(), color)
}
