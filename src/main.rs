use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use csv_to_nodes::{
    config::parse_delimiter, convert, ConversionConfig, ConversionReporter, JobFile, ReportFormat,
};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "csv-to-nodes")]
#[command(about = "Convert a CSV file to a graph platform node import document")]
struct Args {
    /// Path to the input CSV file
    csv_file: PathBuf,

    /// Column name to use as external_id
    external_id_col: String,

    /// Type of the entity (default: Entity)
    #[arg(long = "type-name", alias = "type_name", value_name = "NAME")]
    type_name: Option<String>,

    /// Mark every node as an identity
    #[arg(long = "is-identity", alias = "is_identity")]
    is_identity: bool,

    /// Output JSON file path (default: output.json)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Field delimiter of the input, a single character or \t
    #[arg(long, value_name = "CHAR")]
    delimiter: Option<String>,

    /// YAML job file providing defaults for the options above
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Format of the summary printed on success
    #[arg(long, value_enum, default_value_t = ReportArg::Console)]
    report: ReportArg,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportArg {
    Console,
    Json,
}

impl From<ReportArg> for ReportFormat {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::Console => ReportFormat::Console,
            ReportArg::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let report_format = ReportFormat::from(args.report);
    let config = build_config(args)?;

    let report = convert(&config)?;
    let summary = ConversionReporter::new()
        .with_format(report_format)
        .format_report(&report)?;
    print!("{}", summary);

    Ok(())
}

/// Defaults, then job file, then explicit command-line options
fn build_config(args: Args) -> Result<ConversionConfig, Box<dyn std::error::Error>> {
    let mut config = ConversionConfig::new(args.csv_file, args.external_id_col);

    if let Some(ref path) = args.config {
        let job = JobFile::load(path)?;
        config = config.apply_job_file(&job)?;
    }
    if let Some(type_name) = args.type_name {
        config = config.with_type_label(type_name);
    }
    if args.is_identity {
        config = config.with_identity(true);
    }
    if let Some(output) = args.output {
        config = config.with_output_path(output);
    }
    if let Some(ref delimiter) = args.delimiter {
        config = config.with_delimiter(parse_delimiter(delimiter)?);
    }

    Ok(config)
}
