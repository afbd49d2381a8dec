use clap::{Parser, ValueEnum};
use console::style;
use img_png::{JpegToPngConverter, SOURCE_EXTENSIONS};
use shared_utils::logging::{init_logging, LogConfig};
use shared_utils::{check_dangerous_directory, print_summary_report, walk_images};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "img_png")]
#[command(version, about = "Bulk JPEG to PNG converter", long_about = None)]
struct Cli {
    /// Root directory to scan for JPEG files
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Summary output format
    #[arg(short, long, value_enum, default_value = "human")]
    output: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let _ = init_logging("img_png", LogConfig::default().with_level(level));

    if !cli.input.is_dir() {
        eprintln!(
            "{} Error: Input path is not a directory: {}",
            style("❌").red(),
            cli.input.display()
        );
        std::process::exit(1);
    }

    if let Err(msg) = check_dangerous_directory(&cli.input) {
        eprintln!("{}", msg);
        std::process::exit(1);
    }

    let converter = JpegToPngConverter::new();
    let start = Instant::now();
    let result = walk_images(&cli.input, SOURCE_EXTENSIONS, &converter)?;

    match cli.output {
        OutputFormat::Human => print_summary_report(&result, start.elapsed(), "JPEG → PNG"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if result.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
