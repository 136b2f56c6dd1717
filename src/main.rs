//! mic-chart CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::info;

use mic_chart::{InvalidAmountPolicy, LayoutConfig, OutputFormat, RenderConfig, render_document};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Html => OutputFormat::Html,
            Format::Svg => OutputFormat::Svg,
        }
    }
}

/// Antibiotic MIC table to one log-scale dot plot per bacterium.
#[derive(Parser, Debug)]
#[command(
    name = "mic-chart",
    version = env!("MIC_CHART_VERSION"),
    about = "Antibiotic MIC table to one log-scale dot plot per bacterium"
)]
struct Cli {
    /// Input CSV file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Output document format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = Format::Html)]
    format: Format,

    /// JSON file overriding layout constants (sizes, offsets, fonts)
    #[arg(long = "layout")]
    layout: Option<PathBuf>,

    /// Include the data table above the charts (HTML only)
    #[arg(long = "table")]
    table: bool,

    /// Drop a whole panel when an amount cannot be plotted, instead of its dot
    #[arg(long = "reject-invalid")]
    reject_invalid: bool,

    /// Id of the element the panels are appended to
    #[arg(long = "container", default_value = mic_chart::config::DEFAULT_CONTAINER_ID)]
    container: String,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("error: cannot read '{}': {}", path.display(), e);
                process::exit(1);
            }
        }
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("error: cannot read stdin: {}", e);
            process::exit(1);
        }
        buf
    };

    let layout = match cli.layout {
        Some(ref path) => {
            let parsed = fs::read_to_string(path)
                .map_err(mic_chart::ChartError::from)
                .and_then(|s| LayoutConfig::from_json(&s));
            match parsed {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error: cannot load layout '{}': {}", path.display(), e);
                    process::exit(1);
                }
            }
        }
        None => LayoutConfig::default(),
    };

    let config = RenderConfig {
        container_id: cli.container.clone(),
        invalid_amounts: if cli.reject_invalid {
            InvalidAmountPolicy::Reject
        } else {
            InvalidAmountPolicy::Skip
        },
        table: cli.table,
        format: cli.format.into(),
        layout,
        ..RenderConfig::default()
    };

    // Render
    let rendered = match render_document(&text, &config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path.display(), e);
            process::exit(1);
        }
        info!("wrote {}", path.display());
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
