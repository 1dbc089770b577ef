//! Sonify CLI - render numeric data as audio
//!
//! This binary loads CSV or JSON data, maps it to notes and writes the
//! rendered result as a PCM16 WAV file.

use clap::{ArgAction, Parser, Subcommand};
use sonify_spec::{Position, SonifyMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use sonify_cli::commands;
use sonify_cli::commands::render::{parse_listener, RenderArgs};

/// Sonify - turn data into sound
#[derive(Parser)]
#[command(name = "sonify")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a data file to a WAV file
    Render {
        /// Input data file (.csv with a header row, or .json)
        #[arg(short, long)]
        input: PathBuf,

        /// Output WAV path
        #[arg(short, long)]
        output: PathBuf,

        /// Render config file (JSON); flags below override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Mapping mode
        #[arg(long, value_parser = parse_mode)]
        mode: Option<SonifyMode>,

        /// Instrument preset name (see `sonify presets`)
        #[arg(long)]
        instrument: Option<String>,

        /// Seconds of timeline the data is spread over
        #[arg(long)]
        duration: Option<f64>,

        /// Sample rate in Hz
        #[arg(long)]
        sample_rate: Option<u32>,

        /// Render a single channel without spatialization
        #[arg(long)]
        mono: bool,

        /// Listener position as X,Y,Z
        #[arg(long, value_parser = parse_listener, allow_hyphen_values = true)]
        listener: Option<Position>,

        /// Table column used for x
        #[arg(long)]
        x_col: Option<String>,

        /// Table column used for y
        #[arg(long)]
        y_col: Option<String>,

        /// Table column used for z
        #[arg(long)]
        z_col: Option<String>,

        /// Synthesize notes on all cores
        #[arg(long)]
        parallel: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// List the built-in instrument presets
    Presets {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_mode(s: &str) -> Result<SonifyMode, String> {
    s.parse().map_err(|e: sonify_spec::ValidationError| e.to_string())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = if verbose > 0 {
        EnvFilter::new(level)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            config,
            mode,
            instrument,
            duration,
            sample_rate,
            mono,
            listener,
            x_col,
            y_col,
            z_col,
            parallel,
            json,
        } => commands::render::run(&RenderArgs {
            input,
            output,
            config,
            mode,
            instrument,
            duration,
            sample_rate,
            mono,
            listener,
            x_col,
            y_col,
            z_col,
            parallel,
            json,
        }),
        Commands::Presets { json } => commands::presets::run(json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::render::EXIT_INPUT_ERROR)
        }
    }
}
