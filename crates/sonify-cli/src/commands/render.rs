//! Render command implementation
//!
//! Loads a data file, maps it to notes, renders them and writes a PCM16 WAV.

use anyhow::{Context, Result};
use colored::Colorize;
use sonify_audio::sonification::{extract, map_events, renderer_for};
use sonify_audio::{write_wav_file, AudioError, DataSource};
use sonify_spec::{BackendError, ChannelLayout, Position, RenderConfig, SonifyMode, SpecError};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;

use super::json_output::{error_codes, JsonError, RenderOutput, RenderSummary};
use crate::input::load_data;

/// Exit code for unreadable or invalid input.
pub const EXIT_INPUT_ERROR: u8 = 1;
/// Exit code for failures while rendering or writing audio.
pub const EXIT_RENDER_ERROR: u8 = 2;

/// Arguments of the render command. Every `Option` overrides the config file.
#[derive(Debug, Clone, Default)]
pub struct RenderArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub mode: Option<SonifyMode>,
    pub instrument: Option<String>,
    pub duration: Option<f64>,
    pub sample_rate: Option<u32>,
    pub mono: bool,
    pub listener: Option<Position>,
    pub x_col: Option<String>,
    pub y_col: Option<String>,
    pub z_col: Option<String>,
    pub parallel: bool,
    pub json: bool,
}

/// Parses a listener position given as `X,Y,Z`.
pub fn parse_listener(s: &str) -> Result<Position, String> {
    let coords: Vec<f64> = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|e| format!("invalid coordinate in '{}': {}", s, e))?;
    match coords.as_slice() {
        &[x, y, z] => Ok(Position::new(x, y, z)),
        _ => Err(format!("expected X,Y,Z, found {} values", coords.len())),
    }
}

/// Loads the config file (if any) and applies command-line overrides.
pub fn build_config(args: &RenderArgs) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            RenderConfig::from_json(&text)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?
        }
        None => RenderConfig::default(),
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(name) = &args.instrument {
        config.instrument = name.clone();
        config.instrument_def = None;
    }
    if let Some(duration) = args.duration {
        config.duration = duration;
    }
    if let Some(rate) = args.sample_rate {
        config.sample_rate = rate;
    }
    if args.mono {
        config.channels = ChannelLayout::Mono;
    }
    if let Some(listener) = args.listener {
        config.listener = listener;
    }
    if let Some(x) = &args.x_col {
        config.columns.x = x.clone();
    }
    if let Some(y) = &args.y_col {
        config.columns.y = y.clone();
    }
    if let Some(z) = &args.z_col {
        config.columns.z = Some(z.clone());
    }

    config.validate().context("Invalid render configuration")?;
    Ok(config)
}

/// Loads everything the render needs. Failures here are input errors.
fn prepare(args: &RenderArgs) -> Result<(RenderConfig, DataSource)> {
    let config = build_config(args)?;
    let source = load_data(&args.input)?;
    Ok((config, source))
}

fn instrument_label(config: &RenderConfig) -> String {
    match config.instrument_def {
        Some(_) => "custom".to_string(),
        None => config.instrument.clone(),
    }
}

/// Renders `source` and writes the WAV file.
pub fn render_to_file(
    args: &RenderArgs,
    config: &RenderConfig,
    source: &DataSource,
) -> Result<RenderSummary, AudioError> {
    let start = Instant::now();
    let instrument = config.resolve_instrument()?;
    let data = extract(source, &config.columns)?;
    let notes = map_events(&data, config.mode, config.duration);
    let renderer = renderer_for(config)?.with_parallel(args.parallel);

    let buffer = renderer.render(&notes, instrument, config.total_duration())?;
    let wav = write_wav_file(&args.output, &buffer, config.sample_rate)?;
    debug!(
        notes = notes.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "render finished"
    );

    Ok(RenderSummary {
        output: args.output.display().to_string(),
        instrument: instrument_label(config),
        mode: config.mode.as_str().to_string(),
        channels: wav.format.channels,
        sample_rate: config.sample_rate,
        num_samples: wav.num_samples,
        duration_seconds: wav.duration_seconds(),
        data_points: data.len(),
        pcm_hash: wav.pcm_hash,
    })
}

/// Run the render command
///
/// # Returns
/// Exit code: 0 on success, 1 for input errors, 2 for render errors
pub fn run(args: &RenderArgs) -> Result<ExitCode> {
    if args.json {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run render with human-readable (colored) output
fn run_human(args: &RenderArgs) -> Result<ExitCode> {
    println!("{} {}", "Rendering:".cyan().bold(), args.input.display());

    let (config, source) = prepare(args)?;
    println!(
        "  {} {} {} {} Hz, {}",
        "Config:".dimmed(),
        instrument_label(&config),
        config.mode,
        config.sample_rate,
        config.channels.as_str()
    );

    match render_to_file(args, &config, &source) {
        Ok(summary) => {
            println!(
                "{} {} ({} points, {} samples, {:.2}s, {} ch)",
                "Wrote:".green().bold(),
                summary.output,
                summary.data_points,
                summary.num_samples,
                summary.duration_seconds,
                summary.channels
            );
            println!("  {} {}", "PCM hash:".dimmed(), summary.pcm_hash);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{} [{}] {}", "error:".red().bold(), e.code(), e);
            Ok(ExitCode::from(EXIT_RENDER_ERROR))
        }
    }
}

/// Run render with a single JSON document on stdout
fn run_json(args: &RenderArgs) -> Result<ExitCode> {
    let (output, code) = match prepare(args) {
        Err(e) => {
            let error = e
                .downcast_ref::<SpecError>()
                .map(JsonError::from_backend)
                .unwrap_or_else(|| JsonError::new(error_codes::INPUT, format!("{:#}", e)));
            (RenderOutput::failure(error), EXIT_INPUT_ERROR)
        }
        Ok((config, source)) => match render_to_file(args, &config, &source) {
            Ok(summary) => (RenderOutput::success(summary), 0),
            Err(e) => (
                RenderOutput::failure(JsonError::from_backend(&e)),
                EXIT_RENDER_ERROR,
            ),
        },
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(ExitCode::from(code))
}
