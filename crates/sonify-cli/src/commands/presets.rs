//! Presets command implementation
//!
//! Lists the built-in instrument presets.

use anyhow::Result;
use colored::Colorize;
use sonify_spec::{preset_names, resolve_instrument};
use std::process::ExitCode;

use super::json_output::{PresetInfo, PresetsOutput};

/// Collects every registered preset in name order.
pub fn collect() -> Result<Vec<PresetInfo>> {
    preset_names()
        .map(|name| {
            let inst = resolve_instrument(name)?;
            Ok(PresetInfo {
                name: name.to_string(),
                harmonics: inst.harmonics.clone(),
                vibrato_rate: inst.vibrato_rate,
                vibrato_width: inst.vibrato_width,
                envelope: inst.envelope,
            })
        })
        .collect()
}

/// Run the presets command
///
/// # Arguments
/// * `json_output` - Whether to print a JSON document instead of a table
pub fn run(json_output: bool) -> Result<ExitCode> {
    let presets = collect()?;

    if json_output {
        let output = PresetsOutput { presets };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Instrument presets:".cyan().bold());
    for p in &presets {
        let vibrato = if p.vibrato_rate > 0.0 {
            format!("{} Hz x {}", p.vibrato_rate, p.vibrato_width)
        } else {
            "none".to_string()
        };
        println!(
            "  {:<8} {} {:?}  {} {}  {} a={} d={} s={} r={}",
            p.name.green().bold(),
            "harmonics".dimmed(),
            p.harmonics,
            "vibrato".dimmed(),
            vibrato,
            "adsr".dimmed(),
            p.envelope.attack,
            p.envelope.decay,
            p.envelope.sustain,
            p.envelope.release
        );
    }

    Ok(ExitCode::SUCCESS)
}
