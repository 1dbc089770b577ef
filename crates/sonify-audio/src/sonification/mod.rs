//! Data sonification: from numeric series to a rendered buffer.
//!
//! [`sonify`] runs the whole chain. The pieces are public for callers that
//! need the intermediate note events.

mod extract;
mod mapper;
mod scale;

pub use extract::{extract, ColumnSelection, DataSource, ExtractedData, Table};
pub use mapper::{
    sonify_2d, sonify_3d, CUTOFF_RANGE, NOTE_DURATION_2D, NOTE_DURATION_3D, PITCH_RANGE_2D,
    PITCH_RANGE_3D, SPACE_X, SPACE_Y, SPACE_Z,
};
pub use scale::{midi_to_freq, scale_data, A4_FREQ, A4_MIDI};

use sonify_spec::{NoteEvent, RenderConfig, SonifyMode};
use tracing::debug;

use crate::error::AudioResult;
use crate::render::{AudioBuffer, Renderer};

/// Maps extracted data to note events according to `mode`.
pub fn map_events(data: &ExtractedData, mode: SonifyMode, duration: f64) -> Vec<NoteEvent> {
    match mode {
        SonifyMode::TwoD => sonify_2d(&data.x, &data.y, duration),
        SonifyMode::ThreeD => sonify_3d(&data.x, &data.y, data.z.as_deref(), duration),
    }
}

/// Builds the renderer described by `config`.
pub fn renderer_for(config: &RenderConfig) -> AudioResult<Renderer> {
    Ok(Renderer::new(f64::from(config.sample_rate))?
        .with_layout(config.channels)
        .with_listener(config.listener))
}

/// Validates `config`, extracts and maps `source`, and renders the notes.
///
/// The buffer spans `config.duration + config.tail` seconds. The instrument
/// is resolved before any data is touched.
pub fn sonify(source: &DataSource, config: &RenderConfig) -> AudioResult<AudioBuffer> {
    sonify_with(source, config, &renderer_for(config)?)
}

/// Like [`sonify`], with a caller-supplied renderer.
pub fn sonify_with(
    source: &DataSource,
    config: &RenderConfig,
    renderer: &Renderer,
) -> AudioResult<AudioBuffer> {
    config.validate()?;
    let instrument = config.resolve_instrument()?;
    let data = extract(source, &config.columns)?;
    let notes = map_events(&data, config.mode, config.duration);
    debug!(
        points = data.len(),
        mode = config.mode.as_str(),
        "mapped data to note events"
    );
    renderer.render(&notes, instrument, config.total_duration())
}
