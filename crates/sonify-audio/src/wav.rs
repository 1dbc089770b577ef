//! PCM16 WAV export.
//!
//! Rendered buffers are written as 16-bit PCM RIFF/WAVE files with no
//! timestamps or optional chunks, so identical buffers always produce
//! identical files. The BLAKE3 hash of the PCM payload is reported alongside
//! the bytes for determinism checks.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::debug;

use crate::error::{AudioError, AudioResult};
use crate::render::{normalize_buffer, AudioBuffer};

/// Size of the canonical PCM WAV header.
pub const HEADER_LEN: usize = 44;

const BITS_PER_SAMPLE: u16 = 16;

/// Channel count and sample rate of a PCM16 stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    pub channels: u16,
    pub sample_rate: u32,
}

impl WavFormat {
    pub fn new(channels: u16, sample_rate: u32) -> Self {
        Self {
            channels,
            sample_rate,
        }
    }

    /// Format matching the channel count of `buffer`.
    pub fn for_buffer(buffer: &AudioBuffer, sample_rate: u32) -> Self {
        Self::new(buffer.channels(), sample_rate)
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * (BITS_PER_SAMPLE / 8)
    }

    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * u32::from(self.block_align())
    }

    /// Builds the RIFF header for a data chunk of `data_len` bytes.
    pub fn header(&self, data_len: u32) -> [u8; HEADER_LEN] {
        let mut header = [0u8; HEADER_LEN];
        let fields: [&[u8]; 13] = [
            b"RIFF",
            &(36 + data_len).to_le_bytes(),
            b"WAVE",
            b"fmt ",
            &16u32.to_le_bytes(),
            &1u16.to_le_bytes(),
            &self.channels.to_le_bytes(),
            &self.sample_rate.to_le_bytes(),
            &self.byte_rate().to_le_bytes(),
            &self.block_align().to_le_bytes(),
            &BITS_PER_SAMPLE.to_le_bytes(),
            b"data",
            &data_len.to_le_bytes(),
        ];
        let mut offset = 0;
        for field in fields {
            header[offset..offset + field.len()].copy_from_slice(field);
            offset += field.len();
        }
        header
    }
}

/// Quantizes one sample: `round(clamp(v, -1, 1) * 32767)`.
#[inline]
pub fn quantize(sample: f64) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

/// Converts a buffer to little-endian PCM16 bytes, interleaving stereo
/// frames as left, right.
pub fn buffer_to_pcm16(buffer: &AudioBuffer) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(buffer.len() * usize::from(buffer.channels()) * 2);
    match buffer {
        AudioBuffer::Mono(samples) => {
            for &s in samples {
                pcm.extend_from_slice(&quantize(s).to_le_bytes());
            }
        }
        AudioBuffer::Stereo(stereo) => {
            for (&l, &r) in stereo.left.iter().zip(&stereo.right) {
                pcm.extend_from_slice(&quantize(l).to_le_bytes());
                pcm.extend_from_slice(&quantize(r).to_le_bytes());
            }
        }
    }
    pcm
}

/// Writes a complete WAV stream to `writer`.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm: &[u8]) -> io::Result<()> {
    let data_len = u32::try_from(pcm.len())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "PCM payload exceeds 4 GiB"))?;
    writer.write_all(&format.header(data_len))?;
    writer.write_all(pcm)
}

/// Encoded WAV file plus a description of its contents.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM payload only.
    pub pcm_hash: String,
    pub format: WavFormat,
    /// Samples per channel.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes `buffer` at `sample_rate`.
    ///
    /// The buffer is re-normalized to unit peak first, so anything that
    /// pushed it past full scale after rendering is scaled back instead of
    /// clipped. Silent buffers are written as silence.
    pub fn from_buffer(buffer: &AudioBuffer, sample_rate: u32) -> AudioResult<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate { rate: 0.0 });
        }
        let mut normalized = buffer.clone();
        normalize_buffer(&mut normalized);

        let format = WavFormat::for_buffer(&normalized, sample_rate);
        let pcm = buffer_to_pcm16(&normalized);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();

        let mut wav_data = Vec::with_capacity(HEADER_LEN + pcm.len());
        write_wav(&mut wav_data, &format, &pcm)?;

        Ok(Self {
            wav_data,
            pcm_hash,
            format,
            num_samples: normalized.len(),
        })
    }

    pub fn is_stereo(&self) -> bool {
        self.format.channels == 2
    }

    /// Returns the PCM payload (the bytes after the header).
    pub fn pcm_data(&self) -> &[u8] {
        extract_pcm_data(&self.wav_data).unwrap_or(&[])
    }

    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / f64::from(self.format.sample_rate)
    }
}

/// Returns the data chunk of a WAV file produced by this module.
pub fn extract_pcm_data(wav: &[u8]) -> Option<&[u8]> {
    if wav.len() < HEADER_LEN || &wav[0..4] != b"RIFF" || &wav[36..40] != b"data" {
        return None;
    }
    let data_len = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]) as usize;
    wav.get(HEADER_LEN..HEADER_LEN + data_len)
}

/// Encodes `buffer` and writes it to `path`.
pub fn write_wav_file(
    path: impl AsRef<Path>,
    buffer: &AudioBuffer,
    sample_rate: u32,
) -> AudioResult<WavResult> {
    let path = path.as_ref();
    let result = WavResult::from_buffer(buffer, sample_rate)?;
    fs::write(path, &result.wav_data)?;
    debug!(
        path = %path.display(),
        bytes = result.wav_data.len(),
        channels = result.format.channels,
        "wrote WAV file"
    );
    Ok(result)
}
