//! Audio buffer types.

use sonify_spec::ChannelLayout;

/// Stereo audio: two equal-length channels.
#[derive(Debug, Clone, PartialEq)]
pub struct StereoBuffer {
    /// Left channel samples.
    pub left: Vec<f64>,
    /// Right channel samples.
    pub right: Vec<f64>,
}

impl StereoBuffer {
    /// Creates a silent stereo buffer with the given number of samples.
    pub fn new(num_samples: usize) -> Self {
        Self {
            left: vec![0.0; num_samples],
            right: vec![0.0; num_samples],
        }
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// A rendered buffer, owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioBuffer {
    /// Single channel.
    Mono(Vec<f64>),
    /// Left/right pair.
    Stereo(StereoBuffer),
}

impl AudioBuffer {
    /// Creates a zero-filled buffer of `num_samples` per channel.
    pub fn silent(layout: ChannelLayout, num_samples: usize) -> Self {
        match layout {
            ChannelLayout::Mono => AudioBuffer::Mono(vec![0.0; num_samples]),
            ChannelLayout::Stereo => AudioBuffer::Stereo(StereoBuffer::new(num_samples)),
        }
    }

    /// Channel layout of this buffer.
    pub fn layout(&self) -> ChannelLayout {
        match self {
            AudioBuffer::Mono(_) => ChannelLayout::Mono,
            AudioBuffer::Stereo(_) => ChannelLayout::Stereo,
        }
    }

    /// Returns true if this is stereo.
    pub fn is_stereo(&self) -> bool {
        matches!(self, AudioBuffer::Stereo(_))
    }

    /// Number of channels (1 or 2).
    pub fn channels(&self) -> u16 {
        match self {
            AudioBuffer::Mono(_) => 1,
            AudioBuffer::Stereo(_) => 2,
        }
    }

    /// Borrows channel `index` (0 = mono or left, 1 = right).
    pub fn channel(&self, index: usize) -> Option<&[f64]> {
        match (self, index) {
            (AudioBuffer::Mono(samples), 0) => Some(samples),
            (AudioBuffer::Stereo(stereo), 0) => Some(&stereo.left),
            (AudioBuffer::Stereo(stereo), 1) => Some(&stereo.right),
            _ => None,
        }
    }

    /// Gets the number of samples per channel.
    pub fn len(&self) -> usize {
        match self {
            AudioBuffer::Mono(samples) => samples.len(),
            AudioBuffer::Stereo(stereo) => stereo.len(),
        }
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
