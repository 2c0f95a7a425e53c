//! Decoded audio stream and its derived format view.

/// Raw PCM audio extracted from a WAV container.
///
/// The payload always holds whole frames: its length is
/// `frame_count * channels * sample_width_bytes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioStream {
    channels: u16,
    sample_width_bytes: u16,
    frame_rate: u32,
    frame_count: usize,
    payload: Vec<u8>,
}

impl AudioStream {
    /// Builds a stream from raw sample bytes.
    ///
    /// Trailing bytes that do not complete a frame are dropped. A zero
    /// channel count or sample width yields an empty payload.
    pub fn new(
        channels: u16,
        sample_width_bytes: u16,
        frame_rate: u32,
        mut payload: Vec<u8>,
    ) -> Self {
        let frame_size = channels as usize * sample_width_bytes as usize;
        let frame_count = if frame_size > 0 {
            payload.len() / frame_size
        } else {
            0
        };
        payload.truncate(frame_count * frame_size);

        Self {
            channels,
            sample_width_bytes,
            frame_rate,
            frame_count,
            payload,
        }
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Bytes per sample, per channel.
    pub fn sample_width_bytes(&self) -> u16 {
        self.sample_width_bytes
    }

    /// Bits per sample, per channel.
    pub fn bits_per_sample(&self) -> u32 {
        self.sample_width_bytes as u32 * 8
    }

    /// Sample rate in Hz.
    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Number of complete frames in the payload.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Raw interleaved sample bytes, exactly as stored in the container.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Derives the format view used for validation and reporting.
    pub fn descriptor(&self) -> FormatDescriptor {
        FormatDescriptor {
            channels: self.channels,
            sample_width_bytes: self.sample_width_bytes,
            frame_rate: self.frame_rate,
            frame_count: self.frame_count,
        }
    }
}

/// Format parameters of an [`AudioStream`], without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    /// Number of channels.
    pub channels: u16,
    /// Bytes per sample, per channel.
    pub sample_width_bytes: u16,
    /// Sample rate in Hz.
    pub frame_rate: u32,
    /// Number of frames.
    pub frame_count: usize,
}

impl FormatDescriptor {
    /// Duration in seconds, or `None` when the frame rate is zero.
    pub fn duration_seconds(&self) -> Option<f64> {
        if self.frame_rate == 0 {
            return None;
        }
        Some(self.frame_count as f64 / self.frame_rate as f64)
    }

    /// Human-readable channel layout label.
    pub fn channel_label(&self) -> &'static str {
        if self.channels == 1 {
            "Mono"
        } else {
            "Stereo"
        }
    }
}
