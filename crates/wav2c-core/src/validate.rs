//! Supported-format policy checks.
//!
//! Channel count and sample width are hard requirements. An uncommon sample
//! rate only produces a warning and conversion continues.

use std::fmt;

use tracing::debug;

use crate::error::{Wav2cError, Wav2cResult};
use crate::stream::FormatDescriptor;

/// Channel counts accepted by the default policy.
pub const SUPPORTED_CHANNELS: &[u16] = &[1, 2];

/// Sample widths (bytes) accepted by the default policy.
pub const SUPPORTED_SAMPLE_WIDTHS: &[u16] = &[1, 2];

/// Sample rates that play back without a warning.
pub const RECOMMENDED_SAMPLE_RATES: &[u32] = &[8000, 12000, 16000, 22050, 44100, 48000];

/// The set of formats a conversion accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPolicy {
    /// Accepted channel counts.
    pub channels: Vec<u16>,
    /// Accepted sample widths in bytes.
    pub sample_widths: Vec<u16>,
    /// Sample rates that do not trigger a warning.
    pub recommended_rates: Vec<u32>,
}

impl Default for FormatPolicy {
    fn default() -> Self {
        Self {
            channels: SUPPORTED_CHANNELS.to_vec(),
            sample_widths: SUPPORTED_SAMPLE_WIDTHS.to_vec(),
            recommended_rates: RECOMMENDED_SAMPLE_RATES.to_vec(),
        }
    }
}

/// A non-fatal finding from validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatWarning {
    /// Sample rate is outside the recommended set.
    UncommonSampleRate {
        /// The sample rate in Hz.
        rate: u32,
    },
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatWarning::UncommonSampleRate { rate } => write!(
                f,
                "Sample rate {} Hz may not be optimal for embedded systems",
                rate
            ),
        }
    }
}

/// Outcome of a passing validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Warnings collected during validation.
    pub warnings: Vec<FormatWarning>,
}

impl ValidationReport {
    /// Returns true if validation produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Checks a format against a policy.
///
/// The channel check runs before the sample width check.
pub fn validate_format(
    format: &FormatDescriptor,
    policy: &FormatPolicy,
) -> Wav2cResult<ValidationReport> {
    if !policy.channels.contains(&format.channels) {
        return Err(Wav2cError::UnsupportedChannelLayout {
            channels: format.channels,
        });
    }
    if !policy.sample_widths.contains(&format.sample_width_bytes) {
        return Err(Wav2cError::UnsupportedSampleWidth {
            bytes: format.sample_width_bytes,
        });
    }

    let mut report = ValidationReport::default();
    if !policy.recommended_rates.contains(&format.frame_rate) {
        report.warnings.push(FormatWarning::UncommonSampleRate {
            rate: format.frame_rate,
        });
    }

    debug!(
        channels = format.channels,
        sample_width = format.sample_width_bytes,
        frame_rate = format.frame_rate,
        warnings = report.warnings.len(),
        "format validated"
    );
    Ok(report)
}
