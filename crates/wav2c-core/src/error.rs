//! Error types for WAV conversion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for conversion operations.
pub type Wav2cResult<T> = Result<T, Wav2cError>;

/// Errors that can occur while converting a WAV file to a C header.
///
/// Every variant is terminal for a conversion run.
#[derive(Debug, Error)]
pub enum Wav2cError {
    /// Input path does not resolve to a readable file.
    #[error("file '{}' not found or not readable: {source}", path.display())]
    FileNotFound {
        /// The input path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Input bytes are not a valid WAV container.
    #[error("failed to read WAV file: {message}")]
    MalformedContainer {
        /// What was wrong with the container.
        message: String,
    },

    /// Channel count outside the supported policy.
    #[error("only mono (1) or stereo (2) channels supported, got {channels}")]
    UnsupportedChannelLayout {
        /// Channel count found in the format chunk.
        channels: u16,
    },

    /// Sample width outside the supported policy.
    #[error("only 8-bit or 16-bit samples supported, got {bytes} bytes")]
    UnsupportedSampleWidth {
        /// Sample width in bytes.
        bytes: u16,
    },

    /// Destination could not be opened or written.
    #[error("failed to write output file '{}': {source}", path.display())]
    WriteFailure {
        /// The output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl Wav2cError {
    /// Creates a malformed container error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedContainer {
            message: message.into(),
        }
    }
}
