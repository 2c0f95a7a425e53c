//! wav2c core library.
//!
//! Converts WAV audio into C headers for embedding PCM clips in firmware
//! images. The conversion is a three-stage pipeline:
//!
//! 1. [`reader`] parses the RIFF container into an [`AudioStream`].
//! 2. [`validate`] checks the stream's [`FormatDescriptor`] against a
//!    [`FormatPolicy`].
//! 3. [`emit`] renders the payload and metadata as C header text.
//!
//! # Example
//!
//! ```no_run
//! use wav2c_core::{emit, reader, validate};
//!
//! let stream = reader::read_wav_file("gameover.wav")?;
//! let report = validate::validate_format(&stream.descriptor(), &Default::default())?;
//! for warning in &report.warnings {
//!     eprintln!("Warning: {}", warning);
//! }
//! let text = emit::render_header(&stream, "gameOverAudio", &Default::default());
//! emit::write_header("gameover_audio.h", &text)?;
//! # Ok::<(), wav2c_core::Wav2cError>(())
//! ```

pub mod emit;
pub mod error;
pub mod reader;
pub mod stream;
pub mod validate;

pub use emit::{EmitOptions, DEFAULT_VARIABLE_NAME};
pub use error::{Wav2cError, Wav2cResult};
pub use stream::{AudioStream, FormatDescriptor};
pub use validate::{FormatPolicy, FormatWarning, ValidationReport};
