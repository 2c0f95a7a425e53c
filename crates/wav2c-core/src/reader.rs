//! WAV/RIFF container reader.
//!
//! Only the `fmt ` and `data` chunks are consulted. The sample payload is
//! returned exactly as stored, without decoding or normalization.

use std::fs;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

use crate::error::{Wav2cError, Wav2cResult};
use crate::stream::AudioStream;

/// Format tag for integer PCM.
const WAVE_FORMAT_PCM: u16 = 0x0001;

/// Format tag for `WAVE_FORMAT_EXTENSIBLE`.
const WAVE_FORMAT_EXTENSIBLE: u16 = 0xFFFE;

/// `KSDATAFORMAT_SUBTYPE_PCM` as stored on disk.
const SUBTYPE_PCM: [u8; 16] = [
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xAA, 0x00, 0x38, 0x9B,
    0x71,
];

/// Size of the RIFF preamble (`RIFF`, size, `WAVE`).
const RIFF_HEADER_LEN: usize = 12;

/// Size of a chunk header (id + size).
const CHUNK_HEADER_LEN: usize = 8;

/// Minimum length of a PCM `fmt ` chunk body.
const FMT_MIN_LEN: usize = 16;

/// Length of a `WAVE_FORMAT_EXTENSIBLE` `fmt ` chunk body.
const FMT_EXTENSIBLE_LEN: usize = 40;

/// Fields read from the `fmt ` chunk.
#[derive(Debug, Clone, Copy)]
struct FmtChunk {
    channels: u16,
    sample_rate: u32,
    sample_width_bytes: u16,
}

/// Reads a WAV file from disk.
///
/// The whole file is read into memory and the handle released before
/// parsing starts.
pub fn read_wav_file(path: impl AsRef<Path>) -> Wav2cResult<AudioStream> {
    let path = path.as_ref();
    let data = fs::read(path).map_err(|source| Wav2cError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read input file");

    parse_wav(&data)
}

/// Parses an in-memory WAV container.
pub fn parse_wav(wav_data: &[u8]) -> Wav2cResult<AudioStream> {
    if wav_data.len() < RIFF_HEADER_LEN {
        return Err(Wav2cError::malformed(format!(
            "file too short: expected at least {} bytes, got {}",
            RIFF_HEADER_LEN,
            wav_data.len()
        )));
    }
    if &wav_data[0..4] != b"RIFF" {
        return Err(Wav2cError::malformed("file does not start with RIFF id"));
    }
    if &wav_data[8..12] != b"WAVE" {
        return Err(Wav2cError::malformed("not a WAVE file"));
    }

    let mut fmt: Option<FmtChunk> = None;
    let mut offset = RIFF_HEADER_LEN;

    while offset + CHUNK_HEADER_LEN <= wav_data.len() {
        let id = &wav_data[offset..offset + 4];
        let size = LittleEndian::read_u32(&wav_data[offset + 4..offset + 8]) as usize;
        let body_start = offset + CHUNK_HEADER_LEN;
        debug!(
            chunk = %String::from_utf8_lossy(id),
            offset,
            size,
            "visiting chunk"
        );

        match id {
            b"fmt " => {
                let body = chunk_body(wav_data, body_start, size, "fmt")?;
                fmt = Some(parse_fmt(body)?);
            }
            b"data" => {
                let fmt = fmt
                    .ok_or_else(|| Wav2cError::malformed("data chunk before fmt chunk"))?;
                let body = chunk_body(wav_data, body_start, size, "data")?;
                return Ok(AudioStream::new(
                    fmt.channels,
                    fmt.sample_width_bytes,
                    fmt.sample_rate,
                    body.to_vec(),
                ));
            }
            _ => {}
        }

        // Chunk bodies are padded to an even length.
        offset = body_start.saturating_add(size).saturating_add(size % 2);
    }

    if fmt.is_none() {
        Err(Wav2cError::malformed("fmt chunk and data chunk missing"))
    } else {
        Err(Wav2cError::malformed("data chunk missing"))
    }
}

/// Returns the body of a chunk, failing if it runs past the end of the file.
fn chunk_body<'a>(
    wav_data: &'a [u8],
    start: usize,
    size: usize,
    name: &str,
) -> Wav2cResult<&'a [u8]> {
    let end = start.checked_add(size).filter(|&end| end <= wav_data.len());
    match end {
        Some(end) => Ok(&wav_data[start..end]),
        None => Err(Wav2cError::malformed(format!(
            "{} chunk extends beyond file: offset {} + size {} > file length {}",
            name,
            start,
            size,
            wav_data.len()
        ))),
    }
}

fn parse_fmt(body: &[u8]) -> Wav2cResult<FmtChunk> {
    if body.len() < FMT_MIN_LEN {
        return Err(Wav2cError::malformed(format!(
            "fmt chunk too short: {} bytes",
            body.len()
        )));
    }

    let format_tag = LittleEndian::read_u16(&body[0..2]);
    let channels = LittleEndian::read_u16(&body[2..4]);
    let sample_rate = LittleEndian::read_u32(&body[4..8]);
    let bits_per_sample = LittleEndian::read_u16(&body[14..16]);

    match format_tag {
        WAVE_FORMAT_PCM => {}
        WAVE_FORMAT_EXTENSIBLE => {
            if body.len() < FMT_EXTENSIBLE_LEN || body[24..40] != SUBTYPE_PCM {
                return Err(Wav2cError::malformed("extensible format with non-PCM sub-format"));
            }
        }
        other => {
            return Err(Wav2cError::malformed(format!("unknown format: {}", other)));
        }
    }

    if channels == 0 {
        return Err(Wav2cError::malformed("bad # of channels"));
    }
    if sample_rate == 0 {
        return Err(Wav2cError::malformed("bad frame rate"));
    }
    if bits_per_sample == 0 {
        return Err(Wav2cError::malformed("bad sample width"));
    }

    Ok(FmtChunk {
        channels,
        sample_rate,
        sample_width_bytes: bits_per_sample.div_ceil(8),
    })
}
