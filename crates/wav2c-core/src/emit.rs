//! C header emission.
//!
//! Output is deterministic: the same stream and name always render to
//! byte-identical text.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Wav2cError, Wav2cResult};
use crate::stream::AudioStream;

/// Identifier prefix used when the caller supplies none.
pub const DEFAULT_VARIABLE_NAME: &str = "audio";

/// Array entries per line in the default layout.
pub const DEFAULT_BYTES_PER_LINE: usize = 16;

/// Separator between lines of the array body.
const LINE_SEPARATOR: &str = ",\n    ";

/// Header layout options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Number of byte literals per array line.
    pub bytes_per_line: usize,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
        }
    }
}

/// Include guard token for an identifier.
pub fn include_guard(name: &str) -> String {
    format!("{}_H", name.to_uppercase())
}

/// Formats bytes as `0x..` literals, `bytes_per_line` per line.
///
/// A `bytes_per_line` of zero is treated as one.
pub fn hex_bytes(data: &[u8], bytes_per_line: usize) -> String {
    data.chunks(bytes_per_line.max(1))
        .map(|line| {
            line.iter()
                .map(|byte| format!("0x{:02x}", byte))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .collect::<Vec<_>>()
        .join(LINE_SEPARATOR)
}

/// Renders the full header text for a stream.
pub fn render_header(stream: &AudioStream, name: &str, options: &EmitOptions) -> String {
    let guard = include_guard(name);
    let descriptor = stream.descriptor();
    let data_size = stream.payload().len();
    let duration = match descriptor.duration_seconds() {
        Some(secs) => format!("{:.2}", secs),
        None => "n/a".to_string(),
    };

    let mut out = format!(
        "/* Auto-generated WAV audio data */\n\
         #ifndef {guard}\n\
         #define {guard}\n\
         \n\
         #include <stdint.h>\n\
         \n\
         /**\n \
         * @brief WAV Audio Data - {name}\n \
         * \n \
         * Audio Format:\n \
         *   Channels: {channels} ({label})\n \
         *   Sample Rate: {rate} Hz\n \
         *   Sample Width: {bits}-bit\n \
         *   Total Frames: {frames}\n \
         *   Duration: {duration} seconds\n \
         *   Data Size: {data_size} bytes\n \
         * \n \
         * For DAC Output: Convert to 16-bit stereo at 16kHz if needed\n \
         */\n",
        guard = guard,
        name = name,
        channels = descriptor.channels,
        label = descriptor.channel_label(),
        rate = descriptor.frame_rate,
        bits = stream.bits_per_sample(),
        frames = descriptor.frame_count,
        duration = duration,
        data_size = data_size,
    );

    if stream.payload().is_empty() {
        out.push_str(&format!("const uint8_t {}Data[] = {{}};\n", name));
    } else {
        out.push_str(&format!(
            "const uint8_t {name}Data[] = {{\n    {hex}\n}};\n",
            name = name,
            hex = hex_bytes(stream.payload(), options.bytes_per_line),
        ));
    }

    out.push_str(&format!(
        "\n\
         const uint32_t {name}Size = sizeof({name}Data);\n\
         const uint8_t {name}Channels = {channels};\n\
         const uint8_t {name}BitsPerSample = {bits};\n\
         const uint32_t {name}SampleRate = {rate};\n\
         \n\
         #endif /* {guard} */\n",
        name = name,
        channels = descriptor.channels,
        bits = stream.bits_per_sample(),
        rate = descriptor.frame_rate,
        guard = guard,
    ));

    out
}

/// Writes header text to `path`, replacing any existing file.
pub fn write_header(path: impl AsRef<Path>, text: &str) -> Wav2cResult<()> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|source| Wav2cError::WriteFailure {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "wrote header");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Parses the array initializer of a rendered header back into bytes.
    fn parse_array(header: &str, name: &str) -> Vec<u8> {
        let open = format!("const uint8_t {}Data[] = {{", name);
        let start = header.find(&open).unwrap() + open.len();
        let end = start + header[start..].find('}').unwrap();
        header[start..end]
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| u8::from_str_radix(s.trim_start_matches("0x"), 16).unwrap())
            .collect()
    }

    #[test]
    fn test_include_guard() {
        assert_eq!(include_guard("audio"), "AUDIO_H");
        assert_eq!(include_guard("gameOverAudio"), "GAMEOVERAUDIO_H");
    }

    #[test]
    fn test_hex_bytes_line_layout() {
        let data: Vec<u8> = (0..40).collect();
        let hex = hex_bytes(&data, 16);
        let lines: Vec<&str> = hex.split(",\n    ").collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].split(", ").count(), 16);
        assert_eq!(lines[1].split(", ").count(), 16);
        assert_eq!(lines[2].split(", ").count(), 8);
        assert!(lines[0].starts_with("0x00, 0x01, 0x02"));
        assert!(lines[2].ends_with("0x26, 0x27"));
    }

    #[test]
    fn test_hex_bytes_lowercase_two_digits() {
        assert_eq!(hex_bytes(&[0x00, 0x0a, 0xAB, 0xff], 16), "0x00, 0x0a, 0xab, 0xff");
        assert_eq!(hex_bytes(&[], 16), "");
    }

    #[test]
    fn test_hex_bytes_exact_multiple_has_no_trailing_separator() {
        let hex = hex_bytes(&[0u8; 32], 16);
        assert!(!hex.ends_with(','));
        assert_eq!(hex.matches(",\n    ").count(), 1);
    }

    #[test]
    fn test_render_mono_16bit_scenario() {
        let stream = AudioStream::new(1, 2, 16000, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        let header = render_header(&stream, DEFAULT_VARIABLE_NAME, &EmitOptions::default());

        let expected = concat!(
            "/* Auto-generated WAV audio data */\n",
            "#ifndef AUDIO_H\n",
            "#define AUDIO_H\n",
            "\n",
            "#include <stdint.h>\n",
            "\n",
            "/**\n",
            " * @brief WAV Audio Data - audio\n",
            " * \n",
            " * Audio Format:\n",
            " *   Channels: 1 (Mono)\n",
            " *   Sample Rate: 16000 Hz\n",
            " *   Sample Width: 16-bit\n",
            " *   Total Frames: 4\n",
            " *   Duration: 0.00 seconds\n",
            " *   Data Size: 8 bytes\n",
            " * \n",
            " * For DAC Output: Convert to 16-bit stereo at 16kHz if needed\n",
            " */\n",
            "const uint8_t audioData[] = {\n",
            "    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08\n",
            "};\n",
            "\n",
            "const uint32_t audioSize = sizeof(audioData);\n",
            "const uint8_t audioChannels = 1;\n",
            "const uint8_t audioBitsPerSample = 16;\n",
            "const uint32_t audioSampleRate = 16000;\n",
            "\n",
            "#endif /* AUDIO_H */\n",
        );
        assert_eq!(header, expected);
    }

    #[test]
    fn test_render_stereo_metadata() {
        let stream = AudioStream::new(2, 1, 8000, vec![0x80; 12000]);
        let header = render_header(&stream, "clip", &EmitOptions::default());

        assert!(header.contains("#ifndef CLIP_H\n"));
        assert!(header.contains(" *   Channels: 2 (Stereo)\n"));
        assert!(header.contains(" *   Sample Width: 8-bit\n"));
        assert!(header.contains(" *   Total Frames: 6000\n"));
        assert!(header.contains(" *   Duration: 0.75 seconds\n"));
        assert!(header.contains(" *   Data Size: 12000 bytes\n"));
        assert!(header.contains("const uint8_t clipBitsPerSample = 8;\n"));
        assert!(header.ends_with("#endif /* CLIP_H */\n"));
    }

    #[test]
    fn test_array_round_trips_payload() {
        let payload: Vec<u8> = (0..=255u8).rev().chain(0..7).collect();
        let stream = AudioStream::new(1, 1, 22050, payload.clone());
        let header = render_header(&stream, "tone", &EmitOptions::default());

        assert_eq!(parse_array(&header, "tone"), payload);
        assert!(header.contains(&format!(" *   Data Size: {} bytes\n", payload.len())));
    }

    #[test]
    fn test_empty_payload_renders_empty_initializer() {
        let stream = AudioStream::new(1, 2, 16000, Vec::new());
        let header = render_header(&stream, "audio", &EmitOptions::default());

        assert!(header.contains("const uint8_t audioData[] = {};\n"));
        assert!(header.contains(" *   Data Size: 0 bytes\n"));
        assert!(parse_array(&header, "audio").is_empty());
    }

    #[test]
    fn test_render_is_deterministic() {
        let stream = AudioStream::new(2, 2, 44100, (0..200u8).collect());
        let a = render_header(&stream, "loop", &EmitOptions::default());
        let b = render_header(&stream, "loop", &EmitOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_custom_bytes_per_line() {
        let stream = AudioStream::new(1, 1, 8000, vec![1, 2, 3, 4]);
        let header = render_header(&stream, "a", &EmitOptions { bytes_per_line: 2 });
        assert!(header.contains("{\n    0x01, 0x02,\n    0x03, 0x04\n};"));
    }

    #[test]
    fn test_write_header_to_missing_dir_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.h");
        match write_header(&path, "x") {
            Err(Wav2cError::WriteFailure { path: got, .. }) => assert_eq!(got, path),
            other => panic!("expected WriteFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_write_header_writes_verbatim() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.h");
        write_header(&path, "text\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "text\n");
    }
}
