//! wav2c - WAV to C array converter
//!
//! Converts WAV files to C header files with PCM data arrays for audio
//! playback on memory-constrained devices.

use clap::error::ErrorKind;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use wav2c_cli::commands;
use wav2c_core::DEFAULT_VARIABLE_NAME;

const AFTER_HELP: &str = "\
Example:
  wav2c gameover.wav gameover_audio.h gameOverAudio

Supported Formats:
  - Channels: Mono (1) or Stereo (2)
  - Sample Width: 8-bit or 16-bit
  - Sample Rates: 8kHz, 12kHz, 16kHz, 22.05kHz, 44.1kHz, 48kHz";

/// WAV to C Array Converter
#[derive(Parser, Debug)]
#[command(name = "wav2c")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true, after_help = AFTER_HELP)]
struct Cli {
    /// Input WAV file to convert
    #[arg(value_name = "input.wav")]
    input: String,

    /// Output C header file
    #[arg(value_name = "output.h")]
    output: String,

    /// Variable name prefix
    #[arg(value_name = "variable_name", default_value = DEFAULT_VARIABLE_NAME)]
    variable_name: String,
}

fn init_tracing() {
    // Diagnostics go to stderr so they never mix with the console report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    let result = commands::convert::run(&cli.input, &cli.output, &cli.variable_name);

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
