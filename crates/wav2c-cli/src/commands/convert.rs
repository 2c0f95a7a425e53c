//! Convert command implementation
//!
//! Reads a WAV file, checks it against the firmware format policy, and writes
//! the payload as a C header.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;
use wav2c_core::{
    emit, reader, validate, AudioStream, EmitOptions, FormatPolicy, ValidationReport,
};

/// Run the convert command
///
/// # Arguments
/// * `input_path` - Path to the input WAV file
/// * `output_path` - Path of the header file to write
/// * `variable_name` - Identifier prefix for the generated constants
///
/// # Returns
/// Exit code: 0 success. Errors are returned to `main`, which exits 1.
pub fn run(input_path: &str, output_path: &str, variable_name: &str) -> Result<ExitCode> {
    let stream = reader::read_wav_file(input_path)?;
    print_stream_info(&stream);

    let report = validate::validate_format(&stream.descriptor(), &FormatPolicy::default())?;
    print_warnings(&report);

    let text = emit::render_header(&stream, variable_name, &EmitOptions::default());
    emit::write_header(output_path, &text)?;
    debug!(
        input = input_path,
        output = output_path,
        name = variable_name,
        "conversion finished"
    );

    println!(
        "\n{} {}",
        "✓ Successfully created:".green().bold(),
        Path::new(output_path).display()
    );
    println!("  Variable name: {}Data", variable_name);
    println!("  Data size: {} bytes", stream.payload().len());

    Ok(ExitCode::SUCCESS)
}

/// Print the format summary of a freshly read stream.
fn print_stream_info(stream: &AudioStream) {
    let descriptor = stream.descriptor();
    let duration = match descriptor.duration_seconds() {
        Some(secs) => format!("{:.2} seconds", secs),
        None => "n/a".to_string(),
    };

    println!("{}", "WAV File Info:".cyan().bold());
    println!("  {} {}", "Channels:".dimmed(), descriptor.channels);
    println!(
        "  {} {} bytes",
        "Sample Width:".dimmed(),
        descriptor.sample_width_bytes
    );
    println!("  {} {} Hz", "Sample Rate:".dimmed(), descriptor.frame_rate);
    println!("  {} {}", "Total Frames:".dimmed(), descriptor.frame_count);
    println!("  {} {}", "Duration:".dimmed(), duration);
    println!(
        "  {} {} bytes",
        "Data Size:".dimmed(),
        stream.payload().len()
    );
}

fn print_warnings(report: &ValidationReport) {
    for warning in &report.warnings {
        println!("{} {}", "Warning:".yellow().bold(), warning);
    }
}
