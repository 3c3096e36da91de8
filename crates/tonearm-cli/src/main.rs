use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tonearm_probe::prelude::*;

/// Inspect a .mp3/.wav file and print its duration and metadata tags.
#[derive(Parser, Debug)]
#[command(name = "tonearm")]
#[command(about = "Inspect a .mp3/.wav file and print its duration and metadata")]
#[command(version)]
struct Args {
    /// Path to the audio file (.mp3 or .wav)
    path: std::path::PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tonearm=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    run(&args.path)
}

/// Linear stage machine: existence, extension, duration, metadata.
/// Duration is the primary function; a metadata failure is reported but
/// still exits with success.
fn run(path: &Path) -> ExitCode {
    if !path.is_file() {
        println!("Error: file not found: {}", path.display());
        return ExitCode::from(1);
    }

    let Some(format) = SupportedFormat::from_path(path) else {
        println!("Unsupported format. Only .mp3 and .wav are allowed.");
        return ExitCode::from(2);
    };

    println!("File: {}", path.display());
    println!("Format: {}", format);

    let probe = Probe::default();

    debug!(path = %path.display(), "resolving duration");
    let duration = match probe.duration(path) {
        Ok(secs) => secs,
        Err(err) => {
            println!("Failed to compute duration: {err}");
            return ExitCode::from(3);
        }
    };
    println!("Duration: {duration:.3} s");

    match probe.tags(path) {
        Ok(tags) if !tags.is_empty() => {
            println!("Metadata:");
            for (key, value) in &tags {
                println!("  - {key}: {value}");
            }
        }
        Ok(_) => {
            println!("No metadata present or supported for this file.");
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "metadata stage failed");
            println!("Could not read metadata: {err}");
        }
    }

    ExitCode::SUCCESS
}
