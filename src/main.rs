use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sonarclave::ChordRequest;
use sonarclave::request::{DEFAULT_DURATION_SECS, DEFAULT_OCTAVE};
use sonarclave::synthesis::DEFAULT_SAMPLE_RATE;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sonarclave")]
#[command(about = "Build a piano chord, preview it as WAV and draw it on a keyboard", long_about = None)]
struct Args {
    /// Root note (C, C#, D, ... B; flats like Bb are accepted)
    #[arg(long, default_value = "C")]
    root: String,

    /// Chord quality: mayor or menor (major/minor also accepted)
    #[arg(long, default_value = "mayor")]
    quality: String,

    /// Base octave of the root note
    #[arg(long, default_value_t = DEFAULT_OCTAVE, allow_negative_numbers = true)]
    octave: i32,

    /// Preview length
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_DURATION_SECS)]
    duration: f64,

    #[arg(long, value_name = "HZ", default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: u32,

    /// Reject unknown chord qualities instead of falling back to major
    #[arg(long)]
    strict: bool,

    /// Where to write the WAV preview
    #[arg(long, value_name = "PATH", default_value = "chord.wav")]
    wav: PathBuf,

    /// Where to write the keyboard diagram
    #[arg(long, value_name = "PATH", default_value = "chord.png")]
    png: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let request = ChordRequest {
        root: args.root,
        quality: args.quality,
        octave: args.octave,
        duration_secs: args.duration,
        sample_rate: args.sample_rate,
        strict: args.strict,
    };

    let preview = request.render().context("failed to render chord")?;

    preview
        .audio
        .write_wav(&args.wav)
        .with_context(|| format!("failed to write {}", args.wav.display()))?;
    std::fs::write(&args.png, &preview.diagram_png)
        .with_context(|| format!("failed to write {}", args.png.display()))?;

    println!("Chord: {}", preview.chord.label());
    println!("Notes: {}", preview.chord);
    println!("Audio: {}", args.wav.display());
    println!("Diagram: {}", args.png.display());
    Ok(())
}
