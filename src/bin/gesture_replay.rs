use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use touch_gestures::build_info;
use touch_gestures::config::GestureConfig;
use touch_gestures::diagnostics;
use touch_gestures::gesture::{GestureEvent, GestureRecognizer, Propagation};
use touch_gestures::input::{parse_trace, trace::format_sample};

/// Replay pointer traces through the gesture recognizer
#[derive(Parser)]
#[command(name = "gesture-replay", version = build_info::version_string())]
struct Cli {
    /// Configuration profile (defaults to GESTURE_PROFILE or "release")
    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a trace file through the recognizer and print recognized gestures
    Replay {
        /// Trace file: one `<slot> <press|move|release> <x> <y>` per line
        trace: PathBuf,

        /// Also print every sample with its propagation result
        #[arg(short, long)]
        verbose: bool,
    },
    /// Validate profiles and self-test every detector
    Health,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(cli.profile.as_deref());

    match cli.command {
        Command::Replay { trace, verbose } => {
            replay(config, &trace, verbose)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Health => {
            let report = diagnostics::run_all(&config);
            diagnostics::print_report(&report);
            Ok(ExitCode::from(report.exit_code() as u8))
        }
    }
}

fn load_config(profile: Option<&str>) -> GestureConfig {
    let loaded = match profile {
        Some(profile) => GestureConfig::load(profile),
        None => GestureConfig::load_from_env(),
    };
    loaded.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using default configuration");
        GestureConfig::default()
    })
}

fn replay(config: GestureConfig, path: &Path, verbose: bool) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading trace {}", path.display()))?;
    let samples =
        parse_trace(&text).with_context(|| format!("parsing trace {}", path.display()))?;
    info!(samples = samples.len(), trace = %path.display(), "Replaying trace");

    let mut recognizer = GestureRecognizer::new(config, |event: GestureEvent| {
        println!("{:<9} {event}", event.channel());
    });

    for sample in samples {
        let propagation = recognizer.dispatch(sample);
        if verbose {
            let marker = match propagation {
                Propagation::Consume => "consumed",
                Propagation::Propagate => "",
            };
            println!("  {:<24} {marker}", format_sample(&sample));
        }
    }

    let gestures = recognizer.gestures_emitted();
    recognizer.dispose();
    println!("{gestures} gesture(s) recognized");

    Ok(())
}
