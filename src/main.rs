//! Chime - render note scores into audio

use anyhow::{Context, Result};
use chime::config::{self, ChimeConfig};
use chime::notes;
use chime::synth::{ProfileRegistry, SynthSettings, Synthesizer};
use chime::timeline;
use chime::wav;
use clap::Parser;

mod cli;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging (optional, for debugging)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            score: score_path,
            config: config_path,
            output,
        } => {
            let cfg = match config_path {
                Some(path) => {
                    println!("Loading configuration from {:?}...", path);
                    config::load_config(&path)?
                }
                None => {
                    let fallback = std::path::Path::new("chime.yaml");
                    if fallback.exists() {
                        println!("Loading configuration from {:?}...", fallback);
                        config::load_config(fallback)?
                    } else {
                        ChimeConfig::default()
                    }
                }
            };

            println!("Loading score from {:?}...", score_path);
            let score = notes::load_score(&score_path)?;
            let flattened = notes::flatten_tracks(&[score.to_track()]);

            println!("Rendering {} notes with '{}'...", flattened.len(), score.instrument);
            let settings = SynthSettings {
                sample_rate: cfg.audio.sample_rate,
                volume: cfg.audio.volume,
            };
            let mut synth = Synthesizer::new(settings, ProfileRegistry::builtin());
            let buffer = timeline::render_notes_to_wav(&mut synth, &score.instrument, &flattened)?;

            std::fs::write(&output, &buffer)
                .with_context(|| format!("failed to write output file: {:?}", output))?;

            let body_len = buffer.len() - wav::HEADER_LEN;
            let seconds = body_len as f64 / 2.0 / f64::from(cfg.audio.sample_rate);
            println!(
                "Wrote {:.1}s of audio ({} bytes) to {:?}",
                seconds,
                buffer.len(),
                output
            );
        }

        Commands::Check { config: config_path } => {
            println!("Checking configuration at {:?}...", config_path);

            match config::load_config(&config_path) {
                Ok(cfg) => {
                    println!("Configuration is valid!");
                    println!("  Sample rate: {} Hz", cfg.audio.sample_rate);
                    println!("  Volume: {:.0}%", cfg.audio.volume * 100.0);
                    println!("  Bitrate: {} bps", cfg.encode.bitrate);
                }
                Err(e) => {
                    println!("Configuration is invalid: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Instruments => {
            let registry = ProfileRegistry::builtin();

            println!("Available instruments:");
            for name in registry.names() {
                println!("  - {}", name);
            }
        }

        Commands::Init => {
            let targets = [
                ("chime.yaml", include_str!("../chime.example.yaml")),
                ("score.yaml", include_str!("../score.example.yaml")),
            ];

            for (path, contents) in targets {
                if std::path::Path::new(path).exists() {
                    println!("{} already exists. Not overwriting.", path);
                } else {
                    std::fs::write(path, contents)?;
                    println!("Created {} with example content.", path);
                }
            }
        }
    }

    Ok(())
}
