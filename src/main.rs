mod ui;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::{debug, info};
use std::path::PathBuf;

use twelve_tet::config::TunerConfig;
use twelve_tet::types::Note;
use twelve_tet::{NoteValue, Tuning, TwelveTet};
use ui::render::{render_note, render_notes, OutputFormat};

/// Equal-tempered note frequencies and note ranges
#[derive(Parser, Debug)]
#[command(name = "twelve-tet")]
#[command(
    about = "Equal-tempered note frequencies and enharmonic-aware note ranges",
    long_about = None
)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Frequency of A4 in Hz (overrides the config file)
    #[arg(short = 'r', long = "reference")]
    reference: Option<f64>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the frequency of a note, e.g. `freq Cs4`
    Freq { note: Note },

    /// Print the semitone offset of a note from A4
    Offset { note: Note },

    /// List every note from START to END inclusive
    Range {
        start: Note,
        end: Note,

        /// One note per semitone instead of every spelling
        #[arg(short = 's', long = "semitones")]
        semitones: bool,
    },

    /// List the notes of a range preset from the config file
    Preset {
        name: String,

        /// One note per semitone instead of every spelling
        #[arg(short = 's', long = "semitones")]
        semitones: bool,
    },

    /// List configured range presets
    Presets,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => TunerConfig::load(path)?,
        None => TunerConfig::default(),
    };

    let tuning = match args.reference {
        Some(reference) => TwelveTet::new(reference).context("Invalid --reference")?,
        None => config.tuning()?,
    };
    info!("A4 = {} Hz", tuning.reference_frequency());

    let output = run(&args.command, &tuning, &config, args.format)?;
    print!("{}", output);

    Ok(())
}

/// Execute one subcommand and return what should be printed
fn run(
    command: &Command,
    tuning: &TwelveTet,
    config: &TunerConfig,
    format: OutputFormat,
) -> Result<String> {
    match command {
        Command::Freq { note } => render_note(&tuning.value(*note), format),
        Command::Offset { note } => Ok(format!("{}\n", tuning.get_absolute_offset(*note))),
        Command::Range {
            start,
            end,
            semitones,
        } => render_notes(&note_range(tuning, *start, *end, *semitones), format),
        Command::Preset { name, semitones } => {
            let preset = config.preset(name)?;
            let (start, end) = preset.notes()?;
            debug!("preset '{}': {} -> {}", preset.name, start, end);
            render_notes(&note_range(tuning, start, end, *semitones), format)
        }
        Command::Presets => {
            let mut out = String::new();
            for preset in &config.presets {
                out.push_str(&format!("{}: {} - {}\n", preset.name, preset.start, preset.end));
            }
            Ok(out)
        }
    }
}

fn note_range(tuning: &TwelveTet, start: Note, end: Note, semitones: bool) -> Vec<NoteValue> {
    if semitones {
        tuning.get_semitone_range(start, end)
    } else {
        tuning.get_note_range(start, end)
    }
}
