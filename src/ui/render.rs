use anyhow::{Context, Result};
use clap::ValueEnum;

use twelve_tet::types::NoteValue;

/// How note listings are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns: note, offset, frequency
    #[default]
    Text,
    /// YAML sequence of {name, octave, frequency}
    Yaml,
}

/// Render a list of notes in the requested format
pub fn render_notes(values: &[NoteValue], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_table(values)),
        OutputFormat::Yaml => serde_yaml::to_string(values).context("Failed to serialize notes"),
    }
}

/// Render a single note in the requested format
pub fn render_note(value: &NoteValue, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{:.3}\n", value.frequency)),
        OutputFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize note"),
    }
}

fn render_table(values: &[NoteValue]) -> String {
    let mut out = String::new();
    for value in values {
        let note = value.note();
        out.push_str(&format!(
            "{:<6} {:>5} {:>12.3}\n",
            note.to_string(),
            note.absolute_offset(),
            value.frequency
        ));
    }
    out
}
