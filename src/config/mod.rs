use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::tuning::{DEFAULT_REFERENCE_FREQUENCY, TwelveTet};
use crate::types::Note;

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TunerConfig {
    /// Frequency of A4 in Hz
    #[serde(default = "default_reference")]
    pub reference: f64,

    #[serde(default)]
    pub presets: Vec<RangePreset>,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            presets: Vec::new(),
        }
    }
}

impl TunerConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: TunerConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        debug!(
            "loaded {} with reference {} Hz and {} presets",
            path.display(),
            config.reference,
            config.presets.len()
        );
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.tuning().context("Invalid reference frequency")?;

        let mut seen = HashSet::new();
        for (idx, preset) in self.presets.iter().enumerate() {
            preset
                .validate()
                .with_context(|| format!("Invalid configuration for preset {}", idx))?;
            if !seen.insert(preset.name.as_str()) {
                return Err(anyhow!("Duplicate preset name: {}", preset.name));
            }
        }

        Ok(())
    }

    /// Tuning described by this configuration
    pub fn tuning(&self) -> Result<TwelveTet> {
        Ok(TwelveTet::new(self.reference)?)
    }

    /// Look up a preset by name
    pub fn preset(&self, name: &str) -> Result<&RangePreset> {
        self.presets
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| anyhow!("Preset '{}' not found", name))
    }
}

/// Named note range, e.g. the span of an instrument
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RangePreset {
    pub name: String,
    pub start: String, // Note text like "G3", "Cs4", "Bb-1"
    pub end: String,
}

impl RangePreset {
    /// Validate this preset
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(anyhow!("Preset name must not be empty"));
        }

        let (start, end) = self.notes()?;
        if start.pitch_cmp(&end).is_gt() {
            warn!("preset '{}' runs downwards ({start} > {end}) and yields no notes", self.name);
        }

        Ok(())
    }

    /// Parse start and end note text
    pub fn notes(&self) -> Result<(Note, Note)> {
        let start: Note = self
            .start
            .parse()
            .with_context(|| format!("Invalid start note: {}", self.start))?;
        let end: Note = self
            .end
            .parse()
            .with_context(|| format!("Invalid end note: {}", self.end))?;
        Ok((start, end))
    }
}

// Default value functions for serde
fn default_reference() -> f64 {
    DEFAULT_REFERENCE_FREQUENCY
}
