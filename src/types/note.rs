use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::types::pitch::PitchName;

/// Octave holding the reference A
pub const REFERENCE_OCTAVE: i32 = 4;

/// Semitones per octave in 12-TET
pub const SEMITONES_PER_OCTAVE: i32 = 12;

/// A spelled pitch in a given octave. Any octave is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub name: PitchName,
    pub octave: i32,
}

impl Note {
    pub const fn new(name: PitchName, octave: i32) -> Self {
        Self { name, octave }
    }

    /// Build a note from a raw walk ordinal, rejecting ordinals outside the vocabulary
    pub fn from_parts(ordinal: u8, octave: i32) -> Result<Self, TuningError> {
        Ok(Self::new(PitchName::try_from(ordinal)?, octave))
    }

    /// Semitones from the reference A4
    /// Independent of the reference frequency, so it lives on the note itself.
    /// Computed in i64 so every i32 octave has an offset.
    pub const fn absolute_offset(&self) -> i64 {
        let octaves = self.octave as i64 - REFERENCE_OCTAVE as i64;
        self.name.semitone_offset() as i64 + octaves * SEMITONES_PER_OCTAVE as i64
    }

    /// Compare by sounding pitch; enharmonic spellings compare equal
    pub fn pitch_cmp(&self, other: &Note) -> Ordering {
        self.absolute_offset().cmp(&other.absolute_offset())
    }

    pub fn is_enharmonic_with(&self, other: &Note) -> bool {
        self.pitch_cmp(other) == Ordering::Equal
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name, self.octave)
    }
}

/// Parse note text like "Cs4", "Bb3", "Cb-1"
impl FromStr for Note {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
            .unwrap_or(s.len());
        let (name, octave) = s.split_at(split);

        let name: PitchName = name.parse()?;
        let octave: i32 = octave
            .parse()
            .map_err(|_| TuningError::InvalidOctave(s.to_string()))?;

        Ok(Note::new(name, octave))
    }
}

/// A note together with the frequency a tuning assigned to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NoteValue {
    pub name: PitchName,
    pub octave: i32,
    /// Frequency in Hz
    pub frequency: f64,
}

impl NoteValue {
    /// Only tunings attach frequencies
    pub(crate) fn new(note: Note, frequency: f64) -> Self {
        Self {
            name: note.name,
            octave: note.octave,
            frequency,
        }
    }

    pub fn note(&self) -> Note {
        Note::new(self.name, self.octave)
    }
}

impl fmt::Display for NoteValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3} Hz)", self.note(), self.frequency)
    }
}
