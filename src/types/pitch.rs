use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Spelled pitch within one octave
///
/// Variants are declared in walk order, lowest spelling (Cb) first. That order is
/// NOT semitone order: enharmonic spellings sit next to each other and share an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PitchName {
    Cb,
    C,
    Cs,
    Db,
    D,
    Ds,
    Eb,
    E,
    Fb,
    Es,
    F,
    Fs,
    Gb,
    G,
    Gs,
    Ab,
    A,
    As,
    Bb,
    B,
}

impl PitchName {
    /// Every spelling in ascending walk order
    pub const ALL: [PitchName; 20] = [
        PitchName::Cb,
        PitchName::C,
        PitchName::Cs,
        PitchName::Db,
        PitchName::D,
        PitchName::Ds,
        PitchName::Eb,
        PitchName::E,
        PitchName::Fb,
        PitchName::Es,
        PitchName::F,
        PitchName::Fs,
        PitchName::Gb,
        PitchName::G,
        PitchName::Gs,
        PitchName::Ab,
        PitchName::A,
        PitchName::As,
        PitchName::Bb,
        PitchName::B,
    ];

    pub const LOWEST: PitchName = PitchName::Cb;
    pub const HIGHEST: PitchName = PitchName::B;

    /// Position in walk order (Cb = 0 .. B = 19)
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Inverse of [`PitchName::ordinal`]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal as usize).copied()
    }

    /// Semitones from A within the same octave
    pub const fn semitone_offset(self) -> i32 {
        match self {
            PitchName::Cb => -10,
            PitchName::C => -9,
            PitchName::Cs => -8,
            PitchName::Db => -8,
            PitchName::D => -7,
            PitchName::Ds => -6,
            PitchName::Eb => -6,
            PitchName::E => -5,
            PitchName::Fb => -5,
            PitchName::Es => -4,
            PitchName::F => -4,
            PitchName::Fs => -3,
            PitchName::Gb => -3,
            PitchName::G => -2,
            PitchName::Gs => -1,
            PitchName::Ab => -1,
            PitchName::A => 0,
            PitchName::As => 1,
            PitchName::Bb => 1,
            PitchName::B => 2,
        }
    }

    /// Spellings in walk order from `self` up to B inclusive
    pub fn walk_from(self) -> impl Iterator<Item = PitchName> {
        Self::ALL.into_iter().skip(self.ordinal() as usize)
    }

    /// True when both spellings share a semitone offset (a spelling is enharmonic with itself)
    pub const fn is_enharmonic_with(self, other: PitchName) -> bool {
        self.semitone_offset() == other.semitone_offset()
    }

    /// Other spellings of the same pitch within this octave
    pub fn enharmonics(self) -> impl Iterator<Item = PitchName> {
        Self::ALL
            .into_iter()
            .filter(move |other| *other != self && self.is_enharmonic_with(*other))
    }

    /// Spelling as written in note text ("Cs", "Bb", ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            PitchName::Cb => "Cb",
            PitchName::C => "C",
            PitchName::Cs => "Cs",
            PitchName::Db => "Db",
            PitchName::D => "D",
            PitchName::Ds => "Ds",
            PitchName::Eb => "Eb",
            PitchName::E => "E",
            PitchName::Fb => "Fb",
            PitchName::Es => "Es",
            PitchName::F => "F",
            PitchName::Fs => "Fs",
            PitchName::Gb => "Gb",
            PitchName::G => "G",
            PitchName::Gs => "Gs",
            PitchName::Ab => "Ab",
            PitchName::A => "A",
            PitchName::As => "As",
            PitchName::Bb => "Bb",
            PitchName::B => "B",
        }
    }
}

impl TryFrom<u8> for PitchName {
    type Error = TuningError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
            .ok_or_else(|| TuningError::InvalidPitchName(ordinal.to_string()))
    }
}

impl FromStr for PitchName {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| TuningError::InvalidPitchName(s.to_string()))
    }
}

impl fmt::Display for PitchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
