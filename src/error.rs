use thiserror::Error;

/// Errors raised when untyped input is turned into notes or tunings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// Name (or ordinal) outside the 20 known spellings
    #[error("invalid pitch name: {0:?}")]
    InvalidPitchName(String),

    /// Note text whose octave part is missing or not an integer
    #[error("invalid octave in note {0:?}")]
    InvalidOctave(String),

    /// Reference frequency must be positive and finite
    #[error("reference frequency must be a positive finite number, got {0}")]
    InvalidReferenceFrequency(f64),
}
