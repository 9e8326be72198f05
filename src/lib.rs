//! Equal-tempered note frequencies and enharmonic-aware note ranges.

pub mod config;
pub mod error;
pub mod tuning;
pub mod types;

pub use error::TuningError;
pub use tuning::{Tuning, TwelveTet};
pub use types::{Note, NoteValue, PitchName};
