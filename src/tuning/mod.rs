mod range;
pub mod twelve_tet;

pub use twelve_tet::{DEFAULT_REFERENCE_FREQUENCY, TwelveTet};

use crate::types::{Note, NoteValue};

/// Assigns a frequency to every note
pub trait Tuning {
    /// Frequency in Hz
    fn frequency(&self, note: Note) -> f64;

    /// Attach this tuning's frequency to a note
    fn value(&self, note: Note) -> NoteValue {
        NoteValue::new(note, self.frequency(note))
    }
}
