pub mod note;
pub mod pitch;

pub use note::{Note, NoteValue};
pub use pitch::PitchName;
