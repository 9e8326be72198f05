use log::trace;

use crate::types::{Note, PitchName};

/// Respell a range start onto the sharp side of its enharmonic pair
///
/// Cb steps down an octave so the walk starts at B of the octave below. Cb in the
/// lowest representable octave keeps its spelling.
const fn normalize_start(note: Note) -> Note {
    let (name, shift) = match note.name {
        PitchName::Cb => (PitchName::B, -1),
        PitchName::Db => (PitchName::Cs, 0),
        PitchName::Eb => (PitchName::Ds, 0),
        PitchName::Fb => (PitchName::E, 0),
        PitchName::F => (PitchName::Es, 0),
        PitchName::Gb => (PitchName::Fs, 0),
        PitchName::Ab => (PitchName::Gs, 0),
        PitchName::Bb => (PitchName::As, 0),
        other => (other, 0),
    };
    respell(note, name, shift)
}

/// Respell a range end onto the flat side of its enharmonic pair (mirror of [`normalize_start`])
///
/// B steps up an octave so the walk stops at Cb of the octave above. B in the
/// highest representable octave keeps its spelling.
const fn normalize_end(note: Note) -> Note {
    let (name, shift) = match note.name {
        PitchName::B => (PitchName::Cb, 1),
        PitchName::Cs => (PitchName::Db, 0),
        PitchName::Ds => (PitchName::Eb, 0),
        PitchName::E => (PitchName::Fb, 0),
        PitchName::Es => (PitchName::F, 0),
        PitchName::Fs => (PitchName::Gb, 0),
        PitchName::Gs => (PitchName::Ab, 0),
        PitchName::As => (PitchName::Bb, 0),
        other => (other, 0),
    };
    respell(note, name, shift)
}

const fn respell(note: Note, name: PitchName, shift: i32) -> Note {
    match note.octave.checked_add(shift) {
        Some(octave) => Note::new(name, octave),
        None => note,
    }
}

/// Upper bound on the up-front allocation; longer walks grow as they go
const MAX_PREALLOCATED_NOTES: usize = 4096;

/// Every spelling from `start` to `end` inclusive, in walk order
///
/// Empty when `start` sounds above `end`. Boundaries are respelled first so the
/// walk never re-crosses the B/Cb seam; after that each step is one ordinal forward.
pub(crate) fn spelled_walk(start: Note, end: Note) -> Vec<Note> {
    if start.absolute_offset() > end.absolute_offset() {
        return Vec::new();
    }

    let from = normalize_start(start);
    let to = normalize_end(end);
    trace!("walking {from} -> {to} (requested {start} -> {end})");

    walk_between(from, to)
}

/// Walk ordinals from `from` until `to` is emitted or `to`'s octave is exhausted
fn walk_between(from: Note, to: Note) -> Vec<Note> {
    let first_octave = i64::from(from.octave);
    let last_octave = i64::from(to.octave);

    let octaves = (last_octave - first_octave + 1).max(1) as u64;
    let hint = octaves.saturating_mul(PitchName::ALL.len() as u64);
    let mut notes = Vec::with_capacity(hint.min(MAX_PREALLOCATED_NOTES as u64) as usize);

    // Partial first octave
    for name in from.name.walk_from() {
        let note = Note::new(name, from.octave);
        notes.push(note);
        if note == to {
            return notes;
        }
    }

    // Whole octaves; the inclusive bound on `to.octave` guarantees termination.
    // Every octave in the range lies between two i32 octaves, so the cast is lossless.
    for octave in (first_octave + 1)..=last_octave {
        for name in PitchName::ALL {
            let note = Note::new(name, octave as i32);
            notes.push(note);
            if note == to {
                return notes;
            }
        }
    }

    notes
}
