use log::debug;

use crate::error::TuningError;
use crate::tuning::Tuning;
use crate::tuning::range::spelled_walk;
use crate::types::note::SEMITONES_PER_OCTAVE;
use crate::types::{Note, NoteValue};

/// Standard concert pitch for A4
pub const DEFAULT_REFERENCE_FREQUENCY: f64 = 440.0;

/// 12-tone equal temperament anchored on A4
/// Uses f = reference * 2^(offset/12), offset counted in semitones from A4
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwelveTet {
    reference_frequency: f64,
}

impl TwelveTet {
    /// Create a tuning with the given A4 frequency in Hz
    pub fn new(reference_frequency: f64) -> Result<Self, TuningError> {
        if !reference_frequency.is_finite() || reference_frequency <= 0.0 {
            return Err(TuningError::InvalidReferenceFrequency(reference_frequency));
        }
        Ok(Self { reference_frequency })
    }

    pub fn reference_frequency(&self) -> f64 {
        self.reference_frequency
    }

    /// Frequency of the pitch `offset` semitones away from A4
    ///
    /// Every other frequency in this type is computed here, so range output and
    /// single-note lookups agree bit for bit.
    ///
    /// Octaves far from A4 leave the f64 range: they come out as infinity or zero,
    /// never as a wrapped offset.
    pub fn frequency_at_offset(&self, offset: i64) -> f64 {
        let octaves = offset as f64 / f64::from(SEMITONES_PER_OCTAVE);
        self.reference_frequency * 2.0_f64.powf(octaves)
    }

    pub fn get_frequency(&self, note: Note) -> f64 {
        self.frequency_at_offset(self.get_absolute_offset(note))
    }

    /// Semitones from A4, for ordering notes regardless of spelling
    pub fn get_absolute_offset(&self, note: Note) -> i64 {
        note.absolute_offset()
    }

    /// Every spelling between `start` and `end` inclusive, with frequencies
    ///
    /// Enharmonic neighbours are both emitted (Cs4 then Db4), so frequencies never
    /// decrease but may repeat. Returns an empty vec when `start` is above `end`.
    pub fn get_note_range(&self, start: Note, end: Note) -> Vec<NoteValue> {
        let range: Vec<NoteValue> = spelled_walk(start, end)
            .into_iter()
            .map(|note| self.value(note))
            .collect();
        debug!("range {start} -> {end}: {} notes", range.len());
        range
    }

    /// Like [`TwelveTet::get_note_range`] but one note per semitone
    ///
    /// The first and last entries keep the caller's spellings of `start` and `end`;
    /// in between the sharp-side spelling wins. A single-entry range keeps `start`'s spelling.
    pub fn get_semitone_range(&self, start: Note, end: Note) -> Vec<NoteValue> {
        let mut range = self.get_note_range(start, end);
        range.dedup_by_key(|value| value.note().absolute_offset());

        if let Some(first) = range.first_mut() {
            *first = self.value(start);
        }
        let len = range.len();
        if len > 1 {
            range[len - 1] = self.value(end);
        }
        range
    }
}

impl Default for TwelveTet {
    fn default() -> Self {
        Self {
            reference_frequency: DEFAULT_REFERENCE_FREQUENCY,
        }
    }
}

impl Tuning for TwelveTet {
    fn frequency(&self, note: Note) -> f64 {
        self.get_frequency(note)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PitchName;

    fn note(s: &str) -> Note {
        s.parse().unwrap()
    }

    #[test]
    fn test_reference_note() {
        for reference in [440.0, 432.0, 415.3, 442.0] {
            let tuning = TwelveTet::new(reference).unwrap();
            assert_eq!(tuning.get_frequency(note("A4")), reference);
            assert_eq!(tuning.get_frequency(note("A5")), 2.0 * reference);
            assert_eq!(tuning.get_frequency(note("A3")), reference / 2.0);
        }
    }

    #[test]
    fn test_middle_c() {
        let tuning = TwelveTet::default();
        assert!((tuning.get_frequency(note("C4")) - 261.6256).abs() < 0.001);
        assert!((tuning.get_frequency(note("Cb4")) - 246.9417).abs() < 0.001);
        assert_eq!(tuning.get_frequency(note("Cb4")), tuning.get_frequency(note("B3")));
    }

    #[test]
    fn test_invalid_reference() {
        for bad in [0.0, -440.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                TwelveTet::new(bad),
                Err(TuningError::InvalidReferenceFrequency(_))
            ));
        }
    }

    #[test]
    fn test_frequency_strictly_increasing_in_offset() {
        let tuning = TwelveTet::default();
        let mut previous = 0.0;
        for offset in -120..=120 {
            let frequency = tuning.frequency_at_offset(offset);
            assert!(frequency > previous, "offset {offset}");
            assert!(frequency.is_finite());
            previous = frequency;
        }
    }

    #[test]
    fn test_enharmonic_offsets() {
        let tuning = TwelveTet::default();
        assert_eq!(
            tuning.get_absolute_offset(note("Cs4")),
            tuning.get_absolute_offset(note("Db4"))
        );
        assert_eq!(tuning.get_frequency(note("Es4")), tuning.get_frequency(note("F4")));
    }

    #[test]
    fn test_single_note_range() {
        let tuning = TwelveTet::default();
        for n in [note("C4"), note("A4"), note("G-1"), note("D9")] {
            let range = tuning.get_note_range(n, n);
            assert_eq!(range.len(), 1);
            assert_eq!(range[0].note(), n);
            assert_eq!(range[0].frequency, tuning.get_frequency(n));
        }
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let tuning = TwelveTet::default();
        assert!(tuning.get_note_range(note("A5"), note("A4")).is_empty());
        assert!(tuning.get_semitone_range(note("A5"), note("A4")).is_empty());
    }

    #[test]
    fn test_c4_to_b4() {
        let tuning = TwelveTet::default();
        let range = tuning.get_note_range(note("C4"), note("B4"));
        assert_eq!(range.len(), 20);

        let last = range.last().unwrap().note();
        assert_eq!(last, Note::new(PitchName::Cb, 5));
        assert!(last.is_enharmonic_with(&note("B4")));
    }

    #[test]
    fn test_octave_range_frequencies() {
        let tuning = TwelveTet::default();
        let range = tuning.get_note_range(note("A4"), note("A5"));
        assert_eq!(range.len(), 21);
        assert_eq!(range.first().unwrap().frequency, 440.0);
        assert_eq!(range.last().unwrap().frequency, 880.0);
        for pair in range.windows(2) {
            assert!(pair[1].frequency >= pair[0].frequency);
        }
    }

    #[test]
    fn test_semitone_range_strictly_increasing() {
        let tuning = TwelveTet::default();
        let range = tuning.get_semitone_range(note("A4"), note("A5"));
        assert_eq!(range.len(), 13);
        assert_eq!(range.last().unwrap().frequency, 880.0);
        for pair in range.windows(2) {
            assert!(pair[1].frequency > pair[0].frequency);
        }
    }

    #[test]
    fn test_semitone_range_keeps_boundary_spellings() {
        let tuning = TwelveTet::default();
        for name in PitchName::ALL {
            let n = Note::new(name, 3);
            let range = tuning.get_semitone_range(n, n);
            assert_eq!(range.len(), 1, "{n}");
            assert_eq!(range[0].note(), n);
        }

        let range = tuning.get_semitone_range(note("Cb4"), note("Fb4"));
        let names: Vec<String> = range.iter().map(|v| v.note().to_string()).collect();
        assert_eq!(names, ["Cb4", "C4", "Cs4", "D4", "Ds4", "Fb4"]);
    }

    #[test]
    fn test_range_reuses_frequency_formula() {
        let tuning = TwelveTet::new(431.7).unwrap();
        for value in tuning.get_note_range(note("Bb1"), note("Fs3")) {
            let offset = tuning.get_absolute_offset(value.note());
            assert_eq!(value.frequency.to_bits(), tuning.frequency_at_offset(offset).to_bits());
            assert_eq!(value.frequency.to_bits(), tuning.get_frequency(value.note()).to_bits());
        }
    }

    #[test]
    fn test_single_semitone_keeps_start_spelling() {
        let tuning = TwelveTet::default();

        let range = tuning.get_semitone_range(note("Cs4"), note("Db4"));
        assert_eq!(range.len(), 1);
        assert_eq!(range[0].note(), note("Cs4"));

        let range = tuning.get_semitone_range(note("B3"), note("Cb4"));
        assert_eq!(range.len(), 1);
        assert_eq!(range[0].note(), note("B3"));

        let range = tuning.get_semitone_range(note("Cs4"), note("Eb4"));
        let names: Vec<String> = range.iter().map(|v| v.note().to_string()).collect();
        assert_eq!(names, ["Cs4", "D4", "Eb4"]);
    }

    #[test]
    fn test_extreme_octaves_do_not_overflow() {
        let tuning = TwelveTet::default();

        let high = tuning.get_frequency(Note::new(PitchName::A, 200_000_000));
        assert!(high.is_infinite() && high > 0.0);

        let low = tuning.get_frequency(Note::new(PitchName::A, i32::MIN));
        assert_eq!(low, 0.0);

        let top = Note::new(PitchName::B, i32::MAX);
        assert_eq!(tuning.get_absolute_offset(top), (i64::from(i32::MAX) - 4) * 12 + 2);
        let range = tuning.get_note_range(top, top);
        assert_eq!(range.len(), 1);
        assert_eq!(range[0].note(), top);

        let bottom = |name| Note::new(name, i32::MIN);
        let range = tuning.get_note_range(bottom(PitchName::G), bottom(PitchName::A));
        assert_eq!(range.len(), 4);
    }
}
