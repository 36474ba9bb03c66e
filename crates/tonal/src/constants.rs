//! Classification tables for diatonic steps and interval qualities.

/// Semitone offset within an octave for each diatonic step
/// (C=0, D=2, E=4, F=5, G=7, A=9, B=11).
pub(crate) const STEP_SEMITONES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Signed class alteration for each (size, quality) pair, indexed by
/// `DiatonicInterval::index()` then `IntervalQuality::index()`.
///
/// `None` marks combinations with no musical meaning. Primes, fourths and
/// fifths are perfect-centered (diminished=-1, perfect=0, augmented=+1);
/// seconds, thirds, sixths and sevenths are major-centered (diminished=-2,
/// minor=-1, major=0, augmented=+1).
#[rustfmt::skip]
pub(crate) const QUALITY_OFFSETS: [[Option<i8>; 5]; 7] = [
    //             Dim       Minor     Major     Perfect   Aug
    /* Prime   */ [Some(-1), None,     None,     Some(0),  Some(1)],
    /* Second  */ [Some(-2), Some(-1), Some(0),  None,     Some(1)],
    /* Third   */ [Some(-2), Some(-1), Some(0),  None,     Some(1)],
    /* Fourth  */ [Some(-1), None,     None,     Some(0),  Some(1)],
    /* Fifth   */ [Some(-1), None,     None,     Some(0),  Some(1)],
    /* Sixth   */ [Some(-2), Some(-1), Some(0),  None,     Some(1)],
    /* Seventh */ [Some(-2), Some(-1), Some(0),  None,     Some(1)],
];

/// Display strings for diatonic pitch letters, indexed by step.
pub(crate) const LETTER_NAMES: [&str; 7] = ["C", "D", "E", "F", "G", "A", "B"];

/// Display strings for accidentals, indexed by `offset + 2`.
pub(crate) const ACCIDENTAL_NAMES: [&str; 5] = ["bb", "b", "", "#", "##"];

/// Display strings for diatonic interval sizes, indexed by size.
pub(crate) const SIZE_NAMES: [&str; 7] = [
    "Prime", "Second", "Third", "Fourth", "Fifth", "Sixth", "Seventh",
];

/// Display strings for interval qualities, indexed by quality.
pub(crate) const QUALITY_NAMES: [&str; 5] =
    ["Diminished", "Minor", "Major", "Perfect", "Augmented"];

/// Display strings for interval directions.
pub(crate) const DIRECTION_NAMES: [&str; 2] = ["Up", "Down"];
