//! Error types for tonal pitch and interval arithmetic.

use thiserror::Error;

use crate::interval::{DiatonicInterval, IntervalQuality};

/// Errors produced by constructors and arithmetic operations.
///
/// Validation errors are returned before any computation takes place;
/// errors from a nested conversion propagate to the caller unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TonalError {
    /// Letter index outside C..B (0..=6).
    #[error("letter index {0} is outside C..B")]
    LetterOutOfRange(i8),
    /// Accidental offset outside double-flat..double-sharp (-2..=2).
    #[error("accidental offset {0} is outside double-flat..double-sharp")]
    AccidentalOutOfRange(i8),
    /// Interval size index outside Prime..Seventh (0..=6).
    #[error("interval size index {0} is outside prime..seventh")]
    SizeOutOfRange(i8),
    /// A tonal pitch octave must be non-negative.
    #[error("pitch octave {0} is negative")]
    NegativePitchOctave(i32),
    /// A tonal interval octave must be non-negative.
    #[error("interval octave {0} is negative")]
    NegativeIntervalOctave(i32),
    /// The (size, quality) pair has no musical meaning, e.g. a minor prime.
    #[error("no {quality} {size} exists")]
    InvalidQuality {
        size: DiatonicInterval,
        quality: IntervalQuality,
    },
    /// A prime may be perfect or augmented, never diminished.
    #[error("a prime cannot be diminished")]
    DiminishedPrime,
    /// No interval quality spells the given class alteration, e.g. a prime
    /// lowered by two semitones.
    #[error("no quality spells a {size} altered by {offset} semitones")]
    UnspellableQuality { size: DiatonicInterval, offset: i8 },
    /// The result of an operation would need an accidental beyond
    /// double-flat or double-sharp.
    #[error("result is outside the double-flat..double-sharp gamut")]
    OutOfGamut,
}

/// Errors produced when parsing pitch names such as `"G#4"` or `"Ebb4"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParsePitchError {
    #[error("empty pitch name")]
    Empty,
    #[error("unknown pitch letter '{0}'")]
    UnknownLetter(char),
    #[error("invalid octave number '{0}'")]
    InvalidOctave(String),
    #[error("unexpected trailing input '{0}'")]
    TrailingInput(String),
    #[error(transparent)]
    Tonal(#[from] TonalError),
}
