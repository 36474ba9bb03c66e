//! Human-readable formatting and parsing of pitches and intervals.
//!
//! Pitches render in the compact `G#4` form; intervals render spelled out,
//! e.g. `Up 1 Octave(s) + Augmented Fourth`. Parsing covers the pitch forms
//! (`"C0"`, `"Ebb4"`, `"B##20"`); intervals are built programmatically.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    ACCIDENTAL_NAMES, DIRECTION_NAMES, LETTER_NAMES, QUALITY_NAMES, SIZE_NAMES,
};
use crate::error::ParsePitchError;
use crate::interval::{
    DiatonicInterval, Direction, IntervalQuality, TonalInterval, TonalIntervalClass,
};
use crate::pitch::{Accidental, DiatonicPitch, TonalPitch, TonalPitchClass};

impl fmt::Display for DiatonicPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LETTER_NAMES[self.index() as usize])
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(ACCIDENTAL_NAMES[(self.offset() + 2) as usize])
    }
}

impl fmt::Display for TonalPitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.accidental())
    }
}

impl fmt::Display for TonalPitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class(), self.octave())
    }
}

impl fmt::Display for DiatonicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(SIZE_NAMES[self.index() as usize])
    }
}

impl fmt::Display for IntervalQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(QUALITY_NAMES[self.index()])
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = match self {
            Self::Up => 0,
            Self::Down => 1,
        };
        f.write_str(DIRECTION_NAMES[index])
    }
}

impl fmt::Display for TonalIntervalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quality(), self.size())
    }
}

impl fmt::Display for TonalInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Octave(s) + {}",
            self.direction(),
            self.octave(),
            self.interval_class()
        )
    }
}

/// Split a pitch name into (letter, accidental, rest-of-input).
fn parse_class(s: &str) -> Result<(DiatonicPitch, Accidental, &str), ParsePitchError> {
    let mut chars = s.chars();
    let letter_char = chars.next().ok_or(ParsePitchError::Empty)?;
    let rest = chars.as_str();

    let letter = match letter_char {
        'C' => DiatonicPitch::C,
        'D' => DiatonicPitch::D,
        'E' => DiatonicPitch::E,
        'F' => DiatonicPitch::F,
        'G' => DiatonicPitch::G,
        'A' => DiatonicPitch::A,
        'B' => DiatonicPitch::B,
        other => return Err(ParsePitchError::UnknownLetter(other)),
    };

    // Longest accidental first so "bb" is not read as two flats.
    for (accidental, name) in [
        (Accidental::DoubleFlat, "bb"),
        (Accidental::DoubleSharp, "##"),
        (Accidental::Flat, "b"),
        (Accidental::Sharp, "#"),
    ] {
        if let Some(rest) = rest.strip_prefix(name) {
            return Ok((letter, accidental, rest));
        }
    }
    Ok((letter, Accidental::Natural, rest))
}

impl FromStr for TonalPitchClass {
    type Err = ParsePitchError;

    /// Parse an octave-free pitch name such as `"G#"`, `"Ebb"` or `"A"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, accidental, rest) = parse_class(s)?;
        if !rest.is_empty() {
            return Err(ParsePitchError::TrailingInput(rest.to_string()));
        }
        Ok(TonalPitchClass::new(letter, accidental))
    }
}

impl FromStr for TonalPitch {
    type Err = ParsePitchError;

    /// Parse a pitch name such as `"G#4"`, `"Ebb4"` or `"B##20"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonal::{Accidental, DiatonicPitch, TonalPitch};
    ///
    /// let pitch: TonalPitch = "G#4".parse()?;
    /// assert_eq!(pitch.letter(), DiatonicPitch::G);
    /// assert_eq!(pitch.accidental(), Accidental::Sharp);
    /// assert_eq!(pitch.octave(), 4);
    /// # Ok::<(), tonal::ParsePitchError>(())
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, accidental, rest) = parse_class(s)?;
        if rest.is_empty() {
            return Err(ParsePitchError::InvalidOctave(rest.to_string()));
        }
        let octave: i32 = rest
            .parse()
            .map_err(|_| ParsePitchError::InvalidOctave(rest.to_string()))?;
        Ok(TonalPitch::new(letter, accidental, octave)?)
    }
}
