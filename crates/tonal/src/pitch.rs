//! Tonal pitch classes and tonal pitches.
//!
//! A tonal pitch class is a letter name plus an accidental, e.g. `Dbb`; a
//! tonal pitch adds a non-negative octave, e.g. `G#4`. Both preserve
//! spelling: `D#` and `Eb` are distinct values.

use serde::{Deserialize, Serialize};

use crate::element::{TonalClass, TonalElement};
use crate::error::TonalError;

/// One of the seven natural letter names, position on a 7-cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DiatonicPitch {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl DiatonicPitch {
    /// Step index, C=0 .. B=6.
    pub fn index(self) -> i8 {
        match self {
            Self::C => 0,
            Self::D => 1,
            Self::E => 2,
            Self::F => 3,
            Self::G => 4,
            Self::A => 5,
            Self::B => 6,
        }
    }

    /// Letter for a step index, rejecting anything outside 0..=6.
    pub fn from_index(index: i8) -> Result<Self, TonalError> {
        match index {
            0 => Ok(Self::C),
            1 => Ok(Self::D),
            2 => Ok(Self::E),
            3 => Ok(Self::F),
            4 => Ok(Self::G),
            5 => Ok(Self::A),
            6 => Ok(Self::B),
            _ => Err(TonalError::LetterOutOfRange(index)),
        }
    }
}

/// Accidental level, double-flat to double-sharp.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone offset, -2..=2.
    pub fn offset(self) -> i8 {
        match self {
            Self::DoubleFlat => -2,
            Self::Flat => -1,
            Self::Natural => 0,
            Self::Sharp => 1,
            Self::DoubleSharp => 2,
        }
    }

    /// Accidental for a semitone offset, rejecting anything outside -2..=2.
    pub fn from_offset(offset: i8) -> Result<Self, TonalError> {
        match offset {
            -2 => Ok(Self::DoubleFlat),
            -1 => Ok(Self::Flat),
            0 => Ok(Self::Natural),
            1 => Ok(Self::Sharp),
            2 => Ok(Self::DoubleSharp),
            _ => Err(TonalError::AccidentalOutOfRange(offset)),
        }
    }
}

/// An octave-free spelled pitch, e.g. `G#` or `Dbb`.
///
/// Every (letter, accidental) combination is valid, so construction is
/// infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TonalPitchClass {
    letter: DiatonicPitch,
    accidental: Accidental,
}

impl TonalPitchClass {
    pub fn new(letter: DiatonicPitch, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn letter(self) -> DiatonicPitch {
        self.letter
    }

    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    pub(crate) fn to_class(self) -> TonalClass {
        TonalClass {
            step: self.letter.index(),
            alteration: self.accidental.offset(),
        }
    }

    pub(crate) fn from_class(class: TonalClass) -> Result<Self, TonalError> {
        Ok(Self {
            letter: DiatonicPitch::from_index(class.step)?,
            accidental: Accidental::from_offset(class.alteration)?,
        })
    }
}

/// A spelled pitch with a non-negative octave, e.g. `G#4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "TonalPitchRepr", try_from = "TonalPitchRepr")]
pub struct TonalPitch {
    class: TonalPitchClass,
    octave: i32,
}

impl TonalPitch {
    /// Construct a pitch, rejecting negative octaves.
    pub fn new(
        letter: DiatonicPitch,
        accidental: Accidental,
        octave: i32,
    ) -> Result<Self, TonalError> {
        if octave < 0 {
            return Err(TonalError::NegativePitchOctave(octave));
        }
        Ok(Self {
            class: TonalPitchClass::new(letter, accidental),
            octave,
        })
    }

    pub fn letter(self) -> DiatonicPitch {
        self.class.letter()
    }

    pub fn accidental(self) -> Accidental {
        self.class.accidental()
    }

    pub fn octave(self) -> i32 {
        self.octave
    }

    pub fn pitch_class(self) -> TonalPitchClass {
        self.class
    }

    pub(crate) fn to_element(self) -> TonalElement {
        TonalElement::new(self.class.to_class(), self.octave)
    }

    pub(crate) fn from_element(element: TonalElement) -> Result<Self, TonalError> {
        if element.octave < 0 {
            return Err(TonalError::NegativePitchOctave(element.octave));
        }
        Ok(Self {
            class: TonalPitchClass::from_class(element.class)?,
            octave: element.octave,
        })
    }
}

/// Serde shape for [`TonalPitch`]; deserialization re-runs the validating
/// constructor so a negative octave is rejected at the boundary.
#[derive(Serialize, Deserialize)]
struct TonalPitchRepr {
    letter: DiatonicPitch,
    accidental: Accidental,
    octave: i32,
}

impl From<TonalPitch> for TonalPitchRepr {
    fn from(pitch: TonalPitch) -> Self {
        Self {
            letter: pitch.letter(),
            accidental: pitch.accidental(),
            octave: pitch.octave(),
        }
    }
}

impl TryFrom<TonalPitchRepr> for TonalPitch {
    type Error = TonalError;

    fn try_from(repr: TonalPitchRepr) -> Result<Self, Self::Error> {
        Self::new(repr.letter, repr.accidental, repr.octave)
    }
}
