//! Tonal interval classes and directed tonal intervals.
//!
//! A tonal interval class is a diatonic size plus a quality, e.g. an
//! augmented fourth; a tonal interval adds a non-negative octave count and a
//! direction. Spelling is preserved: an augmented fourth and a diminished
//! fifth are distinct values.

use serde::{Deserialize, Serialize};

use crate::constants::QUALITY_OFFSETS;
use crate::element::{TonalClass, TonalElement};
use crate::error::TonalError;

/// Diatonic interval size, position on a 7-cycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DiatonicInterval {
    Prime,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
}

impl DiatonicInterval {
    /// Size index, Prime=0 .. Seventh=6.
    pub fn index(self) -> i8 {
        match self {
            Self::Prime => 0,
            Self::Second => 1,
            Self::Third => 2,
            Self::Fourth => 3,
            Self::Fifth => 4,
            Self::Sixth => 5,
            Self::Seventh => 6,
        }
    }

    /// Size for an index, rejecting anything outside 0..=6.
    pub fn from_index(index: i8) -> Result<Self, TonalError> {
        match index {
            0 => Ok(Self::Prime),
            1 => Ok(Self::Second),
            2 => Ok(Self::Third),
            3 => Ok(Self::Fourth),
            4 => Ok(Self::Fifth),
            5 => Ok(Self::Sixth),
            6 => Ok(Self::Seventh),
            _ => Err(TonalError::SizeOutOfRange(index)),
        }
    }

    /// Primes, fourths and fifths take diminished/perfect/augmented
    /// qualities; the remaining sizes are major-centered.
    fn is_perfect_centered(self) -> bool {
        matches!(self, Self::Prime | Self::Fourth | Self::Fifth)
    }
}

/// Interval quality, constrained by which diatonic size it modifies.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum IntervalQuality {
    Diminished,
    Minor,
    Major,
    Perfect,
    Augmented,
}

impl IntervalQuality {
    pub(crate) fn index(self) -> usize {
        match self {
            Self::Diminished => 0,
            Self::Minor => 1,
            Self::Major => 2,
            Self::Perfect => 3,
            Self::Augmented => 4,
        }
    }
}

/// Direction of a tonal interval. The interval magnitude itself is always
/// non-negative; direction carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// An octave-free spelled interval, e.g. an augmented fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "TonalIntervalClassRepr", try_from = "TonalIntervalClassRepr")]
pub struct TonalIntervalClass {
    size: DiatonicInterval,
    quality: IntervalQuality,
}

impl TonalIntervalClass {
    /// Construct an interval class, rejecting (size, quality) pairs with no
    /// musical meaning, e.g. a minor prime or a perfect third.
    pub fn new(size: DiatonicInterval, quality: IntervalQuality) -> Result<Self, TonalError> {
        match QUALITY_OFFSETS[size.index() as usize][quality.index()] {
            Some(_) => Ok(Self { size, quality }),
            None => Err(TonalError::InvalidQuality { size, quality }),
        }
    }

    pub fn size(self) -> DiatonicInterval {
        self.size
    }

    pub fn quality(self) -> IntervalQuality {
        self.quality
    }

    pub(crate) fn to_class(self) -> TonalClass {
        // Mirrors from_class; new() already ruled out the pairs the table
        // leaves empty, so the match is total over constructed values.
        let alteration = match self.quality {
            IntervalQuality::Diminished if self.size.is_perfect_centered() => -1,
            IntervalQuality::Diminished => -2,
            IntervalQuality::Minor => -1,
            IntervalQuality::Major | IntervalQuality::Perfect => 0,
            IntervalQuality::Augmented => 1,
        };
        TonalClass {
            step: self.size.index(),
            alteration,
        }
    }

    /// Spell a class alteration as an interval quality, branching on whether
    /// the size is perfect-centered or major-centered.
    pub(crate) fn from_class(class: TonalClass) -> Result<Self, TonalError> {
        let size = DiatonicInterval::from_index(class.step)?;
        let quality = if size.is_perfect_centered() {
            match class.alteration {
                -1 => IntervalQuality::Diminished,
                0 => IntervalQuality::Perfect,
                1 => IntervalQuality::Augmented,
                offset => return Err(TonalError::UnspellableQuality { size, offset }),
            }
        } else {
            match class.alteration {
                -2 => IntervalQuality::Diminished,
                -1 => IntervalQuality::Minor,
                0 => IntervalQuality::Major,
                1 => IntervalQuality::Augmented,
                offset => return Err(TonalError::UnspellableQuality { size, offset }),
            }
        };
        Ok(Self { size, quality })
    }
}

/// A directed spelled interval with a non-negative octave count, e.g. a
/// perfect fifth up, or an augmented fourth plus one octave down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "TonalIntervalRepr", try_from = "TonalIntervalRepr")]
pub struct TonalInterval {
    class: TonalIntervalClass,
    octave: i32,
    direction: Direction,
}

impl TonalInterval {
    /// Construct an interval, rejecting negative octaves and the diminished
    /// prime at octave 0 (a zero-magnitude interval cannot be lowered below
    /// the identity; at octave 3 a diminished prime is fine).
    ///
    /// The perfect prime at octave 0 has zero magnitude, so its direction is
    /// stored as [`Direction::Up`] whichever direction is requested.
    pub fn new(
        size: DiatonicInterval,
        quality: IntervalQuality,
        octave: i32,
        direction: Direction,
    ) -> Result<Self, TonalError> {
        let class = TonalIntervalClass::new(size, quality)?;
        if octave < 0 {
            return Err(TonalError::NegativeIntervalOctave(octave));
        }
        if octave == 0
            && size == DiatonicInterval::Prime
            && quality == IntervalQuality::Diminished
        {
            return Err(TonalError::DiminishedPrime);
        }
        let interval = Self {
            class,
            octave,
            direction,
        };
        if interval.is_zero_magnitude() {
            return Ok(Self {
                direction: Direction::Up,
                ..interval
            });
        }
        Ok(interval)
    }

    pub fn size(self) -> DiatonicInterval {
        self.class.size()
    }

    pub fn quality(self) -> IntervalQuality {
        self.class.quality()
    }

    pub fn octave(self) -> i32 {
        self.octave
    }

    pub fn direction(self) -> Direction {
        self.direction
    }

    pub fn interval_class(self) -> TonalIntervalClass {
        self.class
    }

    /// The same interval in the opposite direction. The zero-magnitude
    /// perfect prime is its own reversal.
    pub fn reversed(self) -> Self {
        if self.is_zero_magnitude() {
            return self;
        }
        Self {
            class: self.class,
            octave: self.octave,
            direction: self.direction.reversed(),
        }
    }

    /// The perfect prime at octave 0, the only interval spanning no distance
    /// on either axis.
    fn is_zero_magnitude(self) -> bool {
        self.octave == 0
            && self.class.size() == DiatonicInterval::Prime
            && self.class.quality() == IntervalQuality::Perfect
    }

    pub(crate) fn to_element(self) -> Result<TonalElement, TonalError> {
        let element = TonalElement::new(self.class.to_class(), self.octave);
        match self.direction {
            Direction::Up => Ok(element),
            Direction::Down => element.invert(),
        }
    }

    /// The octave sign of the element is the direction discriminant: a
    /// non-negative octave reads upward as-is, a negative octave is inverted
    /// first and reads downward.
    pub(crate) fn from_element(element: TonalElement) -> Result<Self, TonalError> {
        if element.octave >= 0 {
            let class = TonalIntervalClass::from_class(element.class)?;
            if element.octave == 0
                && class.size() == DiatonicInterval::Prime
                && class.quality() == IntervalQuality::Diminished
            {
                return Err(TonalError::DiminishedPrime);
            }
            Ok(Self {
                class,
                octave: element.octave,
                direction: Direction::Up,
            })
        } else {
            let inverted = element.invert()?;
            debug_assert!(inverted.octave >= 0);
            Ok(Self {
                class: TonalIntervalClass::from_class(inverted.class)?,
                octave: inverted.octave,
                direction: Direction::Down,
            })
        }
    }
}

/// Serde shape for [`TonalIntervalClass`]; deserialization re-runs the
/// validating constructor so invalid (size, quality) pairs are rejected.
#[derive(Serialize, Deserialize)]
struct TonalIntervalClassRepr {
    size: DiatonicInterval,
    quality: IntervalQuality,
}

impl From<TonalIntervalClass> for TonalIntervalClassRepr {
    fn from(class: TonalIntervalClass) -> Self {
        Self {
            size: class.size(),
            quality: class.quality(),
        }
    }
}

impl TryFrom<TonalIntervalClassRepr> for TonalIntervalClass {
    type Error = TonalError;

    fn try_from(repr: TonalIntervalClassRepr) -> Result<Self, Self::Error> {
        Self::new(repr.size, repr.quality)
    }
}

/// Serde shape for [`TonalInterval`].
#[derive(Serialize, Deserialize)]
struct TonalIntervalRepr {
    size: DiatonicInterval,
    quality: IntervalQuality,
    octave: i32,
    direction: Direction,
}

impl From<TonalInterval> for TonalIntervalRepr {
    fn from(interval: TonalInterval) -> Self {
        Self {
            size: interval.size(),
            quality: interval.quality(),
            octave: interval.octave(),
            direction: interval.direction(),
        }
    }
}

impl TryFrom<TonalIntervalRepr> for TonalInterval {
    type Error = TonalError;

    fn try_from(repr: TonalIntervalRepr) -> Result<Self, Self::Error> {
        Self::new(repr.size, repr.quality, repr.octave, repr.direction)
    }
}
