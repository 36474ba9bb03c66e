//! The tonal class / tonal element arithmetic engine.
//!
//! `TonalClass` is the octave-free abstraction shared by the pitch-class and
//! interval-class concepts; `TonalElement` adds an octave of unrestricted
//! sign and unifies pitches with directed intervals. All arithmetic runs on
//! two derived integer coordinates per element:
//!
//! - diatonic value: `7 * octave + step`, position on the base-7
//!   letter-name axis;
//! - chromatic value: `12 * octave + semitone_offset`, the signed semitone
//!   count (the MIDI-like axis).
//!
//! Addition sums both coordinates componentwise and reconstructs a single
//! element from the pair; inversion negates both coordinates. The only way
//! either can fail on valid input is a result whose accidental would fall
//! outside the double-flat..double-sharp gamut.

use crate::constants::STEP_SEMITONES;
use crate::error::TonalError;

/// Octave-free (step, alteration) pair. Internal to the crate; the public
/// faces are [`crate::pitch::TonalPitchClass`] and
/// [`crate::interval::TonalIntervalClass`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TonalClass {
    /// Diatonic step, 0..=6 (C..B).
    pub(crate) step: i8,
    /// Accidental offset, -2..=2 (double-flat..double-sharp).
    pub(crate) alteration: i8,
}

impl TonalClass {
    pub(crate) fn new(step: i8, alteration: i8) -> Result<Self, TonalError> {
        if !(0..=6).contains(&step) {
            return Err(TonalError::LetterOutOfRange(step));
        }
        if !(-2..=2).contains(&alteration) {
            return Err(TonalError::AccidentalOutOfRange(alteration));
        }
        Ok(Self { step, alteration })
    }

    /// Semitone offset relative to the C at the start of the octave.
    ///
    /// The plain step offsets cover 0..=11; the accidental extends the range
    /// to -2..=13, two slack semitones below C and above B.
    pub(crate) fn semitone_offset(self) -> i32 {
        STEP_SEMITONES[self.step as usize] + self.alteration as i32
    }
}

/// Octave-bearing tonal value. Internal to the crate; the public faces are
/// [`crate::pitch::TonalPitch`] and [`crate::interval::TonalInterval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TonalElement {
    pub(crate) class: TonalClass,
    /// Any integer; negative octaves encode downward direction.
    pub(crate) octave: i32,
}

impl TonalElement {
    /// The additive identity.
    pub(crate) const ZERO: Self = Self {
        class: TonalClass {
            step: 0,
            alteration: 0,
        },
        octave: 0,
    };

    pub(crate) fn new(class: TonalClass, octave: i32) -> Self {
        Self { class, octave }
    }

    /// Position on the base-7 letter-name axis.
    pub(crate) fn diatonic_value(self) -> i32 {
        7 * self.octave + self.class.step as i32
    }

    /// Signed semitone count on the base-12 axis.
    pub(crate) fn chromatic_value(self) -> i32 {
        12 * self.octave + self.class.semitone_offset()
    }

    /// Reconstruct an element from a (diatonic value, chromatic value) pair.
    ///
    /// The octave is chosen so the residual step lands in 0..=6; whatever
    /// chromatic residue the step itself does not account for becomes the
    /// accidental. Fails with [`TonalError::OutOfGamut`] when that accidental
    /// would fall outside -2..=2.
    pub(crate) fn from_values(dv: i32, cv: i32) -> Result<Self, TonalError> {
        let octave = dv.div_euclid(7);
        let step = dv.rem_euclid(7) as i8;
        let alteration = (cv - 12 * octave) - STEP_SEMITONES[step as usize];
        if !(-2..=2).contains(&alteration) {
            return Err(TonalError::OutOfGamut);
        }

        let element = Self {
            class: TonalClass {
                step,
                alteration: alteration as i8,
            },
            octave,
        };
        debug_assert_eq!(element.diatonic_value(), dv);
        debug_assert_eq!(element.chromatic_value(), cv);
        Ok(element)
    }

    /// Additive inverse: `e.add(e.invert()?) == ZERO`.
    pub(crate) fn invert(self) -> Result<Self, TonalError> {
        Self::from_values(-self.diatonic_value(), -self.chromatic_value())
    }

    /// Componentwise sum of both value coordinates.
    pub(crate) fn add(self, rhs: Self) -> Result<Self, TonalError> {
        Self::from_values(
            self.diatonic_value() + rhs.diatonic_value(),
            self.chromatic_value() + rhs.chromatic_value(),
        )
    }

    /// `self - rhs`.
    pub(crate) fn sub(self, rhs: Self) -> Result<Self, TonalError> {
        self.add(rhs.invert()?)
    }
}
