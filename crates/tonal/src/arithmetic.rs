//! Public arithmetic over tonal pitches and intervals.
//!
//! Each operation converts its operands to tonal elements, runs the engine,
//! and converts the result back. Given valid operands the only failure mode
//! is a result outside the representable gamut, e.g. an accidental beyond
//! double-sharp or a pitch pushed below octave 0.

use crate::error::TonalError;
use crate::interval::TonalInterval;
use crate::pitch::TonalPitch;

impl TonalPitch {
    /// Transpose this pitch by a directed interval.
    ///
    /// # Examples
    ///
    /// ```
    /// use tonal::{
    ///     Accidental, DiatonicInterval, DiatonicPitch, Direction, IntervalQuality,
    ///     TonalInterval, TonalPitch,
    /// };
    ///
    /// let g0 = TonalPitch::new(DiatonicPitch::G, Accidental::Natural, 0)?;
    /// let fourth_up = TonalInterval::new(
    ///     DiatonicInterval::Fourth,
    ///     IntervalQuality::Perfect,
    ///     0,
    ///     Direction::Up,
    /// )?;
    /// let c1 = TonalPitch::new(DiatonicPitch::C, Accidental::Natural, 1)?;
    /// assert_eq!(g0.transpose(fourth_up)?, c1);
    /// # Ok::<(), tonal::TonalError>(())
    /// ```
    pub fn transpose(self, interval: TonalInterval) -> Result<TonalPitch, TonalError> {
        let sum = self.to_element().add(interval.to_element()?)?;
        TonalPitch::from_element(sum)
    }

    /// The directed interval from this pitch to `other` (`other` minus
    /// `self`): `self.transpose(self.interval_to(other)?) == other`.
    pub fn interval_to(self, other: TonalPitch) -> Result<TonalInterval, TonalError> {
        let diff = other.to_element().sub(self.to_element())?;
        TonalInterval::from_element(diff)
    }

    /// The MIDI-like note number of this pitch: its signed semitone count
    /// with C0 = 0, so C4 = 48 and Cbb0 = -2. Spelling is not preserved;
    /// enharmonic pitches map to the same number.
    pub fn midi_note_number(self) -> i32 {
        self.to_element().chromatic_value()
    }
}

impl TonalInterval {
    /// Stack another interval on top of this one (`self` plus `other`).
    ///
    /// # Examples
    ///
    /// ```
    /// use tonal::{DiatonicInterval, Direction, IntervalQuality, TonalInterval};
    ///
    /// let major_third = TonalInterval::new(
    ///     DiatonicInterval::Third,
    ///     IntervalQuality::Major,
    ///     0,
    ///     Direction::Up,
    /// )?;
    /// let minor_third = TonalInterval::new(
    ///     DiatonicInterval::Third,
    ///     IntervalQuality::Minor,
    ///     0,
    ///     Direction::Up,
    /// )?;
    /// let fifth = major_third.stack(minor_third)?;
    /// assert_eq!(fifth.size(), DiatonicInterval::Fifth);
    /// assert_eq!(fifth.quality(), IntervalQuality::Perfect);
    /// # Ok::<(), tonal::TonalError>(())
    /// ```
    pub fn stack(self, other: TonalInterval) -> Result<TonalInterval, TonalError> {
        let sum = self.to_element()?.add(other.to_element()?)?;
        TonalInterval::from_element(sum)
    }

    /// The directed interval from this interval to `other` (`other` minus
    /// `self`), the same operand order as [`TonalPitch::interval_to`].
    pub fn difference(self, other: TonalInterval) -> Result<TonalInterval, TonalError> {
        let diff = other.to_element()?.sub(self.to_element()?)?;
        TonalInterval::from_element(diff)
    }
}
