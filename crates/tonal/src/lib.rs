//! tonal - spelling-preserving pitch and interval arithmetic
//!
//! This crate provides exact arithmetic over tonal (Western music-theory)
//! pitches and intervals. Representations preserve *spelling*: D# and Eb are
//! distinct pitches, and an augmented fourth is distinct from a diminished
//! fifth, even though each pair lands on the same key of a piano.
//!
//! # Features
//!
//! - **Tonal pitch classes and pitches**: a letter name (C..B), an
//!   accidental (double-flat..double-sharp), and for pitches a non-negative
//!   octave, e.g. `G#4`.
//! - **Tonal interval classes and intervals**: a diatonic size
//!   (Prime..Seventh), a quality (Diminished..Augmented, constrained by
//!   size), and for intervals an octave count plus a direction, e.g. an
//!   augmented fourth up.
//! - **Exact arithmetic**: transposition, interval stacking, pitch and
//!   interval differences, and direction reversal, all without collapsing
//!   enharmonic spellings.
//! - **MIDI-like note numbers**: a pitch converts to its signed semitone
//!   count with C0 = 0.
//!
//! All values are small `Copy` structs validated at construction; operations
//! are pure functions that either succeed or return a [`TonalError`].
//! Arithmetic fails only when a result is not representable, e.g. an
//! accidental pushed beyond double-sharp.
//!
//! # Example
//!
//! ```
//! use tonal::{
//!     DiatonicInterval, Direction, IntervalQuality, TonalInterval, TonalPitch,
//! };
//!
//! // Transpose C# up an augmented prime, preserving the spelling.
//! let c_sharp: TonalPitch = "C#4".parse()?;
//! let augmented_prime = TonalInterval::new(
//!     DiatonicInterval::Prime,
//!     IntervalQuality::Augmented,
//!     0,
//!     Direction::Up,
//! )?;
//! let c_double_sharp = c_sharp.transpose(augmented_prime)?;
//! assert_eq!(c_double_sharp.to_string(), "C##4");
//! assert_eq!(c_double_sharp.midi_note_number(), 50);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Module Structure
//!
//! - [`pitch`]: tonal pitch classes and pitches
//! - [`interval`]: tonal interval classes and directed intervals
//! - [`error`]: error types
//!
//! The arithmetic engine itself (a dual diatonic/chromatic coordinate system
//! over a unified "tonal element" representation) is internal; it follows
//! the interval arithmetic described in the CMU computer music lecture notes
//! on tonality.

mod arithmetic;
mod constants;
mod element;
pub mod error;
pub mod interval;
mod notation;
pub mod pitch;


pub use error::{ParsePitchError, TonalError};
pub use interval::{
    DiatonicInterval, Direction, IntervalQuality, TonalInterval, TonalIntervalClass,
};
pub use pitch::{Accidental, DiatonicPitch, TonalPitch, TonalPitchClass};
