//! Scenario tests for the public arithmetic API.
//!
//! These follow the worked examples from the CMU lecture notes the library
//! is based on: transposition across the octave boundary, compound interval
//! arithmetic, pitch differences, and the saturation behavior of the
//! double-flat..double-sharp gamut.

use pretty_assertions::assert_eq;

use tonal::{
    Accidental, DiatonicInterval, DiatonicPitch, Direction, IntervalQuality, TonalError,
    TonalInterval, TonalPitch,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn pitch(letter: DiatonicPitch, accidental: Accidental, octave: i32) -> TonalPitch {
    TonalPitch::new(letter, accidental, octave).unwrap()
}

fn interval(
    size: DiatonicInterval,
    quality: IntervalQuality,
    octave: i32,
    direction: Direction,
) -> TonalInterval {
    TonalInterval::new(size, quality, octave, direction).unwrap()
}

fn fourth_up() -> TonalInterval {
    interval(
        DiatonicInterval::Fourth,
        IntervalQuality::Perfect,
        0,
        Direction::Up,
    )
}

// =============================================================================
// Transposition
// =============================================================================

#[test]
fn test_transpose_across_octave() {
    // G0 + perfect fourth up = C1.
    let g0 = pitch(DiatonicPitch::G, Accidental::Natural, 0);
    let c1 = pitch(DiatonicPitch::C, Accidental::Natural, 1);
    assert_eq!(g0.transpose(fourth_up()).unwrap(), c1);
}

#[test]
fn test_transpose_by_prime_is_identity() {
    let prime_up = interval(
        DiatonicInterval::Prime,
        IntervalQuality::Perfect,
        0,
        Direction::Up,
    );
    let e_flat = pitch(DiatonicPitch::E, Accidental::Flat, 2);
    assert_eq!(e_flat.transpose(prime_up).unwrap(), e_flat);
}

#[test]
fn test_transpose_preserves_spelling() {
    // C#4 up an augmented prime is C##4, not D4.
    let augmented_prime = interval(
        DiatonicInterval::Prime,
        IntervalQuality::Augmented,
        0,
        Direction::Up,
    );
    let c_sharp = pitch(DiatonicPitch::C, Accidental::Sharp, 4);
    let result = c_sharp.transpose(augmented_prime).unwrap();
    assert_eq!(result, pitch(DiatonicPitch::C, Accidental::DoubleSharp, 4));
}

#[test]
fn test_transpose_below_octave_zero_fails() {
    let c0 = pitch(DiatonicPitch::C, Accidental::Natural, 0);
    let fourth_down = fourth_up().reversed();
    assert_eq!(
        c0.transpose(fourth_down),
        Err(TonalError::NegativePitchOctave(-1))
    );
}

// =============================================================================
// Interval stacking and differences
// =============================================================================

#[test]
fn test_stack_thirds_into_fifth() {
    // Major third + minor third = perfect fifth.
    let major_third = interval(
        DiatonicInterval::Third,
        IntervalQuality::Major,
        0,
        Direction::Up,
    );
    let minor_third = interval(
        DiatonicInterval::Third,
        IntervalQuality::Minor,
        0,
        Direction::Up,
    );
    let fifth = interval(
        DiatonicInterval::Fifth,
        IntervalQuality::Perfect,
        0,
        Direction::Up,
    );
    assert_eq!(major_third.stack(minor_third).unwrap(), fifth);
}

#[test]
fn test_stack_with_reversed_interval() {
    // Minor seventh up + minor third down = perfect fifth up.
    let minor_seventh = interval(
        DiatonicInterval::Seventh,
        IntervalQuality::Minor,
        0,
        Direction::Up,
    );
    let minor_third = interval(
        DiatonicInterval::Third,
        IntervalQuality::Minor,
        0,
        Direction::Up,
    );
    let fifth = interval(
        DiatonicInterval::Fifth,
        IntervalQuality::Perfect,
        0,
        Direction::Up,
    );
    assert_eq!(minor_seventh.stack(minor_third.reversed()).unwrap(), fifth);
}

#[test]
fn test_pitch_difference() {
    // C1 - G0 = perfect fourth up; G0 - C1 = perfect fourth down.
    let g0 = pitch(DiatonicPitch::G, Accidental::Natural, 0);
    let c1 = pitch(DiatonicPitch::C, Accidental::Natural, 1);
    assert_eq!(g0.interval_to(c1).unwrap(), fourth_up());
    assert_eq!(c1.interval_to(g0).unwrap(), fourth_up().reversed());
}

#[test]
fn test_difference_respects_transpose() {
    let a = pitch(DiatonicPitch::F, Accidental::Sharp, 2);
    let b = pitch(DiatonicPitch::B, Accidental::Flat, 4);
    let diff = a.interval_to(b).unwrap();
    assert_eq!(a.transpose(diff).unwrap(), b);
}

#[test]
fn test_interval_difference() {
    // Major third - perfect fifth = minor third down.
    let major_third = interval(
        DiatonicInterval::Third,
        IntervalQuality::Major,
        0,
        Direction::Up,
    );
    let fifth = interval(
        DiatonicInterval::Fifth,
        IntervalQuality::Perfect,
        0,
        Direction::Up,
    );
    let minor_third_down = interval(
        DiatonicInterval::Third,
        IntervalQuality::Minor,
        0,
        Direction::Down,
    );
    assert_eq!(fifth.difference(major_third).unwrap(), minor_third_down);
    // Difference against itself is a perfect prime.
    assert_eq!(
        fifth.difference(fifth).unwrap(),
        interval(
            DiatonicInterval::Prime,
            IntervalQuality::Perfect,
            0,
            Direction::Up
        )
    );
}

// =============================================================================
// Gamut saturation
// =============================================================================

#[test]
fn test_augmented_prime_saturation() {
    // Ebb4 climbs to E##4 in exactly four augmented-prime steps; a fifth
    // step would need a triple sharp.
    let augmented_prime_up = interval(
        DiatonicInterval::Prime,
        IntervalQuality::Augmented,
        0,
        Direction::Up,
    );
    let mut current = pitch(DiatonicPitch::E, Accidental::DoubleFlat, 4);
    for _ in 0..4 {
        current = current.transpose(augmented_prime_up).unwrap();
        assert_eq!(current.letter(), DiatonicPitch::E);
        assert_eq!(current.octave(), 4);
    }
    assert_eq!(current, pitch(DiatonicPitch::E, Accidental::DoubleSharp, 4));
    assert_eq!(
        current.transpose(augmented_prime_up),
        Err(TonalError::OutOfGamut)
    );

    // And back down again.
    let augmented_prime_down = augmented_prime_up.reversed();
    for _ in 0..4 {
        current = current.transpose(augmented_prime_down).unwrap();
    }
    assert_eq!(current, pitch(DiatonicPitch::E, Accidental::DoubleFlat, 4));
    assert_eq!(
        current.transpose(augmented_prime_down),
        Err(TonalError::OutOfGamut)
    );
}

#[test]
fn test_descending_fifths_walk() {
    // B##20 walks the line of fifths down to Fbb1 in 34 steps, crossing an
    // octave boundary on most of them; the 35th step leaves the gamut.
    let fifth_down = interval(
        DiatonicInterval::Fifth,
        IntervalQuality::Perfect,
        0,
        Direction::Down,
    );
    let mut current = pitch(DiatonicPitch::B, Accidental::DoubleSharp, 20);
    for _ in 0..34 {
        current = current.transpose(fifth_down).unwrap();
    }
    assert_eq!(current, pitch(DiatonicPitch::F, Accidental::DoubleFlat, 1));
    assert_eq!(current.transpose(fifth_down), Err(TonalError::OutOfGamut));
}

// =============================================================================
// MIDI-like note numbers
// =============================================================================

#[test]
fn test_midi_note_numbers() {
    assert_eq!(
        pitch(DiatonicPitch::C, Accidental::Natural, 0).midi_note_number(),
        0
    );
    assert_eq!(
        pitch(DiatonicPitch::C, Accidental::Natural, 4).midi_note_number(),
        48
    );
    assert_eq!(
        pitch(DiatonicPitch::G, Accidental::Sharp, 4).midi_note_number(),
        56
    );
    // The slack semitones below C0 are representable.
    assert_eq!(
        pitch(DiatonicPitch::C, Accidental::DoubleFlat, 0).midi_note_number(),
        -2
    );
}

#[test]
fn test_enharmonic_pitches_share_note_number() {
    let d_sharp = pitch(DiatonicPitch::D, Accidental::Sharp, 3);
    let e_flat = pitch(DiatonicPitch::E, Accidental::Flat, 3);
    assert_ne!(d_sharp, e_flat);
    assert_eq!(d_sharp.midi_note_number(), e_flat.midi_note_number());
}
