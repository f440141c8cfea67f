// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph stacks for scrolling digit positions.

use crate::classify::PositionClass;

/// Number of frames in every [`ScrollSequence`].
pub const SEQUENCE_LEN: usize = 11;

const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// The ordered glyphs a scrolling position passes through.
///
/// Frames are stacked top to bottom in cells of equal height; the animation
/// translates the stack until the resting frame (always the last one) sits in
/// the visible window. The resting frame always equals the target digit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScrollSequence {
    frames: [char; SEQUENCE_LEN],
}

impl ScrollSequence {
    /// Builds the roll for a digit that changed to `DIGITS[target]`.
    ///
    /// Starts at `0`, then counts up from the target with wrap-around for nine
    /// frames, then rests on the target.
    fn changed(target: usize) -> Self {
        let mut frames = ['0'; SEQUENCE_LEN];
        for (k, frame) in frames[1..SEQUENCE_LEN - 1].iter_mut().enumerate() {
            *frame = DIGITS[(target + k) % 10];
        }
        frames[SEQUENCE_LEN - 1] = DIGITS[target];
        Self { frames }
    }

    /// Builds the full `0..=9` spin for an unchanged digit, resting on `DIGITS[target]`.
    fn decorative(target: usize) -> Self {
        let mut frames = ['0'; SEQUENCE_LEN];
        frames[..10].copy_from_slice(&DIGITS);
        frames[SEQUENCE_LEN - 1] = DIGITS[target];
        Self { frames }
    }

    /// Returns the frames, first to last.
    #[must_use]
    pub fn frames(&self) -> &[char] {
        &self.frames
    }

    /// Returns the index of the resting frame.
    #[must_use]
    pub const fn resting_index(&self) -> usize {
        SEQUENCE_LEN - 1
    }

    /// Returns the glyph the position settles on.
    #[must_use]
    pub const fn resting(&self) -> char {
        self.frames[SEQUENCE_LEN - 1]
    }
}

/// Builds the scroll sequence for one position.
///
/// Returns `None` for [`PositionClass::Unanimated`], which renders as a single
/// static glyph. A non-digit `target` is a caller bug: it trips a debug
/// assertion, and release builds fall back to a static glyph by returning `None`.
///
/// ```rust
/// use understory_odometer::{PositionClass, build_sequence};
///
/// let roll = build_sequence(PositionClass::Changed, '7').unwrap();
/// assert_eq!(
///     roll.frames(),
///     &['0', '7', '8', '9', '0', '1', '2', '3', '4', '5', '7']
/// );
///
/// let spin = build_sequence(PositionClass::DecorativeScroll, '3').unwrap();
/// assert_eq!(spin.frames()[..10], ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9']);
/// assert_eq!(spin.resting(), '3');
///
/// assert!(build_sequence(PositionClass::Unanimated, '3').is_none());
/// ```
#[must_use]
pub fn build_sequence(class: PositionClass, target: char) -> Option<ScrollSequence> {
    let build = match class {
        PositionClass::Unanimated => return None,
        PositionClass::Changed => ScrollSequence::changed,
        PositionClass::DecorativeScroll => ScrollSequence::decorative,
    };
    let Some(digit) = DIGITS.iter().position(|&d| d == target) else {
        debug_assert!(false, "scroll target {target:?} is not an ASCII digit");
        return None;
    };
    Some(build(digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sequence_rests_on_its_target() {
        for class in [PositionClass::Changed, PositionClass::DecorativeScroll] {
            for target in DIGITS {
                let seq = build_sequence(class, target).unwrap();
                assert_eq!(seq.frames().len(), SEQUENCE_LEN);
                assert_eq!(seq.resting(), target);
                assert_eq!(seq.frames()[seq.resting_index()], target);
            }
        }
    }

    #[test]
    fn changed_roll_starts_at_zero_and_wraps() {
        let seq = build_sequence(PositionClass::Changed, '0').unwrap();
        assert_eq!(
            seq.frames(),
            &['0', '0', '1', '2', '3', '4', '5', '6', '7', '8', '0']
        );

        let seq = build_sequence(PositionClass::Changed, '9').unwrap();
        assert_eq!(
            seq.frames(),
            &['0', '9', '0', '1', '2', '3', '4', '5', '6', '7', '9']
        );
    }

    #[test]
    fn changed_roll_visits_target_right_after_zero() {
        for target in DIGITS {
            let seq = build_sequence(PositionClass::Changed, target).unwrap();
            assert_eq!(seq.frames()[0], '0');
            assert_eq!(seq.frames()[1], target);
        }
    }

    #[test]
    fn decorative_spin_is_a_full_cycle() {
        let seq = build_sequence(PositionClass::DecorativeScroll, '5').unwrap();
        assert_eq!(
            seq.frames(),
            &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '5']
        );
    }

    #[test]
    fn unanimated_positions_get_no_sequence() {
        assert_eq!(build_sequence(PositionClass::Unanimated, '4'), None);
        // Separators never reach the digit check.
        assert_eq!(build_sequence(PositionClass::Unanimated, ','), None);
    }

    #[test]
    #[cfg_attr(
        debug_assertions,
        should_panic(expected = "scroll target ',' is not an ASCII digit")
    )]
    fn non_digit_target_degrades_to_static() {
        assert_eq!(build_sequence(PositionClass::Changed, ','), None);
    }
}
