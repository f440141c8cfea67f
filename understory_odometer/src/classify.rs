// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-position classification of a newly formatted number against the previous one.

use core::slice;

use smallvec::SmallVec;

/// Inline capacity for per-position buffers.
///
/// A grouped `i64` with a sign needs 26 chars, so most labels never spill.
const INLINE: usize = 32;

/// How a single character position of the new string should be presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum PositionClass {
    /// Rendered as one static glyph.
    ///
    /// Separators are always unanimated, as are digits that did not change and
    /// sit at or to the left of the leftmost change.
    #[default]
    Unanimated,
    /// The digit differs from the previous string (or the position is new) and
    /// rolls up to its new value.
    Changed,
    /// The digit kept its value but sits to the right of a change, so it plays a
    /// full `0..=9` spin and lands back where it started.
    DecorativeScroll,
}

impl PositionClass {
    /// Returns `true` if this position needs a scroll animation.
    #[must_use]
    pub const fn is_animated(self) -> bool {
        !matches!(self, Self::Unanimated)
    }
}

/// Returns `true` for characters that never animate.
///
/// Only ASCII digits scroll. Grouping and decimal separators, signs and any
/// literal characters a formatter emits are drawn as static glyphs.
#[must_use]
pub const fn is_static_glyph(c: char) -> bool {
    !c.is_ascii_digit()
}

/// The classification of every character position in one update.
///
/// Produced by [`classify`]; its length always matches the new string's
/// length in `char`s.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    classes: SmallVec<[PositionClass; INLINE]>,
}

impl Classification {
    /// Returns the number of classified positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns `true` if there are no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Returns the classes as a slice, indexed by character position.
    #[must_use]
    pub fn as_slice(&self) -> &[PositionClass] {
        &self.classes
    }

    /// Returns the class at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PositionClass> {
        self.classes.get(index).copied()
    }

    /// Iterates over the classes from the most significant position.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = PositionClass> + '_ {
        self.classes.iter().copied()
    }

    /// Returns `true` if no position animates, i.e. the update is visually a no-op.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.classes.iter().all(|c| !c.is_animated())
    }

    /// Returns the number of positions that need a scroll animation.
    #[must_use]
    pub fn animated_count(&self) -> usize {
        self.classes.iter().filter(|c| c.is_animated()).count()
    }

    /// Returns the index of the leftmost [`PositionClass::Changed`] position.
    #[must_use]
    pub fn first_changed(&self) -> Option<usize> {
        self.classes
            .iter()
            .position(|c| *c == PositionClass::Changed)
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = &'a PositionClass;
    type IntoIter = slice::Iter<'a, PositionClass>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

/// Classifies every character of `new` relative to `old`.
///
/// Positions are compared index by index, counting `char`s from the left. A
/// digit position past the end of `old` counts as changed, so a number that
/// grows a digit (or a first update diffed against `""`) animates the new
/// positions.
///
/// When nothing changed, every position is [`PositionClass::Unanimated`].
/// Otherwise, with `animate_all_on_change` every digit becomes
/// [`PositionClass::Changed`]; without it, unchanged digits to the right of the
/// leftmost change become [`PositionClass::DecorativeScroll`] and those at or
/// left of it stay [`PositionClass::Unanimated`].
///
/// ```rust
/// use understory_odometer::{PositionClass, classify};
///
/// // Same value twice: nothing moves.
/// assert!(classify("1,024", "1,024", false).is_static());
///
/// // Full refresh: every digit rolls, separators stay put.
/// let all = classify("1,025", "1,024", true);
/// assert_eq!(all.get(1), Some(PositionClass::Unanimated));
/// assert_eq!(all.animated_count(), 4);
/// ```
#[must_use]
pub fn classify(new: &str, old: &str, animate_all_on_change: bool) -> Classification {
    let new: SmallVec<[char; INLINE]> = new.chars().collect();
    let old: SmallVec<[char; INLINE]> = old.chars().collect();
    classify_chars(&new, &old, animate_all_on_change)
}

/// Like [`classify`], for callers that already hold the strings as `char` slices.
#[must_use]
pub fn classify_chars(new: &[char], old: &[char], animate_all_on_change: bool) -> Classification {
    let mut classes: SmallVec<[PositionClass; INLINE]> = SmallVec::with_capacity(new.len());
    let mut leftmost_changed = None;

    for (index, &c) in new.iter().enumerate() {
        let class = if is_static_glyph(c) || old.get(index) == Some(&c) {
            PositionClass::Unanimated
        } else {
            if leftmost_changed.is_none() {
                leftmost_changed = Some(index);
            }
            PositionClass::Changed
        };
        classes.push(class);
    }

    let Some(leftmost_changed) = leftmost_changed else {
        return Classification { classes };
    };

    for (index, (&c, class)) in new.iter().zip(classes.iter_mut()).enumerate() {
        if is_static_glyph(c) || *class == PositionClass::Changed {
            continue;
        }
        *class = if animate_all_on_change {
            PositionClass::Changed
        } else if index > leftmost_changed {
            PositionClass::DecorativeScroll
        } else {
            PositionClass::Unanimated
        };
    }

    Classification { classes }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::String;

    use PositionClass::{Changed, DecorativeScroll, Unanimated};

    #[test]
    fn empty_strings_classify_to_nothing() {
        let classes = classify("", "", false);
        assert!(classes.is_empty());
        assert!(classes.is_static());
        assert_eq!(classes.first_changed(), None);
    }

    #[test]
    fn empty_new_string_ignores_old() {
        assert!(classify("", "123", true).is_empty());
    }

    #[test]
    fn all_separator_strings_stay_still() {
        let classes = classify(",.,", ".,.", true);
        assert_eq!(classes.as_slice(), &[Unanimated; 3]);
    }

    #[test]
    fn diff_against_empty_marks_every_digit_changed() {
        let classes = classify("1,500", "", false);
        assert_eq!(
            classes.as_slice(),
            &[Changed, Unanimated, Changed, Changed, Changed]
        );
    }

    #[test]
    fn grown_digit_counts_as_changed() {
        // 999 -> 1000 without grouping: every position differs or is new.
        let classes = classify("1000", "999", false);
        assert_eq!(classes.as_slice(), &[Changed; 4]);
    }

    #[test]
    fn misaligned_separators_are_absorbed() {
        // "999" -> "1,000": the separator lands where a digit used to be.
        let classes = classify("1,000", "999", false);
        assert_eq!(
            classes.as_slice(),
            &[Changed, Unanimated, Changed, Changed, Changed]
        );
    }

    #[test]
    fn shrinking_number_compares_by_index() {
        // 1000 -> 999: the trailing old position is simply ignored.
        let classes = classify("999", "1000", false);
        assert_eq!(classes.as_slice(), &[Changed; 3]);
    }

    #[test]
    fn unchanged_digit_right_of_change_spins() {
        let classes = classify("1205", "1105", false);
        assert_eq!(
            classes.as_slice(),
            &[Unanimated, Changed, DecorativeScroll, DecorativeScroll]
        );
        assert_eq!(classes.first_changed(), Some(1));
        assert_eq!(classes.animated_count(), 3);
    }

    #[test]
    fn changed_positions_between_changes_keep_their_class() {
        let classes = classify("1919", "1010", false);
        assert_eq!(
            classes.as_slice(),
            &[Unanimated, Changed, DecorativeScroll, Changed]
        );
    }

    #[test]
    fn sign_is_static() {
        let classes = classify("-42", "-41", false);
        assert_eq!(classes.as_slice(), &[Unanimated, Unanimated, Changed]);

        let flipped = classify("-41", "41", true);
        assert_eq!(flipped.get(0), Some(Unanimated));
        assert_eq!(flipped.animated_count(), 2);
    }

    #[test]
    fn get_out_of_range_is_none() {
        let classes = classify("12", "11", false);
        assert_eq!(classes.get(2), None);
        assert_eq!(classes.iter().len(), 2);
        assert_eq!((&classes).into_iter().count(), 2);
    }

    #[test]
    fn long_strings_spill_without_changing_results() {
        let old = "1234567890".repeat(5);
        let mut new = String::from(&old[..old.len() - 1]);
        new.push('1');

        let classes = classify(&new, &old, false);
        assert_eq!(classes.len(), 50);
        assert_eq!(classes.get(49), Some(Changed));
        assert_eq!(classes.animated_count(), 1);
    }
}
