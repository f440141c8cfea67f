// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll animation timing.

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use understory_odometer::ScrollSequence;

use crate::easing::Easing;

/// How successive scrolling lanes are staggered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum StaggerMode {
    /// All lanes start together; lane `k` runs `k * stagger` longer.
    #[default]
    ExtendDuration,
    /// All lanes run for the base duration; lane `k` starts `k * stagger` later.
    DelayStart,
}

/// Timing shared by every scroll in a label update.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationConfig {
    /// Duration of the first lane.
    pub base_duration: Duration,
    /// Extra time added per subsequent lane.
    pub stagger: Duration,
    /// Timing curve for every lane.
    pub easing: Easing,
    /// Whether the stagger lengthens lanes or delays them.
    pub stagger_mode: StaggerMode,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            base_duration: Duration::from_millis(700),
            stagger: Duration::from_millis(200),
            easing: Easing::EaseOut,
            stagger_mode: StaggerMode::ExtendDuration,
        }
    }
}

impl AnimationConfig {
    /// Returns `(start_delay, duration)` for the `lane`-th animated position,
    /// counting scrolling positions only, from the left.
    ///
    /// ```rust
    /// use core::time::Duration;
    /// use understory_odometer_label::{AnimationConfig, StaggerMode};
    ///
    /// let config = AnimationConfig::default();
    /// assert_eq!(config.timing(2), (Duration::ZERO, Duration::from_millis(1100)));
    ///
    /// let delayed = AnimationConfig { stagger_mode: StaggerMode::DelayStart, ..config };
    /// assert_eq!(delayed.timing(2), (Duration::from_millis(400), Duration::from_millis(700)));
    /// ```
    #[must_use]
    pub fn timing(&self, lane: usize) -> (Duration, Duration) {
        let offset = self
            .stagger
            .saturating_mul(u32::try_from(lane).unwrap_or(u32::MAX));
        match self.stagger_mode {
            StaggerMode::ExtendDuration => {
                (Duration::ZERO, self.base_duration.saturating_add(offset))
            }
            StaggerMode::DelayStart => (offset, self.base_duration),
        }
    }
}

/// A vertical scroll through one position's glyph stack.
///
/// The stack's frames sit in cells of `cell_height`, frame `i` at
/// `i * cell_height`. The animation translates the stack from offset `0` (first
/// frame visible) to [`ScrollAnimation::resting_offset`] (resting frame
/// visible) and stops there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollAnimation {
    /// Glyphs stacked top to bottom.
    pub sequence: ScrollSequence,
    /// Height of each glyph cell.
    pub cell_height: f64,
    /// Time spent moving.
    pub duration: Duration,
    /// Time before the motion starts.
    pub start_delay: Duration,
    /// Timing curve.
    pub easing: Easing,
}

impl ScrollAnimation {
    /// Offset at which the resting frame is visible.
    #[must_use]
    pub fn resting_offset(&self) -> f64 {
        self.sequence.resting_index() as f64 * self.cell_height
    }

    /// Total height of the glyph stack.
    #[must_use]
    pub fn stack_height(&self) -> f64 {
        self.sequence.frames().len() as f64 * self.cell_height
    }

    /// Time from start of playback until the lane is at rest.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.start_delay.saturating_add(self.duration)
    }

    /// Returns `true` once the lane rests on its final frame.
    #[must_use]
    pub fn is_finished_at(&self, elapsed: Duration) -> bool {
        elapsed >= self.total_time()
    }

    /// Linear progress in `[0, 1]` at `elapsed` since playback started.
    #[must_use]
    pub fn progress_at(&self, elapsed: Duration) -> f64 {
        if elapsed <= self.start_delay {
            return if self.duration.is_zero() && elapsed == self.start_delay {
                1.0
            } else {
                0.0
            };
        }
        if self.duration.is_zero() {
            return 1.0;
        }
        let moving = elapsed - self.start_delay;
        (moving.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Vertical translation of the stack at `elapsed` since playback started.
    ///
    /// ```rust
    /// use core::time::Duration;
    /// use understory_odometer::{PositionClass, build_sequence};
    /// use understory_odometer_label::{Easing, ScrollAnimation};
    ///
    /// let lane = ScrollAnimation {
    ///     sequence: build_sequence(PositionClass::Changed, '4').unwrap(),
    ///     cell_height: 20.0,
    ///     duration: Duration::from_secs(1),
    ///     start_delay: Duration::ZERO,
    ///     easing: Easing::Linear,
    /// };
    /// assert_eq!(lane.offset_at(Duration::ZERO), 0.0);
    /// assert_eq!(lane.offset_at(Duration::from_millis(500)), 100.0);
    /// assert_eq!(lane.offset_at(Duration::from_secs(2)), lane.resting_offset());
    /// ```
    #[must_use]
    pub fn offset_at(&self, elapsed: Duration) -> f64 {
        self.resting_offset() * self.easing.apply(self.progress_at(elapsed))
    }

    /// The glyph closest to the visible window at `elapsed`.
    #[must_use]
    pub fn frame_at(&self, elapsed: Duration) -> char {
        let frames = self.sequence.frames();
        if self.cell_height <= 0.0 || self.is_finished_at(elapsed) {
            return self.sequence.resting();
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "offset is within [0, resting_offset], so the index is at most the resting index"
        )]
        let index = (self.offset_at(elapsed) / self.cell_height).round() as usize;
        frames[index.min(self.sequence.resting_index())]
    }
}
