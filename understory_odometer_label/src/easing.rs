// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves for scroll animations.

use kurbo::{CubicBez, ParamCurve, Point};

/// Bisection steps used to invert a curve's x component; 2^-40 is well below
/// anything visible.
const SOLVE_ITERATIONS: usize = 40;

/// Maps linear animation progress to eased progress.
///
/// The named curves use the conventional cubic Bézier control points for
/// timing functions, with endpoints fixed at `(0, 0)` and `(1, 1)`.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Slow start: `(0.42, 0.0)`, `(1.0, 1.0)`.
    EaseIn,
    /// Slow finish: `(0.0, 0.0)`, `(0.58, 1.0)`.
    #[default]
    EaseOut,
    /// Slow start and finish: `(0.42, 0.0)`, `(0.58, 1.0)`.
    EaseInEaseOut,
    /// A caller-supplied curve from `(0, 0)` to `(1, 1)`.
    ///
    /// The x component must be monotonic for [`Easing::apply`] to be meaningful.
    Custom(CubicBez),
}

impl Easing {
    /// Builds a custom timing curve from its two inner control points.
    #[must_use]
    pub fn cubic(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::Custom(timing_curve(x1, y1, x2, y2))
    }

    /// Returns the curve backing this easing, or `None` for [`Easing::Linear`].
    #[must_use]
    pub fn curve(self) -> Option<CubicBez> {
        match self {
            Self::Linear => None,
            Self::EaseIn => Some(timing_curve(0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some(timing_curve(0.0, 0.0, 0.58, 1.0)),
            Self::EaseInEaseOut => Some(timing_curve(0.42, 0.0, 0.58, 1.0)),
            Self::Custom(curve) => Some(curve),
        }
    }

    /// Returns eased progress for linear `progress`.
    ///
    /// Input is clamped to `[0, 1]` (NaN counts as `0`); the endpoints map
    /// exactly to themselves.
    ///
    /// ```rust
    /// use understory_odometer_label::Easing;
    ///
    /// assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
    /// assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
    /// assert!(Easing::EaseOut.apply(0.5) > 0.5);
    /// ```
    #[must_use]
    pub fn apply(self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }
        match self.curve() {
            None => progress,
            Some(curve) => solve_y_for_x(&curve, progress),
        }
    }
}

fn timing_curve(x1: f64, y1: f64, x2: f64, y2: f64) -> CubicBez {
    CubicBez::new(
        Point::ZERO,
        Point::new(x1, y1),
        Point::new(x2, y2),
        Point::new(1.0, 1.0),
    )
}

fn solve_y_for_x(curve: &CubicBez, x: f64) -> f64 {
    let (mut lo, mut hi) = (0.0, 1.0);
    for _ in 0..SOLVE_ITERATIONS {
        let mid = (lo + hi) * 0.5;
        if curve.eval(mid).x < x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    curve.eval((lo + hi) * 0.5).y
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInEaseOut,
    ];

    #[test]
    fn endpoints_and_clamping() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        for p in [0.1, 0.25, 0.5, 0.9] {
            assert_eq!(Easing::Linear.apply(p), p);
        }
    }

    #[test]
    fn curves_bend_the_right_way() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
        assert!(Easing::EaseIn.apply(0.5) < 0.5);
        assert!((Easing::EaseInEaseOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn curves_are_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 1..=100 {
                let y = easing.apply(f64::from(step) / 100.0);
                assert!(y >= last - 1e-9, "{easing:?} dipped at step {step}");
                last = y;
            }
        }
    }

    #[test]
    fn custom_matches_named_curve() {
        let custom = Easing::cubic(0.0, 0.0, 0.58, 1.0);
        assert_eq!(custom.curve(), Easing::EaseOut.curve());
        assert_eq!(custom.apply(0.3), Easing::EaseOut.apply(0.3));
    }
}
