// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement seam.

use core::fmt;

use kurbo::Size;

/// Measures strings in a font.
///
/// Hosts implement this over their text stack. Sizes are in the same logical
/// units as the label frame; the label rounds and accumulates them itself.
pub trait TextMeasure {
    /// Font handle passed back to [`TextMeasure::measure`].
    type Font: Clone + fmt::Debug;

    /// Returns the width and height of `text` set in `font`.
    fn measure(&self, text: &str, font: &Self::Font) -> Size;
}

/// Measures every character with the same advance.
///
/// Useful for tests, terminals, and tabular-figure fonts where all digits share
/// one width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonospaceMeasure {
    /// Horizontal advance of each character.
    pub advance: f64,
    /// Height of every line.
    pub line_height: f64,
}

impl MonospaceMeasure {
    /// Creates a measurer with the given advance and line height.
    #[must_use]
    pub const fn new(advance: f64, line_height: f64) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasure for MonospaceMeasure {
    type Font = ();

    fn measure(&self, text: &str, _font: &()) -> Size {
        Size::new(self.advance * text.chars().count() as f64, self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_chars_not_bytes() {
        let m = MonospaceMeasure::new(10.0, 24.0);
        assert_eq!(m.measure("1,000", &()), Size::new(50.0, 24.0));
        assert_eq!(m.measure("\u{A5} 1", &()), Size::new(30.0, 24.0));
        assert_eq!(m.measure("", &()), Size::new(0.0, 24.0));
    }
}
