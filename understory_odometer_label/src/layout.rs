// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the text run inside the label frame.

use kurbo::{Point, Size};

/// Horizontal placement of the text run inside the label frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Start at the left edge.
    #[default]
    Left,
    /// Center the run.
    Center,
    /// End at the right edge.
    Right,
}

/// Vertical placement of the text run inside the label frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Align to the top edge.
    #[default]
    Top,
    /// Center vertically.
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Returns the top-left corner of a `text`-sized run placed in `frame`.
///
/// Runs larger than the frame overflow symmetrically for `Center` and towards
/// the leading edge for `Right`/`Bottom`.
pub(crate) fn run_origin(
    frame: Size,
    text: Size,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Point {
    let x = match horizontal {
        HorizontalAlignment::Left => 0.0,
        HorizontalAlignment::Center => (frame.width - text.width) / 2.0,
        HorizontalAlignment::Right => frame.width - text.width,
    };
    let y = match vertical {
        VerticalAlignment::Top => 0.0,
        VerticalAlignment::Center => (frame.height - text.height) / 2.0,
        VerticalAlignment::Bottom => frame.height - text.height,
    };
    Point::new(x, y)
}
