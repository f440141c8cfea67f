// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render plans: the per-update description a host draws and animates.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::Rect;
use peniko::Color;
use understory_odometer::Classification;

use crate::animation::ScrollAnimation;

/// What a single cell shows.
#[derive(Clone, Debug, PartialEq)]
pub enum CellContent {
    /// The leading currency symbol run (symbol plus trailing space).
    Symbol(String),
    /// A glyph drawn once, without motion.
    Static(char),
    /// A glyph stack scrolled vertically inside the cell.
    Scroll(ScrollAnimation),
}

impl CellContent {
    /// Appends the text the cell shows once all motion has stopped.
    pub fn push_resting_text(&self, out: &mut String) {
        match self {
            Self::Symbol(symbol) => out.push_str(symbol),
            Self::Static(c) => out.push(*c),
            Self::Scroll(scroll) => out.push(scroll.sequence.resting()),
        }
    }
}

/// One laid-out cell of the label.
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphCell {
    /// Cell bounds in label coordinates. Scroll stacks are clipped to it.
    pub rect: Rect,
    /// What the cell shows.
    pub content: CellContent,
}

/// Receives a [`RenderPlan`] cell by cell.
///
/// This is the seam to the host's drawing and animation engine. Scrolls are
/// fire-and-forget: the host plays them on its own clock.
pub trait RenderSink {
    /// Draws `text` once inside `rect`.
    fn draw_static(&mut self, rect: Rect, text: &str, color: Color);

    /// Stacks `animation`'s frames inside `rect` and plays the scroll.
    fn play_vertical_scroll(&mut self, rect: Rect, animation: &ScrollAnimation, color: Color);
}

/// Everything needed to draw one label update.
///
/// Each update produces a fresh plan; hosts drop the previous one (and any
/// scrolls still playing from it) rather than patching it.
#[derive(Clone, Debug)]
pub struct RenderPlan {
    pub(crate) text: String,
    pub(crate) color: Color,
    pub(crate) cells: Vec<GlyphCell>,
    pub(crate) classification: Classification,
}

impl RenderPlan {
    /// Full display text, including the symbol run when shown.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text color for every cell.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Cells, left to right.
    #[must_use]
    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    /// Classification of the formatted number's positions (symbol excluded).
    #[must_use]
    pub fn classification(&self) -> &Classification {
        &self.classification
    }

    /// Returns `true` if any cell scrolls.
    #[must_use]
    pub fn is_animated(&self) -> bool {
        self.scroll_animations().next().is_some()
    }

    /// Iterates over the scrolling cells in stagger order.
    pub fn scroll_animations(&self) -> impl Iterator<Item = (Rect, &ScrollAnimation)> + '_ {
        self.cells.iter().filter_map(|cell| match &cell.content {
            CellContent::Scroll(scroll) => Some((cell.rect, scroll)),
            _ => None,
        })
    }

    /// Time until every lane is at rest.
    #[must_use]
    pub fn total_time(&self) -> Duration {
        self.scroll_animations()
            .map(|(_, scroll)| scroll.total_time())
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Text shown once all motion has stopped; equals [`RenderPlan::text`].
    #[must_use]
    pub fn resting_text(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for cell in &self.cells {
            cell.content.push_resting_text(&mut out);
        }
        out
    }

    /// Hands every cell to `sink`, left to right.
    pub fn replay<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        let mut buf = [0_u8; 4];
        for cell in &self.cells {
            match &cell.content {
                CellContent::Symbol(symbol) => sink.draw_static(cell.rect, symbol, self.color),
                CellContent::Static(c) => {
                    sink.draw_static(cell.rect, c.encode_utf8(&mut buf), self.color);
                }
                CellContent::Scroll(scroll) => {
                    sink.play_vertical_scroll(cell.rect, scroll, self.color);
                }
            }
        }
    }
}
