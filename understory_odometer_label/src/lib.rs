// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_odometer_label --heading-base-level=0

//! Understory Odometer Label: a number label that scrolls its digits.
//!
//! [`OdometerLabel`] shows a signed integer, optionally formatted as currency
//! with a leading symbol. When the value changes it produces a [`RenderPlan`]:
//! one [`GlyphCell`] per character, where moving digits carry a
//! [`ScrollAnimation`] (a stack of glyphs plus timing) and everything else is
//! static. The digit decisions come from [`understory_odometer`].
//!
//! The label does not draw, shape text, or run a clock. Hosts plug in:
//!
//! - a [`NumberFormatter`] for digit grouping: [`GroupingFormatter`] uses the
//!   explicit separators in [`FormatterConfig`], and `LocaleFormatter` (the
//!   default `icu` feature) formats with ICU4X locale data,
//! - a [`TextMeasure`] over their text stack (or [`MonospaceMeasure`]),
//! - a [`RenderSink`] that draws static glyphs and plays vertical scrolls, fed
//!   via [`RenderPlan::replay`].
//!
//! Updates run to completion on the caller's thread. Each one returns a fresh
//! plan, so a host that receives a new plan while the old one is still playing
//! simply tears the old one down.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use peniko::Color;
//! use understory_odometer_label::{
//!     GroupingFormatter, MonospaceMeasure, OdometerLabel, RenderSink, ScrollAnimation,
//! };
//!
//! #[derive(Default)]
//! struct Counter {
//!     statics: usize,
//!     scrolls: usize,
//! }
//!
//! impl RenderSink for Counter {
//!     fn draw_static(&mut self, _: Rect, _: &str, _: Color) {
//!         self.statics += 1;
//!     }
//!     fn play_vertical_scroll(&mut self, _: Rect, _: &ScrollAnimation, _: Color) {
//!         self.scrolls += 1;
//!     }
//! }
//!
//! let mut label = OdometerLabel::new(GroupingFormatter, MonospaceMeasure::new(12.0, 24.0), ());
//! label.set_frame(Size::new(200.0, 24.0));
//! label.set_number(1_999);
//!
//! let mut sink = Counter::default();
//! label.set_number(2_000).replay(&mut sink);
//! // "$ " and "," are static; all four digits changed.
//! assert_eq!((sink.statics, sink.scrolls), (2, 4));
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics are emitted through
//! `tracing`; installing a subscriber is up to the application.

#![no_std]

extern crate alloc;

mod animation;
mod easing;
mod format;
mod label;
mod layout;
#[cfg(feature = "icu")]
mod locale;
mod measure;
mod plan;

pub use animation::{AnimationConfig, ScrollAnimation, StaggerMode};
pub use easing::Easing;
pub use format::{
    FALLBACK_TEXT, FormatError, FormatterConfig, FormatterConfigError, GroupingFormatter,
    NumberFormatter, NumberStyle, format_or_fallback,
};
pub use label::{DisplayState, LabelConfig, OdometerLabel};
pub use layout::{HorizontalAlignment, VerticalAlignment};
#[cfg(feature = "icu")]
pub use locale::LocaleFormatter;
pub use measure::{MonospaceMeasure, TextMeasure};
pub use plan::{CellContent, GlyphCell, RenderPlan, RenderSink};

pub use understory_odometer::{Classification, PositionClass, ScrollSequence};
