// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The label shell: owns value and configuration, produces render plans.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::{Rect, Size};
use peniko::Color;
use understory_odometer::{Classification, build_sequence, classify};

use crate::animation::{AnimationConfig, ScrollAnimation};
use crate::format::{FormatterConfig, NumberFormatter, format_or_fallback};
use crate::layout::{HorizontalAlignment, VerticalAlignment, run_origin};
use crate::measure::TextMeasure;
use crate::plan::{CellContent, GlyphCell, RenderPlan};

/// Presentation flags for an [`OdometerLabel`].
///
/// None of these affect which positions animate, except
/// [`LabelConfig::animate_all_on_change`].
#[derive(Copy, Clone, Debug)]
pub struct LabelConfig {
    /// Format values with the number formatter and show the currency symbol.
    ///
    /// When off, values are shown as bare digits (`i64`'s `Display`).
    pub is_currency: bool,
    /// Show the currency symbol in currency mode.
    pub show_symbol: bool,
    /// When any digit changes, roll every digit instead of only changed ones.
    pub animate_all_on_change: bool,
    /// Horizontal placement inside the frame.
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical placement inside the frame.
    pub vertical_alignment: VerticalAlignment,
    /// Text color.
    pub color: Color,
    /// Scroll timing.
    pub animation: AnimationConfig,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            is_currency: true,
            show_symbol: true,
            animate_all_on_change: false,
            horizontal_alignment: HorizontalAlignment::Left,
            vertical_alignment: VerticalAlignment::Top,
            color: Color::BLACK,
            animation: AnimationConfig::default(),
        }
    }
}

/// Whether a label has shown a value yet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum DisplayState {
    /// Nothing has been set; the next update rolls every digit.
    #[default]
    Unset,
    /// The value currently shown.
    Set(i64),
}

impl DisplayState {
    /// Returns the shown value, if any.
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Unset => None,
            Self::Set(value) => Some(value),
        }
    }
}

/// A number label that scrolls digits odometer-style when its value changes.
///
/// The label never draws anything itself. Every operation that changes what is
/// visible returns a [`RenderPlan`] for the host to draw (see
/// [`RenderPlan::replay`]).
///
/// ```rust
/// use kurbo::Size;
/// use understory_odometer_label::{GroupingFormatter, MonospaceMeasure, OdometerLabel};
///
/// let mut label = OdometerLabel::new(GroupingFormatter, MonospaceMeasure::new(10.0, 20.0), ());
/// label.set_frame(Size::new(300.0, 35.0));
/// label.set_currency_symbol("\u{A5}");
///
/// let first = label.set_number(800_000);
/// assert_eq!(first.text(), "\u{A5} 800,000");
/// assert_eq!(first.scroll_animations().count(), 6);
///
/// // Only the thousands digit changes; the digits right of it spin.
/// let next = label.set_number(801_000);
/// assert_eq!(next.scroll_animations().count(), 4);
///
/// // Setting the same value again is a visual no-op.
/// assert!(!label.set_number(801_000).is_animated());
/// ```
#[derive(Debug)]
pub struct OdometerLabel<F, M: TextMeasure> {
    formatter: F,
    measure: M,
    font: M::Font,
    formatter_config: FormatterConfig,
    config: LabelConfig,
    currency_symbol: String,
    frame: Size,
    state: DisplayState,
    full_text: String,
}

impl<F: NumberFormatter, M: TextMeasure> OdometerLabel<F, M> {
    /// Creates an unset label with default configuration and a `$` symbol.
    #[must_use]
    pub fn new(formatter: F, measure: M, font: M::Font) -> Self {
        Self {
            formatter,
            measure,
            font,
            formatter_config: FormatterConfig::default(),
            config: LabelConfig::default(),
            currency_symbol: String::from("$"),
            frame: Size::ZERO,
            state: DisplayState::Unset,
            full_text: String::new(),
        }
    }

    /// Replaces the presentation flags. Builder-style counterpart of [`Self::set_config`].
    #[must_use]
    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the presentation flags.
    #[must_use]
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Returns the presentation flags for in-place edits.
    ///
    /// Edits take effect on the next update; call [`Self::refresh`] to re-render
    /// the current value immediately.
    pub fn config_mut(&mut self) -> &mut LabelConfig {
        &mut self.config
    }

    /// Replaces the presentation flags. Takes effect on the next update.
    pub fn set_config(&mut self, config: LabelConfig) {
        self.config = config;
    }

    /// Returns the formatter configuration.
    #[must_use]
    pub fn formatter_config(&self) -> &FormatterConfig {
        &self.formatter_config
    }

    /// Replaces the formatter configuration.
    ///
    /// If a value is shown and `config` formats differently from the current
    /// configuration, returns a plan re-rendering the current value without
    /// animation. Otherwise nothing visible changes and `None` is returned.
    pub fn set_formatter_config(&mut self, config: FormatterConfig) -> Option<RenderPlan> {
        let equivalent = self.formatter_config.is_equivalent(&config);
        self.formatter_config = config;
        if equivalent || self.state == DisplayState::Unset {
            return None;
        }
        tracing::debug!("formatter config changed; re-rendering without animation");
        self.refresh()
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Sets the currency symbol. Affects layout from the next render on.
    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) {
        self.currency_symbol = symbol.into();
    }

    /// Returns the label frame size.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Sets the label frame size used for alignment.
    pub fn set_frame(&mut self, frame: Size) {
        self.frame = frame;
    }

    /// Returns the font handed to the measurer.
    #[must_use]
    pub fn font(&self) -> &M::Font {
        &self.font
    }

    /// Sets the font handed to the measurer.
    pub fn set_font(&mut self, font: M::Font) {
        self.font = font;
    }

    /// Returns whether and what the label shows.
    #[must_use]
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Returns the shown value, if any.
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.state.value()
    }

    /// The formatted number currently shown, without the symbol run.
    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    /// The full text currently shown, including the symbol run when visible.
    #[must_use]
    pub fn display_text(&self) -> String {
        self.decorate(&self.full_text)
    }

    /// Shows `value`, animating the positions that differ from the previous value.
    ///
    /// The previous value is formatted with the current formatter and flags, so
    /// a mode or formatter change alone never animates. The first call after
    /// creation diffs against an empty string, so every digit rolls in. Calling
    /// this again before a previous plan finished playing is fine: the new plan
    /// replaces the old one wholesale.
    pub fn set_number(&mut self, value: i64) -> RenderPlan {
        let text = self.format_value(value);
        let previous = match self.state {
            DisplayState::Unset => String::new(),
            DisplayState::Set(previous) => self.format_value(previous),
        };
        let classification = classify(&text, &previous, self.config.animate_all_on_change);
        tracing::debug!(
            value,
            previous = ?self.state.value(),
            text = %text,
            animated = classification.animated_count(),
            "odometer update"
        );
        let plan = self.build_plan(&text, classification);
        self.state = DisplayState::Set(value);
        self.full_text = text;
        plan
    }

    /// Re-renders the current value without animation.
    ///
    /// Picks up formatter, symbol, frame and flag changes. Returns `None` while
    /// no value has been set.
    pub fn refresh(&mut self) -> Option<RenderPlan> {
        let value = self.state.value()?;
        let text = self.format_value(value);
        let classification = classify(&text, &text, false);
        let plan = self.build_plan(&text, classification);
        self.full_text = text;
        Some(plan)
    }

    fn symbol_shown(&self) -> bool {
        self.config.is_currency && self.config.show_symbol
    }

    fn symbol_run(&self) -> String {
        format!("{} ", self.currency_symbol)
    }

    fn decorate(&self, text: &str) -> String {
        if self.symbol_shown() {
            format!("{}{text}", self.symbol_run())
        } else {
            String::from(text)
        }
    }

    fn format_value(&self, value: i64) -> String {
        if self.config.is_currency {
            format_or_fallback(&self.formatter, value, &self.formatter_config)
        } else {
            value.to_string()
        }
    }

    fn build_plan(&self, text: &str, classification: Classification) -> RenderPlan {
        let display = self.decorate(text);
        let run = self.measure.measure(&display, &self.font).ceil();
        let origin = run_origin(
            self.frame,
            run,
            self.config.horizontal_alignment,
            self.config.vertical_alignment,
        );

        let mut cells = Vec::with_capacity(classification.len() + 1);
        let mut x = origin.x;

        if self.symbol_shown() {
            let symbol = self.symbol_run();
            let size = self.measure.measure(&symbol, &self.font);
            cells.push(GlyphCell {
                rect: Rect::from_origin_size((x, origin.y), size),
                content: CellContent::Symbol(symbol),
            });
            x += size.width;
        }

        let mut lane = 0;
        let mut buf = [0_u8; 4];
        for (c, class) in text.chars().zip(classification.iter()) {
            let size = self.measure.measure(c.encode_utf8(&mut buf), &self.font);
            let content = match build_sequence(class, c) {
                Some(sequence) => {
                    let (start_delay, duration) = self.config.animation.timing(lane);
                    tracing::trace!(lane, glyph = %c, ?class, ?duration, ?start_delay, "scroll lane");
                    lane += 1;
                    CellContent::Scroll(ScrollAnimation {
                        sequence,
                        cell_height: size.height,
                        duration,
                        start_delay,
                        easing: self.config.animation.easing,
                    })
                }
                None => CellContent::Static(c),
            };
            cells.push(GlyphCell {
                rect: Rect::from_origin_size((x, origin.y), size),
                content,
            });
            x += size.width.floor();
        }

        RenderPlan {
            text: display,
            color: self.config.color,
            cells,
            classification,
        }
    }
}
