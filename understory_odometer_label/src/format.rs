// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Number formatting: the formatter seam, its configuration, and a built-in grouping formatter.

use alloc::format;
use alloc::string::String;
use core::fmt;

/// Text shown when a formatter cannot produce a string.
pub const FALLBACK_TEXT: &str = "0";

/// Overall shape of formatted output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NumberStyle {
    /// Bare digits with an optional sign; grouping and fraction settings are ignored.
    Plain,
    /// Grouped integer digits, optionally followed by a decimal separator and fraction digits.
    #[default]
    Decimal,
}

/// Recognized formatting options.
///
/// Two configs are equivalent (see [`FormatterConfig::is_equivalent`]) when
/// every field matches; only a non-equivalent change re-renders a label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatterConfig {
    /// Output style.
    pub style: NumberStyle,
    /// Separator inserted between digit groups.
    pub grouping_separator: char,
    /// Separator between integer and fraction digits.
    pub decimal_separator: char,
    /// Whether integer digits are grouped at all.
    pub uses_grouping: bool,
    /// Number of digits per group, counted from the decimal point.
    pub grouping_size: u8,
    /// Minimum number of fraction digits to emit.
    pub min_fraction_digits: u8,
    /// Maximum number of fraction digits to emit.
    pub max_fraction_digits: u8,
    /// Minimum number of integer digits; shorter values are zero-padded.
    pub min_integer_digits: u8,
    /// BCP 47 locale tag, read by locale-aware formatters such as
    /// `LocaleFormatter` (`icu` feature).
    pub locale: Option<String>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            style: NumberStyle::Decimal,
            grouping_separator: ',',
            decimal_separator: '.',
            uses_grouping: true,
            grouping_size: 3,
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            min_integer_digits: 1,
            locale: None,
        }
    }
}

impl FormatterConfig {
    /// A config that renders bare digits.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            style: NumberStyle::Plain,
            uses_grouping: false,
            ..Self::default()
        }
    }

    /// A decimal config tagged with `tag`.
    ///
    /// Only the tag is recorded; the explicit separators keep their defaults.
    /// Locale-aware formatters read the tag and take separators and group
    /// sizes from locale data, while [`GroupingFormatter`] ignores it.
    ///
    /// ```rust
    /// use understory_odometer_label::FormatterConfig;
    ///
    /// let de = FormatterConfig::for_locale("de-DE");
    /// assert_eq!(de.locale.as_deref(), Some("de-DE"));
    /// assert!(!de.is_equivalent(&FormatterConfig::default()));
    /// ```
    #[must_use]
    pub fn for_locale(tag: &str) -> Self {
        Self {
            locale: Some(String::from(tag)),
            ..Self::default()
        }
    }

    /// Sets the grouping separator.
    #[must_use]
    pub fn with_grouping_separator(mut self, separator: char) -> Self {
        self.grouping_separator = separator;
        self
    }

    /// Sets the decimal separator.
    #[must_use]
    pub fn with_decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Enables or disables digit grouping.
    #[must_use]
    pub fn with_grouping(mut self, uses_grouping: bool) -> Self {
        self.uses_grouping = uses_grouping;
        self
    }

    /// Sets the minimum and maximum number of fraction digits.
    #[must_use]
    pub fn with_fraction_digits(mut self, min: u8, max: u8) -> Self {
        self.min_fraction_digits = min;
        self.max_fraction_digits = max;
        self
    }

    /// Sets the minimum number of integer digits.
    #[must_use]
    pub fn with_min_integer_digits(mut self, digits: u8) -> Self {
        self.min_integer_digits = digits;
        self
    }

    /// Returns `true` if both configs format every value identically.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.style == other.style
            && self.grouping_separator == other.grouping_separator
            && self.decimal_separator == other.decimal_separator
            && self.uses_grouping == other.uses_grouping
            && self.grouping_size == other.grouping_size
            && self.min_fraction_digits == other.min_fraction_digits
            && self.max_fraction_digits == other.max_fraction_digits
            && self.min_integer_digits == other.min_integer_digits
            && self.locale == other.locale
    }

    /// Checks that the config describes a formattable layout.
    pub fn validate(&self) -> Result<(), FormatterConfigError> {
        if self.min_fraction_digits > self.max_fraction_digits {
            return Err(FormatterConfigError::FractionDigitsInverted {
                min: self.min_fraction_digits,
                max: self.max_fraction_digits,
            });
        }
        for separator in [self.grouping_separator, self.decimal_separator] {
            if separator.is_ascii_digit() {
                return Err(FormatterConfigError::DigitSeparator(separator));
            }
        }
        if self.style == NumberStyle::Decimal
            && self.uses_grouping
            && self.min_fraction_digits > 0
            && self.grouping_separator == self.decimal_separator
        {
            return Err(FormatterConfigError::AmbiguousSeparators(
                self.grouping_separator,
            ));
        }
        Ok(())
    }

    fn groups_digits(&self) -> bool {
        self.style == NumberStyle::Decimal && self.uses_grouping && self.grouping_size > 0
    }
}

/// Error returned by [`FormatterConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatterConfigError {
    /// `min_fraction_digits` exceeds `max_fraction_digits`.
    FractionDigitsInverted {
        /// The configured minimum.
        min: u8,
        /// The configured maximum.
        max: u8,
    },
    /// A separator is itself a digit, so it could not be told apart from the number.
    DigitSeparator(char),
    /// Grouping and decimal separators are the same character while both are in use.
    AmbiguousSeparators(char),
}

impl fmt::Display for FormatterConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FractionDigitsInverted { min, max } => write!(
                f,
                "minimum fraction digits ({min}) exceed the maximum ({max})"
            ),
            Self::DigitSeparator(c) => write!(f, "separator {c:?} is a digit"),
            Self::AmbiguousSeparators(c) => write!(
                f,
                "grouping and decimal separators are both {c:?}"
            ),
        }
    }
}

impl core::error::Error for FormatterConfigError {}

/// Error returned when a [`NumberFormatter`] cannot format a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The formatter configuration is unusable.
    InvalidConfig(FormatterConfigError),
    /// The formatter refused this particular value.
    Rejected {
        /// The value that could not be formatted.
        value: i64,
    },
    /// The configured locale is malformed or has no formatting data.
    UnsupportedLocale,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(err) => write!(f, "invalid formatter config: {err}"),
            Self::Rejected { value } => write!(f, "formatter rejected {value}"),
            Self::UnsupportedLocale => {
                f.write_str("no number format data for the configured locale")
            }
        }
    }
}

impl core::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            Self::Rejected { .. } | Self::UnsupportedLocale => None,
        }
    }
}

impl From<FormatterConfigError> for FormatError {
    fn from(err: FormatterConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

/// Formats integers for display.
///
/// This is the seam to a host's locale-aware number formatting. Output is
/// expected to consist of ASCII digits plus non-digit separator characters;
/// only the digits animate.
pub trait NumberFormatter {
    /// Formats `value` according to `config`.
    fn format(&self, value: i64, config: &FormatterConfig) -> Result<String, FormatError>;
}

impl<F> NumberFormatter for F
where
    F: Fn(i64, &FormatterConfig) -> Result<String, FormatError>,
{
    fn format(&self, value: i64, config: &FormatterConfig) -> Result<String, FormatError> {
        self(value, config)
    }
}

/// Built-in formatter driven entirely by [`FormatterConfig`]'s explicit fields.
///
/// The locale tag is ignored; separators and `grouping_size` are used as given.
/// Integers have no fractional part, so fraction digits (when
/// `min_fraction_digits > 0`) are always zeros.
///
/// ```rust
/// use understory_odometer_label::{FormatterConfig, GroupingFormatter, NumberFormatter};
///
/// let config = FormatterConfig::default().with_fraction_digits(2, 2);
/// let text = GroupingFormatter.format(-1_234_567, &config).unwrap();
/// assert_eq!(text, "-1,234,567.00");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct GroupingFormatter;

impl NumberFormatter for GroupingFormatter {
    fn format(&self, value: i64, config: &FormatterConfig) -> Result<String, FormatError> {
        config.validate()?;

        let digits = format!(
            "{:0width$}",
            value.unsigned_abs(),
            width = usize::from(config.min_integer_digits)
        );
        let group = usize::from(config.grouping_size);
        let grouped = config.groups_digits();

        let mut out = String::with_capacity(digits.len() * 2 + 1);
        if value < 0 {
            out.push('-');
        }
        for (index, digit) in digits.chars().enumerate() {
            if grouped && index > 0 && (digits.len() - index) % group == 0 {
                out.push(config.grouping_separator);
            }
            out.push(digit);
        }
        if config.style == NumberStyle::Decimal && config.min_fraction_digits > 0 {
            out.push(config.decimal_separator);
            out.extend(core::iter::repeat_n('0', usize::from(config.min_fraction_digits)));
        }
        Ok(out)
    }
}

/// Formats `value`, substituting [`FALLBACK_TEXT`] when the formatter fails.
///
/// Failures are logged and never propagated, so a label always has something
/// to show.
pub fn format_or_fallback<F>(formatter: &F, value: i64, config: &FormatterConfig) -> String
where
    F: NumberFormatter + ?Sized,
{
    match formatter.format(value, config) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(value, error = %err, "number formatter failed; showing fallback");
            String::from(FALLBACK_TEXT)
        }
    }
}
