// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale-aware formatting backed by ICU4X data.

use alloc::string::{String, ToString};

use fixed_decimal::Decimal;
use icu::decimal::options::{DecimalFormatterOptions, GroupingStrategy};
use icu::decimal::{DecimalFormatter, DecimalFormatterPreferences};
use icu::locale::Locale;

use crate::format::{FormatError, FormatterConfig, NumberFormatter, NumberStyle};

/// Formats with the CLDR conventions of [`FormatterConfig::locale`].
///
/// Separator characters, group sizes (including the Indian `12,34,567` style)
/// and minimum grouping (Spanish leaves `1234` ungrouped) all come from the
/// locale data, so `grouping_separator`, `decimal_separator` and
/// `grouping_size` are ignored here. `style`, `uses_grouping`,
/// `min_integer_digits` and `min_fraction_digits` still apply. A config
/// without a locale formats for the root locale (`und`).
///
/// Locales whose default numbering system is not Latin produce digits that are
/// not ASCII; those positions never animate.
///
/// ```rust
/// use understory_odometer_label::{FormatterConfig, LocaleFormatter, NumberFormatter};
///
/// let indian = FormatterConfig::for_locale("en-IN");
/// assert_eq!(LocaleFormatter.format(1_234_567, &indian).unwrap(), "12,34,567");
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct LocaleFormatter;

impl NumberFormatter for LocaleFormatter {
    fn format(&self, value: i64, config: &FormatterConfig) -> Result<String, FormatError> {
        config.validate()?;

        let tag = config.locale.as_deref().unwrap_or("und");
        let locale = parse_locale(tag).ok_or(FormatError::UnsupportedLocale)?;

        let grouped = config.style == NumberStyle::Decimal && config.uses_grouping;
        let mut options = DecimalFormatterOptions::default();
        options.grouping_strategy = Some(if grouped {
            GroupingStrategy::Auto
        } else {
            GroupingStrategy::Never
        });
        let formatter =
            DecimalFormatter::try_new(DecimalFormatterPreferences::from(&locale), options)
                .map_err(|err| {
                    tracing::debug!(locale = tag, error = %err, "no decimal format data");
                    FormatError::UnsupportedLocale
                })?;

        let mut decimal = Decimal::from(value);
        if config.min_integer_digits > 1 {
            decimal
                .absolute
                .pad_start(i16::from(config.min_integer_digits) - 1);
        }
        if config.style == NumberStyle::Decimal && config.min_fraction_digits > 0 {
            decimal
                .absolute
                .pad_end(-i16::from(config.min_fraction_digits));
        }
        Ok(formatter.format(&decimal).to_string())
    }
}

/// Parses a BCP 47 tag, also accepting POSIX-style `_` delimiters.
fn parse_locale(tag: &str) -> Option<Locale> {
    tag.replace('_', "-").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(value: i64, tag: &str) -> String {
        LocaleFormatter
            .format(value, &FormatterConfig::for_locale(tag))
            .unwrap()
    }

    #[test]
    fn group_sizes_follow_the_locale() {
        assert_eq!(fmt(1_234_567, "en-US"), "1,234,567");
        assert_eq!(fmt(1_234_567, "en-IN"), "12,34,567");
        assert_eq!(fmt(1_234, "en-IN"), "1,234");
    }

    #[test]
    fn minimum_grouping_follows_the_locale() {
        assert_eq!(fmt(1_234, "es-ES"), "1234");
        assert_eq!(fmt(1_234_567, "es-ES"), "1.234.567");
        assert_eq!(fmt(1_234, "en-US"), "1,234");
    }

    #[test]
    fn separators_follow_the_locale() {
        assert_eq!(fmt(1_234_567, "de-DE"), "1.234.567");
        assert_eq!(fmt(1_234_567, "de-AT"), "1\u{A0}234\u{A0}567");
        assert_eq!(fmt(1_234_567, "fr-FR"), "1\u{202F}234\u{202F}567");
    }

    #[test]
    fn underscore_tags_are_accepted() {
        assert_eq!(fmt(1_234_567, "de_DE"), fmt(1_234_567, "de-DE"));
    }

    #[test]
    fn fraction_digits_use_the_locale_decimal_separator() {
        let config = FormatterConfig::for_locale("de-DE").with_fraction_digits(2, 2);
        assert_eq!(LocaleFormatter.format(1_234, &config).unwrap(), "1.234,00");
    }

    #[test]
    fn grouping_and_style_flags_still_apply() {
        let ungrouped = FormatterConfig::for_locale("en-US").with_grouping(false);
        assert_eq!(LocaleFormatter.format(1_234_567, &ungrouped).unwrap(), "1234567");

        let plain = FormatterConfig {
            locale: Some(String::from("en-US")),
            ..FormatterConfig::plain().with_fraction_digits(2, 2)
        };
        assert_eq!(LocaleFormatter.format(-1_234_567, &plain).unwrap(), "-1234567");
    }

    #[test]
    fn negative_values_keep_a_sign() {
        assert_eq!(fmt(-42, "en-US"), "-42");
    }

    #[test]
    fn malformed_tags_are_rejected() {
        let config = FormatterConfig::for_locale("!!");
        assert_eq!(
            LocaleFormatter.format(1, &config),
            Err(FormatError::UnsupportedLocale)
        );
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let config = FormatterConfig::for_locale("en-US").with_fraction_digits(3, 1);
        assert!(matches!(
            LocaleFormatter.format(1, &config),
            Err(FormatError::InvalidConfig(_))
        ));
    }
}
