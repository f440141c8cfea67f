// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatter configuration.
//!
//! Shows how formatter changes re-render the current value without animation,
//! how equivalent configs are ignored, and how locale data from
//! `LocaleFormatter` decides separators and grouping.
//!
//! Run:
//! - `cargo run -p understory_odometer_demos --example odometer_formatters`

use std::time::Duration;

use kurbo::Size;
use understory_odometer_demos::{filmstrip::Filmstrip, init_tracing};
use understory_odometer_label::{
    FormatterConfig, LocaleFormatter, MonospaceMeasure, OdometerLabel, RenderPlan,
    VerticalAlignment,
};

fn show(title: &str, plan: Option<&RenderPlan>) {
    let Some(plan) = plan else {
        println!("{title}: no visible change");
        return;
    };
    let strip = Filmstrip::record(plan);
    println!(
        "{title}: {:?} (animated: {}, columns at {:?})",
        plan.text(),
        plan.is_animated(),
        strip.column_edges()
    );
    for (at, line) in strip.frames(Duration::from_millis(250)) {
        println!("  {:>5}ms  {line}", at.as_millis());
    }
}

fn main() {
    init_tracing();

    let mut label = OdometerLabel::new(LocaleFormatter, MonospaceMeasure::new(10.0, 20.0), ());
    label.set_frame(Size::new(240.0, 40.0));
    label.config_mut().vertical_alignment = VerticalAlignment::Center;
    label.set_currency_symbol("EUR");

    show(
        "before any value",
        label
            .set_formatter_config(FormatterConfig::for_locale("de_DE"))
            .as_ref(),
    );
    show("first value", Some(&label.set_number(1_234_567)));

    let swiss = FormatterConfig::for_locale("de-CH").with_fraction_digits(2, 2);
    show(
        "switch to de-CH",
        label.set_formatter_config(swiss.clone()).as_ref(),
    );
    show(
        "same config again",
        label.set_formatter_config(swiss).as_ref(),
    );
    show("next value", Some(&label.set_number(1_244_567)));

    show(
        "switch to en-IN",
        label
            .set_formatter_config(FormatterConfig::for_locale("en-IN"))
            .as_ref(),
    );

    label.config_mut().is_currency = false;
    show("plain digits", label.refresh().as_ref());
    show("negative", Some(&label.set_number(-1_244_567)));
}
