// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Odometer stepper.
//!
//! A balance label starting at 800,000 is stepped up and down by 1,000, the way
//! a stepper control would drive it. Each update is printed as a filmstrip: the
//! text visible every 100ms until all digits settle.
//!
//! Run:
//! - `cargo run -p understory_odometer_demos --example odometer_stepper`
//! - `cargo run -p understory_odometer_demos --example odometer_stepper -- all`
//!   to roll every digit on each change.

use std::env;
use std::time::Duration;

use kurbo::Size;
use peniko::Color;
use understory_odometer_demos::{filmstrip::Filmstrip, init_tracing};
use understory_odometer_label::{
    GroupingFormatter, HorizontalAlignment, LabelConfig, MonospaceMeasure, OdometerLabel,
};

const BASE: i64 = 800_000;
const STEP: i64 = 1_000;

fn main() {
    init_tracing();
    let animate_all = env::args().nth(1).is_some_and(|arg| arg == "all");

    let mut label = OdometerLabel::new(GroupingFormatter, MonospaceMeasure::new(12.0, 35.0), ())
        .with_config(LabelConfig {
            animate_all_on_change: animate_all,
            horizontal_alignment: HorizontalAlignment::Left,
            color: Color::from_rgb8(0, 122, 255),
            ..LabelConfig::default()
        });
    label.set_frame(Size::new(300.0, 35.0));
    label.set_currency_symbol("\u{A5}");

    // Stepper positions 0..=10 with 5 as the resting middle.
    let positions = [5, 6, 7, 6, 5, 4, 0, 10, 10];
    for position in positions {
        let value = BASE + (position - 5) * STEP;
        let plan = label.set_number(value);
        tracing::info!(position, value, "stepper moved");

        let strip = Filmstrip::record(&plan);
        println!(
            "{value:>9} | {} lanes, settles in {:?}",
            plan.scroll_animations().count(),
            plan.total_time()
        );
        for (at, line) in strip.frames(Duration::from_millis(100)) {
            println!("  {:>5}ms  {line}", at.as_millis());
        }
    }
}
