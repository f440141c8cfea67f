// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the odometer demos.

pub mod filmstrip;

use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins; otherwise the odometer crates log at `debug` and
/// everything else at `warn`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("warn,understory_odometer=debug,understory_odometer_label=debug")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
