// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`RenderSink`] that turns a plan into lines of text, one per sampled instant.
//!
//! Each cell becomes one column group; scrolling cells show whichever frame of
//! their stack is closest to the visible window at the sampled time.

use std::time::Duration;

use kurbo::Rect;
use peniko::Color;
use understory_odometer_label::{RenderPlan, RenderSink, ScrollAnimation};

#[derive(Clone, Debug)]
enum Column {
    Static(String),
    Scroll(ScrollAnimation),
}

/// Collects a replayed plan and samples it over time.
#[derive(Clone, Debug, Default)]
pub struct Filmstrip {
    columns: Vec<(Rect, Column)>,
}

impl Filmstrip {
    /// Replays `plan` into a fresh filmstrip.
    pub fn record(plan: &RenderPlan) -> Self {
        let mut strip = Self::default();
        plan.replay(&mut strip);
        strip
    }

    /// Time until every scroll has settled.
    pub fn total_time(&self) -> Duration {
        self.columns
            .iter()
            .filter_map(|(_, column)| match column {
                Column::Scroll(scroll) => Some(scroll.total_time()),
                Column::Static(_) => None,
            })
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Text visible at `elapsed` after playback started.
    pub fn line_at(&self, elapsed: Duration) -> String {
        let mut line = String::new();
        for (_, column) in &self.columns {
            match column {
                Column::Static(text) => line.push_str(text),
                Column::Scroll(scroll) => line.push(scroll.frame_at(elapsed)),
            }
        }
        line
    }

    /// Samples the strip every `step` until it settles, including the final frame.
    pub fn frames(&self, step: Duration) -> Vec<(Duration, String)> {
        let total = self.total_time();
        let mut out = Vec::new();
        let mut at = Duration::ZERO;
        while at < total && !step.is_zero() {
            out.push((at, self.line_at(at)));
            at += step;
        }
        out.push((total, self.line_at(total)));
        out
    }

    /// Left edge of every column, for checking layout by eye.
    pub fn column_edges(&self) -> Vec<f64> {
        self.columns.iter().map(|(rect, _)| rect.x0).collect()
    }
}

impl RenderSink for Filmstrip {
    fn draw_static(&mut self, rect: Rect, text: &str, _color: Color) {
        self.columns.push((rect, Column::Static(text.to_owned())));
    }

    fn play_vertical_scroll(&mut self, rect: Rect, animation: &ScrollAnimation, _color: Color) {
        self.columns.push((rect, Column::Scroll(*animation)));
    }
}
