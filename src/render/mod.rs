//! Terminal rendering
//!
//! Formats the retained samples as two aligned rows (prices, timestamps) and
//! repaints them in place.

mod writer;

pub use writer::LiveWriter;

use crate::sample::{Sample, SampleKind, Tint};
use rust_decimal::RoundingStrategy;

/// Width of the row label column
pub const LABEL_WIDTH: usize = 7;

/// Width of each sample column
pub const CELL_WIDTH: usize = 10;

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

/// Escape sequence for a tint, `None` when the cell is printed plain
pub const fn tint_color(tint: Tint) -> Option<&'static str> {
    match tint {
        Tint::Up => Some("\x1b[32m"),
        Tint::Down => Some("\x1b[31m"),
        Tint::Neutral => None,
    }
}

/// Format the price row and the timestamp row for `samples`, oldest first
pub fn format_rows(samples: &[Sample], color: bool) -> [String; 2] {
    let mut prices = format!("{:<width$}", "Price", width = LABEL_WIDTH);
    let mut times = format!("{:<width$}", "Time", width = LABEL_WIDTH);

    for sample in samples {
        prices.push_str(&format_price_cell(sample, color));
        times.push_str(&format!("{:<width$}", sample.timestamp, width = CELL_WIDTH));
    }

    [prices, times]
}

/// Format a single price cell, padded to `CELL_WIDTH`
pub fn format_price_cell(sample: &Sample, color: bool) -> String {
    let text = match sample.kind() {
        SampleKind::Placeholder => "-".to_string(),
        SampleKind::Failed => "Err!".to_string(),
        SampleKind::Quote => format!(
            "{:.2}",
            sample
                .price
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
    };
    let cell = format!("{:<width$}", text, width = CELL_WIDTH);

    match tint_color(sample.tint) {
        Some(code) if color && sample.is_quote() => format!("{code}{cell}{RESET}"),
        _ => cell,
    }
}
