use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;

/// Placeholder shown when the pointer cannot be resolved to a data point.
pub const OUT_OF_RANGE_TEXT: &str = "Mouse pointer is out of range";

/// Formatting strategy for the live coordinate readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReadoutFormat {
    /// `(D.M.Y, v.vvvv)`: x as a UTC calendar date with 1-indexed day and
    /// month, y with four decimals. Used by quote-performance pages.
    DateValue,
    /// `(x.xxx, y.yyy)`: both coordinates with three decimals. Used by the
    /// parameterized demo page.
    FixedPair,
}

impl ReadoutFormat {
    /// Formats a resolved data point for display.
    #[must_use]
    pub fn format(self, point: DataPoint) -> String {
        match self {
            Self::DateValue => match DateTime::from_timestamp_millis(point.x as i64) {
                Some(date) => format!(
                    "({}.{}.{}, {:.4})",
                    date.day(),
                    date.month(),
                    date.year(),
                    point.y
                ),
                // Timestamps outside the representable range fall back to
                // numeric display instead of failing the readout.
                None => format!("({:.3}, {:.4})", point.x, point.y),
            },
            Self::FixedPair => format!("({:.3}, {:.3})", point.x, point.y),
        }
    }

    /// Text shown when the inversion query reports no data under the pointer.
    #[must_use]
    pub fn absent_text(self) -> &'static str {
        OUT_OF_RANGE_TEXT
    }
}
