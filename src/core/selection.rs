use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{PlotError, PlotResult};

/// The closed set of plot kinds the rendering backend can draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlotSelection {
    /// Named quote series over epoch-millisecond dates.
    ///
    /// `values` is laid out series-major: one run of `dates.len()` values per
    /// entry in `series_names`.
    Performance {
        title: String,
        dates: Vec<i64>,
        values: Vec<f64>,
        series_names: Vec<String>,
    },
    /// Parameterized demo performance plot.
    PerformanceDemo { samples: u32 },
    /// Parameterized demo power plot (`y = x^exponent`).
    Power { exponent: u32 },
}

impl PlotSelection {
    /// Builds a validated performance selection.
    pub fn performance(
        title: impl Into<String>,
        dates: Vec<i64>,
        values: Vec<f64>,
        series_names: Vec<String>,
    ) -> PlotResult<Self> {
        if dates.is_empty() {
            return Err(PlotError::InvalidData(
                "performance plot needs at least one date".to_owned(),
            ));
        }
        if series_names.is_empty() {
            return Err(PlotError::InvalidData(
                "performance plot needs at least one series name".to_owned(),
            ));
        }
        if values.len() != dates.len() * series_names.len() {
            return Err(PlotError::InvalidData(format!(
                "series-major value layout mismatch: {} values for {} dates x {} series",
                values.len(),
                dates.len(),
                series_names.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(PlotError::InvalidData(
                "performance values must be finite".to_owned(),
            ));
        }

        Ok(Self::Performance {
            title: title.into(),
            dates,
            values,
            series_names,
        })
    }

    /// Builds a single-series performance selection from a quote feed.
    pub fn from_quotes(
        title: impl Into<String>,
        series_name: impl Into<String>,
        quotes: &[(DateTime<Utc>, Decimal)],
    ) -> PlotResult<Self> {
        let mut dates = Vec::with_capacity(quotes.len());
        let mut values = Vec::with_capacity(quotes.len());
        for (time, value) in quotes {
            dates.push(datetime_to_unix_millis(*time) as i64);
            values.push(decimal_to_f64(*value, "quote")?);
        }
        Self::performance(title, dates, values, vec![series_name.into()])
    }

    /// Human-readable plot name used in status messages.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Performance { title, .. } => title,
            Self::PerformanceDemo { .. } => "performance",
            Self::Power { .. } => "power",
        }
    }
}

/// Matches a page-load hash fragment against selector option values.
///
/// Returns the matching option value so the host can pre-select it; a hash
/// that matches no option leaves the selector untouched.
#[must_use]
pub fn match_hash_selection<I>(hash: &str, options: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let wanted = hash.strip_prefix('#').unwrap_or(hash);
    if wanted.is_empty() {
        return None;
    }
    options.into_iter().find(|value| value == wanted)
}
