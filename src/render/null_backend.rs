use crate::core::selection::PlotSelection;
use crate::core::surface::Surface;
use crate::core::types::{DataPoint, LogicalPoint};
use crate::error::PlotResult;

use super::{ChartHandle, PlotBackend};

/// Data-space rectangle a handle's inversion maps onto.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataWindow {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataWindow {
    #[must_use]
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Window a real backend would fit around the selected plot.
    fn for_selection(selection: &PlotSelection) -> Self {
        match selection {
            PlotSelection::Performance { dates, values, .. } => {
                let (x_min, x_max) = min_max(dates.iter().map(|d| *d as f64));
                let (y_min, y_max) = min_max(values.iter().copied());
                Self::new(x_min, x_max, y_min, y_max)
            }
            PlotSelection::PerformanceDemo { samples } => {
                Self::new(0.0, f64::from(*samples).max(1.0), 0.0, 1.0)
            }
            PlotSelection::Power { .. } => Self::new(-1.0, 1.0, -1.2, 1.2),
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    if min > max { (0.0, 1.0) } else { (min, max) }
}

/// Headless backend used by tests and non-browser embedding.
///
/// Draws nothing, but hands out handles whose inversion linearly maps the
/// buffer interior onto a data window, so the pointer read-back path can be
/// exercised end to end. The window is derived from the selection unless
/// overridden; `margin` reserves an axis-label band that inverts to `None`,
/// the way a real plot area sits inside its canvas.
#[derive(Debug, Clone, Default)]
pub struct NullBackend {
    window: Option<DataWindow>,
    margin: f64,
    pub draw_count: usize,
    pub last_label: Option<String>,
}

impl NullBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_window(mut self, window: DataWindow) -> Self {
        self.window = Some(window);
        self
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

impl PlotBackend for NullBackend {
    type Handle = NullHandle;

    fn draw(&mut self, surface: &Surface, selection: &PlotSelection) -> PlotResult<NullHandle> {
        self.draw_count += 1;
        self.last_label = Some(selection.label().to_owned());

        let geometry = surface.geometry();
        Ok(NullHandle {
            width: geometry.physical_width,
            height: geometry.physical_height,
            margin: self.margin,
            window: self
                .window
                .unwrap_or_else(|| DataWindow::for_selection(selection)),
        })
    }
}

/// Handle produced by [`NullBackend`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NullHandle {
    width: f64,
    height: f64,
    margin: f64,
    window: DataWindow,
}

impl ChartHandle for NullHandle {
    fn coord(&self, point: LogicalPoint) -> Option<DataPoint> {
        let inner_width = self.width - 2.0 * self.margin;
        let inner_height = self.height - 2.0 * self.margin;
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return None;
        }
        if point.x < self.margin
            || point.x > self.width - self.margin
            || point.y < self.margin
            || point.y > self.height - self.margin
        {
            return None;
        }

        let fx = (point.x - self.margin) / inner_width;
        let fy = (point.y - self.margin) / inner_height;
        // Screen y grows downward, data y upward.
        Some(DataPoint::new(
            self.window.x_min + fx * (self.window.x_max - self.window.x_min),
            self.window.y_max - fy * (self.window.y_max - self.window.y_min),
        ))
    }
}
