mod null_backend;

pub use null_backend::{DataWindow, NullBackend, NullHandle};

use crate::core::selection::PlotSelection;
use crate::core::surface::Surface;
use crate::core::types::{DataPoint, LogicalPoint};
use crate::error::PlotResult;

/// Token for one rendered plot instance.
///
/// A handle owns the backend-side resources of exactly one draw and is the
/// sole authority for inverting logical pixels into data-space coordinates.
/// Handles are superseded, never mutated: a redraw hands out a fresh handle
/// and the previous one is simply dropped.
pub trait ChartHandle {
    /// Inverts a logical pixel into the plotted data's domain.
    ///
    /// Returns `None` when the point falls outside the plotted region.
    fn coord(&self, point: LogicalPoint) -> Option<DataPoint>;
}

/// Contract implemented by any rendering backend.
///
/// Backends receive the surface and the selected plot, so drawing stays
/// isolated from surface management and pointer handling. Each successful
/// draw returns the handle for the new plot instance.
pub trait PlotBackend {
    type Handle: ChartHandle;

    fn draw(&mut self, surface: &Surface, selection: &PlotSelection) -> PlotResult<Self::Handle>;
}
