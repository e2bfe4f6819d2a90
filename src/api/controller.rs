use tracing::{debug, warn};

#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

use crate::core::mapper::PointerSample;
use crate::core::selection::PlotSelection;
use crate::core::surface::{Surface, SurfaceGeometry};
use crate::error::PlotResult;
use crate::interaction::ReadoutState;
use crate::render::{ChartHandle, PlotBackend};

use super::readout::ReadoutFormat;
use super::status::StatusSink;

/// Construction parameters for [`PlotController`].
///
/// `initial_width`/`initial_height` are the buffer dimensions the host page
/// declares on the surface element; their ratio becomes the aspect ratio
/// enforced on every resize.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotViewConfig {
    pub surface_id: String,
    pub initial_width: f64,
    pub initial_height: f64,
    pub format: ReadoutFormat,
}

impl PlotViewConfig {
    #[must_use]
    pub fn new(surface_id: impl Into<String>, initial_width: f64, initial_height: f64) -> Self {
        Self {
            surface_id: surface_id.into(),
            initial_width,
            initial_height,
            format: ReadoutFormat::FixedPair,
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: ReadoutFormat) -> Self {
        self.format = format;
        self
    }
}

/// Orchestration facade owning the drawing surface and the current chart
/// handle.
///
/// The backend capability and the status sink are injected at construction
/// and never swapped afterwards. All operations run synchronously on the
/// caller's thread; the `&mut self` receivers enforce the single-writer
/// discipline the handle requires, so no locking exists anywhere in the
/// pipeline.
pub struct PlotController<B: PlotBackend, S: StatusSink> {
    pub(super) backend: B,
    pub(super) status: S,
    pub(super) surface: Surface,
    pub(super) format: ReadoutFormat,
    pub(super) selection: Option<PlotSelection>,
    pub(super) handle: Option<B::Handle>,
    pub(super) readout: ReadoutState,
}

impl<B: PlotBackend, S: StatusSink> PlotController<B, S> {
    pub fn new(backend: B, status: S, config: PlotViewConfig) -> PlotResult<Self> {
        let surface = Surface::new(
            config.surface_id,
            config.initial_width,
            config.initial_height,
        )?;
        Ok(Self {
            backend,
            status,
            surface,
            format: config.format,
            selection: None,
            handle: None,
            readout: ReadoutState::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[must_use]
    pub fn geometry(&self) -> SurfaceGeometry {
        self.surface.geometry()
    }

    #[must_use]
    pub fn format(&self) -> ReadoutFormat {
        self.format
    }

    #[must_use]
    pub fn selection(&self) -> Option<&PlotSelection> {
        self.selection.as_ref()
    }

    /// Whether a chart is currently drawn and answering inversion queries.
    #[must_use]
    pub fn has_chart(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn readout(&self) -> &ReadoutState {
        &self.readout
    }

    #[must_use]
    pub fn status(&self) -> &S {
        &self.status
    }

    #[must_use]
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Selects a plot and draws it, superseding any current handle.
    pub fn select_and_draw(&mut self, selection: PlotSelection) -> PlotResult<()> {
        self.selection = Some(selection);
        self.redraw()
    }

    /// Resizes the surface without redrawing.
    ///
    /// For hosts that must apply the new geometry to the surface element
    /// before the backend draws into it; every call must be followed by
    /// [`PlotController::redraw`], since the buffer content is undefined
    /// after the resize.
    pub fn resize_surface(
        &mut self,
        container_width: f64,
        device_pixel_ratio: Option<f64>,
    ) -> SurfaceGeometry {
        let geometry = self.surface.resize(container_width, device_pixel_ratio);
        debug!(
            surface = self.surface.id(),
            display_width = geometry.display_width,
            display_height = geometry.display_height,
            device_pixel_ratio = geometry.device_pixel_ratio,
            "surface resized"
        );
        geometry
    }

    /// Applies a container resize, then redraws the current selection.
    pub fn handle_resize(
        &mut self,
        container_width: f64,
        device_pixel_ratio: Option<f64>,
    ) -> PlotResult<()> {
        self.resize_surface(container_width, device_pixel_ratio);
        self.redraw()
    }

    /// Redraws the current selection, replacing the chart handle.
    ///
    /// No-op while nothing is selected. A zero-area surface skips the
    /// backend call (the handle is still dropped, so no stale inversion can
    /// be served against the resized-away surface). A backend failure is
    /// reported to the status sink and propagated; no retry is attempted.
    pub fn redraw(&mut self) -> PlotResult<()> {
        let Some(selection) = self.selection.clone() else {
            return Ok(());
        };

        self.handle = None;
        if !self.surface.has_area() {
            debug!(surface = self.surface.id(), "zero-area surface, draw skipped");
            return Ok(());
        }

        let label = selection.label().to_owned();
        self.status.update(&format!("Rendering {label}..."));
        let started = Instant::now();
        match self.backend.draw(&self.surface, &selection) {
            Ok(handle) => {
                let elapsed_ms = (started.elapsed().as_secs_f64() * 1000.0).ceil() as u64;
                self.handle = Some(handle);
                self.status
                    .update(&format!("Rendered {label} in {elapsed_ms}ms"));
                Ok(())
            }
            Err(err) => {
                warn!(plot = %label, error = %err, "backend draw failed");
                self.status.update(&format!("Rendering {label} failed: {err}"));
                Err(err)
            }
        }
    }

    /// Resolves a pointer event into the display readout.
    ///
    /// Yields the formatted data coordinates under the pointer, the
    /// out-of-range placeholder when the event missed the surface or the
    /// inversion came back empty, or the neutral empty text while no chart
    /// is drawn. The result is also recorded in [`ReadoutState`].
    pub fn on_pointer_move(&mut self, sample: PointerSample) -> &str {
        if self.handle.is_none() {
            self.readout.clear();
            return self.readout.text();
        }
        if !sample.over_surface {
            self.readout.record_blocked(self.format.absent_text());
            return self.readout.text();
        }

        let logical = sample.to_logical(self.surface.geometry());
        let data = self
            .handle
            .as_ref()
            .and_then(|handle| handle.coord(logical));
        let text = match data {
            Some(point) => self.format.format(point),
            None => self.format.absent_text().to_owned(),
        };
        self.readout.record_resolved(logical, data, text);
        self.readout.text()
    }
}
