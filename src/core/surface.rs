use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Geometry of the drawing surface.
///
/// `display_*` is the CSS-visible size, `physical_*` the drawing buffer size.
/// The buffer tracks the CSS size 1:1; `device_pixel_ratio` records the last
/// observed ratio without scaling the buffer by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGeometry {
    pub display_width: f64,
    pub display_height: f64,
    pub physical_width: f64,
    pub physical_height: f64,
    pub device_pixel_ratio: f64,
}

impl SurfaceGeometry {
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.physical_width / self.physical_height
    }

    #[must_use]
    pub fn has_area(self) -> bool {
        self.physical_width > 0.0 && self.physical_height > 0.0
    }

    /// Whole-pixel buffer size for backends that address integer pixels.
    ///
    /// Rounding happens only here, at the backend boundary; the geometry
    /// itself stays fractional so repeated resizes cannot drift.
    #[must_use]
    pub fn pixel_size(self) -> (u32, u32) {
        (
            self.physical_width.round().max(0.0) as u32,
            self.physical_height.round().max(0.0) as u32,
        )
    }
}

/// The addressable drawing target.
///
/// Created once per page and mutated in place on every resize. Surface
/// content is undefined after a buffer resize, so every resize must be
/// followed by a full redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    id: String,
    aspect_ratio: f64,
    geometry: SurfaceGeometry,
}

impl Surface {
    /// Creates a surface with the buffer dimensions declared by the host
    /// page. The initial width:height ratio becomes the target aspect ratio
    /// for all subsequent resizes.
    pub fn new(id: impl Into<String>, width: f64, height: f64) -> PlotResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(PlotError::InvalidSurface { width, height });
        }

        Ok(Self {
            id: id.into(),
            aspect_ratio: width / height,
            geometry: SurfaceGeometry {
                display_width: width,
                display_height: height,
                physical_width: width,
                physical_height: height,
                device_pixel_ratio: 1.0,
            },
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// Target width:height ratio enforced by [`Surface::resize`].
    ///
    /// Fixed at construction. While the surface has area this equals the
    /// ratio of the physical dimensions before a resize; keeping it stored
    /// also survives zero-area layouts, where the dimensions carry no ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[must_use]
    pub fn has_area(&self) -> bool {
        self.geometry.has_area()
    }

    #[must_use]
    pub fn pixel_size(&self) -> (u32, u32) {
        self.geometry.pixel_size()
    }

    /// Fits the surface to `container_width`, preserving the aspect ratio.
    ///
    /// The CSS size becomes 80% of the container width with the height
    /// derived from the aspect ratio; the physical buffer is set to the same
    /// values. A missing or degenerate device pixel ratio falls back to 1.0.
    /// A non-positive container width produces a zero-area geometry; draw
    /// calls against it must be skipped.
    pub fn resize(
        &mut self,
        container_width: f64,
        device_pixel_ratio: Option<f64>,
    ) -> SurfaceGeometry {
        let ratio = device_pixel_ratio
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(1.0);

        let display_width = if container_width.is_finite() && container_width > 0.0 {
            0.8 * container_width
        } else {
            0.0
        };
        let display_height = display_width / self.aspect_ratio;

        self.geometry = SurfaceGeometry {
            display_width,
            display_height,
            physical_width: display_width,
            physical_height: display_height,
            device_pixel_ratio: ratio,
        };
        self.geometry
    }
}
