use serde::{Deserialize, Serialize};

use crate::core::surface::SurfaceGeometry;
use crate::core::types::LogicalPoint;

/// One pointer event, sampled at the UI boundary.
///
/// `offset_*` are CSS pixels relative to the target element's top-left
/// corner; `bounding_*` is the target's rendered size at event time.
/// `over_surface` records whether the event target was the drawing surface
/// element; when it is not, the offsets are meaningless and the mapping
/// must not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    pub offset_x: f64,
    pub offset_y: f64,
    pub bounding_width: f64,
    pub bounding_height: f64,
    pub over_surface: bool,
}

impl PointerSample {
    /// A sample whose target is the drawing surface.
    #[must_use]
    pub fn on_surface(
        offset_x: f64,
        offset_y: f64,
        bounding_width: f64,
        bounding_height: f64,
    ) -> Self {
        Self {
            offset_x,
            offset_y,
            bounding_width,
            bounding_height,
            over_surface: true,
        }
    }

    /// A sample whose target is some other element.
    #[must_use]
    pub fn off_surface() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            bounding_width: 0.0,
            bounding_height: 0.0,
            over_surface: false,
        }
    }

    #[must_use]
    pub fn to_logical(self, geometry: SurfaceGeometry) -> LogicalPoint {
        to_logical(self, geometry)
    }
}

/// Rescales a pointer offset into the surface's logical pixel space.
///
/// The event offset is already relative to the target's top-left corner, so
/// this is a pure linear rescale against the rendered bounding size. It
/// corrects for any mismatch between the buffer dimensions and the displayed
/// size (CSS scaling, flexible layouts). It must be recomputed on every
/// pointer move and never cached: the bounding rectangle can change between
/// events.
#[must_use]
pub fn to_logical(sample: PointerSample, geometry: SurfaceGeometry) -> LogicalPoint {
    LogicalPoint::new(
        sample.offset_x * geometry.physical_width / sample.bounding_width,
        sample.offset_y * geometry.physical_height / sample.bounding_height,
    )
}
