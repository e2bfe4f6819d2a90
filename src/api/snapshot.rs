use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::selection::PlotSelection;
use crate::core::surface::SurfaceGeometry;
use crate::error::{PlotError, PlotResult};
use crate::interaction::ReadoutState;
use crate::render::PlotBackend;

use super::PlotController;
use super::status::StatusSink;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    pub surface_id: String,
    pub geometry: SurfaceGeometry,
    pub selection_label: Option<String>,
    pub has_chart: bool,
    pub readout: ReadoutState,
    pub metadata: IndexMap<String, String>,
}

impl ControllerSnapshot {
    pub fn to_json(&self) -> PlotResult<String> {
        serde_json::to_string(self).map_err(|err| PlotError::InvalidData(err.to_string()))
    }
}

impl<B: PlotBackend, S: StatusSink> PlotController<B, S> {
    /// Captures the controller state for diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> ControllerSnapshot {
        let mut metadata = IndexMap::new();
        metadata.insert("format".to_owned(), format!("{:?}", self.format));
        if let Some(PlotSelection::Performance {
            dates,
            series_names,
            ..
        }) = &self.selection
        {
            metadata.insert("series".to_owned(), series_names.join(","));
            metadata.insert("points".to_owned(), dates.len().to_string());
        }

        ControllerSnapshot {
            surface_id: self.surface.id().to_owned(),
            geometry: self.surface.geometry(),
            selection_label: self.selection.as_ref().map(|s| s.label().to_owned()),
            has_chart: self.handle.is_some(),
            readout: self.readout.clone(),
            metadata,
        }
    }
}
