use serde::{Deserialize, Serialize};

use crate::core::types::{DataPoint, LogicalPoint};

/// Live pointer read-back state exposed to host applications.
///
/// Mutated only by the controller; hosts read it to drive overlays or
/// regression assertions without re-parsing the display text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReadoutState {
    pub over_surface: bool,
    pub logical: Option<LogicalPoint>,
    pub data: Option<DataPoint>,
    pub text: String,
}

impl ReadoutState {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// Records a pointer event that never reached the mapper.
    pub(crate) fn record_blocked(&mut self, text: &str) {
        self.over_surface = false;
        self.logical = None;
        self.data = None;
        self.text.clear();
        self.text.push_str(text);
    }

    /// Records a mapped pointer event and its (possibly absent) inversion.
    pub(crate) fn record_resolved(
        &mut self,
        logical: LogicalPoint,
        data: Option<DataPoint>,
        text: String,
    ) {
        self.over_surface = true;
        self.logical = Some(logical);
        self.data = data;
        self.text = text;
    }
}
