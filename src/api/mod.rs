mod controller;
mod readout;
mod snapshot;
mod status;

pub use controller::{PlotController, PlotViewConfig};
pub use readout::{OUT_OF_RANGE_TEXT, ReadoutFormat};
pub use snapshot::ControllerSnapshot;
pub use status::{BufferedStatus, NullStatus, StatusSink};
