pub mod mapper;
pub mod primitives;
pub mod selection;
pub mod surface;
pub mod types;

pub use mapper::{PointerSample, to_logical};
pub use selection::{PlotSelection, match_hash_selection};
pub use surface::{Surface, SurfaceGeometry};
pub use types::{DataPoint, LogicalPoint};
