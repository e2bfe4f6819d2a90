//! plotview-rs: responsive plot-surface management and coordinate read-back.
//!
//! This crate keeps a drawing surface correctly sized against its container,
//! converts pointer offsets into the surface's logical pixel space, and
//! routes them through an injected rendering backend to produce a live
//! data-coordinate readout. Rasterization itself stays behind the
//! [`render::PlotBackend`] seam.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{PlotController, PlotViewConfig};
pub use error::{PlotError, PlotResult};
