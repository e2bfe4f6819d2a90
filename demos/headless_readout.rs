//! Headless walk-through of the resize → draw → read-back pipeline.
//!
//! Runs the controller against the `NullBackend`, sweeps the pointer across
//! the surface diagonal and prints the live readout plus the status log.

use plotview_rs::api::{BufferedStatus, PlotController, PlotViewConfig, ReadoutFormat};
use plotview_rs::core::{PlotSelection, PointerSample};
use plotview_rs::render::NullBackend;

fn main() -> Result<(), plotview_rs::PlotError> {
    let _ = plotview_rs::telemetry::init_default_tracing();

    let config = PlotViewConfig::new("canvas", 600.0, 400.0).with_format(ReadoutFormat::FixedPair);
    let mut controller =
        PlotController::new(NullBackend::new(), BufferedStatus::default(), config)?;

    controller.handle_resize(1000.0, Some(2.0))?;
    controller.select_and_draw(PlotSelection::Power { exponent: 2 })?;

    let geometry = controller.geometry();
    for step in 0..=4 {
        let f = f64::from(step) / 4.0;
        let sample = PointerSample::on_surface(
            f * geometry.display_width,
            f * geometry.display_height,
            geometry.display_width,
            geometry.display_height,
        );
        let text = controller.on_pointer_move(sample).to_owned();
        println!("{f:>5.2} -> {text}");
    }

    let off = controller.on_pointer_move(PointerSample::off_surface()).to_owned();
    println!("  off -> {off}");

    for message in &controller.status().messages {
        println!("status: {message}");
    }
    Ok(())
}
