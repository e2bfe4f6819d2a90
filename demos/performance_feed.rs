//! Builds a performance plot selection from a decimal quote feed and prints
//! the diagnostics snapshot after drawing it headlessly.

use chrono::{DateTime, Utc};
use plotview_rs::api::{BufferedStatus, PlotController, PlotViewConfig, ReadoutFormat};
use plotview_rs::core::{PlotSelection, PointerSample};
use plotview_rs::render::NullBackend;
use rust_decimal::Decimal;

fn sample_quotes() -> Vec<(DateTime<Utc>, Decimal)> {
    [
        ("2014-01-02T09:00:00+01:00", Decimal::new(14, 1)),
        ("2015-08-21T09:00:00+02:00", Decimal::new(34, 1)),
        ("2016-07-04T09:00:00+02:00", Decimal::new(28, 1)),
        ("2017-03-08T09:00:00+01:00", Decimal::new(22, 1)),
        ("2018-03-07T09:00:00+01:00", Decimal::new(36, 1)),
        ("2019-03-18T09:00:00+01:00", Decimal::new(49, 1)),
        ("2020-05-12T09:02:00+02:00", Decimal::new(45, 1)),
        ("2022-01-20T09:05:05+01:00", Decimal::new(67, 1)),
        ("2022-03-21T09:05:03+01:00", Decimal::new(89, 1)),
    ]
    .into_iter()
    .map(|(date, close)| {
        (
            DateTime::parse_from_rfc3339(date)
                .expect("valid rfc3339 literal")
                .with_timezone(&Utc),
            close,
        )
    })
    .collect()
}

fn main() -> Result<(), plotview_rs::PlotError> {
    let selection = PlotSelection::from_quotes("Portfolio", "ACME", &sample_quotes())?;

    let config =
        PlotViewConfig::new("quote-canvas", 400.0, 400.0).with_format(ReadoutFormat::DateValue);
    let mut controller =
        PlotController::new(NullBackend::new(), BufferedStatus::default(), config)?;

    controller.handle_resize(1000.0, Some(2.0))?;
    controller.select_and_draw(selection)?;

    let geometry = controller.geometry();
    let center = PointerSample::on_surface(
        geometry.display_width / 2.0,
        geometry.display_height / 2.0,
        geometry.display_width,
        geometry.display_height,
    );
    println!("center readout: {}", controller.on_pointer_move(center));
    println!("snapshot: {}", controller.snapshot().to_json()?);
    Ok(())
}
