use plotview_rs::api::{
    BufferedStatus, OUT_OF_RANGE_TEXT, PlotController, PlotViewConfig, ReadoutFormat,
};
use plotview_rs::core::{
    DataPoint, LogicalPoint, PlotSelection, PointerSample, Surface,
};
use plotview_rs::error::{PlotError, PlotResult};
use plotview_rs::render::{ChartHandle, DataWindow, NullBackend, PlotBackend};

fn demo_controller() -> PlotController<NullBackend, BufferedStatus> {
    let backend = NullBackend::new().with_window(DataWindow::new(0.0, 800.0, 0.0, 800.0));
    let config = PlotViewConfig::new("canvas", 400.0, 400.0);
    let mut controller =
        PlotController::new(backend, BufferedStatus::default(), config).expect("controller init");
    controller.handle_resize(1000.0, Some(2.0)).expect("resize");
    controller
}

#[test]
fn pointer_move_without_chart_yields_neutral_text() {
    let mut controller = demo_controller();

    let text = controller.on_pointer_move(PointerSample::on_surface(10.0, 10.0, 800.0, 800.0));

    assert_eq!(text, "");
    assert!(!controller.has_chart());
}

#[test]
fn first_draw_makes_controller_ready() {
    let mut controller = demo_controller();
    assert!(!controller.has_chart());

    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("draw");

    assert!(controller.has_chart());
}

#[test]
fn pointer_off_surface_yields_out_of_range_literal() {
    let mut controller = demo_controller();
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("draw");

    let text = controller.on_pointer_move(PointerSample::off_surface());

    assert_eq!(text, OUT_OF_RANGE_TEXT);
    assert!(controller.readout().data.is_none());
}

#[test]
fn absent_inversion_yields_out_of_range_literal() {
    let mut controller = demo_controller();
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("draw");

    // Offsets beyond the bounding rect map outside the buffer.
    let text = controller.on_pointer_move(PointerSample::on_surface(900.0, 900.0, 800.0, 800.0));

    assert_eq!(text, OUT_OF_RANGE_TEXT);
    assert!(controller.readout().over_surface);
    assert!(controller.readout().data.is_none());
}

#[test]
fn resolved_pointer_is_formatted_and_recorded() {
    let mut controller = demo_controller();
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("draw");

    let text = controller.on_pointer_move(PointerSample::on_surface(400.0, 400.0, 800.0, 800.0));

    // Window 0..800 on both axes, y inverted.
    assert_eq!(text, "(400.000, 400.000)");
    assert_eq!(
        controller.readout().logical,
        Some(LogicalPoint::new(400.0, 400.0))
    );
    assert_eq!(
        controller.readout().data,
        Some(DataPoint::new(400.0, 400.0))
    );
}

#[test]
fn redraw_supersedes_previous_handle() {
    let mut controller = demo_controller();
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("first draw");
    controller
        .select_and_draw(PlotSelection::PerformanceDemo { samples: 3 })
        .expect("second draw");

    assert!(controller.has_chart());
    assert_eq!(
        controller.selection().map(|s| s.label().to_owned()),
        Some("performance".to_owned())
    );
    assert_eq!(controller.into_backend().draw_count, 2);
}

#[test]
fn resize_triggers_redraw_of_current_selection() {
    let mut controller = demo_controller();
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("draw");

    controller.handle_resize(500.0, Some(1.0)).expect("resize");

    let geometry = controller.geometry();
    assert!((geometry.display_width - 400.0).abs() < 1e-9);
    assert_eq!(controller.into_backend().draw_count, 2);
}

#[test]
fn zero_area_resize_skips_backend_call() {
    let mut controller = demo_controller();

    controller.handle_resize(0.0, None).expect("resize");
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("selection against zero-area surface");

    assert!(!controller.has_chart());
    assert_eq!(controller.into_backend().draw_count, 0);
}

#[test]
fn status_reports_progress_and_duration() {
    let mut controller = demo_controller();
    controller
        .select_and_draw(PlotSelection::Power { exponent: 2 })
        .expect("draw");

    let messages = &controller.status().messages;
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], "Rendering power...");
    assert!(messages[1].starts_with("Rendered power in "));
    assert!(messages[1].ends_with("ms"));
}

struct FixedBackend {
    point: Option<DataPoint>,
}

struct FixedHandle {
    point: Option<DataPoint>,
}

impl ChartHandle for FixedHandle {
    fn coord(&self, _point: LogicalPoint) -> Option<DataPoint> {
        self.point
    }
}

impl PlotBackend for FixedBackend {
    type Handle = FixedHandle;

    fn draw(&mut self, _surface: &Surface, _selection: &PlotSelection) -> PlotResult<FixedHandle> {
        Ok(FixedHandle { point: self.point })
    }
}

#[test]
fn date_value_readout_end_to_end() {
    let backend = FixedBackend {
        point: Some(DataPoint::new(1_700_000_000_000.0, 3.14159)),
    };
    let config = PlotViewConfig::new("canvas", 400.0, 400.0).with_format(ReadoutFormat::DateValue);
    let mut controller =
        PlotController::new(backend, BufferedStatus::default(), config).expect("controller init");
    controller.handle_resize(1000.0, Some(2.0)).expect("resize");
    controller
        .select_and_draw(PlotSelection::PerformanceDemo { samples: 3 })
        .expect("draw");

    let text = controller.on_pointer_move(PointerSample::on_surface(400.0, 400.0, 800.0, 800.0));

    assert_eq!(text, "(14.11.2023, 3.1416)");
}

#[test]
fn absent_backend_result_never_reaches_the_formatter() {
    let backend = FixedBackend { point: None };
    let config = PlotViewConfig::new("canvas", 400.0, 400.0).with_format(ReadoutFormat::DateValue);
    let mut controller =
        PlotController::new(backend, BufferedStatus::default(), config).expect("controller init");
    controller.handle_resize(1000.0, Some(2.0)).expect("resize");
    controller
        .select_and_draw(PlotSelection::PerformanceDemo { samples: 3 })
        .expect("draw");

    let text = controller.on_pointer_move(PointerSample::on_surface(1.0, 1.0, 800.0, 800.0));

    assert_eq!(text, OUT_OF_RANGE_TEXT);
}

struct FailingBackend;

impl PlotBackend for FailingBackend {
    type Handle = FixedHandle;

    fn draw(&mut self, _surface: &Surface, _selection: &PlotSelection) -> PlotResult<FixedHandle> {
        Err(PlotError::DrawFailed("surface lost".to_owned()))
    }
}

#[test]
fn draw_failure_propagates_and_reports_status() {
    let config = PlotViewConfig::new("canvas", 400.0, 400.0);
    let mut controller = PlotController::new(FailingBackend, BufferedStatus::default(), config)
        .expect("controller init");
    controller.resize_surface(1000.0, Some(1.0));

    let result = controller.select_and_draw(PlotSelection::Power { exponent: 2 });

    assert!(matches!(result, Err(PlotError::DrawFailed(_))));
    assert!(!controller.has_chart());
    let messages = &controller.status().messages;
    assert_eq!(messages[0], "Rendering power...");
    assert!(messages[1].starts_with("Rendering power failed: "));
}
