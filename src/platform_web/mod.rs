//! Browser adapter: binds a [`PlotController`] to a canvas-backed page.
//!
//! The core stays DOM-free; this module performs the DOM reads and writes at
//! the UI boundary (container width, device pixel ratio, canvas geometry,
//! pointer samples, status text) and keeps the event closures alive for the
//! page session. Only meaningful on `wasm32-unknown-unknown` targets.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, HtmlCanvasElement, HtmlElement, HtmlInputElement, HtmlSelectElement, MouseEvent,
};

use crate::api::{PlotController, StatusSink};
use crate::core::mapper::PointerSample;
use crate::core::selection::match_hash_selection;
use crate::core::surface::SurfaceGeometry;
use crate::render::PlotBackend;

/// The drawing surface's canvas element plus the DOM reads the sizer and the
/// mapper need.
pub struct SurfaceElement {
    canvas: HtmlCanvasElement,
}

impl SurfaceElement {
    /// Looks up the canvas by element id.
    pub fn lookup(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(JsValue::from)?;
        Ok(Self { canvas })
    }

    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Available width of the canvas' parent container, in CSS pixels.
    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.canvas
            .parent_element()
            .and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
            .map_or(0.0, |parent| f64::from(parent.offset_width()))
    }

    /// Applies computed geometry to the element: CSS size via the style
    /// attribute, buffer size via the width/height attributes (whole pixels).
    pub fn apply_geometry(&self, geometry: SurfaceGeometry) -> Result<(), JsValue> {
        let style = self.canvas.style();
        style.set_property("width", &format!("{}px", geometry.display_width))?;
        style.set_property("height", &format!("{}px", geometry.display_height))?;
        let (width, height) = geometry.pixel_size();
        self.canvas.set_width(width);
        self.canvas.set_height(height);
        Ok(())
    }

    /// Samples a mouse event against this surface.
    ///
    /// The bounding rectangle is queried per event; it can change between
    /// events under scroll or flexible layouts.
    #[must_use]
    pub fn sample_pointer(&self, event: &MouseEvent) -> PointerSample {
        let canvas_node: &web_sys::Node = self.canvas.as_ref();
        let over_surface = event.target().is_some_and(|target| {
            target
                .dyn_ref::<web_sys::Node>()
                .is_some_and(|node| node.is_same_node(Some(canvas_node)))
        });
        if !over_surface {
            return PointerSample::off_surface();
        }

        let rect = self.canvas.get_bounding_client_rect();
        PointerSample::on_surface(
            f64::from(event.offset_x()),
            f64::from(event.offset_y()),
            rect.width(),
            rect.height(),
        )
    }
}

/// Status sink writing into a text element.
pub struct ElementStatus {
    element: HtmlElement,
}

impl ElementStatus {
    pub fn lookup(document: &Document, id: &str) -> Result<Self, JsValue> {
        let element = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{id}'")))?
            .dyn_into::<HtmlElement>()
            .map_err(JsValue::from)?;
        Ok(Self { element })
    }

    #[must_use]
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }
}

impl StatusSink for ElementStatus {
    fn update(&mut self, message: &str) {
        self.element.set_inner_text(message);
    }
}

/// Reads `window.devicePixelRatio`, if a window is available.
#[must_use]
pub fn device_pixel_ratio() -> Option<f64> {
    web_sys::window().map(|window| window.device_pixel_ratio())
}

/// Reads the location hash fragment, without the leading `#`.
#[must_use]
pub fn location_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let fragment = hash.strip_prefix('#').unwrap_or(&hash);
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_owned())
    }
}

/// Values of a select element's options, in document order.
#[must_use]
pub fn option_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.options();
    (0..options.length())
        .filter_map(|index| options.item(index))
        .filter_map(|element| element.dyn_into::<web_sys::HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

/// Applies the page-load hash fragment to the plot-type selector.
///
/// Returns the applied option value, if the hash named one.
pub fn preselect_from_hash(select: &HtmlSelectElement) -> Option<String> {
    let hash = location_hash()?;
    let matched = match_hash_selection(&hash, option_values(select))?;
    select.set_value(&matched);
    Some(matched)
}

/// Numeric value of a slider or numeric input.
#[must_use]
pub fn input_value(input: &HtmlInputElement) -> Option<f64> {
    input.value().parse().ok()
}

/// Owns the controller behind shared interior mutability and keeps the DOM
/// event closures alive for the page session.
pub struct WebViewer<B: PlotBackend + 'static> {
    controller: Rc<RefCell<PlotController<B, ElementStatus>>>,
    surface: Rc<SurfaceElement>,
    control_listeners: Vec<Closure<dyn FnMut()>>,
    _on_resize: Closure<dyn FnMut()>,
    _on_pointer: Closure<dyn FnMut(MouseEvent)>,
}

impl<B: PlotBackend + 'static> WebViewer<B> {
    /// Wires window resize and pointer-move listeners, then performs the
    /// initial fit (and draw, once a selection is made).
    ///
    /// The pointer listener goes on the window, not the canvas, so the
    /// readout can report "out of range" while the pointer roams the rest of
    /// the page. Events are dispatched on the single UI thread in arrival
    /// order, so a resize always completes before the next pointer sample.
    pub fn install(
        controller: PlotController<B, ElementStatus>,
        surface: SurfaceElement,
        readout: HtmlElement,
    ) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let controller = Rc::new(RefCell::new(controller));
        let surface = Rc::new(surface);
        let readout = Rc::new(readout);

        let on_resize = {
            let controller = Rc::clone(&controller);
            let surface = Rc::clone(&surface);
            Closure::<dyn FnMut()>::new(move || {
                if let Err(err) = refit(&controller, &surface) {
                    web_sys::console::warn_1(&err);
                }
            })
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        let on_pointer = {
            let controller = Rc::clone(&controller);
            let surface = Rc::clone(&surface);
            let readout = Rc::clone(&readout);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let sample = surface.sample_pointer(&event);
                let mut controller = controller.borrow_mut();
                let text = controller.on_pointer_move(sample);
                readout.set_inner_text(text);
            })
        };
        window.add_event_listener_with_callback("mousemove", on_pointer.as_ref().unchecked_ref())?;

        refit(&controller, &surface)?;

        Ok(Self {
            controller,
            surface,
            control_listeners: Vec::new(),
            _on_resize: on_resize,
            _on_pointer: on_pointer,
        })
    }

    /// Fits the surface to its container and redraws.
    pub fn refit(&self) -> Result<(), JsValue> {
        refit(&self.controller, &self.surface)
    }

    /// Attaches listeners that redraw the current selection on control
    /// changes (e.g. `["change", "input"]` on a viewing-angle slider).
    pub fn redraw_on(&mut self, element: &HtmlElement, event_types: &[&str]) -> Result<(), JsValue> {
        for event_type in event_types {
            let controller = Rc::clone(&self.controller);
            let listener = Closure::<dyn FnMut()>::new(move || {
                // Status sink already carries failure details to the page.
                let _ = controller.borrow_mut().redraw();
            });
            element.add_event_listener_with_callback(event_type, listener.as_ref().unchecked_ref())?;
            self.control_listeners.push(listener);
        }
        Ok(())
    }

    /// Shared controller access for host-wired listeners (plot selection,
    /// data refresh).
    #[must_use]
    pub fn controller(&self) -> Rc<RefCell<PlotController<B, ElementStatus>>> {
        Rc::clone(&self.controller)
    }
}

/// Resize the model, push geometry to the DOM, then redraw, in that order,
/// so the backend draws into an already-resized buffer.
fn refit<B: PlotBackend>(
    controller: &Rc<RefCell<PlotController<B, ElementStatus>>>,
    surface: &Rc<SurfaceElement>,
) -> Result<(), JsValue> {
    let width = surface.container_width();
    let mut controller = controller.borrow_mut();
    let geometry = controller.resize_surface(width, device_pixel_ratio());
    surface.apply_geometry(geometry)?;
    controller
        .redraw()
        .map_err(|err| JsValue::from_str(&err.to_string()))
}
