//! WebAssembly entry point and DOM wiring.

use crate::config::{DomIds, ViewerConfig, plan_from_params};
use crate::error::ViewerError;
use crate::overlay::{LOAD_FAILED_MESSAGE, Overlay};
use crate::viewer::FloorplanViewer;
use floorplan_core::loader::FetchLoader;
use floorplan_core::{DocumentLoader, ViewerEvent};
use floorplan_render::Canvas2dSurface;
use kurbo::{Point, Size};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, MouseEvent, WheelEvent, Window,
};

type SharedViewer = Rc<RefCell<FloorplanViewer<Canvas2dSurface, DomOverlay>>>;

/// Inline styles for the programmatically created "Reset Zoom" button.
const RESET_BUTTON_STYLE: &[(&str, &str)] = &[
    ("position", "absolute"),
    ("width", "145px"),
    ("top", "0px"),
    ("right", "37px"),
    ("padding", "10px"),
    ("font-size", "16px"),
    ("cursor", "pointer"),
    ("border", "none"),
    ("border-radius", "5px"),
    ("background-color", "#28a745"),
    ("color", "#fff"),
    ("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
    ("transition", "background-color 0.3s, box-shadow 0.3s"),
];

/// Page elements the viewer is wired to, looked up once at startup.
pub struct DomElements {
    pub canvas: HtmlCanvasElement,
    pub tooltip: HtmlElement,
    pub zoom_in: HtmlElement,
    pub zoom_out: HtmlElement,
    pub controls: HtmlElement,
}

impl DomElements {
    pub fn lookup(document: &Document, ids: &DomIds) -> Result<Self, ViewerError> {
        Ok(Self {
            canvas: element(document, &ids.canvas)?,
            tooltip: element(document, &ids.tooltip)?,
            zoom_in: element(document, &ids.zoom_in)?,
            zoom_out: element(document, &ids.zoom_out)?,
            controls: element(document, &ids.controls)?,
        })
    }
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T, ViewerError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ViewerError::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| ViewerError::Dom(format!("#{} has an unexpected element type", id)))
}

fn set_style(element: &HtmlElement, name: &str, value: &str) {
    if let Err(e) = element.style().set_property(name, value) {
        log::warn!("Failed to set {} on element: {:?}", name, e);
    }
}

/// Tooltip element plus `alert()` notifications.
pub struct DomOverlay {
    window: Window,
    tooltip: HtmlElement,
}

impl DomOverlay {
    pub fn new(window: Window, tooltip: HtmlElement) -> Self {
        Self { window, tooltip }
    }
}

impl Overlay for DomOverlay {
    fn show_tooltip(&mut self, position: Point, text: &str) {
        set_style(&self.tooltip, "left", &format!("{}px", position.x));
        set_style(&self.tooltip, "top", &format!("{}px", position.y));
        self.tooltip.set_text_content(Some(text));
        set_style(&self.tooltip, "display", "block");
    }

    fn hide_tooltip(&mut self) {
        set_style(&self.tooltip, "display", "none");
    }

    fn notify(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            log::warn!("alert() failed: {:?}", e);
        }
    }
}

/// Current window size in CSS pixels.
fn viewport_size(window: &Window) -> Size {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Size::new(width, height)
}

/// Pointer position relative to the canvas' top-left corner.
fn canvas_position(canvas: &HtmlCanvasElement, event: &MouseEvent) -> Point {
    let rect = canvas.get_bounding_client_rect();
    Point::new(
        f64::from(event.client_x()) - rect.left(),
        f64::from(event.client_y()) - rect.top(),
    )
}

/// Document URL override from `?plan=` or `#plan=`.
fn plan_from_location(window: &Window) -> Option<String> {
    let location = window.location();
    location
        .search()
        .ok()
        .and_then(|search| plan_from_params(&search))
        .or_else(|| location.hash().ok().and_then(|hash| plan_from_params(&hash)))
}

fn dispatch(viewer: &SharedViewer, event: ViewerEvent) {
    match viewer.try_borrow_mut() {
        Ok(mut viewer) => viewer.handle_event(event),
        Err(_) => log::warn!("Viewer busy, dropping {:?}", event),
    }
}

/// Register a listener that stays alive for the lifetime of the page.
fn on(
    target: &EventTarget,
    name: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), ViewerError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
        .map_err(|e| ViewerError::Dom(format!("Failed to listen for {}: {:?}", name, e)))?;
    closure.forget();
    Ok(())
}

/// Listener that turns mouse events on the canvas into viewer events.
fn on_canvas_mouse(
    viewer: &SharedViewer,
    canvas: &HtmlCanvasElement,
    name: &str,
    to_event: fn(Point) -> ViewerEvent,
) -> Result<(), ViewerError> {
    let viewer = viewer.clone();
    let target = canvas.clone();
    on(canvas, name, move |event: Event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            dispatch(&viewer, to_event(canvas_position(&target, mouse)));
        }
    })
}

fn on_button(viewer: &SharedViewer, button: &HtmlElement, event: ViewerEvent) -> Result<(), ViewerError> {
    let viewer = viewer.clone();
    on(button, "click", move |_: Event| dispatch(&viewer, event))
}

fn create_reset_button(document: &Document, controls: &HtmlElement) -> Result<HtmlElement, ViewerError> {
    let button: HtmlElement = document
        .create_element("button")
        .map_err(|e| ViewerError::Dom(format!("Failed to create button: {:?}", e)))?
        .dyn_into()
        .map_err(|_| ViewerError::Dom("Button is not an HtmlElement".to_string()))?;
    button.set_text_content(Some("Reset Zoom"));
    for (name, value) in RESET_BUTTON_STYLE {
        set_style(&button, name, value);
    }
    controls
        .append_child(&button)
        .map_err(|e| ViewerError::Dom(format!("Failed to insert button: {:?}", e)))?;
    Ok(button)
}

fn wire_events(
    viewer: &SharedViewer,
    window: &Window,
    elements: &DomElements,
    reset_button: &HtmlElement,
) -> Result<(), ViewerError> {
    let canvas = &elements.canvas;

    on_canvas_mouse(viewer, canvas, "mousedown", |position| ViewerEvent::PointerDown { position })?;
    on_canvas_mouse(viewer, canvas, "mousemove", |position| ViewerEvent::PointerMove { position })?;
    on_canvas_mouse(viewer, canvas, "click", |position| ViewerEvent::Click { position })?;

    // Releasing anywhere ends a drag, not just over the canvas.
    {
        let viewer = viewer.clone();
        let target = canvas.clone();
        on(window, "mouseup", move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                let position = canvas_position(&target, mouse);
                dispatch(&viewer, ViewerEvent::PointerUp { position });
            }
        })?;
    }

    {
        let viewer = viewer.clone();
        on(canvas, "wheel", move |event: Event| {
            event.prevent_default();
            if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
                dispatch(&viewer, ViewerEvent::Wheel {
                    delta_y: wheel.delta_y(),
                });
            }
        })?;
    }

    {
        let viewer = viewer.clone();
        let resize_window = window.clone();
        on(window, "resize", move |_: Event| {
            let size = viewport_size(&resize_window);
            dispatch(&viewer, ViewerEvent::Resize { size });
        })?;
    }

    on_button(viewer, &elements.zoom_in, ViewerEvent::ZoomIn)?;
    on_button(viewer, &elements.zoom_out, ViewerEvent::ZoomOut)?;
    on_button(viewer, reset_button, ViewerEvent::ResetZoom)?;
    Ok(())
}

/// Load the document, draw the first frame and wire up interaction.
///
/// Nothing is wired if the document fails to load.
async fn start(config: ViewerConfig) -> Result<(), ViewerError> {
    let window = web_sys::window().ok_or_else(|| ViewerError::Dom("No window object".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ViewerError::Dom("No document object".to_string()))?;
    let elements = DomElements::lookup(&document, &config.dom)?;

    let floorplan = match FetchLoader::new().load(&config.document_url).await {
        Ok(floorplan) => floorplan,
        Err(e) => {
            if let Err(alert_err) = window.alert_with_message(LOAD_FAILED_MESSAGE) {
                log::warn!("alert() failed: {:?}", alert_err);
            }
            return Err(e.into());
        }
    };

    let config = config.with_viewport(viewport_size(&window));
    let surface = Canvas2dSurface::new(elements.canvas.clone())?;
    let overlay = DomOverlay::new(window.clone(), elements.tooltip.clone());
    let viewer: SharedViewer = Rc::new(RefCell::new(FloorplanViewer::new(
        floorplan, surface, overlay, &config,
    )));
    viewer.borrow_mut().render();

    let reset_button = create_reset_button(&document, &elements.controls)?;
    wire_events(&viewer, &window, &elements, &reset_button)?;
    log::info!("Floorplan viewer ready");
    Ok(())
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub async fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }

    log::info!("Starting floorplan viewer (WASM)");

    let mut config = ViewerConfig::default();
    if let Some(plan) = web_sys::window().and_then(|w| plan_from_location(&w)) {
        log::info!("Plan from URL: {}", plan);
        config = config.with_document_url(plan);
    }

    if let Err(e) = start(config).await {
        log::error!("Floorplan viewer failed to start: {}", e);
    }
}
