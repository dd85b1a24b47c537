use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

pub fn window_and_document() -> Option<(Window, Document)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(_) => {
            warn!("Invalid selector {}", selector);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn html_element(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn offset_height(document: &Document, selector: &str) -> Option<f64> {
    html_element(document, selector).map(|el| el.offset_height() as f64)
}

pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub fn scroll_smoothly_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn set_styles(element: &Element, styles: &[(&str, &str)]) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let style = el.style();
        for (property, value) in styles {
            let _ = style.set_property(property, value);
        }
    }
}

/// The interesting bits of an `input`, `select` or `textarea`.
pub struct FormControl {
    pub name: String,
    pub value: String,
    pub required: bool,
}

pub fn form_control(target: EventTarget) -> Option<FormControl> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(FormControl {
            name: input.name(),
            value: input.value(),
            required: input.required(),
        });
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(FormControl {
            name: select.name(),
            value: select.value(),
            required: select.required(),
        });
    }
    let area = target.dyn_ref::<HtmlTextAreaElement>()?;
    Some(FormControl {
        name: area.name(),
        value: area.value(),
        required: area.required(),
    })
}

/// An event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn Fn(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl Fn(Event) + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn Fn(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
