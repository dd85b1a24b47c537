use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, Element, Event, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config::SiteConfig;
use crate::dom::{self, Listener};
use crate::effects::anchor;
use crate::effects::reveal::{
    RevealTracker, VisibilityEntry, HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_SELECTOR,
    REVEAL_TRANSITION, SHOWN_OPACITY, SHOWN_TRANSFORM,
};
use crate::effects::scroll::{ScrollMetrics, ScrollSnapshot, SectionBox};
use crate::effects::tracking::{
    Interaction, InteractionSink, LogSink, CALL_LINK_SELECTOR, MESSAGING_LINK_SELECTOR,
    SERVICE_CARD_SELECTOR,
};

const REVEAL_KEY_ATTR: &str = "data-reveal-key";

fn section_boxes(document: &Document) -> Vec<SectionBox> {
    dom::query_all(document, "section[id]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| SectionBox::new(el.id(), el.offset_top() as f64, el.client_height() as f64))
        .collect()
}

fn sample_metrics(hero_height: Option<f64>) -> Option<ScrollMetrics> {
    let (window, document) = dom::window_and_document()?;
    let root = document.document_element()?;
    Some(ScrollMetrics {
        offset: window.scroll_y().ok()?,
        document_height: root.scroll_height() as f64,
        viewport_height: root.client_height() as f64,
        hero_height,
        navbar_height: dom::offset_height(&document, ".navbar").unwrap_or(0.0),
        sections: section_boxes(&document),
    })
}

/// Re-derives progress, navbar, scroll-to-top and active-section state on
/// every scroll event.
#[hook]
pub fn use_scroll_snapshot(config: SiteConfig) -> ScrollSnapshot {
    let snapshot = use_state(ScrollSnapshot::default);
    let hero_height = use_mut_ref(|| None::<f64>);

    {
        let snapshot = snapshot.clone();
        let hero_height = hero_height.clone();
        use_effect_with_deps(
            move |_| {
                let measured = dom::window_and_document()
                    .and_then(|(_, document)| dom::offset_height(&document, ".hero"));
                if measured.is_none() {
                    warn!(
                        "No .hero element, navbar threshold falls back to {}px",
                        config.hero_fallback_height
                    );
                }
                *hero_height.borrow_mut() = measured;

                if let Some(metrics) = sample_metrics(measured) {
                    snapshot.set(ScrollSnapshot::from_metrics(&metrics, &config));
                }
                || ()
            },
            (),
        );
    }

    {
        let snapshot = snapshot.clone();
        use_event_with_window("scroll", move |_: Event| {
            let Some(metrics) = sample_metrics(*hero_height.borrow()) else {
                return;
            };
            let next = ScrollSnapshot::from_metrics(&metrics, &config);
            if *snapshot != next {
                snapshot.set(next);
            }
        });
    }

    (*snapshot).clone()
}

/// Turns every same-page `#fragment` link into an animated scroll that
/// clears the fixed navbar.
#[hook]
pub fn use_smooth_anchors(config: SiteConfig) {
    use_effect_with_deps(
        move |_| {
            let mut listeners = Vec::new();
            if let Some((window, document)) = dom::window_and_document() {
                for link in dom::query_all(&document, "a[href^=\"#\"]") {
                    let window = window.clone();
                    let document = document.clone();
                    let anchor_el = link.clone();
                    let listener = Listener::new(&link, "click", move |event: Event| {
                        let href = anchor_el.get_attribute("href").unwrap_or_default();
                        let target_top = anchor::fragment_target(&href)
                            .and_then(|id| document.get_element_by_id(id))
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                            .map(|el| el.offset_top() as f64);
                        let navbar_height =
                            dom::offset_height(&document, ".navbar").unwrap_or(0.0);

                        let Some(jump) = anchor::plan_jump(&href, target_top, navbar_height, &config)
                        else {
                            return;
                        };
                        event.prevent_default();
                        dom::scroll_smoothly_to(&window, jump.top);
                        if let Ok(history) = window.history() {
                            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(jump.fragment.as_str()));
                        }
                    });
                    listeners.extend(listener);
                }
                debug!("Smooth scrolling wired to {} anchor links", listeners.len());
            }
            move || drop(listeners)
        },
        (),
    );
}

fn reveal_key(element: &Element) -> Option<usize> {
    element.get_attribute(REVEAL_KEY_ATTR)?.parse().ok()
}

/// Fades card-like elements in the first time they scroll into view.
#[hook]
pub fn use_reveal_on_scroll(config: SiteConfig) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = match observe_reveals(&config) {
                Some((observer, callback)) => Box::new(move || {
                    observer.disconnect();
                    drop(callback);
                }),
                None => {
                    warn!("Reveal animations unavailable, cards stay visible");
                    Box::new(|| ())
                }
            };
            move || destructor()
        },
        (),
    );
}

type ObserverCallback = Closure<dyn Fn(Array, IntersectionObserver)>;

fn observe_reveals(config: &SiteConfig) -> Option<(IntersectionObserver, ObserverCallback)> {
    let (_, document) = dom::window_and_document()?;
    let stagger_ms = config.reveal_stagger_ms;
    let tracker = Rc::new(RefCell::new(RevealTracker::default()));

    let callback = ObserverCallback::new(move |entries: Array, observer: IntersectionObserver| {
        let entries: Vec<IntersectionObserverEntry> = entries
            .iter()
            .filter_map(|entry| entry.dyn_into().ok())
            .collect();

        let mut targets = HashMap::new();
        let batch: Vec<VisibilityEntry> = entries
            .iter()
            .filter_map(|entry| {
                let target = entry.target();
                let key = reveal_key(&target)?;
                targets.insert(key, target);
                Some(VisibilityEntry {
                    key,
                    intersecting: entry.is_intersecting(),
                })
            })
            .collect();

        for step in tracker.borrow_mut().plan_batch(&batch, stagger_ms) {
            let Some(target) = targets.remove(&step.key) else {
                continue;
            };
            observer.unobserve(&target);
            Timeout::new(step.delay_ms, move || {
                dom::set_styles(
                    &target,
                    &[("opacity", SHOWN_OPACITY), ("transform", SHOWN_TRANSFORM)],
                );
            })
            .forget();
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(config.reveal_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;

    let elements = dom::query_all(&document, REVEAL_SELECTOR);
    for (key, element) in elements.iter().enumerate() {
        let _ = element.set_attribute(REVEAL_KEY_ATTR, &key.to_string());
        dom::set_styles(
            element,
            &[
                ("opacity", HIDDEN_OPACITY),
                ("transform", HIDDEN_TRANSFORM),
                ("transition", REVEAL_TRANSITION),
            ],
        );
        observer.observe(element);
    }
    debug!("Observing {} elements for reveal", elements.len());

    Some((observer, callback))
}

/// Reports call, messaging and service-card clicks to the log sink.
#[hook]
pub fn use_click_tracking() {
    use_effect_with_deps(
        move |_| {
            let sink: Rc<dyn InteractionSink> = Rc::new(LogSink);
            let mut listeners = Vec::new();

            if let Some((_, document)) = dom::window_and_document() {
                let links = dom::query_all(&document, CALL_LINK_SELECTOR)
                    .into_iter()
                    .chain(dom::query_all(&document, MESSAGING_LINK_SELECTOR));
                for link in links {
                    let sink = sink.clone();
                    let href_source = link.clone();
                    listeners.extend(Listener::new(&link, "click", move |_| {
                        let href = href_source.get_attribute("href").unwrap_or_default();
                        if let Some(interaction) = Interaction::from_link(&href) {
                            sink.record(&interaction);
                        }
                    }));
                }

                for card in dom::query_all(&document, SERVICE_CARD_SELECTOR) {
                    let sink = sink.clone();
                    let card_source = card.clone();
                    listeners.extend(Listener::new(&card, "click", move |_| {
                        let name = card_source
                            .query_selector("h3")
                            .ok()
                            .flatten()
                            .and_then(|heading| heading.text_content())
                            .unwrap_or_default();
                        sink.record(&Interaction::ServiceCard { name });
                    }));
                }
            }

            debug!("Click tracking attached to {} elements", listeners.len());
            move || drop(listeners)
        },
        (),
    );
}

/// `load` has already fired by the time `document.readyState` is `complete`.
fn already_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Console confirmation that the page finished booting and loading.
#[hook]
pub fn use_load_diagnostics() {
    use_effect_with_deps(
        move |_| {
            info!("✨ SparkleClean Professional Website Loaded Successfully!");
            info!("🚀 All interactive features activated!");
            let ready_state = dom::window_and_document()
                .map(|(_, document)| document.ready_state())
                .unwrap_or_default();
            if already_loaded(&ready_state) {
                info!("✅ Website fully loaded and ready!");
            }
            || ()
        },
        (),
    );

    use_event_with_window("load", move |_: Event| {
        info!("✅ Website fully loaded and ready!");
    });
}
