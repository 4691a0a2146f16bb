//! Small wrappers over the browser APIs the controllers share.

use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::config;
use crate::scroll::SectionSpan;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Rendered height of `#header`, falling back to the configured height.
pub fn header_height() -> f64 {
    document()
        .and_then(|d| d.get_element_by_id("header"))
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|e| e.offset_height() as f64)
        .filter(|h| *h > 0.0)
        .unwrap_or(config::HEADER_HEIGHT)
}

/// Top edge of `element` relative to the document.
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

pub fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        warn!("Invalid selector: {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Vertical spans of every `section[id]` on the page.
pub fn section_spans(document: &Document) -> Vec<SectionSpan> {
    query_all(document, "section[id]")
        .into_iter()
        .filter_map(|e| e.dyn_into::<HtmlElement>().ok())
        .map(|e| SectionSpan {
            id: e.id(),
            top: e.offset_top() as f64,
            height: e.offset_height() as f64,
        })
        .collect()
}

pub fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// An `IntersectionObserver` together with the closure it calls.
/// Dropping it disconnects the observer.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ViewportObserver {
    /// Starts observing `targets`. `on_entry` gets every entry along with the
    /// observer so it can unobserve or disconnect.
    pub fn new<F>(targets: &[Element], threshold: f64, root_margin: &str, mut on_entry: F) -> Option<Self>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let window = web_sys::window()?;
        if !supports_intersection_observer(&window) {
            return None;
        }

        let callback: EntriesCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&entry, &observer);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        options.set_root_margin(root_margin);

        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("Could not create IntersectionObserver: {:?}", e);
                return None;
            }
        };
        for target in targets {
            observer.observe(target);
        }
        Some(Self { observer, _callback: callback })
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
