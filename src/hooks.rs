use log::{debug, info};
use yew::prelude::*;

use crate::config;
use crate::dom::{self, ViewportObserver};
use crate::scroll::RevealSet;

pub const REVEALED_CLASS: &str = "revealed";
const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

/// Adds `revealed` to every reveal-marked element the first time it scrolls
/// into view. Falls back to revealing everything at once when the browser has
/// no `IntersectionObserver`.
#[hook]
pub fn use_scroll_reveal() {
    use_effect_with_deps(
        move |_| {
            let observer = start_reveal();
            move || drop(observer)
        },
        (),
    );
}

fn start_reveal() -> Option<ViewportObserver> {
    let window = web_sys::window()?;
    let document = window.document()?;

    let targets = dom::query_all(&document, &reveal_selector());
    if targets.is_empty() {
        debug!("No reveal targets on page");
        return None;
    }

    if !dom::supports_intersection_observer(&window) {
        info!("IntersectionObserver unavailable, revealing {} elements", targets.len());
        reveal_all(&targets);
        return None;
    }

    for (index, target) in targets.iter().enumerate() {
        let _ = target.set_attribute(REVEAL_INDEX_ATTR, &index.to_string());
    }

    let mut revealed = RevealSet::new(config::REVEAL_THRESHOLD);
    let observer = ViewportObserver::new(
        &targets,
        config::REVEAL_THRESHOLD,
        config::REVEAL_ROOT_MARGIN,
        move |entry, observer| {
            let target = entry.target();
            let Some(index) = target
                .get_attribute(REVEAL_INDEX_ATTR)
                .and_then(|raw| raw.parse::<usize>().ok())
            else {
                return;
            };
            if revealed.observe(index, entry.is_intersecting(), entry.intersection_ratio()) {
                let _ = target.class_list().add_1(REVEALED_CLASS);
            }
            if revealed.is_revealed(&index) {
                observer.unobserve(&target);
            }
        },
    );

    if observer.is_none() {
        reveal_all(&targets);
    }
    observer
}

fn reveal_selector() -> String {
    config::REVEAL_MARKERS
        .iter()
        .map(|marker| format!(".{}", marker))
        .collect::<Vec<_>>()
        .join(", ")
}

fn reveal_all(targets: &[web_sys::Element]) {
    for target in targets {
        let _ = target.class_list().add_1(REVEALED_CLASS);
    }
}
