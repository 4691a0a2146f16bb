use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;
use crate::scroll::{self, FrameGuard};

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#how-it-works", "How it works"),
    ("#demo", "Demo"),
    ("#features", "Features"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

/// Recomputes the header and active-link state from the current scroll offset.
/// Outside every section the last highlight is kept.
fn sync_scroll_state(
    scrolled: &UseStateHandle<bool>,
    active: &UseStateHandle<Option<String>>,
    last_active: &RefCell<Option<String>>,
) {
    let Some(document) = dom::document() else {
        return;
    };
    let y = dom::scroll_y();
    scrolled.set(scroll::header_scrolled(y));

    let sections = dom::section_spans(&document);
    let current = {
        let last = last_active.borrow();
        scroll::next_active(last.as_deref(), &sections, y, dom::header_height()).map(str::to_string)
    };
    *last_active.borrow_mut() = current.clone();
    active.set(current);
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state_eq(|| false);
    let scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    // The scroll listener outlives the render that created it, so it reads
    // the previous highlight from here rather than from `active`.
    let last_active = use_mut_ref(|| None::<String>);
    let nav_cluster = use_node_ref();

    {
        let scrolled = scrolled.clone();
        let active = active.clone();
        let last_active = last_active.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    if dom::document().map_or(true, |d| dom::section_spans(&d).is_empty()) {
                        warn!("No sections with ids found; nav highlighting disabled");
                    }

                    let guard = Rc::new(FrameGuard::default());
                    let update = Rc::new(move || sync_scroll_state(&scrolled, &active, &last_active));
                    update();

                    let on_scroll = Closure::<dyn Fn()>::new({
                        let window = window.clone();
                        move || {
                            if !guard.claim() {
                                return;
                            }
                            let frame = Closure::once_into_js({
                                let guard = guard.clone();
                                let update = update.clone();
                                move || {
                                    update();
                                    guard.release();
                                }
                            });
                            if window.request_animation_frame(frame.unchecked_ref()).is_err() {
                                guard.release();
                            }
                        }
                    });
                    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    (window, on_scroll)
                });

                move || {
                    if let Some((window, on_scroll)) = listener {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    {
        let menu_open = menu_open.clone();
        use_click_away(nav_cluster.clone(), move |_: Event| {
            menu_open.set(false);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = NAV_LINKS.iter().map(|(href, label)| {
        let id = scroll::anchor_id(href).unwrap_or_default();
        let is_active = active.as_deref() == Some(id);
        let onclick = {
            let active = active.clone();
            let last_active = last_active.clone();
            let menu_open = menu_open.clone();
            let id = id.to_string();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let Some(target) = dom::document().and_then(|d| d.get_element_by_id(&id)) else {
                    debug!("Nav target #{} not found", id);
                    return;
                };
                let top = dom::document_top(&target);
                dom::smooth_scroll_to(scroll::anchor_offset(top, dom::header_height()));
                *last_active.borrow_mut() = Some(id.clone());
                active.set(Some(id.clone()));
                menu_open.set(false);
            })
        };
        html! {
            <a href={*href} class={classes!("nav-link", is_active.then_some("active"))} {onclick}>
                {*label}
            </a>
        }
    });

    html! {
        <header id="header" class={classes!("site-header", (*scrolled).then_some("scrolled"))}>
            <div class="header-inner">
                <a href="#hero" class="logo">
                    <span class="logo-mark">{"UGC"}</span>{" Rights"}
                </a>
                <div class="nav-cluster" ref={nav_cluster}>
                    <button
                        id="hamburger"
                        class={classes!("hamburger", (*menu_open).then_some("active"))}
                        aria-label="Toggle navigation"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <nav id="mainNav" class={classes!("main-nav", (*menu_open).then_some("active"))}>
                        { for links }
                        <a href="#contact" class="nav-cta">{"Get Started"}</a>
                    </nav>
                </div>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 100;
                    background: transparent;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.96);
                    box-shadow: 0 2px 16px rgba(15, 23, 42, 0.08);
                    backdrop-filter: blur(8px);
                }

                .header-inner {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1.25rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .logo {
                    font-size: 1.4rem;
                    font-weight: 700;
                    color: #0f172a;
                    text-decoration: none;
                }

                .logo-mark {
                    color: #6d28d9;
                }

                .main-nav {
                    display: flex;
                    gap: 2rem;
                    align-items: center;
                }

                .nav-link {
                    color: #475569;
                    text-decoration: none;
                    font-weight: 500;
                    transition: color 0.2s ease;
                }

                .nav-link:hover,
                .nav-link.active {
                    color: #6d28d9;
                }

                .nav-cta {
                    background: #6d28d9;
                    color: #fff;
                    padding: 0.6rem 1.2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 600;
                }

                .hamburger {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .hamburger span {
                    width: 24px;
                    height: 2px;
                    background: #0f172a;
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .hamburger.active span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .hamburger.active span:nth-child(2) {
                    opacity: 0;
                }

                .hamburger.active span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 860px) {
                    .hamburger {
                        display: flex;
                    }

                    .main-nav {
                        position: fixed;
                        top: 70px;
                        right: 0;
                        width: 100%;
                        flex-direction: column;
                        padding: 2rem;
                        background: #fff;
                        box-shadow: 0 12px 24px rgba(15, 23, 42, 0.1);
                        transform: translateY(-150%);
                        transition: transform 0.3s ease;
                    }

                    .main-nav.active {
                        transform: translateY(0);
                    }
                }
                "#}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_links_are_in_page_anchors() {
        for (href, _) in NAV_LINKS {
            assert!(scroll::anchor_id(href).is_some(), "{}", href);
        }
    }
}
