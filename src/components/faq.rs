use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew::{Children, Properties};

use crate::accordion::{self, AccordionMode, AccordionState, Toggle};
use crate::config;
use crate::dom;

pub const FAQ_ENTRIES: &[(&str, &str)] = &[
    (
        "What does UGC Rights actually do?",
        "We handle the paperwork between your brand and the creators whose posts you want to reuse. You pick the content, we request permission, and every approval is stored with a timestamped license.",
    ),
    (
        "Do creators get paid?",
        "That's up to you. Offer a flat fee, free product or simple credit. The request template makes the terms clear so creators know exactly what they agree to.",
    ),
    (
        "Which platforms are supported?",
        "Instagram, TikTok and YouTube Shorts today. Rights requests are sent from your own brand account, so creators see who is asking.",
    ),
    (
        "How long does approval take?",
        "Most creators respond within a day. Pending requests are followed up automatically, and you can see the status of every post from the dashboard.",
    ),
    (
        "Can I cancel anytime?",
        "Yes. Plans are month to month and all licenses you collected stay valid after you leave.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    open: bool,
    on_toggle: Callback<usize>,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let item_ref = use_node_ref();

    // Bring a freshly opened item into view once it has expanded.
    {
        let item_ref = item_ref.clone();
        use_effect_with_deps(
            move |open| {
                if *open {
                    spawn_local(async move {
                        TimeoutFuture::new(config::ACCORDION_SCROLL_DELAY_MS).await;
                        let Some(item) = item_ref.cast::<Element>() else {
                            return;
                        };
                        let top = dom::document_top(&item);
                        if let Some(target) = accordion::reveal_offset(top, dom::scroll_y(), dom::header_height()) {
                            dom::smooth_scroll_to(target);
                        }
                    });
                }
                || ()
            },
            props.open,
        );
    }

    let on_header = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let on_icon = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            on_toggle.emit(index);
        })
    };

    html! {
        <div ref={item_ref} class={classes!("faq-item", props.open.then_some("active"))}>
            <button class="faq-question" onclick={on_header} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="faq-toggle" onclick={on_icon}>{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    #[prop_or_default]
    pub mode: AccordionMode,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let mode = props.mode;
    let state = use_reducer(move || AccordionState::new(FAQ_ENTRIES.len(), mode));

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(Toggle(index)))
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="section-heading reveal">
                <h2>{"Frequently Asked Questions"}</h2>
                <p>{"Everything you need to know before your first rights request."}</p>
            </div>
            <div class="faq-list reveal">
                { for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| html! {
                    <FaqItem
                        {index}
                        question={*question}
                        open={state.is_open(index)}
                        on_toggle={on_toggle.clone()}
                    >
                        <p>{*answer}</p>
                    </FaqItem>
                }) }
            </div>

            <style>
                {r#"
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .faq-item {
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    background: #fff;
                    overflow: hidden;
                    transition: box-shadow 0.3s ease;
                }

                .faq-item.active {
                    box-shadow: 0 8px 24px rgba(109, 40, 217, 0.08);
                }

                .faq-question {
                    width: 100%;
                    padding: 1.25rem 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    font-size: 1.05rem;
                    font-weight: 600;
                    color: #0f172a;
                    text-align: left;
                    cursor: pointer;
                }

                .faq-toggle {
                    font-size: 1.5rem;
                    color: #6d28d9;
                    margin-left: 1rem;
                }

                .faq-answer {
                    max-height: 0;
                    padding: 0 1.5rem;
                    color: #475569;
                    line-height: 1.6;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                }

                .faq-item.active .faq-answer {
                    max-height: 500px;
                    padding: 0 1.5rem 1.25rem;
                }
                "#}
            </style>
        </section>
    }
}
