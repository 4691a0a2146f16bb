use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::{debug, warn};
use web_sys::Element;
use yew::prelude::*;

use crate::animation::{Cue, DemoAction, DemoScript, DemoState, FeedbackRow, Phase};
use crate::config;
use crate::dom::ViewportObserver;

/// Timers for the running session. Dropping a handle cancels it, so there is
/// never more than one typing interval alive.
#[derive(Default)]
struct Playback {
    typing: Option<Interval>,
    cues: Vec<Timeout>,
}

impl Playback {
    fn stop(&mut self) {
        self.typing = None;
        self.cues.clear();
    }
}

/// Classes on the reveal-marked panel. These never change between renders:
/// the reveal hook adds `revealed` behind the vdom, and any class diff here
/// would overwrite it.
const PREVIEW_CLASS: &str = "demo-preview reveal-scale";

fn window_classes(phase: Phase) -> Classes {
    classes!("demo-window", (phase == Phase::Typing).then_some("is-typing"))
}

fn default_text() -> AttrValue {
    AttrValue::from(config::DEMO_TEXT)
}

#[derive(Properties, PartialEq)]
pub struct DemoPreviewProps {
    #[prop_or_else(default_text)]
    pub text: AttrValue,
    #[prop_or_else(FeedbackRow::from_config)]
    pub rows: Vec<FeedbackRow>,
}

#[function_component(DemoPreview)]
pub fn demo_preview(props: &DemoPreviewProps) -> Html {
    let preview = use_node_ref();
    let state = use_reducer({
        let text = props.text.clone();
        move || DemoState::new(&text)
    });
    let playback = use_mut_ref(Playback::default);
    let visible = use_mut_ref(|| false);
    let generation = use_state(|| 0u32);
    let script = DemoScript::new(&props.text, props.rows.len());

    // Arm a one-shot observer. Every finished loop bumps the generation,
    // which re-arms it for the next time the panel scrolls into view.
    {
        let preview = preview.clone();
        let playback = playback.clone();
        let visible = visible.clone();
        let dispatcher = state.dispatcher();
        let text = props.text.clone();
        let interval_ms = script.interval_ms();
        use_effect_with_deps(
            move |_| {
                let observer = arm(&preview, &text, interval_ms, playback, visible, dispatcher);
                move || drop(observer)
            },
            *generation,
        );
    }

    // Typing finished: stop the interval and lay out the rest of the timeline.
    {
        let playback = playback.clone();
        let visible = visible.clone();
        let dispatcher = state.dispatcher();
        let current_generation = *generation;
        let generation = generation.clone();
        use_effect_with_deps(
            move |(complete, _)| {
                let mut playback = playback.borrow_mut();
                if *complete && playback.typing.take().is_some() {
                    debug!("Demo typing done, {}ms until replay", script.total_ms() - script.typing_ms());
                    let cues = script.cues().iter().map(|scheduled| {
                        let dispatcher = dispatcher.clone();
                        let visible = visible.clone();
                        let generation = generation.clone();
                        let cue = scheduled.cue;
                        Timeout::new(scheduled.after_ms, move || {
                            dispatcher.dispatch(DemoAction::Cue(cue));
                            if cue == Cue::Reset {
                                *visible.borrow_mut() = false;
                                generation.set(*generation + 1);
                            }
                        })
                    });
                    playback.cues = cues.collect();
                }
                || ()
            },
            (state.typing_complete(), current_generation),
        );
    }

    // Cancel everything on unmount.
    {
        let playback = playback.clone();
        use_effect_with_deps(move |_| move || playback.borrow_mut().stop(), ());
    }

    let phase = state.phase(props.rows.len());

    html! {
        <section id="demo" class="demo-section">
            <div class="section-heading reveal">
                <h2>{"See a rights request in action"}</h2>
                <p>{"Drafted, scored and ready to send in seconds."}</p>
            </div>
            <div
                id="demo-preview"
                ref={preview}
                class={PREVIEW_CLASS}
            >
                <div class={window_classes(phase)}>
                    <div class="demo-window-bar">
                        <span></span><span></span><span></span>
                    </div>
                    <div class="demo-message">
                        <span id="demo-typing" class="demo-typing">{&state.typed}</span>
                        <span class="typing-cursor"></span>
                    </div>
                </div>
                <div
                    id="feedback-suggestion"
                    class={classes!("feedback-suggestion", state.suggestion_visible.then_some("show"))}
                >
                    {"✓ Tone looks friendly. Ready to send."}
                </div>
                <div class="feedback-list">
                    { for props.rows.iter().enumerate().map(|(index, row)| {
                        let width = state.fill_width(index, row);
                        html! {
                            <div class={classes!("feedback-item", state.row_revealed(index).then_some("show"))}>
                                <span class="feedback-label">{&row.label}</span>
                                <div class="mini-score">
                                    <div
                                        class="mini-score-fill"
                                        data-target={row.raw_target.clone()}
                                        style={width.map(|w| format!("width: {}%;", w))}
                                    ></div>
                                </div>
                                <span class="feedback-value">
                                    { width.map(|w| format!("{}%", w)).unwrap_or_default() }
                                </span>
                            </div>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .demo-section {
                    padding: 6rem 2rem;
                    background: #f8fafc;
                }

                .demo-preview {
                    max-width: 720px;
                    margin: 0 auto;
                }

                .demo-window {
                    background: #0f172a;
                    border-radius: 14px;
                    overflow: hidden;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.2);
                }

                .demo-window-bar {
                    display: flex;
                    gap: 6px;
                    padding: 0.75rem 1rem;
                    background: #1e293b;
                }

                .demo-window-bar span {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    background: #475569;
                }

                .demo-message {
                    min-height: 6rem;
                    padding: 1.5rem;
                    color: #e2e8f0;
                    font-family: "SFMono-Regular", Menlo, monospace;
                    line-height: 1.6;
                }

                .typing-cursor {
                    display: inline-block;
                    width: 2px;
                    height: 1.1em;
                    margin-left: 2px;
                    vertical-align: text-bottom;
                    background: #a78bfa;
                    opacity: 0;
                }

                .demo-window.is-typing .typing-cursor {
                    opacity: 1;
                    animation: blink 0.8s steps(1) infinite;
                }

                @keyframes blink {
                    50% { opacity: 0; }
                }

                .feedback-suggestion {
                    margin: 1.25rem 0;
                    padding: 0.75rem 1rem;
                    border-radius: 8px;
                    background: #ecfdf5;
                    color: #047857;
                    font-weight: 600;
                    opacity: 0;
                    transform: translateY(8px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }

                .feedback-suggestion.show,
                .feedback-item.show {
                    opacity: 1;
                    transform: translateY(0);
                }

                .feedback-item {
                    display: grid;
                    grid-template-columns: 10rem 1fr 3rem;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 0.75rem;
                    opacity: 0;
                    transform: translateY(8px);
                    transition: opacity 0.4s ease, transform 0.4s ease;
                }

                .mini-score {
                    height: 8px;
                    border-radius: 4px;
                    background: #e2e8f0;
                    overflow: hidden;
                }

                .mini-score-fill {
                    width: 0;
                    height: 100%;
                    background: linear-gradient(90deg, #8b5cf6, #6d28d9);
                    transition: width 0.8s ease-out;
                }
                "#}
            </style>
        </section>
    }
}

/// Observes the preview and starts a session the first time at least half of
/// it is visible.
fn arm(
    preview: &NodeRef,
    text: &str,
    interval_ms: u32,
    playback: Rc<RefCell<Playback>>,
    visible: Rc<RefCell<bool>>,
    dispatcher: UseReducerDispatcher<DemoState>,
) -> Option<ViewportObserver> {
    let Some(element) = preview.cast::<Element>() else {
        warn!("Demo preview element not found; animation disabled");
        return None;
    };
    if text.is_empty() {
        warn!("Demo text is empty; animation disabled");
        return None;
    }

    let observer = ViewportObserver::new(
        &[element],
        config::DEMO_VISIBILITY_THRESHOLD,
        "0px",
        move |entry, observer| {
            let in_view = entry.is_intersecting()
                && entry.intersection_ratio() + 1e-3 >= config::DEMO_VISIBILITY_THRESHOLD;
            if !in_view || visible.replace(true) {
                return;
            }
            observer.disconnect();

            let mut playback = playback.borrow_mut();
            playback.stop();
            dispatcher.dispatch(DemoAction::Cue(Cue::Reset));
            let tick = dispatcher.clone();
            playback.typing = Some(Interval::new(interval_ms, move || {
                tick.dispatch(DemoAction::Tick)
            }));
        },
    );
    if observer.is_none() {
        warn!("Viewport detection unavailable; demo animation disabled");
    }
    observer
}
