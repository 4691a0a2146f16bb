use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::contact::{ContactTransport, HttpTransport};
use crate::form::{self, Banner, FormAction, FormModel};
use crate::validation::Field;

/// Shared handle to whatever delivers submissions.
#[derive(Clone)]
pub struct Transport(pub Rc<dyn ContactTransport>);

impl PartialEq for Transport {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self(Rc::new(HttpTransport::default()))
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    #[prop_or_default]
    pub transport: Transport,
}

fn event_value(e: &Event) -> Option<String> {
    let target = e.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    target.dyn_ref::<HtmlTextAreaElement>().map(|area| area.value())
}

/// Grows the textarea with its content, up to the configured cap.
fn autosize(textarea: &HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let height = textarea.scroll_height().min(config::TEXTAREA_MAX_HEIGHT);
    let _ = style.set_property("height", &format!("{}px", height));
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let model = use_reducer(FormModel::default);
    let message_ref = use_node_ref();
    // Guards against a second submit landing before the re-render.
    let in_flight = use_mut_ref(|| false);

    // Success banners clear themselves.
    {
        let dispatcher = model.dispatcher();
        let banner = model.banner().cloned();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = banner
                    .and_then(|b| b.auto_hide_ms())
                    .map(|ms| Timeout::new(ms, move || dispatcher.dispatch(FormAction::HideBanner(id))));
                move || drop(timeout)
            },
            model.banner_id(),
        );
    }

    // Covers typing as well as the reset after a successful send.
    {
        let message_ref = message_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(textarea) = message_ref.cast::<HtmlTextAreaElement>() {
                    autosize(&textarea);
                }
                || ()
            },
            model.value(Field::Message).to_string(),
        );
    }

    let onsubmit = {
        let model = model.clone();
        let transport = props.transport.clone();
        let in_flight = in_flight.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if in_flight.replace(true) {
                return;
            }
            let snapshot = (*model).clone();
            let dispatcher = model.dispatcher();
            let transport = transport.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                form::submit(&snapshot, transport.0.as_ref(), move |action| dispatcher.dispatch(action)).await;
                *in_flight.borrow_mut() = false;
            });
        })
    };

    let field_handlers = |field: Field| {
        let oninput = {
            let dispatcher = model.dispatcher();
            Callback::from(move |e: InputEvent| {
                if let Some(value) = event_value(&e) {
                    dispatcher.dispatch(FormAction::Input(field, value));
                }
            })
        };
        let onblur = {
            let dispatcher = model.dispatcher();
            Callback::from(move |_: FocusEvent| dispatcher.dispatch(FormAction::Blur(field)))
        };
        (oninput, onblur)
    };

    let field_class = |field: Field| classes!("form-control", model.error(field).is_some().then_some("error"));
    let field_error = |field: Field| match model.error(field) {
        Some(error) => html! { <span class="field-error">{error.to_string()}</span> },
        None => html! {},
    };

    let (name_input, name_blur) = field_handlers(Field::Name);
    let (email_input, email_blur) = field_handlers(Field::Email);
    let (message_input, message_blur) = field_handlers(Field::Message);

    let banner = model.banner().map(|banner| {
        let kind = match banner {
            Banner::Success => "success",
            Banner::Error(_) => "error",
        };
        html! {
            <div class={classes!("form-banner", kind)} role="status">{banner.text()}</div>
        }
    });

    html! {
        <section id="contact" class="contact-section">
            <div class="section-heading reveal">
                <h2>{"Talk to us"}</h2>
                <p>{"Tell us about your brand and we'll set up your first rights requests together."}</p>
            </div>
            <form id="contactForm" class="contact-form reveal" novalidate={true} {onsubmit}>
                { for banner }
                <div class="form-group">
                    <label for="name">{"Name"}</label>
                    <input
                        id="name"
                        name={Field::Name.name()}
                        type="text"
                        class={field_class(Field::Name)}
                        value={model.value(Field::Name).to_string()}
                        oninput={name_input}
                        onblur={name_blur}
                    />
                    { field_error(Field::Name) }
                </div>
                <div class="form-group">
                    <label for="email">{"Email"}</label>
                    <input
                        id="email"
                        name={Field::Email.name()}
                        type="email"
                        class={field_class(Field::Email)}
                        value={model.value(Field::Email).to_string()}
                        oninput={email_input}
                        onblur={email_blur}
                    />
                    { field_error(Field::Email) }
                </div>
                <div class="form-group">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        ref={message_ref}
                        name={Field::Message.name()}
                        rows="4"
                        class={field_class(Field::Message)}
                        value={model.value(Field::Message).to_string()}
                        oninput={message_input}
                        onblur={message_blur}
                    />
                    { field_error(Field::Message) }
                </div>
                <button type="submit" class="submit-button" disabled={model.sending()}>
                    {model.submit_label()}
                </button>
            </form>

            <style>
                {r#"
                .contact-section {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 6rem 2rem;
                }

                .contact-form {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    padding: 2.5rem;
                    box-shadow: 0 12px 32px rgba(15, 23, 42, 0.06);
                }

                .form-group {
                    margin-bottom: 1.5rem;
                    display: flex;
                    flex-direction: column;
                }

                .form-group label {
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                    color: #0f172a;
                }

                .form-control {
                    padding: 0.8rem 1rem;
                    border: 1px solid #cbd5e1;
                    border-radius: 8px;
                    font: inherit;
                    transition: border-color 0.2s ease;
                }

                .form-control:focus {
                    outline: none;
                    border-color: #6d28d9;
                }

                .form-control.error {
                    border-color: #dc2626;
                }

                textarea.form-control {
                    resize: none;
                    overflow-y: auto;
                    max-height: 400px;
                }

                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin-top: 0.4rem;
                }

                .form-banner {
                    padding: 1rem;
                    border-radius: 8px;
                    margin-bottom: 1.5rem;
                    font-weight: 500;
                }

                .form-banner.success {
                    background: #ecfdf5;
                    color: #047857;
                }

                .form-banner.error {
                    background: #fef2f2;
                    color: #b91c1c;
                }

                .submit-button {
                    width: 100%;
                    padding: 0.9rem;
                    border: none;
                    border-radius: 8px;
                    background: #6d28d9;
                    color: #fff;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                }

                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: wait;
                }
                "#}
            </style>
        </section>
    }
}
