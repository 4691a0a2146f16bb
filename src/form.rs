//! Contact form state.
//!
//! Field errors are set by blur and submit, and cleared by input. Typing into
//! a field never re-validates it; only losing focus does.

use std::collections::HashMap;
use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::contact::{self, ContactSubmission, ContactTransport, SubmitError};
use crate::validation::{validate, Field, FieldError};

pub const INVALID_MESSAGE: &str = "Please correct the highlighted fields and try again.";
pub const FAILED_MESSAGE: &str = "Sorry, your message could not be sent. Please try again later.";
pub const SENT_MESSAGE: &str = "Thanks! Your message has been sent. We'll be in touch soon.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Banner {
    Success,
    Error(&'static str),
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Success => SENT_MESSAGE,
            Banner::Error(message) => *message,
        }
    }

    /// How long the banner stays up, if it hides itself.
    pub fn auto_hide_ms(&self) -> Option<u32> {
        match self {
            Banner::Success => Some(config::SUCCESS_BANNER_MS),
            Banner::Error(_) => None,
        }
    }
}

pub enum FormAction {
    Input(Field, String),
    Blur(Field),
    Submit,
    Finished(Result<(), SubmitError>),
    /// Hides the banner, unless a newer one replaced it since.
    HideBanner(u32),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormModel {
    values: HashMap<Field, String>,
    errors: HashMap<Field, FieldError>,
    banner: Option<Banner>,
    banner_id: u32,
    sending: bool,
}

impl FormModel {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn banner_id(&self) -> u32 {
        self.banner_id
    }

    pub fn sending(&self) -> bool {
        self.sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    fn check_all(&self) -> HashMap<Field, FieldError> {
        Field::ALL
            .into_iter()
            .filter_map(|field| validate(field, self.value(field)).err().map(|e| (field, e)))
            .collect()
    }

    /// The trimmed submission, or every field error if any field is invalid.
    pub fn submission(&self) -> Result<ContactSubmission, HashMap<Field, FieldError>> {
        let errors = self.check_all();
        if !errors.is_empty() {
            return Err(errors);
        }
        let trimmed = |field| self.value(field).trim().to_string();
        Ok(ContactSubmission {
            name: trimmed(Field::Name),
            email: trimmed(Field::Email),
            message: trimmed(Field::Message),
        })
    }

    fn show(&mut self, banner: Option<Banner>) {
        self.banner = banner;
        self.banner_id = self.banner_id.wrapping_add(1);
    }
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Input(field, value) => {
                next.values.insert(field, value);
                next.errors.remove(&field);
            }
            FormAction::Blur(field) => match validate(field, next.value(field)) {
                Ok(()) => {
                    next.errors.remove(&field);
                }
                Err(e) => {
                    next.errors.insert(field, e);
                }
            },
            FormAction::Submit => {
                if next.sending {
                    return self;
                }
                next.errors = next.check_all();
                if next.errors.is_empty() {
                    next.sending = true;
                    next.show(None);
                } else {
                    next.show(Some(Banner::Error(INVALID_MESSAGE)));
                }
            }
            FormAction::Finished(result) => {
                next.sending = false;
                match result {
                    Ok(()) => {
                        next.values.clear();
                        next.errors.clear();
                        next.show(Some(Banner::Success));
                    }
                    Err(_) => next.show(Some(Banner::Error(FAILED_MESSAGE))),
                }
            }
            FormAction::HideBanner(id) => {
                if id != next.banner_id || next.banner.is_none() {
                    return self;
                }
                next.banner = None;
            }
        }
        next.into()
    }
}

/// One submit attempt: validates, sends at most once, reports the outcome.
///
/// `model` is the state at the moment the user submitted.
pub async fn submit<T, D>(model: &FormModel, transport: &T, dispatch: D)
where
    T: ContactTransport + ?Sized,
    D: Fn(FormAction),
{
    if model.sending() {
        return;
    }
    dispatch(FormAction::Submit);
    let Ok(submission) = model.submission() else {
        return;
    };
    let result = contact::deliver(transport, &submission).await;
    dispatch(FormAction::Finished(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::tests::FakeTransport;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn filled(name: &str, email: &str, message: &str) -> Rc<FormModel> {
        Rc::new(FormModel::default())
            .reduce(FormAction::Input(Field::Name, name.into()))
            .reduce(FormAction::Input(Field::Email, email.into()))
            .reduce(FormAction::Input(Field::Message, message.into()))
    }

    fn run_submit(model: Rc<FormModel>, transport: &FakeTransport) -> Rc<FormModel> {
        let state = RefCell::new(model.clone());
        block_on(submit(&model, transport, |action| {
            let current = state.borrow().clone();
            *state.borrow_mut() = current.reduce(action);
        }));
        state.into_inner()
    }

    #[test]
    fn valid_submit_sends_once_resets_and_auto_hides_success() {
        let transport = FakeTransport::replying(Ok(()));
        let model = run_submit(filled("Al", "a@b.co", "1234567890"), &transport);

        assert_eq!(
            transport.sent.borrow().as_slice(),
            &[ContactSubmission {
                name: "Al".into(),
                email: "a@b.co".into(),
                message: "1234567890".into(),
            }]
        );
        for field in Field::ALL {
            assert_eq!(model.value(field), "");
        }
        assert!(!model.sending());
        assert_eq!(model.banner(), Some(&Banner::Success));
        assert_eq!(model.banner().and_then(Banner::auto_hide_ms), Some(5000));

        let hidden = model.clone().reduce(FormAction::HideBanner(model.banner_id()));
        assert_eq!(hidden.banner(), None);
    }

    #[test]
    fn invalid_submit_never_reaches_transport() {
        let transport = FakeTransport::replying(Ok(()));
        let model = run_submit(filled("A", "nope", "short"), &transport);

        assert!(transport.sent.borrow().is_empty());
        assert_eq!(model.error(Field::Name), Some(&FieldError::TooShort { label: "Name", min: 2 }));
        assert_eq!(model.error(Field::Email), Some(&FieldError::InvalidEmail));
        assert_eq!(model.error(Field::Message), Some(&FieldError::TooShort { label: "Message", min: 10 }));
        assert_eq!(model.banner(), Some(&Banner::Error(INVALID_MESSAGE)));
        assert_eq!(model.value(Field::Name), "A");
        assert!(!model.sending());
    }

    #[test]
    fn failed_delivery_keeps_values_and_restores_button() {
        let transport = FakeTransport::replying(Err(SubmitError::Network("offline".into())));
        let model = run_submit(filled("Al", "a@b.co", "1234567890"), &transport);

        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(model.banner(), Some(&Banner::Error(FAILED_MESSAGE)));
        assert_eq!(model.banner().and_then(Banner::auto_hide_ms), None);
        assert_eq!(model.value(Field::Email), "a@b.co");
        assert_eq!(model.submit_label(), "Send Message");
    }

    #[test]
    fn submit_while_sending_is_ignored() {
        let transport = FakeTransport::replying(Ok(()));
        let sending = filled("Al", "a@b.co", "1234567890").reduce(FormAction::Submit);
        assert!(sending.sending());
        assert_eq!(sending.submit_label(), "Sending...");

        let after = run_submit(sending.clone(), &transport);
        assert!(transport.sent.borrow().is_empty());
        assert!(Rc::ptr_eq(&after, &sending));
    }

    #[test]
    fn input_clears_error_without_revalidating() {
        let model = Rc::new(FormModel::default()).reduce(FormAction::Blur(Field::Email));
        assert_eq!(model.error(Field::Email), Some(&FieldError::Required));

        let model = model.reduce(FormAction::Input(Field::Email, "still wrong".into()));
        assert_eq!(model.error(Field::Email), None);

        let model = model.reduce(FormAction::Blur(Field::Email));
        assert_eq!(model.error(Field::Email), Some(&FieldError::InvalidEmail));

        let model = model
            .reduce(FormAction::Input(Field::Email, "a@b.co".into()))
            .reduce(FormAction::Blur(Field::Email));
        assert_eq!(model.error(Field::Email), None);
    }

    #[test]
    fn stale_hide_leaves_newer_banner() {
        let transport = FakeTransport::replying(Ok(()));
        let first = run_submit(filled("Al", "a@b.co", "1234567890"), &transport);
        let stale = first.banner_id();

        let second = first.reduce(FormAction::Submit);
        assert_eq!(second.banner(), Some(&Banner::Error(INVALID_MESSAGE)));

        let after = second.reduce(FormAction::HideBanner(stale));
        assert_eq!(after.banner(), Some(&Banner::Error(INVALID_MESSAGE)));
    }
}
