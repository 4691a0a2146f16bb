use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// One '@', a dot somewhere after it, no whitespace anywhere.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The form control's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// How the field is named in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("{label} must be at least {min} characters.")]
    TooShort { label: &'static str, min: usize },
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

fn too_short(field: Field, min: usize) -> Result<(), FieldError> {
    Err(FieldError::TooShort { label: field.label(), min })
}

pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    match field {
        Field::Name if value.chars().count() < MIN_NAME_LEN => too_short(field, MIN_NAME_LEN),
        Field::Message if value.chars().count() < MIN_MESSAGE_LEN => too_short(field, MIN_MESSAGE_LEN),
        Field::Email if !EMAIL_RE.is_match(value) => Err(FieldError::InvalidEmail),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn blank_is_required_for_every_field() {
        for field in Field::ALL {
            assert_eq!(validate(field, ""), Err(FieldError::Required));
            assert_eq!(validate(field, "   \n\t"), Err(FieldError::Required));
        }
    }

    #[test]
    fn name_needs_two_characters() {
        let short = Err(FieldError::TooShort { label: "Name", min: 2 });
        assert_eq!(validate(Field::Name, "A"), short);
        assert_eq!(validate(Field::Name, " A "), short);
        assert_eq!(validate(Field::Name, "Al"), Ok(()));
    }

    #[test]
    fn message_needs_ten_characters() {
        assert_eq!(
            validate(Field::Message, "123456789"),
            Err(FieldError::TooShort { label: "Message", min: 10 })
        );
        assert_eq!(validate(Field::Message, "1234567890"), Ok(()));
    }

    #[test]
    fn email_shape() {
        for ok in ["a@b.co", "mia.rose+ugc@studio.example.com"] {
            assert_eq!(validate(Field::Email, ok), Ok(()), "{ok}");
        }
        for bad in ["plain", "a@b", "a@@b.co", "a b@c.de", "@b.co", "a@.", "a@b.c o"] {
            assert_eq!(validate(Field::Email, bad), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn messages_render_for_inline_errors() {
        let message = |field, value| validate(field, value).unwrap_err().to_string();
        assert_eq!(message(Field::Name, "A"), "Name must be at least 2 characters.");
        assert_eq!(message(Field::Message, "short"), "Message must be at least 10 characters.");
        assert_eq!(message(Field::Email, "nope"), "Please enter a valid email address.");
        assert_eq!(message(Field::Email, ""), "This field is required.");
        assert_eq!(Field::Message.name(), "message");
    }
}
