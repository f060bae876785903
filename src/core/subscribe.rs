use crate::core::{Feedback, Notice, Notifier, TextField};
use crate::utils::error::{PageError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Anything but `@` and the whitespace set browsers match with `\s`. The `regex` crate's own
/// `\s` is Unicode `White_Space`, which adds U+0085 and drops U+FEFF.
const ADDRESS_CHAR: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{c}+@{c}+\.{c}+$", c = ADDRESS_CHAR))
        .expect("email pattern is a valid regex")
});

/// An address that passed the newsletter format check. The raw text is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self> {
        if EMAIL_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PageError::InvalidEmail {
                value: raw.to_string(),
            })
        }
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validates the field, acknowledges, and clears it on success. An invalid address stays in the field.
pub fn handle_subscribe<F, N>(input: &F, feedback: &Feedback<'_, N>) -> Notice
where
    F: TextField,
    N: Notifier,
{
    match EmailAddress::parse(&input.value()) {
        Ok(email) => {
            tracing::debug!(email = email.as_ref(), "newsletter address accepted");
            feedback.show(&Notice::Subscribed);
            input.set_value("");
            Notice::Subscribed
        }
        Err(e) => {
            tracing::debug!("{}", e);
            feedback.show(&Notice::InvalidEmail);
            Notice::InvalidEmail
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_address() {
        assert!(EmailAddress::parse("user@example.com").is_ok());
        assert!(EmailAddress::parse("first.last+news@mail.example.org").is_ok());
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for bad in [
            "user@example",
            "user example.com",
            "@example.com",
            "user@.com",
            "user@example.",
            "user@@example.com",
            " user@example.com",
            "",
        ] {
            assert!(EmailAddress::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_whitespace_matches_browser_set() {
        // Zero-width no-break space counts as whitespace in the page's validator.
        assert!(EmailAddress::parse("user@exa\u{FEFF}mple.com").is_err());
        assert!(EmailAddress::parse("user@example.com\u{3000}").is_err());
        assert!(EmailAddress::parse("user\u{A0}@example.com").is_err());
        // NEXT LINE does not.
        assert!(EmailAddress::parse("us\u{0085}er@example.com").is_ok());
    }

    #[test]
    fn test_error_keeps_value() {
        match EmailAddress::parse("nope") {
            Err(PageError::InvalidEmail { value }) => assert_eq!(value, "nope"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
