use pii_core::Label;
use regex::Regex;
use std::sync::LazyLock;

// 16 contiguous digits
static CREDIT_CARD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[3456][0-9]{15}\b").unwrap());

// 16 digits in groups of four, separated by ASCII whitespace, dash, or plus
static CREDIT_CARD_DELIMITED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b[3456][0-9]{3}(?-u:[\s+-])[0-9]{4}(?-u:[\s+-])[0-9]{4}(?-u:[\s+-])[0-9]{4}\b",
    )
    .unwrap()
});

// `@` or its URL-encoded form `%40`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z0-9_+.-]+(?:@|%40)[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]+\b").unwrap()
});

// The leading \b means a `+NN ` prefix only joins the match after a word character
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:\+[0-9]{1,2}(?-u:\s))?\(?[0-9]{3}\)?(?-u:[\s+.-])[0-9]{3}(?-u:[\s+.-])[0-9]{4}\b",
    )
    .unwrap()
});

static SSN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[0-9]{3}(?-u:[\s+-])[0-9]{2}(?-u:[\s+-])[0-9]{4}\b").unwrap()
});

/// Regex matchers for structured PII.
///
/// Matching is purely textual: no Luhn check, no area-code validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDetector;

impl PatternDetector {
    pub fn new() -> Self {
        Self
    }

    /// Patterns applied for `label`, in application order. Names have none.
    pub fn patterns(&self, label: Label) -> Vec<&'static Regex> {
        match label {
            Label::Email => vec![&*EMAIL_REGEX],
            Label::CreditCardNumber => vec![&*CREDIT_CARD_REGEX, &*CREDIT_CARD_DELIMITED_REGEX],
            Label::PhoneNumber => vec![&*PHONE_REGEX],
            Label::SocialSecurityNumber => vec![&*SSN_REGEX],
            Label::Name => Vec::new(),
        }
    }

    /// All matches for `label` in `text`, pattern by pattern, duplicates kept
    pub fn detect(&self, label: Label, text: &str) -> Vec<String> {
        self.patterns(label)
            .into_iter()
            .flat_map(|pattern| pattern.find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }

    pub fn email_addresses(&self, text: &str) -> Vec<String> {
        self.detect(Label::Email, text)
    }

    pub fn credit_card_numbers(&self, text: &str) -> Vec<String> {
        self.detect(Label::CreditCardNumber, text)
    }

    pub fn phone_numbers(&self, text: &str) -> Vec<String> {
        self.detect(Label::PhoneNumber, text)
    }

    pub fn social_security_numbers(&self, text: &str) -> Vec<String> {
        self.detect(Label::SocialSecurityNumber, text)
    }
}
