use serde::{Deserialize, Serialize};
use std::fmt;

/// PII category, listed in redaction pass order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Email,
    CreditCardNumber,
    Name,
    PhoneNumber,
    SocialSecurityNumber,
}

impl Label {
    /// Fixed pass order: email, credit card, name, phone, SSN
    pub const PASS_ORDER: [Label; 5] = [
        Label::Email,
        Label::CreditCardNumber,
        Label::Name,
        Label::PhoneNumber,
        Label::SocialSecurityNumber,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Email => "EMAIL",
            Label::CreditCardNumber => "CREDIT_CARD_NUMBER",
            Label::Name => "NAME",
            Label::PhoneNumber => "PHONE_NUMBER",
            Label::SocialSecurityNumber => "SOCIAL_SECURITY_NUMBER",
        }
    }

    /// Placeholder key for the `index`-th value of this label (1-based)
    pub fn placeholder(&self, index: usize) -> String {
        format!("{}_{}", self.as_str(), index)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
