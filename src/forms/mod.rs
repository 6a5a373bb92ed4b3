pub mod opportunity;
pub mod signup;

use std::collections::HashMap;
use thiserror::Error;

pub use opportunity::{OpportunityForm, OPPORTUNITY_TIME_CHOICES};
pub use signup::SignupForm;

/// A form constraint was violated. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

impl ValidationError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Decoded `application/x-www-form-urlencoded` pairs (body or query string).
/// A repeated key keeps its last value.
#[derive(Debug, Default, Clone)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    pub fn parse(raw: &str) -> Self {
        Self(url::form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    /// Value of a field, or "" when absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn opt(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// HTML checkboxes are only submitted when ticked.
    pub fn checked(&self, key: &str) -> bool {
        matches!(self.opt(key), Some("on" | "true" | "1" | "yes"))
    }
}
