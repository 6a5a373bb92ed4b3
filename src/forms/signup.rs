// src/forms/signup.rs
use crate::domain::Signup;
use crate::forms::{FormData, ValidationError};
use chrono::{DateTime, Utc};
use regex::Regex;

/// Raw signup fields as typed by the volunteer.
#[derive(Debug, Default, Clone)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static::lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
    }
    EMAIL_REGEX.is_match(email)
}

impl SignupForm {
    pub fn from_form(form: &FormData) -> Self {
        Self {
            name: form.get("name").to_string(),
            email: form.get("email").to_string(),
            phone: form.get("phone").to_string(),
        }
    }

    /// Checks presence first, then the email shape, and stamps the signup with `now`.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<Signup, ValidationError> {
        if self.name.is_empty() || self.email.is_empty() || self.phone.is_empty() {
            return Err(ValidationError::new("Please fill in all fields."));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new("Please enter a valid email address."));
        }

        Ok(Signup {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            signup_date: now,
        })
    }
}
