use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub const SENDING_LABEL: &str = "Sending...";

/// User-facing failures. The `Display` text is what the alert shows.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingField(&'static str),
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("There was an error submitting the form. Please try again.")]
    Transport(String),
}

/// Raw values read off a demo request form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub organization: String,
    pub role: String,
    pub message: String,
}

/// The JSON body posted to the spreadsheet endpoint.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct DemoRequest {
    pub name: String,
    pub email: String,
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl FormFields {
    pub fn validate(&self) -> Result<DemoRequest, FormError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("organization", &self.organization),
        ] {
            if value.trim().is_empty() {
                return Err(FormError::MissingField(field));
            }
        }

        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail);
        }

        Ok(DemoRequest {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            organization: self.organization.trim().to_string(),
            role: optional(&self.role),
            message: optional(&self.message),
        })
    }
}

/// Label and enabled state of a form's submit button.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitButton {
    original: String,
    pub label: String,
    pub disabled: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original: label.clone(),
            label,
            disabled: false,
        }
    }

    pub fn sending(&self) -> Self {
        Self {
            original: self.original.clone(),
            label: SENDING_LABEL.to_string(),
            disabled: true,
        }
    }

    pub fn restored(&self) -> Self {
        Self::new(self.original.clone())
    }

    pub fn is_idle(&self) -> bool {
        !self.disabled && self.label == self.original
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, email: &str, organization: &str) -> FormFields {
        FormFields {
            name: name.into(),
            email: email.into(),
            organization: organization.into(),
            ..FormFields::default()
        }
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("ada@example.org"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada @example.org"));
        assert!(!is_valid_email("ada@@example.org"));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        assert_eq!(
            fields("", "", "").validate(),
            Err(FormError::MissingField("name"))
        );
        assert_eq!(
            fields("Ada", "ada@example.org", "   ").validate(),
            Err(FormError::MissingField("organization"))
        );
        assert_eq!(
            fields("Ada", "not-an-email", "Acme").validate(),
            Err(FormError::InvalidEmail)
        );
    }

    #[test]
    fn alert_texts() {
        assert_eq!(
            FormError::MissingField("name").to_string(),
            "Please fill in all required fields"
        );
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn optional_fields_are_left_out_of_the_json_when_blank() {
        let request = fields(" Ada ", "ada@example.org", "Acme").validate().unwrap();
        assert_eq!(request.name, "Ada");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.org",
                "organization": "Acme",
            })
        );

        let mut with_note = fields("Ada", "ada@example.org", "Acme");
        with_note.message = "Call me".into();
        let json = serde_json::to_value(with_note.validate().unwrap()).unwrap();
        assert_eq!(json["message"], "Call me");
        assert!(json.get("role").is_none());
    }

    #[test]
    fn button_round_trip() {
        let button = SubmitButton::new("Request Demo");
        assert!(button.is_idle());
        let busy = button.sending();
        assert_eq!(busy.label, "Sending...");
        assert!(busy.disabled);
        assert!(!busy.is_idle());
        assert_eq!(busy.restored(), button);
    }
}
