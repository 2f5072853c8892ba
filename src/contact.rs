use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a send notification stays on screen.
pub const NOTICE_DURATION_MS: u64 = 5000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub message: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please tell me your name")]
    MissingName,
    #[error("An email address is required")]
    MissingEmail,
    #[error("That email address doesn't look right")]
    InvalidEmail,
    #[error("The message is empty")]
    MissingMessage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactError {
    pub fn field(&self) -> ContactField {
        match self {
            Self::MissingName => ContactField::Name,
            Self::MissingEmail | Self::InvalidEmail => ContactField::Email,
            Self::MissingMessage => ContactField::Message,
        }
    }
}

impl ContactMessage {
    /// Trims the raw form input and checks every required field, collecting
    /// one error per invalid field.
    pub fn validate(
        name: &str,
        email: &str,
        company: Option<&str>,
        message: &str,
    ) -> Result<Self, Vec<ContactError>> {
        let name = name.trim();
        let email = email.trim();
        let company = company.map(str::trim).filter(|c| !c.is_empty());
        let message = message.trim();

        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(ContactError::MissingName);
        }
        if email.is_empty() {
            errors.push(ContactError::MissingEmail);
        } else if !is_valid_email(email) {
            errors.push(ContactError::InvalidEmail);
        }
        if message.is_empty() {
            errors.push(ContactError::MissingMessage);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            company: company.map(str::to_string),
            message: message.to_string(),
        })
    }

    /// Re-runs validation on an already built message, e.g. one received by
    /// the server.
    pub fn revalidate(&self) -> Result<Self, Vec<ContactError>> {
        Self::validate(
            &self.name,
            &self.email,
            self.company.as_deref(),
            &self.message,
        )
    }
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Outcome of a send attempt as shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendNotice {
    Sent,
    Failed(String),
}

impl SendNotice {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn text(&self) -> String {
        match self {
            Self::Sent => "Thanks! Your message is on its way.".to_string(),
            Self::Failed(reason) => format!("Couldn't send your message: {reason}. Please try again."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_message_is_trimmed() {
        let msg = ContactMessage::validate(
            "  Ada Lovelace ",
            "ada@example.com ",
            Some("  "),
            "\nHello there\n",
        )
        .expect("should validate");
        assert_eq!(
            msg,
            ContactMessage {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                company: None,
                message: "Hello there".to_string(),
            }
        );
    }

    #[test]
    fn test_company_kept_when_present() {
        let msg = ContactMessage::validate("Ada", "ada@example.com", Some(" Analytical "), "Hi")
            .expect("should validate");
        assert_eq!(msg.company.as_deref(), Some("Analytical"));
    }

    #[test]
    fn test_all_errors_reported() {
        let errors = ContactMessage::validate(" ", "", None, "").unwrap_err();
        assert_eq!(
            errors,
            vec![
                ContactError::MissingName,
                ContactError::MissingEmail,
                ContactError::MissingMessage,
            ]
        );
        let fields = errors.iter().map(ContactError::field).collect::<Vec<_>>();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_invalid_email() {
        let errors = ContactMessage::validate("Ada", "ada.example.com", None, "Hi").unwrap_err();
        assert_eq!(errors, vec![ContactError::InvalidEmail]);
    }

    #[test]
    fn test_email_shapes() {
        for ok in ["a@b.co", "first.last@sub.example.org", "x+tag@host.io"] {
            assert!(is_valid_email(ok), "{ok} should be valid");
        }
        for bad in [
            "@example.com",
            "a@",
            "a@example",
            "a@.example.com",
            "a@example.com.",
            "a@@example.com",
            "a b@example.com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_revalidate_round_trip() {
        let msg = ContactMessage::validate("Ada", "ada@example.com", None, "Hi").unwrap();
        assert_eq!(msg.revalidate(), Ok(msg.clone()));

        let tampered = ContactMessage {
            email: "nope".to_string(),
            ..msg
        };
        assert_eq!(tampered.revalidate(), Err(vec![ContactError::InvalidEmail]));
    }

    #[test]
    fn test_notice_text() {
        assert!(!SendNotice::Sent.is_error());
        let failed = SendNotice::Failed("provider unavailable".to_string());
        assert!(failed.is_error());
        assert_eq!(
            failed.text(),
            "Couldn't send your message: provider unavailable. Please try again."
        );
    }
}
