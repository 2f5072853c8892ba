use std::{future::Future, time::Duration};

use serde::Serialize;
use thiserror::Error;

use crate::{
    config::MailerConfig,
    contact::{ContactError, ContactMessage},
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Error, Debug)]
pub enum MailError {
    #[error("mail provider request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("mail provider rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("{}", join_errors(.0))]
    Invalid(Vec<ContactError>),
    #[error(transparent)]
    Mail(#[from] MailError),
}

fn join_errors(errors: &[ContactError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Hands contact messages to an external email-delivery service.
pub trait EmailProvider: Send + Sync {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), MailError>> + Send;
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    company: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Posts messages to an EmailJS-compatible REST endpoint.
#[derive(Debug, Clone)]
pub struct EmailJsProvider {
    config: MailerConfig,
    client: reqwest::Client,
}

impl EmailJsProvider {
    pub fn new(config: MailerConfig) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, client })
    }

    fn request_body<'a>(&'a self, message: &'a ContactMessage) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                from_name: &message.name,
                reply_to: &message.email,
                company: message.company.as_deref().unwrap_or(""),
                message: &message.message,
            },
        }
    }
}

impl EmailProvider for EmailJsProvider {
    async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
        let res = self
            .client
            .post(&self.config.endpoint)
            .json(&self.request_body(message))
            .send()
            .await?;
        let status = res.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "contact message delivered");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(MailError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

/// Validates `message` again and passes it to `provider`.
pub async fn deliver<P: EmailProvider>(
    provider: &P,
    message: ContactMessage,
) -> Result<(), DeliveryError> {
    let message = message.revalidate().map_err(DeliveryError::Invalid)?;
    tracing::debug!(
        has_company = message.company.is_some(),
        "forwarding contact message"
    );
    provider.send(&message).await.inspect_err(|e| {
        tracing::warn!("contact message not delivered: {e}");
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingProvider {
        sent: Mutex<Vec<ContactMessage>>,
        reject: bool,
    }

    impl EmailProvider for RecordingProvider {
        async fn send(&self, message: &ContactMessage) -> Result<(), MailError> {
            if self.reject {
                return Err(MailError::Rejected {
                    status: 400,
                    body: "template not found".to_string(),
                });
            }
            self.sent
                .lock()
                .expect("should be able to acquire lock")
                .push(message.clone());
            Ok(())
        }
    }

    fn raw_message(email: &str) -> ContactMessage {
        ContactMessage {
            name: " Ada ".to_string(),
            email: email.to_string(),
            company: Some("".to_string()),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_deliver_sends_cleaned_message() {
        let provider = RecordingProvider::default();
        deliver(&provider, raw_message("ada@example.com"))
            .await
            .expect("should deliver");
        let sent = provider.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");
        assert_eq!(sent[0].company, None);
    }

    #[tokio::test]
    async fn test_deliver_rejects_invalid_message() {
        let provider = RecordingProvider::default();
        let err = deliver(&provider, raw_message("not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, DeliveryError::Invalid(ref e) if e == &vec![ContactError::InvalidEmail]));
        assert_eq!(err.to_string(), "That email address doesn't look right");
        assert!(provider.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deliver_surfaces_provider_failure() {
        let provider = RecordingProvider {
            reject: true,
            ..Default::default()
        };
        let err = deliver(&provider, raw_message("ada@example.com"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "mail provider rejected the message (400): template not found"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let provider = EmailJsProvider::new(MailerConfig {
            endpoint: "http://localhost/send".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
        })
        .expect("client should build");
        let message = ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: None,
            message: "Hello".to_string(),
        };
        let body = serde_json::to_value(provider.request_body(&message)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "from_name": "Ada",
                    "reply_to": "ada@example.com",
                    "company": "",
                    "message": "Hello",
                }
            })
        );
    }
}
