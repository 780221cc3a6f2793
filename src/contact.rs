use crate::error::{PortfolioError, Result};
use crate::notify::{Toast, ToastSink};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error, info};

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const SENT_MESSAGE: &str = "Message sent! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";

/// Fields of the contact form, named after the relay's template variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.from_name),
            ("email", &self.from_email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PortfolioError::InvalidContactForm(format!("{} is required", field)));
            }
        }

        if !looks_like_email(self.from_email.trim()) {
            return Err(PortfolioError::InvalidContactForm(format!(
                "'{}' is not an email address",
                self.from_email.trim()
            )));
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !value.contains(char::is_whitespace)
                && domain.split('.').count() >= 2
                && domain.split('.').all(|label| !label.is_empty())
        }
        _ => false,
    }
}

/// Identifiers for the transactional email relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Where contact messages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactRelay {
    /// Accept locally and only acknowledge.
    Disabled,
    EmailJs(EmailJsConfig),
}

impl ContactRelay {
    /// EmailJS when all three identifiers are configured, otherwise disabled.
    pub fn from_config(
        endpoint: &str,
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        let present = |v: Option<&str>| {
            v.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };
        match (present(service_id), present(template_id), present(public_key)) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                ContactRelay::EmailJs(EmailJsConfig {
                    endpoint: endpoint.to_string(),
                    service_id,
                    template_id,
                    public_key,
                })
            }
            _ => ContactRelay::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ContactRelay::EmailJs(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ContactOutcome {
    Sent,
    /// The form was not submitted; input is handed back untouched.
    Rejected { reason: String, form: ContactForm },
    /// The relay failed; input is handed back so the user can retry.
    Failed { form: ContactForm },
}

pub struct ContactService {
    client: Client,
    relay: ContactRelay,
}

impl ContactService {
    pub fn new(relay: ContactRelay) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("portfolio-server/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, relay })
    }

    pub fn relay(&self) -> &ContactRelay {
        &self.relay
    }

    /// Validate and deliver a message, reporting the result through `sink`.
    pub async fn submit(&self, form: ContactForm, sink: &dyn ToastSink) -> ContactOutcome {
        if let Err(e) = form.validate() {
            let reason = e.to_string();
            sink.push(Toast::error(reason.clone()));
            return ContactOutcome::Rejected { reason, form };
        }

        match self.deliver(&form).await {
            Ok(()) => {
                info!(relay_enabled = self.relay.is_enabled(), "Contact message accepted");
                sink.push(Toast::success(SENT_MESSAGE));
                ContactOutcome::Sent
            }
            Err(e) => {
                error!("Email send error: {}", e);
                sink.push(Toast::error(FAILED_MESSAGE));
                ContactOutcome::Failed { form }
            }
        }
    }

    async fn deliver(&self, form: &ContactForm) -> Result<()> {
        let config = match &self.relay {
            ContactRelay::Disabled => {
                debug!("Contact relay disabled, skipping delivery");
                return Ok(());
            }
            ContactRelay::EmailJs(config) => config,
        };

        let payload = json!({
            "service_id": config.service_id,
            "template_id": config.template_id,
            "user_id": config.public_key,
            "template_params": form,
        });

        let response = self
            .client
            .post(config.endpoint.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_success() && body.trim() == "OK" {
            Ok(())
        } else {
            Err(PortfolioError::RelayError(format!(
                "relay answered {}: {}",
                status, body
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice portfolio".to_string(),
        }
    }

    #[test]
    fn test_valid_form() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn test_blank_field_rejected() {
        let mut f = form();
        f.subject = "   ".to_string();
        match f.validate() {
            Err(PortfolioError::InvalidContactForm(msg)) => assert!(msg.contains("subject")),
            other => panic!("Expected InvalidContactForm, got: {:?}", other),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("a@@b.co"));
        assert!(!looks_like_email("@b.co"));
        assert!(!looks_like_email("a b@c.co"));
        assert!(!looks_like_email("a@b..co"));
    }

    #[test]
    fn test_relay_requires_all_identifiers() {
        let partial = ContactRelay::from_config(EMAILJS_ENDPOINT, Some("svc"), None, Some("key"));
        assert_eq!(partial, ContactRelay::Disabled);

        let blank =
            ContactRelay::from_config(EMAILJS_ENDPOINT, Some("svc"), Some(" "), Some("key"));
        assert!(!blank.is_enabled());

        let full =
            ContactRelay::from_config(EMAILJS_ENDPOINT, Some("svc"), Some("tpl"), Some("key"));
        assert!(full.is_enabled());
    }
}
