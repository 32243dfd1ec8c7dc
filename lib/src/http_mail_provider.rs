use crate::error::BatchMailerError;
use crate::http_gateway::HttpGateway;
use crate::mail_provider::MailProvider;
use crate::mailer_config::MailerConfig;
use crate::message::Message;
use crate::recipient::Recipient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

/// Sends one message per call to a transactional mail HTTP API (`POST {api_url}/emails`).
pub struct HttpMailProvider {
    config: MailerConfig,
    http_gateway: HttpGateway,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    html: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

impl HttpMailProvider {
    pub fn new(
        config: MailerConfig,
        http_gateway: HttpGateway,
    ) -> Self {
        Self { config, http_gateway }
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_url)
    }
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[async_trait]
impl MailProvider for HttpMailProvider {
    #[instrument(skip_all, name = "send_email", fields(recipient = %recipient))]
    async fn send(
        &self,
        recipient: &Recipient,
        message: &Message,
    ) -> Result<String, BatchMailerError> {
        let failure_message = format!("Failed to send email to {recipient}");

        let payload = SendEmailRequest {
            from: self.config.from.as_str(),
            to: [recipient.as_str()],
            subject: &message.subject,
            html: non_blank(&message.html_body),
            text: non_blank(&message.text_body),
        };

        let body = serde_json::to_string(&payload).map_err(|error| BatchMailerError::provider(&error.to_string(), &failure_message))?;

        let result = self
            .http_gateway
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .header("x-idempotent-key", Uuid::now_v7().to_string())
            .body(body)
            .send()
            .await;

        let response = result.map_err(|error| BatchMailerError::provider(&error.to_string(), &failure_message))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or("unknown".to_string());
            return Err(BatchMailerError::provider(&format!("status {}: {}", status.as_u16(), text), &failure_message));
        }

        let confirmation = response
            .json::<SendEmailResponse>()
            .await
            .map_err(|error| BatchMailerError::provider(&format!("unreadable confirmation: {error}"), &failure_message))?;

        confirmation
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| BatchMailerError::provider("accepted without a confirmation id", &failure_message))
    }
}
