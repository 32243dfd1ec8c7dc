use crate::error::BatchMailerError;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Message {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl Message {
    pub fn new(
        subject: &str,
        html_body: &str,
        text_body: &str,
    ) -> Self {
        Self {
            subject: subject.to_string(),
            html_body: html_body.to_string(),
            text_body: text_body.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), BatchMailerError> {
        if self.subject.trim().is_empty() {
            return Err(BatchMailerError::validation("Message subject is empty", "Failed to validate message"));
        }

        if self.html_body.trim().is_empty() && self.text_body.trim().is_empty() {
            return Err(BatchMailerError::validation("Message has neither an html nor a text body", "Failed to validate message"));
        }

        Ok(())
    }
}
