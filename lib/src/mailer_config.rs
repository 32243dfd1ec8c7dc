use crate::environment::Environment;
use crate::error::BatchMailerError;
use crate::recipient::Recipient;
use reqwest::Url;
use std::fmt;

pub const DEFAULT_MAIL_API_URL: &str = "https://api.resend.com";

const MALFORMED_API_URL: &str = "Failed to load configuration, MAIL_API_URL is malformed";

#[derive(Clone)]
pub struct MailerConfig {
    pub api_url: String,
    pub api_key: String,
    pub from: Recipient,
}

impl MailerConfig {
    /// Fails with a Fatal error unless `api_url` is an absolute http(s) URL.
    pub fn new(
        api_url: &str,
        api_key: &str,
        from: Recipient,
    ) -> Result<Self, BatchMailerError> {
        let api_url = api_url.trim();

        let parsed = Url::parse(api_url).map_err(|error| BatchMailerError::fatal(&format!("Invalid MAIL_API_URL '{api_url}': {error}"), MALFORMED_API_URL))?;

        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(BatchMailerError::fatal(&format!("Invalid MAIL_API_URL '{api_url}': expected an http(s) base url"), MALFORMED_API_URL));
        }

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            from,
        })
    }

    pub fn from_env() -> Result<Self, BatchMailerError> {
        let api_url = Environment::string("MAIL_API_URL", DEFAULT_MAIL_API_URL);
        let api_key = Environment::required_string("MAIL_API_KEY")?;
        let from = Environment::required_string("MAIL_FROM")?;

        let from = Recipient::parse(&from).map_err(|error| BatchMailerError::fatal(&error.cause, "Failed to load configuration, MAIL_FROM is malformed"))?;

        Self::new(&api_url, &api_key, from)
    }
}

impl fmt::Debug for MailerConfig {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("MailerConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"***")
            .field("from", &self.from)
            .finish()
    }
}
