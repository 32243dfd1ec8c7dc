use std::time::Duration;

use crate::error::BatchMailerError;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

const USER_AGENT: &str = concat!("batch-mailer/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for provider calls. The timeout bounds each request,
/// including reading the response body.
#[derive(Clone)]
pub struct HttpGateway {
    pub client: ClientWithMiddleware,
}

impl HttpGateway {
    pub fn new(request_timeout_in_millis: u64) -> Result<Self, BatchMailerError> {
        if request_timeout_in_millis == 0 {
            return Err(BatchMailerError::fatal("Request timeout must be at least 1 ms", "Failed to create http gateway client"));
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(request_timeout_in_millis))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|error| BatchMailerError::fatal(&error.to_string(), "Failed to create http gateway client"))?;

        Ok(Self {
            client: ClientBuilder::new(client).build(),
        })
    }
}
