use crate::dispatch_outcome::{BatchResult, DispatchOutcome};
use crate::dispatcher_resources::DispatcherResources;
use crate::error::BatchMailerError;
use crate::mail_provider::MailProvider;
use crate::message::Message;
use crate::recipient::Recipient;
use futures::stream::{FuturesUnordered, StreamExt};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Sends one message to many recipients in consecutive windows.
///
/// Every send of a window is in flight at once and the window ends when all of
/// them settled. The dispatcher then sleeps for the configured pause before the
/// next window starts. Nothing follows the last window.
pub struct BatchDispatcher<P: MailProvider> {
    provider: P,
    window_size: usize,
    pause: Duration,
}

impl<P: MailProvider> BatchDispatcher<P> {
    pub fn new(
        provider: P,
        resources: &DispatcherResources,
    ) -> Result<Self, BatchMailerError> {
        let window_size = resources.window_size();

        if window_size == 0 {
            return Err(BatchMailerError::fatal("Window size must be at least 1", "Failed to create batch dispatcher"));
        }

        Ok(Self {
            provider,
            window_size,
            pause: resources.pause(),
        })
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Validates raw addresses and dispatches them. A single malformed address
    /// rejects the whole batch before anything is sent.
    pub async fn dispatch_addresses<S: AsRef<str>>(
        &self,
        addresses: &[S],
        message: &Message,
    ) -> Result<BatchResult, BatchMailerError> {
        let recipients = Recipient::parse_all(addresses)?;

        self.dispatch_all(&recipients, message).await
    }

    #[instrument(skip_all, name = "dispatch_all", fields(recipients = recipients.len(), window_size = self.window_size))]
    pub async fn dispatch_all(
        &self,
        recipients: &[Recipient],
        message: &Message,
    ) -> Result<BatchResult, BatchMailerError> {
        if recipients.is_empty() {
            return Err(BatchMailerError::validation("No recipients given", "Failed to validate recipients"));
        }

        message.validate()?;

        let windows = recipients.chunks(self.window_size).collect::<Vec<&[Recipient]>>();
        let windows_len = windows.len();

        info!("Dispatching {} recipient(s) in {} window(s)", recipients.len(), windows_len);

        let mut batch_result = BatchResult::default();

        for (index, window) in windows.into_iter().enumerate() {
            debug!("Dispatching window {}/{} with {} recipient(s)", index + 1, windows_len, window.len());

            self.dispatch_window(window, message, &mut batch_result).await;

            if index + 1 < windows_len {
                debug!("Pausing {} ms before next window", self.pause.as_millis());
                tokio::time::sleep(self.pause).await;
            }
        }

        info!("Batch dispatch finished with {} sent and {} failed", batch_result.successes.len(), batch_result.failures.len());

        Ok(batch_result)
    }

    async fn dispatch_window(
        &self,
        window: &[Recipient],
        message: &Message,
        batch_result: &mut BatchResult,
    ) {
        let mut in_flight = window.iter().map(|recipient| self.send_one(recipient, message)).collect::<FuturesUnordered<_>>();

        while let Some(outcome) = in_flight.next().await {
            batch_result.record(outcome);
        }
    }

    async fn send_one(
        &self,
        recipient: &Recipient,
        message: &Message,
    ) -> DispatchOutcome {
        match self.provider.send(recipient, message).await {
            Ok(confirmation_id) => {
                debug!(recipient = %recipient, confirmation_id = %confirmation_id, "Email sent");
                DispatchOutcome::Success {
                    recipient: recipient.clone(),
                    confirmation_id,
                }
            },
            Err(error) => {
                error!(recipient = %recipient, "{} - Cause: {}", error.message.clone().unwrap_or("Failed to send email".to_string()), error.cause);
                DispatchOutcome::Failure {
                    recipient: recipient.clone(),
                    error_detail: error.to_string(),
                }
            },
        }
    }
}
