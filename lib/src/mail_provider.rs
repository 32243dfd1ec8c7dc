use crate::error::BatchMailerError;
use crate::message::Message;
use crate::recipient::Recipient;
use async_trait::async_trait;

/// The external mail-transmission capability the dispatcher fans out to.
///
/// Implementations return the provider's confirmation id for the message, or a
/// [`crate::error::ErrorKind::Provider`] error describing why it was not accepted.
#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn send(
        &self,
        recipient: &Recipient,
        message: &Message,
    ) -> Result<String, BatchMailerError>;
}
