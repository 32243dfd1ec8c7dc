use crate::cli_args::CliArgs;
use batch_mailer::batch_dispatcher::BatchDispatcher;
use batch_mailer::dispatch_outcome::BatchResult;
use batch_mailer::dispatcher_resources::DispatcherResources;
use batch_mailer::error::BatchMailerError;
use batch_mailer::http_gateway::HttpGateway;
use batch_mailer::http_mail_provider::HttpMailProvider;
use batch_mailer::mail_provider::MailProvider;
use batch_mailer::mailer_config::MailerConfig;
use batch_mailer::message::Message;
use tracing::info;

pub struct Runner;

impl Runner {
    /// Resolves input and configuration, then dispatches over the HTTP mail provider.
    /// Individual send failures end up in the returned [`BatchResult`]; only
    /// validation and fatal errors are returned as `Err`.
    pub async fn run(args: &CliArgs) -> Result<BatchResult, BatchMailerError> {
        let addresses = args.addresses()?;

        if addresses.is_empty() {
            return Err(BatchMailerError::validation(
                "No recipients given",
                "Usage: batch-mailer [OPTIONS] --subject <SUBJECT> [RECIPIENTS]...",
            ));
        }

        let message = args.message()?;
        let resources = args.resources().fill_from_env()?;
        let config = MailerConfig::from_env()?;

        info!("Sending as {} through {}", config.from, config.api_url);

        let provider = HttpMailProvider::new(config, HttpGateway::new(resources.http_timeout_in_millis())?);

        Self::dispatch(provider, &resources, &addresses, &message).await
    }

    pub async fn dispatch<P: MailProvider>(
        provider: P,
        resources: &DispatcherResources,
        addresses: &[String],
        message: &Message,
    ) -> Result<BatchResult, BatchMailerError> {
        let dispatcher = BatchDispatcher::new(provider, resources)?;

        dispatcher.dispatch_addresses(addresses, message).await
    }

    /// Partial send failures still exit with 0.
    pub fn exit_code(result: &Result<BatchResult, BatchMailerError>) -> u8 {
        match result {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batch_mailer::dispatch_outcome::DispatchOutcome;
    use batch_mailer::recipient::Recipient;
    use clap::Parser;

    #[tokio::test]
    async fn empty_recipient_list_is_a_usage_error() {
        let args = CliArgs::try_parse_from(["batch-mailer", "--subject", "Hi", "--text", "body"]).unwrap();

        let result = Runner::run(&args).await;

        let error = result.as_ref().unwrap_err();
        assert!(error.is_validation());
        assert_eq!(1, Runner::exit_code(&result));
    }

    #[test]
    fn partial_failure_exits_with_zero() {
        let mut batch_result = BatchResult::default();
        batch_result.record(DispatchOutcome::Failure {
            recipient: Recipient::parse("a@example.com").unwrap(),
            error_detail: "status 422: rejected".to_string(),
        });

        assert_eq!(0, Runner::exit_code(&Ok(batch_result)));
    }

    #[test]
    fn fatal_error_exits_with_one() {
        let result = Err(BatchMailerError::fatal("Environment variable MAIL_API_KEY is not set", "Failed to load configuration"));

        assert_eq!(1, Runner::exit_code(&result));
    }
}
