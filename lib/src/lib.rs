pub mod batch_dispatcher;
pub mod dispatch_outcome;
pub mod dispatcher_resources;
pub mod environment;
pub mod error;
pub mod http_gateway;
pub mod http_mail_provider;
pub mod mail_provider;
pub mod mailer_config;
pub mod message;
pub mod recipient;
