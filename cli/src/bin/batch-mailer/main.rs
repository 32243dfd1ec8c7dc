use batch_mailer::environment::Environment;
use batch_mailer_cli::cli_args::CliArgs;
use batch_mailer_cli::runner::Runner;
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    // stdout is reserved for the summary
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stderr());

    let rust_log = Environment::string("RUST_LOG", "INFO");

    tracing_subscriber::registry()
        .with(EnvFilter::new(rust_log))
        .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
        .init();

    info!("Starting...");

    let result = Runner::run(&args).await;

    match &result {
        Ok(batch_result) => {
            print!("{batch_result}");
            info!("Stopped!");
        },
        Err(error) => {
            error!("{} - Cause: {}", error.message.clone().unwrap_or("Batch dispatch failed".to_string()), error.cause);
            eprintln!("error: {error}");
        },
    }

    ExitCode::from(Runner::exit_code(&result))
}
