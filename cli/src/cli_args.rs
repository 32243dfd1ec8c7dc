use batch_mailer::dispatcher_resources::DispatcherResources;
use batch_mailer::error::BatchMailerError;
use batch_mailer::message::Message;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "batch-mailer",
    version,
    about = "Send one email to many recipients in rate-limited windows",
    long_about = None
)]
pub struct CliArgs {
    /// Recipient addresses, in dispatch order
    pub recipients: Vec<String>,

    /// File with one address per line, appended after the positional recipients
    #[arg(long, value_name = "PATH")]
    pub recipients_file: Option<PathBuf>,

    /// Message subject
    #[arg(short, long)]
    pub subject: String,

    /// Inline html body
    #[arg(long, conflicts_with = "html_file")]
    pub html: Option<String>,

    /// Read the html body from a file
    #[arg(long, value_name = "PATH")]
    pub html_file: Option<PathBuf>,

    /// Inline plain text body
    #[arg(long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the plain text body from a file
    #[arg(long, value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Sends in flight per window (overrides DISPATCH_WINDOW_SIZE)
    #[arg(short, long, value_parser = parse_window_size)]
    pub window_size: Option<usize>,

    /// Pause between windows in milliseconds (overrides DISPATCH_PAUSE_IN_MILLIS)
    #[arg(short, long)]
    pub pause_ms: Option<u64>,
}

impl CliArgs {
    /// Positional recipients followed by the recipients file. Blank lines and
    /// `#` comments in the file are skipped.
    pub fn addresses(&self) -> Result<Vec<String>, BatchMailerError> {
        let mut addresses = self.recipients.clone();

        if let Some(recipients_file) = &self.recipients_file {
            let content = read_file(recipients_file)?;

            addresses.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty() && !line.starts_with('#'))
                    .map(str::to_string),
            );
        }

        Ok(addresses)
    }

    pub fn message(&self) -> Result<Message, BatchMailerError> {
        let html_body = body(&self.html, &self.html_file)?;
        let text_body = body(&self.text, &self.text_file)?;

        Ok(Message::new(&self.subject, &html_body, &text_body))
    }

    /// Values given as flags. Anything left unset is read from the environment later.
    pub fn resources(&self) -> DispatcherResources {
        let mut resources = DispatcherResources::new();

        if let Some(window_size) = self.window_size {
            resources = resources.with_window_size(window_size);
        }

        if let Some(pause_ms) = self.pause_ms {
            resources = resources.with_pause_in_millis(pause_ms);
        }

        resources
    }
}

fn parse_window_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("window size must be at least 1".to_string()),
        Ok(window_size) => Ok(window_size),
        Err(error) => Err(error.to_string()),
    }
}

fn body(
    inline: &Option<String>,
    file: &Option<PathBuf>,
) -> Result<String, BatchMailerError> {
    match (inline, file) {
        (Some(value), _) => Ok(value.clone()),
        (None, Some(path)) => read_file(path),
        (None, None) => Ok(String::new()),
    }
}

fn read_file(path: &Path) -> Result<String, BatchMailerError> {
    fs::read_to_string(path).map_err(|error| BatchMailerError::fatal(&error.to_string(), &format!("Failed to read {}", path.display())))
}
