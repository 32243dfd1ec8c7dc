use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input detected before any send was issued.
    Validation,
    /// A single send was rejected or failed by the mail provider.
    Provider,
    /// Anything outside the per-recipient send path.
    Fatal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchMailerError {
    pub kind: ErrorKind,
    pub cause: String,
    pub message: Option<String>,
}

impl BatchMailerError {
    pub fn new(
        kind: ErrorKind,
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn validation(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Validation, cause, message)
    }

    pub fn provider(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Provider, cause, message)
    }

    pub fn fatal(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Fatal, cause, message)
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    pub fn is_provider(&self) -> bool {
        self.kind == ErrorKind::Provider
    }

    pub fn is_fatal(&self) -> bool {
        self.kind == ErrorKind::Fatal
    }
}

impl std::error::Error for BatchMailerError {}

impl fmt::Display for BatchMailerError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.cause)
    }
}
