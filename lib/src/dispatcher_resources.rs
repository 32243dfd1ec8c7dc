use crate::environment::Environment;
use crate::error::BatchMailerError;
use std::time::Duration;

pub const DEFAULT_WINDOW_SIZE: usize = 50;
pub const DEFAULT_PAUSE_IN_MILLIS: u64 = 1000;
pub const DEFAULT_HTTP_TIMEOUT_IN_MILLIS: u64 = 3000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DispatcherResources {
    pub window_size: Option<usize>,
    pub pause_in_millis: Option<u64>,
    pub http_timeout_in_millis: Option<u64>,
}

impl DispatcherResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `DISPATCH_WINDOW_SIZE`, `DISPATCH_PAUSE_IN_MILLIS` and `HTTP_TIMEOUT_IN_MILLIS`.
    pub fn from_env() -> Result<Self, BatchMailerError> {
        Self::new().fill_from_env()
    }

    /// Reads only the variables for values not already set.
    pub fn fill_from_env(self) -> Result<Self, BatchMailerError> {
        let window_size = match self.window_size {
            Some(window_size) => window_size,
            None => Environment::usize("DISPATCH_WINDOW_SIZE", DEFAULT_WINDOW_SIZE)?,
        };

        let pause_in_millis = match self.pause_in_millis {
            Some(pause_in_millis) => pause_in_millis,
            None => Environment::u64("DISPATCH_PAUSE_IN_MILLIS", DEFAULT_PAUSE_IN_MILLIS)?,
        };

        let http_timeout_in_millis = match self.http_timeout_in_millis {
            Some(http_timeout_in_millis) => http_timeout_in_millis,
            None => Environment::u64("HTTP_TIMEOUT_IN_MILLIS", DEFAULT_HTTP_TIMEOUT_IN_MILLIS)?,
        };

        if http_timeout_in_millis == 0 {
            return Err(BatchMailerError::fatal(
                "HTTP_TIMEOUT_IN_MILLIS must be at least 1",
                "Failed to load configuration, HTTP_TIMEOUT_IN_MILLIS is zero",
            ));
        }

        Ok(Self {
            window_size: Some(window_size),
            pause_in_millis: Some(pause_in_millis),
            http_timeout_in_millis: Some(http_timeout_in_millis),
        })
    }

    pub fn with_window_size(
        self,
        window_size: usize,
    ) -> Self {
        Self {
            window_size: Some(window_size),
            ..self
        }
    }

    pub fn with_pause_in_millis(
        self,
        pause_in_millis: u64,
    ) -> Self {
        Self {
            pause_in_millis: Some(pause_in_millis),
            ..self
        }
    }

    pub fn with_http_timeout_in_millis(
        self,
        http_timeout_in_millis: u64,
    ) -> Self {
        Self {
            http_timeout_in_millis: Some(http_timeout_in_millis),
            ..self
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size.unwrap_or(DEFAULT_WINDOW_SIZE)
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_in_millis.unwrap_or(DEFAULT_PAUSE_IN_MILLIS))
    }

    pub fn http_timeout_in_millis(&self) -> u64 {
        self.http_timeout_in_millis.unwrap_or(DEFAULT_HTTP_TIMEOUT_IN_MILLIS)
    }
}
