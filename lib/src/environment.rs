use crate::error::BatchMailerError;
use std::env;
use std::str::FromStr;

pub struct Environment;

impl Environment {
    pub fn string(
        env_name: &str,
        default: &str,
    ) -> String {
        env::var(env_name).ok().unwrap_or(default.to_string())
    }

    pub fn required_string(env_name: &str) -> Result<String, BatchMailerError> {
        env::var(env_name)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| BatchMailerError::fatal(&format!("Environment variable {env_name} is not set"), "Failed to load configuration"))
    }

    pub fn u64(
        env_name: &str,
        default: u64,
    ) -> Result<u64, BatchMailerError> {
        Self::parsed(env_name, default)
    }

    pub fn usize(
        env_name: &str,
        default: usize,
    ) -> Result<usize, BatchMailerError> {
        Self::parsed(env_name, default)
    }

    fn parsed<T: FromStr>(
        env_name: &str,
        default: T,
    ) -> Result<T, BatchMailerError> {
        match env::var(env_name) {
            Ok(value) => value.trim().parse::<T>().map_err(|_| {
                BatchMailerError::fatal(
                    &format!("Environment variable {env_name} has invalid value '{value}'"),
                    "Failed to load configuration",
                )
            }),
            Err(_) => Ok(default),
        }
    }
}
