use std::env;

use rayon::{ThreadPool, ThreadPoolBuilder};
use thiserror::Error;

/// Upper bound for `DUE_DATE_BATCH_THREADS`
pub const MAX_BATCH_THREADS: usize = 256;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("`{name}` has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },

    #[error("could not build batch thread pool: {0}")]
    ThreadPool(String),
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub verbose: bool,
    /// 0 keeps rayon's default thread count
    pub batch_threads: usize,
}

impl AppConfig {
    /// Load `.env` if present, then read the `DUE_DATE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let verbose = read_var(&lookup, "DUE_DATE_VERBOSE", "false", parse_flag)?;
        let batch_threads = read_var(&lookup, "DUE_DATE_BATCH_THREADS", "0", |v| {
            v.parse::<usize>()
                .ok()
                .filter(|threads| *threads <= MAX_BATCH_THREADS)
        })?;

        Ok(Self {
            verbose,
            batch_threads,
        })
    }

    pub fn build_thread_pool(&self) -> Result<ThreadPool, ConfigError> {
        ThreadPoolBuilder::new()
            .num_threads(self.batch_threads)
            .thread_name(|idx| format!("due-date-batch-{idx}"))
            .build()
            .map_err(|err| ConfigError::ThreadPool(err.to_string()))
    }
}

fn read_var<F, T, P>(
    lookup: &F,
    name: &'static str,
    default: &str,
    parse: P,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    P: Fn(&str) -> Option<T>,
{
    let value = lookup(name).unwrap_or_else(|| default.to_string());
    parse(value.trim()).ok_or(ConfigError::InvalidValue { name, value })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("On"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
