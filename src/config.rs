use std::env;

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
}

impl Config {
    /// Only `RUST_LOG` is consulted. Form values never come from the environment.
    pub fn load() -> Self {
        Self::from_var(env::var("RUST_LOG").ok())
    }

    fn from_var(log_filter: Option<String>) -> Self {
        Self {
            log_filter: log_filter
                .filter(|filter| !filter.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        }
    }

    /// Falls back to the default level when the directive does not parse.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}
