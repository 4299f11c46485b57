mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;

const DEFAULT_API_BASE_URL: &str = "https://p01--customer-management-api--pfny5ktx6b4q.code.run";
const DEFAULT_API_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SESSION_DIRECTORY: &str = "session";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
