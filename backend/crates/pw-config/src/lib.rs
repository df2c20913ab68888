mod account_confirmation_mode;
mod auth_config;
mod config;
mod database_config;
mod environment;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod session_config;

pub use account_confirmation_mode::AccountConfirmationMode;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use environment::Environment;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use session_config::SessionConfig;

const CONFIG_DIR_ENV: &str = "PW_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".pw";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "data.db";

const DEFAULT_API_URL: &str = "https://identitytoolkit.googleapis.com";
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_AUTH_TIMEOUT_SECS: u64 = 10;
const MIN_AUTH_TIMEOUT_SECS: u64 = 1;
const MAX_AUTH_TIMEOUT_SECS: u64 = 300;

const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;
const MIN_SESSION_MAX_AGE_SECS: u64 = 300;
const MAX_SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 14;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
