use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] pw_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] pw_db::DbError),

    #[error("Identity provider error: {0}")]
    Auth(#[from] pw_auth::AuthError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
