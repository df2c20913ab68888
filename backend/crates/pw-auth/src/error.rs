use crate::AuthErrorKind;

use pw_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Account already exists for uid '{uid}' {location}")]
    DuplicateAccount {
        uid: String,
        location: ErrorLocation,
    },

    #[error("Email is registered to another identity {location}")]
    EmailAlreadyInUse { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token email does not match the declared email {location}")]
    EmailMismatch { location: ErrorLocation },

    #[error("User not found: {message} {location}")]
    UserNotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("User is disabled: {message} {location}")]
    UserDisabled {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid session: {message} {location}")]
    InvalidSession {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity service unreachable: {message} {location}")]
    NetworkFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity provider call '{operation}' timed out after {timeout_ms}ms {location}")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
        location: ErrorLocation,
    },

    #[error("Identity service error {code}: {message} {location}")]
    Upstream {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed on '{field}': {message} {location}")]
    Validation {
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("User directory error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },

    #[error("Identity provider misconfigured: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::DuplicateAccount { .. } => AuthErrorKind::DuplicateAccount,
            Self::EmailAlreadyInUse { .. } => AuthErrorKind::EmailAlreadyInUse,
            Self::InvalidToken { .. }
            | Self::TokenExpired { .. }
            | Self::JwtDecode { .. }
            | Self::InvalidClaim { .. } => AuthErrorKind::InvalidToken,
            Self::EmailMismatch { .. } => AuthErrorKind::EmailMismatch,
            Self::UserNotFound { .. } => AuthErrorKind::UserNotFound,
            Self::UserDisabled { .. } => AuthErrorKind::UserDisabled,
            Self::InvalidSession { .. } => AuthErrorKind::InvalidSession,
            Self::NetworkFailure { .. } | Self::Timeout { .. } => AuthErrorKind::NetworkFailure,
            Self::Validation { .. } => AuthErrorKind::Validation,
            Self::RateLimitExceeded { .. } => AuthErrorKind::RateLimited,
            Self::Upstream { .. } | Self::Storage { .. } | Self::Configuration { .. } => {
                AuthErrorKind::Unknown
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        self.kind().code()
    }

    #[track_caller]
    pub fn invalid_token<S: Into<String>>(message: S) -> Self {
        AuthError::InvalidToken {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_session<S: Into<String>>(message: S) -> Self {
        AuthError::InvalidSession {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_not_found<S: Into<String>>(message: S) -> Self {
        AuthError::UserNotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        AuthError::NetworkFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_mismatch() -> Self {
        AuthError::EmailMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { field, message, .. } => AuthError::Validation {
                field,
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::Storage { message, .. } => AuthError::Storage {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AuthError::Upstream {
                code: "MALFORMED_RESPONSE".to_string(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        } else {
            AuthError::network(e.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
