/// Failure taxonomy surfaced by the authentication actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    DuplicateAccount,
    EmailAlreadyInUse,
    InvalidToken,
    EmailMismatch,
    UserNotFound,
    UserDisabled,
    InvalidSession,
    NetworkFailure,
    Validation,
    RateLimited,
    Unknown,
}

impl AuthErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateAccount => "DUPLICATE_ACCOUNT",
            Self::EmailAlreadyInUse => "EMAIL_ALREADY_IN_USE",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::EmailMismatch => "EMAIL_MISMATCH",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserDisabled => "USER_DISABLED",
            Self::InvalidSession => "INVALID_SESSION",
            Self::NetworkFailure => "NETWORK_FAILURE",
            Self::Validation => "VALIDATION_ERROR",
            Self::RateLimited => "RATE_LIMIT_EXCEEDED",
            Self::Unknown => "UNKNOWN",
        }
    }
}
