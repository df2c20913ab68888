//! User-facing messages for the sign-up and sign-in actions.
//! Failure messages never reveal which verification step failed.

use crate::{AuthError, AuthErrorKind};

pub const ACCOUNT_CREATED: &str = "Account created successfully. Please sign in.";
pub const SIGNED_IN: &str = "Signed in successfully";
pub const SIGNED_OUT: &str = "Signed out";

pub const DUPLICATE_ACCOUNT: &str = "User already exists. Please sign in instead.";
pub const EMAIL_IN_USE: &str = "This email is already in use";
pub const SIGN_UP_FAILED: &str = "Failed to create an account";

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const INVALID_TOKEN: &str = "Invalid session token. Please try again.";
pub const NO_SUCH_USER: &str = "User does not exist or is disabled. Create an account instead.";
pub const SIGN_IN_FAILED: &str = "Failed to sign in";

pub const SERVICE_UNAVAILABLE: &str = "Identity service is unavailable. Please try again.";
pub const TOO_MANY_ATTEMPTS: &str = "Too many attempts. Please try again later.";

pub fn sign_up_message(error: &AuthError) -> String {
    if let AuthError::Validation { message, .. } = error {
        return message.clone();
    }

    match error.kind() {
        AuthErrorKind::DuplicateAccount => DUPLICATE_ACCOUNT,
        AuthErrorKind::EmailAlreadyInUse => EMAIL_IN_USE,
        AuthErrorKind::UserNotFound | AuthErrorKind::UserDisabled => NO_SUCH_USER,
        AuthErrorKind::NetworkFailure => SERVICE_UNAVAILABLE,
        AuthErrorKind::RateLimited => TOO_MANY_ATTEMPTS,
        _ => SIGN_UP_FAILED,
    }
    .to_string()
}

pub fn sign_in_message(error: &AuthError) -> String {
    if let AuthError::Validation { message, .. } = error {
        return message.clone();
    }

    match error.kind() {
        AuthErrorKind::EmailMismatch => INVALID_CREDENTIALS,
        AuthErrorKind::InvalidToken => INVALID_TOKEN,
        AuthErrorKind::UserNotFound | AuthErrorKind::UserDisabled => NO_SUCH_USER,
        AuthErrorKind::NetworkFailure => SERVICE_UNAVAILABLE,
        AuthErrorKind::RateLimited => TOO_MANY_ATTEMPTS,
        _ => SIGN_IN_FAILED,
    }
    .to_string()
}
