use crate::{CoreError, Result as CoreErrorResult};

pub const MAX_EMAIL_LENGTH: usize = 254;

/// Structural email check: exactly one '@' with a non-empty local part and a
/// dotted, non-empty domain. Deliverability is the identity provider's concern.
#[track_caller]
pub fn validate_email(field: &'static str, email: &str) -> CoreErrorResult<()> {
    if email.is_empty() {
        return Err(CoreError::validation(field, "email cannot be empty"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::validation(field, "email exceeds maximum length"));
    }
    if email.chars().any(char::is_whitespace) {
        return Err(CoreError::validation(field, "email cannot contain whitespace"));
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CoreError::validation(field, "email must contain a single '@'"));
    };

    if local.is_empty() || domain.is_empty() {
        return Err(CoreError::validation(field, "email is missing a local part or domain"));
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(CoreError::validation(field, "email domain is invalid"));
    }

    Ok(())
}
