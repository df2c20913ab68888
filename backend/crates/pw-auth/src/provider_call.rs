use crate::{AuthError, Result as AuthErrorResult};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use error_location::ErrorLocation;

/// Run one identity-provider call under a deadline. The call future is
/// dropped (cancelled) when the deadline passes.
///
/// A timeout error points at the line that started the call.
#[track_caller]
pub fn with_timeout<T, F>(
    operation: &'static str,
    limit: Duration,
    call: F,
) -> impl Future<Output = AuthErrorResult<T>>
where
    F: Future<Output = AuthErrorResult<T>>,
{
    let location = ErrorLocation::from(Location::caller());

    async move {
        match tokio::time::timeout(limit, call).await {
            Ok(result) => result,
            Err(_) => Err(AuthError::Timeout {
                operation,
                timeout_ms: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
                location,
            }),
        }
    }
}
