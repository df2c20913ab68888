use crate::{ApiError, AppState, CurrentUser};

use pw_core::User;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Like [`CurrentUser`] but rejects signed-out requests with 401
pub struct RequireUser(pub User);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let Ok(CurrentUser(user)) = CurrentUser::from_request_parts(parts, state).await;

            user.map(RequireUser)
                .ok_or_else(|| ApiError::unauthorized("Sign in required"))
        }
    }
}
