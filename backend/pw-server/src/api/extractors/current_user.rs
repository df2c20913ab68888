//! Axum extractors for the signed-in user

use crate::AppState;

use pw_core::User;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::CookieJar;

/// The user behind the request's `session` cookie, if any.
///
/// Never rejects: a missing, forged, expired or revoked session is `None`.
pub struct CurrentUser(pub Option<User>);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let jar = CookieJar::from_headers(&parts.headers);
            let user = state.auth.resolver().get_current_user(&jar).await;
            Ok(CurrentUser(user))
        }
    }
}
