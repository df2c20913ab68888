//! Authentication REST API handlers
//!
//! Sign-up and sign-in answer with `{success, message}`; the remaining
//! endpoints report on the session carried by the `session` cookie.

use crate::{
    AppState, ClientAddr, CurrentUser, MeResponse, ProfileResponse, RequireUser, StatusResponse,
};

use pw_auth::messages::{SIGNED_OUT, TOO_MANY_ATTEMPTS};
use pw_auth::{AuthAttempt, AuthErrorKind, SESSION_COOKIE_NAME};
use pw_core::{ActionResult, SignInParams, SignUpParams};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use axum_extra::extract::cookie::CookieJar;
use log::{info, warn};

const INVALID_BODY: &str = "Invalid request body";

type ActionResponse = (StatusCode, Json<ActionResult>);

fn respond(status: StatusCode, result: ActionResult) -> ActionResponse {
    (status, Json(result))
}

fn rate_limited(
    state: &AppState,
    attempt: AuthAttempt,
    client: ClientAddr,
) -> Option<ActionResponse> {
    match state.rate_limiter.check(attempt, client.0) {
        Ok(()) => None,
        Err(e) => {
            warn!("{:?} from {}: {}", attempt, client.0, e);
            Some(respond(
                StatusCode::TOO_MANY_REQUESTS,
                ActionResult::failed(TOO_MANY_ATTEMPTS),
            ))
        }
    }
}

fn sign_up_status(failure: Option<AuthErrorKind>) -> StatusCode {
    match failure {
        None => StatusCode::CREATED,
        Some(AuthErrorKind::DuplicateAccount) => StatusCode::CONFLICT,
        Some(_) => StatusCode::BAD_REQUEST,
    }
}

fn sign_in_status(failure: Option<AuthErrorKind>) -> StatusCode {
    match failure {
        None => StatusCode::OK,
        Some(AuthErrorKind::NetworkFailure) => StatusCode::SERVICE_UNAVAILABLE,
        Some(_) => StatusCode::UNAUTHORIZED,
    }
}

/// POST /api/v1/auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    client: ClientAddr,
    payload: Result<Json<SignUpParams>, JsonRejection>,
) -> ActionResponse {
    if let Some(response) = rate_limited(&state, AuthAttempt::SignUp, client) {
        return response;
    }

    let Json(params) = match payload {
        Ok(params) => params,
        Err(rejection) => {
            warn!("Rejected sign-up body: {}", rejection);
            return respond(StatusCode::BAD_REQUEST, ActionResult::failed(INVALID_BODY));
        }
    };

    let (result, failure) = state.auth.registrar().sign_up(&params).await;
    respond(sign_up_status(failure), result)
}

/// POST /api/v1/auth/sign-in
///
/// The cookie is only added to the returned jar once every check passed;
/// a request dropped mid-way sets nothing.
pub async fn sign_in(
    State(state): State<AppState>,
    client: ClientAddr,
    jar: CookieJar,
    payload: Result<Json<SignInParams>, JsonRejection>,
) -> (CookieJar, ActionResponse) {
    if let Some(response) = rate_limited(&state, AuthAttempt::SignIn, client) {
        return (jar, response);
    }

    let Json(params) = match payload {
        Ok(params) => params,
        Err(rejection) => {
            warn!("Rejected sign-in body: {}", rejection);
            return (
                jar,
                respond(StatusCode::UNAUTHORIZED, ActionResult::failed(INVALID_BODY)),
            );
        }
    };

    let (jar, result, failure) = state.auth.issuer().sign_in(jar, &params).await;
    (jar, respond(sign_in_status(failure), result))
}

/// POST /api/v1/auth/sign-out
pub async fn sign_out(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ActionResult>) {
    if jar.get(SESSION_COOKIE_NAME).is_some() {
        info!("Session cookie cleared");
    }

    (
        jar.remove(state.auth.cookie_policy.removal()),
        Json(ActionResult::ok(SIGNED_OUT)),
    )
}

/// GET /api/v1/auth/me
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MeResponse> {
    Json(MeResponse { user })
}

/// GET /api/v1/auth/status
pub async fn status(CurrentUser(user): CurrentUser) -> Json<StatusResponse> {
    Json(StatusResponse {
        authenticated: user.is_some(),
    })
}

/// GET /api/v1/auth/profile
pub async fn profile(RequireUser(user): RequireUser) -> Json<ProfileResponse> {
    Json(ProfileResponse { user })
}
