pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{me, profile, sign_in, sign_out, sign_up, status},
        me_response::MeResponse,
        profile_response::ProfileResponse,
        status_response::StatusResponse,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::{client_addr::ClientAddr, current_user::CurrentUser, require_user::RequireUser},
};
pub use app_state::AppState;

pub use crate::routes::build_router;
