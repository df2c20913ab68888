#[allow(clippy::module_inception)]
pub mod auth;
pub mod me_response;
pub mod profile_response;
pub mod status_response;
