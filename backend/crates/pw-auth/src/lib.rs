pub mod account_confirmation;
pub mod account_registrar;
pub mod auth_attempt;
pub mod auth_context;
pub mod auth_error_kind;
pub mod auth_rate_limiter;
pub mod error;
pub mod identity_claims;
pub mod identity_provider;
pub mod jwt_algorithm;
pub mod messages;
pub mod provider_call;
pub mod provider_settings;
pub mod provider_user;
pub mod rate_limit_config;
pub mod rest_identity_provider;
pub mod session_cookie_policy;
pub mod session_issuer;
pub mod session_resolver;
pub mod token_claims;
pub mod token_verifier;

pub use account_confirmation::AccountConfirmation;
pub use account_registrar::AccountRegistrar;
pub use auth_attempt::AuthAttempt;
pub use auth_context::AuthContext;
pub use auth_error_kind::AuthErrorKind;
pub use auth_rate_limiter::AuthRateLimiter;
pub use error::{AuthError, Result};
pub use identity_claims::IdentityClaims;
pub use identity_provider::IdentityProvider;
pub use jwt_algorithm::JwtAlgorithm;
pub use provider_settings::ProviderSettings;
pub use provider_user::ProviderUser;
pub use rate_limit_config::RateLimitConfig;
pub use rest_identity_provider::RestIdentityProvider;
pub use session_cookie_policy::{SESSION_COOKIE_NAME, SESSION_TTL_SECS, SessionCookiePolicy};
pub use session_issuer::SessionIssuer;
pub use session_resolver::SessionResolver;
pub use token_claims::TokenClaims;
pub use token_verifier::TokenVerifier;

#[cfg(test)]
mod tests;
