//! Identity provider backed by an Identity Toolkit style REST service.
//!
//! Token and session-cookie signatures are verified locally against the
//! configured key; cookie minting and account lookups go over HTTP.

use crate::{
    AuthError, IdentityClaims, IdentityProvider, ProviderSettings, ProviderUser,
    Result as AuthErrorResult, TokenVerifier,
};

use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::debug;
use reqwest::{Client as ReqwestClient, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub struct RestIdentityProvider {
    settings: ProviderSettings,
    id_token_verifier: TokenVerifier,
    session_verifier: TokenVerifier,
    client: ReqwestClient,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionCookieRequest<'a> {
    id_token: &'a str,
    valid_duration: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSessionCookieResponse {
    session_cookie: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    local_id: Option<[&'a str; 1]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<[&'a str; 1]>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<ProviderUser>,
}

impl RestIdentityProvider {
    #[track_caller]
    pub fn new(settings: ProviderSettings) -> AuthErrorResult<Self> {
        let id_token_verifier = TokenVerifier::new(
            &settings.algorithm,
            &settings.token_issuer,
            &settings.project_id,
        )?;
        let session_verifier = TokenVerifier::new(
            &settings.algorithm,
            &settings.session_issuer,
            &settings.project_id,
        )?;

        let client = ReqwestClient::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|e| AuthError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            settings,
            id_token_verifier,
            session_verifier,
            client,
        })
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    pub fn algorithm(&self) -> &str {
        self.id_token_verifier.algorithm()
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/v1/projects/{}{}",
            self.settings.api_url, self.settings.project_id, path
        )
    }

    async fn post<B>(&self, path: &str, body: &B) -> AuthErrorResult<Response>
    where
        B: Serialize + ?Sized + Sync,
    {
        let mut req = self.client.post(self.endpoint(path)).json(body);

        if let Some(ref key) = self.settings.api_key {
            req = req.query(&[("key", key)]);
        }

        let response = req.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body: Value = response.json().await.unwrap_or(Value::Null);
        Err(upstream_error(status.as_u16(), &body))
    }

    async fn lookup(&self, request: &LookupRequest<'_>) -> AuthErrorResult<Option<ProviderUser>> {
        let response: LookupResponse = self
            .post("/accounts:lookup", request)
            .await?
            .json()
            .await?;
        Ok(response.users.into_iter().next())
    }

    async fn get_user(&self, uid: &str) -> AuthErrorResult<ProviderUser> {
        self.lookup(&LookupRequest {
            local_id: Some([uid]),
            email: None,
        })
        .await?
        .ok_or_else(|| AuthError::user_not_found(format!("no account for uid '{}'", uid)))
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn verify_id_token(&self, id_token: &str) -> AuthErrorResult<IdentityClaims> {
        let claims = self
            .id_token_verifier
            .verify(id_token)
            .map_err(|e| AuthError::invalid_token(e.to_string()))?;

        Ok(IdentityClaims::from_token_claims(claims))
    }

    async fn create_session_cookie(
        &self,
        id_token: &str,
        ttl: Duration,
    ) -> AuthErrorResult<String> {
        let request = CreateSessionCookieRequest {
            id_token,
            valid_duration: ttl.as_secs(),
        };

        let response: CreateSessionCookieResponse = self
            .post(":createSessionCookie", &request)
            .await?
            .json()
            .await?;

        if response.session_cookie.is_empty() {
            return Err(AuthError::invalid_token(
                "identity service returned an empty session cookie",
            ));
        }

        Ok(response.session_cookie)
    }

    async fn verify_session_cookie(
        &self,
        session_cookie: &str,
        check_revoked: bool,
    ) -> AuthErrorResult<IdentityClaims> {
        let claims = self
            .session_verifier
            .verify(session_cookie)
            .map_err(|e| AuthError::invalid_session(e.to_string()))?;
        let claims = IdentityClaims::from_token_claims(claims);

        if check_revoked {
            let user = self.get_user(&claims.uid).await?;
            if user.disabled {
                return Err(AuthError::UserDisabled {
                    message: format!("account '{}' is disabled", user.uid),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            if user.revokes(claims.auth_time) {
                debug!("Session for uid {} predates revocation", claims.uid);
                return Err(AuthError::invalid_session("session cookie has been revoked"));
            }
        }

        Ok(claims)
    }

    async fn get_user_by_email(&self, email: &str) -> AuthErrorResult<ProviderUser> {
        self.lookup(&LookupRequest {
            local_id: None,
            email: Some([email]),
        })
        .await?
        .ok_or_else(|| AuthError::user_not_found("no account for the given email"))
    }
}

/// Map an error body such as `{"error":{"code":400,"message":"INVALID_ID_TOKEN : detail"}}`
#[track_caller]
fn upstream_error(status: u16, body: &Value) -> AuthError {
    let raw = body
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN");
    let code = raw.split_whitespace().next().unwrap_or("UNKNOWN");
    let location = ErrorLocation::from(Location::caller());

    match code {
        "INVALID_ID_TOKEN"
        | "TOKEN_EXPIRED"
        | "INVALID_ARGUMENT"
        | "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => AuthError::InvalidToken {
            message: raw.to_string(),
            location,
        },
        "USER_NOT_FOUND" => AuthError::UserNotFound {
            message: raw.to_string(),
            location,
        },
        "USER_DISABLED" => AuthError::UserDisabled {
            message: raw.to_string(),
            location,
        },
        "EMAIL_EXISTS" => AuthError::EmailAlreadyInUse { location },
        _ if status >= 500 => AuthError::NetworkFailure {
            message: format!("identity service returned {}: {}", status, raw),
            location,
        },
        _ => AuthError::Upstream {
            code: code.to_string(),
            message: raw.to_string(),
            location,
        },
    }
}
