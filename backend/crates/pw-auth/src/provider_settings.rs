use crate::JwtAlgorithm;

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Connection and verification settings for the REST identity provider
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    /// Base URL of the identity service REST API
    pub api_url: String,
    pub project_id: String,
    pub api_key: Option<String>,
    /// Expected `iss` of identity tokens
    pub token_issuer: String,
    /// Expected `iss` of session cookies
    pub session_issuer: String,
    pub algorithm: JwtAlgorithm,
    pub request_timeout: Duration,
}

impl ProviderSettings {
    pub fn new(project_id: impl Into<String>, algorithm: JwtAlgorithm) -> Self {
        let project_id = project_id.into();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_issuer: Self::default_token_issuer(&project_id),
            session_issuer: Self::default_session_issuer(&project_id),
            project_id,
            api_key: None,
            algorithm,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn default_token_issuer(project_id: &str) -> String {
        format!("https://securetoken.google.com/{}", project_id)
    }

    pub fn default_session_issuer(project_id: &str) -> String {
        format!("https://session.firebase.google.com/{}", project_id)
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
