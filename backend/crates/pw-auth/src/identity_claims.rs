use crate::TokenClaims;

/// Verified identity extracted from an identity token or session cookie.
/// Only constructed after signature, expiry and issuer checks pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityClaims {
    pub uid: String,
    pub email: Option<String>,
    pub issuer: String,
    pub issued_at: i64,
    pub auth_time: i64,
    pub expires_at: i64,
}

impl IdentityClaims {
    pub fn from_token_claims(claims: TokenClaims) -> Self {
        let auth_time = claims.auth_time();
        Self {
            uid: claims.sub,
            email: claims.email,
            issuer: claims.iss,
            issued_at: claims.iat,
            auth_time,
            expires_at: claims.exp,
        }
    }

    /// True when the token carries exactly the given email
    pub fn email_matches(&self, email: &str) -> bool {
        self.email.as_deref() == Some(email)
    }
}
