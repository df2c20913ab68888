use std::fmt;

/// Key material the identity provider signs tokens with
#[derive(Clone)]
pub enum JwtAlgorithm {
    /// HMAC with SHA-256 (shared secret)
    HS256 { secret: Vec<u8> },
    /// RSA with SHA-256 (provider's public key)
    RS256 { public_key_pem: String },
}

impl fmt::Debug for JwtAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HS256 { .. } => f.write_str("HS256 { secret: <redacted> }"),
            Self::RS256 { .. } => f.write_str("RS256 { public_key_pem: .. }"),
        }
    }
}
