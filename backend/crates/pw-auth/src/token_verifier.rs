use crate::{AuthError, JwtAlgorithm, Result as AuthErrorResult, TokenClaims};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Clock skew tolerance in seconds
pub const LEEWAY_SECS: u64 = 30;

/// Verifies JWTs minted by the identity provider for one issuer/audience pair
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    algorithm: Algorithm,
}

impl TokenVerifier {
    #[track_caller]
    pub fn new(algorithm: &JwtAlgorithm, issuer: &str, audience: &str) -> AuthErrorResult<Self> {
        let (decoding_key, algorithm) = match algorithm {
            JwtAlgorithm::HS256 { secret } => (DecodingKey::from_secret(secret), Algorithm::HS256),
            JwtAlgorithm::RS256 { public_key_pem } => {
                let key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
                    AuthError::Configuration {
                        message: format!("Invalid RSA public key: {}", e),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                (key, Algorithm::RS256)
            }
        };

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&["exp", "iat", "iss", "aud", "sub"]);

        Ok(Self {
            decoding_key,
            validation,
            algorithm,
        })
    }

    /// Verify signature, expiry, issuer and audience, then the claim contents
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<TokenClaims> {
        let token_data = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Get the algorithm being used (for logging/debugging)
    pub fn algorithm(&self) -> &str {
        match self.algorithm {
            Algorithm::HS256 => "HS256",
            Algorithm::RS256 => "RS256",
            _ => "unknown",
        }
    }
}
