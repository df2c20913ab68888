use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Whether sign-in and sign-up confirm the account with the identity
/// provider beyond verifying the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountConfirmationMode {
    #[default]
    TokenOnly,
    Upstream,
}

impl FromStr for AccountConfirmationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "token_only" => Ok(AccountConfirmationMode::TokenOnly),
            "upstream" => Ok(AccountConfirmationMode::Upstream),
            other => Err(format!("unknown account confirmation mode '{}'", other)),
        }
    }
}

impl fmt::Display for AccountConfirmationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountConfirmationMode::TokenOnly => f.write_str("token_only"),
            AccountConfirmationMode::Upstream => f.write_str("upstream"),
        }
    }
}
