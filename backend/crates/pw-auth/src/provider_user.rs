use serde::Deserialize;

/// Account record as held by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    #[serde(rename = "localId")]
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    /// Credentials authenticated before this Unix time are revoked
    #[serde(default, deserialize_with = "unix_seconds")]
    pub valid_since: Option<i64>,
}

impl ProviderUser {
    /// A credential whose authentication predates `valid_since` has been revoked
    pub fn revokes(&self, auth_time: i64) -> bool {
        self.valid_since.is_some_and(|since| auth_time < since)
    }
}

// The identity service encodes timestamps as decimal strings.
fn unix_seconds<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => s
            .parse::<i64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
