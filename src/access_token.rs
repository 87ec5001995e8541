use anyhow::{Context, Result};
use oauth2::AccessToken;
use serde::Deserialize;

/// Token endpoint answer carrying a usable `access_token`.
/// More: <https://www.rfc-editor.org/rfc/rfc6749#section-5.1>
#[derive(Clone, Debug)]
pub struct AccessTokenResponse {
    pub access_token: AccessToken,

    pub token_type: Option<String>,

    pub expires_in: Option<u64>,

    pub scope: Option<String>,
}

#[derive(Deserialize)]
struct TokenEndpointResponse {
    #[serde(default)]
    access_token: Option<AccessToken>,

    #[serde(default)]
    token_type: Option<String>,

    #[serde(default)]
    expires_in: Option<u64>,

    #[serde(default)]
    scope: Option<String>,
}

impl AccessTokenResponse {
    /// Decodes a token endpoint body. An empty body, a JSON `null` or a
    /// missing, null or empty `access_token` carry nothing usable and yield `None`.
    pub fn from_body(body: &[u8]) -> Result<Option<AccessTokenResponse>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let response = serde_json::from_slice::<Option<TokenEndpointResponse>>(body)
            .context("Couldn't process json given by the token endpoint")?;

        Ok(response.and_then(|response| {
            let access_token = response
                .access_token
                .filter(|token| !token.secret().is_empty())?;

            Some(AccessTokenResponse {
                access_token,
                token_type: response.token_type,
                expires_in: response.expires_in,
                scope: response.scope,
            })
        }))
    }
}
