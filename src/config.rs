use anyhow::{Context, Result};
use oauth2::{ClientId, ClientSecret, Scope, TokenUrl};
use url::Url;

const TOKEN_URL: &str = "https://localhost:5001/connect/token";
const FORECAST_URL: &str = "https://localhost:5002/weatherforecast";
const CLIENT_ID: &str = "cwm.client";
const CLIENT_SECRET: &str = "secret";
const SCOPE: &str = "myApi.read";

/// Endpoints and client credentials used by a run.
#[derive(Clone, Debug)]
pub struct Config {
    /// OAuth 2.0 token exchange url
    pub token_url: TokenUrl,

    /// Resource called with the bearer token
    pub forecast_url: Url,

    /// OAuth 2.0 Client Identifier <https://www.rfc-editor.org/rfc/rfc6749#section-2.2>
    pub client_id: ClientId,

    /// OAuth 2.0 Client Secret <https://www.rfc-editor.org/rfc/rfc6749#section-2.3.1>
    pub client_secret: ClientSecret,

    /// OAuth 2.0 Scope <https://www.rfc-editor.org/rfc/rfc6749#section-3.3>
    pub scope: Scope,
}

impl Config {
    pub fn builtin() -> Result<Config> {
        Ok(Config {
            token_url: TokenUrl::new(TOKEN_URL.to_owned())
                .with_context(|| format!("Token url is not a correct absolute URL: {}", TOKEN_URL))?,
            forecast_url: Url::parse(FORECAST_URL).with_context(|| {
                format!("Forecast url is not a correct absolute URL: {}", FORECAST_URL)
            })?,
            client_id: ClientId::new(CLIENT_ID.to_owned()),
            client_secret: ClientSecret::new(CLIENT_SECRET.to_owned()),
            scope: Scope::new(SCOPE.to_owned()),
        })
    }
}
