use crate::access_token::AccessTokenResponse;
use crate::config::Config;
use crate::request_error::RequestError;
use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

const GRANT_TYPE: &str = "client_credentials";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct OAuthClient<'a> {
    config: &'a Config,
    http_client: &'a Client,
}

impl<'a> OAuthClient<'a> {
    pub fn new<'b>(config: &'b Config, http_client: &'b Client) -> OAuthClient<'b> {
        OAuthClient {
            config,
            http_client,
        }
    }

    pub fn client_credentials_form(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("grant_type", GRANT_TYPE)
            .append_pair("scope", &self.config.scope)
            .append_pair("client_id", &self.config.client_id)
            .append_pair("client_secret", self.config.client_secret.secret())
            .finish()
    }

    /// Client credentials Grant. More: <https://www.rfc-editor.org/rfc/rfc6749#section-4.4>
    pub async fn exchange_client_credentials(&self) -> Result<Option<AccessTokenResponse>> {
        log::debug!(
            "Exchanging credentials of client_id={} for a token at {}...",
            self.config.client_id.as_str(),
            self.config.token_url.as_str()
        );

        let response = self
            .http_client
            .post(self.config.token_url.url().clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(self.client_credentials_form())
            .send()
            .await
            .context("Couldn't reach out to the token endpoint")?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Token endpoint responded with {}", status);
            return Err(RequestError::UnsuccessfulStatus(status).into());
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read the token endpoint response")?;

        let token = AccessTokenResponse::from_body(&body)?;
        match &token {
            Some(token) => log::debug!(
                "Exchange done. token_type={:?} expires_in={:?} scope={:?}",
                token.token_type,
                token.expires_in,
                token.scope
            ),
            None => log::debug!("Token endpoint returned no usable token"),
        }

        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_form_in_field_order() {
        let config = Config::builtin().unwrap();
        let http_client = Client::new();
        let oauth_client = OAuthClient::new(&config, &http_client);

        assert_eq!(
            oauth_client.client_credentials_form(),
            "grant_type=client_credentials&scope=myApi.read&client_id=cwm.client&client_secret=secret"
        );
    }

    #[test]
    fn it_escapes_form_values() {
        let config = Config {
            client_secret: oauth2::ClientSecret::new("p&ss word=".to_owned()),
            scope: oauth2::Scope::new("api.read api.write".to_owned()),
            ..Config::builtin().unwrap()
        };
        let http_client = Client::new();
        let oauth_client = OAuthClient::new(&config, &http_client);

        assert_eq!(
            oauth_client.client_credentials_form(),
            "grant_type=client_credentials&scope=api.read+api.write&client_id=cwm.client&client_secret=p%26ss+word%3D"
        );
    }
}
