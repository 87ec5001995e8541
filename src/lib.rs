#![deny(warnings)]

use crate::config::Config;
use crate::forecast::{ForecastClient, print_forecast};
use crate::oauth_client::OAuthClient;
use crate::request_error::RequestError;
use crate::retrievers::client_credentials_retriever::ClientCredentialsRetriever;
use crate::retrievers::token_retriever::TokenRetriever;
use anyhow::{Context, Error, Result};
use std::io::Write;

pub mod access_token;
pub mod args;
pub mod config;
pub mod forecast;
pub mod oauth_client;
pub mod request_error;
pub mod retrievers;

/// Prints an unsuccessful status to `out` and swallows it. Any other error is
/// handed back to the caller.
fn report_request_error<W: Write>(error: Error, out: &mut W) -> Result<()> {
    match error.downcast_ref::<RequestError>() {
        Some(request_error) => {
            writeln!(out, "{}", request_error).context("Failed to print the request error")?;
            Ok(())
        }
        None => Err(error),
    }
}

pub async fn run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let http_client = reqwest::Client::new();
    let oauth_client = OAuthClient::new(config, &http_client);
    let retriever = ClientCredentialsRetriever::new(&oauth_client);

    let token = match retriever.retrieve().await {
        Ok(Some(token)) => token,
        Ok(None) => {
            log::debug!("No access token received. Skipping the forecast call");
            return Ok(());
        }
        Err(e) => return report_request_error(e, out),
    };

    let forecast_client = ForecastClient::new(&config.forecast_url, &http_client);
    let records = match forecast_client.fetch(&token).await {
        Ok(records) => records,
        Err(e) => return report_request_error(e, out),
    };

    print_forecast(&records, out)
}
