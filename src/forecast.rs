use crate::request_error::RequestError;
use anyhow::{Context, Result};
use oauth2::AccessToken;
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::io::Write;
use url::Url;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub date: String,

    pub temperature_c: i32,

    pub temperature_f: i32,

    pub summary: Option<String>,
}

impl fmt::Display for ForecastRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "date: {}", self.date)?;
        writeln!(f, "temperatureC: {}", self.temperature_c)?;
        writeln!(f, "temperatureF: {}", self.temperature_f)?;
        write!(f, "summary: {}", self.summary.as_deref().unwrap_or_default())
    }
}

pub struct ForecastClient<'a> {
    forecast_url: &'a Url,
    http_client: &'a Client,
}

impl<'a> ForecastClient<'a> {
    pub fn new<'b>(forecast_url: &'b Url, http_client: &'b Client) -> ForecastClient<'b> {
        ForecastClient {
            forecast_url,
            http_client,
        }
    }

    pub async fn fetch(&self, token: &AccessToken) -> Result<Vec<ForecastRecord>> {
        log::debug!("Requesting forecast from {}...", self.forecast_url);

        let response = self
            .http_client
            .get(self.forecast_url.clone())
            .bearer_auth(token.secret())
            .send()
            .await
            .context("Couldn't reach out to the forecast endpoint")?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("Forecast endpoint responded with {}", status);
            return Err(RequestError::UnsuccessfulStatus(status).into());
        }

        let body = response
            .bytes()
            .await
            .context("Failed to read the forecast endpoint response")?;

        let records = decode_records(&body)?;
        log::debug!("Received {} forecast records", records.len());

        Ok(records)
    }
}

fn decode_records(body: &[u8]) -> Result<Vec<ForecastRecord>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let records = serde_json::from_slice::<Option<Vec<ForecastRecord>>>(body)
        .context("Couldn't process json given by the forecast endpoint")?;

    Ok(records.unwrap_or_default())
}

pub fn print_forecast<W: Write>(records: &[ForecastRecord], out: &mut W) -> Result<()> {
    for record in records {
        writeln!(out, "{}", record).context("Failed to print a forecast record")?;
        writeln!(out).context("Failed to print a forecast record")?;
    }

    Ok(())
}
