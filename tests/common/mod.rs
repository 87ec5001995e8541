use forecast_client::config::Config;
use oauth2::TokenUrl;
use std::net::TcpListener;
use url::Url;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/connect/token";
pub const FORECAST_PATH: &str = "/weatherforecast";
pub const ACCESS_TOKEN: &str = "test-access-token";

pub fn config_for(server: &MockServer) -> Config {
    Config {
        token_url: TokenUrl::new(format!("{}{}", server.uri(), TOKEN_PATH)).unwrap(),
        forecast_url: Url::parse(&format!("{}{}", server.uri(), FORECAST_PATH)).unwrap(),
        ..Config::builtin().unwrap()
    }
}

/// Points both endpoints at a local port that nothing listens on.
pub fn config_without_listener() -> Config {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let uri = format!("http://127.0.0.1:{}", port);

    Config {
        token_url: TokenUrl::new(format!("{}{}", uri, TOKEN_PATH)).unwrap(),
        forecast_url: Url::parse(&format!("{}{}", uri, FORECAST_PATH)).unwrap(),
        ..Config::builtin().unwrap()
    }
}

pub async fn mock_token_endpoint(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "grant_type=client_credentials&scope=myApi.read&client_id=cwm.client&client_secret=secret",
        ))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mock_forecast_endpoint(server: &MockServer, response: ResponseTemplate, calls: u64) {
    Mock::given(method("GET"))
        .and(path(FORECAST_PATH))
        .and(header("authorization", format!("Bearer {}", ACCESS_TOKEN).as_str()))
        .respond_with(response)
        .expect(calls)
        .mount(server)
        .await;
}

pub fn token_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "expires_in": 3600,
        "scope": "myApi.read"
    }))
}
