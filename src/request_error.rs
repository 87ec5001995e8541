use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Erro na solicitação: {}", .0.as_u16())]
    UnsuccessfulStatus(StatusCode),
}
