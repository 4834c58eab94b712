use gloo_net::http::Request;
use thiserror::Error;

use crate::model::TransactionsResponse;

const API_BASE_URL: &str = "http://localhost:3333";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("unexpected status {0}")]
    Status(u16),
}

pub async fn fetch_transactions() -> Result<TransactionsResponse, LoadError> {
    let url = format!("{}/transactions", API_BASE_URL);
    let resp = Request::get(&url).send().await?;
    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }
    Ok(resp.json::<TransactionsResponse>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_is_descriptive() {
        assert_eq!(LoadError::Status(500).to_string(), "unexpected status 500");
    }
}
