use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use reqwest::{Proxy, StatusCode};
use thiserror::Error;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 15;

/// Options for fetching subscriptions
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout: u64,
    pub proxy: Option<String>,
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Failed to set proxy: {0}")]
    Proxy(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(StatusCode),
}

fn build_client(config: &HttpConfig) -> Result<Client, HttpError> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .user_agent(config.user_agent.as_str());

    if let Some(proxy) = config.proxy.as_deref().filter(|p| !p.is_empty()) {
        builder = builder.proxy(Proxy::all(proxy).map_err(HttpError::Proxy)?);
    }

    Ok(builder.build()?)
}

/// Fetches `url` and returns the response body.
///
/// Anything other than `200 OK` is an error.
pub fn web_get(url: &str, config: &HttpConfig) -> Result<String, HttpError> {
    debug!("Fetching {}", url);
    let response = build_client(config)?.get(url).send()?;

    if response.status() != StatusCode::OK {
        return Err(HttpError::Status(response.status()));
    }

    Ok(response.text()?)
}
