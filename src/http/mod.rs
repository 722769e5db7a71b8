use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Asynchronous POST capability used for the state-save call.
///
/// Implementations must return on every terminal outcome (success, HTTP
/// error, transport failure, timeout); the caller treats the return itself
/// as the completion signal and does not distinguish outcomes beyond
/// logging.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn post_json(&self, url: &str, body: Value) -> Result<(), HttpError>;
}

/// `reqwest`-backed client for real hosts.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn post_json(&self, url: &str, body: Value) -> Result<(), HttpError> {
        let response = self.inner.post(url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status(status));
        }
        // The endpoint answers with JSON; parse it to confirm arrival, then
        // discard it.
        response.json::<Value>().await?;
        Ok(())
    }
}
