use crate::config::AuditConfig;
use crate::error::{AuditError, FetchError};
use crate::fetchers::Fetcher;
use reqwest::Client;

/// Fetches pages with a single timed GET per URL. No retries.
pub struct HttpFetcher {
    client: Client,
    timeout_secs: u64,
}

impl HttpFetcher {
    /// Build a fetcher sending the configured User-Agent with the configured timeout
    pub fn new(config: &AuditConfig) -> Result<Self, AuditError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(AuditError::Client)?;

        Ok(Self::with_client(client, config.timeout_secs))
    }

    /// Use a preconfigured client. `timeout_secs` is only used in error messages.
    pub fn with_client(client: Client, timeout_secs: u64) -> Self {
        Self {
            client,
            timeout_secs,
        }
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                secs: self.timeout_secs,
            }
        } else {
            FetchError::Request(err)
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        ::log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        ::log::debug!("{} answered {}", url, status);
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| self.classify(url, e))
    }
}
