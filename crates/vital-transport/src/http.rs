//! HTTP transport for the spreadsheet-backed submission API.
//!
//! Posts the payload's `{"data": [row]}` body as JSON. Any 2xx response is a
//! success; any other status, a network failure, or a timeout is reported as
//! a [`TransportError`].

use std::time::Duration;

use async_trait::async_trait;

use vital_core::{VitalError, VitalResult};

use crate::{Payload, Transport, TransportError};

/// Posts submissions to a fixed URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: reqwest::Url,
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport for `endpoint` with a per-request `timeout`.
    pub fn new(endpoint: &str, timeout: Duration) -> VitalResult<Self> {
        let endpoint = reqwest::Url::parse(endpoint).map_err(|e| {
            VitalError::ConfigurationError(format!("Invalid submission endpoint '{endpoint}': {e}"))
        })?;
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                VitalError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
            })?;
        Ok(Self {
            client,
            endpoint,
            timeout,
        })
    }

    /// Returns the endpoint submissions are posted to.
    pub const fn endpoint(&self) -> &reqwest::Url {
        &self.endpoint
    }

    fn map_error(&self, err: &reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            TransportError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, payload: &Payload) -> Result<(), TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&payload.to_wire())
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(
                form = payload.form(),
                status = status.as_u16(),
                "submission accepted"
            );
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(
                    form = payload.form(),
                    error = %e,
                    "failed to read rejection body"
                );
                String::new()
            }
        };
        tracing::warn!(
            form = payload.form(),
            status = status.as_u16(),
            "submission rejected"
        );
        Err(TransportError::Status {
            status: status.as_u16(),
            body,
        })
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_endpoint() {
        let result = HttpTransport::new("not a url", Duration::from_secs(1));
        assert!(matches!(result, Err(VitalError::ConfigurationError(_))));
    }

    #[test]
    fn test_keeps_endpoint() {
        let transport =
            HttpTransport::new("https://sheetdb.io/api/v1/abc", Duration::from_secs(1)).unwrap();
        assert_eq!(transport.endpoint().as_str(), "https://sheetdb.io/api/v1/abc");
        assert_eq!(transport.name(), "http");
    }
}
