//! HTTP(S) exchange for DNS-over-HTTPS (RFC 8484) backed by `reqwest`.
//!
//! Every exchange builds its own client with idle pooling disabled, so a
//! connection never outlives the query that opened it. Requests go straight
//! to the endpoint; proxy environment variables are not consulted, and
//! redirects are not followed, so a 3xx fails like any other non-2xx status.

use super::request::{HttpRequestSpec, Scheme};
use super::HttpExchange;
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::{DohError, RequestMethod};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed [`HttpExchange`]
#[derive(Debug, Clone, Default)]
pub struct ReqwestExchange {
    timeout: Option<Duration>,
}

impl ReqwestExchange {
    /// No timeout: the exchange waits as long as the connection stays open.
    pub fn new() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn build_client(&self, scheme: Scheme, url: &str) -> Result<reqwest::Client, DohError> {
        let builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .redirect(reqwest::redirect::Policy::none())
            .no_proxy();

        let builder = match scheme {
            Scheme::Https => builder.use_rustls_tls().https_only(true),
            Scheme::Http => builder,
        };

        builder.build().map_err(|e| DohError::Transport {
            url: url.to_string(),
            reason: format!("failed to build HTTP client: {}", e),
        })
    }

    /// Applies the timeout, if any, once to the whole of `fut`.
    async fn bounded<T, F>(&self, url: &str, fut: F) -> Result<T, DohError>
    where
        F: Future<Output = Result<T, DohError>>,
    {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, fut)
                .await
                .map_err(|_| DohError::TransportTimeout {
                    url: url.to_string(),
                })?,
            None => fut.await,
        }
    }
}

fn transport_error(url: &str, error: reqwest::Error) -> DohError {
    if error.is_timeout() {
        DohError::TransportTimeout {
            url: url.to_string(),
        }
    } else {
        DohError::Transport {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}

#[async_trait]
impl HttpExchange for ReqwestExchange {
    async fn exchange(&self, request: HttpRequestSpec) -> Result<Bytes, DohError> {
        let scheme = request.scheme();
        let (method, url, headers, body) = request.into_parts();
        let url_str = url.to_string();

        let client = self.build_client(scheme, &url_str)?;

        let builder = match method {
            RequestMethod::Get => client.get(url),
            RequestMethod::Post => client.post(url),
        };
        let builder = builder.headers(headers);
        let builder = match body {
            Some(body) => builder.body(body),
            None => builder,
        };

        let fetch = async {
            let response = builder
                .send()
                .await
                .map_err(|e| transport_error(&url_str, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(DohError::HttpStatus {
                    url: url_str.clone(),
                    status: status.as_u16(),
                });
            }

            let body = response
                .bytes()
                .await
                .map_err(|e| transport_error(&url_str, e))?;
            Ok((status, body))
        };

        let (status, response_bytes) = self.bounded(&url_str, fetch).await?;

        debug!(
            url = %url_str,
            status = status.as_u16(),
            response_len = response_bytes.len(),
            "DoH response received"
        );

        Ok(response_bytes)
    }
}
