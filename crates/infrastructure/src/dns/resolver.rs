use super::forwarding::make_query;
use super::transport::{send_doh_msg_with, HttpExchange, ReqwestExchange};
use ferrous_doh_domain::{DnsMessage, DohError, RecordType, RequestMethod};
use reqwest::header::HeaderMap;
use std::sync::Arc;
use std::time::Duration;

/// DoH resolver bound to one endpoint URL.
///
/// Holds no per-query state; concurrent queries on the same instance run
/// independently.
#[derive(Debug, Clone)]
pub struct DohResolver<E = ReqwestExchange> {
    endpoint: Arc<str>,
    exchange: E,
}

impl DohResolver<ReqwestExchange> {
    pub fn new(endpoint: impl Into<Arc<str>>) -> Self {
        Self::with_exchange(endpoint, ReqwestExchange::new())
    }

    pub fn with_timeout(endpoint: impl Into<Arc<str>>, timeout: Duration) -> Self {
        Self::with_exchange(endpoint, ReqwestExchange::with_timeout(timeout))
    }
}

impl<E: HttpExchange> DohResolver<E> {
    pub fn with_exchange(endpoint: impl Into<Arc<str>>, exchange: E) -> Self {
        Self {
            endpoint: endpoint.into(),
            exchange,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolve `qname`/`qtype` using `method` ("GET" or "POST").
    ///
    /// The method is checked before anything else, so a rejected method
    /// never reaches the network. An unrecognized `qtype` is an encoding
    /// failure.
    pub async fn query(
        &self,
        qname: &str,
        qtype: &str,
        method: &str,
        headers: Option<&HeaderMap>,
    ) -> Result<DnsMessage, DohError> {
        let method: RequestMethod = method.parse()?;
        let qtype: RecordType = qtype.parse().map_err(DohError::Encoding)?;

        self.lookup(qname, qtype, method, headers).await
    }

    pub async fn lookup(
        &self,
        qname: &str,
        qtype: RecordType,
        method: RequestMethod,
        headers: Option<&HeaderMap>,
    ) -> Result<DnsMessage, DohError> {
        let message = make_query(qname, qtype);
        send_doh_msg_with(&self.exchange, &message, &self.endpoint, method, headers).await
    }
}
