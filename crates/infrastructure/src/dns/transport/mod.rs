pub mod https;
pub mod request;

use crate::dns::forwarding::{MessageBuilder, ResponseParser};
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::{DnsMessage, DohError, RequestMethod};
use reqwest::header::HeaderMap;
use std::sync::Arc;
use tracing::debug;

pub use https::ReqwestExchange;
pub use request::{HttpRequestSpec, Scheme};

/// Performs one HTTP exchange and returns the complete response body.
///
/// Non-2xx responses and connection failures are transport errors; the
/// body is returned only once it has been read in full.
#[async_trait]
pub trait HttpExchange: Send + Sync {
    async fn exchange(&self, request: HttpRequestSpec) -> Result<Bytes, DohError>;
}

#[async_trait]
impl<T: HttpExchange + ?Sized> HttpExchange for Arc<T> {
    async fn exchange(&self, request: HttpRequestSpec) -> Result<Bytes, DohError> {
        (**self).exchange(request).await
    }
}

/// Send `message` to `endpoint` with a fresh reqwest exchange and decode
/// the answer.
pub async fn send_doh_msg(
    message: &DnsMessage,
    endpoint: &str,
    method: RequestMethod,
    headers: Option<&HeaderMap>,
) -> Result<DnsMessage, DohError> {
    send_doh_msg_with(&ReqwestExchange::new(), message, endpoint, method, headers).await
}

/// encode → HTTP exchange → decode, over any [`HttpExchange`].
pub async fn send_doh_msg_with<E: HttpExchange + ?Sized>(
    exchange: &E,
    message: &DnsMessage,
    endpoint: &str,
    method: RequestMethod,
    headers: Option<&HeaderMap>,
) -> Result<DnsMessage, DohError> {
    let wire = MessageBuilder::to_wire(message)?;
    let request = HttpRequestSpec::build(&wire, endpoint, method, headers)?;

    debug!(
        url = %request.url(),
        method = %method,
        message_len = wire.len(),
        "Sending DoH query"
    );

    let body = exchange.exchange(request).await?;
    ResponseParser::parse(&body)
}
