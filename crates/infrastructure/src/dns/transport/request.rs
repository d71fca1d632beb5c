//! HTTP request assembly for DNS-over-HTTPS (RFC 8484 §4.1)
//!
//! ```text
//! GET /dns-query?dns=AAABAAABAAAAAAAAB2V4YW1wbGUDY29tAAABAAE HTTP/1.1
//! Accept: application/dns-message
//!
//! POST /dns-query HTTP/1.1
//! Accept: application/dns-message
//! Content-Type: application/dns-message
//! Content-Length: 29
//!
//! <raw DNS message bytes>
//! ```

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use bytes::Bytes;
use ferrous_doh_domain::{DohError, RequestMethod};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT};
use reqwest::Url;

/// Media type of DoH request and response bodies (RFC 8484 §6)
pub const DNS_MESSAGE_CONTENT_TYPE: &str = "application/dns-message";

/// Query parameter carrying the encoded message on GET requests
pub const DNS_QUERY_PARAM: &str = "dns";

pub const CLIENT_USER_AGENT: &str = concat!("ferrous-doh/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// `https://` endpoints get a TLS-only client, everything else plain HTTP.
    pub fn from_endpoint(endpoint: &str) -> Self {
        if endpoint.starts_with("https://") {
            Scheme::Https
        } else {
            Scheme::Http
        }
    }
}

/// Headers sent when the caller supplies none.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(ACCEPT, HeaderValue::from_static(DNS_MESSAGE_CONTENT_TYPE));
    headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
    headers
}

/// base64url without `=` padding (RFC 4648 §5, RFC 8484 §4.1)
pub fn encode_dns_param(wire: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(wire)
}

/// One fully assembled DoH request. Built fresh for every query.
#[derive(Debug, Clone)]
pub struct HttpRequestSpec {
    method: RequestMethod,
    scheme: Scheme,
    url: Url,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl HttpRequestSpec {
    /// Encode `wire` into a request against `endpoint`.
    ///
    /// Caller headers replace the defaults outright; POST additionally
    /// gets `Content-Type` and `Content-Length`. The caller's map is
    /// copied, never modified.
    pub fn build(
        wire: &[u8],
        endpoint: &str,
        method: RequestMethod,
        headers: Option<&HeaderMap>,
    ) -> Result<Self, DohError> {
        let scheme = Scheme::from_endpoint(endpoint);
        let mut url = Url::parse(endpoint).map_err(|e| DohError::Transport {
            url: endpoint.to_string(),
            reason: format!("invalid endpoint URL: {}", e),
        })?;

        let mut headers = match headers {
            Some(custom) => custom.clone(),
            None => default_headers(),
        };

        let body = match method {
            RequestMethod::Get => {
                url.query_pairs_mut()
                    .append_pair(DNS_QUERY_PARAM, &encode_dns_param(wire));
                None
            }
            RequestMethod::Post => {
                headers.insert(
                    CONTENT_TYPE,
                    HeaderValue::from_static(DNS_MESSAGE_CONTENT_TYPE),
                );
                headers.insert(CONTENT_LENGTH, HeaderValue::from(wire.len()));
                Some(Bytes::copy_from_slice(wire))
            }
        };

        Ok(Self {
            method,
            scheme,
            url,
            headers,
            body,
        })
    }

    pub fn method(&self) -> RequestMethod {
        self.method
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn host(&self) -> Option<&str> {
        self.url.host_str()
    }

    pub fn port(&self) -> Option<u16> {
        self.url.port_or_known_default()
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    pub fn query(&self) -> Option<&str> {
        self.url.query()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    pub fn into_parts(self) -> (RequestMethod, Url, HeaderMap, Option<Bytes>) {
        (self.method, self.url, self.headers, self.body)
    }
}
