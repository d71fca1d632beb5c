use crate::RequestMethod;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_ENDPOINT: &str = "https://cloudflare-dns.com/dns-query";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// DoH endpoint, including path and any fixed query string.
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default)]
    pub method: RequestMethod,

    /// Seconds; `0` disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// When non-empty these replace the default request headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            method: RequestMethod::default(),
            timeout: default_timeout(),
            headers: BTreeMap::new(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}
