use crate::DohError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// HTTP method used to carry a DNS message (RFC 8484 §4.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RequestMethod {
    Get,
    #[default]
    Post,
}

pub const ALLOWED_METHODS: [&str; 2] = ["GET", "POST"];

/// Method allow-list check, usable for input validation without a resolver.
pub fn is_method_allowed(method: &str) -> bool {
    method.parse::<RequestMethod>().is_ok()
}

impl RequestMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
        }
    }
}

impl fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMethod {
    type Err = DohError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(RequestMethod::Get),
            "POST" => Ok(RequestMethod::Post),
            _ => Err(DohError::MethodNotAllowed(s.to_string())),
        }
    }
}

impl TryFrom<String> for RequestMethod {
    type Error = DohError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RequestMethod> for String {
    fn from(method: RequestMethod) -> Self {
        method.as_str().to_string()
    }
}
