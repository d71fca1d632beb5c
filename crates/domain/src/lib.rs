//! Ferrous DoH Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod request_method;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, HeaderFlags, MessageType, Question};
pub use dns_record::{RecordData, RecordType, ResourceRecord};
pub use errors::{DohError, ErrorKind};
pub use request_method::{is_method_allowed, RequestMethod, ALLOWED_METHODS};
