pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::ResponseParser;

use ferrous_doh_domain::{DnsMessage, RecordType};

/// Standalone form of [`MessageBuilder::make_query`].
pub fn make_query(qname: &str, qtype: RecordType) -> DnsMessage {
    MessageBuilder::make_query(qname, qtype)
}
