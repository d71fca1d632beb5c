//! DNS Message Builder
//!
//! Builds the canonical DoH query message and serializes it to RFC 1035
//! wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use ferrous_doh_domain::{DnsMessage, DohError, HeaderFlags, MessageType, Question, RecordType};
use hickory_proto::op::{Message, MessageType as HickoryMessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

const MAX_LABEL_LEN: usize = 63;
const MAX_NAME_WIRE_LEN: usize = 255;

/// Builds DNS query messages and their wire encoding
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build the DoH query for `domain`/`record_type`
    ///
    /// Creates a recursive query with:
    /// - ID 0, so identical queries produce identical HTTP requests and stay
    ///   cacheable (RFC 8484 §4.1)
    /// - RD (Recursion Desired) flag set
    /// - A single question
    ///
    /// The name is not validated here; that happens in [`Self::to_wire`].
    pub fn make_query(domain: &str, record_type: RecordType) -> DnsMessage {
        DnsMessage {
            message_type: MessageType::Query,
            id: 0,
            opcode: 0,
            flags: HeaderFlags::recursive_query(),
            rcode: 0,
            questions: vec![Question::new(domain, record_type)],
            answers: Vec::new(),
            authorities: Vec::new(),
            additionals: Vec::new(),
        }
    }

    /// Serialize a message to wire format bytes
    ///
    /// Only the header and question section are emitted; resource records
    /// only ever come from decoded responses and are rejected here.
    pub fn to_wire(message: &DnsMessage) -> Result<Vec<u8>, DohError> {
        if !(message.answers.is_empty()
            && message.authorities.is_empty()
            && message.additionals.is_empty())
        {
            return Err(DohError::Encoding(
                "resource records cannot be encoded into a query".to_string(),
            ));
        }

        if message.opcode != 0 {
            return Err(DohError::Encoding(format!(
                "unsupported opcode {}",
                message.opcode
            )));
        }

        let message_type = match message.message_type {
            MessageType::Query => HickoryMessageType::Query,
            MessageType::Response => HickoryMessageType::Response,
        };

        let mut wire_message = Message::new(message.id, message_type, OpCode::Query);
        wire_message.set_recursion_desired(message.flags.recursion_desired);
        wire_message.set_checking_disabled(message.flags.checking_disabled);
        wire_message.set_authentic_data(message.flags.authentic_data);

        for question in &message.questions {
            wire_message.add_query(Self::to_query(question)?);
        }

        Self::serialize_message(&wire_message)
    }

    fn to_query(question: &Question) -> Result<Query, DohError> {
        let name = parse_name(&question.name)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(&question.qtype));
        query.set_query_class(DNSClass::IN);
        Ok(query)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DohError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DohError::Encoding(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

/// Length limits of RFC 1035 §2.3.4, checked on the encoded labels.
fn parse_name(domain: &str) -> Result<Name, DohError> {
    if domain.is_empty() {
        return Err(DohError::Encoding("domain name is empty".to_string()));
    }

    let name = Name::from_str(domain)
        .map_err(|e| DohError::Encoding(format!("Invalid domain '{}': {}", domain, e)))?;

    let mut wire_len = 1;
    for label in name.iter() {
        if label.len() > MAX_LABEL_LEN {
            return Err(DohError::Encoding(format!(
                "Invalid domain '{}': label exceeds {} bytes",
                domain, MAX_LABEL_LEN
            )));
        }
        wire_len += label.len() + 1;
    }

    if wire_len > MAX_NAME_WIRE_LEN {
        return Err(DohError::Encoding(format!(
            "Invalid domain '{}': name exceeds {} bytes",
            domain, MAX_NAME_WIRE_LEN
        )));
    }

    Ok(name)
}
