use crate::dns_record::{RecordData, RecordType, ResourceRecord};
use serde::Serialize;
use std::net::IpAddr;

pub const RCODE_NOERROR: u16 = 0;
pub const RCODE_FORMERR: u16 = 1;
pub const RCODE_SERVFAIL: u16 = 2;
pub const RCODE_NXDOMAIN: u16 = 3;
pub const RCODE_NOTIMP: u16 = 4;
pub const RCODE_REFUSED: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Query,
    Response,
}

/// Header bits below the opcode (RFC 1035 §4.1.1, RFC 4035 §3.2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct HeaderFlags {
    pub authoritative: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub authentic_data: bool,
    pub checking_disabled: bool,
}

impl HeaderFlags {
    /// Flags of an outgoing recursive query.
    pub fn recursive_query() -> Self {
        Self {
            recursion_desired: true,
            ..Self::default()
        }
    }

    /// dig-style mnemonic list, e.g. `["rd", "ra"]`.
    pub fn mnemonics(&self) -> Vec<&'static str> {
        [
            (self.authoritative, "aa"),
            (self.truncated, "tc"),
            (self.recursion_desired, "rd"),
            (self.recursion_available, "ra"),
            (self.authentic_data, "ad"),
            (self.checking_disabled, "cd"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub name: String,

    #[serde(rename = "type")]
    pub qtype: RecordType,
}

impl Question {
    pub fn new(name: impl Into<String>, qtype: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype,
        }
    }
}

/// Logical DNS message, either an outgoing query or a decoded response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,

    pub id: u16,

    pub opcode: u8,

    pub flags: HeaderFlags,

    pub rcode: u16,

    pub questions: Vec<Question>,

    pub answers: Vec<ResourceRecord>,

    pub authorities: Vec<ResourceRecord>,

    pub additionals: Vec<ResourceRecord>,
}

impl DnsMessage {
    pub fn is_query(&self) -> bool {
        self.message_type == MessageType::Query
    }

    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn addresses(&self) -> Vec<IpAddr> {
        self.answers.iter().filter_map(|r| r.address()).collect()
    }

    pub fn min_ttl(&self) -> Option<u32> {
        self.answers.iter().map(|r| r.ttl).min()
    }

    pub fn cname(&self) -> Option<&str> {
        self.answers.iter().find_map(|r| match (&r.rtype, &r.data) {
            (RecordType::CNAME, RecordData::Name { target }) => Some(target.as_str()),
            _ => None,
        })
    }

    pub fn is_nodata(&self) -> bool {
        self.rcode == RCODE_NOERROR && self.answers.is_empty()
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == RCODE_NXDOMAIN
    }

    pub fn is_server_error(&self) -> bool {
        matches!(self.rcode, RCODE_SERVFAIL | RCODE_REFUSED | RCODE_NOTIMP)
    }

    pub fn status(&self) -> &'static str {
        match self.rcode {
            RCODE_NOERROR => "NOERROR",
            RCODE_FORMERR => "FORMERR",
            RCODE_SERVFAIL => "SERVFAIL",
            RCODE_NXDOMAIN => "NXDOMAIN",
            RCODE_NOTIMP => "NOTIMP",
            RCODE_REFUSED => "REFUSED",
            _ => "UNKNOWN",
        }
    }
}
