use super::RecordType;
use serde::Serialize;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Resource record decoded from a response section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceRecord {
    pub name: String,

    #[serde(rename = "type")]
    pub rtype: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub data: RecordData,
}

/// Type-specific RDATA.
///
/// Types without a dedicated variant keep their raw RDATA bytes in
/// `Opaque`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RecordData {
    A {
        address: Ipv4Addr,
    },
    Aaaa {
        address: Ipv6Addr,
    },
    /// CNAME, NS, PTR and DNAME targets.
    Name {
        target: String,
    },
    Mx {
        preference: u16,
        exchange: String,
    },
    Txt {
        strings: Vec<String>,
    },
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: i32,
        retry: i32,
        expire: i32,
        minimum: u32,
    },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
    Opaque {
        bytes: Vec<u8>,
    },
}

impl ResourceRecord {
    pub fn address(&self) -> Option<IpAddr> {
        match &self.data {
            RecordData::A { address } => Some(IpAddr::V4(*address)),
            RecordData::Aaaa { address } => Some(IpAddr::V6(*address)),
            _ => None,
        }
    }
}
