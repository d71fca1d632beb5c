use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// DNS RR TYPE.
///
/// Well-known types get a named variant; anything else is carried as
/// `Unknown(code)` so that every type can still be queried and decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    A,
    NS,
    CNAME,
    SOA,
    NULL,
    PTR,
    HINFO,
    MX,
    TXT,
    AAAA,
    SRV,
    NAPTR,
    DNAME,
    OPT,
    DS,
    SSHFP,
    RRSIG,
    NSEC,
    DNSKEY,
    NSEC3,
    NSEC3PARAM,
    TLSA,
    CDS,
    CDNSKEY,
    OPENPGPKEY,
    SVCB,
    HTTPS,
    ANY,
    CAA,
    Unknown(u16),
}

const KNOWN: &[(RecordType, &str, u16)] = &[
    (RecordType::A, "A", 1),
    (RecordType::NS, "NS", 2),
    (RecordType::CNAME, "CNAME", 5),
    (RecordType::SOA, "SOA", 6),
    (RecordType::NULL, "NULL", 10),
    (RecordType::PTR, "PTR", 12),
    (RecordType::HINFO, "HINFO", 13),
    (RecordType::MX, "MX", 15),
    (RecordType::TXT, "TXT", 16),
    (RecordType::AAAA, "AAAA", 28),
    (RecordType::SRV, "SRV", 33),
    (RecordType::NAPTR, "NAPTR", 35),
    (RecordType::DNAME, "DNAME", 39),
    (RecordType::OPT, "OPT", 41),
    (RecordType::DS, "DS", 43),
    (RecordType::SSHFP, "SSHFP", 44),
    (RecordType::RRSIG, "RRSIG", 46),
    (RecordType::NSEC, "NSEC", 47),
    (RecordType::DNSKEY, "DNSKEY", 48),
    (RecordType::NSEC3, "NSEC3", 50),
    (RecordType::NSEC3PARAM, "NSEC3PARAM", 51),
    (RecordType::TLSA, "TLSA", 52),
    (RecordType::CDS, "CDS", 59),
    (RecordType::CDNSKEY, "CDNSKEY", 60),
    (RecordType::OPENPGPKEY, "OPENPGPKEY", 61),
    (RecordType::SVCB, "SVCB", 64),
    (RecordType::HTTPS, "HTTPS", 65),
    (RecordType::ANY, "ANY", 255),
    (RecordType::CAA, "CAA", 257),
];

impl RecordType {
    /// Mnemonic for well-known types, `None` for `Unknown`.
    pub fn mnemonic(&self) -> Option<&'static str> {
        KNOWN
            .iter()
            .find(|(rt, _, _)| rt == self)
            .map(|(_, name, _)| *name)
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::Unknown(code) => *code,
            known => KNOWN
                .iter()
                .find(|(rt, _, _)| rt == known)
                .map(|(_, _, code)| *code)
                .unwrap_or_default(),
        }
    }

    /// Never fails: unassigned codes map to `Unknown`.
    pub fn from_u16(code: u16) -> Self {
        KNOWN
            .iter()
            .find(|(_, _, c)| *c == code)
            .map(|(rt, _, _)| *rt)
            .unwrap_or(RecordType::Unknown(code))
    }

    pub fn is_address(&self) -> bool {
        matches!(self, RecordType::A | RecordType::AAAA)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mnemonic() {
            Some(name) => f.write_str(name),
            None => write!(f, "TYPE{}", self.to_u16()),
        }
    }
}

impl Serialize for RecordType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for RecordType {
    type Err = String;

    /// Accepts mnemonics in any case and the RFC 3597 `TYPEnnn` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();

        if let Some((rt, _, _)) = KNOWN.iter().find(|(_, name, _)| *name == upper) {
            return Ok(*rt);
        }

        upper
            .strip_prefix("TYPE")
            .and_then(|code| code.parse::<u16>().ok())
            .map(RecordType::from_u16)
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_for_known_types() {
        for (rt, _, code) in KNOWN {
            assert_eq!(rt.to_u16(), *code);
            assert_eq!(RecordType::from_u16(*code), *rt);
        }
    }

    #[test]
    fn test_generic_type_syntax() {
        assert_eq!("TYPE1".parse::<RecordType>().unwrap(), RecordType::A);
        assert_eq!(
            "type65280".parse::<RecordType>().unwrap(),
            RecordType::Unknown(65280)
        );
        assert_eq!(RecordType::Unknown(65280).to_string(), "TYPE65280");
    }
}
