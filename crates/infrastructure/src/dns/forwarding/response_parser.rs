use super::record_type_map::RecordTypeMapper;
use ferrous_doh_domain::{
    DnsMessage, DohError, HeaderFlags, MessageType, Question, RecordData, ResourceRecord,
};
use hickory_proto::op::{Message, MessageType as HickoryMessageType};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    /// Decode a complete DNS wire message.
    ///
    /// Fails as a whole: a body that does not decode never yields a
    /// partially populated message.
    pub fn parse(response_bytes: &[u8]) -> Result<DnsMessage, DohError> {
        let message = Message::from_vec(response_bytes)
            .map_err(|e| DohError::Decoding(format!("Failed to parse DNS response: {}", e)))?;

        let questions = message
            .queries()
            .iter()
            .map(|q| {
                Question::new(
                    presentation_name(q.name()),
                    RecordTypeMapper::from_hickory(q.query_type()),
                )
            })
            .collect();

        let answers = convert_section(message.answers())?;
        let authorities = convert_section(message.name_servers())?;
        let additionals = convert_section(message.additionals())?;

        let parsed = DnsMessage {
            message_type: match message.message_type() {
                HickoryMessageType::Query => MessageType::Query,
                HickoryMessageType::Response => MessageType::Response,
            },
            id: message.id(),
            opcode: u8::from(message.op_code()),
            flags: HeaderFlags {
                authoritative: message.authoritative(),
                truncated: message.truncated(),
                recursion_desired: message.recursion_desired(),
                recursion_available: message.recursion_available(),
                authentic_data: message.authentic_data(),
                checking_disabled: message.checking_disabled(),
            },
            rcode: u16::from(message.response_code()),
            questions,
            answers,
            authorities,
            additionals,
        };

        debug!(
            rcode = parsed.status(),
            answers = parsed.answers.len(),
            authority = parsed.authorities.len(),
            additional = parsed.additionals.len(),
            truncated = parsed.flags.truncated,
            "DNS response parsed"
        );

        Ok(parsed)
    }
}

fn convert_section(records: &[Record]) -> Result<Vec<ResourceRecord>, DohError> {
    records.iter().map(convert_record).collect()
}

fn convert_record(record: &Record) -> Result<ResourceRecord, DohError> {
    Ok(ResourceRecord {
        name: presentation_name(record.name()),
        rtype: RecordTypeMapper::from_hickory(record.record_type()),
        class: u16::from(record.dns_class()),
        ttl: record.ttl(),
        data: convert_rdata(record.data())?,
    })
}

fn convert_rdata(rdata: &RData) -> Result<RecordData, DohError> {
    let data = match rdata {
        RData::A(a) => RecordData::A { address: a.0 },
        RData::AAAA(aaaa) => RecordData::Aaaa { address: aaaa.0 },
        RData::CNAME(target) => RecordData::Name {
            target: presentation_name(&target.0),
        },
        RData::NS(target) => RecordData::Name {
            target: presentation_name(&target.0),
        },
        RData::PTR(target) => RecordData::Name {
            target: presentation_name(&target.0),
        },
        RData::MX(mx) => RecordData::Mx {
            preference: mx.preference(),
            exchange: presentation_name(mx.exchange()),
        },
        // Character-strings that are not UTF-8 keep the raw RDATA.
        RData::TXT(txt) => match txt
            .txt_data()
            .iter()
            .map(|s| String::from_utf8(s.to_vec()))
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(strings) => RecordData::Txt { strings },
            Err(_) => opaque(rdata)?,
        },
        RData::SOA(soa) => RecordData::Soa {
            mname: presentation_name(soa.mname()),
            rname: presentation_name(soa.rname()),
            serial: soa.serial(),
            refresh: soa.refresh(),
            retry: soa.retry(),
            expire: soa.expire(),
            minimum: soa.minimum(),
        },
        RData::SRV(srv) => RecordData::Srv {
            priority: srv.priority(),
            weight: srv.weight(),
            port: srv.port(),
            target: presentation_name(srv.target()),
        },
        other => opaque(other)?,
    };

    Ok(data)
}

fn opaque(rdata: &RData) -> Result<RecordData, DohError> {
    let bytes = rdata
        .to_bytes()
        .map_err(|e| DohError::Decoding(format!("Failed to re-encode RDATA: {}", e)))?;
    Ok(RecordData::Opaque { bytes })
}

/// Names are reported without the trailing root dot, except the root itself.
fn presentation_name(name: &Name) -> String {
    let text = name.to_utf8();
    match text.strip_suffix('.') {
        Some(relative) if !relative.is_empty() => relative.to_string(),
        _ => text,
    }
}
