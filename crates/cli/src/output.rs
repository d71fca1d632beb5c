use ferrous_doh_domain::{DnsMessage, RecordData, ResourceRecord};
use std::fmt;

/// dig-style text rendering of a decoded response.
pub struct DigOutput<'a>(pub &'a DnsMessage);

impl fmt::Display for DigOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.0;

        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            opcode_name(message.opcode),
            message.status(),
            message.id
        )?;
        writeln!(
            f,
            ";; flags: {}; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            message.flags.mnemonics().join(" "),
            message.questions.len(),
            message.answers.len(),
            message.authorities.len(),
            message.additionals.len()
        )?;

        if !message.questions.is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for question in &message.questions {
                writeln!(f, ";{}\tIN\t{}", fqdn(&question.name), question.qtype)?;
            }
        }

        for (title, records) in [
            ("ANSWER", &message.answers),
            ("AUTHORITY", &message.authorities),
            ("ADDITIONAL", &message.additionals),
        ] {
            if records.is_empty() {
                continue;
            }
            writeln!(f, "\n;; {} SECTION:", title)?;
            for record in records {
                writeln!(f, "{}", render_record(record))?;
            }
        }

        Ok(())
    }
}

fn render_record(record: &ResourceRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        fqdn(&record.name),
        record.ttl,
        class_name(record.class),
        record.rtype,
        render_data(&record.data)
    )
}

fn render_data(data: &RecordData) -> String {
    match data {
        RecordData::A { address } => address.to_string(),
        RecordData::Aaaa { address } => address.to_string(),
        RecordData::Name { target } => fqdn(target),
        RecordData::Mx {
            preference,
            exchange,
        } => format!("{} {}", preference, fqdn(exchange)),
        RecordData::Txt { strings } => strings
            .iter()
            .map(|s| format!("\"{}\"", s.replace('"', "\\\"")))
            .collect::<Vec<_>>()
            .join(" "),
        RecordData::Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => format!(
            "{} {} {} {} {} {} {}",
            fqdn(mname),
            fqdn(rname),
            serial,
            refresh,
            retry,
            expire,
            minimum
        ),
        RecordData::Srv {
            priority,
            weight,
            port,
            target,
        } => format!("{} {} {} {}", priority, weight, port, fqdn(target)),
        // RFC 3597 generic form
        RecordData::Opaque { bytes } => {
            let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
            if hex.is_empty() {
                "\\# 0".to_string()
            } else {
                format!("\\# {} {}", bytes.len(), hex)
            }
        }
    }
}

fn fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

fn class_name(class: u16) -> String {
    match class {
        1 => "IN".to_string(),
        3 => "CH".to_string(),
        4 => "HS".to_string(),
        254 => "NONE".to_string(),
        255 => "ANY".to_string(),
        other => format!("CLASS{}", other),
    }
}

fn opcode_name(opcode: u8) -> String {
    match opcode {
        0 => "QUERY".to_string(),
        1 => "IQUERY".to_string(),
        2 => "STATUS".to_string(),
        4 => "NOTIFY".to_string(),
        5 => "UPDATE".to_string(),
        other => other.to_string(),
    }
}
