#![allow(dead_code)]
use async_trait::async_trait;
use bytes::Bytes;
use ferrous_doh_domain::DohError;
use ferrous_doh_infrastructure::dns::{HttpExchange, HttpRequestSpec};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::rdata::{MX, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record, RecordType};
use hickory_proto::serialize::binary::BinEncodable;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const EXAMPLE_ADDR: [u8; 4] = [93, 184, 216, 34];

/// Wire bytes of the `example.com`/`A` query with ID 0 and RD set.
pub const EXAMPLE_A_QUERY: &[u8] = &[
    0x00, 0x00, // ID
    0x01, 0x00, // RD
    0x00, 0x01, // QDCOUNT
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // AN/NS/AR
    0x07, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 0x03, b'c', b'o', b'm', 0x00, // example.com
    0x00, 0x01, // A
    0x00, 0x01, // IN
];

pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Canned answer to `EXAMPLE_A_QUERY`: one A record, TTL 60, compressed owner.
    pub fn example_a() -> Vec<u8> {
        let mut response = Vec::with_capacity(64);

        response.extend_from_slice(&[0x00, 0x00]);
        response.push(0x81);
        response.push(0x80);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00]);
        response.extend_from_slice(&[0x00, 0x00]);

        response.extend_from_slice(&EXAMPLE_A_QUERY[12..]);

        response.extend_from_slice(&[
            0xc0, 0x0c, // pointer to example.com
            0x00, 0x01, // A
            0x00, 0x01, // IN
            0x00, 0x00, 0x00, 0x3c, // 60
            0x00, 0x04,
        ]);
        response.extend_from_slice(&EXAMPLE_ADDR);

        response
    }

    /// `example_a` plus an answer of unassigned type 65280 with RDATA 01 02 03.
    pub fn example_with_unknown_type() -> Vec<u8> {
        let mut response = Self::example_a();
        response[7] = 0x02;
        response.extend_from_slice(&[
            0xc0, 0x0c, 0xff, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x3c, 0x00, 0x03, 0x01, 0x02,
            0x03,
        ]);
        response
    }

    /// MX and TXT answers with an SOA in the authority section.
    pub fn mixed_records() -> Vec<u8> {
        let name = Name::from_str("example.com.").unwrap();

        let mut message = Message::new(0, MessageType::Response, OpCode::Query);
        message.set_recursion_desired(true);
        message.set_recursion_available(true);
        message.add_query(Query::query(name.clone(), RecordType::MX));
        message.add_answer(Record::from_rdata(
            name.clone(),
            300,
            RData::MX(MX::new(10, Name::from_str("mail.example.com.").unwrap())),
        ));
        message.add_answer(Record::from_rdata(
            name.clone(),
            120,
            RData::TXT(TXT::new(vec!["v=spf1 -all".to_string()])),
        ));
        message.add_name_server(Record::from_rdata(
            name,
            3600,
            RData::SOA(SOA::new(
                Name::from_str("ns1.example.com.").unwrap(),
                Name::from_str("hostmaster.example.com.").unwrap(),
                2024010101,
                3600,
                900,
                604800,
                300,
            )),
        ));

        message.to_vec().unwrap()
    }
}

/// [`HttpExchange`] stub that records every request and replays one result.
pub struct RecordingExchange {
    calls: AtomicUsize,
    requests: Mutex<Vec<HttpRequestSpec>>,
    result: Result<Bytes, DohError>,
}

impl RecordingExchange {
    pub fn responding(body: Vec<u8>) -> Self {
        Self::with_result(Ok(Bytes::from(body)))
    }

    pub fn failing(error: DohError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(result: Result<Bytes, DohError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            result,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<HttpRequestSpec> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpExchange for RecordingExchange {
    async fn exchange(&self, request: HttpRequestSpec) -> Result<Bytes, DohError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        self.result.clone()
    }
}
