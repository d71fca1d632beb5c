use ferrous_doh_domain::{DohError, MessageType, Question, RecordType};
use ferrous_doh_infrastructure::dns::forwarding::{make_query, MessageBuilder, ResponseParser};

mod helpers;
use helpers::EXAMPLE_A_QUERY;

#[test]
fn test_example_a_query_wire_bytes() {
    let bytes = MessageBuilder::to_wire(&make_query("example.com", RecordType::A)).unwrap();
    assert_eq!(bytes, EXAMPLE_A_QUERY);
}

#[test]
fn test_query_round_trips_through_decoder() {
    let cases = [
        ("example.com", RecordType::A),
        ("example.com", RecordType::AAAA),
        ("mail.example.org", RecordType::MX),
        ("_sip._tcp.example.net", RecordType::SRV),
        ("example.com", RecordType::TXT),
        ("example.com", RecordType::HTTPS),
        ("34.216.184.93.in-addr.arpa", RecordType::PTR),
        ("example.com", RecordType::Unknown(65280)),
    ];

    for (name, rtype) in cases {
        let bytes = MessageBuilder::to_wire(&make_query(name, rtype)).unwrap();
        let decoded = ResponseParser::parse(&bytes).unwrap();

        assert_eq!(decoded.message_type, MessageType::Query);
        assert_eq!(decoded.id, 0, "ID must be 0 for {}", name);
        assert!(decoded.flags.recursion_desired, "RD missing for {}", name);
        assert_eq!(decoded.questions, vec![Question::new(name, rtype)]);
        assert!(decoded.answers.is_empty());
    }
}

#[test]
fn test_fqdn_input_decodes_without_root_dot() {
    let bytes = MessageBuilder::to_wire(&make_query("example.com.", RecordType::A)).unwrap();
    let decoded = ResponseParser::parse(&bytes).unwrap();
    assert_eq!(decoded.questions[0].name, "example.com");
}

#[test]
fn test_builder_accepts_what_the_encoder_rejects() {
    let long_label = format!("{}.com", "a".repeat(64));
    let message = make_query(&long_label, RecordType::A);

    assert_eq!(message.questions[0].name, long_label);
    assert!(matches!(
        MessageBuilder::to_wire(&message),
        Err(DohError::Encoding(_))
    ));
}

#[test]
fn test_name_too_long_is_encoding_error() {
    let name = vec!["abcdefghij"; 25].join(".");
    let result = MessageBuilder::to_wire(&make_query(&name, RecordType::A));
    assert!(matches!(result, Err(DohError::Encoding(_))));
}

#[test]
fn test_empty_name_is_encoding_error() {
    let result = MessageBuilder::to_wire(&make_query("", RecordType::A));
    assert!(matches!(result, Err(DohError::Encoding(_))));
}
