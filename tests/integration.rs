//! Integration tests for exword.
//!
//! These drive a full session against the mock transport and engine.

use bytes::Bytes;
use exword::codec::FilenameCodec;
use exword::protocol::{
    codes, setpath_flags, Command, Header, HeaderId, PseudoCommand, Response, ResponseKind,
    Status, FINAL_BIT,
};
use exword::transport::mock::{MockDevice, MockEngine, MockTransport};
use exword::{ExwordError, Session, SessionConfig};

const OK: Status = Status::new(codes::SUCCESS | FINAL_BIT);

fn open(responses: Vec<Response>) -> Session<MockDevice, MockEngine> {
    let mut transport = MockTransport::new(vec![
        MockDevice::new(0x07cf, 0x6101).with_strings("CASIO", "EX-word")
    ]);
    Session::open(&mut transport, SessionConfig::default(), move |_, _| {
        let mut engine = MockEngine::new();
        for r in responses {
            engine.push_response(r);
        }
        Ok(engine)
    })
    .unwrap()
}

/// Model query decodes the overlapping 15 + 6 byte layout.
#[test]
fn test_get_model_end_to_end() {
    let mut session = open(vec![Response::new(OK)
        .with_header(Header::Length(20))
        .with_header(Header::Body(Bytes::from_static(b"CASIO-EX-WORD  ENGv1")))]);

    let model = session.get_model().unwrap();
    assert_eq!(&model.model, b"CASIO-EX-WORD  ");
    assert_eq!(&model.sub_model, b" ENGv1");

    let req = session.engine().last_request().unwrap();
    assert_eq!(req.command(), Command::Get);
    match req.header(HeaderId::Name) {
        Some(Header::Name(name)) => {
            assert_eq!(name.len(), 14);
            assert_eq!(&name[..], PseudoCommand::Model.wire_name());
        }
        other => panic!("unexpected header: {:?}", other),
    }
}

/// Fetching the model pseudo-file by name returns the raw 20-byte record.
#[test]
fn test_get_file_model_pseudo_name() {
    let mut session = open(vec![Response::new(OK)
        .with_header(Header::Length(20))
        .with_header(Header::Body(Bytes::from_static(b"CASIO-EX-WORD  ENGv1")))]);

    let raw = session.get_file("_Model").unwrap();
    assert_eq!(raw.len(), 20);
    let model = exword::codec::decode_model(&raw).unwrap();
    assert_eq!(model.model_str(), "CASIO-EX-WORD  ");

    let req = session.engine().last_request().unwrap();
    assert_eq!(
        req.header(HeaderId::Name),
        Some(&Header::Name(Bytes::from_static(PseudoCommand::Model.wire_name())))
    );
}

/// Typical session: connect, browse, upload, delete, disconnect.
#[test]
fn test_full_session_flow() {
    let listing: &[u8] = &[0, 1, 0, 9, 0, b'A', b'.', b'T', b'X', b'T', 0];
    let mut session = open(vec![
        Response::new(OK),
        Response::new(OK),
        Response::new(OK).with_header(Header::Body(Bytes::from_static(listing))),
        Response::new(OK),
        Response::new(OK),
        Response::new(OK),
    ]);

    assert_eq!(session.identity().manufacturer, "CASIO");
    session.connect().unwrap();
    session.set_path("DICT", setpath_flags::NO_CREATE).unwrap();

    let entries = session.list_directory().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name(), b"A.TXT");
    assert_eq!(entries[0].size, 9);

    session.send_file("B.TXT", vec![1u8, 2, 3]).unwrap();
    session.remove_file("A.TXT").unwrap();
    session.disconnect().unwrap();

    let commands: Vec<_> = session
        .engine()
        .requests()
        .iter()
        .map(|r| r.command())
        .collect();
    assert_eq!(
        commands,
        vec![
            Command::Connect,
            Command::SetPath,
            Command::Get,
            Command::Put,
            Command::Put,
            Command::Disconnect,
        ]
    );

    let upload = &session.engine().requests()[3];
    assert_eq!(
        upload.header(HeaderId::Name),
        Some(&Header::Name(FilenameCodec::encode(b"B.TXT")))
    );
    assert_eq!(upload.header(HeaderId::Length), Some(&Header::Length(3)));
    session.close();
}

/// `remove_file` sends the plain filename, not its unicode form.
#[test]
fn test_remove_file_wire_shape() {
    let mut session = open(vec![]);
    session.remove_file("TEST.TXT").unwrap();

    let req = session.engine().last_request().unwrap();
    assert_eq!(
        req.headers(),
        &[
            Header::Name(Bytes::from_static(PseudoCommand::Remove.wire_name())),
            Header::Length(9),
            Header::Body(Bytes::from_static(b"TEST.TXT\0")),
        ]
    );
}

/// Root and relative SETPATH differ only in the NAME header.
#[test]
fn test_set_path_root_vs_relative() {
    let mut session = open(vec![]);
    session.set_path("", 0).unwrap();
    session.set_path("DICT", 0).unwrap();

    let requests = session.engine().requests();
    assert_eq!(requests[0].header(HeaderId::Name).map(Header::value_len), Some(0));
    assert_eq!(requests[1].header(HeaderId::Name).map(Header::value_len), Some(10));
    assert_eq!(requests[1].non_header_data(), Some(&[0u8, 0u8][..]));
}

/// Device refusals surface as classified status errors, not panics.
#[test]
fn test_protocol_failure_classified() {
    let mut session = open(vec![
        Response::new(Status::new(0xC0)),
        Response::new(Status::new(codes::DATABASE_FULL | FINAL_BIT)),
    ]);

    let err = session.get_capacity().unwrap_err();
    let status = err.status().unwrap();
    assert_eq!(status.kind(), ResponseKind::BadRequest);
    assert!(!status.is_success());

    let err = session.send_file("BIG.BIN", vec![0u8; 64]).unwrap_err();
    assert_eq!(err.status().map(Status::kind), Some(ResponseKind::DatabaseFull));
}

/// A truncated listing is a decode failure, distinct from a status failure.
#[test]
fn test_malformed_listing_is_decode_error() {
    let listing: &[u8] = &[0, 2, 0, 5, 0, b'A', 0, 0, 9, 0];
    let mut session = open(vec![
        Response::new(OK).with_header(Header::Body(Bytes::from_static(listing)))
    ]);

    let err = session.list_directory().unwrap_err();
    assert!(matches!(err, ExwordError::Decode(_)));
    assert!(err.status().is_none());
}

#[test]
fn test_session_from_json_config() {
    let config = SessionConfig::from_json(r#"{"vendor_id": 4660, "product_id": 22136}"#).unwrap();
    let mut transport = MockTransport::new(vec![
        MockDevice::new(0x07cf, 0x6101),
        MockDevice::new(0x1234, 0x5678),
    ]);
    let session = Session::open(&mut transport, config, |_, _| Ok(MockEngine::new())).unwrap();
    assert_eq!(session.vendor_id(), 0x1234);
    assert_eq!(session.product_id(), 0x5678);

    let json = serde_json::to_value(session.identity()).unwrap();
    assert_eq!(json["vendor_id"], 0x1234);
}
