//! REST adapter tests against a canned single-request responder.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

use agenda_core::{Contact, ContactDraft, RecordStore, RestConfig, RestStore, StoreError};

struct CannedServer {
    base_url: String,
    request: JoinHandle<String>,
}

/// Serves exactly one HTTP exchange and returns the raw request for
/// inspection.
fn serve_once(status: &'static str, body: &'static str) -> CannedServer {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let request = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let request = read_full_request(&mut stream);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
        request
    });
    CannedServer {
        base_url: format!("http://{addr}"),
        request,
    }
}

/// Reads headers plus `Content-Length` bytes of body before responding.
fn read_full_request(stream: &mut TcpStream) -> String {
    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);
        if let Some(header_end) = raw.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&raw[..header_end]);
            let body_len = content_length(&headers);
            if raw.len() >= header_end + 4 + body_len {
                break;
            }
        }
    }
    String::from_utf8_lossy(&raw).to_string()
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn store_for(server: &CannedServer) -> RestStore {
    RestStore::new(RestConfig {
        base_url: server.base_url.clone(),
    })
}

#[test]
fn list_issues_get_and_parses_records() {
    let server = serve_once(
        "200 OK",
        r#"[{"id":1,"name":"Ana","phone":"+551199999999999","email":"ana@x.com"}]"#,
    );
    let mut store = store_for(&server);

    let contacts: Vec<Contact> = RecordStore::list(&mut store).unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Ana");

    let request = server.request.join().unwrap();
    assert!(request.starts_with("GET /contacts HTTP/1.1"), "{request}");
}

#[test]
fn non_success_status_maps_to_status_error() {
    let server = serve_once("500 Internal Server Error", "{}");
    let mut store = store_for(&server);

    let result: Result<Vec<Contact>, _> = RecordStore::list(&mut store);
    assert!(matches!(
        result.unwrap_err(),
        StoreError::Status { status: 500 }
    ));
}

#[test]
fn undecodable_payload_maps_to_decode_error() {
    let server = serve_once("200 OK", "definitely not json");
    let mut store = store_for(&server);

    let result: Result<Vec<Contact>, _> = RecordStore::list(&mut store);
    assert!(matches!(result.unwrap_err(), StoreError::Decode(_)));
}

#[test]
fn create_posts_json_with_content_type_header() {
    let server = serve_once(
        "201 Created",
        r#"{"id":7,"name":"Ana","phone":"+551199999999999","email":"ana@x.com"}"#,
    );
    let mut store = store_for(&server);

    let draft = ContactDraft::new("Ana", "+551199999999999", "ana@x.com");
    let created: Contact = RecordStore::create(&mut store, &draft).unwrap();
    assert_eq!(created.id, 7);

    let request = server.request.join().unwrap();
    assert!(request.starts_with("POST /contacts HTTP/1.1"), "{request}");
    assert!(
        request.to_lowercase().contains("content-type: application/json"),
        "{request}"
    );
    assert!(request.contains(r#""name":"Ana""#), "{request}");
}

#[test]
fn update_puts_the_full_record_to_the_record_path() {
    let server = serve_once("200 OK", "{}");
    let mut store = store_for(&server);

    let draft = ContactDraft::new("Ana", "+551199999999999", "ana@x.com");
    RecordStore::<Contact>::update(&mut store, 3, &draft).unwrap();

    let request = server.request.join().unwrap();
    assert!(request.starts_with("PUT /contacts/3 HTTP/1.1"), "{request}");
    assert!(request.contains(r#""id":3"#), "{request}");
}

#[test]
fn delete_targets_the_record_path() {
    let server = serve_once("200 OK", "{}");
    let mut store = store_for(&server);

    RecordStore::<Contact>::delete(&mut store, 5).unwrap();

    let request = server.request.join().unwrap();
    assert!(request.starts_with("DELETE /contacts/5 HTTP/1.1"), "{request}");
}

#[test]
fn connection_refused_maps_to_network_error() {
    // Bind then drop to get an address with nothing listening.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut store = RestStore::new(RestConfig {
        base_url: format!("http://{addr}"),
    });
    let result: Result<Vec<Contact>, _> = RecordStore::list(&mut store);
    assert!(matches!(result.unwrap_err(), StoreError::Network(_)));
}
