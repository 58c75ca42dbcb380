// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

/// In-memory sink used to exercise the trait without touching stdout
#[derive(Default)]
struct BufferResponse {
    headers: Headers,
    status: Option<u16>,
    body: Vec<u8>,
}

impl ResponseSink for BufferResponse {
    fn header(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn write_header(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write(&mut self, body: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(body);
        Ok(body.len())
    }
}

fn respond_json(sink: &mut impl ResponseSink) {
    sink.header()
        .entry("Content-Type".to_string())
        .or_default()
        .push("application/json".to_string());
    sink.write_header(200);
    sink.write(br#"{"status":"ok"}"#).unwrap();
}

#[test]
fn test_stdout_response_starts_empty() {
    let response = StdoutResponse::new();
    assert!(response.headers().is_empty());
    assert_eq!(response.status(), None);
}

#[test]
fn test_stdout_response_records_status_and_headers() {
    let mut response = StdoutResponse::new();
    response
        .header()
        .insert("X-Request-Id".to_string(), vec!["abc".to_string()]);
    response.write_header(404);
    response.write_header(500);

    assert_eq!(response.status(), Some(500));
    assert_eq!(response.headers()["X-Request-Id"], vec!["abc".to_string()]);
}

#[test]
fn test_handler_generic_over_sink() {
    let mut response = BufferResponse::default();
    respond_json(&mut response);

    assert_eq!(response.status, Some(200));
    assert_eq!(response.body, br#"{"status":"ok"}"#);
    assert_eq!(
        response.headers["Content-Type"],
        vec!["application/json".to_string()]
    );
}

#[test]
fn test_mut_ref_forwards() {
    let mut response = BufferResponse::default();
    {
        let mut by_ref = &mut response;
        respond_json(&mut by_ref);
    }
    assert_eq!(response.status, Some(200));
}
