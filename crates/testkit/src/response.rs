// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Response sinks handlers write into.

use std::collections::BTreeMap;
use std::io::{self, Write};

/// Response header map, each name holding every value set for it
pub type Headers = BTreeMap<String, Vec<String>>;

/// What a handler needs from a response: headers, a status, a body.
pub trait ResponseSink {
    /// Mutable access to the response headers
    fn header(&mut self) -> &mut Headers;

    /// Record the response status code
    fn write_header(&mut self, status: u16);

    /// Write body bytes, returning how many were accepted
    fn write(&mut self, body: &[u8]) -> io::Result<usize>;
}

impl<R: ResponseSink + ?Sized> ResponseSink for &mut R {
    fn header(&mut self) -> &mut Headers {
        (**self).header()
    }

    fn write_header(&mut self, status: u16) {
        (**self).write_header(status)
    }

    fn write(&mut self, body: &[u8]) -> io::Result<usize> {
        (**self).write(body)
    }
}

/// Response whose body goes straight to the process stdout.
///
/// Headers and status stay in memory; only the body is observable through
/// a stdout capture.
#[derive(Clone, Debug, Default)]
pub struct StdoutResponse {
    headers: Headers,
    status: Option<u16>,
}

impl StdoutResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status recorded by `write_header`, if any
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

impl ResponseSink for StdoutResponse {
    fn header(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn write_header(&mut self, status: u16) {
        self.status = Some(status);
    }

    fn write(&mut self, body: &[u8]) -> io::Result<usize> {
        // Not `print!`: libtest intercepts the print macros before fd 1
        let mut stdout = io::stdout().lock();
        stdout.write_all(body)?;
        stdout.flush()?;
        Ok(body.len())
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
