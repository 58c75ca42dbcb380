// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Testing context handed to handlers under test.

use crate::params::Params;
use crate::response::{ResponseSink, StdoutResponse};

/// Request data plus the response sink a handler writes to
#[derive(Clone, Debug, Default)]
pub struct TestContext<R = StdoutResponse> {
    query: String,
    params: Params,
    response: R,
}

impl TestContext<StdoutResponse> {
    /// Context for `query` (raw, without the leading `?`) and `params`,
    /// responding on stdout.
    pub fn new(query: impl Into<String>, params: Params) -> Self {
        Self::with_response(query, params, StdoutResponse::new())
    }
}

impl<R: ResponseSink> TestContext<R> {
    pub fn with_response(query: impl Into<String>, params: Params, response: R) -> Self {
        Self {
            query: query.into(),
            params,
            response,
        }
    }

    /// Raw query string
    pub fn query(&self) -> &str {
        &self.query
    }

    /// First value for `key` in the query string.
    ///
    /// `+` decodes to a space; other escapes are left as written.
    pub fn query_value(&self, key: &str) -> Option<String> {
        self.query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
            .find(|(k, _)| k.replace('+', " ") == key)
            .map(|(_, v)| v.replace('+', " "))
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn response(&self) -> &R {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut R {
        &mut self.response
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
