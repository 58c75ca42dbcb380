// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Calling handlers under capture.

use handler_capture::{capture_with, CaptureError, CaptureOptions};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::context::TestContext;

/// Errors from [`call_api`] and [`CapturedResponse`] decoding
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Capture failed: {0}")]
    Capture(#[from] CaptureError),

    #[error("Response body is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// What a handler produced: the status it set and the body it wrote
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapturedResponse {
    pub status: Option<u16>,
    pub body: Vec<u8>,
}

impl CapturedResponse {
    /// Body as UTF-8 text
    pub fn text(&self) -> Result<&str, ApiError> {
        Ok(std::str::from_utf8(&self.body)?)
    }

    /// Body decoded as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Run `handler` against `ctx`, capturing everything it writes to stdout.
///
/// The context stays with the caller so headers and status can be checked
/// afterwards as well.
pub fn call_api<F>(handler: F, ctx: &mut TestContext) -> Result<CapturedResponse, ApiError>
where
    F: FnOnce(&mut TestContext),
{
    call_api_with(&CaptureOptions::default(), handler, ctx)
}

/// [`call_api`] with explicit capture options.
pub fn call_api_with<F>(
    options: &CaptureOptions,
    handler: F,
    ctx: &mut TestContext,
) -> Result<CapturedResponse, ApiError>
where
    F: FnOnce(&mut TestContext),
{
    let body = capture_with(options, handler, &mut *ctx)?;
    Ok(CapturedResponse {
        status: ctx.response().status(),
        body,
    })
}

#[cfg(test)]
#[path = "api_tests.rs"]
mod tests;
