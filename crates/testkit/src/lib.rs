// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Mock request context and response sink for testing handlers that
//! write their response to stdout.
//!
//! Handlers are written against [`TestContext`] and its [`ResponseSink`];
//! [`call_api`] runs one inside a `handler_capture` session and returns the
//! body it wrote.

mod api;
mod context;
mod params;
mod response;

pub use api::{call_api, call_api_with, ApiError, CapturedResponse};
pub use context::TestContext;
pub use params::{Param, Params};
pub use response::{Headers, ResponseSink, StdoutResponse};
