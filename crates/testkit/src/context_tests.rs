// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use yare::parameterized;

#[parameterized(
    single = { "netid=jdoe", "netid", Some("jdoe") },
    second_pair = { "a=1&netid=jdoe", "netid", Some("jdoe") },
    first_wins = { "id=1&id=2", "id", Some("1") },
    plus_is_space = { "name=Jane+Doe", "name", Some("Jane Doe") },
    flag_without_value = { "verbose&x=1", "verbose", Some("") },
    empty_value = { "q=", "q", Some("") },
    missing = { "a=1", "b", None },
    empty_query = { "", "a", None },
    stray_ampersands = { "&&a=1&", "a", Some("1") },
)]
fn query_value_lookup(query: &str, key: &str, expected: Option<&str>) {
    let ctx = TestContext::new(query, Params::new());
    assert_eq!(ctx.query_value(key).as_deref(), expected);
}

#[test]
fn test_new_context_defaults() {
    let ctx = TestContext::new("a=1", Params::new().with("id", "7"));
    assert_eq!(ctx.query(), "a=1");
    assert_eq!(ctx.params().by_name("id"), Some("7"));
    assert_eq!(ctx.response().status(), None);
}

#[test]
fn test_response_mut_records_status() {
    let mut ctx = TestContext::new("", Params::new());
    ctx.response_mut().write_header(201);
    assert_eq!(ctx.response().status(), Some(201));
}
