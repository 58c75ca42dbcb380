// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use nix::fcntl::{fcntl, FcntlArg, FdFlag};
use std::fs::File;
use std::io::Read;

fn is_cloexec(fd: &OwnedFd) -> bool {
    let bits = fcntl(fd.as_raw_fd(), FcntlArg::F_GETFD).unwrap();
    FdFlag::from_bits_truncate(bits).contains(FdFlag::FD_CLOEXEC)
}

#[test]
fn test_pipe_ends_close_on_exec() {
    let (read_end, write_end) = cloexec_pipe().unwrap();
    assert!(is_cloexec(&read_end));
    assert!(is_cloexec(&write_end));
}

#[test]
fn test_cloexec_pipe_carries_bytes() {
    let (read_end, write_end) = cloexec_pipe().unwrap();
    let mut writer = File::from(write_end);
    writer.write_all(b"through").unwrap();
    drop(writer);

    let mut out = String::new();
    File::from(read_end).read_to_string(&mut out).unwrap();
    assert_eq!(out, "through");
}
