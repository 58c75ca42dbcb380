// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use nix::errno::Errno;
use std::io::ErrorKind;
use yare::parameterized;

#[parameterized(
    restore = { CaptureError::Restore(Errno::EBADF), true },
    flush = { CaptureError::Flush(std::io::Error::from(ErrorKind::BrokenPipe)), false },
    redirect = { CaptureError::Redirect(Errno::EBADF), false },
)]
fn pipe_left_open_only_when_dup2_failed(err: CaptureError, expected: bool) {
    assert_eq!(pipe_left_open(&err), expected);
}

#[test]
fn test_restore_without_redirect_keeps_pump() {
    let (read_end, write_end) = nix::unistd::pipe().unwrap();
    let pump = DrainPump::start(read_end, &CaptureOptions::default()).unwrap();
    let mut session = CaptureSession {
        redirect: None,
        pump: Some(pump),
    };

    session.restore().unwrap();
    assert!(session.pump.is_some());

    drop(write_end);
    assert_eq!(session.finish().unwrap(), Vec::<u8>::new());
}
