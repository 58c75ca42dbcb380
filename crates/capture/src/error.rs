// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while setting up, draining or tearing down a capture.

use nix::errno::Errno;
use thiserror::Error;

/// Errors from a capture session
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Failed to create capture pipe: {0}")]
    Pipe(#[source] Errno),

    #[error("Failed to save original stdout: {0}")]
    SaveStream(#[source] std::io::Error),

    #[error("Failed to redirect stdout: {0}")]
    Redirect(#[source] Errno),

    #[error("Failed to restore stdout: {0}")]
    Restore(#[source] Errno),

    #[error("Failed to flush stdout: {0}")]
    Flush(#[source] std::io::Error),

    #[error("Failed to spawn drain thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Failed to read from capture pipe: {0}")]
    Read(#[source] std::io::Error),

    #[error("Drain thread exited without delivering output")]
    PumpLost,

    #[error("Invalid capture configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CaptureError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
