// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Substitution of the process-wide stdout descriptor.
//!
//! Redirection happens at the file descriptor level: fd 1 is duplicated
//! aside, then overwritten with the target. Anything that writes to fd 1,
//! `std::io::stdout()` included, follows the substitution without knowing
//! about it. The saved descriptor is duplicated back when the guard ends
//! or is dropped.

use std::io::{self, Write};
use std::os::fd::{AsFd, AsRawFd, OwnedFd, RawFd};

use nix::unistd::dup2;

use crate::error::{CaptureError, Result};

/// Guard holding fd 1 substituted until `end` or drop
#[derive(Debug)]
pub struct StdoutRedirect {
    original: Option<OwnedFd>,
}

impl StdoutRedirect {
    /// Point fd 1 at the write end of a fresh pipe.
    ///
    /// Returns the guard and the pipe's read end. The guard keeps no copy of
    /// the write end, so fd 1 is its only writer; restoring fd 1 is what
    /// delivers end-of-stream to the reader.
    pub fn begin() -> Result<(Self, OwnedFd)> {
        let (read_end, write_end) = cloexec_pipe().map_err(CaptureError::Pipe)?;
        let redirect = Self::to_fd(&write_end)?;
        drop(write_end);
        Ok((redirect, read_end))
    }

    /// Point fd 1 at `target` until the guard ends.
    ///
    /// The caller may close `target` afterwards; fd 1 keeps its own
    /// reference.
    pub fn to_fd<F: AsFd>(target: F) -> Result<Self> {
        let original = io::stdout()
            .as_fd()
            .try_clone_to_owned()
            .map_err(CaptureError::SaveStream)?;
        io::stdout().flush().map_err(CaptureError::Flush)?;
        dup2(target.as_fd().as_raw_fd(), stdout_fd()).map_err(CaptureError::Redirect)?;
        Ok(Self {
            original: Some(original),
        })
    }

    /// Restore the saved fd 1.
    ///
    /// Bytes still sitting in the `std::io::stdout()` buffer are flushed to
    /// the substitute first.
    pub fn end(mut self) -> Result<()> {
        self.restore()
    }

    fn restore(&mut self) -> Result<()> {
        let Some(original) = self.original.take() else {
            return Ok(());
        };
        let flushed = io::stdout().flush().map_err(CaptureError::Flush);
        dup2(original.as_raw_fd(), stdout_fd()).map_err(CaptureError::Restore)?;
        flushed
    }
}

impl Drop for StdoutRedirect {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            log::warn!("stdout restore on drop failed: {}", e);
        }
    }
}

/// Pipe whose ends are not inherited by processes the handler spawns.
///
/// `dup2` clears the flag on the fd 1 copy, so children still share stdout.
#[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
pub(crate) fn cloexec_pipe() -> nix::Result<(OwnedFd, OwnedFd)> {
    nix::unistd::pipe2(nix::fcntl::OFlag::O_CLOEXEC)
}

#[cfg(not(any(target_os = "linux", target_os = "android", target_os = "freebsd")))]
pub(crate) fn cloexec_pipe() -> nix::Result<(OwnedFd, OwnedFd)> {
    use nix::fcntl::{fcntl, FcntlArg, FdFlag};

    let (read_end, write_end) = nix::unistd::pipe()?;
    for fd in [&read_end, &write_end] {
        fcntl(fd.as_raw_fd(), FcntlArg::F_SETFD(FdFlag::FD_CLOEXEC))?;
    }
    Ok((read_end, write_end))
}

fn stdout_fd() -> RawFd {
    io::stdout().as_raw_fd()
}

#[cfg(test)]
#[path = "redirect_tests.rs"]
mod tests;
