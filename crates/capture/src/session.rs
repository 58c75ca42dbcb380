// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One capture session: redirect, drain, restore.

use crate::drain::DrainPump;
use crate::error::{CaptureError, Result};
use crate::options::CaptureOptions;
use crate::redirect::StdoutRedirect;

/// Stdout captured into a pipe until `finish` or drop.
///
/// Sessions are not reentrant. Only one may be open in the process at a
/// time, and nothing here enforces that; see [`crate::exclusive`].
#[derive(Debug)]
pub struct CaptureSession {
    redirect: Option<StdoutRedirect>,
    pump: Option<DrainPump>,
}

impl CaptureSession {
    /// Install the pipe over fd 1 and start draining it.
    pub fn start(options: &CaptureOptions) -> Result<Self> {
        options.validate()?;
        let (redirect, read_end) = StdoutRedirect::begin()?;
        // Dropping `redirect` on a spawn failure restores fd 1
        let pump = DrainPump::start(read_end, options)?;
        log::debug!("stdout capture started");
        Ok(Self {
            redirect: Some(redirect),
            pump: Some(pump),
        })
    }

    /// Restore fd 1 and collect everything written since `start`.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let pump = self.close()?;
        let captured = pump.finish()?;
        log::debug!("stdout capture finished: {} bytes", captured.len());
        Ok(captured)
    }

    /// As [`CaptureSession::finish`], awaiting the drain instead of blocking.
    pub async fn finish_async(mut self) -> Result<Vec<u8>> {
        let pump = self.close()?;
        let captured = pump.finish_async().await?;
        log::debug!("stdout capture finished: {} bytes", captured.len());
        Ok(captured)
    }

    /// Restoring fd 1 drops its reference to the pipe, which is the last
    /// writer, so the pump sees end-of-stream once buffered bytes are read.
    fn close(&mut self) -> Result<DrainPump> {
        self.restore()?;
        self.pump.take().ok_or(CaptureError::PumpLost)
    }

    fn restore(&mut self) -> Result<()> {
        let Some(redirect) = self.redirect.take() else {
            return Ok(());
        };
        let result = redirect.end();
        if let Err(ref e) = result {
            if pipe_left_open(e) {
                if let Some(pump) = self.pump.take() {
                    pump.detach();
                }
            }
        }
        result
    }
}

/// Whether fd 1 may still be the pipe's writer after a failed restore.
///
/// A flush failure happens with the `dup2` still performed, so the pump
/// reaches end-of-stream as usual.
fn pipe_left_open(err: &CaptureError) -> bool {
    matches!(err, CaptureError::Restore(_))
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if self.redirect.is_none() && self.pump.is_none() {
            return;
        }
        log::debug!("stdout capture abandoned; restoring stdout");
        // fd 1 first: the pump only reaches end-of-stream once it is restored
        if let Err(e) = self.restore() {
            log::warn!("stdout restore on drop failed: {}", e);
        }
        drop(self.pump.take());
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
