// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Background drain of the capture pipe.
//!
//! A pipe only buffers a few pages in the kernel. The pump empties the read
//! end on its own thread while the handler writes, and hands the whole
//! buffer over once the write side closes.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::os::fd::OwnedFd;
use std::thread::JoinHandle;

use tokio::sync::oneshot;

use crate::error::{CaptureError, Result};
use crate::options::CaptureOptions;

/// Drain thread paired with its one-shot delivery
#[derive(Debug)]
pub struct DrainPump {
    delivery: Option<oneshot::Receiver<Result<Vec<u8>>>>,
    handle: Option<JoinHandle<()>>,
}

impl DrainPump {
    /// Start draining `read_end` until end-of-stream.
    pub fn start(read_end: OwnedFd, options: &CaptureOptions) -> Result<Self> {
        options.validate()?;
        let (tx, rx) = oneshot::channel();
        let chunk_size = options.chunk_size;
        let handle = std::thread::Builder::new()
            .name(options.thread_name.clone())
            .spawn(move || {
                let result = drain_to_end(File::from(read_end), chunk_size);
                // Receiver gone means the session was abandoned
                let _ = tx.send(result);
            })
            .map_err(CaptureError::Spawn)?;

        Ok(Self {
            delivery: Some(rx),
            handle: Some(handle),
        })
    }

    /// Block until the pipe reports end-of-stream and take the bytes.
    ///
    /// Waits on the thread rather than the channel, so it is safe to call
    /// from inside an async runtime as well.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        let mut delivery = self.delivery.take().ok_or(CaptureError::PumpLost)?;
        // Once joined the thread has either sent or dropped the sender
        self.join();
        delivery.try_recv().map_err(|_| CaptureError::PumpLost)?
    }

    /// Await end-of-stream and take the bytes.
    pub async fn finish_async(mut self) -> Result<Vec<u8>> {
        let delivery = self.delivery.take().ok_or(CaptureError::PumpLost)?;
        let result = delivery.await.map_err(|_| CaptureError::PumpLost);
        // The thread has sent its result, so it is about to exit
        self.join();
        result?
    }

    /// Let the thread run on without waiting for it.
    pub fn detach(mut self) {
        self.delivery.take();
        self.handle.take();
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::warn!("stdout drain thread panicked");
            }
        }
    }
}

impl Drop for DrainPump {
    fn drop(&mut self) {
        self.join();
    }
}

fn drain_to_end(mut reader: File, chunk_size: usize) -> Result<Vec<u8>> {
    let mut captured = Vec::new();
    let mut chunk = vec![0u8; chunk_size];
    loop {
        match reader.read(&mut chunk) {
            Ok(0) => return Ok(captured),
            Ok(n) => captured.extend_from_slice(&chunk[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CaptureError::Read(e)),
        }
    }
}

#[cfg(test)]
#[path = "drain_tests.rs"]
mod tests;
