// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standard-output capture for handler tests.
//!
//! Runs a handler that writes its result to stdout and hands the bytes
//! back for assertions. The handler needs no knowledge of the capture:
//! fd 1 is swapped for a pipe, a background thread drains the pipe while
//! the handler runs, and fd 1 is restored on every exit path, panics
//! included.
//!
//! ```no_run
//! use std::io::Write;
//!
//! let out = handler_capture::capture(
//!     |name: &str| {
//!         let mut stdout = std::io::stdout();
//!         write!(stdout, "hello {}", name).ok();
//!     },
//!     "world",
//! )?;
//! assert_eq!(out, b"hello world");
//! # Ok::<(), handler_capture::CaptureError>(())
//! ```
//!
//! Sessions share the one process-wide fd 1 and are not synchronized.
//! Callers running tests in parallel can serialize on [`exclusive`].
//!
//! Under the default libtest harness, `print!`/`println!` are diverted into
//! libtest's own per-test buffer and never reach fd 1. Handlers that must
//! be observable write through `std::io::stdout()` directly.

mod drain;
mod error;
mod options;
mod redirect;
mod session;

pub use drain::DrainPump;
pub use error::{CaptureError, Result};
pub use options::{CaptureOptions, CHUNK_SIZE_ENV};
pub use redirect::StdoutRedirect;
pub use session::CaptureSession;

use parking_lot::{Mutex, MutexGuard};

/// Run `handler(context)` and return everything it wrote to stdout.
pub fn capture<C, F>(handler: F, context: C) -> Result<Vec<u8>>
where
    F: FnOnce(C),
{
    capture_with(&CaptureOptions::default(), handler, context)
}

/// [`capture`] with explicit options.
///
/// If the handler panics, stdout is restored and the drain thread joined
/// before the panic continues unwinding.
pub fn capture_with<C, F>(options: &CaptureOptions, handler: F, context: C) -> Result<Vec<u8>>
where
    F: FnOnce(C),
{
    let session = CaptureSession::start(options)?;
    handler(context);
    session.finish()
}

/// [`capture_with`] for async callers.
///
/// The handler still runs synchronously on the calling task; only the wait
/// for the drain is awaited.
pub async fn capture_async<C, F>(
    options: &CaptureOptions,
    handler: F,
    context: C,
) -> Result<Vec<u8>>
where
    F: FnOnce(C),
{
    let session = CaptureSession::start(options)?;
    handler(context);
    session.finish_async().await
}

static STDOUT_OWNER: Mutex<()> = parking_lot::const_mutex(());

/// Held while a caller owns fd 1
pub struct ExclusiveGuard {
    _guard: MutexGuard<'static, ()>,
}

/// Block until no other holder of this lock is capturing.
///
/// Opt-in. [`capture`] itself never takes it.
pub fn exclusive() -> ExclusiveGuard {
    ExclusiveGuard {
        _guard: STDOUT_OWNER.lock(),
    }
}
