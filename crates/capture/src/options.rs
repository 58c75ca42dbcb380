// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture configuration.

use crate::error::{CaptureError, Result};
use serde::Deserialize;

/// Environment variable overriding the drain read size
pub const CHUNK_SIZE_ENV: &str = "HANDLER_CAPTURE_CHUNK_SIZE";

const DEFAULT_CHUNK_SIZE: usize = 32 * 1024;
const DEFAULT_THREAD_NAME: &str = "stdout-drain";

/// Tunables for a capture session
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CaptureOptions {
    /// Bytes requested per read from the pipe
    pub chunk_size: usize,

    /// Name given to the drain thread
    pub thread_name: String,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl CaptureOptions {
    /// Defaults, with `HANDLER_CAPTURE_CHUNK_SIZE` applied when set
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(raw) = lookup(CHUNK_SIZE_ENV) {
            let size = raw.trim().parse::<usize>().map_err(|e| {
                CaptureError::Config(format!("{}={:?}: {}", CHUNK_SIZE_ENV, raw, e))
            })?;
            options = options.with_chunk_size(size);
        }
        options.validate()?;
        Ok(options)
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    /// Reject settings the drain loop cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(CaptureError::Config("chunk_size must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
