// src/exit.rs
//! Process exit codes for `wordgraph`.
//!
//! Provides a stable contract for scripts and automation.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WordGraphExit {
    /// Operation completed successfully.
    Success = 0,
    /// Generic error (unreadable input, unwritable output, bad config file).
    Error = 1,
    /// Input rejected before analysis (damping out of range, empty text).
    InvalidInput = 2,
}

impl WordGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for WordGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
