//! Exit status codes for the CLI
//!
//! - 0: success, `--help` and `--version`
//! - 1: the tagging library failed to read or write a file
//! - 255: usage errors (bad flags, missing or unreadable inputs)

use std::process::{ExitCode, Termination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Error = 1,
    /// What `exit(-1)` becomes once the OS truncates it to a byte.
    Usage = 255,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self)
    }
}
