//! The single fatal-error type shared by every stage of the filter.
//!
//! Each variant names the phase that failed. `Error::code` is what the process
//! exits with, so scripts wrapping the pipeline can tell the phases apart.

use std::io;
use thiserror::Error;

/// Phase in which a fatal error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Config,
    Setup,
    Read,
    Write,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or unknown command line input.
    #[error("{0}")]
    Usage(String),

    /// The remap configuration could not be loaded.
    #[error("failed to load configuration: {0}")]
    Config(String),

    /// Unbuffered mode could not be enabled on stdin or stdout.
    #[error("failed to disable stdio buffering: {0}")]
    Setup(#[source] io::Error),

    #[error("failed to read event: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write event: {0}")]
    Write(#[source] io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage(_) => ErrorKind::Usage,
            Error::Config(_) => ErrorKind::Config,
            Error::Setup(_) => ErrorKind::Setup,
            Error::Read(_) => ErrorKind::Read,
            Error::Write(_) => ErrorKind::Write,
        }
    }

    /// Numeric code used as the process exit status.
    ///
    /// I/O failures report the OS error number when there is one. Partial
    /// records and short writes have no errno of their own and map to `EIO`.
    pub fn code(&self) -> i32 {
        match self {
            Error::Usage(_) | Error::Config(_) => libc::EINVAL,
            Error::Setup(e) | Error::Read(e) | Error::Write(e) => {
                e.raw_os_error().filter(|&c| c != 0).unwrap_or(libc::EIO)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
