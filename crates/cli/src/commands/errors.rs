use std::io;
use std::path::PathBuf;

use img3_core::img3::Img3Error;
use thiserror::Error;

use crate::PROGRAM_NAME;

/// Process exit statuses, one per failure kind.
pub mod status {
    pub const SUCCESS: u8 = 0;
    pub const OTHER: u8 = 1;
    pub const USAGE: u8 = 2;
    pub const IO: u8 = 3;
    pub const INVALID_MAGIC: u8 = 4;
    pub const TRUNCATED_INPUT: u8 = 5;
    pub const TRUNCATED_SECTION: u8 = 6;
    pub const MALFORMED_SECTION: u8 = 7;
}

/// Failures of the inspect command that map to a specific exit status.
#[derive(Debug, Error)]
pub enum InspectError {
    /// No input file was given.
    #[error("Usage: {} <file>", PROGRAM_NAME)]
    Usage,

    #[error("Couldn't find file: {}", path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Couldn't open file for reading: {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Container(#[from] Img3Error),
}

impl InspectError {
    pub fn exit_status(&self) -> u8 {
        match self {
            InspectError::Usage => status::USAGE,
            InspectError::NotFound { .. } | InspectError::Open { .. } => status::IO,
            InspectError::Container(err) => container_exit_status(err),
        }
    }
}

/// Exit status for a decode failure.
pub fn container_exit_status(err: &Img3Error) -> u8 {
    match err {
        Img3Error::InvalidMagic { .. } => status::INVALID_MAGIC,
        Img3Error::TruncatedInput { .. } => status::TRUNCATED_INPUT,
        Img3Error::TruncatedSection { .. } => status::TRUNCATED_SECTION,
        Img3Error::MalformedSection { .. } => status::MALFORMED_SECTION,
    }
}

/// Pick the exit status for an error by looking for a typed cause in its chain.
///
/// Anything without a typed cause (e.g. a failed write to stdout) maps to `status::OTHER`.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if let Some(inspect) = cause.downcast_ref::<InspectError>() {
            return inspect.exit_status();
        }
        if let Some(decode) = cause.downcast_ref::<Img3Error>() {
            return container_exit_status(decode);
        }
    }
    status::OTHER
}

/// Print the failure line(s) for `err` to stderr.
///
/// Usage errors print the usage line followed by a bare `Error <status>`.
pub fn report_failure(err: &anyhow::Error, status: u8) {
    match err.downcast_ref::<InspectError>() {
        Some(InspectError::Usage) => {
            eprintln!("{err}");
            eprintln!("Error {status}");
        }
        _ => eprintln!("Error {status}: {err:#}"),
    }
}
