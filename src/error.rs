//! Error types for binreader operations.

use std::io;

use thiserror::Error;

/// Errors that can occur while decoding a buffer.
///
/// Every variant describes a read or seek that was rejected before the
/// cursor moved, so a caller can recover and try something else.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unexpected end of buffer at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("seek target {target} outside buffer of length {len}")]
    SeekOutOfBounds { target: i128, len: usize },

    #[error("invalid UTF-8 at offset {offset} (valid up to {valid_up_to} bytes)")]
    InvalidUtf8 { offset: usize, valid_up_to: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::UnexpectedEof { .. } => io::ErrorKind::UnexpectedEof,
            Error::SeekOutOfBounds { .. } => io::ErrorKind::InvalidInput,
            Error::InvalidUtf8 { .. } => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, err)
    }
}
