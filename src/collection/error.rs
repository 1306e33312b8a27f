//! Error code related to memory collection.

use std::{borrow::Cow, io};

use thiserror::Error;

/// A type alias for handling query-related errors.
pub type QueryResult<T> = std::result::Result<T, QueryError>;

/// The errors that can happen while querying memory.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The platform facility could not be used (missing file, failed kernel call).
    #[error("Unable to query memory, {0}")]
    PlatformApiUnavailable(Cow<'static, str>),
    /// The platform returned data that could not be understood.
    #[error("Unable to parse memory information, {0}")]
    ParseFailure(Cow<'static, str>),
    /// The platform refused access to the memory information.
    #[error("Permission denied while querying memory, {0}")]
    PermissionDenied(Cow<'static, str>),
}

impl QueryError {
    /// Create a new [`QueryError::PlatformApiUnavailable`].
    pub fn unavailable<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::PlatformApiUnavailable(reason.into())
    }

    /// Create a new [`QueryError::ParseFailure`].
    pub fn parse<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::ParseFailure(reason.into())
    }

    /// Create a new [`QueryError::PermissionDenied`].
    pub fn permission<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::PermissionDenied(reason.into())
    }

    /// Categorizes an I/O error by its kind, prefixing the reason with
    /// `context` (e.g. which file was being read).
    pub fn from_io<C: std::fmt::Display>(context: C, err: io::Error) -> Self {
        let reason = format!("{context}: {err}");

        match err.kind() {
            io::ErrorKind::PermissionDenied => QueryError::permission(reason),
            io::ErrorKind::InvalidData => QueryError::parse(reason),
            _ => QueryError::unavailable(reason),
        }
    }
}
