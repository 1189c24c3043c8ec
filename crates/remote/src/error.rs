use std::error::Error as StdError;
use std::fmt::{self, Display};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A message could not be delivered or its reply could not be read.
    SendFailed,
    /// A file could not be uploaded.
    UploadFailed,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::SendFailed => write!(f, "could not send the message"),
            ErrorKind::UploadFailed => write!(f, "could not upload the file"),
        }
    }
}

/// A domain error returned by a [`ChatBackend`](crate::ChatBackend).
///
/// The error never carries the underlying transport failure. Implementors
/// are expected to log the original error for diagnostics and hand out
/// only the kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the `SendFailed` kind.
    #[inline]
    pub fn send_failed() -> Self {
        Self {
            kind: ErrorKind::SendFailed,
        }
    }

    /// Creates a new error with the `UploadFailed` kind.
    #[inline]
    pub fn upload_failed() -> Self {
        Self {
            kind: ErrorKind::UploadFailed,
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<ErrorKind> for Error {
    #[inline]
    fn from(kind: ErrorKind) -> Self {
        Self { kind }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.kind, f)
    }
}

impl StdError for Error {}
