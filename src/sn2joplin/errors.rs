use std::fmt;
use std::convert::From;
use std::error::Error as StdError;
use std::io::Error as IoError;

use zip::result::ZipError;

pub type Result<T> = ::std::result::Result<T, Error>;

#[derive(Debug)]
pub enum ErrorKind {
    /// bad or missing zip, or no readable notes document inside it
    ArchiveUnreadable,
    MalformedRecord,
    MalformedTimestamp,
    EmptyTitle,
    UserDeclinedOverwrite,
    DirectoryCreateFailed,
    IoFailure(IoError),
    Generic,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub desc: String,
    pub detail: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, desc: impl Into<String>) -> Error {
        Error {
            kind: kind,
            desc: desc.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl fmt::Display) -> Error {
        self.detail = Some(detail.to_string());
        self
    }

    /// errors that stop the whole run instead of a single note
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ErrorKind::ArchiveUnreadable)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.detail {
            Some(ref d) => write!(f, "{}: {}", &self.desc, d),
            None => write!(f, "{}", &self.desc),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.kind {
            ErrorKind::IoFailure(ref e) => Some(e),
            _ => None,
        }
    }
}

// Global macros for easier error generation
#[macro_export]
macro_rules! specific_fail {
    ($kind:expr, $short:expr) => {{
        use $crate::errors::Error;
        Err(::std::convert::From::from(
            Error::new($kind, $short)
        ))
    }}
}

#[macro_export]
macro_rules! specific_fail_str {
    ($kind:expr, $s:expr) => {
        specific_fail!($kind, $s.to_string())
    }
}

impl From<IoError> for Error {
    fn from(err: IoError) -> Error {
        Error {
            desc: err.to_string(),
            kind: ErrorKind::IoFailure(err),
            detail: None,
        }
    }
}

impl From<ZipError> for Error {
    fn from(err: ZipError) -> Error {
        Error {
            kind: ErrorKind::ArchiveUnreadable,
            desc: "bad zip file".to_string(),
            detail: Some(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error {
            kind: ErrorKind::ArchiveUnreadable,
            desc: "invalid notes document".to_string(),
            detail: Some(err.to_string()),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(err: chrono::ParseError) -> Error {
        Error {
            kind: ErrorKind::MalformedTimestamp,
            desc: "Failed to parse date/time".to_string(),
            detail: Some(err.to_string()),
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Error {
        Error {
            kind: ErrorKind::Generic,
            desc: err,
            detail: None,
        }
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Error {
        Error {
            kind: ErrorKind::Generic,
            desc: err.to_string(),
            detail: None,
        }
    }
}
