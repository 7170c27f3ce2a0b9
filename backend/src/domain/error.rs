//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter maps them onto status
//! codes and JSON bodies; the numeric `code` mirrors the HTTP status so the
//! wire payload stays `{ "code": 403, "message": "..." }`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use super::TraceId;

/// Failure category shared by every service and adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum ErrorCode {
    /// The request is malformed: bad body, path or query parameters.
    BadRequest,
    /// The caller is identified but not allowed to perform the action.
    Forbidden,
    /// The request is valid but nothing matches it.
    NotFound,
    /// Malformed input reached a layer that was not designed to handle it,
    /// or an adapter failed.
    InternalError,
}

impl ErrorCode {
    /// HTTP-status-like numeric value carried in the payload.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(value: ErrorCode) -> Self {
        value.as_u16()
    }
}

/// Raised when a numeric code does not belong to the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
#[error("unknown error code: {0}")]
pub struct UnknownErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            400 => Ok(Self::BadRequest),
            403 => Ok(Self::Forbidden),
            404 => Ok(Self::NotFound),
            500 => Ok(Self::InternalError),
            other => Err(UnknownErrorCode(other)),
        }
    }
}

/// Error payload returned to clients.
///
/// Immutable once built apart from attaching the trace identifier. The trace
/// identifier never appears in the JSON body; adapters expose it as a header.
///
/// # Examples
/// ```
/// use exam_backend::domain::{Error, ErrorCode};
///
/// let err = Error::forbidden("access denied");
/// assert_eq!(err.code(), ErrorCode::Forbidden);
/// assert_eq!(
///     serde_json::to_value(&err).unwrap(),
///     serde_json::json!({ "code": 403, "message": "access denied" })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip)]
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, capturing the trace identifier in scope if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Failure category.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction time.
    #[must_use]
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    #[must_use]
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::Forbidden`].
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code.as_u16(), self.message)
    }
}

impl std::error::Error for Error {}
