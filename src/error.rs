//! Standard errors used by all functions in the crate.
//!
//! Every fallible operation returns the same [`Error`](crate::error::Error) value, whatever went wrong:
//! a transport failure (no HTTP response, status `0`), an error returned by the Lago API (non-2xx status),
//! a response body that could not be decoded, or a webhook that could not be verified or parsed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Error collecting all possible failures of the Lago client.
///
/// Its [`Display`](std::fmt::Display) form is a single JSON object:
/// `{"status":<int>,"error":<string>,"code":<string>,"err":<string>}`.
#[derive(Debug)]
pub struct Error {
    /// Underlying transport, decode or verification error, if any.
    pub err: Option<Cause>,
    /// HTTP status returned by the server, `0` when no response was obtained.
    pub http_status_code: u16,
    /// Human readable message returned by the server (`error`).
    pub message: String,
    /// Stable error identifier returned by the server (`code`), e.g. `value_already_exist`.
    pub error_code: String,
    /// Additional details returned by the server.
    pub error_details: Option<ErrorDetails>,
}

/// Underlying cause of an [`Error`](crate::error::Error).
#[derive(thiserror::Error, Debug)]
pub enum Cause {
    /// Reqwest error.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// The request URL could not be built from the configured base URL.
    #[error("cannot build request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The response body could not be decoded into the expected type.
    #[error("cannot decode response body: {0}")]
    Decode(serde_json::Error),
    /// The request body could not be encoded as JSON.
    #[error("cannot encode request body: {0}")]
    Encode(serde_json::Error),
    /// The caller's context was cancelled.
    #[error("context canceled")]
    Cancelled,
    /// The caller's context deadline expired.
    #[error("context deadline exceeded")]
    DeadlineExceeded,
    /// The webhook public key could not be base64-decoded.
    #[error("cannot decode public key: {0}")]
    Base64(#[from] base64::DecodeError),
    /// The webhook public key is not a PEM encoded RSA public key.
    #[error("{0}")]
    InvalidPublicKey(String),
    /// The webhook signature uses an algorithm other than RSA.
    #[error("Unexpected signing method: {0}")]
    UnexpectedSigningMethod(String),
    /// The webhook signature could not be parsed or verified.
    #[error(transparent)]
    Token(#[from] jsonwebtoken::errors::Error),
    /// The webhook carries an `object_type` which is not registered.
    #[error("unknown object_type: {0}")]
    UnknownObjectType(String),
    /// The webhook does not carry the attribute named by its `object_type`.
    #[error("missing {0} attribute")]
    MissingAttribute(String),
    /// The webhook body or its payload could not be decoded.
    #[error("cannot decode webhook: {0}")]
    Payload(serde_json::Error),
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// Builds an error for a failure that happened before any HTTP status was observed.
    pub(crate) fn transport(cause: impl Into<Cause>) -> Self {
        Self::with_status(0, String::new(), cause)
    }

    /// Builds an error with an explicit status and message.
    pub(crate) fn with_status(
        http_status_code: u16,
        message: impl Into<String>,
        cause: impl Into<Cause>,
    ) -> Self {
        Self {
            err: Some(cause.into()),
            http_status_code,
            message: message.into(),
            error_code: String::new(),
            error_details: None,
        }
    }

    /// Builds an error whose message is the display form of its cause.
    pub(crate) fn local(cause: Cause) -> Self {
        let message = cause.to_string();
        Self::with_status(0, message, cause)
    }

    /// Builds a remote application error from the body of a non-successful response.
    ///
    /// If the body is not a JSON error envelope, the raw body becomes the message.
    pub(crate) fn from_response_body(http_status_code: u16, body: &[u8]) -> Self {
        match serde_json::from_slice::<ErrorResponseBody>(body) {
            Ok(body) => Self {
                err: None,
                http_status_code,
                message: body.error,
                error_code: body.code,
                error_details: body.error_details,
            },
            Err(_) => Self {
                err: None,
                http_status_code,
                message: String::from_utf8_lossy(body).into_owned(),
                error_code: String::new(),
                error_details: None,
            },
        }
    }

    /// Returns `true` if no HTTP response was obtained.
    pub fn is_transport(&self) -> bool {
        self.http_status_code == 0
    }

    /// Returns `true` if the caller's context was cancelled or its deadline expired.
    pub fn is_cancelled(&self) -> bool {
        matches!(self.err, Some(Cause::Cancelled | Cause::DeadlineExceeded))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = RenderedError {
            status: self.http_status_code,
            error: &self.message,
            code: &self.error_code,
            err: self.err.as_ref().map(ToString::to_string).unwrap_or_default(),
        };

        let json = serde_json::to_string(&rendered).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.err.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<Cause> for Error {
    fn from(cause: Cause) -> Self {
        Error::transport(cause)
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::transport(e),
            reqwest_middleware::Error::Middleware(e) => e
                .downcast::<Error>()
                .unwrap_or_else(|e| Error::transport(Cause::Other(e))),
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Opaque `error_details` payload returned by the Lago API.
///
/// Usually an object mapping field names to lists of validation codes,
/// but its shape depends on the specific error.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct ErrorDetails(Value);

impl ErrorDetails {
    /// Returns the details as a map, if they are a JSON object.
    pub fn as_map(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// Returns the raw JSON value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the details and returns the raw JSON value.
    pub fn into_inner(self) -> Value {
        self.0
    }
}

/// Body of an error response from the Lago API.
#[derive(Deserialize)]
struct ErrorResponseBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    error_details: Option<ErrorDetails>,
}

#[derive(Serialize)]
struct RenderedError<'a> {
    status: u16,
    error: &'a str,
    code: &'a str,
    err: String,
}
