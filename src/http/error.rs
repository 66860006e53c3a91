//! Error types for partner API operations.
//!
//! Every call into the registry either succeeds or fails with exactly one
//! [`NetkiError`]. Failures reported by the server itself are carried in a
//! [`ServerFailure`], which keeps the top-level message together with any
//! per-record failure messages from the same response.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while talking to the wallet name registry.
///
/// # Error Categories
///
/// - **Network errors**: [`Transport`](NetkiError::Transport)
/// - **Response errors**: [`InvalidContentType`](NetkiError::InvalidContentType),
///   [`MalformedPayload`](NetkiError::MalformedPayload),
///   [`Server`](NetkiError::Server)
/// - **Client errors**: [`Validation`](NetkiError::Validation),
///   [`InvalidUrl`](NetkiError::InvalidUrl)
///
/// # Example
///
/// ```rust,no_run
/// use netki::NetkiError;
///
/// fn handle_error(err: NetkiError) {
///     match err {
///         NetkiError::Server(failure) => {
///             for message in failure.failures().unwrap_or_default() {
///                 eprintln!("rejected: {}", message);
///             }
///         },
///         NetkiError::Transport(e) => eprintln!("Network error: {}", e),
///         _ => eprintln!("Other error: {}", err),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum NetkiError {
    /// The HTTP exchange itself failed.
    ///
    /// Connection refused, timeouts, TLS failures and errors while reading
    /// the response body all end up here. Nothing is retried.
    #[error("HTTP Request Failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with something other than JSON.
    ///
    /// Carries the observed `Content-Type` header value (empty if missing).
    #[error("HTTP Response Contains Invalid Content-Type: {0}")]
    InvalidContentType(String),

    /// The response claimed to be JSON but could not be parsed as such, or
    /// did not have the shape of the expected resource.
    #[error("Error Retrieving JSON Data: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The server processed the request and reported `success: false`.
    #[error("{0}")]
    Server(ServerFailure),

    /// A precondition checked before sending failed. No request was issued.
    #[error("{0}")]
    Validation(String),

    /// The configured API URL and the operation path do not form a valid URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// A failure reported by the server in its response envelope.
///
/// `failures` distinguishes a response without a `failures` key (`None`) from
/// one carrying an empty list (`Some(vec![])`); the two render differently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerFailure {
    message: String,
    failures: Option<Vec<String>>,
}

impl ServerFailure {
    pub fn new(message: impl Into<String>, failures: Option<Vec<String>>) -> Self {
        Self {
            message: message.into(),
            failures,
        }
    }

    /// The top-level error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Per-record failure messages, in server order.
    pub fn failures(&self) -> Option<&[String]> {
        self.failures.as_deref()
    }
}

impl fmt::Display for ServerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.failures {
            Some(failures) => write!(f, "{} [FAILURES: {}]", self.message, failures.join(", ")),
            None => write!(f, "{}", self.message),
        }
    }
}
