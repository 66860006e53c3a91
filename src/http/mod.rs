//! HTTP layer for the wallet name registry's partner API.
//!
//! Every partner operation is funnelled through a single [`Requester`], which
//! performs one request/response exchange and hands the raw response to
//! [`interpret_response`]. The interpreter validates the content type,
//! parses the JSON envelope and folds a `success: false` answer into one
//! [`NetkiError`].
//!
//! # Architecture
//!
//! - [`Requester`] - the injectable dispatch capability
//! - [`HttpRequester`] - production implementation over a blocking `reqwest` client
//! - [`Credentials`] - the authentication context attached to each request
//! - [`NetkiError`] / [`ServerFailure`] - error types for every failure mode
//! - [`url_encode`] - path segment encoding for free-text URI components
//!
//! # Example
//!
//! ```rust,no_run
//! use netki::http::{Credentials, HttpRequester, Requester};
//! use reqwest::Method;
//!
//! # fn example() -> Result<(), netki::NetkiError> {
//! let credentials = Credentials::new("https://api.netki.com", "my_partner_id", "my_api_key");
//! let requester = HttpRequester::new()?;
//!
//! let payload = requester.process_request(&credentials, "/v1/admin/partner", Method::GET, "")?;
//! println!("{}", payload);
//! # Ok(())
//! # }
//! ```

mod error;
mod http_client;
#[cfg(test)]
pub(crate) mod mock;
mod response;
mod utils;

pub use error::{NetkiError, ServerFailure};
pub use http_client::{Credentials, HttpRequester, Requester};
pub use response::interpret_response;
pub(crate) use utils::query_string;
pub use utils::url_encode;
