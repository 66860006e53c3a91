use std::time::Duration;

use log::{debug, trace};
use reqwest::{
    Method,
    blocking::Client,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use url::Url;

use super::{error::NetkiError, response::interpret_response};
use crate::log::mask_string;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const PARTNER_ID_HEADER: &str = "x-partner-id";
const USER_AGENT: &str = concat!("netki-partner/", env!("CARGO_PKG_VERSION"));

/// Who is calling and where: the authentication context of every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Base URL of the registry API, e.g. `https://api.netki.com`.
    pub api_url: String,
    pub partner_id: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(api_url: impl Into<String>, partner_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            partner_id: partner_id.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolves an operation URI against the configured API URL.
    pub fn request_url(&self, uri: &str) -> Result<Url, NetkiError> {
        let base = self.api_url.trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, uri))?)
    }
}

/// The single chokepoint every registry operation passes through.
///
/// Implementations perform exactly one request/response exchange and hand
/// the result to [`interpret_response`]. Resource operations only ever see
/// this trait, so tests can substitute a recording double.
pub trait Requester {
    fn process_request(
        &self,
        credentials: &Credentials,
        uri: &str,
        method: Method,
        body: &str,
    ) -> Result<Value, NetkiError>;
}

/// [`Requester`] backed by a blocking `reqwest` client.
///
/// The client keeps a connection pool and is safe to share between threads;
/// there is no retry layer and no caching.
#[derive(Debug, Clone)]
pub struct HttpRequester {
    client: Client,
}

impl HttpRequester {
    pub fn new() -> Result<Self, NetkiError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, NetkiError> {
        let client = Client::builder().timeout(timeout).user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    fn headers(credentials: &Credentials) -> Result<HeaderMap, NetkiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if !credentials.api_key.is_empty() {
            headers.insert(reqwest::header::AUTHORIZATION, header_value(&credentials.api_key)?);
        }
        if !credentials.partner_id.is_empty() {
            headers.insert(PARTNER_ID_HEADER, header_value(&credentials.partner_id)?);
        }

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, NetkiError> {
    HeaderValue::from_str(value)
        .map_err(|e| NetkiError::Validation(format!("Credential is not a valid header value: {}", e)))
}

impl Requester for HttpRequester {
    fn process_request(
        &self,
        credentials: &Credentials,
        uri: &str,
        method: Method,
        body: &str,
    ) -> Result<Value, NetkiError> {
        let url = credentials.request_url(uri)?;
        debug!(
            method:% = method,
            uri = uri,
            partner_id = credentials.partner_id.as_str(),
            api_key:% = mask_string(&credentials.api_key);
            "Dispatching registry request"
        );

        let mut request = self
            .client
            .request(method, url)
            .headers(Self::headers(credentials)?);
        if !body.is_empty() {
            trace!(bytes = body.len(); "Attaching request body");
            request = request.body(body.to_string());
        }

        let response = request.send()?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let bytes = response.bytes()?;

        debug!(status = status.as_u16(), bytes = bytes.len(); "Registry responded");
        interpret_response(status, content_type.as_deref(), &bytes)
    }
}
