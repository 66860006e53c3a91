//! Recording [`Requester`] double for exercising resource operations.

use std::sync::Mutex;

use reqwest::Method;
use serde_json::Value;

use super::{
    error::{NetkiError, ServerFailure},
    http_client::{Credentials, Requester},
    response::empty_payload,
};

/// The last request seen by a [`MockRequester`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedCall {
    pub uri: String,
    pub method: String,
    pub body: String,
}

/// Returns a canned payload (or server failure) and records what it was asked.
#[derive(Debug, Default)]
pub struct MockRequester {
    response: Option<Value>,
    failure: Option<ServerFailure>,
    last_call: Mutex<Option<RecordedCall>>,
}

impl MockRequester {
    /// Replies with `payload` parsed as JSON, or an empty object when `payload` is empty.
    pub fn returning(payload: &str) -> Self {
        let response = if payload.is_empty() {
            None
        } else {
            Some(serde_json::from_str(payload).expect("mock payload must be valid JSON"))
        };
        Self {
            response,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(ServerFailure::new(message, None)),
            ..Default::default()
        }
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.last_call.lock().unwrap().clone()
    }

    pub fn called(&self) -> RecordedCall {
        self.last_call().expect("no request was dispatched")
    }
}

impl Requester for MockRequester {
    fn process_request(
        &self,
        _credentials: &Credentials,
        uri: &str,
        method: Method,
        body: &str,
    ) -> Result<Value, NetkiError> {
        *self.last_call.lock().unwrap() = Some(RecordedCall {
            uri: uri.to_string(),
            method: method.to_string(),
            body: body.to_string(),
        });

        if let Some(failure) = &self.failure {
            return Err(NetkiError::Server(failure.clone()));
        }
        Ok(self.response.clone().unwrap_or_else(empty_payload))
    }
}
