//! Partner-facing operations on the wallet name registry.
//!
//! [`NetkiPartner`] pairs the caller's [`Credentials`] with a [`Requester`]
//! and exposes one method per registry operation. Each operation builds a
//! URI and a JSON body, dispatches it through the requester and maps the
//! payload back onto the records in [`crate::models`].
//!
//! Operations are grouped by resource:
//!
//! - partners: create, list, delete
//! - domains: create, list, status, DNSSEC status, delete
//! - wallet names: local construction, listing, plus
//!   [`WalletName::save`](crate::models::WalletName::save) and
//!   [`WalletName::delete`](crate::models::WalletName::delete)
//!
//! # Example
//!
//! ```rust,no_run
//! use netki::{Credentials, NetkiPartner, Wallet};
//!
//! # fn example() -> Result<(), netki::NetkiError> {
//! let partner = NetkiPartner::new(Credentials::new("https://api.netki.com", "partner_id", "api_key"))?;
//!
//! let domain = partner.create_new_domain("example.com", None)?;
//! let mut wallet_name =
//!     partner.create_new_wallet_name(&domain, "alice", vec![Wallet::new("btc", "1btcaddress")], "user-42");
//! wallet_name.save(&partner)?;
//! println!("created wallet name {}", wallet_name.id);
//! # Ok(())
//! # }
//! ```

mod domains;
mod partners;
mod wallet_names;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    config::NetkiConfig,
    http::{Credentials, HttpRequester, NetkiError, Requester},
};

/// Entry point for all authenticated registry operations.
pub struct NetkiPartner<R = HttpRequester> {
    credentials: Credentials,
    requester: R,
}

impl NetkiPartner<HttpRequester> {
    /// Creates a partner client over the default HTTP requester.
    pub fn new(credentials: Credentials) -> Result<Self, NetkiError> {
        Ok(Self::with_requester(credentials, HttpRequester::new()?))
    }

    /// Creates a partner client from loaded configuration.
    pub fn from_config(config: &NetkiConfig) -> Result<Self, NetkiError> {
        let requester = HttpRequester::with_timeout(config.timeout())?;
        Ok(Self::with_requester(config.credentials(), requester))
    }
}

impl<R: Requester> NetkiPartner<R> {
    pub fn with_requester(credentials: Credentials, requester: R) -> Self {
        Self { credentials, requester }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn requester(&self) -> &R {
        &self.requester
    }

    pub(crate) fn dispatch(&self, uri: &str, method: Method, body: &str) -> Result<Value, NetkiError> {
        self.requester
            .process_request(&self.credentials, uri, method, body)
    }

    /// Dispatches and deserializes the payload into `T`.
    pub(crate) fn dispatch_into<T: DeserializeOwned>(
        &self,
        uri: &str,
        method: Method,
        body: &str,
    ) -> Result<T, NetkiError> {
        let payload = self.dispatch(uri, method, body)?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_configured_credentials() {
        let config = NetkiConfig {
            api_url: "http://localhost:8080".to_string(),
            partner_id: "pid".to_string(),
            api_key: "secret".to_string(),
            timeout_secs: 5,
        };

        let partner = NetkiPartner::from_config(&config).unwrap();

        assert_eq!(partner.credentials(), &Credentials::new("http://localhost:8080", "pid", "secret"));
    }
}
