//! Partner client for the Netki wallet name registry.
//!
//! - [`client`] - partner, domain and wallet name operations ([`NetkiPartner`])
//! - [`http`] - request dispatch and response interpretation
//! - [`models`] - the resource records
//! - [`lookup`] - public wallet name resolution over DNS
//! - [`config`] / [`log`] - configuration loading and logging setup

pub mod client;
pub mod config;
pub mod http;
pub mod log;
pub mod lookup;
pub mod models;

pub use crate::client::NetkiPartner;
pub use crate::config::{NetkiConfig, load_configuration};
pub use crate::http::{Credentials, HttpRequester, NetkiError, Requester, ServerFailure};
pub use crate::lookup::{LookupError, wallet_name_lookup};
pub use crate::models::{Domain, Partner, Wallet, WalletName};
