//! Resource records exchanged with the wallet name registry.
//!
//! # Key Types
//!
//! - [`Partner`] - A partner account, keyed by id or by name
//! - [`Domain`] - A delegated domain, including DNSSEC rollover metadata
//! - [`WalletName`] - A name within a domain and its currency addresses
//! - [`Wallet`] - One currency/address pair owned by a [`WalletName`]
//!
//! All records derive `Default`; the default value is the "zero" record.
//! Fields absent from a response, or sent as `null`, deserialize to their
//! defaults.

mod de;
mod domain;
mod partner;
mod wallet_name;

pub use domain::Domain;
pub use partner::Partner;
pub use wallet_name::{Wallet, WalletName};

pub(crate) use de::null_as_default;
