//! Public wallet name resolution over DNS.
//!
//! Resolving a wallet name needs no partner credentials and never touches the
//! partner API. Two TXT queries are made:
//!
//! 1. `_wallet.<name>` lists the available currency codes, whitespace separated.
//! 2. `_<currency>._wallet.<name>` holds the address, usually base64 encoded.
//!
//! The DNS side is abstracted behind [`TxtResolver`] so the resolution steps
//! can be exercised without a network.
//!
//! # Example
//!
//! ```rust,no_run
//! use netki::lookup::wallet_name_lookup;
//!
//! match wallet_name_lookup("wallet.example.com", "btc") {
//!     Ok(address) => println!("pay to {}", address),
//!     Err(e) => eprintln!("lookup failed: {}", e),
//! }
//! ```

mod resolver;

use base64::{Engine, engine::general_purpose::STANDARD};
use log::{debug, warn};
use thiserror::Error;

pub use resolver::{DnsTxtResolver, TxtResolver};

use crate::log::mask_string;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Wallet name {name} not found: {reason}")]
    NameNotFound { name: String, reason: String },

    #[error("Currency {currency} not available for wallet name {name}")]
    CurrencyNotFound { name: String, currency: String },

    #[error("DNS lookup for {query} failed: {reason}")]
    Dns { query: String, reason: String },

    #[error("Could not initialize DNS resolver: {0}")]
    Resolver(#[from] std::io::Error),
}

/// Resolves wallet names to currency addresses through a [`TxtResolver`].
pub struct WalletNameResolver<T> {
    resolver: T,
}

impl WalletNameResolver<DnsTxtResolver> {
    /// Uses the system DNS configuration.
    pub fn from_system_conf() -> Result<Self, LookupError> {
        Ok(Self::new(DnsTxtResolver::from_system_conf()?))
    }
}

impl<T: TxtResolver> WalletNameResolver<T> {
    pub fn new(resolver: T) -> Self {
        Self { resolver }
    }

    /// Currency codes published for `name`, lowercased.
    pub fn available_currencies(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let name = normalize_name(name);
        let query = format!("_wallet.{}", name);

        let records = self
            .resolver
            .txt_records(&query)
            .map_err(|e| LookupError::NameNotFound {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        if records.is_empty() {
            return Err(LookupError::NameNotFound {
                name: name.to_string(),
                reason: "no wallet record published".to_string(),
            });
        }

        Ok(records
            .iter()
            .flat_map(|record| record.split_whitespace())
            .map(str::to_lowercase)
            .collect())
    }

    /// Resolves `name` to its address for `currency`.
    pub fn lookup(&self, name: &str, currency: &str) -> Result<String, LookupError> {
        let name = normalize_name(name);
        let currency = currency.to_lowercase();

        let currencies = self.available_currencies(name)?;
        if !currencies.contains(&currency) {
            debug!(name = name, currency = currency.as_str(); "Currency not published for wallet name");
            return Err(LookupError::CurrencyNotFound {
                name: name.to_string(),
                currency,
            });
        }

        let query = format!("_{}._wallet.{}", currency, name);
        let record = self
            .resolver
            .txt_records(&query)?
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::CurrencyNotFound {
                name: name.to_string(),
                currency: currency.clone(),
            })?;

        let address = decode_address(&record);
        debug!(name = name, currency = currency.as_str(), address:% = mask_string(&address); "Wallet name resolved");
        Ok(address)
    }
}

/// Resolves `name` for `currency` using the system DNS configuration.
pub fn wallet_name_lookup(name: &str, currency: &str) -> Result<String, LookupError> {
    WalletNameResolver::from_system_conf()?.lookup(name, currency)
}

fn normalize_name(name: &str) -> &str {
    let name = name.trim();
    let name = name
        .strip_prefix("https://")
        .or_else(|| name.strip_prefix("http://"))
        .unwrap_or(name);
    name.trim_end_matches('.')
}

/// Address records are normally base64; anything that does not decode to
/// printable text is taken verbatim.
fn decode_address(record: &str) -> String {
    let record = record.trim();
    match STANDARD.decode(record) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) if !text.is_empty() && text.chars().all(|c| c.is_ascii_graphic()) => text,
            _ => record.to_string(),
        },
        Err(_) => {
            warn!(record_len = record.len(); "Address record is not base64, using it verbatim");
            record.to_string()
        },
    }
}
