use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// One currency address attached to a wallet name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wallet {
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(rename = "wallet_address", deserialize_with = "null_as_default")]
    pub address: String,
}

impl Wallet {
    pub fn new(currency: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            address: address.into(),
        }
    }
}

/// A human-readable name within a domain, mapping to currency addresses.
///
/// `id` stays empty until the registry assigns one on first save. Whether it
/// is set decides between create and update when saving.
///
/// Field order is the wire order of the save body; `id` is left out while
/// empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletName {
    #[serde(deserialize_with = "null_as_default")]
    pub domain_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wallets: Vec<Wallet>,
}

impl WalletName {
    /// The address registered for `currency`, or `""` if there is none.
    pub fn get_address(&self, currency: &str) -> &str {
        self.wallets
            .iter()
            .find(|wallet| wallet.currency == currency)
            .map(|wallet| wallet.address.as_str())
            .unwrap_or_default()
    }

    /// Currency codes in insertion order.
    pub fn used_currencies(&self) -> Vec<&str> {
        self.wallets.iter().map(|wallet| wallet.currency.as_str()).collect()
    }

    /// Updates the address for `currency` in place, or appends a new wallet.
    pub fn set_currency_address(&mut self, currency: &str, address: &str) {
        match self.wallets.iter_mut().find(|wallet| wallet.currency == currency) {
            Some(wallet) => wallet.address = address.to_string(),
            None => self.wallets.push(Wallet::new(currency, address)),
        }
    }

    /// Removes the first wallet for `currency`. No-op if there is none.
    pub fn remove_currency(&mut self, currency: &str) {
        if let Some(index) = self.wallets.iter().position(|wallet| wallet.currency == currency) {
            self.wallets.remove(index);
        }
    }
}
