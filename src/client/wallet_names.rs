use log::{debug, info};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::NetkiPartner;
use crate::{
    http::{NetkiError, Requester, query_string},
    models::{Domain, Wallet, WalletName, null_as_default},
};

const WALLET_NAME_PATH: &str = "/v1/partner/walletname";

/// Request and response envelope: records always travel in a `wallet_names` array.
#[derive(Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct WalletNames<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    wallet_names: Vec<T>,
}

#[derive(Serialize)]
struct WalletNameRef<'a> {
    domain_name: &'a str,
    id: &'a str,
}

#[derive(Deserialize)]
struct SavedWalletName {
    #[serde(default, deserialize_with = "null_as_default")]
    id: String,
}

impl<R: Requester> NetkiPartner<R> {
    /// Builds an unsaved wallet name in `domain`. No request is made.
    pub fn create_new_wallet_name(
        &self,
        domain: &Domain,
        name: &str,
        wallets: Vec<Wallet>,
        external_id: &str,
    ) -> WalletName {
        WalletName {
            domain_name: domain.domain_name.clone(),
            external_id: external_id.to_string(),
            id: String::new(),
            name: name.to_string(),
            wallets,
        }
    }

    /// Lists wallet names, optionally filtered by domain and external id.
    ///
    /// Empty filters are left out of the query string entirely. A zero
    /// `wallet_name_count` yields an empty list whatever the rest of the
    /// payload holds.
    pub fn get_wallet_names(&self, domain_name: &str, external_id: &str) -> Result<Vec<WalletName>, NetkiError> {
        let uri = format!(
            "{}{}",
            WALLET_NAME_PATH,
            query_string(&[("domain_name", domain_name), ("external_id", external_id)])
        );
        let payload = self.dispatch(&uri, Method::GET, "")?;

        let count = payload
            .get("wallet_name_count")
            .and_then(Value::as_u64)
            .unwrap_or_default();
        if count == 0 {
            return Ok(Vec::new());
        }

        let listing: WalletNames<WalletName> = serde_json::from_value(payload)?;
        Ok(listing.wallet_names)
    }
}

impl WalletName {
    /// Creates (POST) or updates (PUT) this wallet name on the registry.
    ///
    /// The id returned by the registry is written back onto `self`.
    pub fn save<R: Requester>(&mut self, partner: &NetkiPartner<R>) -> Result<(), NetkiError> {
        let method = if self.id.is_empty() { Method::POST } else { Method::PUT };
        let body = serde_json::to_string(&WalletNames {
            wallet_names: vec![&*self],
        })?;

        let saved: WalletNames<SavedWalletName> = partner.dispatch_into(WALLET_NAME_PATH, method.clone(), &body)?;

        match saved.wallet_names.into_iter().next() {
            Some(record) if !record.id.is_empty() => self.id = record.id,
            _ => debug!(name = self.name.as_str(); "Registry returned no wallet name id"),
        }
        info!(
            target: "audit",
            method:% = method,
            domain = self.domain_name.as_str(),
            id = self.id.as_str();
            "Wallet name saved"
        );
        Ok(())
    }

    /// Deletes this wallet name from the registry. Requires an id.
    pub fn delete<R: Requester>(&self, partner: &NetkiPartner<R>) -> Result<(), NetkiError> {
        if self.id.is_empty() {
            return Err(NetkiError::Validation("WalletName has no ID! Cannot Delete!".to_string()));
        }

        let body = serde_json::to_string(&WalletNames {
            wallet_names: vec![WalletNameRef {
                domain_name: &self.domain_name,
                id: &self.id,
            }],
        })?;
        partner.dispatch(WALLET_NAME_PATH, Method::DELETE, &body)?;

        info!(target: "audit", domain = self.domain_name.as_str(), id = self.id.as_str(); "Wallet name deleted");
        Ok(())
    }
}
