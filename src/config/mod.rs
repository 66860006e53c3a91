//! Configuration for the partner client.
//!
//! Values come from a TOML file, overridden by `NETKI_`-prefixed environment
//! variables. See [`load_configuration`].

mod loader;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use loader::{get_default_config, load_configuration, write_config_to};

use crate::http::Credentials;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetkiConfig {
    pub api_url: String,
    pub partner_id: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl Default for NetkiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.netki.com".to_string(),
            partner_id: String::new(),
            api_key: String::new(),
            timeout_secs: 30,
        }
    }
}

impl NetkiConfig {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_url, &self.partner_id, &self.api_key)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
