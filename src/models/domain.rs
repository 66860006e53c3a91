use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// A DNS domain delegated to the registry.
///
/// No single call fills every field: creation returns the nameservers and
/// status, the status query the delegation fields, and the DNSSEC query the
/// key rollover fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "null_as_default")]
    pub domain_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nameservers: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub delegation_status: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub delegation_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub wallet_name_count: u64,
    /// Next scheduled DNSSEC key rollover.
    #[serde(rename = "nextroll_date")]
    pub next_roll_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub ds_records: Vec<String>,
    #[serde(rename = "public_key_signing_key", deserialize_with = "null_as_default")]
    pub public_signing_key: String,
}

impl Domain {
    pub fn new(domain_name: impl Into<String>) -> Self {
        Self {
            domain_name: domain_name.into(),
            ..Default::default()
        }
    }
}
