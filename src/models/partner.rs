use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// A partner account allowed to manage domains and wallet names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partner {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub partner_name: String,
}

impl Partner {
    pub fn new(id: impl Into<String>, partner_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            partner_name: partner_name.into(),
        }
    }
}
