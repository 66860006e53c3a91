use log::info;
use reqwest::Method;
use serde::Deserialize;

use super::NetkiPartner;
use crate::{
    http::{NetkiError, Requester, url_encode},
    models::{Partner, null_as_default},
};

const PARTNER_PATH: &str = "/v1/admin/partner";

#[derive(Deserialize)]
struct PartnerResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    partner: Partner,
}

#[derive(Deserialize)]
struct PartnersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    partners: Vec<Partner>,
}

impl<R: Requester> NetkiPartner<R> {
    /// Creates a sub-partner named `partner_name`.
    pub fn create_new_partner(&self, partner_name: &str) -> Result<Partner, NetkiError> {
        let uri = format!("{}/{}", PARTNER_PATH, url_encode(partner_name));
        let response: PartnerResponse = self.dispatch_into(&uri, Method::POST, "")?;

        info!(target: "audit", partner_id = response.partner.id.as_str(); "Partner created");
        Ok(response.partner)
    }

    pub fn get_partners(&self) -> Result<Vec<Partner>, NetkiError> {
        let response: PartnersResponse = self.dispatch_into(PARTNER_PATH, Method::GET, "")?;
        Ok(response.partners)
    }

    /// Deletes a partner, addressed by its name.
    pub fn delete_partner(&self, partner: &Partner) -> Result<(), NetkiError> {
        let uri = format!("{}/{}", PARTNER_PATH, url_encode(&partner.partner_name));
        self.dispatch(&uri, Method::DELETE, "")?;

        info!(target: "audit", partner_name = partner.partner_name.as_str(); "Partner deleted");
        Ok(())
    }
}
