use chrono::{DateTime, Utc};
use log::info;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::NetkiPartner;
use crate::{
    http::{NetkiError, Requester, url_encode},
    models::{Domain, Partner, null_as_default},
};

const DOMAIN_PATH: &str = "/v1/partner/domain";
const DNSSEC_PATH: &str = "/v1/partner/domain/dnssec";
const DOMAIN_LIST_PATH: &str = "/api/domain";

#[derive(Serialize)]
struct CreateDomainRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    partner_id: Option<&'a str>,
}

#[derive(Deserialize)]
struct DomainsResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    domains: Vec<Domain>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct DomainStatusResponse {
    #[serde(deserialize_with = "null_as_default")]
    status: String,
    #[serde(deserialize_with = "null_as_default")]
    delegation_status: bool,
    #[serde(deserialize_with = "null_as_default")]
    delegation_message: String,
    #[serde(deserialize_with = "null_as_default")]
    wallet_name_count: u64,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct DnssecResponse {
    nextroll_date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    ds_records: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    public_key_signing_key: String,
}

fn domain_uri(base: &str, domain_name: &str) -> String {
    format!("{}/{}", base, url_encode(domain_name))
}

impl<R: Requester> NetkiPartner<R> {
    /// Registers `domain_name`, optionally on behalf of a sub-partner.
    ///
    /// The body carries `partner_id` only when `partner` has a non-empty id.
    pub fn create_new_domain(&self, domain_name: &str, partner: Option<&Partner>) -> Result<Domain, NetkiError> {
        let request = CreateDomainRequest {
            partner_id: partner
                .map(|p| p.id.as_str())
                .filter(|id| !id.is_empty()),
        };
        let body = serde_json::to_string(&request)?;

        let domain: Domain = self.dispatch_into(&domain_uri(DOMAIN_PATH, domain_name), Method::POST, &body)?;
        info!(target: "audit", domain = domain_name, status = domain.status.as_str(); "Domain created");
        Ok(domain)
    }

    pub fn get_domains(&self) -> Result<Vec<Domain>, NetkiError> {
        let response: DomainsResponse = self.dispatch_into(DOMAIN_LIST_PATH, Method::GET, "")?;
        Ok(response.domains)
    }

    /// Fetches delegation status and wallet name count for `domain`.
    pub fn get_domain_status(&self, domain: &Domain) -> Result<Domain, NetkiError> {
        let response: DomainStatusResponse =
            self.dispatch_into(&domain_uri(DOMAIN_PATH, &domain.domain_name), Method::GET, "")?;

        Ok(Domain {
            domain_name: domain.domain_name.clone(),
            status: response.status,
            delegation_status: response.delegation_status,
            delegation_message: response.delegation_message,
            wallet_name_count: response.wallet_name_count,
            ..Default::default()
        })
    }

    /// Fetches DNSSEC rollover metadata for `domain`.
    pub fn get_domain_dnssec(&self, domain: &Domain) -> Result<Domain, NetkiError> {
        let response: DnssecResponse =
            self.dispatch_into(&domain_uri(DNSSEC_PATH, &domain.domain_name), Method::GET, "")?;

        Ok(Domain {
            domain_name: domain.domain_name.clone(),
            next_roll_date: response.nextroll_date,
            ds_records: response.ds_records,
            public_signing_key: response.public_key_signing_key,
            ..Default::default()
        })
    }

    pub fn delete_domain(&self, domain: &Domain) -> Result<(), NetkiError> {
        self.dispatch(&domain_uri(DOMAIN_PATH, &domain.domain_name), Method::DELETE, "")?;
        info!(target: "audit", domain = domain.domain_name.as_str(); "Domain deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};

    use super::*;
    use crate::http::{Credentials, mock::MockRequester};

    const CREATED: &str =
        r#"{"domain_name":"domain.com","nameservers":["ns1.domain.com","ns2.domain.com"],"status":"completed"}"#;

    fn partner_with(requester: MockRequester) -> NetkiPartner<MockRequester> {
        NetkiPartner::with_requester(Credentials::default(), requester)
    }

    #[test]
    fn test_create_new_domain() {
        let partner = partner_with(MockRequester::returning(CREATED));

        let domain = partner
            .create_new_domain("domain.com", Some(&Partner::new("partner_id", "")))
            .unwrap();

        let call = partner.requester().called();
        assert_eq!(call.uri, "/v1/partner/domain/domain.com");
        assert_eq!(call.method, "POST");
        assert_eq!(call.body, r#"{"partner_id":"partner_id"}"#);
        assert_eq!(domain.domain_name, "domain.com");
        assert_eq!(domain.status, "completed");
        assert_eq!(domain.nameservers, vec!["ns1.domain.com", "ns2.domain.com"]);
    }

    #[test]
    fn test_create_new_domain_empty_partner() {
        let partner = partner_with(MockRequester::returning(CREATED));

        partner
            .create_new_domain("domain.com", Some(&Partner::default()))
            .unwrap();
        assert_eq!(partner.requester().called().body, "{}");

        partner.create_new_domain("domain.com", None).unwrap();
        assert_eq!(partner.requester().called().body, "{}");
    }

    #[test]
    fn test_create_new_domain_error() {
        let partner = partner_with(MockRequester::failing("Error Message"));

        let result = partner.create_new_domain("domain.com", None);

        assert_eq!(result.as_ref().unwrap_err().to_string(), "Error Message");
        let call = partner.requester().called();
        assert_eq!(call.uri, "/v1/partner/domain/domain.com");
        assert_eq!(call.method, "POST");
        assert_eq!(call.body, "{}");

        let domain = result.unwrap_or_default();
        assert_eq!(domain.domain_name, "");
        assert_eq!(domain.status, "");
        assert!(domain.nameservers.is_empty());
    }

    #[test]
    fn test_get_domains() {
        let partner = partner_with(MockRequester::returning(
            r#"{"domains":[{"domain_name":"domain1.com"},{"domain_name":"domain2.com"}]}"#,
        ));

        let domains = partner.get_domains().unwrap();

        let call = partner.requester().called();
        assert_eq!(call.uri, "/api/domain");
        assert_eq!(call.method, "GET");
        assert_eq!(call.body, "");
        assert_eq!(domains, vec![Domain::new("domain1.com"), Domain::new("domain2.com")]);
    }

    #[test]
    fn test_get_domains_null_list() {
        let partner = partner_with(MockRequester::returning(r#"{"domains":null}"#));

        assert!(partner.get_domains().unwrap().is_empty());
    }

    #[test]
    fn test_get_domains_error() {
        let partner = partner_with(MockRequester::failing("Error Message"));

        let result = partner.get_domains();

        assert_eq!(result.as_ref().unwrap_err().to_string(), "Error Message");
        assert_eq!(partner.requester().called().uri, "/api/domain");
        assert!(result.unwrap_or_default().is_empty());
    }

    #[test]
    fn test_get_domain_status() {
        let partner = partner_with(MockRequester::returning(
            r#"{"status":"completed","delegation_status":true,"delegation_message":"delegation completed","wallet_name_count":42}"#,
        ));

        let domain = partner
            .get_domain_status(&Domain::new("domain.com"))
            .unwrap();

        let call = partner.requester().called();
        assert_eq!(call.uri, "/v1/partner/domain/domain.com");
        assert_eq!(call.method, "GET");
        assert_eq!(call.body, "");
        assert_eq!(domain.domain_name, "domain.com");
        assert_eq!(domain.status, "completed");
        assert!(domain.delegation_status);
        assert_eq!(domain.delegation_message, "delegation completed");
        assert_eq!(domain.wallet_name_count, 42);
    }

    #[test]
    fn test_get_domain_status_null_fields() {
        let partner = partner_with(MockRequester::returning(
            r#"{"status":"completed","delegation_status":null,"delegation_message":null,"wallet_name_count":null}"#,
        ));

        let domain = partner
            .get_domain_status(&Domain::new("domain.com"))
            .unwrap();

        assert_eq!(domain.status, "completed");
        assert!(!domain.delegation_status);
        assert_eq!(domain.delegation_message, "");
        assert_eq!(domain.wallet_name_count, 0);
    }

    #[test]
    fn test_get_domain_status_error() {
        let partner = partner_with(MockRequester::failing("Error Message"));

        let err = partner
            .get_domain_status(&Domain::new("domain.com"))
            .unwrap_err();

        assert_eq!(err.to_string(), "Error Message");
        let call = partner.requester().called();
        assert_eq!(call.uri, "/v1/partner/domain/domain.com");
        assert_eq!(call.method, "GET");
    }

    #[test]
    fn test_get_domain_dnssec() {
        let partner = partner_with(MockRequester::returning(
            r#"{"nextroll_date":"2015-06-13T02:35:12.543Z","ds_records":["record 1","record 2"], "public_key_signing_key":"publickey"}"#,
        ));

        let domain = partner
            .get_domain_dnssec(&Domain::new("domain.com"))
            .unwrap();

        let call = partner.requester().called();
        assert_eq!(call.uri, "/v1/partner/domain/dnssec/domain.com");
        assert_eq!(call.method, "GET");
        assert_eq!(call.body, "");
        assert_eq!(domain.domain_name, "domain.com");

        let roll = domain.next_roll_date.unwrap();
        assert_eq!((roll.year(), roll.month(), roll.day()), (2015, 6, 13));
        assert_eq!((roll.hour(), roll.minute(), roll.second()), (2, 35, 12));
        assert_eq!(roll.nanosecond(), 543_000_000);

        assert_eq!(domain.ds_records, vec!["record 1", "record 2"]);
        assert_eq!(domain.public_signing_key, "publickey");
    }

    #[test]
    fn test_get_domain_dnssec_null_fields() {
        let partner = partner_with(MockRequester::returning(
            r#"{"nextroll_date":null,"ds_records":null,"public_key_signing_key":null}"#,
        ));

        let domain = partner
            .get_domain_dnssec(&Domain::new("domain.com"))
            .unwrap();

        assert_eq!(domain.domain_name, "domain.com");
        assert!(domain.next_roll_date.is_none());
        assert!(domain.ds_records.is_empty());
        assert_eq!(domain.public_signing_key, "");
    }

    #[test]
    fn test_get_domain_dnssec_error() {
        let partner = partner_with(MockRequester::failing("Error Message"));

        let result = partner.get_domain_dnssec(&Domain::new("domain.com"));

        assert_eq!(result.as_ref().unwrap_err().to_string(), "Error Message");
        assert_eq!(partner.requester().called().uri, "/v1/partner/domain/dnssec/domain.com");
        assert_eq!(result.unwrap_or_default().domain_name, "");
    }

    #[test]
    fn test_delete_domain() {
        let partner = partner_with(MockRequester::returning(""));

        partner.delete_domain(&Domain::new("domain.com")).unwrap();

        let call = partner.requester().called();
        assert_eq!(call.uri, "/v1/partner/domain/domain.com");
        assert_eq!(call.method, "DELETE");
        assert_eq!(call.body, "");
    }

    #[test]
    fn test_delete_domain_error() {
        let partner = partner_with(MockRequester::failing("Error Message"));

        let err = partner.delete_domain(&Domain::new("domain.com")).unwrap_err();

        assert_eq!(err.to_string(), "Error Message");
    }
}
