use serde::{Deserialize, Serialize};

use crate::page::{ListQuery, Query};

/// An ACME account bound to an organization.
///
/// # Example JSON
///
/// ```json
/// {
///   "id": 1,
///   "accountId": "acc-123",
///   "macId": "mac-123",
///   "macKey": "key-123",
///   "acmeServer": "https://acme.sectigo.com/v2/OV",
///   "name": "ACME Account 1",
///   "organizationId": 1,
///   "certValidationType": "OV",
///   "status": "Valid",
///   "ovOrderNumber": 12345,
///   "ovAnchorID": "anchor-1",
///   "evDetails": {},
///   "contacts": "admin@example.com"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcmeAccount {
    pub id: i64,
    pub account_id: Option<String>,
    pub mac_id: Option<String>,
    pub mac_key: Option<String>,
    pub acme_server: Option<String>,
    pub name: Option<String>,
    pub organization_id: i64,
    pub cert_validation_type: Option<String>,
    pub status: Option<String>,
    pub ov_order_number: Option<i64>,

    #[serde(rename = "ovAnchorID")]
    pub ov_anchor_id: Option<String>,

    /// Opaque EV order details.
    pub ev_details: Option<serde_json::Value>,

    pub contacts: Option<String>,
}

/// Query for listing ACME accounts.
///
/// `organization_id` is always sent, as the API requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAcmeAccountParams {
    pub size: u32,
    pub position: u32,
    pub organization_id: i64,
    pub name: Option<String>,
    pub acme_server: Option<String>,
    pub cert_validation_type: Option<String>,
    pub status: Option<String>,
}

impl ListQuery for ListAcmeAccountParams {
    type Item = AcmeAccount;

    fn path(&self) -> String {
        "/api/acme/v2/account".to_owned()
    }

    fn set_window(&mut self, position: u32, size: u32) {
        self.position = position;
        self.size = size;
    }

    fn query(&self, query: &mut Query) {
        query.push("size", self.size);
        query.push("position", self.position);
        query.push("organizationId", self.organization_id);
        query.push_opt("name", self.name.as_ref());
        query.push_opt("acmeServer", self.acme_server.as_ref());
        query.push_opt("certValidationType", self.cert_validation_type.as_ref());
        query.push_opt("status", self.status.as_ref());
    }
}

/// A domain bound to an ACME account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AcmeAccountDomain {
    pub name: String,
    pub valid_until: Option<String>,
    pub sticky_until: Option<String>,
    pub ov_anchor_order_number: Option<i64>,

    #[serde(rename = "ovAnchorID")]
    pub ov_anchor_id: Option<String>,

    pub ev_anchor_order_number: Option<i64>,

    #[serde(rename = "evAnchorID")]
    pub ev_anchor_id: Option<String>,
}

/// Query for listing the domains of one ACME account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListAcmeAccountDomainParams {
    /// Account whose domains are listed. Part of the path, not the query.
    pub account_id: i64,
    pub size: u32,
    pub position: u32,
    pub name: Option<String>,
    pub expires_within_next_days: Option<u32>,
    pub sticky_expires_within_next_days: Option<i32>,
}

impl ListQuery for ListAcmeAccountDomainParams {
    type Item = AcmeAccountDomain;

    fn path(&self) -> String {
        format!("/api/acme/v2/account/{}/domain", self.account_id)
    }

    fn set_window(&mut self, position: u32, size: u32) {
        self.position = position;
        self.size = size;
    }

    fn query(&self, query: &mut Query) {
        query.push("size", self.size);
        query.push("position", self.position);
        query.push_opt("name", self.name.as_ref());
        query.push_opt("expiresWithinNextDays", self.expires_within_next_days.as_ref());

        // negative values are meaningful here, only zero is left out
        if let Some(days) = self.sticky_expires_within_next_days.filter(|days| *days != 0) {
            query.push("stickyExpiresWithinNextDays", days);
        }
    }
}

/// Name-only domain record used when adding domains to an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcmeAccountDomainName {
    pub name: String,
}

/// Payload for adding domains to an ACME account.
///
/// # Example JSON
///
/// ```json
/// {
///   "domains": [
///     { "name": "example.com" },
///     { "name": "example.org" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAcmeAccountDomainsRequest {
    pub domains: Vec<AcmeAccountDomainName>,
}

impl AddAcmeAccountDomainsRequest {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            domains: names
                .into_iter()
                .map(|name| AcmeAccountDomainName { name: name.into() })
                .collect(),
        }
    }
}
