use serde::{Deserialize, Serialize};

use crate::page::{ListQuery, Query};

/// Validation status reported while a domain has not passed DCV yet.
pub const NOT_VALIDATED: &str = "NOT_VALIDATED";

/// Payload naming the domain for the CNAME start/submit and status calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainValidationRequest {
    pub domain: String,
}

impl DomainValidationRequest {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

/// The CNAME record to publish for validating a domain.
///
/// # Example JSON
///
/// ```json
/// {
///   "host": "_ff38a7c1b4e1c8a4a95c9a0d34e1a94c.example.com.",
///   "point": "6b1b9cd1e3c4d5b2a10a8a5b6d8c2e7f.sectigo.com."
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnameValidation {
    pub host: String,
    pub point: String,
}

/// Outcome of submitting a CNAME validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CnameValidationSubmission {
    pub order_status: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
}

/// Current DCV status of a domain.
///
/// # Example JSON
///
/// ```json
/// {
///   "status": "VALIDATED",
///   "orderStatus": "NOT_INITIATED",
///   "expirationDate": "2025-06-01"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainValidationStatus {
    pub status: String,
    pub order_status: Option<String>,
    pub expiration_date: Option<String>,
}

impl DomainValidationStatus {
    /// Returns true if status is "NOT_VALIDATED".
    pub fn is_not_validated(&self) -> bool {
        self.status == NOT_VALIDATED
    }
}

/// DCV state of one domain, as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainValidation {
    pub domain: String,
    pub dcv_status: Option<String>,
    pub dcv_order_status: Option<String>,
    pub dcv_method: Option<String>,
}

/// Query for listing domain validations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDomainValidationParams {
    pub size: u32,
    pub position: u32,
    pub domain: Option<String>,
    pub org: Option<i64>,
    pub department: Option<i64>,
    pub dcv_status: Option<String>,
    pub order_status: Option<String>,

    /// Only domains whose validation expires within this many days.
    pub expires_in: Option<u32>,
}

impl ListQuery for ListDomainValidationParams {
    type Item = DomainValidation;

    fn path(&self) -> String {
        "/api/dcv/v1/validation".to_owned()
    }

    fn set_window(&mut self, position: u32, size: u32) {
        self.position = position;
        self.size = size;
    }

    fn query(&self, query: &mut Query) {
        query.push("size", self.size);
        query.push("position", self.position);
        query.push_opt("domain", self.domain.as_ref());
        query.push_opt("org", self.org.as_ref());
        query.push_opt("department", self.department.as_ref());
        query.push_opt("dcvStatus", self.dcv_status.as_ref());
        query.push_opt("orderStatus", self.order_status.as_ref());
        query.push_opt("expiresIn", self.expires_in.as_ref());
    }
}
