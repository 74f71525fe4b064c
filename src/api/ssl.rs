use std::sync::OnceLock;

use regex::Regex;
use serde::{
    ser::{SerializeStruct as _, Serializer},
    Deserialize, Serialize,
};

use crate::{
    error::ValidationError,
    page::{ListQuery, Query},
};

/// Auto-renewal state of a certificate with no renewal planned.
pub const AUTO_RENEW_NOT_SCHEDULED: &str = "Not scheduled";

/// Auto-renewal state of a certificate with a renewal planned.
pub const AUTO_RENEW_SCHEDULED: &str = "Scheduled";

const MAX_CSR_LEN: usize = 32767;
const MAX_COMMENTS_LEN: usize = 1024;
const MAX_CUSTOM_FIELD_LEN: usize = 256;

static RE_CSR: OnceLock<Regex> = OnceLock::new();

fn re_csr() -> &'static Regex {
    RE_CSR.get_or_init(|| Regex::new(r"^[a-zA-Z0-9\-+=/\t\n\f\r ]+$").unwrap())
}

/// Query for listing SSL certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSslParams {
    pub size: u32,
    pub position: u32,
    pub common_name: Option<String>,
    pub subject_alternative_name: Option<String>,
    pub status: Option<String>,
    pub ssl_type_id: Option<i64>,
    pub discovery_status: Option<String>,
    pub vendor: Option<String>,
    pub org_id: Option<i64>,
    pub install_status: Option<String>,
    pub renewal_status: Option<String>,
    pub issuer: Option<String>,
    pub serial_number: Option<String>,
    pub requester: Option<String>,
    pub external_requester: Option<String>,
    pub signature_algorithm: Option<String>,
    pub key_algorithm: Option<String>,
    pub key_size: Option<u32>,
    pub key_param: Option<String>,
    pub sha1_hash: Option<String>,
    pub md5_hash: Option<String>,
    pub key_usage: Option<String>,
    pub extended_key_usage: Option<String>,
    pub requested_via: Option<String>,
}

impl ListQuery for ListSslParams {
    type Item = SslCertificate;

    fn path(&self) -> String {
        "/api/ssl/v1".to_owned()
    }

    fn set_window(&mut self, position: u32, size: u32) {
        self.position = position;
        self.size = size;
    }

    fn query(&self, query: &mut Query) {
        query.push("size", self.size);
        query.push("position", self.position);
        query.push_opt("commonName", self.common_name.as_ref());
        query.push_opt(
            "subjectAlternativeName",
            self.subject_alternative_name.as_ref(),
        );
        query.push_opt("status", self.status.as_ref());
        query.push_opt("sslTypeId", self.ssl_type_id.as_ref());
        query.push_opt("discoveryStatus", self.discovery_status.as_ref());
        query.push_opt("vendor", self.vendor.as_ref());
        query.push_opt("orgId", self.org_id.as_ref());
        query.push_opt("installStatus", self.install_status.as_ref());
        query.push_opt("renewalStatus", self.renewal_status.as_ref());
        query.push_opt("issuer", self.issuer.as_ref());
        query.push_opt("serialNumber", self.serial_number.as_ref());
        query.push_opt("requester", self.requester.as_ref());
        query.push_opt("externalRequester", self.external_requester.as_ref());
        query.push_opt("signatureAlgorithm", self.signature_algorithm.as_ref());
        query.push_opt("keyAlgorithm", self.key_algorithm.as_ref());
        query.push_opt("keySize", self.key_size.as_ref());
        query.push_opt("keyParam", self.key_param.as_ref());
        query.push_opt("sha1Hash", self.sha1_hash.as_ref());
        query.push_opt("md5Hash", self.md5_hash.as_ref());
        query.push_opt("keyUsage", self.key_usage.as_ref());
        query.push_opt("extendedKeyUsage", self.extended_key_usage.as_ref());
        query.push_opt("requestedVia", self.requested_via.as_ref());
    }
}

/// A certificate as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SslCertificate {
    pub ssl_id: i64,
    pub common_name: String,
    pub subject_alternative_names: Vec<String>,
    pub serial_number: Option<String>,
}

/// Payload for revoking a certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevokeSslRequest {
    pub reason: String,
}

impl RevokeSslRequest {
    /// Checks the reason is between 1 and 512 bytes long.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=512).contains(&self.reason.len()) {
            return Err(ValidationError::new(
                "reason must be between 1 and 512 characters",
            ));
        }

        Ok(())
    }
}

/// The full record of a certificate.
///
/// # Example JSON
///
/// ```json
/// {
///   "commonName": "example.com",
///   "sslId": 123,
///   "id": 123,
///   "orgId": 1,
///   "status": "Issued",
///   "orderNumber": 456,
///   "backendCertId": "backend-123",
///   "vendor": "Sectigo",
///   "certType": { "id": 1, "name": "SSL", "terms": [365] },
///   "term": 365,
///   "owner": "owner",
///   "requester": "requester",
///   "requested": "2023-01-01",
///   "expires": "2024-01-01",
///   "serialNumber": "123456",
///   "keyAlgorithm": "RSA",
///   "keySize": 2048,
///   "subjectAlternativeNames": ["www.example.com"],
///   "autoRenewDetails": { "state": "Scheduled", "daysBeforeExpiration": 30 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SslDetails {
    pub common_name: String,
    pub ssl_id: i64,
    pub id: i64,
    pub org_id: i64,
    pub status: Option<String>,
    pub order_number: Option<i64>,
    pub backend_cert_id: Option<String>,
    pub vendor: Option<String>,
    pub cert_type: Option<CertType>,
    pub sub_type: Option<String>,
    pub validation_type: Option<String>,
    pub term: Option<i64>,
    pub owner: Option<String>,
    pub owner_id: Option<i64>,
    pub requester: Option<String>,
    pub requester_id: Option<i64>,
    pub requested_via: Option<String>,
    pub external_requester: Option<String>,
    pub comments: Option<String>,
    pub requested: Option<String>,
    pub approved: Option<String>,
    pub issued: Option<String>,
    pub declined: Option<String>,
    pub expires: Option<String>,
    pub replaced: Option<String>,
    pub revoked: Option<String>,
    pub reason_code: Option<i64>,
    pub renewed: bool,
    pub renewed_date: Option<String>,
    pub serial_number: Option<String>,
    pub signature_alg: Option<String>,
    pub key_algorithm: Option<String>,
    pub key_size: Option<u32>,
    pub key_type: Option<String>,
    pub key_usages: Vec<String>,
    pub extended_key_usages: Vec<String>,
    pub subject_alternative_names: Vec<String>,
    pub custom_fields: Vec<CustomField>,
    pub certificate_details: Option<CertificateDetails>,
    pub auto_install_details: Option<AutoInstallDetails>,
    pub auto_renew_details: Option<AutoRenewDetails>,
    pub suspend_notifications: bool,
}

/// Certificate profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertType {
    pub id: i64,
    pub use_secondary_org_name: bool,
    pub name: String,
    pub description: Option<String>,
    pub terms: Vec<i64>,
    pub key_types: Option<KeyTypes>,
}

/// Key types allowed by a certificate profile, e.g. `2048` for RSA or `P-256` for EC.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyTypes {
    pub rsa: Vec<String>,
    pub ec: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CertificateDetails {
    pub issuer: Option<String>,
    pub subject: Option<String>,
    pub subject_alt_names: Option<String>,
    pub md5_hash: Option<String>,
    pub sha1_hash: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoInstallDetails {
    pub state: Option<String>,
    pub nodes: Vec<NodeInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeInfo {
    pub name: String,
    pub port: u16,
}

/// Auto-renewal policy of a certificate.
///
/// An unset policy (empty state, zero days) serializes to `null`, which the API reads as
/// "no policy". Anything else serializes as an object carrying both fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoRenewDetails {
    /// Either [`AUTO_RENEW_NOT_SCHEDULED`] or [`AUTO_RENEW_SCHEDULED`].
    pub state: String,
    pub days_before_expiration: i64,
}

impl AutoRenewDetails {
    pub fn is_unset(&self) -> bool {
        self.state.is_empty() && self.days_before_expiration == 0
    }
}

impl Serialize for AutoRenewDetails {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_unset() {
            return serializer.serialize_none();
        }

        let mut st = serializer.serialize_struct("AutoRenewDetails", 2)?;
        st.serialize_field("state", &self.state)?;
        st.serialize_field("daysBeforeExpiration", &self.days_before_expiration)?;
        st.end()
    }
}

/// Payload for updating a certificate.
///
/// Only `ssl_id` is mandatory; fields left as `None` are not sent and keep their current
/// value on the server. [`validate()`] applies the API's field constraints locally.
///
/// [`validate()`]: UpdateSslDetailsRequest::validate()
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSslDetailsRequest {
    pub ssl_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_type_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub csr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_requester: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_alternative_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomField>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_renew_details: Option<AutoRenewDetails>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend_notifications: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester_admin_id: Option<i64>,

    /// `-1` is accepted by the API as a sentinel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_admin_id: Option<i64>,
}

impl UpdateSslDetailsRequest {
    pub fn new(ssl_id: i64) -> Self {
        Self {
            ssl_id,
            ..Default::default()
        }
    }

    /// Checks the request against the API's field constraints, returning the first violation.
    pub fn validate(&self) -> Result<(), ValidationError> {
        // zero stands for "not provided"
        fn at_least(name: &str, value: Option<i64>, min: i64) -> Result<(), ValidationError> {
            match value {
                Some(value) if value != 0 && value < min => Err(ValidationError::new(format!(
                    "{name} must be at least {min}"
                ))),
                _ => Ok(()),
            }
        }

        if self.ssl_id < 1 {
            return Err(ValidationError::new("sslId must be at least 1"));
        }

        at_least("term", self.term, 1)?;
        at_least("certTypeId", self.cert_type_id, 1)?;
        at_least("orgId", self.org_id, 1)?;

        if let Some(csr) = self.csr.as_deref().filter(|csr| !csr.is_empty()) {
            if !re_csr().is_match(csr) {
                return Err(ValidationError::new(
                    r"csr must match the regular expression [a-zA-Z0-9-+=\/\s]+",
                ));
            }

            if csr.len() > MAX_CSR_LEN {
                return Err(ValidationError::new(
                    "csr size must be between 1 and 32767 inclusive",
                ));
            }
        }

        if let Some(comments) = &self.comments {
            if comments.len() > MAX_COMMENTS_LEN {
                return Err(ValidationError::new(
                    "comments maximum length is 1024 characters or can be empty",
                ));
            }
        }

        for field in self.custom_fields.iter().flatten() {
            if field.name.is_empty() {
                return Err(ValidationError::new("custom field name must not be null"));
            }

            if field.name.len() > MAX_CUSTOM_FIELD_LEN {
                return Err(ValidationError::new(
                    "custom field name size must be between 1 and 256 inclusive",
                ));
            }

            if field.value.len() > MAX_CUSTOM_FIELD_LEN {
                return Err(ValidationError::new(
                    "custom field value maximum length is 256 characters or can be empty",
                ));
            }
        }

        if let Some(auto_renew) = &self.auto_renew_details {
            if !auto_renew.state.is_empty()
                && auto_renew.state != AUTO_RENEW_NOT_SCHEDULED
                && auto_renew.state != AUTO_RENEW_SCHEDULED
            {
                return Err(ValidationError::new(
                    "autoRenewDetails.state allowed values are 'Not scheduled' and 'Scheduled'",
                ));
            }

            at_least(
                "autoRenewDetails.daysBeforeExpiration",
                Some(auto_renew.days_before_expiration),
                1,
            )?;
        }

        at_least("requesterAdminId", self.requester_admin_id, 1)?;
        at_least("approverAdminId", self.approver_admin_id, -1)?;

        Ok(())
    }
}
